fn main() -> anyhow::Result<()> {
    reviewload::initialize_command_line()
}
