pub mod run_virtual_user;

pub use run_virtual_user::{RunVirtualUserInterface, VirtualUserReport};
