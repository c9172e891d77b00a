pub mod pulls;
pub mod team;
pub mod users;
