pub mod appointments;
pub mod sessions;
pub mod users;
