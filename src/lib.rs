pub mod commands;
pub mod interpreter;
pub mod persistence;
pub mod ranking;
pub mod record;
pub mod reply;
pub mod store;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
