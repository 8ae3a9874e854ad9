pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod log;
pub mod notify;
pub mod privilege;
pub mod resolve;
pub mod runner;

pub use error::{Error, Result};
