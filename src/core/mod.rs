pub mod config;
pub mod dates;
pub mod db;

pub use config::*;
