pub mod config;
pub mod error;
pub mod neighbor;
pub mod utils;
