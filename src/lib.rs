pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod interactive;
pub mod logging;
pub mod report;
pub mod session;
