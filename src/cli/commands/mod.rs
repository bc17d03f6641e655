pub mod check;
pub mod config;
pub mod errors;
pub mod init;
pub mod report;
pub mod state;
