pub mod assignment;
pub mod config;
pub mod summary;
pub mod user;
