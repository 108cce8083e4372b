pub mod reports;
pub mod settings;
