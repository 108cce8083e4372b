pub mod dashboard;
pub mod grades;
pub mod login;
pub mod summary;
