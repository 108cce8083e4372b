//! Shared core of the SIAKAD grade client: wire model, grade reconciliation,
//! assessment editing flows, session handling and report content.

pub mod api;
pub mod editor;
pub mod grades;
pub mod model;
pub mod report;
pub mod requests;
pub mod session;

mod serde_helpers;
