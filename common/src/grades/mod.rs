//! Grade grid state: cell keys, score parsing and the edit reconciler.

pub mod key;
pub mod reconciler;
pub mod score;

pub use key::GradeKey;
pub use reconciler::{GradeReconciler, NothingToSave};
pub use score::Score;
