use common::model::assignment::AssignmentId;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::app::Page;

#[derive(Properties, PartialEq, Clone)]
pub struct GradeInputProps {
    pub api: ApiClient,
    pub assignment_id: AssignmentId,
    /// Used by the back link.
    pub on_navigate: Callback<Page>,
}
