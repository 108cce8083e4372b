use common::editor::LoadedAssignment;
use common::model::assignment::AssessmentId;
use yew::NodeRef;

pub struct GradeInputPage {
    /// `None` until the first fetch answers.
    pub data: Option<LoadedAssignment>,
    pub load_error: Option<String>,

    /// Text of the new-assessment form.
    pub new_assessment_name: String,
    /// Shown under the form until the name is edited again.
    pub assessment_name_error: Option<String>,
    pub creating: bool,

    /// Assessment waiting for the answer of the confirmation sheet.
    pub pending_delete: Option<AssessmentId>,
    pub deleting: bool,
    pub confirm_sheet_ref: NodeRef,

    /// The grid and the save button are disabled while a save is in flight,
    /// so the edits sent are exactly the edits committed afterwards.
    pub saving: bool,
}

impl GradeInputPage {
    pub fn new() -> Self {
        Self {
            data: None,
            load_error: None,
            new_assessment_name: String::new(),
            assessment_name_error: None,
            creating: false,
            pending_delete: None,
            deleting: false,
            confirm_sheet_ref: NodeRef::default(),
            saving: false,
        }
    }

    pub fn has_pending_changes(&self) -> bool {
        self.data
            .as_ref()
            .is_some_and(|data| data.grades.has_pending_changes())
    }

    /// Name of the assessment waiting for delete confirmation.
    pub fn pending_delete_name(&self) -> Option<&str> {
        let id = self.pending_delete?;
        self.data
            .as_ref()
            .and_then(|data| data.assignment.assessment(id))
            .map(|a| a.name.as_str())
    }

    pub fn busy(&self) -> bool {
        self.saving || self.creating || self.deleting
    }
}
