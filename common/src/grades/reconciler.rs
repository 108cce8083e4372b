//! Tracks grade edits for one teaching assignment.
//!
//! Two maps share the same key space:
//! - `current` follows every keystroke in the grid;
//! - `baseline` is the last state the server acknowledged.
//!
//! The difference between them is what a save has to send. Only `commit`
//! moves the baseline, and only after the server accepted the update.

use std::collections::{BTreeMap, BTreeSet};

use crate::grades::key::GradeKey;
use crate::grades::score::Score;
use crate::model::assignment::{AssessmentId, Assignment, StudentId};
use crate::requests::{BulkGradeUpdate, GradeUpdate};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeReconciler {
    current: BTreeMap<GradeKey, Score>,
    baseline: BTreeMap<GradeKey, Score>,
}

/// Returned by `prepare_save` when there is nothing to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NothingToSave;

impl GradeReconciler {
    /// Builds both maps from the grades embedded in an assignment payload.
    pub fn initialize(assignment: &Assignment) -> Self {
        let mut grades = BTreeMap::new();
        for assessment in &assignment.assessments {
            for grade in &assessment.grades {
                grades.insert(
                    GradeKey::new(grade.student_id, assessment.id),
                    Score::from_server(grade.score),
                );
            }
        }
        Self {
            current: grades.clone(),
            baseline: grades,
        }
    }

    pub fn score(&self, student_id: StudentId, assessment_id: AssessmentId) -> Score {
        self.current
            .get(&GradeKey::new(student_id, assessment_id))
            .copied()
            .unwrap_or_default()
    }

    pub fn input_value(&self, student_id: StudentId, assessment_id: AssessmentId) -> String {
        self.score(student_id, assessment_id).input_value()
    }

    /// Applies raw grid input to `current`. Returns whether the stored value
    /// was replaced; unparseable input leaves the cell untouched.
    pub fn set_score(
        &mut self,
        student_id: StudentId,
        assessment_id: AssessmentId,
        raw_input: &str,
    ) -> bool {
        match Score::parse_input(raw_input) {
            Some(score) => {
                self.current
                    .insert(GradeKey::new(student_id, assessment_id), score);
                true
            }
            None => false,
        }
    }

    pub fn has_pending_changes(&self) -> bool {
        self.changed_keys().next().is_some()
    }

    /// Every cell whose normalized value differs from the baseline, in
    /// `(student_id, assessment_id)` order.
    pub fn compute_diff(&self) -> Vec<GradeUpdate> {
        self.changed_keys()
            .map(|key| GradeUpdate {
                student_id: key.student_id,
                assessment_id: key.assessment_id,
                score: normalized(&self.current, &key),
            })
            .collect()
    }

    pub fn prepare_save(&self) -> Result<BulkGradeUpdate, NothingToSave> {
        let grades = self.compute_diff();
        if grades.is_empty() {
            return Err(NothingToSave);
        }
        Ok(BulkGradeUpdate { grades })
    }

    /// Marks the whole current state as acknowledged by the server.
    pub fn commit(&mut self) {
        self.baseline = self.current.clone();
    }

    pub fn pending_count(&self) -> usize {
        self.changed_keys().count()
    }

    fn changed_keys(&self) -> impl Iterator<Item = GradeKey> + '_ {
        // Absent and Empty both normalize to None, so walking the key union
        // covers cells cleared after being typed into.
        let keys: BTreeSet<GradeKey> = self
            .current
            .keys()
            .chain(self.baseline.keys())
            .copied()
            .collect();
        keys.into_iter().filter(move |key| {
            normalized(&self.current, key) != normalized(&self.baseline, key)
        })
    }
}

fn normalized(map: &BTreeMap<GradeKey, Score>, key: &GradeKey) -> Option<f64> {
    map.get(key).and_then(|score| score.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::assignment::{Assessment, ClassInfo, GradeRecord, Subject};

    fn assignment_with(grades: &[(StudentId, AssessmentId, Option<f64>)]) -> Assignment {
        let mut assessments: Vec<Assessment> = Vec::new();
        for &(student_id, assessment_id, score) in grades {
            let record = GradeRecord { student_id, score };
            match assessments.iter_mut().find(|a| a.id == assessment_id) {
                Some(assessment) => assessment.grades.push(record),
                None => assessments.push(Assessment {
                    id: assessment_id,
                    name: format!("UH {}", assessment_id),
                    teaching_assignment_id: Some(1),
                    grades: vec![record],
                }),
            }
        }
        Assignment {
            id: 1,
            class: ClassInfo {
                id: Some(1),
                name: "III-A".to_string(),
                level: Some("3".to_string()),
                students: Vec::new(),
            },
            subject: Subject {
                id: Some(1),
                name: "Bahasa Indonesia".to_string(),
            },
            kkm: 75.0,
            assessments,
        }
    }

    #[test]
    fn fresh_state_has_no_pending_changes() {
        let reconciler = GradeReconciler::initialize(&assignment_with(&[
            (1, 1, Some(80.0)),
            (2, 1, None),
        ]));
        assert!(!reconciler.has_pending_changes());
        assert!(reconciler.compute_diff().is_empty());
        assert_eq!(reconciler.prepare_save(), Err(NothingToSave));
    }

    #[test]
    fn out_of_range_input_is_clamped_into_the_diff() {
        let mut reconciler = GradeReconciler::initialize(&assignment_with(&[(1, 1, Some(80.0))]));
        assert!(reconciler.set_score(1, 1, "150"));
        assert_eq!(reconciler.score(1, 1), Score::Value(100.0));
        assert_eq!(
            reconciler.compute_diff(),
            vec![GradeUpdate {
                student_id: 1,
                assessment_id: 1,
                score: Some(100.0),
            }]
        );
    }

    #[test]
    fn non_numeric_input_keeps_previous_value() {
        let mut reconciler = GradeReconciler::initialize(&assignment_with(&[(1, 1, Some(80.0))]));
        reconciler.set_score(1, 1, "65");
        assert!(!reconciler.set_score(1, 1, "enam lima"));
        assert_eq!(reconciler.score(1, 1), Score::Value(65.0));
    }

    #[test]
    fn clearing_a_saved_cell_sends_null() {
        let mut reconciler = GradeReconciler::initialize(&assignment_with(&[(4, 2, Some(90.0))]));
        reconciler.set_score(4, 2, "70");
        reconciler.set_score(4, 2, "");
        assert_eq!(
            reconciler.compute_diff(),
            vec![GradeUpdate {
                student_id: 4,
                assessment_id: 2,
                score: None,
            }]
        );
    }

    #[test]
    fn typing_then_clearing_an_unsaved_cell_is_not_a_change() {
        let mut reconciler = GradeReconciler::initialize(&assignment_with(&[(1, 1, Some(80.0))]));
        reconciler.set_score(3, 1, "55");
        assert!(reconciler.has_pending_changes());
        reconciler.set_score(3, 1, "");
        assert!(!reconciler.has_pending_changes());
        assert!(reconciler.compute_diff().is_empty());
    }

    #[test]
    fn clamping_onto_a_saved_boundary_is_not_a_change() {
        let mut reconciler = GradeReconciler::initialize(&assignment_with(&[
            (1, 1, Some(100.0)),
            (2, 1, Some(0.0)),
        ]));
        reconciler.set_score(1, 1, "120");
        reconciler.set_score(2, 1, "-5");
        assert!(!reconciler.has_pending_changes());
    }

    #[test]
    fn commit_moves_baseline_and_is_idempotent() {
        let mut reconciler = GradeReconciler::initialize(&assignment_with(&[(1, 1, Some(80.0))]));
        reconciler.set_score(1, 1, "85");
        reconciler.set_score(2, 1, "60");
        assert_eq!(reconciler.pending_count(), 2);

        reconciler.commit();
        let after_first = reconciler.clone();
        reconciler.commit();

        assert_eq!(reconciler, after_first);
        assert!(!reconciler.has_pending_changes());
        assert_eq!(reconciler.score(2, 1), Score::Value(60.0));
    }

    #[test]
    fn diff_is_ordered_by_student_then_assessment() {
        let mut reconciler = GradeReconciler::initialize(&assignment_with(&[]));
        reconciler.set_score(9, 1, "70");
        reconciler.set_score(2, 5, "71");
        reconciler.set_score(2, 3, "72");
        let keys: Vec<(StudentId, AssessmentId)> = reconciler
            .compute_diff()
            .iter()
            .map(|g| (g.student_id, g.assessment_id))
            .collect();
        assert_eq!(keys, vec![(2, 3), (2, 5), (9, 1)]);
    }

    #[test]
    fn diff_is_empty_exactly_when_nothing_is_pending() {
        let mut reconciler = GradeReconciler::initialize(&assignment_with(&[(1, 1, Some(80.0))]));
        for input in ["80", "80.0", "81", "", "80", "abc"] {
            reconciler.set_score(1, 1, input);
            assert_eq!(
                reconciler.compute_diff().is_empty(),
                !reconciler.has_pending_changes(),
                "after input {input:?}"
            );
        }
    }
}
