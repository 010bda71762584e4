// 📊 CGPA Aggregator - credit-weighted average over completed courses
// Incomplete (I) courses are excluded from the average and reported by name

use crate::ledger::CourseRecord;
use crate::scale::LetterGrade;
use serde::{Deserialize, Serialize};

// ============================================================================
// OUTCOME
// ============================================================================

/// Why a CGPA could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoResultReason {
    /// The ledger has no courses at all.
    EmptyLedger,
    /// Every course in the ledger is marked incomplete.
    AllIncomplete,
}

impl NoResultReason {
    pub fn message(&self) -> &'static str {
        match self {
            NoResultReason::EmptyLedger => "No courses added yet.",
            NoResultReason::AllIncomplete => "All courses are incomplete.",
        }
    }
}

/// Result of a CGPA computation over the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CgpaOutcome {
    Computed {
        /// Credit-weighted average grade point, rounded to 2 decimals.
        cgpa: f64,
        /// Names of incomplete courses, in ledger order.
        incomplete: Vec<String>,
    },
    NoCompletedCourses { reason: NoResultReason },
}

impl CgpaOutcome {
    pub fn cgpa(&self) -> Option<f64> {
        match self {
            CgpaOutcome::Computed { cgpa, .. } => Some(*cgpa),
            CgpaOutcome::NoCompletedCourses { .. } => None,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            CgpaOutcome::Computed { cgpa, incomplete } if incomplete.is_empty() => {
                format!("CGPA: {:.2} (all courses completed)", cgpa)
            }
            CgpaOutcome::Computed { cgpa, incomplete } => {
                format!(
                    "CGPA: {:.2} ({} course(s) incomplete: {})",
                    cgpa,
                    incomplete.len(),
                    incomplete.join(", ")
                )
            }
            CgpaOutcome::NoCompletedCourses { reason } => reason.message().to_string(),
        }
    }
}

// ============================================================================
// AGGREGATION
// ============================================================================

/// Compute the CGPA over `courses`.
///
/// Pure function of its input: the ledger is never mutated, so repeated
/// calls on the same slice agree. Division by zero cannot occur - the
/// credit sum is only used when at least one completed course exists and
/// credits are positive.
pub fn compute_cgpa(courses: &[CourseRecord]) -> CgpaOutcome {
    let completed: Vec<&CourseRecord> =
        courses.iter().filter(|c| !c.is_incomplete()).collect();

    if completed.is_empty() {
        let reason = if courses.is_empty() {
            NoResultReason::EmptyLedger
        } else {
            NoResultReason::AllIncomplete
        };
        return CgpaOutcome::NoCompletedCourses { reason };
    }

    let total_credits: u32 = completed.iter().map(|c| c.credits).sum();
    let weighted_sum: f64 = completed
        .iter()
        .map(|c| f64::from(c.grade.grade_point()) * f64::from(c.credits))
        .sum();

    let cgpa = (weighted_sum / f64::from(total_credits) * 100.0).round() / 100.0;

    let incomplete: Vec<String> = courses
        .iter()
        .filter(|c| c.grade == LetterGrade::I)
        .map(|c| c.name.clone())
        .collect();

    CgpaOutcome::Computed { cgpa, incomplete }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, credits: u32, grade: LetterGrade) -> CourseRecord {
        CourseRecord::new(name, credits, grade)
    }

    #[test]
    fn test_single_completed_course() {
        let courses = vec![course("Algorithms", 3, LetterGrade::O)];
        let outcome = compute_cgpa(&courses);
        assert_eq!(outcome.cgpa(), Some(10.0));
    }

    #[test]
    fn test_incomplete_courses_excluded() {
        let courses = vec![
            course("Algorithms", 3, LetterGrade::O),
            course("Networks", 2, LetterGrade::I),
        ];

        match compute_cgpa(&courses) {
            CgpaOutcome::Computed { cgpa, incomplete } => {
                assert_eq!(cgpa, 10.0);
                assert_eq!(incomplete, vec!["Networks".to_string()]);
            }
            other => panic!("expected computed outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_credit_weighting() {
        // (10*4 + 6*2) / 6 = 52/6 = 8.666... -> 8.67
        let courses = vec![
            course("Heavy", 4, LetterGrade::O),
            course("Light", 2, LetterGrade::B),
        ];
        assert_eq!(compute_cgpa(&courses).cgpa(), Some(8.67));
    }

    #[test]
    fn test_all_incomplete() {
        let courses = vec![course("Pending", 3, LetterGrade::I)];
        assert_eq!(
            compute_cgpa(&courses),
            CgpaOutcome::NoCompletedCourses {
                reason: NoResultReason::AllIncomplete
            }
        );
    }

    #[test]
    fn test_empty_ledger() {
        assert_eq!(
            compute_cgpa(&[]),
            CgpaOutcome::NoCompletedCourses {
                reason: NoResultReason::EmptyLedger
            }
        );
    }

    #[test]
    fn test_incomplete_names_keep_ledger_order() {
        let courses = vec![
            course("Zeta", 3, LetterGrade::I),
            course("Done", 3, LetterGrade::A),
            course("Alpha", 2, LetterGrade::I),
        ];

        match compute_cgpa(&courses) {
            CgpaOutcome::Computed { incomplete, .. } => {
                assert_eq!(incomplete, vec!["Zeta".to_string(), "Alpha".to_string()]);
            }
            other => panic!("expected computed outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_idempotent_over_same_slice() {
        let courses = vec![
            course("One", 3, LetterGrade::BPlus),
            course("Two", 4, LetterGrade::C),
            course("Three", 1, LetterGrade::I),
        ];

        let first = compute_cgpa(&courses);
        let second = compute_cgpa(&courses);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_lines() {
        let done = compute_cgpa(&[course("Solo", 3, LetterGrade::A)]);
        assert_eq!(done.summary(), "CGPA: 8.00 (all courses completed)");

        let none = compute_cgpa(&[]);
        assert_eq!(none.summary(), "No courses added yet.");
    }
}
