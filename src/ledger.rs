// 📚 Course Ledger - session-scoped ordered list of course records
// Lives only in memory; cleared explicitly, never persisted

use crate::scale::LetterGrade;
use serde::{Deserialize, Serialize};

/// Fallback name for courses submitted without one.
pub const UNNAMED_COURSE: &str = "Unnamed course";

// ============================================================================
// COURSE RECORD
// ============================================================================

/// One course as entered by the student. Immutable once created; removed
/// only via a full ledger clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    /// Positive credit count - the form and report loader both enforce >= 1.
    pub credits: u32,
    pub grade: LetterGrade,
}

impl CourseRecord {
    /// Build a record from form input, substituting the fallback name when
    /// the field was left blank.
    pub fn new(name: &str, credits: u32, grade: LetterGrade) -> Self {
        let trimmed = name.trim();
        CourseRecord {
            name: if trimmed.is_empty() {
                UNNAMED_COURSE.to_string()
            } else {
                trimmed.to_string()
            },
            credits,
            grade,
        }
    }

    pub fn is_incomplete(&self) -> bool {
        self.grade == LetterGrade::I
    }
}

// ============================================================================
// COURSE LEDGER
// ============================================================================

/// Insertion-ordered sequence of course records for the current session.
#[derive(Debug, Clone, Default)]
pub struct CourseLedger {
    courses: Vec<CourseRecord>,
}

impl CourseLedger {
    pub fn new() -> Self {
        CourseLedger { courses: Vec::new() }
    }

    /// Append to the end. No dedup; the same course can be entered twice.
    pub fn append(&mut self, record: CourseRecord) {
        self.courses.push(record);
    }

    /// Empty the ledger. Irreversible - there is no undo.
    pub fn clear(&mut self) {
        self.courses.clear();
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_gets_fallback() {
        let record = CourseRecord::new("", 3, LetterGrade::A);
        assert_eq!(record.name, UNNAMED_COURSE);

        let record = CourseRecord::new("   ", 3, LetterGrade::A);
        assert_eq!(record.name, UNNAMED_COURSE);
    }

    #[test]
    fn test_name_is_trimmed() {
        let record = CourseRecord::new("  Data Structures  ", 4, LetterGrade::O);
        assert_eq!(record.name, "Data Structures");
    }

    #[test]
    fn test_append_preserves_order() {
        let mut ledger = CourseLedger::new();
        ledger.append(CourseRecord::new("First", 3, LetterGrade::A));
        ledger.append(CourseRecord::new("Second", 2, LetterGrade::I));
        ledger.append(CourseRecord::new("Third", 4, LetterGrade::B));

        let names: Vec<&str> = ledger.courses().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_clear_empties_ledger() {
        let mut ledger = CourseLedger::new();
        ledger.append(CourseRecord::new("Course", 3, LetterGrade::C));
        assert!(!ledger.is_empty());

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_record_json_shape() {
        let record = CourseRecord::new("Calculus", 4, LetterGrade::BPlus);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Calculus","credits":4,"grade":"B+"}"#);

        let back: CourseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
