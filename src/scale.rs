// 🎓 Grade Scale - fixed letter grade → grade point mapping
// Process-wide constant: O..P are passing grades, L and I both carry 0 points
// but mean different things (engagement not met vs. course incomplete)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// LETTER GRADE (input alphabet)
// ============================================================================

/// A letter grade a student can hold or enter.
///
/// `L` = Learning Engagement not met, `I` = course incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    O,
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    P,
    L,
    I,
}

impl LetterGrade {
    /// All nine grades, highest first (the order selectors cycle through).
    pub const ALL: [LetterGrade; 9] = [
        LetterGrade::O,
        LetterGrade::APlus,
        LetterGrade::A,
        LetterGrade::BPlus,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::P,
        LetterGrade::L,
        LetterGrade::I,
    ];

    /// Grades enterable as a course's final grade (no L - engagement-only marker).
    pub const COURSE_GRADES: [LetterGrade; 8] = [
        LetterGrade::O,
        LetterGrade::APlus,
        LetterGrade::A,
        LetterGrade::BPlus,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::P,
        LetterGrade::I,
    ];

    /// Passing targets a predictor can aim for, lowest first.
    pub const TARGETS: [LetterGrade; 7] = [
        LetterGrade::P,
        LetterGrade::C,
        LetterGrade::B,
        LetterGrade::BPlus,
        LetterGrade::A,
        LetterGrade::APlus,
        LetterGrade::O,
    ];

    /// Fixed grade point for this letter.
    pub fn grade_point(&self) -> u8 {
        match self {
            LetterGrade::O => 10,
            LetterGrade::APlus => 9,
            LetterGrade::A => 8,
            LetterGrade::BPlus => 7,
            LetterGrade::B => 6,
            LetterGrade::C => 5,
            LetterGrade::P => 4,
            LetterGrade::L => 0,
            LetterGrade::I => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::O => "O",
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::P => "P",
            LetterGrade::L => "L",
            LetterGrade::I => "I",
        }
    }

    /// Parse the surface spelling. Unknown keys are a caller contract
    /// violation and fail loudly - no silent default.
    pub fn parse(key: &str) -> Result<Self> {
        match key.trim() {
            "O" => Ok(LetterGrade::O),
            "A+" => Ok(LetterGrade::APlus),
            "A" => Ok(LetterGrade::A),
            "B+" => Ok(LetterGrade::BPlus),
            "B" => Ok(LetterGrade::B),
            "C" => Ok(LetterGrade::C),
            "P" => Ok(LetterGrade::P),
            "L" => Ok(LetterGrade::L),
            "I" => Ok(LetterGrade::I),
            other => bail!("unknown grade key: {:?}", other),
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FINAL LETTER (output alphabet)
// ============================================================================

/// The letter a weighted grade point maps to. Adds F, which is never an
/// input grade - only an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalLetter {
    O,
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    P,
    F,
}

impl FinalLetter {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalLetter::O => "O",
            FinalLetter::APlus => "A+",
            FinalLetter::A => "A",
            FinalLetter::BPlus => "B+",
            FinalLetter::B => "B",
            FinalLetter::C => "C",
            FinalLetter::P => "P",
            FinalLetter::F => "F",
        }
    }

    pub fn is_passing(&self) -> bool {
        *self != FinalLetter::F
    }
}

impl fmt::Display for FinalLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_points() {
        assert_eq!(LetterGrade::O.grade_point(), 10);
        assert_eq!(LetterGrade::APlus.grade_point(), 9);
        assert_eq!(LetterGrade::P.grade_point(), 4);
        // L and I both score 0 but are distinct grades
        assert_eq!(LetterGrade::L.grade_point(), 0);
        assert_eq!(LetterGrade::I.grade_point(), 0);
        assert_ne!(LetterGrade::L, LetterGrade::I);
    }

    #[test]
    fn test_parse_all_spellings() {
        for grade in LetterGrade::ALL {
            let parsed = LetterGrade::parse(grade.as_str()).unwrap();
            assert_eq!(parsed, grade);
        }
    }

    #[test]
    fn test_parse_unknown_key_fails() {
        assert!(LetterGrade::parse("F").is_err());
        assert!(LetterGrade::parse("A-").is_err());
        assert!(LetterGrade::parse("").is_err());
    }

    #[test]
    fn test_serde_surface_spelling() {
        let json = serde_json::to_string(&LetterGrade::APlus).unwrap();
        assert_eq!(json, "\"A+\"");

        let back: LetterGrade = serde_json::from_str("\"B+\"").unwrap();
        assert_eq!(back, LetterGrade::BPlus);
    }

    #[test]
    fn test_targets_ascend() {
        let points: Vec<u8> = LetterGrade::TARGETS
            .iter()
            .map(|g| g.grade_point())
            .collect();
        let mut sorted = points.clone();
        sorted.sort_unstable();
        assert_eq!(points, sorted);
    }
}
