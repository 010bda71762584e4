// Grade Compass - Core Library
// Pure grading arithmetic for the interactive UI, report mode, and tests

pub mod cgpa;
pub mod ledger;
pub mod predictor;
pub mod scale;

// Re-export commonly used types
pub use cgpa::{compute_cgpa, CgpaOutcome, NoResultReason};
pub use ledger::{CourseLedger, CourseRecord, UNNAMED_COURSE};
pub use predictor::{
    compute_final_grade, marks_to_grade_point, required_marks_table,
    required_second_marks_for_target, wgp_to_final_letter, FinalGrade, TargetRequirement,
    SESSIONAL_1_MAX, SESSIONAL_2_MAX,
};
pub use scale::{FinalLetter, LetterGrade};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
