// 📘 Grade Predictor - weighted grade point arithmetic
// Scheme: 30% Sessional 1 (out of 30) + 25% Learning Engagement grade
//         + 45% Sessional 2 (out of 45)

use crate::scale::{FinalLetter, LetterGrade};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Maximum marks for Sessional 1.
pub const SESSIONAL_1_MAX: f64 = 30.0;

/// Maximum marks for Sessional 2.
pub const SESSIONAL_2_MAX: f64 = 45.0;

const S1_WEIGHT: f64 = 0.30;
const LE_WEIGHT: f64 = 0.25;
const S2_WEIGHT: f64 = 0.45;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// MARKS → GRADE POINT
// ============================================================================

/// Convert raw marks on a scale of `max_marks` to a grade point in [0, 10].
///
/// Thresholds are inclusive lower bounds on the percentage, checked highest
/// first. Marks are not range-checked here; callers clamp to [0, max_marks]
/// on entry. A non-positive scale is a contract violation.
pub fn marks_to_grade_point(marks: f64, max_marks: f64) -> Result<u8> {
    if max_marks <= 0.0 {
        bail!("invalid marks scale: max marks must be positive, got {}", max_marks);
    }

    let percent = marks / max_marks * 100.0;

    let gp = if percent >= 90.0 {
        10
    } else if percent >= 80.0 {
        9
    } else if percent >= 70.0 {
        8
    } else if percent >= 60.0 {
        7
    } else if percent >= 50.0 {
        6
    } else if percent >= 40.0 {
        5
    } else if percent >= 33.0 {
        4
    } else {
        0
    };

    Ok(gp)
}

// ============================================================================
// WGP → LETTER
// ============================================================================

/// Map a weighted grade point to its final letter.
///
/// The O..C bands are strict greater-than, but P requires wgp == 4 exactly:
/// any wgp in (0, 4) that is not exactly 4 is an F. This single-point P band
/// is the published scheme's behavior and is preserved bit-exactly.
pub fn wgp_to_final_letter(wgp: f64) -> FinalLetter {
    if wgp > 9.0 {
        FinalLetter::O
    } else if wgp > 8.0 {
        FinalLetter::APlus
    } else if wgp > 7.0 {
        FinalLetter::A
    } else if wgp > 6.0 {
        FinalLetter::BPlus
    } else if wgp > 5.0 {
        FinalLetter::B
    } else if wgp > 4.0 {
        FinalLetter::C
    } else if wgp == 4.0 {
        FinalLetter::P
    } else {
        FinalLetter::F
    }
}

// ============================================================================
// FINAL GRADE
// ============================================================================

/// Result of a full final-grade computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalGrade {
    /// Weighted grade point, rounded to 2 decimals.
    pub wgp: f64,
    pub letter: FinalLetter,
}

/// Blend both sessionals and the engagement grade into a final grade.
///
/// The letter is derived from the unrounded weighted grade point; only the
/// reported wgp is rounded.
pub fn compute_final_grade(
    s1_marks: f64,
    engagement: LetterGrade,
    s2_marks: f64,
) -> Result<FinalGrade> {
    let s1_gp = marks_to_grade_point(s1_marks, SESSIONAL_1_MAX)?;
    let s2_gp = marks_to_grade_point(s2_marks, SESSIONAL_2_MAX)?;
    let le_gp = engagement.grade_point();

    let wgp = S1_WEIGHT * f64::from(s1_gp) + LE_WEIGHT * f64::from(le_gp)
        + S2_WEIGHT * f64::from(s2_gp);

    Ok(FinalGrade {
        wgp: round2(wgp),
        letter: wgp_to_final_letter(wgp),
    })
}

// ============================================================================
// REQUIRED SESSIONAL 2 MARKS
// ============================================================================

/// What it takes to reach a target grade with Sessional 2 still to play for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TargetRequirement {
    /// Minimum Sessional 2 marks (out of 45), rounded to 2 decimals.
    /// 0.0 means the target is already secured.
    Achievable(f64),
    /// The target needs more grade points than Sessional 2 can supply.
    Unattainable,
}

impl TargetRequirement {
    pub fn is_unattainable(&self) -> bool {
        matches!(self, TargetRequirement::Unattainable)
    }
}

/// Solve the final-grade equation for the Sessional 2 marks needed to reach
/// `target`, given the Sessional 1 marks and engagement grade already earned.
pub fn required_second_marks_for_target(
    s1_marks: f64,
    engagement: LetterGrade,
    target: LetterGrade,
) -> Result<TargetRequirement> {
    let s1_gp = marks_to_grade_point(s1_marks, SESSIONAL_1_MAX)?;
    let le_gp = engagement.grade_point();
    let target_gp = target.grade_point();

    let required_gp = (f64::from(target_gp)
        - S1_WEIGHT * f64::from(s1_gp)
        - LE_WEIGHT * f64::from(le_gp))
        / S2_WEIGHT;

    if required_gp > 10.0 {
        return Ok(TargetRequirement::Unattainable);
    }

    let marks = required_gp / 10.0 * SESSIONAL_2_MAX;
    if marks > SESSIONAL_2_MAX {
        return Ok(TargetRequirement::Unattainable);
    }

    // Already-secured targets need 0 more marks, not a negative number
    Ok(TargetRequirement::Achievable(round2(marks.max(0.0))))
}

/// Evaluate every passing target (P up through O) for the predictor view.
pub fn required_marks_table(
    s1_marks: f64,
    engagement: LetterGrade,
) -> Result<Vec<(LetterGrade, TargetRequirement)>> {
    LetterGrade::TARGETS
        .iter()
        .map(|&target| {
            required_second_marks_for_target(s1_marks, engagement, target)
                .map(|req| (target, req))
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_to_grade_point_thresholds() {
        // Percent thresholds on a 0-100 scale
        assert_eq!(marks_to_grade_point(90.0, 100.0).unwrap(), 10);
        assert_eq!(marks_to_grade_point(89.9, 100.0).unwrap(), 9);
        assert_eq!(marks_to_grade_point(80.0, 100.0).unwrap(), 9);
        assert_eq!(marks_to_grade_point(70.0, 100.0).unwrap(), 8);
        assert_eq!(marks_to_grade_point(60.0, 100.0).unwrap(), 7);
        assert_eq!(marks_to_grade_point(50.0, 100.0).unwrap(), 6);
        assert_eq!(marks_to_grade_point(40.0, 100.0).unwrap(), 5);
        assert_eq!(marks_to_grade_point(33.0, 100.0).unwrap(), 4);
        assert_eq!(marks_to_grade_point(32.9, 100.0).unwrap(), 0);
        assert_eq!(marks_to_grade_point(0.0, 100.0).unwrap(), 0);
    }

    #[test]
    fn test_marks_to_grade_point_is_monotone_step() {
        let mut last = 0;
        for tenths in 0..=300 {
            let marks = f64::from(tenths) / 10.0;
            let gp = marks_to_grade_point(marks, SESSIONAL_1_MAX).unwrap();
            assert!(gp >= last, "grade point dropped at {} marks", marks);
            assert!(gp <= 10);
            last = gp;
        }
    }

    #[test]
    fn test_invalid_scale_rejected() {
        assert!(marks_to_grade_point(10.0, 0.0).is_err());
        assert!(marks_to_grade_point(10.0, -30.0).is_err());
    }

    #[test]
    fn test_wgp_letter_boundaries() {
        assert_eq!(wgp_to_final_letter(9.0001), FinalLetter::O);
        assert_eq!(wgp_to_final_letter(9.0), FinalLetter::APlus);
        assert_eq!(wgp_to_final_letter(8.0), FinalLetter::A);
        assert_eq!(wgp_to_final_letter(7.0), FinalLetter::BPlus);
        assert_eq!(wgp_to_final_letter(6.0), FinalLetter::B);
        assert_eq!(wgp_to_final_letter(5.0), FinalLetter::C);
        assert_eq!(wgp_to_final_letter(4.5), FinalLetter::C);
    }

    #[test]
    fn test_single_point_p_band() {
        // P only at exactly 4.0; just below is F
        assert_eq!(wgp_to_final_letter(4.0), FinalLetter::P);
        assert_eq!(wgp_to_final_letter(3.999), FinalLetter::F);
        assert_eq!(wgp_to_final_letter(0.0), FinalLetter::F);
    }

    #[test]
    fn test_perfect_score_is_o() {
        let result = compute_final_grade(30.0, LetterGrade::O, 45.0).unwrap();
        assert_eq!(result.wgp, 10.0);
        assert_eq!(result.letter, FinalLetter::O);
    }

    #[test]
    fn test_zero_score_is_f() {
        let result = compute_final_grade(0.0, LetterGrade::L, 0.0).unwrap();
        assert_eq!(result.wgp, 0.0);
        assert_eq!(result.letter, FinalLetter::F);
    }

    #[test]
    fn test_mixed_score_blend() {
        // s1 24/30 = 80% -> gp 9; le A -> 8; s2 36/45 = 80% -> gp 9
        // wgp = 0.30*9 + 0.25*8 + 0.45*9 = 8.75 -> A+
        let result = compute_final_grade(24.0, LetterGrade::A, 36.0).unwrap();
        assert_eq!(result.wgp, 8.75);
        assert_eq!(result.letter, FinalLetter::APlus);
    }

    #[test]
    fn test_required_marks_exact_fit() {
        // Perfect s1 and O engagement: O needs exactly full marks in s2
        let req =
            required_second_marks_for_target(30.0, LetterGrade::O, LetterGrade::O).unwrap();
        assert_eq!(req, TargetRequirement::Achievable(45.0));
    }

    #[test]
    fn test_required_marks_unattainable() {
        // Nothing banked yet: O would need gp ~22.2 from Sessional 2
        let req =
            required_second_marks_for_target(0.0, LetterGrade::I, LetterGrade::O).unwrap();
        assert_eq!(req, TargetRequirement::Unattainable);
    }

    #[test]
    fn test_required_marks_clamped_to_zero() {
        // s1 30 -> gp 10, le O -> 10: banked 5.5 wgp already exceeds P's 4
        let req =
            required_second_marks_for_target(30.0, LetterGrade::O, LetterGrade::P).unwrap();
        assert_eq!(req, TargetRequirement::Achievable(0.0));
    }

    #[test]
    fn test_required_marks_table_covers_all_targets() {
        let table = required_marks_table(15.0, LetterGrade::B).unwrap();
        assert_eq!(table.len(), LetterGrade::TARGETS.len());
        assert_eq!(table[0].0, LetterGrade::P);
        assert_eq!(table[6].0, LetterGrade::O);

        // Higher targets never need fewer marks than lower ones
        let mut last = -1.0;
        for (_, req) in &table {
            if let TargetRequirement::Achievable(marks) = req {
                assert!(*marks >= last);
                last = *marks;
            }
        }
    }
}
