//! Pool scoring rules.

/// Strokes added to a golfer's score once they miss the cut (or withdraw, or
/// are disqualified). Fixed by pool convention.
pub const MISSED_CUT_PENALTY: i32 = 20;

/// Effective scoring state for one golfer, derived from the provider's raw
/// score-to-par and cut status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveScore {
    pub score_to_par: i32,
    pub missed_cut: bool,
    pub cut_score: Option<i32>,
}

/// Apply the missed-cut rule to a raw provider score.
///
/// Always derives from the raw score, never from a previously stored
/// (possibly already penalized) value, so re-running on unchanged provider
/// data yields the same result instead of stacking another penalty.
#[must_use]
pub fn effective_score(raw_to_par: i32, missed_cut: bool) -> EffectiveScore {
    if missed_cut {
        EffectiveScore {
            score_to_par: raw_to_par + MISSED_CUT_PENALTY,
            missed_cut: true,
            cut_score: Some(raw_to_par),
        }
    } else {
        EffectiveScore {
            score_to_par: raw_to_par,
            missed_cut: false,
            cut_score: None,
        }
    }
}

/// Golf-style score display: even par is "E", everything else carries an
/// explicit sign.
#[must_use]
pub fn format_score_to_par(score: i32) -> String {
    match score {
        0 => "E".to_string(),
        s if s > 0 => format!("+{s}"),
        s => s.to_string(),
    }
}
