use crate::catalog::Candidate;
use crate::config::EngineConfig;
use crate::explanation::confidence::{confidence, ConfidenceLabel};
use crate::explanation::types::Recommendation;
use crate::scorer::CandidateScore;

/// Separator between reasons in the joined explanation
pub const REASON_SEPARATOR: &str = ". ";

/// Turns scored candidates into user-facing recommendations
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Build the recommendation card for a retained candidate
    ///
    /// Takes:
    /// - candidate: catalog entry (cloned into the card)
    /// - scored: raw score, ordered reasons and per-rule breakdown
    /// - config: confidence floor/span and matching-factor count
    pub fn generate(
        candidate: &Candidate,
        scored: CandidateScore,
        config: &EngineConfig,
    ) -> Recommendation {
        let confidence = confidence(scored.score, config.confidence_floor, config.confidence_span);
        let reason = scored.reasons.join(REASON_SEPARATOR);
        let matching_factors = scored
            .reasons
            .iter()
            .take(config.matching_factor_count)
            .cloned()
            .collect();

        Recommendation {
            fly: candidate.clone(),
            score: scored.score,
            confidence,
            confidence_label: ConfidenceLabel::from_confidence(confidence),
            reason,
            matching_factors,
            breakdown: scored.breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatternCategory;
    use crate::scorer::ScoreBreakdown;

    fn scored(score: f64, reasons: &[&str]) -> CandidateScore {
        CandidateScore {
            score,
            reasons: reasons.iter().map(|s| s.to_string()).collect(),
            breakdown: ScoreBreakdown::default(),
        }
    }

    #[test]
    fn test_reason_join_and_matching_factors() {
        let fly = Candidate::new("hopper", "Chubby Chernobyl", PatternCategory::Terrestrial);
        let rec = ExplanationGenerator::generate(
            &fly,
            scored(95.0, &["a", "b", "c", "d"]),
            &EngineConfig::default(),
        );

        assert_eq!(rec.reason, "a. b. c. d");
        assert_eq!(rec.matching_factors, vec!["a", "b", "c"]);
        assert_eq!(rec.confidence, 0.75);
        assert_eq!(rec.confidence_label, ConfidenceLabel::High);
        assert_eq!(rec.fly.id, "hopper");
    }

    #[test]
    fn test_no_reasons() {
        let fly = Candidate::new("x", "X", PatternCategory::Wet);
        let rec = ExplanationGenerator::generate(&fly, scored(0.0, &[]), &EngineConfig::default());
        assert_eq!(rec.reason, "");
        assert!(rec.matching_factors.is_empty());
        assert_eq!(rec.confidence, 0.0);
    }
}
