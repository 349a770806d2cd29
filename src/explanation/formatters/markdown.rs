use crate::explanation::types::{Recommendation, RecommendationResponse};
use crate::rules::RULE_PIPELINE;

/// Markdown formatter for recommendation responses
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format response as markdown
    pub fn format(response: &RecommendationResponse) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str("# Fly Recommendations\n\n");

        if !response.can_perform {
            let message = response.error.as_deref().unwrap_or("Unable to recommend flies");
            md.push_str(&format!("⚠️ {}\n", message));
            return md;
        }

        for (rank, rec) in response.results.iter().enumerate() {
            Self::format_recommendation(&mut md, rank + 1, rec);
        }

        if !response.excluded.is_empty() {
            md.push_str("## Skipped Patterns\n\n");
            for skipped in &response.excluded {
                md.push_str(&format!("- `{}`: {}\n", skipped.id, skipped.error));
            }
            md.push('\n');
        }

        md
    }

    fn format_recommendation(md: &mut String, rank: usize, rec: &Recommendation) {
        md.push_str(&format!(
            "## {}. {} ({}) {} {}\n\n",
            rank,
            rec.fly.name,
            rec.fly.category,
            rec.confidence_label.stars(),
            rec.confidence_label.display_text()
        ));
        md.push_str(&format!(
            "**Confidence:** {:.0}% (score {:.1})\n\n",
            rec.confidence * 100.0,
            rec.score
        ));

        if let Some(size) = rec.fly.matched_hatch.as_ref().and_then(|h| h.primary_size.as_ref()) {
            md.push_str(&format!("*Imitates:* {}\n\n", size));
        }

        if rec.matching_factors.is_empty() {
            md.push_str("No specific condition matches - ranked on general suitability.\n\n");
        } else {
            for factor in &rec.matching_factors {
                md.push_str(&format!("- {}\n", factor));
            }
            md.push('\n');
        }

        // Non-zero rule contributions
        let parts: Vec<String> = RULE_PIPELINE
            .iter()
            .zip(rec.breakdown.0.iter())
            .filter(|(_, delta)| **delta != 0.0)
            .map(|((kind, _), delta)| {
                format!("{} {} {:+.1}", kind.code(), kind.display_name(), delta)
            })
            .collect();
        if !parts.is_empty() {
            md.push_str(&format!("*Breakdown:* {}\n\n", parts.join(" · ")));
        }
    }
}
