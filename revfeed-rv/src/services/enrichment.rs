//! Review enrichment: AI-generated reply, summary, and recommended actions
//!
//! Each operation makes exactly one provider call. A failed call is logged
//! and replaced with a canned fallback so that a provider outage never fails
//! a submission.

use crate::services::GeminiClient;
use tracing::warn;

/// Maximum number of recommended actions kept per review
const MAX_ACTIONS: usize = 3;

/// Fallback reply when the provider call fails
const FALLBACK_RESPONSE: &str = "Thank you for your feedback. We appreciate you \
     taking the time to share your experience with us.";

/// Fallback recommendations when the provider call fails
const FALLBACK_ACTIONS: [&str; 2] = [
    "Review customer feedback patterns",
    "Consider follow-up with customer if rating < 4",
];

/// AI enrichment service; stateless apart from the provider client
#[derive(Debug, Clone)]
pub struct Enrichment {
    client: GeminiClient,
}

impl Enrichment {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Warm, professional reply addressed to the reviewer.
    pub async fn generate_response(&self, rating: u8, review_text: &str) -> String {
        let prompt = response_prompt(rating, review_text);
        match self.client.generate(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("Reply generation failed, using canned reply: {}", e);
                FALLBACK_RESPONSE.to_string()
            }
        }
    }

    /// 1-2 sentence internal summary for the admin dashboard.
    pub async fn generate_summary(&self, rating: u8, review_text: &str) -> String {
        let prompt = summary_prompt(rating, review_text);
        match self.client.generate(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!("Summary generation failed, using deterministic fallback: {}", e);
                fallback_summary(rating, review_text)
            }
        }
    }

    /// Up to three actionable recommendations for the business.
    pub async fn generate_actions(&self, rating: u8, review_text: &str) -> Vec<String> {
        let prompt = actions_prompt(rating, review_text);
        match self.client.generate(&prompt).await {
            Ok(text) => clean_action_lines(&text),
            Err(e) => {
                warn!("Action generation failed, using canned recommendations: {}", e);
                FALLBACK_ACTIONS.iter().map(|s| s.to_string()).collect()
            }
        }
    }
}

fn response_prompt(rating: u8, review_text: &str) -> String {
    format!(
        "Given this customer review with {rating} stars:\n\
         \"{review_text}\"\n\
         \n\
         Generate a warm, professional response that:\n\
         1. Thanks them for their feedback\n\
         2. Acknowledges their specific points\n\
         3. If rating < 4, apologize and mention commitment to improvement\n\
         4. If rating >= 4, express gratitude for positive experience\n\
         \n\
         Keep response under 100 words. Be genuine and empathetic."
    )
}

fn summary_prompt(rating: u8, review_text: &str) -> String {
    format!(
        "Summarize this customer review in 1-2 sentences, capturing the key \
         sentiment and main points:\n\
         Rating: {rating} stars\n\
         Review: \"{review_text}\"\n\
         \n\
         Be concise and focus on the most important aspects."
    )
}

fn actions_prompt(rating: u8, review_text: &str) -> String {
    format!(
        "Based on this customer feedback, suggest 2-3 specific actionable \
         recommendations for the business:\n\
         Rating: {rating} stars\n\
         Review: \"{review_text}\"\n\
         \n\
         Format as bullet points. Be specific and actionable. Return only the \
         recommendations, one per line, without numbering or bullet symbols."
    )
}

/// Deterministic summary built from the rating and a truncated copy of the
/// review text.
fn fallback_summary(rating: u8, review_text: &str) -> String {
    let head: String = review_text.chars().take(100).collect();
    format!("Customer rated {rating} stars. Review: {head}...")
}

/// Split raw completion text into trimmed action lines, stripping leading
/// bullet and numbering characters, and cap the list at `MAX_ACTIONS`.
fn clean_action_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim().trim_start_matches(is_bullet_char).trim().to_string())
        .filter(|line| !line.is_empty())
        .take(MAX_ACTIONS)
        .collect()
}

fn is_bullet_char(c: char) -> bool {
    matches!(c, '-' | '•' | '*' | '.' | ' ') || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_action_lines_strips_bullets_and_numbering() {
        let raw = "- Retrain the front desk staff\n\
                   • Offer the customer a discount\n\
                   1. Audit the checkout flow";
        let actions = clean_action_lines(raw);
        assert_eq!(
            actions,
            vec![
                "Retrain the front desk staff",
                "Offer the customer a discount",
                "Audit the checkout flow",
            ]
        );
    }

    #[test]
    fn test_clean_action_lines_drops_empty_lines_and_caps_at_three() {
        let raw = "* one\n\n  \n* two\n* three\n* four";
        let actions = clean_action_lines(raw);
        assert_eq!(actions, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_clean_action_lines_drops_lines_that_become_empty() {
        let actions = clean_action_lines("---\n- keep me\n123.");
        assert_eq!(actions, vec!["keep me"]);
    }

    #[test]
    fn test_clean_action_lines_keeps_interior_punctuation() {
        let actions = clean_action_lines("- Follow up within 2-3 days");
        assert_eq!(actions, vec!["Follow up within 2-3 days"]);
    }

    #[test]
    fn test_fallback_summary_truncates_long_reviews() {
        let long_review = "x".repeat(250);
        let summary = fallback_summary(2, &long_review);
        assert_eq!(summary, format!("Customer rated 2 stars. Review: {}...", "x".repeat(100)));
    }

    #[test]
    fn test_fallback_summary_short_review() {
        let summary = fallback_summary(5, "Loved it");
        assert_eq!(summary, "Customer rated 5 stars. Review: Loved it...");
    }

    #[test]
    fn test_fallback_summary_is_char_safe() {
        // Multi-byte characters must not split
        let review = "é".repeat(150);
        let summary = fallback_summary(3, &review);
        assert!(summary.contains(&"é".repeat(100)));
    }

    #[test]
    fn test_prompts_embed_rating_and_review() {
        for prompt in [
            response_prompt(2, "slow service"),
            summary_prompt(2, "slow service"),
            actions_prompt(2, "slow service"),
        ] {
            assert!(prompt.contains("2 stars"));
            assert!(prompt.contains("slow service"));
        }
    }
}
