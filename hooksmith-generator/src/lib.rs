pub mod scoring;
pub mod templates;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::templates::{FOLLOW_UP_TEMPLATES, OPENER_TEMPLATES};

/// Number of hooks returned per request.
pub const HOOKS_PER_REQUEST: usize = 10;

const MIN_TOPIC_CHARS: usize = 3;
const MAX_TOPIC_CHARS: usize = 500;
const BLOCKED_WORDS: &[&str] = &["spam", "scam", "illegal", "drugs"];

/// Rejected topic input.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Hook generation failure, unrelated to quota.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    InvalidTopic(#[from] ValidationError),
    #[error("hook generation produced no candidates")]
    Empty,
}

/// Keyword-driven hook classification, checked in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HookCategory {
    Question,
    CuriosityGap,
    Controversial,
    Storytelling,
    Actionable,
    Contrarian,
    Statistical,
    Urgency,
    Emotional,
    PersonalAnecdote,
}

impl HookCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Question => "Question Hook",
            Self::CuriosityGap => "Curiosity Gap",
            Self::Controversial => "Controversial Statement",
            Self::Storytelling => "Storytelling Opener",
            Self::Actionable => "Actionable Tip",
            Self::Contrarian => "Contrarian Take",
            Self::Statistical => "Statistical Hook",
            Self::Urgency => "Urgency Hook",
            Self::Emotional => "Emotional Trigger",
            Self::PersonalAnecdote => "Personal Anecdote",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Question => "❓",
            Self::CuriosityGap => "🔍",
            Self::Controversial => "🔥",
            Self::Storytelling => "📖",
            Self::Actionable => "💡",
            Self::Contrarian => "🔄",
            Self::Statistical => "📊",
            Self::Urgency => "⚡",
            Self::Emotional => "💔",
            Self::PersonalAnecdote => "👤",
        }
    }
}

/// One ranked hook sentence.
#[derive(Clone, Debug, Serialize)]
pub struct Hook {
    pub text: String,
    pub category: HookCategory,
    pub emoji: &'static str,
    pub engagement_score: u32,
    pub viral_score: u32,
}

/// Validate a raw topic string and return the trimmed form.
pub fn validate_topic(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    let chars = trimmed.chars().count();

    if chars < MIN_TOPIC_CHARS {
        return Err(ValidationError::new(format!(
            "Topic must be at least {} characters long",
            MIN_TOPIC_CHARS
        )));
    }
    if chars > MAX_TOPIC_CHARS {
        return Err(ValidationError::new(format!(
            "Topic must be no more than {} characters long",
            MAX_TOPIC_CHARS
        )));
    }

    let lower = trimmed.to_lowercase();
    if BLOCKED_WORDS.iter().any(|word| lower.contains(word)) {
        return Err(ValidationError::new("Topic contains inappropriate content"));
    }

    Ok(trimmed)
}

/// Generate the ranked hook list for a topic.
///
/// Pure and deterministic: the same topic always yields the same hooks in
/// the same order.
pub fn generate_hooks(raw_topic: &str) -> Result<Vec<Hook>, GenerationError> {
    let topic = validate_topic(raw_topic)?;

    let outcome = topic.to_owned();
    let solution = format!("implementing {}", topic);
    let personal_outcome = format!("mastered {}", topic);

    let mut candidates: Vec<(String, u32)> = OPENER_TEMPLATES
        .iter()
        .enumerate()
        .map(|(idx, opener)| {
            let follow_up = FOLLOW_UP_TEMPLATES[idx % FOLLOW_UP_TEMPLATES.len()];
            let text = format!(
                "{} {}",
                fill(opener, &outcome, &solution, &personal_outcome),
                fill(follow_up, &outcome, &solution, &personal_outcome),
            );
            let score = scoring::viral_score(&text);
            (text, score)
        })
        .collect();

    if candidates.is_empty() {
        return Err(GenerationError::Empty);
    }

    // Rank by viral score; ties break on text so the order is stable.
    candidates.sort_by(|left, right| {
        right
            .1
            .cmp(&left.1)
            .then_with(|| left.0.cmp(&right.0))
    });
    candidates.truncate(HOOKS_PER_REQUEST);

    let hooks: Vec<Hook> = candidates
        .into_iter()
        .map(|(text, viral_score)| {
            let category = classify(&text);
            let offset = (text.chars().count() % 10) as u32;
            Hook {
                category,
                emoji: category.emoji(),
                engagement_score: (viral_score + offset).clamp(70, 98),
                viral_score,
                text,
            }
        })
        .collect();

    debug!(
        count = hooks.len(),
        top_score = hooks.first().map(|hook| hook.viral_score),
        "generated hooks"
    );

    Ok(hooks)
}

/// Classify a hook sentence by its strongest keyword signal.
pub fn classify(text: &str) -> HookCategory {
    let lower = text.to_lowercase();

    if lower.contains("question") || lower.contains("what if") || lower.contains('?') {
        HookCategory::Question
    } else if lower.contains("secret") || lower.contains("hidden") || lower.contains("nobody") {
        HookCategory::CuriosityGap
    } else if lower.contains("wrong")
        || lower.contains("controversial")
        || lower.contains("uncomfortable")
    {
        HookCategory::Controversial
    } else if lower.contains("story")
        || lower.contains("years ago")
        || lower.contains("destroyed my life")
    {
        HookCategory::Storytelling
    } else if lower.contains("exactly how") || lower.contains("step") || lower.contains("guide") {
        HookCategory::Actionable
    } else if lower.contains("everyone") || lower.contains("opposite") {
        HookCategory::Contrarian
    } else if lower.contains('%')
        || lower.contains("statistics")
        || lower.chars().any(|ch| ch.is_ascii_digit())
    {
        HookCategory::Statistical
    } else if lower.contains("urgent") || lower.contains("24 hours") || lower.contains("time") {
        HookCategory::Urgency
    } else if lower.contains("break your heart") || lower.contains("devastating") {
        HookCategory::Emotional
    } else {
        HookCategory::PersonalAnecdote
    }
}

/// Render hooks as the Discord reply body.
pub fn format_hooks(hooks: &[Hook]) -> String {
    let mut body = String::from("🎯 **Your Viral Content Hooks** 🎯\n\n");

    for (idx, hook) in hooks.iter().enumerate() {
        body.push_str(&format!(
            "**{}. {} {}** ({}% engagement)\n{}\n\n",
            idx + 1,
            hook.emoji,
            hook.category.label(),
            hook.engagement_score,
            hook.text,
        ));
    }

    body.push_str("💡 *Tip: hooks are ranked by viral potential!*");
    body
}

fn fill(template: &str, outcome: &str, solution: &str, personal_outcome: &str) -> String {
    template
        .replace("[outcome]", outcome)
        .replace("[solution]", solution)
        .replace("[personal outcome]", personal_outcome)
}

#[cfg(test)]
mod tests {
    use super::{
        HOOKS_PER_REQUEST, HookCategory, classify, format_hooks, generate_hooks, validate_topic,
    };

    #[test]
    fn accepts_and_trims_valid_topics() {
        assert_eq!(validate_topic("  grow on youtube  ").unwrap(), "grow on youtube");
    }

    #[test]
    fn rejects_out_of_bounds_topics() {
        assert!(validate_topic("ab").is_err());
        assert!(validate_topic(&"x".repeat(501)).is_err());
        assert!(validate_topic(&"x".repeat(500)).is_ok());
    }

    #[test]
    fn rejects_blocked_words() {
        assert!(validate_topic("how to spam inboxes").is_err());
        assert!(validate_topic("best drugstore products").is_err());
    }

    #[test]
    fn generates_a_ranked_top_ten() {
        let hooks = generate_hooks("grow on youtube").unwrap();
        assert_eq!(hooks.len(), HOOKS_PER_REQUEST);

        for pair in hooks.windows(2) {
            assert!(pair[0].viral_score >= pair[1].viral_score);
        }
        for hook in &hooks {
            assert!((70..=98).contains(&hook.engagement_score));
            assert!(!hook.text.contains("[outcome]"));
            assert!(!hook.text.contains("[solution]"));
            assert!(!hook.text.contains("[personal outcome]"));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let first = generate_hooks("start a podcast").unwrap();
        let second = generate_hooks("start a podcast").unwrap();

        let first_texts: Vec<&str> = first.iter().map(|hook| hook.text.as_str()).collect();
        let second_texts: Vec<&str> = second.iter().map(|hook| hook.text.as_str()).collect();
        assert_eq!(first_texts, second_texts);
    }

    #[test]
    fn classifies_by_keyword_priority() {
        assert_eq!(classify("What if this works?"), HookCategory::Question);
        assert_eq!(classify("the secret method"), HookCategory::CuriosityGap);
        assert_eq!(classify("everyone is wrong about this"), HookCategory::Controversial);
        assert_eq!(classify("the story of my start"), HookCategory::Storytelling);
        assert_eq!(classify("exactly how to begin"), HookCategory::Actionable);
        assert_eq!(classify("everyone does the same thing"), HookCategory::Contrarian);
        assert_eq!(classify("grow by 300 percent"), HookCategory::Statistical);
        assert_eq!(classify("no excuses, do it now"), HookCategory::PersonalAnecdote);
    }

    #[test]
    fn formatting_includes_every_hook_once() {
        let hooks = generate_hooks("grow on youtube").unwrap();
        let body = format_hooks(&hooks);

        assert!(body.contains("**1."));
        assert!(body.contains(&format!("**{}.", hooks.len())));
        assert!(body.contains("% engagement"));
    }
}
