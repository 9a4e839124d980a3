//! Five-factor viral scoring: curiosity gap, emotional trigger, specificity,
//! controversy and action-oriented language. Each factor is capped at 100;
//! the final score is the rounded mean.

const CURIOSITY_WORDS: &[&str] = &[
    "secret", "hidden", "nobody", "never", "shocking", "truth", "revealed",
];
const EMOTIONAL_WORDS: &[&str] = &[
    "devastating",
    "heartbreaking",
    "incredible",
    "amazing",
    "shocking",
    "destroyed",
    "saved",
];
const TIME_UNIT_WORDS: &[&str] = &[
    "step", "minute", "second", "hour", "day", "week", "month", "year",
];
const CONTROVERSY_WORDS: &[&str] = &[
    "wrong",
    "lie",
    "lying",
    "opposite",
    "uncomfortable",
    "unethical",
    "controversial",
];
const ACTION_WORDS: &[&str] = &[
    "how to", "exactly", "step", "guide", "method", "strategy", "hack", "tip",
];

pub fn score_curiosity_gap(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let mut score = count_matches(&lower, CURIOSITY_WORDS) * 15;

    if lower.contains("what they don't want you to know") {
        score += 25;
    }
    if lower.contains("...") {
        score += 10;
    }

    score.min(100)
}

pub fn score_emotional_trigger(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let mut score = count_matches(&lower, EMOTIONAL_WORDS) * 20;

    if lower.contains("break your heart") {
        score += 25;
    }
    if lower.contains("changed my life") {
        score += 20;
    }

    score.min(100)
}

pub fn score_specificity(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let mut score = 0;

    if text.chars().any(|ch| ch.is_ascii_digit()) {
        score += 25;
    }
    if TIME_UNIT_WORDS.iter().any(|word| lower.contains(word)) {
        score += 25;
    }

    score += count_digit_runs(text) * 10;

    score.min(100)
}

pub fn score_controversy(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let mut score = count_matches(&lower, CONTROVERSY_WORDS) * 20;

    if lower.contains("everyone says") && lower.contains("wrong") {
        score += 30;
    }

    score.min(100)
}

pub fn score_action_oriented(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let mut score = count_matches(&lower, ACTION_WORDS) * 15;

    if lower.starts_with("here's exactly how") {
        score += 25;
    }

    score.min(100)
}

/// Rounded mean of the five factor scores.
pub fn viral_score(text: &str) -> u32 {
    let total = score_curiosity_gap(text)
        + score_emotional_trigger(text)
        + score_specificity(text)
        + score_controversy(text)
        + score_action_oriented(text);

    (f64::from(total) / 5.0).round() as u32
}

fn count_matches(lower: &str, words: &[&str]) -> u32 {
    words.iter().filter(|word| lower.contains(*word)).count() as u32
}

/// Count maximal runs of ASCII digits ("3 steps in 30 days" has two).
fn count_digit_runs(text: &str) -> u32 {
    let mut runs = 0;
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            if !in_run {
                runs += 1;
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    runs
}
