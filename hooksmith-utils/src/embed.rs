use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x2E_86_AB;
/// Warning color for the rate-limit embed.
pub const RATE_LIMIT_EMBED_COLOR: u32 = 0xFF_99_00;
/// Error color for failure embeds.
pub const ERROR_EMBED_COLOR: u32 = 0xFF_00_00;

/// Build the standard error embed shown for failed commands.
///
/// The description is a user-safe message; full error detail only goes to the
/// audit log and tracing output.
pub fn build_error_embed(title: &str, description: impl Into<String>) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(format!("❌ {}", title))
        .description(description)
        .color(ERROR_EMBED_COLOR)
        .footer(serenity::CreateEmbedFooter::new(
            "If this error persists, please contact support",
        ))
}

/// Build the rate-limit embed with the human-readable reset countdown.
pub fn build_rate_limit_embed(
    description: impl Into<String>,
    reset_label: &str,
) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("⏰ Rate Limit Exceeded")
        .description(description)
        .color(RATE_LIMIT_EMBED_COLOR)
        .field("Resets In", reset_label.to_owned(), true)
}
