use std::time::Instant;

use poise::CreateReply;
use tracing::{error, info, warn};

use hooksmith_core::{Context, Error};
use hooksmith_database::QuotaError;
use hooksmith_database::impls::request_log::append_log;
use hooksmith_generator::{GenerationError, format_hooks, generate_hooks};
use hooksmith_utils::embed::{build_error_embed, build_rate_limit_embed};
use hooksmith_utils::time::{format_time_until_reset, now_unix_millis};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "hook",
    desc: "Generate 10 viral content hooks for a topic.",
    category: "hooks",
    usage: "!hook <topic>",
};

const DISCORD_MESSAGE_LIMIT: usize = 2_000;
const TRUNCATED_HOOK_COUNT: usize = 8;

/// Generate ranked viral content hooks.
///
/// The quota check runs first and a denial short-circuits before generation,
/// so denied requests leave no audit row. Once a unit is consumed it is not
/// refunded even if generation fails; the failed attempt is logged instead.
#[poise::command(prefix_command, slash_command, category = "Hooks")]
pub async fn hook(
    ctx: Context<'_>,
    #[description = "Topic for your content hooks (3-500 characters)"] topic: String,
) -> Result<(), Error> {
    let started = Instant::now();
    let user_id = ctx.author().id.get();
    let data = ctx.data();

    ctx.defer_ephemeral().await?;

    let quota = match data.limiter.check_and_consume(&data.db, user_id).await {
        Ok(quota) => quota,
        Err(QuotaError::LimitExceeded { reset_at_ms }) => {
            let reset_label = format_time_until_reset(reset_at_ms, now_unix_millis());
            let description = format!(
                "Rate limit exceeded. You can make {} requests every {} hours. Try again in {}.",
                data.config.max_requests, data.config.window_hours, reset_label,
            );
            ctx.send(
                CreateReply::default()
                    .ephemeral(true)
                    .embed(build_rate_limit_embed(description, &reset_label)),
            )
            .await?;
            return Ok(());
        }
        Err(QuotaError::Store(err)) => {
            error!(?err, user_id, "quota check failed");
            ctx.send(
                CreateReply::default().ephemeral(true).embed(build_error_embed(
                    "Command Failed",
                    "Could not check your usage right now. Please try again later.",
                )),
            )
            .await?;
            return Ok(());
        }
    };

    match generate_hooks(&topic) {
        Ok(hooks) => {
            let usage_line = format!(
                "\n📊 **Usage**: {}/{} requests used | {} remaining",
                quota.request_count, data.config.max_requests, quota.remaining,
            );
            let reset_line = format!(
                "⏰ **Resets**: {}",
                format_time_until_reset(quota.reset_at_ms, now_unix_millis()),
            );

            let mut message = format!("{}{}\n{}", format_hooks(&hooks), usage_line, reset_line);
            if message.chars().count() > DISCORD_MESSAGE_LIMIT {
                let truncated = &hooks[..hooks.len().min(TRUNCATED_HOOK_COUNT)];
                message = format!(
                    "{}\n\n⚠️ *Response truncated to fit Discord limits*{}\n{}",
                    format_hooks(truncated),
                    usage_line,
                    reset_line,
                );
            }

            ctx.send(CreateReply::default().ephemeral(true).content(message))
                .await?;

            let execution_time_ms = started.elapsed().as_millis() as u64;
            record_attempt(
                ctx,
                user_id,
                &topic,
                hooks.len() as u32,
                true,
                None,
                execution_time_ms,
            )
            .await;
            info!(
                user_id,
                hooks = hooks.len(),
                execution_time_ms,
                "hook generation succeeded"
            );
        }
        Err(err) => {
            let (title, description) = match &err {
                GenerationError::InvalidTopic(validation) => {
                    ("Invalid Input", validation.to_string())
                }
                GenerationError::Empty => (
                    "Command Failed",
                    "Hook generation failed. Please try again later.".to_owned(),
                ),
            };
            ctx.send(
                CreateReply::default()
                    .ephemeral(true)
                    .embed(build_error_embed(title, description)),
            )
            .await?;

            let execution_time_ms = started.elapsed().as_millis() as u64;
            record_attempt(
                ctx,
                user_id,
                &topic,
                0,
                false,
                Some(&err.to_string()),
                execution_time_ms,
            )
            .await;
            warn!(user_id, error = %err, "hook generation failed");
        }
    }

    Ok(())
}

/// Append the audit row for a concluded attempt. The user-facing reply has
/// already been sent, so a store failure here is warned about and swallowed.
async fn record_attempt(
    ctx: Context<'_>,
    user_id: u64,
    topic: &str,
    result_count: u32,
    success: bool,
    error_message: Option<&str>,
    execution_time_ms: u64,
) {
    let db = &ctx.data().db;
    if let Err(err) = append_log(
        db,
        user_id,
        topic,
        result_count,
        success,
        error_message,
        execution_time_ms,
    )
    .await
    {
        warn!(?err, user_id, "failed to record request log");
    }
}
