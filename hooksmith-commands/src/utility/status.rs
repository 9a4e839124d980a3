use poise::CreateReply;
use poise::serenity_prelude as serenity;

use hooksmith_core::{Context, Error};
use hooksmith_database::impls::request_log::{aggregate_stats, recent_logs};
use hooksmith_database::model::request_log::RequestLogEntry;
use hooksmith_utils::embed::DEFAULT_EMBED_COLOR;
use hooksmith_utils::time::{format_time_until_reset, now_unix_millis};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "status",
    desc: "Show bot health and your usage statistics.",
    category: "utility",
    usage: "!status",
};

const RECENT_ACTIVITY_LIMIT: u32 = 3;
const RECENT_SUMMARY_CHARS: usize = 40;

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn status(ctx: Context<'_>) -> Result<(), Error> {
    let user_id = ctx.author().id.get();
    let data = ctx.data();

    ctx.defer_ephemeral().await?;

    let usage = data.limiter.peek_usage(&data.db, user_id).await?;
    let stats = aggregate_stats(&data.db, user_id).await?;
    let recent = recent_logs(&data.db, user_id, RECENT_ACTIVITY_LIMIT).await?;

    let uptime = data.started_at.elapsed().as_secs();
    let health = format!(
        "**Status**: Online\n**Uptime**: {}h {}m\n**Database**: Connected",
        uptime / 3_600,
        (uptime % 3_600) / 60,
    );

    let usage_field = format!(
        "**Requests Used**: {}/{}\n**Remaining**: {}\n**Resets In**: {}",
        usage.request_count,
        data.config.max_requests,
        usage.remaining,
        format_time_until_reset(usage.reset_at_ms, now_unix_millis()),
    );

    let avg_label = match stats.avg_execution_time_ms {
        Some(avg) => format!("{}ms", avg.round() as u64),
        None => "N/A".to_owned(),
    };
    let stats_field = format!(
        "**Total Requests**: {}\n**Successful**: {}\n**Avg Response**: {}",
        stats.total_requests, stats.successful_requests, avg_label,
    );

    let embed = serenity::CreateEmbed::new()
        .title("🤖 Bot Status & Statistics")
        .description("Current bot health and your usage information")
        .color(DEFAULT_EMBED_COLOR)
        .field("🟢 Bot Health", health, true)
        .field("📊 Your Usage", usage_field, true)
        .field("📈 Your Statistics", stats_field, true)
        .field("🕘 Recent Activity", recent_activity_field(&recent), false);

    ctx.send(CreateReply::default().ephemeral(true).embed(embed))
        .await?;
    Ok(())
}

/// Render the recent-activity field body: one line per log row, newest
/// first, with the topic summary bounded for display.
fn recent_activity_field(entries: &[RequestLogEntry]) -> String {
    if entries.is_empty() {
        return "No requests yet".to_owned();
    }

    entries
        .iter()
        .map(|entry| {
            let marker = if entry.success { "✅" } else { "❌" };
            let summary: String = entry
                .input_summary
                .chars()
                .take(RECENT_SUMMARY_CHARS)
                .collect();
            format!("{} `{}` ({}ms)", marker, summary, entry.execution_time_ms)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
