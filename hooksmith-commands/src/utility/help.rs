use poise::CreateReply;
use poise::serenity_prelude as serenity;

use hooksmith_core::{Context, Error};
use hooksmith_utils::embed::DEFAULT_EMBED_COLOR;

use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let mut categories: Vec<&str> = COMMANDS.iter().map(|command| command.category).collect();
    categories.sort_unstable();
    categories.dedup();

    let mut description = String::new();
    for category in categories {
        description.push_str(&format!("**{}**\n", capitalize(category)));
        for command in COMMANDS.iter().filter(|command| command.category == category) {
            description.push_str(&format!("`{}` - {}\n", command.usage, command.desc));
        }
        description.push('\n');
    }

    let embed = serenity::CreateEmbed::new()
        .title("Available Commands")
        .description(description.trim_end().to_owned())
        .color(DEFAULT_EMBED_COLOR);

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
