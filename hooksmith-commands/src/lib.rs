pub mod hooks;
pub mod utility;

use hooksmith_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    hooks::hook::META,
    utility::status::META,
    utility::ping::META,
    utility::help::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        hooks::hook::hook(),
        utility::status::status(),
        utility::ping::ping(),
        utility::help::help(),
    ]
}
