//! Handles the UI creation for the `/leaderboard` command.

use super::logic::Standings;
use crate::commands::economy::ui::BLURPLE;
use crate::database::LeaderboardEntry;
use serenity::builder::CreateEmbed;

/// One `"<rank>. <mention> $<money>"` line per entry.
pub fn leaderboard_lines(entries: &[LeaderboardEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. <@{}> ${}", i + 1, entry.user_id, entry.money))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn create_leaderboard_embed(standings: &Standings) -> CreateEmbed {
    let body = if standings.entries.is_empty() {
        "The leaderboard is currently empty.".to_string()
    } else {
        leaderboard_lines(&standings.entries)
    };

    // Up to 50 lines overflows a field's 1024 chars, so the list lives in the description.
    CreateEmbed::new()
        .title("Leaderboard")
        .description(format!(
            "**Showing top {} members**\n{}",
            standings.requested, body
        ))
        .color(BLURPLE)
}
