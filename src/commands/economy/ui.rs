//! Builds the success replies for the economy commands. Rejections go
//! through `Reply::from_error` instead.

use super::bet::logic::BetOutcome;
use super::daily::logic::DailyClaim;
use crate::commands::reply::Reply;
use serenity::builder::CreateEmbed;
use std::fmt::Display;

const GREEN: u32 = 0x2ECC71;
const RED: u32 = 0xE74C3C;
pub const BLURPLE: u32 = 0x5865F2;

pub fn sticker_url(sticker_id: u64) -> String {
    format!("https://cdn.discordapp.com/stickers/{sticker_id}.png")
}

pub fn create_bet_reply(outcome: &BetOutcome) -> Reply {
    let (title, color, verb) = if outcome.won {
        ("You won!", GREEN, "added to")
    } else {
        ("You lost.", RED, "removed from")
    };
    let embed = CreateEmbed::new().title(title).color(color).field(
        format!("${} has been {} your wallet", outcome.amount, verb),
        format!("You have ${}", outcome.balance),
        false,
    );
    Reply::embed(embed)
}

pub fn create_wallet_reply(display_name: &str, money: i64, sticker_id: Option<u64>) -> Reply {
    let mut embed = CreateEmbed::new()
        .title(format!("{display_name}'s wallet"))
        .color(BLURPLE)
        .field("Money", format!("${money}"), true);
    if let Some(id) = sticker_id {
        embed = embed.thumbnail(sticker_url(id));
    }
    Reply::embed(embed)
}

pub fn create_daily_reply(mention: impl Display, claim: &DailyClaim) -> Reply {
    Reply::text(format!("{mention} ${} has been added to your wallet.", claim.amount))
}

pub fn create_give_reply(amount: i64, giver_name: &str, receiver_name: &str) -> Reply {
    Reply::text(format!(
        "Transferred ${amount} from {giver_name} to {receiver_name}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_replies() {
        let claim = DailyClaim { amount: 100, balance: 100 };
        assert_eq!(
            create_daily_reply("<@7>", &claim).content(),
            Some("<@7> $100 has been added to your wallet.")
        );
        assert_eq!(
            create_give_reply(30, "Alice", "Bob").content(),
            Some("Transferred $30 from Alice to Bob")
        );
    }

    #[test]
    fn embeds_are_public() {
        let outcome = BetOutcome { amount: 5, won: true, balance: 15 };
        let reply = create_bet_reply(&outcome);
        assert!(reply.has_embed());
        assert!(!reply.is_ephemeral());
        assert!(create_wallet_reply("Alice", 10, Some(1)).has_embed());
    }

    #[test]
    fn sticker_cdn_url() {
        assert_eq!(sticker_url(42), "https://cdn.discordapp.com/stickers/42.png");
    }
}
