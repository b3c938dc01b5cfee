//! Argument extraction for both entry points, plus recipient resolution.
//! A `Err(InvalidInput)` here is a dispatcher-level error ("Invalid input."),
//! never an economy rejection.

use serenity::model::application::CommandInteraction;
use serenity::model::guild::Member;
use serenity::model::id::{GuildId, UserId};
use serenity::prelude::Context;
use serenity::utils::parse_user_mention;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidInput;

/// Parses an optional integer argument: absent is `Ok(None)`, garbage is an error.
pub fn parse_int(arg: Option<&str>) -> Result<Option<i64>, InvalidInput> {
    match arg {
        None => Ok(None),
        Some(raw) => raw
            .trim_start_matches('$')
            .parse::<i64>()
            .map(Some)
            .map_err(|_| InvalidInput),
    }
}

/// Accepts `<@id>`, `<@!id>` or a bare id.
pub fn parse_user(arg: &str) -> Option<UserId> {
    parse_user_mention(arg).or_else(|| {
        arg.parse::<u64>()
            .ok()
            .filter(|&id| id != 0)
            .map(UserId::new)
    })
}

pub fn option_i64(interaction: &CommandInteraction, name: &str) -> Option<i64> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_i64())
}

pub fn option_user(interaction: &CommandInteraction, name: &str) -> Option<UserId> {
    interaction
        .data
        .options
        .iter()
        .find(|o| o.name == name)
        .and_then(|o| o.value.as_user_id())
}

/// Which resolved members a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberFilter {
    /// Any member of the guild, bots included (`wallet`).
    AnyMember,
    /// Members that are not bots (`give` recipients).
    HumansOnly,
}

impl MemberFilter {
    pub fn admits(self, is_bot: bool) -> bool {
        match self {
            MemberFilter::AnyMember => true,
            MemberFilter::HumansOnly => !is_bot,
        }
    }
}

/// Looks the user up as a member of `guild_id`. Non-members, and members the
/// filter refuses, resolve to `None`.
pub async fn resolve_member(
    ctx: &Context,
    guild_id: GuildId,
    user_id: UserId,
    filter: MemberFilter,
) -> Option<Member> {
    match guild_id.member(ctx, user_id).await {
        Ok(member) if filter.admits(member.user.bot) => Some(member),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(target = "args.member", user_id = user_id.get(), error = ?e, "member lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints() {
        assert_eq!(parse_int(None), Ok(None));
        assert_eq!(parse_int(Some("50")), Ok(Some(50)));
        assert_eq!(parse_int(Some("$25")), Ok(Some(25)));
        assert_eq!(parse_int(Some("-3")), Ok(Some(-3)));
        assert_eq!(parse_int(Some("ten")), Err(InvalidInput));
    }

    #[test]
    fn users() {
        assert_eq!(parse_user("<@1234>"), Some(UserId::new(1234)));
        assert_eq!(parse_user("<@!1234>"), Some(UserId::new(1234)));
        assert_eq!(parse_user("1234"), Some(UserId::new(1234)));
        assert_eq!(parse_user("0"), None);
        assert_eq!(parse_user("someone"), None);
    }

    #[test]
    fn bots_are_only_refused_as_recipients() {
        assert!(MemberFilter::AnyMember.admits(true));
        assert!(MemberFilter::AnyMember.admits(false));
        assert!(!MemberFilter::HumansOnly.admits(true));
        assert!(MemberFilter::HumansOnly.admits(false));
    }
}
