//! Guild admission: the bot only serves PlanetEarth community servers.

use regex::RegexSet;

/// Smallest guild the bot will stay in.
pub const MIN_MEMBER_COUNT: u64 = 10;

const NAME_PATTERNS: &[&str] = &[
    // "PE" as its own token, optionally split: "P E", "P.E", "P-E", "P_E"
    r"(?i)(?:^|[^a-z0-9])p[\s._\-]?e(?:$|[^a-z0-9])",
    r"(?i)planet[\s._\-]?earth",
    // Fullwidth
    r"(?i)ＰＥ|ＰＬＡＮＥＴ\s?ＥＡＲＴＨ",
    // Mathematical bold / double-struck
    r"𝐏𝐄|𝐏𝐋𝐀𝐍𝐄𝐓\s?𝐄𝐀𝐑𝐓𝐇|ℙ𝔼|ℙ𝕃𝔸ℕ𝔼𝕋\s?𝔼𝔸ℝ𝕋ℍ",
    // Small capitals
    r"ᴘᴇ|ᴘʟᴀɴᴇᴛ\s?ᴇᴀʀᴛʜ",
    // Korean
    r"플래닛\s?어스",
    r"플래닛\s?얼스",
];

/// Decides whether a guild is an eligible deployment target.
#[derive(Debug, Clone)]
pub struct GuildAdmissionFilter {
    names: RegexSet,
}

impl GuildAdmissionFilter {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            names: RegexSet::new(NAME_PATTERNS)?,
        })
    }

    /// Eligible iff `member_count >= 10` and the name matches a community pattern.
    pub fn is_eligible(&self, guild_name: &str, member_count: u64) -> bool {
        member_count >= MIN_MEMBER_COUNT && self.names.is_match(guild_name)
    }
}
