//! Record → embed rendering

use planetearth_types::{Embed, NationRecord, ResidentRecord, TownRecord};

use crate::messages::NONE;

const AVATAR_URL: &str = "https://mc-heads.net/avatar";

/// Escape `_` so names like `Big_Town` are not rendered as italics.
pub fn escape_markdown(text: &str) -> String {
    text.replace('_', "\\_")
}

/// Discord timestamp markup (`<t:SECONDS:f>`) for an epoch-milliseconds value.
pub fn discord_timestamp(epoch_ms: i64) -> String {
    format!("<t:{}:f>", epoch_ms.div_euclid(1000))
}

fn label(name: &str) -> String {
    format!("**{name}**")
}

fn text_or_none(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .map_or_else(|| NONE.to_string(), escape_markdown)
}

/// `nation` is the resolved nation of the resident's town; `None` renders as
/// "none". The nation field only appears when the resident has a town.
pub fn resident_embed(resident: &ResidentRecord, nation: Option<&str>) -> Embed {
    let mut embed = Embed::new(&resident.name)
        .thumbnail(format!("{}/{}/600.png", AVATAR_URL, resident.name))
        .field(label("최초 접속일"), discord_timestamp(resident.registered_at_ms))
        .field(label("최근 접속일"), discord_timestamp(resident.last_online_ms));

    match resident.town.as_deref() {
        Some(town) => {
            embed = embed
                .field(label("마을"), escape_markdown(town))
                .field(label("국가"), text_or_none(nation));
        }
        None => embed = embed.field(label("마을"), NONE),
    }
    embed
}

pub fn town_embed(town: &TownRecord) -> Embed {
    Embed::new(&town.name)
        .field(label("공지"), escape_markdown(&town.board))
        .field(label("시장"), escape_markdown(&town.mayor))
        .field(label("국가"), text_or_none(town.nation.as_deref()))
        .field(label("주민 수"), town.member_count.to_string())
        .field(label("클레임 크기"), town.claim_size.to_string())
        .field(label("설립일"), discord_timestamp(town.registered_at_ms))
}

pub fn nation_embed(nation: &NationRecord) -> Embed {
    Embed::new(&nation.name)
        .field(label("공지"), escape_markdown(&nation.board))
        .field(label("왕"), escape_markdown(&nation.leader))
        .field(label("국민 수"), nation.member_count.to_string())
        .field(label("마을"), escape_markdown(&nation.towns_display))
        .field(label("동맹"), text_or_none(nation.allies_display.as_deref()))
        .field(label("적"), text_or_none(nation.enemies_display.as_deref()))
        .field(label("설립일"), discord_timestamp(nation.registered_at_ms))
}
