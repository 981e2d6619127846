//! Shared types for the PlanetEarth API and the Discord bot built on it

pub mod embed;
pub mod records;
pub mod request;
pub mod result;

mod lenient;

pub use embed::{Embed, EmbedField, EMBED_GREEN};
pub use records::{
    decode_record, LinkedAccount, NationRecord, ResidentRecord, TownNation, TownRecord,
};
pub use request::{ApiRequest, Endpoint};
pub use result::{ApiResult, ErrorCode, Record};
