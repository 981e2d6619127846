//! Resident / town / nation lookups
//!
//! One API call per query, plus a dependent town lookup for residents that
//! belong to a town. Every outcome becomes exactly one [`Reply`].

#[path = "lookup_tests.rs"]
mod lookup_tests;

use planetearth_api::PlanetEarthApi;
use planetearth_types::{
    decode_record, ApiRequest, ApiResult, Endpoint, ErrorCode, NationRecord, ResidentRecord,
    TownNation, TownRecord,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::messages;
use crate::render;
use crate::reply::Reply;

/// The three record kinds a user can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Resident,
    Town,
    Nation,
}

impl LookupKind {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Resident => Endpoint::Resident,
            Self::Town => Endpoint::Town,
            Self::Nation => Endpoint::Nation,
        }
    }

    fn not_found(&self) -> &'static str {
        match self {
            Self::Resident => messages::RESIDENT_NOT_FOUND,
            Self::Town => messages::TOWN_NOT_FOUND,
            Self::Nation => messages::NATION_NOT_FOUND,
        }
    }
}

enum Fetched<T> {
    Record(T),
    Failed(Reply),
}

/// Call `kind`'s endpoint and decode the record, or produce the failure reply.
async fn fetch<A, T>(api: &A, kind: LookupKind, name: &str) -> Fetched<T>
where
    A: PlanetEarthApi,
    T: DeserializeOwned,
{
    match api.call(&ApiRequest::by_name(kind.endpoint(), name)).await {
        ApiResult::Success { record } => match decode_record::<T>(&record) {
            Ok(decoded) => Fetched::Record(decoded),
            Err(e) => {
                warn!("Undecodable {} record for '{}': {}", kind.endpoint(), name, e);
                Fetched::Failed(Reply::text(messages::API_UNAVAILABLE))
            }
        },
        ApiResult::DomainError { code, message } => {
            debug!(
                "{} lookup for '{}' rejected: {} {:?}",
                kind.endpoint(),
                name,
                code,
                message
            );
            Fetched::Failed(Reply::text(match code {
                ErrorCode::NoDataFound => kind.not_found(),
                ErrorCode::RateLimit => messages::RATE_LIMITED,
                ErrorCode::Unknown => messages::UNKNOWN_ERROR,
            }))
        }
        ApiResult::TransportFailure => Fetched::Failed(Reply::text(messages::API_UNAVAILABLE)),
    }
}

/// Nation of `town`, or `None` when the town has none or cannot be resolved.
async fn resolve_nation<A: PlanetEarthApi>(api: &A, town: &str) -> Option<String> {
    match api.call(&ApiRequest::by_name(Endpoint::Town, town)).await {
        ApiResult::Success { record } => match decode_record::<TownNation>(&record) {
            Ok(town) => town.nation,
            Err(e) => {
                warn!("Undecodable town record for '{}': {}", town, e);
                None
            }
        },
        other => {
            debug!("Nation of town '{}' unresolved: {:?}", town, other);
            None
        }
    }
}

/// Run one lookup and build its reply.
pub async fn lookup<A: PlanetEarthApi>(api: &A, kind: LookupKind, name: &str) -> Reply {
    match kind {
        LookupKind::Resident => match fetch::<A, ResidentRecord>(api, kind, name).await {
            Fetched::Record(resident) => {
                let nation = match resident.town.as_deref() {
                    Some(town) => resolve_nation(api, town).await,
                    None => None,
                };
                Reply::embed(render::resident_embed(&resident, nation.as_deref()))
            }
            Fetched::Failed(reply) => reply,
        },
        LookupKind::Town => match fetch::<A, TownRecord>(api, kind, name).await {
            Fetched::Record(town) => Reply::embed(render::town_embed(&town)),
            Fetched::Failed(reply) => reply,
        },
        LookupKind::Nation => match fetch::<A, NationRecord>(api, kind, name).await {
            Fetched::Record(nation) => Reply::embed(render::nation_embed(&nation)),
            Fetched::Failed(reply) => reply,
        },
    }
}
