//! Member verification on guild join
//!
//! ```text
//! Start ─┬─> Skipped                      (ineligible or excluded guild, silent)
//!        └─> Queried ─┬─> TransportRejected
//!                     ├─> DomainRejected(code)
//!                     └─> Verified(outcome)
//! ```
//!
//! Runs once per join event. Nickname and role steps record their failures
//! and keep going; at most one notice is sent per run.

#[path = "verification_tests.rs"]
mod verification_tests;

use planetearth_api::PlanetEarthApi;
use planetearth_types::{decode_record, ApiRequest, ApiResult, ErrorCode, LinkedAccount};
use tracing::{debug, info, warn};

use crate::admission::GuildAdmissionFilter;
use crate::errors::{log_action_error, ActionError};
use crate::guild::{GuildInfo, MemberActions};
use crate::messages;
use crate::reply::{dispatch, Replyable, Reply};

/// Result of the nickname and role steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub nickname_applied: bool,
    pub role_applied: bool,
    pub failure_reasons: Vec<String>,
}

impl VerificationOutcome {
    fn fail(&mut self, reason: impl Into<String>) {
        self.failure_reasons.push(reason.into());
    }

    pub fn is_complete(&self) -> bool {
        self.failure_reasons.is_empty()
    }
}

/// Terminal state of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationState {
    Skipped,
    TransportRejected,
    DomainRejected(ErrorCode),
    Verified(VerificationOutcome),
}

/// Who gets verified and where the notice goes.
pub struct Verification<'a, A, G, N> {
    pub api: &'a A,
    pub guild: &'a G,
    /// The guild's notice channel; `None` drops notices with a warning
    pub notices: Option<&'a N>,
    pub admission: &'a GuildAdmissionFilter,
    pub verified_role: &'a str,
    pub excluded_guilds: &'a [u64],
}

impl<A, G, N> Verification<'_, A, G, N>
where
    A: PlanetEarthApi,
    G: MemberActions,
    N: Replyable,
{
    pub async fn run(&self, guild: &GuildInfo, member_id: u64) -> VerificationState {
        if self.excluded_guilds.contains(&guild.id)
            || !self.admission.is_eligible(&guild.name, guild.member_count)
        {
            debug!("Skipping verification in guild {} ({})", guild.id, guild.name);
            return VerificationState::Skipped;
        }

        let mention = messages::mention(member_id);

        let account = match self.api.call(&ApiRequest::linked_account(member_id)).await {
            ApiResult::Success { record } => match decode_record::<LinkedAccount>(&record) {
                Ok(account) => account,
                Err(e) => {
                    warn!("Undecodable discord record for member {}: {}", member_id, e);
                    self.notify(messages::join_api_unavailable(&mention)).await;
                    return VerificationState::TransportRejected;
                }
            },
            ApiResult::TransportFailure => {
                self.notify(messages::join_api_unavailable(&mention)).await;
                return VerificationState::TransportRejected;
            }
            ApiResult::DomainError { code, .. } => {
                let text = match code {
                    ErrorCode::NoDataFound => messages::join_not_verified(&mention),
                    ErrorCode::RateLimit => messages::join_rate_limited(&mention),
                    ErrorCode::Unknown => messages::join_unknown_error(&mention),
                };
                info!("Member {} not verified in guild {}: {}", member_id, guild.id, code);
                self.notify(text).await;
                return VerificationState::DomainRejected(code);
            }
        };

        let mut outcome = VerificationOutcome::default();
        self.apply_nickname(member_id, &account.name, &mut outcome).await;
        self.apply_role(member_id, &mut outcome).await;

        if outcome.is_complete() {
            info!(
                "Verified member {} as '{}' in guild {}",
                member_id, account.name, guild.id
            );
        } else {
            self.notify(messages::verification_incomplete(
                &mention,
                &outcome.failure_reasons,
            ))
            .await;
        }

        VerificationState::Verified(outcome)
    }

    async fn apply_nickname(&self, member_id: u64, name: &str, outcome: &mut VerificationOutcome) {
        match self.guild.set_nickname(member_id, name).await {
            Ok(()) => outcome.nickname_applied = true,
            Err(e) => {
                log_action_error(&format!("Nickname for member {}", member_id), &e);
                outcome.fail(match e {
                    ActionError::PermissionDenied(_) => messages::NICKNAME_PERMISSION_DENIED,
                    ActionError::Other(_) => messages::NICKNAME_FAILED,
                });
            }
        }
    }

    async fn apply_role(&self, member_id: u64, outcome: &mut VerificationOutcome) {
        let role = self.verified_role;
        let matches = match self.guild.roles_named(role).await {
            Ok(ids) => ids,
            Err(e) => {
                log_action_error("Listing guild roles", &e);
                outcome.fail(messages::ROLE_LIST_FAILED);
                return;
            }
        };

        match matches.as_slice() {
            [] => outcome.fail(messages::role_not_found(role)),
            [role_id] => match self.guild.add_role(member_id, *role_id).await {
                Ok(()) => outcome.role_applied = true,
                Err(e) => {
                    log_action_error(&format!("Role {} for member {}", role_id, member_id), &e);
                    outcome.fail(match e {
                        ActionError::PermissionDenied(_) => messages::role_permission_denied(role),
                        ActionError::Other(_) => messages::role_failed(role),
                    });
                }
            },
            _ => {
                warn!("{} roles named '{}', none assigned", matches.len(), role);
                outcome.fail(messages::role_ambiguous(role));
            }
        }
    }

    async fn notify(&self, text: String) {
        match self.notices {
            Some(channel) => dispatch(channel, &Reply::text(text)).await,
            None => warn!("No notice channel, dropping notice: {}", text),
        }
    }
}
