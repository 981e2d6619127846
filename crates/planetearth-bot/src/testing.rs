//! Recording doubles for the Discord-side seams.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ActionError;
use crate::guild::MemberActions;
use crate::reply::{Replyable, Reply};

// ── RecordingReply ────────────────────────────────────────────────────────────

/// Captures every reply; optionally fails every send with a fixed error.
#[derive(Clone, Default)]
pub struct RecordingReply {
    sent: Arc<Mutex<Vec<Reply>>>,
    attempts: Arc<AtomicUsize>,
    fail_with: Option<ActionError>,
}

impl RecordingReply {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: ActionError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Reply> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|r| r.content)
            .collect()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Replyable for RecordingReply {
    async fn send(&self, reply: &Reply) -> Result<(), ActionError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.sent.lock().unwrap().push(reply.clone());
        Ok(())
    }
}

// ── RecordingGuild ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuildCall {
    SetNickname { member_id: u64, nickname: String },
    RolesNamed(String),
    AddRole { member_id: u64, role_id: u64 },
}

/// A guild with a fixed role list; each action can be made to fail.
#[derive(Clone, Default)]
pub struct RecordingGuild {
    roles: Vec<(u64, String)>,
    calls: Arc<Mutex<Vec<GuildCall>>>,
    nickname_error: Option<ActionError>,
    roles_error: Option<ActionError>,
    add_role_error: Option<ActionError>,
}

impl RecordingGuild {
    pub fn with_roles(roles: &[(u64, &str)]) -> Self {
        Self {
            roles: roles.iter().map(|(id, n)| (*id, n.to_string())).collect(),
            ..Self::default()
        }
    }

    pub fn nickname_fails(mut self, err: ActionError) -> Self {
        self.nickname_error = Some(err);
        self
    }

    pub fn roles_fail(mut self, err: ActionError) -> Self {
        self.roles_error = Some(err);
        self
    }

    pub fn add_role_fails(mut self, err: ActionError) -> Self {
        self.add_role_error = Some(err);
        self
    }

    pub fn calls(&self) -> Vec<GuildCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn role_grants(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                GuildCall::AddRole { role_id, .. } => Some(role_id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: GuildCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl MemberActions for RecordingGuild {
    async fn set_nickname(&self, member_id: u64, nickname: &str) -> Result<(), ActionError> {
        self.record(GuildCall::SetNickname {
            member_id,
            nickname: nickname.to_string(),
        });
        self.nickname_error.clone().map_or(Ok(()), Err)
    }

    async fn roles_named(&self, name: &str) -> Result<Vec<u64>, ActionError> {
        self.record(GuildCall::RolesNamed(name.to_string()));
        if let Some(err) = &self.roles_error {
            return Err(err.clone());
        }
        Ok(self
            .roles
            .iter()
            .filter(|(_, n)| n == name)
            .map(|(id, _)| *id)
            .collect())
    }

    async fn add_role(&self, member_id: u64, role_id: u64) -> Result<(), ActionError> {
        self.record(GuildCall::AddRole { member_id, role_id });
        self.add_role_error.clone().map_or(Ok(()), Err)
    }
}
