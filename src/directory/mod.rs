//! Channel/user directory boundary.
//!
//! The directory is the searchable index of channels and users plus the
//! channel-mutation surface the admin flows need. In a deployment this is
//! backed by the hosted chat service; `InMemoryDirectory` is the reference
//! backend used by demo mode and tests.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Mutex;

/// A channel as the rest of the application addresses it. The display name
/// falls back to the id when the channel was created without one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelHandle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChannelHandle {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHandle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserHandle {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Named multi-member channel.
    Team,
    /// Direct conversation between two members.
    Messaging,
}

/// Contract the search and admin flows require from a backend.
///
/// Autocomplete matching is by name prefix (falling back to the id), case
/// insensitive. Channel queries are scoped to channels the given member
/// belongs to; the scoping predicate belongs to the backend, not the caller.
pub trait Directory: Send + Sync {
    fn query_channels_by_name(
        &self,
        prefix: &str,
        member_id: &str,
        limit: usize,
    ) -> Result<Vec<ChannelHandle>>;

    fn query_users_by_name(&self, prefix: &str, limit: usize) -> Result<Vec<UserHandle>>;

    /// Idempotent: resolving twice with the same user yields the same
    /// conversation. Both participants become members.
    fn resolve_or_create_direct_conversation(
        &self,
        member_id: &str,
        with_user_id: &str,
    ) -> Result<ChannelHandle>;

    fn create_channel(
        &self,
        name: &str,
        kind: ChannelKind,
        creator_id: &str,
    ) -> Result<ChannelHandle>;

    fn rename_channel(&self, id: &str, new_name: &str) -> Result<ChannelHandle>;

    fn channels_for_member(&self, member_id: &str) -> Result<Vec<ChannelHandle>>;
}

/// Roster file format for the in-memory backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub users: Vec<UserHandle>,
    #[serde(default)]
    pub channels: Vec<ChannelRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_channel_kind")]
    pub kind: ChannelKind,
    #[serde(default)]
    pub members: Vec<String>,
}

fn default_channel_kind() -> ChannelKind {
    ChannelKind::Team
}

impl ChannelRecord {
    fn handle(&self) -> ChannelHandle {
        ChannelHandle {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.to_lowercase();
        self.name
            .as_deref()
            .unwrap_or(&self.id)
            .to_lowercase()
            .starts_with(&prefix)
    }
}

/// Roster-backed directory. Interior mutability because the lookup worker and
/// the UI thread share one instance behind an `Arc`.
pub struct InMemoryDirectory {
    inner: Mutex<Roster>,
}

impl InMemoryDirectory {
    pub fn new(roster: Roster) -> Self {
        Self {
            inner: Mutex::new(roster),
        }
    }

    pub fn from_roster_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read roster file {}", path.display()))?;
        let roster: Roster = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse roster file {}", path.display()))?;
        Ok(Self::new(roster))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Roster> {
        // A panic while holding the lock is already fatal to the app.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Directory for InMemoryDirectory {
    fn query_channels_by_name(
        &self,
        prefix: &str,
        member_id: &str,
        limit: usize,
    ) -> Result<Vec<ChannelHandle>> {
        let roster = self.lock();
        Ok(roster
            .channels
            .iter()
            .filter(|c| c.kind == ChannelKind::Team)
            .filter(|c| c.members.iter().any(|m| m == member_id))
            .filter(|c| c.matches_prefix(prefix))
            .take(limit)
            .map(ChannelRecord::handle)
            .collect())
    }

    fn query_users_by_name(&self, prefix: &str, limit: usize) -> Result<Vec<UserHandle>> {
        let prefix = prefix.to_lowercase();
        let roster = self.lock();
        Ok(roster
            .users
            .iter()
            .filter(|u| {
                u.name
                    .as_deref()
                    .unwrap_or(&u.id)
                    .to_lowercase()
                    .starts_with(&prefix)
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn resolve_or_create_direct_conversation(
        &self,
        member_id: &str,
        with_user_id: &str,
    ) -> Result<ChannelHandle> {
        let mut roster = self.lock();
        let user = roster
            .users
            .iter()
            .find(|u| u.id == with_user_id)
            .cloned()
            .with_context(|| format!("unknown user '{with_user_id}'"))?;

        let dm_id = format!("dm-{with_user_id}");
        if let Some(existing) = roster.channels.iter().find(|c| c.id == dm_id) {
            return Ok(existing.handle());
        }

        let record = ChannelRecord {
            id: dm_id,
            name: Some(user.display_name().to_string()),
            kind: ChannelKind::Messaging,
            members: vec![member_id.to_string(), with_user_id.to_string()],
        };
        let handle = record.handle();
        roster.channels.push(record);
        Ok(handle)
    }

    fn create_channel(
        &self,
        name: &str,
        kind: ChannelKind,
        creator_id: &str,
    ) -> Result<ChannelHandle> {
        let name = name.trim();
        if name.is_empty() {
            bail!("channel name must not be empty");
        }
        let id = slugify(name);
        let mut roster = self.lock();
        if roster.channels.iter().any(|c| c.id == id) {
            bail!("channel '{id}' already exists");
        }
        let record = ChannelRecord {
            id,
            name: Some(name.to_string()),
            kind,
            members: vec![creator_id.to_string()],
        };
        let handle = record.handle();
        roster.channels.push(record);
        Ok(handle)
    }

    fn rename_channel(&self, id: &str, new_name: &str) -> Result<ChannelHandle> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            bail!("channel name must not be empty");
        }
        let mut roster = self.lock();
        let record = roster
            .channels
            .iter_mut()
            .find(|c| c.id == id)
            .with_context(|| format!("unknown channel '{id}'"))?;
        record.name = Some(new_name.to_string());
        Ok(record.handle())
    }

    fn channels_for_member(&self, member_id: &str) -> Result<Vec<ChannelHandle>> {
        let roster = self.lock();
        Ok(roster
            .channels
            .iter()
            .filter(|c| c.members.iter().any(|m| m == member_id))
            .map(ChannelRecord::handle)
            .collect())
    }
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}
