use crate::directory::ChannelHandle;
use anyhow::{Result, bail};

/// The top-level view currently displayed: the chat view or one of the admin
/// create/edit forms. Exactly one workspace is active per session; consumers
/// match exhaustively so adding a kind is a compile-time-checked change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Workspace {
    Chat,
    AdminChannelEdit(ChannelHandle),
    AdminChannelCreateTeam,
    AdminChannelCreateMessaging,
}

impl Workspace {
    /// The edit form needs an addressable target, so a channel without an id
    /// is rejected at construction rather than rendered half-formed.
    pub fn admin_channel_edit(channel: ChannelHandle) -> Result<Self> {
        if channel.id.trim().is_empty() {
            bail!("cannot open channel edit: channel has no id");
        }
        Ok(Self::AdminChannelEdit(channel))
    }
}

/// Single source of truth for what is on screen, plus the pinned-messages
/// overlay flag. Transitions happen only through these operations; there are
/// no timed or autonomous transitions.
pub struct WorkspaceController {
    active: Workspace,
    pinned_overlay_open: bool,
}

impl Default for WorkspaceController {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceController {
    pub fn new() -> Self {
        Self {
            active: Workspace::Chat,
            pinned_overlay_open: false,
        }
    }

    pub fn active(&self) -> &Workspace {
        &self.active
    }

    pub fn pinned_overlay_open(&self) -> bool {
        self.pinned_overlay_open
    }

    /// Replaces the active workspace unconditionally. Switching views also
    /// closes the pinned overlay so it never stays open over an unrelated
    /// view.
    pub fn display_workspace(&mut self, next: Workspace) {
        tracing::debug!(workspace = ?next, "workspace transition");
        self.active = next;
        self.pinned_overlay_open = false;
    }

    pub fn close_admin_panel(&mut self) {
        self.display_workspace(Workspace::Chat);
    }

    pub fn toggle_pinned_overlay(&mut self) {
        self.pinned_overlay_open = !self.pinned_overlay_open;
    }

    pub fn close_pinned_overlay(&mut self) {
        self.pinned_overlay_open = false;
    }
}
