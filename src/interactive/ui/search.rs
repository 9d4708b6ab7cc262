use crate::interactive::constants::LOOKUP_DEBOUNCE_MS;
use crate::interactive::domain::models::SearchItem;
use crate::interactive::domain::workspace::{Workspace, WorkspaceController};
use crate::interactive::ui::commands::Command;

/// Debounced search-and-navigate flow over the channel/user directory.
///
/// Owns the ephemeral search session: query text, merged result list,
/// keyboard focus, loading and dropdown flags. The session exists while the
/// query is non-empty and is torn down on empty input, Escape, or a
/// confirmed selection. A monotonically increasing lookup token makes
/// superseded lookups inert: a response is applied only when its token still
/// matches, so a lookup for an older query can never overwrite the state of
/// a newer one.
pub struct ChannelSearchCoordinator {
    query: String,
    results: Vec<SearchItem>,
    focused: Option<usize>,
    loading: bool,
    dropdown_open: bool,
    current_lookup_id: u64,
}

impl Default for ChannelSearchCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelSearchCoordinator {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            focused: None,
            loading: false,
            dropdown_open: false,
            current_lookup_id: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchItem] {
        &self.results
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn current_lookup_id(&self) -> u64 {
        self.current_lookup_id
    }

    /// A search session is live while the query is non-empty.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn on_query_changed(
        &mut self,
        text: String,
        workspace: &mut WorkspaceController,
    ) -> Command {
        if text.trim().is_empty() {
            self.reset_session();
            workspace.display_workspace(Workspace::Chat);
            return Command::None;
        }

        self.query = text;
        self.loading = true;
        self.dropdown_open = true;
        self.focused = None;
        // Invalidate any in-flight lookup right away; the debounced lookup
        // for this text will run under a fresh token.
        self.current_lookup_id += 1;
        Command::ScheduleLookup(LOOKUP_DEBOUNCE_MS)
    }

    /// The debounce settled. A clear may have raced the timer, in which case
    /// there is nothing left to look up.
    pub fn on_lookup_requested(&mut self) -> Command {
        if !self.is_active() {
            return Command::None;
        }
        self.loading = true;
        self.current_lookup_id += 1;
        Command::ExecuteLookup
    }

    pub fn on_lookup_completed(&mut self, id: u64, items: Vec<SearchItem>) -> Command {
        if id != self.current_lookup_id || !self.is_active() {
            tracing::debug!(id, "dropping stale lookup response");
            return Command::None;
        }
        self.results = items;
        self.loading = false;
        Command::None
    }

    /// Lookup failures degrade to "no search": the session closes and the
    /// chat workspace is shown. Never a stuck error state.
    pub fn on_lookup_failed(&mut self, id: u64, workspace: &mut WorkspaceController) -> Command {
        if id != self.current_lookup_id {
            return Command::None;
        }
        tracing::warn!(id, "directory lookup failed, closing search");
        self.reset_session();
        workspace.display_workspace(Workspace::Chat);
        Command::None
    }

    /// ArrowDown: advance focus, wrapping to the top past the last result.
    pub fn focus_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.focused = Some(match self.focused {
            Some(i) if i + 1 < self.results.len() => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// ArrowUp: move focus back, wrapping to the bottom at the top. From an
    /// unfocused state focus lands on the first entry.
    pub fn focus_prev(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.focused = Some(match self.focused {
            Some(0) => self.results.len() - 1,
            Some(i) => i - 1,
            None => 0,
        });
    }

    /// Enter: resolve the focused entry, then tear the session down whether
    /// or not anything was focused.
    pub fn submit_focused(&mut self, workspace: &mut WorkspaceController) -> Command {
        let command = match self.focused.and_then(|i| self.results.get(i)).cloned() {
            Some(item) => resolve_selection(item, workspace),
            None => Command::None,
        };
        self.reset_session();
        command
    }

    /// Pointer path: resolve a specific entry without requiring prior focus.
    pub fn click_result(&mut self, index: usize, workspace: &mut WorkspaceController) -> Command {
        let command = match self.results.get(index).cloned() {
            Some(item) => resolve_selection(item, workspace),
            None => Command::None,
        };
        self.reset_session();
        command
    }

    /// Escape: abandon the session and return to the chat workspace.
    pub fn cancel(&mut self, workspace: &mut WorkspaceController) -> Command {
        self.reset_session();
        workspace.display_workspace(Workspace::Chat);
        Command::None
    }

    fn reset_session(&mut self) {
        self.query.clear();
        self.results.clear();
        self.focused = None;
        self.loading = false;
        self.dropdown_open = false;
        // In-flight lookups must not resurrect the cleared session.
        self.current_lookup_id += 1;
    }
}

/// A channel selection opens that channel for editing; a user selection
/// opens (or creates) a direct conversation and returns to the chat view.
fn resolve_selection(item: SearchItem, workspace: &mut WorkspaceController) -> Command {
    match item {
        SearchItem::Channel(channel) => {
            match Workspace::admin_channel_edit(channel.clone()) {
                Ok(edit) => {
                    workspace.display_workspace(edit);
                    Command::SetActiveChannel(Some(channel))
                }
                Err(e) => {
                    // A directory entry without an id is a collaborator bug;
                    // refuse the edit form rather than render it unaddressed.
                    tracing::warn!(error = %e, "rejected channel selection");
                    workspace.display_workspace(Workspace::Chat);
                    Command::None
                }
            }
        }
        SearchItem::User(user) => {
            workspace.display_workspace(Workspace::Chat);
            Command::OpenDirectConversation(user)
        }
    }
}
