use crate::directory::{ChannelHandle, ChannelKind};
use crate::interactive::domain::workspace::{Workspace, WorkspaceController};
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::interactive::ui::search::ChannelSearchCoordinator;

/// Session-wide state: the workspace controller, the search coordinator, the
/// active channel reference and the sidebar channel list. All mutations go
/// through `update`, which returns the effect for the app shell to perform.
pub struct AppState {
    pub workspace: WorkspaceController,
    pub search: ChannelSearchCoordinator,
    pub active_channel: Option<ChannelHandle>,
    pub channels: Vec<ChannelHandle>,
    pub status: Option<String>,
    pub member_id: String,
}

impl AppState {
    pub fn new(member_id: String) -> Self {
        Self {
            workspace: WorkspaceController::new(),
            search: ChannelSearchCoordinator::new(),
            active_channel: None,
            channels: Vec::new(),
            status: None,
            member_id,
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(text) => self.search.on_query_changed(text, &mut self.workspace),
            Message::LookupRequested => self.search.on_lookup_requested(),
            Message::LookupCompleted(id, items) => self.search.on_lookup_completed(id, items),
            Message::LookupFailed(id) => self.search.on_lookup_failed(id, &mut self.workspace),
            Message::FocusNext => {
                self.search.focus_next();
                Command::None
            }
            Message::FocusPrev => {
                self.search.focus_prev();
                Command::None
            }
            Message::SubmitFocused => self.search.submit_focused(&mut self.workspace),
            Message::CancelSearch => self.search.cancel(&mut self.workspace),
            Message::ResultClicked(index) => self.search.click_result(index, &mut self.workspace),
            Message::OpenCreateTeam => {
                self.workspace
                    .display_workspace(Workspace::AdminChannelCreateTeam);
                Command::None
            }
            Message::OpenCreateMessaging => {
                self.workspace
                    .display_workspace(Workspace::AdminChannelCreateMessaging);
                Command::None
            }
            Message::CloseAdminPanel => {
                self.workspace.close_admin_panel();
                Command::None
            }
            Message::TogglePinnedOverlay => {
                self.workspace.toggle_pinned_overlay();
                Command::None
            }
            Message::ClosePinnedOverlay => {
                self.workspace.close_pinned_overlay();
                Command::None
            }
            Message::AdminSubmitted(name) => self.admin_submitted(name),
            Message::SetStatus(status) => {
                self.status = Some(status);
                Command::None
            }
            Message::ClearStatus => {
                self.status = None;
                Command::None
            }
        }
    }

    /// The admin form submits into whichever flow the active workspace
    /// denotes; submitting from the chat view is a no-op.
    fn admin_submitted(&mut self, name: String) -> Command {
        if name.trim().is_empty() {
            return Command::ShowStatus("channel name must not be empty".to_string());
        }
        match self.workspace.active() {
            Workspace::AdminChannelEdit(channel) => Command::RenameChannel {
                id: channel.id.clone(),
                name,
            },
            Workspace::AdminChannelCreateTeam => Command::CreateChannel {
                name,
                kind: ChannelKind::Team,
            },
            Workspace::AdminChannelCreateMessaging => Command::CreateChannel {
                name,
                kind: ChannelKind::Messaging,
            },
            Workspace::Chat => Command::None,
        }
    }

    pub fn set_active_channel(&mut self, channel: Option<ChannelHandle>) {
        tracing::debug!(channel = ?channel.as_ref().map(|c| c.id.as_str()), "active channel changed");
        self.active_channel = channel;
    }
}
