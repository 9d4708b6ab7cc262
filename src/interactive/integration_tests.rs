//! End-to-end flows driven through the reducer with a synchronous command
//! executor standing in for the app shell's worker and timers.

use crate::directory::{
    ChannelHandle, ChannelKind, ChannelRecord, Directory, InMemoryDirectory, Roster, UserHandle,
};
use crate::interactive::application::directory_service::DirectoryService;
use crate::interactive::domain::models::{LookupRequest, SearchItem};
use crate::interactive::domain::workspace::Workspace;
use crate::interactive::ui::app_state::AppState;
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use anyhow::{Result, bail};
use std::sync::Arc;

/// Mirrors `InteractiveChat::execute_command`, except that lookup requests
/// are queued instead of sent to a worker so tests can interleave typing
/// with lookup resolution.
struct Harness {
    state: AppState,
    service: DirectoryService,
    directory: Arc<dyn Directory>,
    debounce_armed: bool,
    pending_requests: Vec<LookupRequest>,
}

impl Harness {
    fn new(directory: Arc<dyn Directory>, member_id: &str) -> Self {
        Self {
            state: AppState::new(member_id.to_string()),
            service: DirectoryService::new(directory.clone(), member_id.to_string()),
            directory,
            debounce_armed: false,
            pending_requests: Vec::new(),
        }
    }

    fn dispatch(&mut self, msg: Message) {
        let command = self.state.update(msg);
        self.execute(command);
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleLookup(_) => self.debounce_armed = true,
            Command::ExecuteLookup => self.pending_requests.push(LookupRequest {
                id: self.state.search.current_lookup_id(),
                query: self.state.search.query().to_string(),
            }),
            Command::SetActiveChannel(channel) => self.state.set_active_channel(channel),
            Command::OpenDirectConversation(user) => {
                match self
                    .directory
                    .resolve_or_create_direct_conversation(&self.state.member_id, &user.id)
                {
                    Ok(channel) => self.state.set_active_channel(Some(channel)),
                    Err(_) => self.state.status = Some("could not open conversation".into()),
                }
            }
            Command::CreateChannel { name, kind } => {
                match self
                    .directory
                    .create_channel(&name, kind, &self.state.member_id)
                {
                    Ok(channel) => {
                        self.state.set_active_channel(Some(channel));
                        self.state.workspace.close_admin_panel();
                    }
                    Err(e) => self.state.status = Some(e.to_string()),
                }
            }
            Command::RenameChannel { id, name } => {
                match self.directory.rename_channel(&id, &name) {
                    Ok(channel) => {
                        self.state.set_active_channel(Some(channel));
                        self.state.workspace.close_admin_panel();
                    }
                    Err(e) => self.state.status = Some(e.to_string()),
                }
            }
            Command::ShowStatus(status) => self.state.status = Some(status),
        }
    }

    /// The debounce window elapses: the most recent scheduled lookup fires.
    fn settle_debounce(&mut self) {
        if std::mem::take(&mut self.debounce_armed) {
            self.dispatch(Message::LookupRequested);
        }
    }

    /// Every outstanding lookup resolves, in the order it was issued.
    fn resolve_pending(&mut self) {
        for request in std::mem::take(&mut self.pending_requests) {
            let response = self.service.lookup(&request);
            let msg = match response.outcome {
                Ok(items) => Message::LookupCompleted(response.id, items),
                Err(_) => Message::LookupFailed(response.id),
            };
            self.dispatch(msg);
        }
    }

    fn search_and_resolve(&mut self, query: &str) {
        self.dispatch(Message::QueryChanged(query.to_string()));
        self.settle_debounce();
        self.resolve_pending();
    }
}

fn roster() -> Roster {
    Roster {
        users: vec![
            UserHandle {
                id: "dana".into(),
                name: Some("Dana".into()),
            },
            UserHandle {
                id: "mario".into(),
                name: Some("Mario".into()),
            },
        ],
        channels: vec![ChannelRecord {
            id: "marketing".into(),
            name: Some("marketing".into()),
            kind: ChannelKind::Team,
            members: vec!["dana".into(), "mario".into()],
        }],
    }
}

fn harness() -> Harness {
    Harness::new(Arc::new(InMemoryDirectory::new(roster())), "dana")
}

#[test]
fn searching_mar_merges_channels_before_users_and_opens_the_channel() {
    let mut h = harness();
    h.search_and_resolve("mar");

    // "Mario" matches the user query, "marketing" the channel query, and
    // "dana" (the session member) is excluded.
    let ids: Vec<&str> = h.state.search.results().iter().map(SearchItem::id).collect();
    assert_eq!(ids, vec!["marketing", "mario"]);
    assert!(!h.state.search.is_loading());

    // Two ArrowDowns from unfocused reach index 1; a third wraps to 0.
    h.dispatch(Message::FocusNext);
    assert_eq!(h.state.search.focused(), Some(0));
    h.dispatch(Message::FocusNext);
    assert_eq!(h.state.search.focused(), Some(1));
    h.dispatch(Message::FocusNext);
    assert_eq!(h.state.search.focused(), Some(0));

    h.dispatch(Message::SubmitFocused);
    assert_eq!(
        h.state.active_channel.as_ref().map(|c| c.id.as_str()),
        Some("marketing")
    );
    match h.state.workspace.active() {
        Workspace::AdminChannelEdit(c) => assert_eq!(c.id, "marketing"),
        other => panic!("unexpected workspace {other:?}"),
    }
    assert!(!h.state.search.is_active());
    assert!(!h.state.search.dropdown_open());
}

#[test]
fn selecting_a_user_opens_the_same_direct_conversation_every_time() {
    let mut h = harness();
    h.search_and_resolve("mar");
    h.dispatch(Message::ResultClicked(1));

    assert_eq!(h.state.workspace.active(), &Workspace::Chat);
    let first = h.state.active_channel.clone().unwrap();
    assert_eq!(first.id, "dm-mario");

    // Searching again and selecting the same user resolves, not recreates.
    h.search_and_resolve("mar");
    h.dispatch(Message::ResultClicked(1));
    assert_eq!(h.state.active_channel.unwrap().id, first.id);
}

#[test]
fn failing_lookup_degrades_to_chat_with_a_clean_slate() {
    struct FailingDirectory;
    impl Directory for FailingDirectory {
        fn query_channels_by_name(
            &self,
            _: &str,
            _: &str,
            _: usize,
        ) -> Result<Vec<ChannelHandle>> {
            bail!("boom");
        }
        fn query_users_by_name(&self, _: &str, _: usize) -> Result<Vec<UserHandle>> {
            bail!("boom");
        }
        fn resolve_or_create_direct_conversation(&self, _: &str, _: &str) -> Result<ChannelHandle> {
            bail!("boom");
        }
        fn create_channel(&self, _: &str, _: ChannelKind, _: &str) -> Result<ChannelHandle> {
            bail!("boom");
        }
        fn rename_channel(&self, _: &str, _: &str) -> Result<ChannelHandle> {
            bail!("boom");
        }
        fn channels_for_member(&self, _: &str) -> Result<Vec<ChannelHandle>> {
            bail!("boom");
        }
    }

    let mut h = Harness::new(Arc::new(FailingDirectory), "dana");
    h.dispatch(Message::OpenCreateTeam);
    h.search_and_resolve("xyz");

    assert_eq!(h.state.search.query(), "");
    assert!(!h.state.search.dropdown_open());
    assert!(!h.state.search.is_loading());
    assert_eq!(h.state.workspace.active(), &Workspace::Chat);
}

#[test]
fn escape_closes_the_dropdown_and_returns_to_chat() {
    let mut h = harness();
    h.dispatch(Message::OpenCreateTeam);
    h.search_and_resolve("foo");
    assert!(h.state.search.dropdown_open());

    h.dispatch(Message::CancelSearch);
    assert_eq!(h.state.search.query(), "");
    assert!(!h.state.search.dropdown_open());
    assert_eq!(h.state.workspace.active(), &Workspace::Chat);
}

#[test]
fn a_superseded_lookup_cannot_overwrite_the_newer_results() {
    let mut h = harness();

    // "mar" is typed and its lookup goes out, but before it resolves the
    // query grows to "marketing-week" (which matches nothing).
    h.dispatch(Message::QueryChanged("mar".to_string()));
    h.settle_debounce();
    h.dispatch(Message::QueryChanged("marketing-week".to_string()));
    h.settle_debounce();

    // Both lookups now resolve in issue order.
    h.resolve_pending();

    // The stale "mar" results must not be shown for "marketing-week".
    assert_eq!(h.state.search.query(), "marketing-week");
    assert!(h.state.search.results().is_empty());
    assert!(!h.state.search.is_loading());
}

#[test]
fn create_team_flow_activates_the_new_channel_and_closes_the_panel() {
    let mut h = harness();
    h.dispatch(Message::OpenCreateTeam);
    h.dispatch(Message::AdminSubmitted("design".to_string()));

    assert_eq!(h.state.workspace.active(), &Workspace::Chat);
    assert_eq!(
        h.state.active_channel.as_ref().map(|c| c.id.as_str()),
        Some("design")
    );

    // The new channel is findable afterwards.
    h.search_and_resolve("des");
    let ids: Vec<&str> = h.state.search.results().iter().map(SearchItem::id).collect();
    assert_eq!(ids, vec!["design"]);
}

#[test]
fn edit_flow_renames_the_channel_and_closes_the_panel() {
    let mut h = harness();
    h.search_and_resolve("mar");
    h.dispatch(Message::ResultClicked(0));
    assert!(matches!(
        h.state.workspace.active(),
        Workspace::AdminChannelEdit(_)
    ));

    h.dispatch(Message::AdminSubmitted("growth".to_string()));
    assert_eq!(h.state.workspace.active(), &Workspace::Chat);
    let active = h.state.active_channel.unwrap();
    assert_eq!(active.id, "marketing");
    assert_eq!(active.display_name(), "growth");
}

#[test]
fn duplicate_channel_name_keeps_the_panel_open_with_a_status() {
    let mut h = harness();
    h.dispatch(Message::OpenCreateTeam);
    h.dispatch(Message::AdminSubmitted("marketing".to_string()));

    assert_eq!(h.state.workspace.active(), &Workspace::AdminChannelCreateTeam);
    assert!(h.state.status.is_some());
}
