use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod integration_tests;

use crate::directory::Directory;
use self::application::directory_service::DirectoryService;
use self::constants::{
    DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, STATUS_CLEAR_DELAY_MS,
};
use self::domain::models::{LookupRequest, LookupResponse};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

/// Interactive chat client shell: owns the terminal, the app state, the
/// lookup worker and the debounce timer, and executes the commands the
/// reducer emits.
pub struct InteractiveChat {
    state: AppState,
    renderer: Renderer,
    directory: Arc<dyn Directory>,
    lookup_sender: Option<Sender<LookupRequest>>,
    lookup_receiver: Option<Receiver<LookupResponse>>,
    lookup_timer: Option<Instant>,
    scheduled_lookup_delay: Option<u64>,
    status_timer: Option<Instant>,
    last_ctrl_c_press: Option<Instant>,
}

impl InteractiveChat {
    pub fn new(directory: Arc<dyn Directory>, member_id: String) -> Self {
        Self {
            state: AppState::new(member_id),
            renderer: Renderer::new(),
            directory,
            lookup_sender: None,
            lookup_receiver: None,
            lookup_timer: None,
            scheduled_lookup_delay: None,
            status_timer: None,
            last_ctrl_c_press: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        self.refresh_channel_list();

        let mut terminal = self.setup_terminal()?;
        let (tx, rx) = self.start_lookup_worker();
        self.lookup_sender = Some(tx);
        self.lookup_receiver = Some(rx);

        let result = self.run_app(&mut terminal);
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Lookup responses; superseded ones are dropped here and again,
            // authoritatively, inside the coordinator.
            if let Some(receiver) = &self.lookup_receiver {
                if let Ok(response) = receiver.try_recv() {
                    if response.id == self.state.search.current_lookup_id() {
                        let msg = match response.outcome {
                            Ok(items) => Message::LookupCompleted(response.id, items),
                            Err(e) => {
                                tracing::warn!(error = %e, "directory lookup failed");
                                Message::LookupFailed(response.id)
                            }
                        };
                        self.handle_message(msg);
                    }
                }
            }

            // Debounce: only the most recently scheduled lookup fires.
            if let (Some(delay), Some(timer)) = (self.scheduled_lookup_delay, self.lookup_timer) {
                if timer.elapsed() >= Duration::from_millis(delay) {
                    self.scheduled_lookup_delay = None;
                    self.lookup_timer = None;
                    self.handle_message(Message::LookupRequested);
                }
            }

            if let Some(timer) = self.status_timer {
                if timer.elapsed() >= Duration::from_millis(STATUS_CLEAR_DELAY_MS) {
                    self.status_timer = None;
                    self.handle_message(Message::ClearStatus);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns true when the application should exit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        use crossterm::event::KeyModifiers;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::SetStatus("Press Ctrl+C again to exit".to_string()));
            self.status_timer = Some(Instant::now());
            return false;
        }

        // Global shortcuts.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') => {
                    self.handle_message(Message::OpenCreateTeam);
                    return false;
                }
                KeyCode::Char('n') => {
                    self.handle_message(Message::OpenCreateMessaging);
                    return false;
                }
                KeyCode::Char('p') => {
                    self.handle_message(Message::TogglePinnedOverlay);
                    return false;
                }
                _ => {}
            }
        }

        // While a search session is live, navigation keys belong to the
        // coordinator; everything else edits the query.
        if self.state.search.is_active() {
            let message = match key.code {
                KeyCode::Down => Some(Message::FocusNext),
                KeyCode::Up => Some(Message::FocusPrev),
                KeyCode::Enter => Some(Message::SubmitFocused),
                KeyCode::Esc => Some(Message::CancelSearch),
                _ => self.renderer.search_bar_mut().handle_key(key),
            };
            if let Some(msg) = message {
                self.handle_message(msg);
            }
            return false;
        }

        use self::domain::workspace::Workspace;
        let message = match self.state.workspace.active() {
            Workspace::Chat => match key.code {
                KeyCode::Esc if self.state.workspace.pinned_overlay_open() => {
                    Some(Message::ClosePinnedOverlay)
                }
                _ => self.renderer.search_bar_mut().handle_key(key),
            },
            Workspace::AdminChannelEdit(_)
            | Workspace::AdminChannelCreateTeam
            | Workspace::AdminChannelCreateMessaging => {
                self.renderer.admin_panel_mut().handle_key(key)
            }
        };
        if let Some(msg) = message {
            self.handle_message(msg);
        }
        false
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ScheduleLookup(delay) => {
                self.lookup_timer = Some(Instant::now());
                self.scheduled_lookup_delay = Some(delay);
            }
            Command::ExecuteLookup => {
                if let Some(sender) = &self.lookup_sender {
                    let request = LookupRequest {
                        id: self.state.search.current_lookup_id(),
                        query: self.state.search.query().to_string(),
                    };
                    let _ = sender.send(request);
                }
            }
            Command::SetActiveChannel(channel) => {
                self.state.set_active_channel(channel);
            }
            Command::OpenDirectConversation(user) => {
                match self
                    .directory
                    .resolve_or_create_direct_conversation(&self.state.member_id, &user.id)
                {
                    Ok(channel) => {
                        self.state.set_active_channel(Some(channel));
                        self.refresh_channel_list();
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, user = %user.id, "could not open conversation");
                        self.show_status(format!("Could not message {}", user.display_name()));
                    }
                }
            }
            Command::CreateChannel { name, kind } => {
                match self
                    .directory
                    .create_channel(&name, kind, &self.state.member_id)
                {
                    Ok(channel) => {
                        self.show_status(format!("Created #{}", channel.display_name()));
                        self.state.set_active_channel(Some(channel));
                        self.state.workspace.close_admin_panel();
                        self.refresh_channel_list();
                    }
                    Err(e) => {
                        self.show_status(format!("Could not create channel: {e}"));
                    }
                }
            }
            Command::RenameChannel { id, name } => {
                match self.directory.rename_channel(&id, &name) {
                    Ok(channel) => {
                        self.show_status(format!("Renamed to #{}", channel.display_name()));
                        self.state.set_active_channel(Some(channel));
                        self.state.workspace.close_admin_panel();
                        self.refresh_channel_list();
                    }
                    Err(e) => {
                        self.show_status(format!("Could not rename channel: {e}"));
                    }
                }
            }
            Command::ShowStatus(status) => {
                self.show_status(status);
            }
        }
    }

    fn show_status(&mut self, status: String) {
        self.state.status = Some(status);
        self.status_timer = Some(Instant::now());
    }

    fn refresh_channel_list(&mut self) {
        match self.directory.channels_for_member(&self.state.member_id) {
            Ok(channels) => self.state.channels = channels,
            Err(e) => tracing::warn!(error = %e, "could not list channels"),
        }
    }

    fn start_lookup_worker(&self) -> (Sender<LookupRequest>, Receiver<LookupResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<LookupRequest>();
        let (response_tx, response_rx) = mpsc::channel::<LookupResponse>();
        let service =
            DirectoryService::new(self.directory.clone(), self.state.member_id.clone());

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                tracing::debug!(id = request.id, query = %request.query, "running lookup");
                let _ = response_tx.send(service.lookup(&request));
            }
        });

        (request_tx, response_rx)
    }
}
