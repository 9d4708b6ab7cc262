use crate::interactive::domain::models::SearchItem;

#[derive(Clone, Debug)]
pub enum Message {
    // Search session
    QueryChanged(String),
    LookupRequested,
    LookupCompleted(u64, Vec<SearchItem>),
    LookupFailed(u64),
    FocusNext,
    FocusPrev,
    SubmitFocused,
    CancelSearch,
    ResultClicked(usize),

    // Workspace navigation
    OpenCreateTeam,
    OpenCreateMessaging,
    CloseAdminPanel,
    TogglePinnedOverlay,
    ClosePinnedOverlay,

    // Admin panel
    AdminSubmitted(String),

    // Status line
    SetStatus(String),
    ClearStatus,
}
