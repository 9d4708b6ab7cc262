use crate::directory::{ChannelHandle, ChannelKind, UserHandle};

/// Effects the reducer asks the app shell to perform. Workspace transitions
/// are not commands; they happen synchronously inside the reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Start (or restart) the debounce timer; delay in milliseconds.
    ScheduleLookup(u64),
    /// Send the current query to the lookup worker.
    ExecuteLookup,
    /// Tell the chat view which channel's messages to render.
    SetActiveChannel(Option<ChannelHandle>),
    /// Resolve-or-create a direct conversation, then activate it.
    OpenDirectConversation(UserHandle),
    CreateChannel {
        name: String,
        kind: ChannelKind,
    },
    RenameChannel {
        id: String,
        name: String,
    },
    ShowStatus(String),
}
