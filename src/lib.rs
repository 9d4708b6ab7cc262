pub mod directory;
pub mod interactive;
pub mod logging;

pub use directory::{
    ChannelHandle, ChannelKind, ChannelRecord, Directory, InMemoryDirectory, Roster, UserHandle,
};
pub use interactive::InteractiveChat;
pub use interactive::domain::workspace::{Workspace, WorkspaceController};
