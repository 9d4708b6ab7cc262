use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use teamchat::directory::{ChannelKind, ChannelRecord, Roster, UserHandle};
use teamchat::{InMemoryDirectory, InteractiveChat, logging};

#[derive(Parser)]
#[command(
    name = "teamchat",
    version,
    about = "Terminal team-chat client with directory search and admin channel workspaces",
    long_about = None
)]
struct Cli {
    /// Roster file (JSON) for the in-memory directory backend
    #[arg(short, long, env = "TEAMCHAT_ROSTER")]
    roster: Option<PathBuf>,

    /// Member id to run the session as
    #[arg(short, long, env = "TEAMCHAT_USER", default_value = "dana")]
    user: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let directory = match &cli.roster {
        Some(path) => InMemoryDirectory::from_roster_file(path)?,
        None => {
            tracing::info!("no roster file given, using the demo roster");
            InMemoryDirectory::new(demo_roster(&cli.user))
        }
    };

    let mut app = InteractiveChat::new(Arc::new(directory), cli.user);
    app.run()
}

/// Small built-in roster so the client is explorable without a backend.
fn demo_roster(member_id: &str) -> Roster {
    let user = |id: &str, name: &str| UserHandle {
        id: id.to_string(),
        name: Some(name.to_string()),
    };
    let channel = |id: &str, members: &[&str]| ChannelRecord {
        id: id.to_string(),
        name: Some(id.to_string()),
        kind: ChannelKind::Team,
        members: members.iter().map(|m| m.to_string()).collect(),
    };

    Roster {
        users: vec![
            user(member_id, member_id),
            user("mario", "Mario"),
            user("peach", "Peach"),
            user("luigi", "Luigi"),
        ],
        channels: vec![
            channel("general", &[member_id, "mario", "peach", "luigi"]),
            channel("marketing", &[member_id, "mario"]),
            channel("engineering", &[member_id, "peach"]),
        ],
    }
}
