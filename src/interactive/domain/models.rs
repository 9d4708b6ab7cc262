use crate::directory::{ChannelHandle, UserHandle};
use anyhow::Result;

/// One entry in the merged search-result list. The kind is fixed at merge
/// time; downstream code never re-derives it from the shape of the data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchItem {
    Channel(ChannelHandle),
    User(UserHandle),
}

impl SearchItem {
    /// Stable identifier used for focus tracking and list keys.
    pub fn id(&self) -> &str {
        match self {
            SearchItem::Channel(c) => &c.id,
            SearchItem::User(u) => &u.id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SearchItem::Channel(c) => c.display_name(),
            SearchItem::User(u) => u.display_name(),
        }
    }
}

/// Request handed to the lookup worker. The id is the coordinator's staleness
/// token at the time the debounce settled.
#[derive(Clone, Debug)]
pub struct LookupRequest {
    pub id: u64,
    pub query: String,
}

/// Worker answer, carrying the originating request id so superseded lookups
/// can be discarded at resolution time.
pub struct LookupResponse {
    pub id: u64,
    pub outcome: Result<Vec<SearchItem>>,
}
