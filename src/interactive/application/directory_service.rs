use crate::directory::Directory;
use crate::interactive::constants::LOOKUP_PAGE_SIZE;
use crate::interactive::domain::models::{LookupRequest, LookupResponse, SearchItem};
use anyhow::Result;
use std::sync::Arc;

/// Runs one directory lookup on behalf of the search coordinator: the
/// channel query (scoped to channels the session member belongs to) and the
/// user query run concurrently and both must complete.
pub struct DirectoryService {
    directory: Arc<dyn Directory>,
    member_id: String,
}

impl DirectoryService {
    pub fn new(directory: Arc<dyn Directory>, member_id: String) -> Self {
        Self {
            directory,
            member_id,
        }
    }

    pub fn lookup(&self, request: &LookupRequest) -> LookupResponse {
        LookupResponse {
            id: request.id,
            outcome: self.merged_results(&request.query),
        }
    }

    /// Merge rule: channels before users, each in the order its query
    /// returned, with the session member excluded from the user portion.
    /// Completion order of the two queries never affects the merge.
    fn merged_results(&self, query: &str) -> Result<Vec<SearchItem>> {
        let (channels, users) = rayon::join(
            || {
                self.directory
                    .query_channels_by_name(query, &self.member_id, LOOKUP_PAGE_SIZE)
            },
            || self.directory.query_users_by_name(query, LOOKUP_PAGE_SIZE),
        );
        let channels = channels?;
        let users = users?;

        Ok(channels
            .into_iter()
            .map(SearchItem::Channel)
            .chain(
                users
                    .into_iter()
                    .filter(|u| u.id != self.member_id)
                    .map(SearchItem::User),
            )
            .collect())
    }
}
