use crate::error::Result;
use crate::github::{GitHubClient, PER_PAGE};
use crate::models::Follower;
use std::collections::HashSet;
use tracing::debug;

/// One logical follower-listing session for a single username.
///
/// Accumulates pages in arrival order with duplicate logins dropped, and
/// tracks whether another page is worth requesting. Page loads take `&mut
/// self`, which is what serializes successive requests: page N+1 cannot be
/// issued until page N's future resolves.
pub struct FollowerList {
    username: String,
    page: u32,
    has_more: bool,
    followers: Vec<Follower>,
    seen: HashSet<String>,
}

impl FollowerList {
    pub fn new(username: impl Into<String>) -> Self {
        FollowerList {
            username: username.into(),
            page: 1,
            has_more: true,
            followers: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Fetch the next page and fold it into the accumulated list.
    ///
    /// A page shorter than the server's page size marks the session
    /// complete; an exactly-full page leaves `has_more` true. Returns the
    /// newly accepted followers for this page.
    pub async fn load_next_page(&mut self, client: &GitHubClient) -> Result<&[Follower]> {
        let fetched = client.get_followers(&self.username, self.page).await?;
        if (fetched.len() as u32) < PER_PAGE {
            self.has_more = false;
        }
        self.page += 1;

        let before = self.followers.len();
        for follower in fetched {
            if self.seen.insert(follower.login.clone()) {
                self.followers.push(follower);
            }
        }
        debug!(
            username = %self.username,
            accepted = self.followers.len() - before,
            total = self.followers.len(),
            has_more = self.has_more,
            "follower page merged"
        );
        Ok(&self.followers[before..])
    }

    /// Whether the server may still have another page.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// The next page number that `load_next_page` would request (1-based).
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// All followers accepted so far, in arrival order, deduplicated by
    /// login.
    pub fn followers(&self) -> &[Follower] {
        &self.followers
    }
}
