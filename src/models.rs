use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Minimal user record returned by the follower-listing endpoint.
///
/// Identity is the `login` alone: two followers with the same login are the
/// same follower regardless of avatar URL. That identity drives list
/// de-duplication and favorites removal, so `PartialEq` and `Hash` are
/// implemented by hand instead of derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follower {
    pub login: String,
    pub avatar_url: String,
}

impl PartialEq for Follower {
    fn eq(&self, other: &Self) -> bool {
        self.login == other.login
    }
}

impl Eq for Follower {}

impl Hash for Follower {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.login.hash(state);
    }
}

/// Full profile record for one account. Decoded once per fetch, never
/// persisted. Fields the API reports as `null` for unset profiles are
/// `Option`.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub public_gists: u32,
    pub followers: u32,
    pub following: u32,
    pub created_at: DateTime<Utc>,
}
