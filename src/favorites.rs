use crate::error::{FollowerError, Result};
use crate::models::Follower;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Storage key the favorites list is persisted under inside the settings
/// file.
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoritesAction {
    Add,
    Remove,
}

/// Durable favorites list backed by a JSON settings file.
///
/// The whole list lives under [`FAVORITES_KEY`] as one blob and every update
/// rewrites it in full; settings stored under other keys ride along
/// untouched. The rewrite goes through a temp file and rename, so a failed
/// write leaves the previous blob intact.
///
/// `update` is read-modify-write with no lock around it: two concurrent
/// updates can read the same base list and the second write wins, dropping
/// the first. Callers that update from multiple tasks must serialize their
/// calls themselves.
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FavoritesStore { path: path.into() }
    }

    /// Read the persisted favorites. An absent settings file (or a file
    /// without the favorites key) is an empty list, not an error; a blob
    /// that is present but undecodable is `UnableToFavorite`.
    pub async fn retrieve(&self) -> Result<Vec<Follower>> {
        let mut settings = self.read_settings().await?;
        favorites_entry(&mut settings)
    }

    /// Apply `action` for `favorite` and persist the result.
    ///
    /// Adding a login that is already present fails with
    /// `AlreadyInFavorites` and writes nothing. Removing is idempotent: it
    /// drops every entry with the same login and removing a non-member is
    /// not an error.
    pub async fn update(&self, favorite: &Follower, action: FavoritesAction) -> Result<()> {
        let mut settings = self.read_settings().await?;
        let mut favorites = favorites_entry(&mut settings)?;

        match action {
            FavoritesAction::Add => {
                if favorites.contains(favorite) {
                    return Err(FollowerError::AlreadyInFavorites);
                }
                favorites.push(favorite.clone());
            }
            FavoritesAction::Remove => {
                favorites.retain(|f| f.login != favorite.login);
            }
        }

        let total = favorites.len();
        settings.insert(
            FAVORITES_KEY.to_string(),
            serde_json::to_value(favorites).map_err(|_| FollowerError::UnableToFavorite)?,
        );
        self.save(&settings).await?;
        debug!(login = %favorite.login, ?action, total, "favorites updated");
        Ok(())
    }

    async fn read_settings(&self) -> Result<BTreeMap<String, Value>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(_) => return Err(FollowerError::UnableToFavorite),
        };
        serde_json::from_slice(&raw).map_err(|_| FollowerError::UnableToFavorite)
    }

    async fn save(&self, settings: &BTreeMap<String, Value>) -> Result<()> {
        let blob =
            serde_json::to_vec_pretty(settings).map_err(|_| FollowerError::UnableToFavorite)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|_| FollowerError::UnableToFavorite)?;
        }

        // Write-then-rename keeps the old blob readable until the new one
        // fully lands.
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &blob)
            .await
            .map_err(|_| FollowerError::UnableToFavorite)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|_| FollowerError::UnableToFavorite)?;
        Ok(())
    }
}

/// Pull the favorites blob out of the settings map. A missing key is an
/// empty list.
fn favorites_entry(settings: &mut BTreeMap<String, Value>) -> Result<Vec<Follower>> {
    match settings.remove(FAVORITES_KEY) {
        None => Ok(Vec::new()),
        Some(blob) => serde_json::from_value(blob).map_err(|_| FollowerError::UnableToFavorite),
    }
}
