use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "github-followers")]
#[command(about = "GitHub follower directory - fetch follower lists and profiles, keep a local favorites list")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Settings file the favorites list is persisted in
    #[arg(long, env = "GF_FAVORITES_FILE", default_value = "favorites.json")]
    pub favorites_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List a user's followers
    Followers {
        username: String,

        /// Keep paging until the server runs out of followers
        #[arg(long)]
        all: bool,
    },

    /// Show a user's full profile
    User { username: String },

    /// Manage the locally persisted favorites list
    Favorites {
        #[command(subcommand)]
        action: FavoritesCommand,
    },
}

#[derive(Subcommand)]
pub enum FavoritesCommand {
    /// Print all favorited followers
    List,
    /// Look the user up and add them to favorites
    Add { username: String },
    /// Remove a user from favorites
    Remove { username: String },
}
