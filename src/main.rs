mod cli;

use clap::Parser;
use cli::{Cli, Command, FavoritesCommand};
use colored::*;
use github_followers::{
    FavoritesAction, FavoritesStore, Follower, FollowerList, GitHubClient,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> github_followers::Result<()> {
    let client = GitHubClient::new()?;
    let store = FavoritesStore::new(&cli.favorites_file);

    match cli.command {
        Command::Followers { username, all } => {
            let mut list = FollowerList::new(username);
            loop {
                let accepted = list.load_next_page(&client).await?;
                for follower in accepted {
                    println!("{}  {}", follower.login.bold(), follower.avatar_url.dimmed());
                }
                if !all || !list.has_more() {
                    break;
                }
            }
            println!(
                "\n{} follower(s){}",
                list.followers().len().to_string().green(),
                if list.has_more() { " (more available)" } else { "" }
            );
        }

        Command::User { username } => {
            let user = client.get_user(&username).await?;
            println!("{}", user.login.bold().green());
            if let Some(name) = &user.name {
                println!("{}", name);
            }
            if let Some(bio) = &user.bio {
                println!("{}", bio.italic());
            }
            println!(
                "repos: {}  gists: {}  followers: {}  following: {}",
                user.public_repos, user.public_gists, user.followers, user.following
            );
            println!("on GitHub since {}", user.created_at.format("%B %Y"));
            println!("{}", user.html_url.dimmed());
        }

        Command::Favorites { action } => match action {
            FavoritesCommand::List => {
                let favorites = store.retrieve().await?;
                if favorites.is_empty() {
                    println!("{}", "No favorites yet.".dimmed());
                }
                for favorite in favorites {
                    println!("{}  {}", favorite.login.bold(), favorite.avatar_url.dimmed());
                }
            }
            FavoritesCommand::Add { username } => {
                let user = client.get_user(&username).await?;
                let favorite = Follower {
                    login: user.login,
                    avatar_url: user.avatar_url,
                };
                store.update(&favorite, FavoritesAction::Add).await?;
                println!("{} {}", "Favorited".green(), favorite.login.bold());
            }
            FavoritesCommand::Remove { username } => {
                // Identity is the login; the avatar URL plays no part in removal.
                let favorite = Follower {
                    login: username,
                    avatar_url: String::new(),
                };
                store.update(&favorite, FavoritesAction::Remove).await?;
                println!("{} {}", "Removed".yellow(), favorite.login.bold());
            }
        },
    }

    Ok(())
}
