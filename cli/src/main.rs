mod account;
mod api;
mod browse;
mod favorites;
mod publish;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use ladle_core::mealdb::MealDbClient;
use ladle_core::RecipeType;
use uuid::Uuid;

use api::ApiClient;

#[derive(Parser)]
#[command(name = "ladle")]
#[command(about = "Browse, favorite and share recipes", long_about = None)]
struct Cli {
    /// Server URL (default: http://localhost:3000, or LADLE_SERVER)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the public recipe catalog by name
    Search { query: String },
    /// Show one catalog recipe with ingredients and steps
    Show { id: String },
    /// Fetch random catalog recipes
    Random {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// List catalog categories
    Categories,
    /// List catalog recipes in one category
    Category { name: String },
    /// List catalog origin areas
    Areas,
    /// List catalog recipes from one area
    Area { name: String },

    /// Create an account on the server
    Signup {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in and print a session token
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Show or update your profile
    Profile {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        avatar_url: Option<String>,
        #[arg(long)]
        bio: Option<String>,
    },

    /// List your favorites
    Favorites,
    /// Add a recipe to your favorites
    Favorite {
        /// "api" for catalog recipes, "user" for community recipes
        recipe_type: String,
        id: String,
    },
    /// Remove a recipe from your favorites
    Unfavorite {
        recipe_type: String,
        id: String,
    },
    /// Toggle a recipe's favorite state
    Toggle {
        recipe_type: String,
        id: String,
    },

    /// Publish a recipe from a JSON draft file
    Publish { file: PathBuf },
    /// List community recipes
    Community,
    /// Show one community recipe
    Recipe { id: Uuid },
    /// List your published recipes
    MyRecipes,
    /// Delete one of your published recipes
    DeleteRecipe { id: Uuid },

    /// Ping the server (unauthenticated)
    Ping,
}

fn server_url(cli: &Cli) -> String {
    cli.server
        .clone()
        .or_else(|| std::env::var("LADLE_SERVER").ok())
        .unwrap_or_else(|| "http://localhost:3000".to_string())
}

fn api_client(cli: &Cli) -> Result<ApiClient> {
    ApiClient::new(&server_url(cli), std::env::var("LADLE_TOKEN").ok())
}

/// Commands that mutate per-user state refuse to run without a token
/// rather than failing on the first request.
fn signed_in_client(cli: &Cli) -> Result<ApiClient> {
    let client = api_client(cli)?;
    if !client.has_token() {
        return Err(anyhow!(
            "Not signed in. Run `ladle login <username> --password ...` and export LADLE_TOKEN"
        ));
    }
    Ok(client)
}

fn parse_recipe_type(raw: &str) -> Result<RecipeType> {
    raw.parse().map_err(|e: String| anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mealdb = MealDbClient::new()?;

    match &cli.command {
        Commands::Search { query } => browse::search(&mealdb, query).await?,
        Commands::Show { id } => {
            let api = api_client(&cli)?;
            browse::show(&mealdb, Some(&api), id).await?;
        }
        Commands::Random { count } => browse::random(&mealdb, *count).await?,
        Commands::Categories => browse::categories(&mealdb).await?,
        Commands::Category { name } => browse::by_category(&mealdb, name).await?,
        Commands::Areas => browse::areas(&mealdb).await?,
        Commands::Area { name } => browse::by_area(&mealdb, name).await?,

        Commands::Signup { username, password } => {
            account::signup(&api_client(&cli)?, username, password).await?;
        }
        Commands::Login { username, password } => {
            account::login(&api_client(&cli)?, username, password).await?;
        }
        Commands::Profile {
            full_name,
            avatar_url,
            bio,
        } => {
            account::profile(
                &signed_in_client(&cli)?,
                full_name.as_deref(),
                avatar_url.as_deref(),
                bio.as_deref(),
            )
            .await?;
        }

        Commands::Favorites => favorites::list(&signed_in_client(&cli)?).await?,
        Commands::Favorite { recipe_type, id } => {
            favorites::add(
                &signed_in_client(&cli)?,
                &mealdb,
                parse_recipe_type(recipe_type)?,
                id,
            )
            .await?;
        }
        Commands::Unfavorite { recipe_type, id } => {
            favorites::remove(&signed_in_client(&cli)?, parse_recipe_type(recipe_type)?, id)
                .await?;
        }
        Commands::Toggle { recipe_type, id } => {
            favorites::toggle(
                &signed_in_client(&cli)?,
                &mealdb,
                parse_recipe_type(recipe_type)?,
                id,
            )
            .await?;
        }

        Commands::Publish { file } => publish::publish(&signed_in_client(&cli)?, file).await?,
        Commands::Community => publish::community(&api_client(&cli)?).await?,
        Commands::Recipe { id } => publish::show(&api_client(&cli)?, *id).await?,
        Commands::MyRecipes => publish::my_recipes(&signed_in_client(&cli)?).await?,
        Commands::DeleteRecipe { id } => {
            publish::delete(&signed_in_client(&cli)?, *id).await?;
        }

        Commands::Ping => account::ping(&api_client(&cli)?).await?,
    }

    Ok(())
}
