//! # Command Line Shell
//!
//! A thin front end over the commands. Every invocation boots the state
//! from the slot database, runs one command (which mirrors back), and
//! prints the result.
//!
//! ```text
//! $ binaa register Ali ali@x.com pw123
//! $ binaa login Ali pw123
//! $ binaa rate 1 5
//! $ binaa --format json search حديد --city دمشق
//! $ binaa open /admin
//! ```

use std::fmt::Display;
use std::path::PathBuf;

use binaa_core::access::{guard, Navigation, Route};
use binaa_core::search::StoreFilter;
use binaa_core::theme::{resolve_theme, resolve_theme_name};
use binaa_core::validation::{PostForm, RegisterForm};
use binaa_core::{AppTheme, Province};
use binaa_db::SlotStore;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;

use crate::commands::{auth, post, search, settings, store};
use crate::error::ApiError;
use crate::platform::file_to_data_url;
use crate::state::{AppConfig, AppState, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "binaa", about = "Binaa building-materials directory", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to binaa.toml in the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show counts, session and theme
    Summary,
    /// Search stores by text, city and category
    Search(SearchArgs),
    /// Autocomplete categories and stores
    Suggest { query: String },
    /// Show a store page
    Store { id: String },
    /// Show theme tokens
    Theme(ThemeArgs),
    /// Save the theme
    SetTheme { theme: String },
    /// Create a member account
    Register {
        username: String,
        email: String,
        password: String,
    },
    /// Sign in by username or e-mail
    Login { identifier: String, password: String },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Resolve a path through the route guard
    Open { path: String },
    /// Rate a store (1-5) as the signed-in user
    Rate { store_id: String, value: i64 },
    /// Post a topic on a store page
    Post(PostArgs),
    /// Toggle dark mode
    DarkMode,
    /// Toggle notifications
    Notifications,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(default_value = "")]
    pub query: String,
    /// Province label, e.g. دمشق
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// Theme identifier; defaults to the active theme
    pub name: Option<String>,
    /// Dark variant; defaults to the saved dark-mode flag
    #[arg(long)]
    pub dark: bool,
}

#[derive(Debug, Args)]
pub struct PostArgs {
    pub store_id: String,
    #[arg(default_value = "")]
    pub content: String,
    /// Image to attach, embedded as a data URL
    #[arg(long)]
    pub image: Option<PathBuf>,
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] binaa_db::DbError),

    #[error("{0}")]
    Command(#[from] ApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;

// =============================================================================
// Execution
// =============================================================================

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl Display) -> ShellResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{text}"),
    }
    Ok(())
}

fn store_lines(stores: &[binaa_core::Store]) -> String {
    stores
        .iter()
        .map(|s| format!("{}\t{}\t{}\t★{:.1}", s.id, s.name, s.city, s.rating))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs one command against `state`.
pub async fn execute<S: SlotStore>(
    state: &mut AppState<S>,
    config: &AppConfig,
    command: Command,
    format: OutputFormat,
) -> ShellResult<()> {
    match command {
        Command::Summary => {
            let summary = search::dashboard_summary(state);
            let who = state
                .current_user()
                .map_or("guest".to_string(), |u| u.username.clone());
            let text = format!(
                "{}\nstores: {}  categories: {}  users: {}\nsession: {}\ntheme: {}{}",
                state.settings().app_name,
                state.stores().len(),
                state.categories().len(),
                state.users().len(),
                who,
                state.active_theme(),
                if state.settings().is_dark_mode { " (dark)" } else { "" },
            );
            emit(format, &summary, text)
        }
        Command::Search(args) => {
            let mut filter = StoreFilter::query(args.query);
            if let Some(city) = args.city {
                filter = filter.with_city(city.parse::<Province>().map_err(ApiError::from)?);
            }
            if let Some(category) = args.category {
                filter = filter.with_category(category);
            }
            let results = search::search_stores(state, &filter)?;
            let text = store_lines(&results);
            emit(format, &results, text)
        }
        Command::Suggest { query } => {
            let suggestions = search::suggest(state, &query)?;
            let text = suggestions
                .iter()
                .map(|s| s.name().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            emit(format, &suggestions, text)
        }
        Command::Store { id } => {
            let page = search::store_page(state, &id)?;
            let text = format!(
                "{} ({})\n{}\n{} - {}\n★{:.1} from {} ratings\n{} posts\n{}",
                page.store.name,
                page.category.as_ref().map_or("-", |c| c.name.as_str()),
                page.store.description,
                page.store.city,
                page.store.neighborhood,
                page.store.rating,
                page.store.ratings.len(),
                page.posts.len(),
                page.whatsapp_link,
            );
            emit(format, &page, text)
        }
        Command::Theme(args) => {
            let dark = args.dark || state.settings().is_dark_mode;
            let tokens = match args.name {
                Some(name) => resolve_theme_name(&name, dark),
                None => resolve_theme(state.active_theme(), dark),
            };
            let text = format!(
                "primary: {}\ntext: {}\nhover: {}\nlight: {}\nhex: {}\nripple: {}",
                tokens.primary,
                tokens.primary_text,
                tokens.primary_hover,
                tokens.primary_light,
                tokens.hex,
                tokens.ripple(),
            );
            emit(format, &tokens, text)
        }
        Command::SetTheme { theme } => {
            let theme: AppTheme = theme.parse().map_err(ApiError::from)?;
            settings::save_theme(state, theme).await?;
            emit(format, &theme, format!("theme saved: {theme}"))
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let form = RegisterForm {
                username,
                email,
                password,
            };
            let user = auth::register(state, &form, config.registration).await?;
            let text = format!("registered {} ({:?})", user.username, user.status);
            emit(format, &user, text)
        }
        Command::Login {
            identifier,
            password,
        } => {
            let signed_in = auth::login(state, &identifier, &password).await?;
            let text = format!("signed in as {} → {}", signed_in.user.username, signed_in.landing);
            emit(format, &signed_in, text)
        }
        Command::Logout => {
            auth::logout(state).await?;
            emit(format, &(), "signed out")
        }
        Command::Whoami => {
            let user = state.current_user();
            let text = user.map_or("guest".to_string(), |u| {
                format!("{} <{}> {:?}", u.username, u.email, u.role)
            });
            emit(format, &user, text)
        }
        Command::Open { path } => {
            let navigation = Route::parse(&path).map(|route| guard(route, state.current_user()));
            let text = match &navigation {
                Some(Navigation::Render(route)) => format!("render {route}"),
                Some(Navigation::Redirect(route)) => format!("redirect {route}"),
                None => "الصفحة غير موجودة".to_string(),
            };
            emit(format, &navigation, text)
        }
        Command::Rate { store_id, value } => {
            let rated = store::rate_store(state, &store_id, value).await?;
            let text = format!("{} ★{:.1} ({} ratings)", rated.name, rated.rating, rated.ratings.len());
            emit(format, &rated, text)
        }
        Command::Post(args) => {
            let image_url = args.image.as_deref().map(file_to_data_url).transpose()?;
            let form = PostForm {
                content: args.content,
                image_url,
            };
            let created = post::submit_post(state, &args.store_id, &form).await?;
            let text = format!("posted {} ({:?})", created.id, created.status);
            emit(format, &created, text)
        }
        Command::DarkMode => {
            let dark = settings::toggle_dark_mode(state).await?;
            emit(format, &dark, if dark { "dark mode on" } else { "dark mode off" })
        }
        Command::Notifications => {
            let enabled = settings::toggle_notifications(state).await?;
            emit(
                format,
                &enabled,
                if enabled { "notifications on" } else { "notifications off" },
            )
        }
    }
}
