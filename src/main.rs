//! Command-line front end for the article API.
//!
//! Each write command builds the page the browser would show, attaches the
//! handlers for the buttons on it and clicks the one button it carries.
//!
//! # Usage
//!
//! ```bash
//! # Delete article 5
//! article-actions delete 5
//!
//! # Edit article 7 (missing fields are prompted, prefilled from the server)
//! article-actions modify 7 --title "New title"
//!
//! # Write a new article
//! article-actions create --title "Hello" --content "World"
//!
//! # Read
//! article-actions list
//! article-actions show 7
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` (default `http://localhost:8080`), overridden by `--base-url`
//! - `RUST_LOG`, `LOG_FORMAT`

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;
use url::Url;

use article_actions::config::{self, Config};
use article_actions::domain::page::ID_QUERY_PARAM;
use article_actions::prelude::*;

/// Create, modify, delete and read articles.
#[derive(Parser)]
#[command(name = "article-actions")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API origin, overrides API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete an article
    Delete {
        /// Article id
        id: String,
    },

    /// Update an article's title and content
    Modify {
        /// Article id
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,
    },

    /// Write a new article
    Create {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,
    },

    /// List all articles
    List,

    /// Show one article
    Show {
        /// Article id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env(cli.base_url).context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    let base_url = config.parsed_base_url()?;
    let repository = Arc::new(
        HttpArticleRepository::new(base_url.clone()).context("Failed to build HTTP client")?,
    );

    match cli.command {
        Commands::Delete { id } => {
            let page = TerminalPage::new(base_url.join(&format!("/articles/{id}"))?.as_str())?
                .with_value(element::ARTICLE_ID, id)
                .with_element(element::DELETE_BUTTON);
            run_page(repository, page).await?;
        }
        Commands::Modify { id, title, content } => {
            let current = match repository.find_by_id(&id).await {
                Ok(article) => Some(article),
                Err(e) => {
                    tracing::warn!(%id, error = %e, "Could not load article, form starts empty");
                    None
                }
            };

            let mut location = base_url.join("/new-article")?;
            location
                .query_pairs_mut()
                .append_pair(ID_QUERY_PARAM, &id);

            println!("{}", format!("✏️  Edit article {id}").bright_blue().bold());
            let page = edit_page(
                &location,
                title,
                content,
                current.as_ref().map(Article::to_draft),
            )?
            .with_element(element::MODIFY_BUTTON);
            run_page(repository, page).await?;
        }
        Commands::Create { title, content } => {
            let location = base_url.join("/new-article")?;

            println!("{}", "📝 New article".bright_blue().bold());
            let page =
                edit_page(&location, title, content, None)?.with_element(element::CREATE_BUTTON);
            run_page(repository, page).await?;
        }
        Commands::List => list_articles(repository.as_ref()).await?,
        Commands::Show { id } => show_article(repository.as_ref(), &id).await?,
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Builds the edit form, prompting for any field not given on the command line.
fn edit_page(
    location: &Url,
    title: Option<String>,
    content: Option<String>,
    current: Option<ArticleDraft>,
) -> Result<TerminalPage> {
    let page = TerminalPage::new(location.as_str())?
        .with_prompted_value(
            element::TITLE,
            "Title",
            title,
            current.as_ref().map(|d| d.title.as_str()),
        )?
        .with_prompted_value(
            element::CONTENT,
            "Content",
            content,
            current.as_ref().map(|d| d.content.as_str()),
        )?;
    Ok(page)
}

/// Attaches the handlers present on `page` and clicks each of them.
async fn run_page(repository: Arc<HttpArticleRepository>, mut page: TerminalPage) -> Result<()> {
    let handler = FormActionHandler::new(repository);

    let actions = FormAction::attach(&page);
    if actions.is_empty() {
        println!("{}", "  Nothing to do on this page".yellow());
        return Ok(());
    }

    for action in actions {
        handler
            .click(action, &mut page)
            .await
            .with_context(|| format!("{action:?} failed"))?;
    }

    Ok(())
}

async fn list_articles(repository: &HttpArticleRepository) -> Result<()> {
    println!("{}", "📋 Articles".bright_blue().bold());
    println!();

    let articles = repository
        .list()
        .await
        .context("Failed to list articles")?;

    if articles.is_empty() {
        println!("{}", "  No articles found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<6} {:<30} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Content".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for article in &articles {
        let id = article
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<6} {:<30} {}",
            id.bright_black(),
            truncate(&article.title, 30).cyan(),
            truncate(&article.content, 40)
        );
    }

    println!();
    println!(
        "  Total: {}",
        articles.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_article(repository: &HttpArticleRepository, id: &str) -> Result<()> {
    let article = repository
        .find_by_id(id)
        .await
        .with_context(|| format!("Failed to load article {id}"))?;

    println!("{}", article.title.bright_white().bold());
    println!("  {}", "─".repeat(75).bright_black());
    println!("{}", article.content);
    println!();

    Ok(())
}

/// Shortens `text` to `max` characters for table output.
fn truncate(text: &str, max: usize) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.chars().count() <= max {
        return first_line.to_string();
    }
    let cut: String = first_line.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
