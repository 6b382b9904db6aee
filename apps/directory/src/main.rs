use anyhow::{Context, Result};
use clap::Parser;
use client_core::{load_directory, load_settings, HttpDirectorySource, UsersPage};
use shared::domain::{Address, UserDraft, UserId};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(about = "List users and their posts from a REST API")]
struct Args {
    /// Overrides the configured API base URL.
    #[arg(long)]
    api_base_url: Option<String>,
    /// Toggle a user card, in order. Repeat to toggle several.
    #[arg(long = "expand", value_name = "ID")]
    expand: Vec<i64>,
    #[arg(long)]
    add_name: Option<String>,
    #[arg(long)]
    add_username: Option<String>,
    #[arg(long)]
    add_email: Option<String>,
    #[arg(long)]
    add_phone: Option<String>,
    #[arg(long)]
    add_website: Option<String>,
    #[arg(long)]
    add_city: Option<String>,
    /// Print the users as JSON instead of text cards.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn draft(&self) -> Option<UserDraft> {
        let any = self.add_name.is_some()
            || self.add_username.is_some()
            || self.add_email.is_some()
            || self.add_phone.is_some()
            || self.add_website.is_some()
            || self.add_city.is_some();
        if !any {
            return None;
        }

        Some(UserDraft {
            name: self.add_name.clone(),
            username: self.add_username.clone(),
            email: self.add_email.clone(),
            address: self.add_city.clone().map(|city| Address {
                city,
                ..Address::default()
            }),
            phone: self.add_phone.clone(),
            website: self.add_website.clone(),
            company: None,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(base) = &args.api_base_url {
        settings.api_base_url = base.clone();
    }

    let source = HttpDirectorySource::from_settings(&settings)?;
    let users = load_directory(&source)
        .await
        .with_context(|| format!("failed to load users from {}", settings.api_base_url))?;

    let mut page = UsersPage::new(Some(users));
    if let Some(draft) = args.draft() {
        page.open_add_user_form();
        let id = page.submit_add_user(draft);
        info!(user_id = id.0, "added user");
    }
    for id in &args.expand {
        page.toggle_user(UserId(*id));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(page.store().users())?);
    } else {
        print!("{}", render::render_page(&page));
    }

    Ok(())
}
