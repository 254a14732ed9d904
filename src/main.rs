use clap::{Parser, Subcommand};
use healthnews::Environment;
use healthnews::api::{ApiError, HealthApi};
use healthnews::core::config;
use healthnews::screens::{
    NewsDetailScreen, NewsListScreen, NotificationsScreen, RenderContext, Screen,
};
use serde_json::Value;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "healthnews", about = "Health news, notifications and complaints")]
struct Args {
    /// API environment (defaults to the build mode)
    #[arg(short, long, value_enum, global = true)]
    env: Option<Environment>,

    /// Column width for wrapped text
    #[arg(long, default_value_t = 80, global = true)]
    width: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Latest news
    News,
    /// A single article
    Show {
        #[arg(long)]
        id: Option<String>,
        /// Legacy article link, shown without fetching
        #[arg(long)]
        url: Option<String>,
    },
    /// Notifications
    Notifications,
    /// Health categories as JSON
    Categories,
    /// Media content as JSON
    Content,
    /// Submitted complaints as JSON
    Complaints,
    /// Submit a complaint; PAYLOAD is sent as-is
    Complain { payload: String },
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to healthnews.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("healthnews.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{e}, using defaults");
        config::HealthConfig::default()
    });
    let resolved = config::resolve(&file_config, args.env);
    log::info!(
        "healthnews starting: env={:?}, base_url={}, timeout={:?} (enforced: {})",
        resolved.environment,
        resolved.base_url,
        resolved.timeout,
        resolved.enforce_timeout
    );

    let api = HealthApi::from_config(&resolved);
    let ctx = RenderContext {
        media_host: &resolved.media_host,
        width: args.width,
    };

    match args.command {
        Command::News => show(NewsListScreen::new(), &api, &ctx).await,
        Command::Show { id, url } => show(NewsDetailScreen::new(id, url), &api, &ctx).await,
        Command::Notifications => show(NotificationsScreen::new(), &api, &ctx).await,
        Command::Categories => print_json(api.get_health_categories().await),
        Command::Content => print_json(api.get_media_content().await),
        Command::Complaints => print_json(api.get_complaints().await),
        Command::Complain { payload } => match serde_json::from_str::<Value>(&payload) {
            Ok(body) => print_json(api.create_complaint(&body).await),
            Err(e) => {
                eprintln!("Complaint payload is not valid JSON: {e}");
                std::process::exit(2);
            }
        },
    }

    Ok(())
}

/// Mount a screen: one load, one render.
async fn show<S: Screen>(mut screen: S, api: &HealthApi, ctx: &RenderContext<'_>) {
    screen.load(api).await;
    println!("{}", screen.render(ctx));
}

fn print_json(result: Result<Value, ApiError>) {
    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => println!("{text}"),
            Err(_) => println!("{value}"),
        },
        Err(e) => {
            eprintln!("Request failed: {e}");
            std::process::exit(1);
        }
    }
}
