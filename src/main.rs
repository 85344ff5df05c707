use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use story_slides::{api, catalog::Catalog, config::StoryConfig, generate, slides};

#[derive(Parser)]
#[command(name = "story-slides")]
#[command(about = "Illustrated bedtime story slideshows")]
struct Cli {
    /// Directory holding one folder per story
    #[arg(
        short,
        long,
        global = true,
        env = "STORY_SLIDES_ASSETS_DIR",
        default_value = "story_assets"
    )]
    assets_dir: PathBuf,

    #[command(flatten)]
    server: ServerArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Server settings, shared by `serve` and the bare invocation.
#[derive(Args, Debug, Clone, PartialEq)]
struct ServerArgs {
    /// Port for HTTP API
    #[arg(
        short,
        long,
        global = true,
        env = "STORY_SLIDES_PORT",
        default_value = "5000"
    )]
    port: u16,

    /// Address to bind
    #[arg(long, global = true, default_value = "127.0.0.1")]
    host: String,

    /// Directory with the viewer's index.html and scripts
    #[arg(long, global = true, env = "STORY_SLIDES_STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (the default)
    Serve,
    /// Print the stories that are ready to serve
    List,
    /// Print the slides of one story as JSON
    Show {
        /// Story folder name
        name: String,
    },
    /// Write a new story with a chat model and save its text
    Generate {
        /// Prompt sent to the model
        #[arg(long)]
        prompt: Option<String>,
    },
}

/// Initialize tracing with output to stderr so command output stays clean
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "story_slides=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(catalog: Catalog, server: ServerArgs) -> anyhow::Result<()> {
    let ServerArgs {
        port,
        host,
        static_dir,
    } = server;

    tracing::info!(
        "Serving stories from {} ({} ready)",
        catalog.root().display(),
        catalog.list().len()
    );

    let app = api::create_router(catalog, static_dir);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("story-slides listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = StoryConfig::from_env();
    let catalog = Catalog::new(cli.assets_dir.clone(), config.clone());

    match cli.command {
        None | Some(Commands::Serve) => {
            serve(catalog, cli.server).await?;
        }
        Some(Commands::List) => {
            for name in catalog.list() {
                println!("{}", name);
            }
        }
        Some(Commands::Show { name }) => {
            let story = slides::assemble_story(&catalog, &name)?;
            println!("{}", serde_json::to_string_pretty(&story)?);
        }
        Some(Commands::Generate { prompt }) => {
            let client = generate::StoryClient::from_env()?;
            tracing::info!("Generating story with model {}", client.model());
            let prompt = prompt.as_deref().unwrap_or(generate::DEFAULT_PROMPT);
            let folder =
                generate::generate_story(&client, &cli.assets_dir, &config, prompt).await?;
            println!("{}", folder.display());
            tracing::info!(
                "Add {} images to {} to make the story servable",
                config.images_per_story,
                folder.display()
            );
        }
    }

    Ok(())
}
