//! CLI entry point for stackscripts

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stackscripts::commands::{self, new::NewPostOptions};
use stackscripts::Site;

#[derive(Parser)]
#[command(name = "stackscripts")]
#[command(author = "Santhosh Raj")]
#[command(version)]
#[command(about = "Static site generator for the StackScripts tech blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a new site with the default configuration and posts
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Add a post to the post list
    New {
        /// Title of the new post
        title: String,

        /// Category badge shown on the card
        #[arg(long)]
        category: Option<String>,

        /// Author (defaults to the site author)
        #[arg(short, long)]
        author: Option<String>,

        /// Card image path (defaults to /images/thumbnails/<slug>.png)
        #[arg(short, long)]
        thumbnail: Option<String>,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Remove the public folder
    Clean,

    /// List site information
    List {
        /// What to list (post, category, route, guard)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "stackscripts=debug,info"
    } else {
        "stackscripts=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine the current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            commands::init::init_site(&target_dir)?;
            println!("Initialized StackScripts site in {:?}", target_dir);
        }

        Commands::New {
            title,
            category,
            author,
            thumbnail,
        } => {
            let site = Site::new(&base_dir)?;
            let options = NewPostOptions {
                category,
                author,
                thumbnail,
            };
            commands::new::run(&site, &title, &options)?;
        }

        Commands::Generate { watch } => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate()?;
            println!("Generated successfully!");

            if watch {
                commands::generate::watch(&site).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let site = Site::new(&base_dir)?;

            tracing::info!("Generating static files...");
            site.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            stackscripts::server::start(&site, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let site = Site::new(&base_dir)?;
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let site = Site::new(&base_dir)?;
            commands::list::run(&site, &r#type)?;
        }

        Commands::Version => {
            println!("stackscripts version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
