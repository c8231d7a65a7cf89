//! HTTP server command
//!
//! Runs the marketing site: static pages, the blog API and the admin API.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use turrant_server::store::MemoryClient;
use turrant_server::{run_server, Database, ServerConfig, SiteConfig, StoreCredentials};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory holding the HTML pages and asset folders
    #[arg(long, env = "FRONTEND_DIR", default_value = "frontend")]
    pub frontend_dir: PathBuf,

    /// Supabase project URL
    #[arg(long, env = "SUPABASE_URL", hide_env_values = true)]
    pub supabase_url: Option<String>,

    /// Supabase anonymous API key
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_anon_key: Option<String>,

    /// Keep posts in process memory instead of Supabase (lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    fn database(&self) -> Database {
        if self.in_memory {
            if self.supabase_url.is_some() {
                tracing::info!("--in-memory set; ignoring Supabase credentials");
            }
            tracing::warn!("Using in-memory blog store; posts are lost on exit");
            return Database::with_client(Arc::new(MemoryClient::new()));
        }

        let credentials = StoreCredentials {
            url: self.supabase_url.clone(),
            anon_key: self.supabase_anon_key.clone(),
        };
        if credentials.url.is_none() || credentials.anon_key.is_none() {
            tracing::warn!("Supabase credentials not set; blog endpoints will answer 503");
        }
        Database::new(credentials)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let bind_addr = SocketAddr::new(args.host, args.port);
    tracing::info!("Starting turrant server on {}", bind_addr);

    if !args.frontend_dir.is_dir() {
        tracing::warn!(
            "Frontend directory {} not found; pages will 404",
            args.frontend_dir.display()
        );
    }

    let config = ServerConfig {
        bind_addr,
        site: SiteConfig::with_root(args.frontend_dir.clone()),
    };

    // Run server (blocks until shutdown)
    run_server(args.database(), config)
        .await
        .context("Server error")?;

    Ok(())
}
