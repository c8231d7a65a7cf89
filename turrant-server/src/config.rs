//! Site configuration - paths, static mounts, store credentials
//!
//! Configuration is loaded from environment variables:
//! - `FRONTEND_DIR`: directory holding the HTML pages and asset folders (default: frontend)
//! - `SUPABASE_URL`: project URL of the blog store
//! - `SUPABASE_ANON_KEY`: access key for the blog store

use std::path::PathBuf;

/// URL path → directory (under the frontend dir) served verbatim.
///
/// `logos png` contains a space, so its URL path is percent-encoded.
pub const STATIC_MOUNTS: &[(&str, &str)] = &[
    ("/images", "images"),
    ("/logos", "logos"),
    ("/logos%20png", "logos png"),
    ("/logos-branded", "logos-branded"),
    ("/steps", "steps"),
    ("/images_v2", "images_v2"),
];

/// Credentials for the remote table store.
///
/// Held as given; whether they are usable is decided when the store client
/// is first needed.
#[derive(Debug, Clone, Default)]
pub struct StoreCredentials {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl StoreCredentials {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            anon_key: Some(anon_key.into()),
        }
    }

    /// Read `SUPABASE_URL` and `SUPABASE_ANON_KEY`
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("SUPABASE_URL").ok(),
            anon_key: std::env::var("SUPABASE_ANON_KEY").ok(),
        }
    }
}

/// Static site layout
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Root directory for pages and assets (e.g., ./frontend)
    pub frontend_dir: PathBuf,
}

impl SiteConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let frontend_dir = std::env::var("FRONTEND_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("frontend"));

        Self { frontend_dir }
    }

    /// Create config with explicit frontend directory (for testing)
    pub fn with_root(frontend_dir: PathBuf) -> Self {
        Self { frontend_dir }
    }

    /// Path of an HTML page
    pub fn page_path(&self, file: &str) -> PathBuf {
        self.frontend_dir.join(file)
    }

    /// Directory behind a static mount
    pub fn asset_dir(&self, dir: &str) -> PathBuf {
        self.frontend_dir.join(dir)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
