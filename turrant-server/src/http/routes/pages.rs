//! Static page routes
//!
//! Each clean URL serves one HTML file from the frontend directory. The old
//! `.html` URLs answer with a 301 to their clean path. `/blog/{slug}` always
//! serves the post shell; the page looks the slug up client-side.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, get_service},
    Router,
};
use tower_http::services::ServeFile;

use crate::config::SiteConfig;

/// A clean URL, the file behind it, and the legacy URLs that redirect to it
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub path: &'static str,
    pub file: &'static str,
    pub legacy: &'static [&'static str],
}

pub const PAGES: &[Page] = &[
    Page { path: "/", file: "index.html", legacy: &["/index.html"] },
    Page { path: "/finance", file: "finance.html", legacy: &["/finance.html"] },
    Page { path: "/insurance", file: "insurance.html", legacy: &["/insurance.html"] },
    Page { path: "/hr", file: "hr.html", legacy: &["/hr.html"] },
    Page { path: "/logistics", file: "logistics.html", legacy: &["/logistics.html"] },
    Page { path: "/education", file: "education.html", legacy: &["/education.html"] },
    Page { path: "/travel", file: "travel.html", legacy: &["/travel.html"] },
    Page {
        path: "/privacy-policy",
        file: "privacy-policy.html",
        legacy: &["/privacy-policy.html"],
    },
    Page {
        path: "/terms-and-conditions",
        file: "terms-and-conditions.html",
        legacy: &["/terms-and-conditions.html"],
    },
    Page {
        path: "/turrant-preview",
        file: "turrant-preview.html",
        legacy: &["/turrant-preview.html"],
    },
    Page { path: "/blog", file: "blog.html", legacy: &["/blog.html", "/blog-post.html"] },
    Page {
        path: "/admin",
        file: "blog-admin.html",
        legacy: &["/blog-admin.html", "/blog-admin"],
    },
];

/// Shell page for a single post
pub const POST_SHELL: &str = "blog-post.html";

fn moved_permanently(location: &'static str) -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)])
}

/// Page routes rooted at `site.frontend_dir`
pub fn router<S>(site: &SiteConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let mut router = Router::new();

    for page in PAGES {
        router = router.route(
            page.path,
            get_service(ServeFile::new(site.page_path(page.file))),
        );
        for legacy in page.legacy {
            let target = page.path;
            router = router.route(legacy, get(move || async move { moved_permanently(target) }));
        }
    }

    router.route(
        "/blog/{slug}",
        get_service(ServeFile::new(site.page_path(POST_SHELL))),
    )
}
