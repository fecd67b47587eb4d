//! Loose matching for API paths.
//!
//! API routes match case-insensitively and ignore trailing slashes, so
//! `/Produtos/` reaches the same handler as `/produtos`. The path is rewritten
//! before routing. Static file paths are left as they are.

use axum::{
    extract::Request,
    http::{Uri, uri::PathAndQuery},
    middleware::Next,
    response::Response,
};

/// Path prefixes owned by API routes.
const API_PREFIXES: [&str; 5] = ["/api/health", "/login", "/register", "/produtos", "/pedidos"];

/// Rewrite API paths to their canonical lowercase form without a trailing slash.
pub async fn normalize_path_middleware(mut request: Request, next: Next) -> Response {
    if let Some(uri) = canonical_uri(request.uri()) {
        tracing::debug!(from = %request.uri(), to = %uri, "Normalized API path");
        *request.uri_mut() = uri;
    }

    next.run(request).await
}

fn canonical_uri(uri: &Uri) -> Option<Uri> {
    let path = canonical_path(uri.path())?;
    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>().ok()?);
    Uri::from_parts(parts).ok()
}

/// The canonical form of an API path, or `None` if the path is not an API
/// path or is already canonical.
fn canonical_path(path: &str) -> Option<String> {
    let lowered = path.trim_end_matches('/').to_ascii_lowercase();

    let is_api = API_PREFIXES.iter().any(|prefix| {
        lowered
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    });

    (is_api && lowered != path).then_some(lowered)
}
