/// Backend base URL, resolved at compile time:
/// - default: `/api` (same-origin reverse proxy)
/// - override: `BACKEND_URL` env var (see build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "/api",
};
