pub mod newsapi;

/// Common utilities for news sources
pub(crate) mod utils {
    /// Replaces every occurrence of `secret` in `text` so keys sent as query
    /// parameters never end up in error messages or logs.
    pub fn redact(text: &str, secret: &str) -> String {
        if secret.is_empty() {
            return text.to_string();
        }
        text.replace(secret, "<redacted>")
    }

    pub fn endpoint(base_url: &str, path: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
