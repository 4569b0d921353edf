//! Logging setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global subscriber. `RUST_LOG` overrides the default `info`.
pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Mask a secret so only its first four characters reach the logs.
pub fn sanitize_for_log(value: &str) -> String {
    match value.char_indices().nth(4) {
        Some((idx, _)) => format!("{}****", &value[..idx]),
        None => "****".to_string(),
    }
}

/// Render `url` with the value of the `secret_param` query parameter masked.
/// Works on decoded pairs so keys that need percent-encoding are caught too.
pub fn redact_url(url: &reqwest::Url, secret_param: &str) -> String {
    if !url.query_pairs().any(|(name, _)| name == secret_param) {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == secret_param {
                sanitize_for_log(&value)
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
