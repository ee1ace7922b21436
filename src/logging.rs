use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to stderr.
///
/// The filter is taken from `RECIPE_BOT_LOG`, then `RUST_LOG`, and otherwise
/// logs this crate and `component` at debug with everything else at info.
/// A second call is a no-op.
pub fn init_tracing(component: &str) {
    let default_filter = format!("info,recipe_bot=debug,{component}=debug");

    let filter = std::env::var("RECIPE_BOT_LOG")
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing("recipe_bot_test");
        init_tracing("recipe_bot_test");
        tracing::debug!("subscriber installed");
    }
}
