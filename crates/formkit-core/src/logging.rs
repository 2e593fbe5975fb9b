//! Logging integration for the formkit engine.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`EngineSettings`](crate::settings::EngineSettings) and for creating
//! per-form spans.

use crate::settings::EngineSettings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter directive is read from `settings.log_level`. In debug mode a
/// pretty, human-readable format is used; otherwise a structured JSON
/// format is used. Installing a second subscriber is a no-op.
pub fn setup_logging(settings: &EngineSettings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one form instance.
///
/// Attach this span around command processing so that every log entry
/// emitted while editing or submitting carries the form id.
///
/// # Examples
///
/// ```
/// use formkit_core::logging::form_span;
///
/// let span = form_span("4cf232ce");
/// let _guard = span.enter();
/// tracing::info!("field added");
/// ```
pub fn form_span(form_id: &str) -> tracing::Span {
    tracing::info_span!("form", id = form_id)
}
