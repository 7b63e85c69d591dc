use std::borrow::Cow;

/// Logger initialization error type.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Failed to set global subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
    #[error("Failed to build file appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),
    #[error("Invalid logger configuration: {0}")]
    InvalidConfiguration(Cow<'static, str>),
    #[error("Internal logger error: {0}")]
    Internal(Cow<'static, str>),
}
