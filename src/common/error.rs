use snafu::prelude::*;

/// Error type a [`super::Transport`] hands back to the dispatcher.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("form {key} does not exist"))]
    FormNotFound { key: String },
    #[snafu(display("could not send the email: {source}"))]
    DeliveryError { form: String, source: BoxError },
    #[snafu(display("{message}: {source}"))]
    MessageError { message: String, source: BoxError },
    #[snafu(display("invalid configuration: {message}"))]
    ConfigError { message: String },
}

impl Error {
    /// Whether the failure came from the submitted data rather than
    /// from the mail server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::FormNotFound { .. } | Error::MessageError { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
