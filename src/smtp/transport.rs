use lettre::transport::smtp::{
    authentication::Credentials,
    client::{Tls, TlsParameters},
};
use lettre::{Message, SmtpTransport};

use crate::common::{BoxError, Transport};

const IMPLICIT_TLS_PORT: u16 = 465;

/// How the session is protected once connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsPolicy {
    /// Plaintext; STARTTLS is never attempted.
    Disabled,
    /// STARTTLS must be offered by the server and succeed.
    Required,
    /// TLS from the first byte, for submission on port 465.
    Wrapper,
}

/// Blocking SMTP delivery through lettre.
///
/// Every [`Transport::send`] dials the server, submits a single message
/// and closes the session again.
pub struct SmtpMailer {
    host: String,
    port: u16,
    credentials: Option<Credentials>,
    tls: TlsPolicy,
}

impl SmtpMailer {
    pub fn tls_policy(&self) -> TlsPolicy {
        self.tls
    }

    fn transport(&self) -> Result<SmtpTransport, lettre::transport::smtp::Error> {
        let tls = match self.tls {
            TlsPolicy::Disabled => Tls::None,
            TlsPolicy::Required => Tls::Required(TlsParameters::new(self.host.clone())?),
            TlsPolicy::Wrapper => Tls::Wrapper(TlsParameters::new(self.host.clone())?),
        };

        let mut builder = SmtpTransport::builder_dangerous(&self.host)
            .port(self.port)
            .tls(tls);
        if let Some(credentials) = &self.credentials {
            builder = builder.credentials(credentials.clone());
        }

        Ok(builder.build())
    }
}

impl Transport for SmtpMailer {
    fn send(&self, message: &Message) -> Result<(), BoxError> {
        let transport = self.transport()?;
        let response = lettre::Transport::send(&transport, message)?;

        tracing::debug!(
            host = %self.host,
            port = self.port,
            code = %response.code(),
            "Message accepted",
        );
        Ok(())
    }
}

impl From<super::Config> for SmtpMailer {
    fn from(value: super::Config) -> Self {
        let credentials = match value.user.is_empty() {
            true => None,
            false => Some(Credentials::new(value.user, value.password)),
        };
        let tls = match (value.disable_tls, value.port) {
            (true, _) => TlsPolicy::Disabled,
            (false, IMPLICIT_TLS_PORT) => TlsPolicy::Wrapper,
            (false, _) => TlsPolicy::Required,
        };
        Self {
            host: value.host,
            port: value.port,
            credentials,
            tls,
        }
    }
}
