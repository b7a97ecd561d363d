pub const DEFAULT_PORT: u16 = 587;

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Config {
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Leave empty to skip SMTP authentication.
    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub password: String,

    pub from_email: String,

    /// Talk to the server in plaintext, never issuing STARTTLS.
    #[serde(default)]
    pub disable_tls: bool,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}
