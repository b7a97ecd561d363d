use std::collections::HashSet;
use std::sync::Arc;

use snafu::prelude::*;

use crate::common::{ConfigSnafu, Form, Result};
use crate::forms::FormRegistry;
use crate::message::{parse_mailbox, MessageBuilder};
use crate::service::{MailBear, MetricsCounter};
use crate::smtp::SmtpMailer;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub smtp: crate::smtp::Config,

    #[serde(default)]
    pub forms: Vec<Form>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.smtp.host.trim().is_empty(),
            ConfigSnafu {
                message: "smtp host is required"
            }
        );
        parse_mailbox(&self.smtp.from_email)?;

        ensure!(
            !self.forms.is_empty(),
            ConfigSnafu {
                message: "at least one form is required"
            }
        );

        let mut keys = HashSet::with_capacity(self.forms.len());
        for form in self.forms.iter() {
            ensure!(
                !form.key.is_empty(),
                ConfigSnafu {
                    message: format!("form {:?} has an empty key", form.name)
                }
            );
            ensure!(
                keys.insert(form.key.as_str()),
                ConfigSnafu {
                    message: format!("form key {} is used more than once", form.key)
                }
            );
            ensure!(
                !form.name.trim().is_empty(),
                ConfigSnafu {
                    message: format!("form {} has no name", form.key)
                }
            );
            ensure!(
                !form.to.is_empty(),
                ConfigSnafu {
                    message: format!("form {} has no recipients", form.key)
                }
            );
            for recipient in form.to.iter() {
                parse_mailbox(recipient)?;
            }
        }

        Ok(())
    }

    pub fn get_service(self) -> Result<MailBear> {
        self.validate()?;

        let builder = MessageBuilder::from_address(&self.smtp.from_email)?;
        let forms = FormRegistry::from(self.forms);

        tracing::info!(
            forms = forms.len(),
            host = %self.smtp.host,
            port = self.smtp.port,
            tls = !self.smtp.disable_tls,
            "Service configured",
        );

        Ok(MailBear::new(
            forms,
            builder,
            Box::new(SmtpMailer::from(self.smtp)),
            Arc::new(MetricsCounter::new()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    const CONFIG: &str = r#"{
        "smtp": {
            "host": "mail.example.com",
            "user": "forms",
            "password": "secret",
            "from_email": "MailBear <forms@example.com>"
        },
        "forms": [
            {"key": "contact", "name": "Contact Us", "to_email": ["owner@example.com"]},
            {"key": "jobs", "name": "Jobs", "to": ["hr@example.com", "boss@example.com"]}
        ]
    }"#;

    fn config() -> Config {
        serde_json::from_str(CONFIG).unwrap()
    }

    fn assert_invalid(config: Config) {
        assert!(matches!(
            config.validate(),
            Err(Error::ConfigError { .. }) | Err(Error::MessageError { .. })
        ));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config = config();

        assert_eq!(config.smtp.port, crate::smtp::DEFAULT_PORT);
        assert!(!config.smtp.disable_tls);
        assert_eq!(config.forms.len(), 2);
        assert_eq!(config.forms[0].to, vec!["owner@example.com"]);
        assert_eq!(config.forms[1].to.len(), 2);
        config.validate().unwrap();
    }

    #[test]
    fn builds_service() {
        let service = config().get_service().unwrap();

        assert!(service.forms().exists("contact"));
        assert!(service.forms().exists("jobs"));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let mut config = config();
        config.forms[1].key = "contact".to_string();

        assert_invalid(config);
    }

    #[test]
    fn rejects_forms_without_recipients() {
        let mut config = config();
        config.forms[0].to.clear();

        assert_invalid(config);
    }

    #[test]
    fn rejects_bad_addresses() {
        let mut config = config();
        config.forms[0].to = vec!["owner".to_string()];
        assert_invalid(config);

        let mut config = self::config();
        config.smtp.from_email = "forms at example".to_string();
        assert_invalid(config);
    }

    #[test]
    fn rejects_missing_forms_and_host() {
        let mut config = config();
        config.forms.clear();
        assert_invalid(config);

        let mut config = self::config();
        config.smtp.host = " ".to_string();
        assert_invalid(config);
    }
}
