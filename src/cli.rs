use clap::{crate_authors, crate_description, crate_version, Arg, ArgAction, Command};
use pretty_env_logger::env_logger::Builder;
use std::env;
use std::io::Write;
use std::process::exit;

use mailbear::{Config, FormSubmission};

const DEFAULT_CONFIG: &str = "config.yml";
const ENV_PREFIX: &str = "MAILBEAR";

fn set_logger_level(b: &mut Builder) {
    let mut b = b;
    if env::var("RUST_LOG").is_err() {
        b = b.filter_level(log::LevelFilter::Info)
    }
    b.init();
}

fn setup_logger() {
    // RUST_LOG_STYLE=SYSTEMD prefixes each line with its syslog priority for journald
    match std::env::var("RUST_LOG_STYLE") {
        Ok(s) if s == "SYSTEMD" => {
            let builder = &mut pretty_env_logger::env_logger::builder();
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "<{}>{}: {}",
                    match record.level() {
                        log::Level::Error => 3,
                        log::Level::Warn => 4,
                        log::Level::Info => 6,
                        log::Level::Debug => 7,
                        log::Level::Trace => 7,
                    },
                    record.target(),
                    record.args()
                )
            });
            set_logger_level(builder);
        }
        _ => {
            let builder = &mut pretty_env_logger::formatted_builder();
            set_logger_level(builder);
        }
    };
}

/// Reads the YAML file, then applies `MAILBEAR_*` overrides such as
/// `MAILBEAR_SMTP__PASSWORD`.
fn load_config(path: &str) -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::new(path, config::FileFormat::Yaml))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

fn read_submission() -> Result<FormSubmission, serde_json::Error> {
    serde_json::from_reader(std::io::stdin().lock())
}

pub(crate) fn main() {
    let cli = Command::new("MailBear")
        .about(format!(
            "{}\n{} {}",
            crate_description!(),
            "Reads one JSON encoded form submission from stdin and mails it.",
            "Settings can be overridden with MAILBEAR_ environment variables.",
        ))
        .arg(
            Arg::new("check")
                .action(ArgAction::SetTrue)
                .short('t')
                .long("test")
                .help("Check the configuration"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .default_value(DEFAULT_CONFIG)
                .help("Path to the YAML configuration"),
        )
        .version(crate_version!())
        .author(crate_authors!("\n"));

    let args = cli.get_matches();

    setup_logger();

    let path = args
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG);
    let config = match load_config(path) {
        Ok(c) => c,
        Err(err) => {
            println!("{err}");
            exit(2);
        }
    };

    let service = match config.get_service() {
        Ok(s) => s,
        Err(err) => {
            println!("{err}");
            exit(2);
        }
    };

    if args.get_flag("check") {
        tracing::info!(forms = service.forms().len(), "Configuration is valid.");
        exit(0);
    }

    let submission = match read_submission() {
        Ok(s) => s,
        Err(err) => {
            tracing::error!(error = %err, "Could not decode the submission");
            exit(2);
        }
    };

    if let Err(err) = service.send(&submission) {
        tracing::error!(
            form = submission.form_id,
            client_error = err.is_client_error(),
            "{err}"
        );
        exit(1);
    }
}
