pub mod common;
pub mod config;
pub mod forms;
pub mod message;
pub mod service;
pub mod smtp;

pub use common::{Error, Form, FormSubmission, Result};
pub use config::*;
pub use service::MailBear;
