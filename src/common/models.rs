use lettre::Message;

use super::BoxError;

/// A configured form and the people its submissions go to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Form {
    pub key: String,
    /// Human readable name, used as the metrics label.
    pub name: String,
    #[serde(alias = "to_email")]
    pub to: Vec<String>,
}

/// A decoded submission of one of the configured forms.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormSubmission {
    #[serde(rename = "formID", alias = "form_id")]
    pub form_id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub content: String,
}

/// Delivers a finished message. Implementations open their own
/// connection per call and never share it between callers.
pub trait Transport {
    fn send(&self, message: &Message) -> std::result::Result<(), BoxError>;
}

/// Counts delivered submissions per form display name.
pub trait SubmissionCounter {
    fn increment(&self, form: &str);
}
