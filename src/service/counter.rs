use crate::common::SubmissionCounter;

pub const FORM_SUBMISSIONS_TOTAL: &str = "mailbear_form_submissions_total";

/// [`SubmissionCounter`] backed by the `metrics` facade, so whichever
/// recorder the process installs gets `mailbear_form_submissions_total`.
#[derive(Debug, Clone, Copy)]
pub struct MetricsCounter;

impl MetricsCounter {
    pub fn new() -> Self {
        metrics::describe_counter!(
            FORM_SUBMISSIONS_TOTAL,
            "How many form submissions handled, partitioned by form name."
        );
        Self
    }
}

impl Default for MetricsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionCounter for MetricsCounter {
    fn increment(&self, form: &str) {
        metrics::counter!(FORM_SUBMISSIONS_TOTAL, "form" => form.to_owned()).increment(1);
    }
}
