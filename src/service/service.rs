use std::sync::Arc;

use snafu::{OptionExt, ResultExt};

use crate::common::{
    DeliverySnafu, FormNotFoundSnafu, FormSubmission, Result, SubmissionCounter, Transport,
};
use crate::forms::FormRegistry;
use crate::message::MessageBuilder;

type BoxedTransport = Box<dyn Transport + Send + Sync>;
type SharedCounter = Arc<dyn SubmissionCounter + Send + Sync>;

/// Routes form submissions to their recipients.
///
/// Safe to share between request handlers. Each [`MailBear::send`] runs
/// lookup, build and delivery in order on the calling thread.
pub struct MailBear {
    forms: FormRegistry,
    builder: MessageBuilder,
    transport: BoxedTransport,
    counter: SharedCounter,
}

impl MailBear {
    pub fn new(
        forms: FormRegistry,
        builder: MessageBuilder,
        transport: BoxedTransport,
        counter: SharedCounter,
    ) -> Self {
        Self {
            forms,
            builder,
            transport,
            counter,
        }
    }

    pub fn forms(&self) -> &FormRegistry {
        &self.forms
    }

    /// Delivers a submission to the recipients of its form.
    ///
    /// The counter only moves once the server has accepted the message.
    pub fn send(&self, submission: &FormSubmission) -> Result<()> {
        let form = self
            .forms
            .lookup(&submission.form_id)
            .context(FormNotFoundSnafu {
                key: submission.form_id.as_str(),
            })?;

        let message = self.builder.build(submission, form)?;

        self.transport.send(&message).context(DeliverySnafu {
            form: form.name.as_str(),
        })?;

        self.counter.increment(&form.name);

        tracing::info!(
            form = form.name,
            recipients = form.to.len(),
            "Submission delivered",
        );

        Ok(())
    }
}
