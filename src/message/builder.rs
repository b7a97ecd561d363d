use lettre::message::{header::ContentType, Mailbox};
use lettre::{Address, Message};
use snafu::ResultExt;

use crate::common::{Form, FormSubmission, MessageSnafu, Result};

use super::{FixedTemplate, Template};

const SUBJECT_PREFIX: &str = "New submission with subject: ";

/// Turns a submission of a resolved form into an outgoing email.
pub struct MessageBuilder {
    from: Mailbox,
    template: Box<dyn Template + Send + Sync>,
}

impl MessageBuilder {
    pub fn new(from: Mailbox) -> Self {
        Self {
            from,
            template: Box::new(FixedTemplate),
        }
    }

    /// Parses the sender, e.g. `forms@example.com` or
    /// `MailBear <forms@example.com>`.
    pub fn from_address(from: &str) -> Result<Self> {
        Ok(Self::new(parse_mailbox(from)?))
    }

    pub fn with_template(mut self, template: impl Template + Send + Sync + 'static) -> Self {
        self.template = Box::new(template);
        self
    }

    pub fn build(&self, submission: &FormSubmission, form: &Form) -> Result<Message> {
        let reply_to = submitter(submission)?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .subject(format!("{SUBJECT_PREFIX}{}", submission.subject))
            .header(ContentType::TEXT_HTML);

        let mut recipients: Vec<Mailbox> = Vec::with_capacity(form.to.len());
        for recipient in form.to.iter() {
            let mailbox = parse_mailbox(recipient)?;
            if !recipients.iter().any(|r| r.email == mailbox.email) {
                recipients.push(mailbox);
            }
        }
        for mailbox in recipients {
            builder = builder.to(mailbox);
        }

        builder
            .body(self.template.render(submission))
            .boxed()
            .context(MessageSnafu {
                message: format!("Failed to build message for form {}", form.key),
            })
    }
}

pub(crate) fn parse_mailbox(value: &str) -> Result<Mailbox> {
    value.parse::<Mailbox>().boxed().context(MessageSnafu {
        message: format!("Invalid address {value}"),
    })
}

fn submitter(submission: &FormSubmission) -> Result<Mailbox> {
    let email = submission
        .email
        .trim()
        .parse::<Address>()
        .boxed()
        .context(MessageSnafu {
            message: format!("Invalid submitter address {:?}", submission.email),
        })?;
    let name = Some(submission.name.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string);
    Ok(Mailbox::new(name, email))
}
