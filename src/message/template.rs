use crate::common::FormSubmission;

/// Renders the HTML body of a submission email.
pub trait Template {
    fn render(&self, submission: &FormSubmission) -> String;
}

/// The stock notification body.
///
/// Submitted values are inserted verbatim. Nothing is HTML-escaped, the
/// only transformation is turning the content's line breaks into `<br>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTemplate;

impl Template for FixedTemplate {
    fn render(&self, submission: &FormSubmission) -> String {
        format!(
            concat!(
                "<p>Hello,</p>",
                "<p>Someone has just submitted a new form on your website.</p>",
                "<p>Kind regards,<br>MailBear</p>",
                "<p><br></p>",
                "<p><b>Name:</b> {}</p>",
                "<p><b>Email:</b> {}</p>",
                "<p><b>Subject:</b> {}</p>",
                "<p><b>Content:</b><br><br>{}</p>",
            ),
            submission.name,
            submission.email,
            submission.subject,
            line_breaks(&submission.content),
        )
    }
}

fn line_breaks(content: &str) -> String {
    content.replace("\r\n", "<br>").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(content: &str) -> FormSubmission {
        FormSubmission {
            form_id: "contact".to_string(),
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            subject: "Hi".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn content_newlines_become_breaks() {
        let body = FixedTemplate.render(&submission("line1\nline2\r\nline3"));

        assert!(body.contains("line1<br>line2<br>line3"));
        assert!(!body.contains('\n'));
        assert!(!body.contains('\r'));
    }

    #[test]
    fn fields_appear_in_order() {
        let body = FixedTemplate.render(&submission("hello there"));

        let positions: Vec<usize> = [
            "<p>Hello,</p>",
            "Someone has just submitted a new form on your website.",
            "Kind regards,<br>MailBear",
            "<b>Name:</b> Jane",
            "<b>Email:</b> jane@x.com",
            "<b>Subject:</b> Hi",
            "<b>Content:</b><br><br>hello there",
        ]
        .iter()
        .map(|needle| body.find(needle).expect(needle))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn values_are_not_escaped() {
        let mut s = submission("<i>markup</i>");
        s.subject = "a & b".to_string();
        let body = FixedTemplate.render(&s);

        assert!(body.contains("<b>Subject:</b> a & b"));
        assert!(body.contains("<i>markup</i>"));
    }
}
