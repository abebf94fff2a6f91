//! Email bodies embedded at compile time, with `{{key}}` substitution.

use std::borrow::Cow;

/// Rendered subject and bodies of one email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// The transactional emails the application sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    /// Keywords: `base_url`, `action_url`
    Verification,
    /// Keywords: `email`, `name`, `website`
    Welcome,
    /// Keywords: `otp`, `email`, `name`, `website`
    Otp,
}

impl EmailTemplate {
    pub fn subject(self) -> &'static str {
        match self {
            EmailTemplate::Verification => "Confirm your registration",
            EmailTemplate::Welcome => "Welcome!",
            EmailTemplate::Otp => "Your login code",
        }
    }

    fn html(self) -> &'static str {
        match self {
            EmailTemplate::Verification => {
                include_str!("../../templates/verification_email.html")
            }
            EmailTemplate::Welcome => include_str!("../../templates/welcome_email.html"),
            EmailTemplate::Otp => include_str!("../../templates/otp_email.html"),
        }
    }

    fn text(self) -> &'static str {
        match self {
            EmailTemplate::Verification => include_str!("../../templates/verification_email.txt"),
            EmailTemplate::Welcome => include_str!("../../templates/welcome_email.txt"),
            EmailTemplate::Otp => include_str!("../../templates/otp_email.txt"),
        }
    }

    pub fn render(self, keywords: &[(&str, &str)]) -> RenderedEmail {
        RenderedEmail {
            subject: self.subject().to_string(),
            html_body: render_html(self.html(), keywords),
            text_body: render(self.text(), keywords),
        }
    }
}

/// Replace every `{{key}}` placeholder with its keyword value
///
/// Substitution is a single pass over the template, so a value that itself
/// contains `{{...}}` is copied verbatim. Placeholders without a keyword are
/// left untouched.
pub fn render(template: &str, keywords: &[(&str, &str)]) -> String {
    substitute(template, keywords, Cow::Borrowed)
}

/// Same as [`render`], with every value HTML-escaped
///
/// Values may land in element text or in double-quoted attributes such as
/// `href`, so quotes are escaped as well.
pub fn render_html(template: &str, keywords: &[(&str, &str)]) -> String {
    substitute(
        template,
        keywords,
        html_escape::encode_double_quoted_attribute::<str>,
    )
}

fn substitute<'v>(
    template: &str,
    keywords: &[(&str, &'v str)],
    encode: fn(&'v str) -> Cow<'v, str>,
) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = &after_open[..end];
        match keywords.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => output.push_str(&encode(*value)),
            None => output.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    output.push_str(rest);
    output
}
