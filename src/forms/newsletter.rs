//! Newsletter signup.

use serde::Deserialize;

use super::email::is_valid_email;
use super::{non_blank, FormErrors, Validate};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewsletterForm {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub email: String,
}

impl Validate for NewsletterForm {
    type Output = Subscription;

    fn validate(&self) -> Result<Subscription, FormErrors> {
        let mut errors = FormErrors::default();
        match non_blank(&self.email) {
            None => errors.push("email", "Please enter your email address."),
            Some(email) if is_valid_email(email) => {
                return Ok(Subscription {
                    email: email.to_string(),
                })
            }
            Some(_) => errors.push("email", "Please enter a valid email address."),
        }
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_subscribes() {
        let form = NewsletterForm {
            email: " reader@example.com ".into(),
        };
        assert_eq!(
            form.validate(),
            Ok(Subscription {
                email: "reader@example.com".into()
            })
        );
    }

    #[test]
    fn blank_and_invalid_are_distinguished() {
        let blank = NewsletterForm::default().validate().unwrap_err();
        assert_eq!(blank.for_field("email"), Some("Please enter your email address."));

        let invalid = NewsletterForm {
            email: "reader@".into(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(invalid.for_field("email"), Some("Please enter a valid email address."));
    }
}
