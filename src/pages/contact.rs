use maud::{html, Markup};

use crate::forms::{BudgetRange, ContactForm, FormErrors, FormState, ServiceNeed};
use crate::pages::layout::{document, PageContext};
use crate::routing::router::{CONTACT_PATH, HOME_PATH};
use crate::seo::meta;

pub fn render(ctx: &PageContext<'_>, state: &FormState<ContactForm>) -> Markup {
    let site = ctx.site;
    let content = html! {
        section.hero {
            span.eyebrow { "Contact Us" }
            h1 { "Let's Build Something " span.accent { "Amazing" } }
            p.lead { "Ready to transform your business with AI? Get in touch and let's discuss your project." }
        }
        section.contact {
            div.contact-details {
                h2 { "Get in Touch" }
                dl {
                    dt { "Email" }
                    dd { a href=(format!("mailto:{}", site.email)) { (site.email) } }
                    dt { "Phone" }
                    dd { a href=(site.phone_href()) { (site.phone) } }
                    dt { "Office" }
                    dd { (site.street_address) ", " (site.locality) " " (site.region) " " (site.postal_code) }
                }
            }
            @match state {
                FormState::Submitted(request) => {
                    div.thank-you role="status" {
                        h2 { "Thank You!" }
                        p {
                            "Thanks, " (request.name) ". We've received your message and will get back to you at "
                            (request.email) " within 24 hours."
                        }
                        a.button href=(HOME_PATH) { "Back to Home" }
                    }
                }
                FormState::Idle { draft, errors } => (contact_form(draft, errors)),
            }
        }
    };
    document(ctx, &meta::contact(site), content)
}

fn contact_form(draft: &ContactForm, errors: &FormErrors) -> Markup {
    html! {
        form.contact-form method="post" action=(CONTACT_PATH) novalidate {
            @if !errors.is_empty() {
                p.form-error role="alert" { "Please correct the highlighted fields." }
            }
            label {
                "Name *"
                input type="text" name="name" required value=(draft.name);
            }
            (field_error(errors, "name"))
            label {
                "Company"
                input type="text" name="company" value=(draft.company);
            }
            label {
                "Email *"
                input type="email" name="email" required value=(draft.email);
            }
            (field_error(errors, "email"))
            label {
                "What do you need?"
                select name="need" {
                    option value="" { "Select a service" }
                    @for need in ServiceNeed::ALL {
                        option value=(need.as_str()) selected[draft.need == need.as_str()] { (need.label()) }
                    }
                }
            }
            (field_error(errors, "need"))
            label {
                "Budget Range"
                select name="budget" {
                    option value="" { "Select budget range" }
                    @for budget in BudgetRange::ALL {
                        option value=(budget.as_str()) selected[draft.budget == budget.as_str()] { (budget.label()) }
                    }
                }
            }
            (field_error(errors, "budget"))
            label {
                "Tell us about your project *"
                textarea name="message" rows="5" required { (draft.message) }
            }
            (field_error(errors, "message"))
            button type="submit" { "Send Message" }
        }
    }
}

fn field_error(errors: &FormErrors, field: &str) -> Markup {
    html! {
        @if let Some(message) = errors.for_field(field) {
            p.field-error role="alert" { (message) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteIdentity;

    fn page(state: &FormState<ContactForm>) -> String {
        let site = SiteIdentity::default();
        render(&PageContext::new(&site, CONTACT_PATH), state).into_string()
    }

    #[test]
    fn idle_form_lists_every_option() {
        let html = page(&FormState::idle());
        for need in ServiceNeed::ALL {
            assert!(html.contains(need.label()));
        }
        for budget in BudgetRange::ALL {
            assert!(html.contains(&format!(r#"value="{}""#, budget.as_str())));
        }
        assert!(!html.contains("Thank You!"));
    }

    #[test]
    fn valid_submission_shows_thank_you() {
        let state = FormState::idle().submit(ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "We need a forecasting model.".into(),
            ..ContactForm::default()
        });
        let html = page(&state);
        assert!(html.contains("Thank You!"));
        assert!(html.contains("ada@example.com"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn invalid_submission_keeps_values_and_selection() {
        let state = FormState::idle().submit(ContactForm {
            name: "Ada".into(),
            need: "web-app".into(),
            message: "Hello".into(),
            ..ContactForm::default()
        });
        let html = page(&state);
        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains(r#"<option value="web-app" selected>"#));
        assert!(html.contains("Please enter your email address."));
        assert!(html.contains("Hello</textarea>"));
    }
}
