//! Form handling.
//!
//! # Data Flow
//! ```text
//! POST body (urlencoded)
//!     → draft struct (every field a possibly empty string)
//!     → Validate::validate (required fields, email syntax, known options)
//!     → FormState::submit
//!         Ok  → Submitted(output)   (thank-you / subscribed view)
//!         Err → Idle { draft, errors } (form re-rendered with values)
//! ```
//!
//! # Design Decisions
//! - Nothing is persisted or sent anywhere; submission only changes the view
//! - Extraction never fails on missing fields, validation reports them
//! - One `submit` call is one transition

pub mod contact;
pub mod email;
pub mod newsletter;

use std::fmt::Debug;

pub use contact::{BudgetRange, ContactForm, ContactRequest, ServiceNeed};
pub use newsletter::{NewsletterForm, Subscription};

/// A problem with one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every problem found in a submission.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for `field`.
    pub fn for_field(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(output)` when no error was recorded.
    pub fn into_result<T>(self, output: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(output)
        } else {
            Err(self)
        }
    }
}

/// A submitted draft that can be checked.
pub trait Validate {
    type Output: Debug;

    fn validate(&self) -> Result<Self::Output, FormErrors>;
}

/// View state of a form.
#[derive(Debug)]
pub enum FormState<D: Validate> {
    Idle { draft: D, errors: FormErrors },
    Submitted(D::Output),
}

impl<D: Validate + Default> FormState<D> {
    /// A blank form with no errors.
    pub fn idle() -> Self {
        FormState::Idle {
            draft: D::default(),
            errors: FormErrors::default(),
        }
    }
}

impl<D: Validate + Default> Default for FormState<D> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<D: Validate> FormState<D> {
    /// Submit a draft.
    ///
    /// From `Idle`, a valid draft moves to `Submitted`; an invalid one stays
    /// `Idle` carrying the draft and its errors. A form already submitted
    /// stays as it is.
    pub fn submit(self, draft: D) -> Self {
        match self {
            FormState::Submitted(_) => self,
            FormState::Idle { .. } => match draft.validate() {
                Ok(output) => FormState::Submitted(output),
                Err(errors) => FormState::Idle { draft, errors },
            },
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, FormState::Submitted(_))
    }

    pub fn errors(&self) -> Option<&FormErrors> {
        match self {
            FormState::Idle { errors, .. } => Some(errors),
            FormState::Submitted(_) => None,
        }
    }
}

/// Trimmed value, `None` when blank.
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
