//! Contact form.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::email::is_valid_email;
use super::{non_blank, FormErrors, Validate};

/// What the enquiry is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceNeed {
    AiStrategy,
    MlDevelopment,
    WebApp,
    DataEngineering,
    Other,
}

impl ServiceNeed {
    pub const ALL: [ServiceNeed; 5] = [
        ServiceNeed::AiStrategy,
        ServiceNeed::MlDevelopment,
        ServiceNeed::WebApp,
        ServiceNeed::DataEngineering,
        ServiceNeed::Other,
    ];

    /// Form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceNeed::AiStrategy => "ai-strategy",
            ServiceNeed::MlDevelopment => "ml-development",
            ServiceNeed::WebApp => "web-app",
            ServiceNeed::DataEngineering => "data-engineering",
            ServiceNeed::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceNeed::AiStrategy => "AI Strategy",
            ServiceNeed::MlDevelopment => "ML Development",
            ServiceNeed::WebApp => "Web/App Development",
            ServiceNeed::DataEngineering => "Data Engineering",
            ServiceNeed::Other => "Other",
        }
    }
}

/// Indicative project budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetRange {
    From10kTo50k,
    From50kTo100k,
    From100kTo500k,
    Over500k,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 4] = [
        BudgetRange::From10kTo50k,
        BudgetRange::From50kTo100k,
        BudgetRange::From100kTo500k,
        BudgetRange::Over500k,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetRange::From10kTo50k => "10-50k",
            BudgetRange::From50kTo100k => "50-100k",
            BudgetRange::From100kTo500k => "100-500k",
            BudgetRange::Over500k => "500k+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::From10kTo50k => "$10,000 - $50,000",
            BudgetRange::From50kTo100k => "$50,000 - $100,000",
            BudgetRange::From100kTo500k => "$100,000 - $500,000",
            BudgetRange::Over500k => "$500,000+",
        }
    }
}

/// A form value that is not one of the offered options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option '{}'", self.0)
    }
}

impl std::error::Error for UnknownOption {}

impl FromStr for ServiceNeed {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceNeed::ALL
            .into_iter()
            .find(|need| need.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl FromStr for BudgetRange {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BudgetRange::ALL
            .into_iter()
            .find(|budget| budget.as_str() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

/// Raw contact form fields as posted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub need: String,
    pub budget: String,
    pub message: String,
}

/// A validated enquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub need: Option<ServiceNeed>,
    pub budget: Option<BudgetRange>,
    pub message: String,
}

impl Validate for ContactForm {
    type Output = ContactRequest;

    fn validate(&self) -> Result<ContactRequest, FormErrors> {
        let mut errors = FormErrors::default();

        let name = non_blank(&self.name);
        if name.is_none() {
            errors.push("name", "Please enter your name.");
        }

        let email = non_blank(&self.email);
        match email {
            None => errors.push("email", "Please enter your email address."),
            Some(email) if !is_valid_email(email) => {
                errors.push("email", "Please enter a valid email address.")
            }
            Some(_) => {}
        }

        let message = non_blank(&self.message);
        if message.is_none() {
            errors.push("message", "Please tell us about your project.");
        }

        let need = match non_blank(&self.need).map(str::parse::<ServiceNeed>).transpose() {
            Ok(need) => need,
            Err(_) => {
                errors.push("need", "Please choose one of the listed services.");
                None
            }
        };

        let budget = match non_blank(&self.budget).map(str::parse::<BudgetRange>).transpose() {
            Ok(budget) => budget,
            Err(_) => {
                errors.push("budget", "Please choose one of the listed budget ranges.");
                None
            }
        };

        errors.into_result(ContactRequest {
            name: name.unwrap_or_default().to_string(),
            company: non_blank(&self.company).map(str::to_string),
            email: email.unwrap_or_default().to_string(),
            need,
            budget,
            message: message.unwrap_or_default().to_string(),
        })
    }
}
