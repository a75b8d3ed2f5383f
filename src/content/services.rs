//! Service offerings, delivery process, headline figures and company values.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline figure. The animated counters on the original site count up
/// to `value`; here only the final display form is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.value, self.suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

/// A client quote shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub static SERVICES: &[Service] = &[
    Service {
        title: "AI Strategy & Consulting",
        description: "Strategic roadmaps for AI adoption that align with your business objectives.",
        features: &["AI Readiness Assessment", "Use Case Identification", "ROI Analysis", "Implementation Planning"],
    },
    Service {
        title: "Machine Learning Solutions",
        description: "Custom ML models for predictive analytics, NLP, and computer vision.",
        features: &["Predictive Analytics", "Natural Language Processing", "Computer Vision", "Recommendation Systems"],
    },
    Service {
        title: "Data Engineering",
        description: "Robust data pipelines and infrastructure for AI-ready organizations.",
        features: &["Data Pipeline Design", "ETL Development", "Data Warehouse", "Real-time Processing"],
    },
    Service {
        title: "Web & App Development",
        description: "Modern, scalable applications built with cutting-edge technology.",
        features: &["React/Next.js", "Mobile Apps", "API Development", "Cloud Architecture"],
    },
    Service {
        title: "Process Automation",
        description: "Intelligent automation to streamline operations and reduce costs.",
        features: &["RPA Implementation", "Workflow Automation", "Document Processing", "Integration Services"],
    },
    Service {
        title: "Cloud & MLOps",
        description: "Enterprise-grade infrastructure for deploying and scaling AI solutions.",
        features: &["AWS/GCP/Azure", "Model Deployment", "CI/CD Pipelines", "Monitoring & Maintenance"],
    },
];

pub static PROCESS: &[ProcessStep] = &[
    ProcessStep { step: "01", title: "Discovery", description: "Deep dive into your business challenges and objectives" },
    ProcessStep { step: "02", title: "Strategy", description: "Define the roadmap and technical approach" },
    ProcessStep { step: "03", title: "Build", description: "Agile development with continuous feedback" },
    ProcessStep { step: "04", title: "Deploy", description: "Launch, monitor, and iterate for optimal results" },
];

/// Short service summaries shown on the home page.
pub static HIGHLIGHTS: &[CompanyValue] = &[
    CompanyValue { title: "AI Strategy", description: "Transform your business with intelligent automation and predictive analytics." },
    CompanyValue { title: "Custom Development", description: "Scalable web and mobile applications built with cutting-edge technology." },
    CompanyValue { title: "Data Intelligence", description: "Turn raw data into actionable insights that drive growth." },
];

pub static HOME_STATS: &[Stat] = &[
    Stat { value: 150, label: "Projects Delivered", prefix: "", suffix: "+" },
    Stat { value: 50, label: "Value Created", prefix: "$", suffix: "M+" },
    Stat { value: 98, label: "Client Satisfaction", prefix: "", suffix: "%" },
    Stat { value: 24, label: "Support", prefix: "", suffix: "/7" },
];

pub static ABOUT_STATS: &[Stat] = &[
    Stat { value: 2018, label: "Founded", prefix: "", suffix: "" },
    Stat { value: 50, label: "Team Members", prefix: "", suffix: "+" },
    Stat { value: 150, label: "Projects", prefix: "", suffix: "+" },
    Stat { value: 95, label: "Retention Rate", prefix: "", suffix: "%" },
];

pub static WORK_STATS: &[Stat] = &[
    Stat { value: 50, label: "Value Created", prefix: "$", suffix: "M+" },
    Stat { value: 150, label: "Projects Completed", prefix: "", suffix: "+" },
    Stat { value: 40, label: "Happy Clients", prefix: "", suffix: "+" },
];

pub static VALUES: &[CompanyValue] = &[
    CompanyValue { title: "Transparency", description: "Open communication and honest partnerships built on trust." },
    CompanyValue { title: "Innovation", description: "Pushing boundaries with cutting-edge technology solutions." },
    CompanyValue { title: "Collaboration", description: "Working together to achieve exceptional outcomes." },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Uno Digit transformed our operations with AI solutions that exceeded expectations.",
        author: "Sarah Chen",
        role: "CTO, TechCorp",
    },
    Testimonial {
        quote: "Their expertise in machine learning helped us achieve a 40% efficiency gain.",
        author: "Michael Ross",
        role: "CEO, DataFlow",
    },
    Testimonial {
        quote: "The team delivered exceptional results on time and within budget.",
        author: "Emma Williams",
        role: "VP Engineering, NextGen",
    },
];
