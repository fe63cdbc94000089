//! Static job template catalog.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobTemplate {
    pub id: &'static str,
    pub name: &'static str,
}

/// The catalog, in the order clients display it.
pub static TEMPLATES: [JobTemplate; 5] = [
    JobTemplate {
        id: "software-engineer",
        name: "Software Engineer",
    },
    JobTemplate {
        id: "data-scientist",
        name: "Data Scientist",
    },
    JobTemplate {
        id: "product-manager",
        name: "Product Manager",
    },
    JobTemplate {
        id: "ux-designer",
        name: "UX Designer",
    },
    JobTemplate {
        id: "financial-analyst",
        name: "Financial Analyst",
    },
];

pub fn find_template(id: &str) -> Option<&'static JobTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}
