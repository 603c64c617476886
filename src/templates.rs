//! Stock README section templates.
//!
//! The canned sections offered when assembling a README from scratch. A
//! template contributes a title and a one-line description; the
//! description doubles as the prompt hint handed to a content generator.

/// A stock section offered by the template picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTemplate {
    pub name: &'static str,
    pub description: &'static str,
}

/// Stock sections, in display order.
pub const TEMPLATES: &[SectionTemplate] = &[
    SectionTemplate {
        name: "Features",
        description: "List of key features and capabilities",
    },
    SectionTemplate {
        name: "Installation",
        description: "Step-by-step installation guide",
    },
    SectionTemplate {
        name: "Configuration",
        description: "Configuration options and setup",
    },
    SectionTemplate {
        name: "API Documentation",
        description: "API endpoints and usage",
    },
    SectionTemplate {
        name: "Contributing",
        description: "Guidelines for contributors",
    },
    SectionTemplate {
        name: "Testing",
        description: "Testing procedures and frameworks",
    },
    SectionTemplate {
        name: "Security",
        description: "Security features and considerations",
    },
    SectionTemplate {
        name: "Troubleshooting",
        description: "Common issues and solutions",
    },
];

/// Case-insensitive template lookup by name.
pub fn find_template(name: &str) -> Option<&'static SectionTemplate> {
    TEMPLATES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
