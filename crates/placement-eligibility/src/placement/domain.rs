use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// HSS requirement value that accepts every background.
pub const ANY_HSS: &str = "any";

/// Hiring requirements published by a single company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRequirement {
    pub name: String,
    pub min_cgpa: f64,
    pub required_languages: BTreeSet<String>,
    pub requires_internship: bool,
    pub hss_requirement: String,
}

impl CompanyRequirement {
    /// Minimum number of internships a student needs for this company.
    pub fn required_internships(&self) -> u32 {
        u32::from(self.requires_internship)
    }

    pub fn accepts_hss(&self, background: &str) -> bool {
        let requirement = self.hss_requirement.trim().to_lowercase();
        requirement == ANY_HSS || requirement == background.trim().to_lowercase()
    }

    /// Languages the company asks for that the student does not know.
    pub fn missing_languages(&self, known: &BTreeSet<String>) -> BTreeSet<String> {
        self.required_languages.difference(known).cloned().collect()
    }
}

/// Academic snapshot submitted for a single eligibility check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub cgpa: f64,
    pub internship_count: u32,
    pub languages: BTreeSet<String>,
    pub hss_background: String,
}

impl StudentProfile {
    pub fn new(
        cgpa: f64,
        internship_count: u32,
        languages: &str,
        hss_background: impl Into<String>,
    ) -> Self {
        Self {
            cgpa,
            internship_count,
            languages: parse_language_list(languages),
            hss_background: hss_background.into(),
        }
    }
}

/// Splits a comma separated language list into trimmed, lowercase names.
///
/// Blank entries are dropped, so `""` and `" , "` both produce an empty set.
pub fn parse_language_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Outcome of matching one student against the whole company catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    pub probability_percent: u8,
    pub eligible_companies: Vec<String>,
    pub suggestions: Vec<String>,
}

impl EligibilityResult {
    pub fn status_label(&self) -> &'static str {
        if self.eligible {
            "Eligible"
        } else {
            "Not Eligible"
        }
    }

    pub fn probability_label(&self) -> String {
        format!("{}%", self.probability_percent)
    }
}
