use serde::Deserialize;

use super::domain::StudentProfile;

pub const MIN_CGPA: f64 = 0.0;
pub const MAX_CGPA: f64 = 10.0;

/// Background choices offered by the eligibility form.
pub const HSS_CHOICES: [&str; 2] = ["Any", "Science"];

/// Raw values posted by the eligibility form, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileForm {
    pub cgpa: String,
    #[serde(default)]
    pub internship: String,
    #[serde(default)]
    pub languages: String,
    #[serde(default = "default_hss")]
    pub hss: String,
}

fn default_hss() -> String {
    HSS_CHOICES[0].to_string()
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            cgpa: "7.0".to_string(),
            internship: "0".to_string(),
            languages: "python".to_string(),
            hss: default_hss(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileFormError {
    #[error("CGPA '{0}' is not a number")]
    InvalidCgpa(String),
    #[error("CGPA {0} must be between 0 and 10")]
    CgpaOutOfRange(f64),
    #[error("internship choice '{0}' is not recognised")]
    InvalidInternship(String),
}

impl ProfileForm {
    /// Validates the form fields and builds the profile to evaluate.
    ///
    /// Language and HSS fields never fail: a blank language list is an empty set.
    pub fn into_profile(self) -> Result<StudentProfile, ProfileFormError> {
        let cgpa = parse_cgpa(&self.cgpa)?;
        let internship_count = parse_internship(&self.internship)?;
        Ok(StudentProfile::new(
            cgpa,
            internship_count,
            &self.languages,
            hss_or_default(&self.hss),
        ))
    }

    pub fn has_internship(&self) -> bool {
        matches!(parse_internship(&self.internship), Ok(count) if count > 0)
    }
}

/// Blank backgrounds fall back to the first form choice, "Any".
pub fn hss_or_default(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        HSS_CHOICES[0]
    } else {
        trimmed
    }
}

fn parse_cgpa(raw: &str) -> Result<f64, ProfileFormError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| ProfileFormError::InvalidCgpa(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(ProfileFormError::InvalidCgpa(trimmed.to_string()));
    }
    if !(MIN_CGPA..=MAX_CGPA).contains(&value) {
        return Err(ProfileFormError::CgpaOutOfRange(value));
    }

    Ok(value)
}

/// The form collapses internships to a yes/no choice.
fn parse_internship(raw: &str) -> Result<u32, ProfileFormError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "no" | "false" => Ok(0),
        "1" | "yes" | "true" | "on" => Ok(1),
        other => Err(ProfileFormError::InvalidInternship(other.to_string())),
    }
}
