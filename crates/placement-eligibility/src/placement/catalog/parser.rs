use super::super::domain::{parse_language_list, CompanyRequirement};
use super::CompanyLoadError;
use crate::placement::intake::{MAX_CGPA, MIN_CGPA};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_companies<R: Read>(
    reader: R,
) -> Result<Vec<CompanyRequirement>, CompanyLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut companies = Vec::new();

    for record in csv_reader.deserialize::<CompanyRow>() {
        let row = record?;
        if !(MIN_CGPA..=MAX_CGPA).contains(&row.cgpa) {
            return Err(CompanyLoadError::CgpaOutOfRange {
                company: row.name,
                value: row.cgpa,
            });
        }
        companies.push(row.into_requirement());
    }

    Ok(companies)
}

#[derive(Debug, Deserialize)]
struct CompanyRow {
    #[serde(rename = "companies")]
    name: String,
    #[serde(rename = "CGPA")]
    cgpa: f64,
    #[serde(rename = "language", deserialize_with = "empty_string_as_none")]
    languages: Option<String>,
    #[serde(rename = "internship")]
    internship: String,
    #[serde(rename = "HSS")]
    hss: String,
}

impl CompanyRow {
    fn into_requirement(self) -> CompanyRequirement {
        let required_languages = self
            .languages
            .as_deref()
            .map(parse_language_list)
            .unwrap_or_default();

        CompanyRequirement {
            name: self.name,
            min_cgpa: self.cgpa,
            required_languages,
            requires_internship: self.internship == "Yes",
            hss_requirement: self.hss,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
