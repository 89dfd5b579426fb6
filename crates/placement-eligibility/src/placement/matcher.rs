use std::collections::BTreeSet;

use super::domain::{CompanyRequirement, EligibilityResult, StudentProfile};

const BASE_PROBABILITY: u32 = 20;
const PROBABILITY_PER_COMPANY: u32 = 15;
const MAX_PROBABILITY: u32 = 100;

/// Verdict for a single company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyOutcome {
    Eligible,
    /// Languages the student still needs. Reported even when other criteria fail too.
    SkillGap(BTreeSet<String>),
    /// Failed on CGPA, internship or HSS alone.
    Excluded,
}

pub fn match_company(student: &StudentProfile, company: &CompanyRequirement) -> CompanyOutcome {
    let missing = company.missing_languages(&student.languages);
    let hss_ok = company.accepts_hss(&student.hss_background);

    if student.cgpa >= company.min_cgpa
        && student.internship_count >= company.required_internships()
        && missing.is_empty()
        && hss_ok
    {
        CompanyOutcome::Eligible
    } else if !missing.is_empty() {
        CompanyOutcome::SkillGap(missing)
    } else {
        CompanyOutcome::Excluded
    }
}

/// Matches a student against every company, preserving catalog order.
pub fn evaluate(student: &StudentProfile, companies: &[CompanyRequirement]) -> EligibilityResult {
    let mut eligible_companies = Vec::new();
    let mut suggestions = Vec::new();

    for company in companies {
        match match_company(student, company) {
            CompanyOutcome::Eligible => eligible_companies.push(company.name.clone()),
            CompanyOutcome::SkillGap(missing) => {
                suggestions.push(skill_suggestion(&missing, &company.name));
            }
            CompanyOutcome::Excluded => {}
        }
    }

    EligibilityResult {
        eligible: !eligible_companies.is_empty(),
        probability_percent: placement_probability(eligible_companies.len()),
        eligible_companies,
        suggestions,
    }
}

/// Coarse linear heuristic: 20% base, 15 points per eligible company, capped at 100.
pub fn placement_probability(eligible_count: usize) -> u8 {
    let count = u32::try_from(eligible_count).unwrap_or(u32::MAX);
    let percent = count
        .saturating_mul(PROBABILITY_PER_COMPANY)
        .saturating_add(BASE_PROBABILITY)
        .min(MAX_PROBABILITY);
    percent as u8
}

fn skill_suggestion(missing: &BTreeSet<String>, company: &str) -> String {
    let languages = missing.iter().map(String::as_str).collect::<Vec<_>>();
    format!("Learn {} for {}", languages.join(", "), company)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::domain::parse_language_list;

    fn company(
        name: &str,
        min_cgpa: f64,
        languages: &str,
        internship: bool,
        hss: &str,
    ) -> CompanyRequirement {
        CompanyRequirement {
            name: name.to_string(),
            min_cgpa,
            required_languages: parse_language_list(languages),
            requires_internship: internship,
            hss_requirement: hss.to_string(),
        }
    }

    #[test]
    fn probability_grows_linearly_then_caps() {
        assert_eq!(placement_probability(0), 20);
        assert_eq!(placement_probability(1), 35);
        assert_eq!(placement_probability(5), 95);
        assert_eq!(placement_probability(6), 100);
        assert_eq!(placement_probability(usize::MAX), 100);
    }

    #[test]
    fn cgpa_boundary_is_inclusive() {
        let acme = company("Acme", 7.5, "python", false, "any");
        let student = StudentProfile::new(7.5, 0, "python", "Any");
        assert_eq!(match_company(&student, &acme), CompanyOutcome::Eligible);
    }

    #[test]
    fn internship_requirement_excludes_without_suggestion() {
        let acme = company("Acme", 6.0, "python", true, "any");
        let student = StudentProfile::new(9.0, 0, "python", "Any");
        assert_eq!(match_company(&student, &acme), CompanyOutcome::Excluded);
    }

    #[test]
    fn language_gap_wins_over_other_failures() {
        let acme = company("Acme", 9.5, "go, rust", true, "Science");
        let student = StudentProfile::new(5.0, 0, "rust", "Any");
        let expected: BTreeSet<String> = ["go".to_string()].into_iter().collect();
        assert_eq!(match_company(&student, &acme), CompanyOutcome::SkillGap(expected));
    }

    #[test]
    fn suggestion_lists_missing_languages_in_sorted_order() {
        let companies = vec![company("Umbrella", 6.0, "sql, java, c++", false, "any")];
        let student = StudentProfile::new(8.0, 1, "", "Any");
        let result = evaluate(&student, &companies);
        assert_eq!(result.suggestions, vec!["Learn c++, java, sql for Umbrella"]);
    }

    #[test]
    fn company_without_language_requirements_only_checks_other_criteria() {
        let companies = vec![company("Initech", 6.0, "", false, "any")];
        let result = evaluate(&StudentProfile::new(6.0, 0, "", "Any"), &companies);
        assert_eq!(result.eligible_companies, vec!["Initech"]);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn empty_catalog_is_not_eligible() {
        let result = evaluate(&StudentProfile::new(10.0, 1, "python", "Science"), &[]);
        assert!(!result.eligible);
        assert_eq!(result.probability_percent, 20);
        assert!(result.eligible_companies.is_empty());
        assert!(result.suggestions.is_empty());
    }
}
