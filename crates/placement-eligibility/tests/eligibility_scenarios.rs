use placement_eligibility::placement::{
    evaluate, parse_language_list, CompanyCatalog, CompanyRequirement, EligibilityDesk,
    PlacementService, StudentProfile,
};

fn acme(hss: &str) -> CompanyRequirement {
    CompanyRequirement {
        name: "Acme".to_string(),
        min_cgpa: 7.5,
        required_languages: parse_language_list("python"),
        requires_internship: true,
        hss_requirement: hss.to_string(),
    }
}

fn sample_catalog() -> CompanyCatalog {
    let data = include_bytes!("../companies.csv");
    CompanyCatalog::from_reader(&data[..]).expect("sample companies load")
}

#[test]
fn qualified_student_is_eligible_for_matching_company() {
    let student = StudentProfile::new(8.0, 1, "python", "Any");
    let result = evaluate(&student, &[acme("any")]);

    assert!(result.eligible);
    assert_eq!(result.eligible_companies, vec!["Acme"]);
    assert_eq!(result.probability_percent, 35);
    assert!(result.suggestions.is_empty());
}

#[test]
fn language_gap_produces_suggestion() {
    let student = StudentProfile::new(8.0, 1, "java", "Any");
    let result = evaluate(&student, &[acme("any")]);

    assert!(!result.eligible);
    assert!(result.eligible_companies.is_empty());
    assert_eq!(result.suggestions, vec!["Learn python for Acme"]);
    assert_eq!(result.probability_percent, 20);
}

#[test]
fn hss_mismatch_excludes_silently() {
    let student = StudentProfile::new(8.0, 1, "python", "Any");
    let result = evaluate(&student, &[acme("Science")]);

    assert!(result.eligible_companies.is_empty());
    assert!(result.suggestions.is_empty());
    assert_eq!(result.status_label(), "Not Eligible");
}

#[test]
fn blank_student_is_excluded_from_every_demanding_company() {
    let catalog = sample_catalog();
    let student = StudentProfile::new(0.0, 0, "", "Any");
    let result = evaluate(&student, catalog.companies());

    for company in catalog.companies() {
        let demanding = company.min_cgpa > 0.0
            || company.requires_internship
            || !company.required_languages.is_empty();
        if demanding {
            assert!(
                !result.eligible_companies.contains(&company.name),
                "{} should exclude a blank profile",
                company.name
            );
        }
    }
}

#[test]
fn probability_and_verdict_track_eligible_count() {
    let catalog = sample_catalog();
    let profiles = [
        StudentProfile::new(9.0, 1, "python, java, c, c++, sql", "Science"),
        StudentProfile::new(7.0, 0, "java, sql", "Any"),
        StudentProfile::new(5.0, 0, "", "Any"),
    ];

    for profile in &profiles {
        let result = evaluate(profile, catalog.companies());
        let count = result.eligible_companies.len();
        assert_eq!(
            usize::from(result.probability_percent),
            (20 + 15 * count).min(100)
        );
        assert_eq!(result.eligible, count > 0);
    }
}

#[test]
fn strong_profile_caps_probability_at_one_hundred() {
    let catalog = sample_catalog();
    let student = StudentProfile::new(9.0, 1, "python, java, c, c++, sql", "Science");
    let result = evaluate(&student, catalog.companies());

    assert_eq!(result.eligible_companies.len(), catalog.len());
    assert_eq!(result.probability_percent, 100);
    assert_eq!(result.probability_label(), "100%");
}

#[test]
fn eligible_companies_follow_catalog_order() {
    let catalog = sample_catalog();
    let student = StudentProfile::new(7.0, 0, "java, sql, python", "Any");
    let result = evaluate(&student, catalog.companies());

    assert_eq!(result.eligible_companies, vec!["TCS", "Infosys", "Cognizant"]);
    assert_eq!(
        result.suggestions,
        vec!["Learn c for Zoho", "Learn c++ for Google"]
    );
}

#[test]
fn language_case_and_spacing_do_not_change_results() {
    let catalog = sample_catalog();
    let spaced = StudentProfile::new(7.5, 1, "Python, SQL", "Any");
    let compact = StudentProfile::new(7.5, 1, "python,sql", "Any");

    let spaced = evaluate(&spaced, catalog.companies());
    let compact = evaluate(&compact, catalog.companies());
    assert_eq!(spaced.eligible_companies, compact.eligible_companies);
    assert_eq!(spaced, compact);
}

#[test]
fn repeated_submissions_are_identical() {
    let service = PlacementService::new(sample_catalog());
    let profile = StudentProfile::new(8.0, 1, "java, python", "Science");

    let first = service.submit(profile.clone());
    let second = service.submit(profile);
    assert_eq!(first, second);
}
