use crate::infra::{companies_path, parse_cgpa};
use clap::Args;
use placement_eligibility::error::AppError;
use placement_eligibility::placement::{
    CompanyCatalog, CompanyRequirement, EligibilityDesk, EligibilityResult, PlacementService,
    StudentProfile, HSS_CHOICES,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Cumulative grade-point average on the 0-10 scale
    #[arg(long, value_parser = parse_cgpa)]
    pub(crate) cgpa: f64,
    /// The student has completed at least one internship
    #[arg(long)]
    pub(crate) internship: bool,
    /// Known programming languages, comma separated
    #[arg(long, default_value = "")]
    pub(crate) languages: String,
    /// Higher-secondary background
    #[arg(long, default_value = HSS_CHOICES[0])]
    pub(crate) hss: String,
    /// Company requirements CSV (defaults to APP_COMPANIES_CSV or com.csv)
    #[arg(long)]
    pub(crate) companies: Option<PathBuf>,
    /// Print the result as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompaniesArgs {
    /// Company requirements CSV (defaults to APP_COMPANIES_CSV or com.csv)
    #[arg(long)]
    pub(crate) companies: Option<PathBuf>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        cgpa,
        internship,
        languages,
        hss,
        companies,
        json,
    } = args;

    let path = companies_path(companies)?;
    let service = PlacementService::new(CompanyCatalog::load_or_empty(path));
    let profile = StudentProfile::new(cgpa, u32::from(internship), &languages, hss);
    let result = service.submit(profile);

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Result payload unavailable: {err}"),
        }
    } else {
        print!("{}", render_result(service.notice(), &result));
    }

    Ok(())
}

pub(crate) fn run_companies(args: CompaniesArgs) -> Result<(), AppError> {
    let path = companies_path(args.companies)?;
    let catalog = CompanyCatalog::from_path(&path)?;

    println!("Company requirements ({})", path.display());
    if catalog.is_empty() {
        println!("- none");
    }
    for company in catalog.companies() {
        println!("- {}", describe_company(company));
    }

    Ok(())
}

pub(crate) fn render_result(notice: Option<&str>, result: &EligibilityResult) -> String {
    let mut out = String::new();
    if let Some(notice) = notice {
        out.push_str(notice);
        out.push_str("\n\n");
    }

    out.push_str("Results:\n");
    out.push_str(&format!("Eligibility Status: {}\n", result.status_label()));
    out.push_str(&format!(
        "Placement Probability: {}\n",
        result.probability_label()
    ));

    if result.eligible_companies.is_empty() {
        out.push_str("\nNo eligible companies found.\n");
    } else {
        out.push_str("\nEligible Companies:\n");
        for company in &result.eligible_companies {
            out.push_str(&format!("- {company}\n"));
        }
    }

    if !result.suggestions.is_empty() {
        out.push_str("\nSkill Enhancement Suggestions:\n");
        for suggestion in &result.suggestions {
            out.push_str(&format!("- {suggestion}\n"));
        }
    }

    out
}

fn describe_company(company: &CompanyRequirement) -> String {
    let languages = if company.required_languages.is_empty() {
        "any languages".to_string()
    } else {
        company
            .required_languages
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let internship = if company.requires_internship {
        "internship required"
    } else {
        "no internship needed"
    };

    format!(
        "{}: CGPA >= {:.1} | {} | {} | HSS {}",
        company.name, company.min_cgpa, languages, internship, company.hss_requirement
    )
}
