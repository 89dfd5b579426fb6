mod parser;

use super::domain::CompanyRequirement;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum CompanyLoadError {
    #[error("failed to read company data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid company CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("company '{company}' has CGPA {value}, expected a value between 0 and 10")]
    CgpaOutOfRange { company: String, value: f64 },
}

/// Read-only handle to the company requirements loaded at startup.
///
/// Cloning shares the underlying list.
#[derive(Debug, Clone)]
pub struct CompanyCatalog {
    companies: Arc<[CompanyRequirement]>,
    load_notice: Option<String>,
}

impl CompanyCatalog {
    pub fn new(companies: Vec<CompanyRequirement>) -> Self {
        Self {
            companies: companies.into(),
            load_notice: None,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CompanyLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CompanyLoadError> {
        let companies = parser::parse_companies(reader)?;
        Ok(Self::new(companies))
    }

    /// Loads the catalog, falling back to an empty one when the source is unusable.
    ///
    /// The failure is kept as a notice so surfaces can show it to the user.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_path(path) {
            Ok(catalog) => {
                info!(path = %path.display(), companies = catalog.len(), "company data loaded");
                catalog
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "company data unavailable");
                Self::unavailable(&err)
            }
        }
    }

    pub(crate) fn unavailable(error: &CompanyLoadError) -> Self {
        Self {
            companies: Arc::from(Vec::new()),
            load_notice: Some(format!("Error loading company data: {error}")),
        }
    }

    pub fn companies(&self) -> &[CompanyRequirement] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn load_notice(&self) -> Option<&str> {
        self.load_notice.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "companies,CGPA,language,internship,HSS\n";

    fn parse(rows: &str) -> Result<CompanyCatalog, CompanyLoadError> {
        CompanyCatalog::from_reader(Cursor::new(format!("{HEADER}{rows}")))
    }

    #[test]
    fn rows_map_to_requirements_in_source_order() {
        let catalog = parse(
            "Acme,7.5,\"Python, SQL\",Yes,Any\n\
Globex, 6 ,Java,No,Science\n",
        )
        .expect("csv parses");

        let names: Vec<_> = catalog.companies().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Globex"]);

        let acme = &catalog.companies()[0];
        assert_eq!(acme.min_cgpa, 7.5);
        assert!(acme.requires_internship);
        assert_eq!(
            acme.required_languages.iter().collect::<Vec<_>>(),
            vec!["python", "sql"]
        );
        assert_eq!(acme.hss_requirement, "Any");

        let globex = &catalog.companies()[1];
        assert_eq!(globex.min_cgpa, 6.0);
        assert!(!globex.requires_internship);
        assert_eq!(globex.hss_requirement, "Science");
    }

    #[test]
    fn internship_flag_only_accepts_exact_yes() {
        let catalog = parse("A,5,python,yes,Any\nB,5,python,YES,Any\nC,5,python,Yes,Any\n")
            .expect("csv parses");
        let flags: Vec<_> = catalog
            .companies()
            .iter()
            .map(|c| c.requires_internship)
            .collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn blank_language_cell_requires_nothing() {
        let catalog = parse("Initech,6.5,,No,Any\n").expect("csv parses");
        assert!(catalog.companies()[0].required_languages.is_empty());
    }

    #[test]
    fn non_numeric_cgpa_is_a_csv_error() {
        let error = parse("Acme,seven,python,Yes,Any\n").expect_err("cgpa must be numeric");
        assert!(matches!(error, CompanyLoadError::Csv(_)));
    }

    #[test]
    fn cgpa_outside_scale_rejects_the_export() {
        for value in ["42", "-3", "NaN", "inf"] {
            let error = parse(&format!("Acme,{value},python,Yes,Any\n"))
                .expect_err("cgpa must be on the 0-10 scale");
            let rejected = matches!(
                &error,
                CompanyLoadError::CgpaOutOfRange { company, .. } if company == "Acme"
            );
            assert!(rejected, "unexpected error for {value}: {error:?}");
        }
    }

    #[test]
    fn cgpa_scale_bounds_are_accepted() {
        let catalog = parse("Low,0,python,No,Any\nHigh,10,python,No,Any\n").expect("csv parses");
        assert_eq!(catalog.companies()[0].min_cgpa, 0.0);
        assert_eq!(catalog.companies()[1].min_cgpa, 10.0);
    }

    #[test]
    fn missing_column_is_a_csv_error() {
        let error = CompanyCatalog::from_reader(Cursor::new(
            "companies,CGPA,language,internship\nAcme,7.5,python,Yes\n",
        ))
        .expect_err("HSS column required");
        assert!(matches!(error, CompanyLoadError::Csv(_)));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = CompanyCatalog::from_path("./does-not-exist.csv").expect_err("missing file");
        assert!(matches!(error, CompanyLoadError::Io(_)));
    }

    #[test]
    fn load_or_empty_keeps_a_notice_for_missing_files() {
        let catalog = CompanyCatalog::load_or_empty("./does-not-exist.csv");
        assert!(catalog.is_empty());
        let notice = catalog.load_notice().expect("notice recorded");
        assert!(notice.starts_with("Error loading company data:"));
    }

    #[test]
    fn clones_share_the_loaded_list() {
        let catalog = parse("Acme,7.5,python,Yes,Any\n").expect("csv parses");
        let shared = catalog.clone();
        assert!(std::ptr::eq(
            catalog.companies().as_ptr(),
            shared.companies().as_ptr()
        ));
        assert!(shared.load_notice().is_none());
    }
}
