use tracing::debug;

use super::catalog::CompanyCatalog;
use super::domain::{EligibilityResult, StudentProfile};
use super::matcher::evaluate;

/// Capability the interactive surfaces depend on: hand over a profile, get a verdict.
pub trait EligibilityDesk: Send + Sync {
    fn submit(&self, profile: StudentProfile) -> EligibilityResult;

    /// User-visible notice describing why company data is missing, if it is.
    fn notice(&self) -> Option<&str> {
        None
    }
}

/// Service evaluating profiles against the catalog it was constructed with.
#[derive(Debug, Clone)]
pub struct PlacementService {
    catalog: CompanyCatalog,
}

impl PlacementService {
    pub fn new(catalog: CompanyCatalog) -> Self {
        Self { catalog }
    }
}

impl EligibilityDesk for PlacementService {
    fn submit(&self, profile: StudentProfile) -> EligibilityResult {
        let result = evaluate(&profile, self.catalog.companies());
        debug!(
            companies = self.catalog.len(),
            eligible = result.eligible_companies.len(),
            suggestions = result.suggestions.len(),
            "eligibility evaluated"
        );
        result
    }

    fn notice(&self) -> Option<&str> {
        self.catalog.load_notice()
    }
}
