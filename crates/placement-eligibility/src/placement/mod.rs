//! Student placement eligibility: company catalog loading, form intake, matching,
//! and the HTTP surface built on top of them.

pub mod catalog;
pub mod domain;
pub mod intake;
pub mod matcher;
pub mod page;
pub mod router;
pub mod service;

pub use catalog::{CompanyCatalog, CompanyLoadError};
pub use domain::{
    parse_language_list, CompanyRequirement, EligibilityResult, StudentProfile, ANY_HSS,
};
pub use intake::{
    hss_or_default, ProfileForm, ProfileFormError, HSS_CHOICES, MAX_CGPA, MIN_CGPA,
};
pub use matcher::{evaluate, match_company, placement_probability, CompanyOutcome};
pub use page::{render_page, PageOutcome};
pub use router::{placement_router, EligibilityRequest, EligibilityResponse};
pub use service::{EligibilityDesk, PlacementService};
