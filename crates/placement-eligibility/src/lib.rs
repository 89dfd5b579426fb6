//! Placement eligibility matching.
//!
//! Loads company hiring requirements from a CSV export once, then evaluates
//! student profiles against them to produce an eligibility verdict, a coarse
//! placement probability, and skill-gap suggestions.

pub mod config;
pub mod error;
pub mod placement;
pub mod telemetry;
