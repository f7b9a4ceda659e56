//! Educated Investor - advisor match and spec sheet generator
//!
//! Maps a questionnaire's life stages and priorities to one of five
//! specialist profiles, then renders the match and a vetting protocol
//! into a downloadable PDF spec sheet.

pub mod config;
pub mod core;
pub mod models;
pub mod report;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{match_profile, ProfileMatcher, Questionnaire};
pub use crate::models::{LifeStageTag, PriorityTag, ProfileId, SpecialistProfile};
pub use crate::report::{render, RenderError, Report, ReportRenderer};
