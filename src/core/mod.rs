// Core algorithm exports
pub mod matcher;
pub mod profiles;
pub mod questions;
pub mod rules;

pub use matcher::{match_profile, MatchOutcome, ProfileMatcher};
pub use profiles::{profile, PROFILES};
pub use questions::{Phase, Questionnaire, VettingQuestion};
pub use rules::{MatchRule, DEFAULT_PROFILE, DEFAULT_RULES};
