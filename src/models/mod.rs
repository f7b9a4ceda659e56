// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{LifeStageTag, PriorityTag, ProfileId, SpecialistProfile, UnknownTag};
pub use requests::{GenerateReportRequest, MatchProfileRequest, MAX_PRIORITIES};
pub use responses::{ErrorResponse, HealthResponse, ProfileResponse, QuestionEntry, QuestionsResponse, ReportResponse};
