//! Diagnosis flow handlers, one per public operation.

mod get_roadmap;
mod select_domain;
mod select_goal;
mod start_diagnosis;
mod submit_answers;

pub use get_roadmap::{GetRoadmapCommand, GetRoadmapHandler, GetRoadmapResult};
pub use select_domain::{SelectDomainCommand, SelectDomainHandler, SelectDomainResult};
pub use select_goal::{SelectGoalCommand, SelectGoalHandler, SelectGoalResult};
pub use start_diagnosis::{StartDiagnosisCommand, StartDiagnosisHandler, StartDiagnosisResult};
pub use submit_answers::{SubmitAnswersCommand, SubmitAnswersHandler, SubmitAnswersResult};
