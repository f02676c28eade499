//! Roadmap generator adapters.

mod json_extractor;
mod mock_generator;

pub use json_extractor::{extract_json_payload, parse_roadmap};
pub use mock_generator::{MockGeneration, MockRoadmapGenerator};

use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::ports::RoadmapGenerator;

/// Builds the generator named by configuration.
pub fn from_config(config: &GeneratorConfig) -> Arc<dyn RoadmapGenerator> {
    Arc::new(MockRoadmapGenerator::new().with_delay(config.mock_delay()))
}
