//! Mock roadmap generator.
//!
//! Deterministic generator used for development and tests: no network,
//! configurable latency and failures, call tracking for verification.
//! With no queued responses it synthesizes a plausible roadmap from the
//! context.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockRoadmapGenerator::new()
//!     .with_delay(Duration::from_millis(100))
//!     .with_error(GenerationError::Transport("down".into()));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::diagnosis::{Roadmap, RoadmapPhase};
use crate::ports::{GenerationError, RoadmapContext, RoadmapGenerator};

use super::json_extractor::parse_roadmap;

/// A queued mock outcome, consumed in order.
#[derive(Debug, Clone)]
pub enum MockGeneration {
    /// Return this roadmap as-is.
    Roadmap(Roadmap),
    /// Parse this text the way a real text-completion adapter would.
    Raw(String),
    /// Fail with this error.
    Error(GenerationError),
}

/// Configurable mock implementation of [`RoadmapGenerator`].
#[derive(Debug, Clone, Default)]
pub struct MockRoadmapGenerator {
    responses: Arc<Mutex<VecDeque<MockGeneration>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<RoadmapContext>>>,
}

impl MockRoadmapGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a ready-made roadmap.
    pub fn with_roadmap(self, roadmap: Roadmap) -> Self {
        self.push(MockGeneration::Roadmap(roadmap))
    }

    /// Queues raw text to be run through the JSON extractor, simulating
    /// a text-completion backend.
    pub fn with_raw_response(self, raw: impl Into<String>) -> Self {
        self.push(MockGeneration::Raw(raw.into()))
    }

    /// Queues a failure.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.push(MockGeneration::Error(error))
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of generate calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All contexts passed to generate, in call order.
    pub fn calls(&self) -> Vec<RoadmapContext> {
        self.calls.lock().unwrap().clone()
    }

    fn push(self, generation: MockGeneration) -> Self {
        self.responses.lock().unwrap().push_back(generation);
        self
    }

    fn next_response(&self) -> Option<MockGeneration> {
        self.responses.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl RoadmapGenerator for MockRoadmapGenerator {
    async fn generate(&self, context: &RoadmapContext) -> Result<Roadmap, GenerationError> {
        self.calls.lock().unwrap().push(context.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            None => Ok(template_roadmap(context)),
            Some(MockGeneration::Roadmap(roadmap)) => Ok(roadmap),
            Some(MockGeneration::Raw(raw)) => parse_roadmap(&raw),
            Some(MockGeneration::Error(error)) => Err(error),
        }
    }
}

/// Builds a deterministic three-phase roadmap from the context.
fn template_roadmap(context: &RoadmapContext) -> Roadmap {
    let titles = ["Foundations", "Core skills", "Production readiness"];
    let phases = titles
        .iter()
        .enumerate()
        .map(|(i, title)| RoadmapPhase {
            phase: i as u32 + 1,
            title: (*title).to_string(),
            duration_weeks: 8,
            topics: vec![
                format!("{} essentials, part {}", context.domain_label, i + 1),
                format!("Working toward: {}", context.goal_label),
            ],
            hands_on_project: format!("Project {} for {}", i + 1, context.goal_label),
        })
        .collect();

    Roadmap {
        goal: context.goal_label.clone(),
        domain: context.domain.as_str().to_string(),
        duration_months: 6,
        weekly_hours_recommended: 10,
        phases,
        milestones: vec![
            "Finish the foundations phase".to_string(),
            format!("Ship a {} project end to end", context.domain_label),
        ],
        final_project: format!("A portfolio piece demonstrating: {}", context.goal_description),
        career_advice: format!(
            "Build in public and share your {} work early.",
            context.domain_label
        ),
        next_steps: vec!["Block out your weekly learning hours".to_string()],
    }
}
