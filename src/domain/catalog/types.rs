//! Catalog value types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level specialization track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainId {
    Frontend,
    Backend,
    Infrastructure,
}

impl DomainId {
    /// All domains, in catalog order.
    pub const ALL: &'static [DomainId] =
        &[DomainId::Frontend, DomainId::Backend, DomainId::Infrastructure];

    /// Returns the wire identifier for this domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainId::Frontend => "frontend",
            DomainId::Backend => "backend",
            DomainId::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DomainId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(DomainId::Frontend),
            "backend" => Ok(DomainId::Backend),
            "infrastructure" => Ok(DomainId::Infrastructure),
            _ => Err(()),
        }
    }
}

/// A selectable domain with its display copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Domain {
    pub id: DomainId,
    pub label: &'static str,
    pub description: &'static str,
}

/// A learning goal nested under one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Goal {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub domain: DomainId,
}

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleSelect,
    MultiSelect,
    FreeText,
}

/// Which batch a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Common,
    DomainSpecific,
}

/// One selectable option under a select-kind question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// A catalog question.
///
/// `options` is empty for `FreeText` questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: QuestionKind,
    pub category: QuestionCategory,
    pub options: &'static [QuestionOption],
}

impl Question {
    /// Returns the display label for one of this question's options.
    pub fn option_label(&self, option_id: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|o| o.id == option_id)
            .map(|o| o.label)
    }
}
