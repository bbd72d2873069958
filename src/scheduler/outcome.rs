//! Per-item terminal results for the settled variant.

use serde::{Deserialize, Serialize};

/// Terminal state of one operation invocation.
///
/// Serializes as `{"status": "fulfilled", "value": ..}` or
/// `{"status": "rejected", "reason": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<B, E> {
    Fulfilled { value: B },
    Rejected { reason: E },
}

impl<B, E> Outcome<B, E> {
    pub fn fulfilled(value: B) -> Self {
        Outcome::Fulfilled { value }
    }

    pub fn rejected(reason: E) -> Self {
        Outcome::Rejected { reason }
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Outcome::Fulfilled { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected { .. })
    }

    pub fn value(&self) -> Option<&B> {
        match self {
            Outcome::Fulfilled { value } => Some(value),
            Outcome::Rejected { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&E> {
        match self {
            Outcome::Fulfilled { .. } => None,
            Outcome::Rejected { reason } => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<B, E> {
        match self {
            Outcome::Fulfilled { value } => Ok(value),
            Outcome::Rejected { reason } => Err(reason),
        }
    }
}

impl<B, E> From<Result<B, E>> for Outcome<B, E> {
    fn from(result: Result<B, E>) -> Self {
        match result {
            Ok(value) => Outcome::Fulfilled { value },
            Err(reason) => Outcome::Rejected { reason },
        }
    }
}

/// Counts over a settled result sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    pub total: usize,
    pub fulfilled: usize,
    pub rejected: usize,
}

impl OutcomeSummary {
    pub fn from_outcomes<B, E>(outcomes: &[Outcome<B, E>]) -> Self {
        let fulfilled = outcomes.iter().filter(|o| o.is_fulfilled()).count();
        Self {
            total: outcomes.len(),
            fulfilled,
            rejected: outcomes.len() - fulfilled,
        }
    }

    pub fn all_fulfilled(&self) -> bool {
        self.rejected == 0
    }
}
