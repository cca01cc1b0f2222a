//! Stage outcome type.
//!
//! A parse fallback is data, not an error: the pipeline must always hand the
//! next stage something consumable. Only transport and validation failures
//! are errors.

use tflow_models::StageStatus;

use crate::error::AgentError;

/// Result of one agent call.
#[derive(Debug)]
pub enum Outcome<T> {
    /// Real model output, decoded cleanly
    Success(T),
    /// The response could not be decoded; the deterministic schema default
    /// was substituted
    Fallback(T),
    /// The completion call itself failed
    Failure(AgentError),
}

impl<T> Outcome<T> {
    /// The produced record, if any.
    pub fn record(self) -> Option<T> {
        match self {
            Self::Success(record) | Self::Fallback(record) => Some(record),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the produced record, if any.
    pub fn as_record(&self) -> Option<&T> {
        match self {
            Self::Success(record) | Self::Fallback(record) => Some(record),
            Self::Failure(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn fell_back(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Map the record, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(record) => Outcome::Success(f(record)),
            Self::Fallback(record) => Outcome::Fallback(f(record)),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    /// The stage status this outcome reports as, before any orchestrator
    /// continue-on-failure substitution.
    pub fn stage_status(&self) -> StageStatus {
        match self {
            Self::Success(_) => StageStatus::Succeeded,
            Self::Fallback(_) => StageStatus::Fallback,
            Self::Failure(_) => StageStatus::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_access() {
        let outcome: Outcome<u32> = Outcome::Success(7);
        assert!(outcome.is_success());
        assert_eq!(outcome.record(), Some(7));

        let outcome: Outcome<u32> = Outcome::Failure(AgentError::service("down"));
        assert!(outcome.is_failure());
        assert_eq!(outcome.record(), None);
    }

    #[test]
    fn test_stage_status_mapping() {
        assert_eq!(
            Outcome::Success(()).stage_status(),
            StageStatus::Succeeded
        );
        assert_eq!(
            Outcome::Fallback(()).stage_status(),
            StageStatus::Fallback
        );
        let failure: Outcome<()> = Outcome::Failure(AgentError::service("down"));
        assert_eq!(failure.stage_status(), StageStatus::Failed);
    }

    #[test]
    fn test_map_preserves_variant() {
        let doubled = Outcome::Fallback(21).map(|n| n * 2);
        assert!(doubled.fell_back());
        assert_eq!(doubled.record(), Some(42));
    }
}
