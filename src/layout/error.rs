use serde::Serialize;
use thiserror::Error;

/// A single defect found while validating an event set.
///
/// Every variant except [`ValidationError::Structural`] carries the index of
/// the offending record in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    #[error("input should be an array of events, found {found}")]
    Structural { found: String },

    #[error("event #{index}: expected an object, found {found}")]
    MalformedEvent { index: usize, found: String },

    #[error("event #{index}: invalid event id {found}")]
    InvalidId { index: usize, found: String },

    #[error("event #{index}: duplicate event id {id}")]
    DuplicateId { index: usize, id: i64 },

    #[error("event #{index}: invalid start time {found}, expected an integer in 0..=699")]
    InvalidStart { index: usize, found: String },

    #[error("event #{index}: invalid end time {found}, expected an integer after start and at most 720")]
    InvalidEnd { index: usize, found: String },
}

impl ValidationError {
    /// Index of the record the defect belongs to, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidationError::Structural { .. } => None,
            ValidationError::MalformedEvent { index, .. }
            | ValidationError::InvalidId { index, .. }
            | ValidationError::DuplicateId { index, .. }
            | ValidationError::InvalidStart { index, .. }
            | ValidationError::InvalidEnd { index, .. } => Some(*index),
        }
    }
}

/// The full batch of defects for one event set, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the provided events are invalid ({} problem(s) found)", .0.len())]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_record() {
        let err = ValidationError::DuplicateId { index: 3, id: 1 };
        assert_eq!(err.to_string(), "event #3: duplicate event id 1");
        assert_eq!(err.index(), Some(3));

        let err = ValidationError::Structural {
            found: "object".to_string(),
        };
        assert_eq!(err.index(), None);
    }

    #[test]
    fn batch_message_counts_problems() {
        let errors = ValidationErrors(vec![
            ValidationError::InvalidStart {
                index: 0,
                found: "700".to_string(),
            },
            ValidationError::InvalidEnd {
                index: 0,
                found: "721".to_string(),
            },
        ]);
        assert_eq!(errors.len(), 2);
        assert!(errors.to_string().contains("2 problem(s)"));
    }
}
