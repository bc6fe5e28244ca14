use thiserror::Error;

use crate::model::EntityKind;

/// Main error type for Gridlore
#[derive(Error, Debug)]
pub enum GridError {
    /// An id does not resolve within its kind
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// Two records of the same kind share an id
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: EntityKind, id: String },

    /// A required label or narrative field is empty
    #[error("{kind} '{id}' is missing required field: {field}")]
    MissingField {
        kind: EntityKind,
        id: String,
        field: &'static str,
    },

    /// A relation list names an id that has no record of the same kind
    #[error("{kind} '{id}' references unknown {kind}: {target}")]
    DanglingReference {
        kind: EntityKind,
        id: String,
        target: String,
    },

    /// Record is structurally present but carries an out-of-range value
    #[error("Invalid {kind} '{id}': {reason}")]
    InvalidRecord {
        kind: EntityKind,
        id: String,
        reason: String,
    },

    /// Entity kind string not recognized
    #[error("Unknown entity kind: {0}")]
    UnknownKind(String),

    /// Dataset parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Every defect collected during one validation pass
    #[error("Dataset validation failed with {} defect(s)", .0.len())]
    Validation(Vec<GridError>),
}

impl GridError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenient Result type using GridError
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = GridError::not_found(EntityKind::Agent, "nonexistent");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "agent not found: nonexistent");
    }

    #[test]
    fn test_dangling_reference_display() {
        let err = GridError::DanglingReference {
            kind: EntityKind::Guardian,
            id: "healer".to_string(),
            target: "rad-x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "guardian 'healer' references unknown guardian: rad-x"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_validation_counts_defects() {
        let err = GridError::Validation(vec![
            GridError::Parse("a".to_string()),
            GridError::Parse("b".to_string()),
        ]);
        assert!(err.to_string().contains("2 defect(s)"));
    }
}
