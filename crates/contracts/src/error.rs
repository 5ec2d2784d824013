use thiserror::Error;

/// Validation failure for a create-order draft.
///
/// Carries the offending field name so the form layer can point the user
/// at the exact input. This is the only error kind in the core: listing,
/// sorting, pagination, selection and deletion cannot fail on well-typed
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is missing")]
    Missing(&'static str),

    #[error("field `{field}` has invalid value `{value}`")]
    Invalid { field: &'static str, value: String },
}

impl ValidationError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            value: value.into(),
        }
    }

    /// Name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing(field) => field,
            Self::Invalid { field, .. } => field,
        }
    }
}
