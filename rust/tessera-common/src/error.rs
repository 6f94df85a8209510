use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_bounds(index: u64, size: u64) -> Error {
        Error(ErrorKind::IndexOutOfBounds { index, size }.into())
    }

    pub fn read_only(name: impl Into<String>) -> Error {
        Error(ErrorKind::ReadOnly { name: name.into() }.into())
    }

    pub fn constraint_violation(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::ConstraintViolation {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_range(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidRange {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn illegal_state(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::IllegalState {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn missing_transform(direction: impl Into<String>) -> Error {
        Error(
            ErrorKind::MissingTransform {
                direction: direction.into(),
            }
            .into(),
        )
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind(), ErrorKind::IndexOutOfBounds { .. })
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self.kind(), ErrorKind::ReadOnly { .. })
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self.kind(), ErrorKind::ConstraintViolation { .. })
    }

    pub fn is_invalid_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidRange { .. })
    }

    pub fn is_illegal_state(&self) -> bool {
        matches!(self.kind(), ErrorKind::IllegalState { .. })
    }

    pub fn is_missing_transform(&self) -> bool {
        matches!(self.kind(), ErrorKind::MissingTransform { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} out of bounds for size {size}")]
    IndexOutOfBounds { index: u64, size: u64 },

    #[error("write attempted on read-only source '{name}'")]
    ReadOnly { name: String },

    #[error("constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("invalid range {name}: {message}")]
    InvalidRange { name: String, message: String },

    #[error("illegal state: {message}")]
    IllegalState { message: String },

    #[error("no transform available for {direction}")]
    MissingTransform { direction: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
