use std::{collections::TryReserveError, fmt};

/// The error type of all constructions in this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// A precondition of the construction was violated by its inputs.
    InvalidArgument(InvalidArgument),
    /// The scratch memory for the construction could not be allocated.
    AllocationFailure,
}

/// The reason why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The suffix array does not have the same length as the text.
    LengthMismatch { text_len: usize, suffix_array_len: usize },
    /// A suffix array entry does not point into the text.
    IndexOutOfRange { position: usize },
    /// A suffix array entry appears more than once.
    DuplicateIndex { position: usize },
    /// Large alphabet texts may not contain negative characters.
    NegativeCharacter { position: usize },
    /// The text length does not fit into the chosen output element type.
    TextTooLong { text_len: usize },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            Self::AllocationFailure => f.write_str("failed to allocate scratch memory"),
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::LengthMismatch {
                text_len,
                suffix_array_len,
            } => write!(
                f,
                "suffix array has length {suffix_array_len}, but the text has length {text_len}"
            ),
            Self::IndexOutOfRange { position } => write!(
                f,
                "suffix array entry at position {position} is not a valid text index"
            ),
            Self::DuplicateIndex { position } => write!(
                f,
                "suffix array entry at position {position} was already seen before"
            ),
            Self::NegativeCharacter { position } => {
                write!(f, "text contains a negative character at position {position}")
            }
            Self::TextTooLong { text_len } => write!(
                f,
                "text of length {text_len} is too long for the chosen output type"
            ),
        }
    }
}

impl std::error::Error for ConstructionError {}

impl From<InvalidArgument> for ConstructionError {
    fn from(reason: InvalidArgument) -> Self {
        Self::InvalidArgument(reason)
    }
}

impl From<TryReserveError> for ConstructionError {
    fn from(_: TryReserveError) -> Self {
        Self::AllocationFailure
    }
}

// Allocates a vector of exactly `len` copies of `value`, reporting allocation failure instead of aborting.
pub(crate) fn try_allocate<T: Clone>(len: usize, value: T) -> Result<Vec<T>, ConstructionError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    buffer.resize(len, value);
    Ok(buffer)
}
