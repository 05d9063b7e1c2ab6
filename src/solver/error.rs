use thiserror::Error;

/// Hard failures from the matching engine. A branch that merely runs out of
/// matching nuts is not an error; it is reported as an ordinary outcome and
/// the driver moves on to the next starting pair.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SolverError {
    /// A nut was defined with an empty number sequence.
    #[error("invalid nut {name:?}: the number sequence is empty")]
    InvalidPiece { name: String },

    /// An alignment was requested on two rim positions holding unequal
    /// values. The caller violated the shared-pivot precondition.
    #[error("nuts do not match: {name_1}[{index_1}] != {name_2}[{index_2}]")]
    Mismatch {
        name_1: String,
        index_1: i64,
        name_2: String,
        index_2: i64,
    },

    /// A pivot value was looked up on a nut that does not carry it.
    #[error("nut {name} has no rim value {value}")]
    ValueNotFound { name: String, value: u8 },
}
