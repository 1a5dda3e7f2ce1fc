//! Error types for Flocksort core

use thiserror::Error;

/// Constraint-definition error, surfaced at construction time.
///
/// Resolution-time problems (a target missing from the roster, an
/// unresolvable exclude conflict) are deliberately not errors; they are
/// reported as data by the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    /// A required target name is empty or whitespace-only.
    #[error("Constraint target is missing")]
    MissingTarget,

    /// A pair constraint names the same person on both sides.
    #[error("Constraint pairs {0:?} with itself")]
    SelfPair(String),
}
