mod algorithm;
mod occurs;

pub use algorithm::{unify, unify_pair, unify_resolved, unify_with};
pub use occurs::{triviality, Triviality};

use crate::model::typing::{TypeConstant, TypeTerm, TypeVariable};
use thiserror::Error;

#[derive(Clone, Error, PartialEq, Eq, Debug)]
pub enum UnifyError {
    #[error("type mismatch: {0} != {1}")]
    ConstantMismatch(TypeConstant, TypeConstant),
    #[error("types not similar: {0} and {1}")]
    StructuralMismatch(TypeTerm, TypeTerm),
    #[error("recursive unification: {0} occurs in {1}")]
    OccursCheck(TypeVariable, TypeTerm),
}

impl UnifyError {
    /// True for failures that would need an infinite type, as opposed to
    /// incompatible types.
    pub fn is_recursive(&self) -> bool {
        matches!(self, Self::OccursCheck(..))
    }
}

pub type Result<T> = std::result::Result<T, UnifyError>;
