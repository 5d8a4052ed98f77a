pub mod typing;

mod substitution;

pub use substitution::{Substitute, Substitution};
