//! Type terms for a simply typed higher-order logic, and Hindley-Milner
//! unification over them.
//!
//! Type terms are variables, the constants `i` (individuals) and `o`
//! (truth values), and function types. [`unification::unify`] takes pairs
//! of terms that must become equal and returns the substitution that
//! makes them so; [`model::Substitution::resolve`] then closes it so it
//! can be applied in one step.
//!
//! ```
//! use type_unify::{parser::TypeParser, unification};
//!
//! let mut parser = TypeParser::new();
//! let left = parser.parse("o t1 t2").unwrap();
//! let right = parser.parse("o t2 t1").unwrap();
//! let subst = unification::unify_resolved([(left, right)]).unwrap();
//! assert_eq!(subst.to_string(), "{t1 -> t2}");
//! ```

pub mod lexer;
pub mod model;
pub mod parser;
pub mod unification;

pub use model::typing::{TypeConstant, TypeTerm, TypeVarFactory, TypeVariable};
pub use model::{Substitute, Substitution};
pub use unification::{unify, UnifyError};
