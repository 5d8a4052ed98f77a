mod constant;
mod fresh;
mod term;
mod variable;

pub use constant::TypeConstant;
pub use term::TypeTerm;
pub use variable::{TypeVarFactory, TypeVariable};
