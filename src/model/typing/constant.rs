use super::variable::next_id;
use std::borrow::Cow;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// An atomic, non-variable type. Like variables, constants compare by
/// id; the built-in `i` and `o` are singletons and must be reused.
#[derive(Clone, Debug)]
pub struct TypeConstant {
    id: usize,
    name: Cow<'static, str>,
}

impl PartialEq for TypeConstant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeConstant {}

impl Hash for TypeConstant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for TypeConstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name.fmt(f)
    }
}

impl TypeConstant {
    /// The type of individuals.
    pub const INDIVIDUAL: Self = Self {
        id: 0,
        name: Cow::Borrowed("i"),
    };

    /// The type of truth values.
    pub const BOOLEAN: Self = Self {
        id: 1,
        name: Cow::Borrowed("o"),
    };

    /// Mints a new constant, distinct from every other constant even if
    /// the names agree.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            name: Cow::Owned(name.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
