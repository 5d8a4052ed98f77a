use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

// Ids 0 and 1 belong to the built-in constants.
static NEXT_ID: AtomicUsize = AtomicUsize::new(2);

pub(super) fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A type variable. Identity is the id, never the name: two variables
/// that print the same are still different unless they share an id.
#[derive(Clone, Debug)]
pub struct TypeVariable {
    id: usize,
    name: String,
}

impl PartialEq for TypeVariable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeVariable {}

impl Hash for TypeVariable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for TypeVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.name.fmt(f)
    }
}

impl TypeVariable {
    /// A new variable with a caller-chosen display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Mints fresh type variables named `t1`, `t2`, ... for one type
/// checking session.
#[derive(Debug)]
pub struct TypeVarFactory {
    next: usize,
}

impl Default for TypeVarFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeVarFactory {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Starts numbering at `next` instead of 1, e.g. to keep fresh names
    /// clear of names already used by parsed fixtures.
    pub fn starting_at(next: usize) -> Self {
        Self { next }
    }

    pub fn fresh(&mut self) -> TypeVariable {
        let n = self.next;
        self.next += 1;
        TypeVariable::named(format!("t{n}"))
    }

    pub fn fresh_vars(&mut self, count: usize) -> Vec<TypeVariable> {
        (0..count).map(|_| self.fresh()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_is_not_same_variable() {
        let a = TypeVariable::named("t");
        let b = TypeVariable::named("t");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn factory_numbers_names() {
        let mut vars = TypeVarFactory::new();
        let names = (vars.fresh_vars(3).iter())
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(names, ["t1", "t2", "t3"]);
        assert_eq!(TypeVarFactory::starting_at(10).fresh().name(), "t10");
    }

    #[test]
    fn factories_are_independent() {
        let v1 = TypeVarFactory::new().fresh();
        let v2 = TypeVarFactory::new().fresh();
        assert_eq!(v1.name(), v2.name());
        assert_ne!(v1, v2);
    }
}
