use super::typing::{TypeTerm, TypeVariable};
use std::collections::{hash_map, HashMap};
use std::fmt::Display;
use tracing::{debug, warn};

/// A mapping from type variables, by identity, to type terms.
#[derive(Default, PartialEq, Eq, Clone, Debug)]
pub struct Substitution {
    map: HashMap<TypeVariable, TypeTerm>,
}

pub trait Substitute {
    fn substitute_mut(&mut self, subst: &Substitution);

    fn substitute(mut self, subst: &Substitution) -> Self
    where
        Self: Sized,
    {
        self.substitute_mut(subst);
        self
    }
}

impl IntoIterator for Substitution {
    type Item = (TypeVariable, TypeTerm);
    type IntoIter = hash_map::IntoIter<TypeVariable, TypeTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl FromIterator<(TypeVariable, TypeTerm)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (TypeVariable, TypeTerm)>>(iter: I) -> Self {
        Self {
            map: HashMap::from_iter(iter),
        }
    }
}

impl Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_by(|(v1, _), (v2, _)| (v1.name(), v1.id()).cmp(&(v2.name(), v2.id())));
        let mappings = (entries.into_iter())
            .map(|(v, m)| format!("{v} -> {m}"))
            .collect::<Vec<_>>();
        write!(f, "{{{}}}", mappings.join(", "))
    }
}

impl Substitution {
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    pub fn iter(&self) -> hash_map::Iter<'_, TypeVariable, TypeTerm> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, v: &TypeVariable) -> Option<&TypeTerm> {
        self.map.get(v)
    }

    pub fn contains(&self, v: &TypeVariable) -> bool {
        self.map.contains_key(v)
    }

    /// Binds `v`, replacing any earlier binding. Callers are responsible
    /// for keeping the bindings acyclic.
    pub fn insert(&mut self, v: TypeVariable, m: TypeTerm) -> Option<TypeTerm> {
        self.map.insert(v, m)
    }

    /// The term at the end of the chain of variable bindings starting at
    /// `m`. Along the way every variable on the chain is re-pointed
    /// directly at the result, so this mutates the substitution even
    /// though it does not change its meaning. Anything other than a
    /// bound variable comes back unchanged.
    pub fn dereference(&mut self, m: &TypeTerm) -> TypeTerm {
        let TypeTerm::Var(v) = m else {
            return m.clone();
        };
        match self.map.get(v).cloned() {
            Some(bound) => {
                let target = self.dereference(&bound);
                self.map.insert(v.clone(), target.clone());
                target
            }
            None => m.clone(),
        }
    }

    /// True iff `v` appears in `m` once every variable met on the way is
    /// dereferenced.
    pub fn occurs_in(&mut self, v: &TypeVariable, m: &TypeTerm) -> bool {
        match self.dereference(m) {
            TypeTerm::Var(v2) => &v2 == v,
            TypeTerm::Con(_) => false,
            TypeTerm::Function(from, to) => self.occurs_in(v, &from) || self.occurs_in(v, &to),
        }
    }

    /// Applies this substitution to a copy of `m`.
    pub fn apply(&self, m: &TypeTerm) -> TypeTerm {
        m.clone().substitute(self)
    }

    pub fn resolve(mut self) -> Self {
        self.resolve_mut();
        self
    }

    /// Rewrites every binding with the current bindings until nothing
    /// changes, so that no bound variable occurs in any bound term.
    pub fn resolve_mut(&mut self) {
        let mut vars = self.map.keys().cloned().collect::<Vec<_>>();
        vars.sort_by_key(TypeVariable::id);
        // An acyclic substitution settles within one pass per binding.
        let limit = vars.len() + 1;
        let mut passes = 0;
        loop {
            passes += 1;
            let mut changed = false;
            for v in &vars {
                let next = self.map.get(v).and_then(|m| self.substitute_once(m));
                if let Some(m) = next {
                    self.map.insert(v.clone(), m);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
            if passes > limit {
                warn!(bindings = vars.len(), "substitution is cyclic, giving up on resolution");
                break;
            }
        }
        debug!(passes, bindings = vars.len(), "resolved substitution");
    }

    /// One step of substitution, or `None` if no bound variable occurs in
    /// `m`.
    fn substitute_once(&self, m: &TypeTerm) -> Option<TypeTerm> {
        match m {
            TypeTerm::Var(v) => self.map.get(v).cloned(),
            TypeTerm::Con(_) => None,
            TypeTerm::Function(from, to) => match (self.substitute_once(from), self.substitute_once(to)) {
                (None, None) => None,
                (from2, to2) => Some(TypeTerm::function(
                    from2.unwrap_or_else(|| from.as_ref().clone()),
                    to2.unwrap_or_else(|| to.as_ref().clone()),
                )),
            },
        }
    }
}

/// Replaces bound variables by their terms. Only a resolved substitution
/// is guaranteed to leave no bound variable behind.
impl Substitute for TypeTerm {
    fn substitute_mut(&mut self, subst: &Substitution) {
        self.traverse(&mut |m1| {
            if let TypeTerm::Var(v) = m1 {
                if let Some(m2) = subst.map.get(v) {
                    *m1 = m2.clone();
                }
            }
        });
    }
}
