use super::{TypeConstant, TypeVariable};
use std::collections::HashMap;
use std::{fmt::Display, iter};

/// A type expression: a variable, a constant, or a function type built
/// from an argument type and a result type.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum TypeTerm {
    Var(TypeVariable),
    Con(TypeConstant),
    /// Argument type, then result type.
    Function(Box<TypeTerm>, Box<TypeTerm>),
}

impl From<TypeVariable> for TypeTerm {
    fn from(value: TypeVariable) -> Self {
        Self::Var(value)
    }
}

impl From<TypeConstant> for TypeTerm {
    fn from(value: TypeConstant) -> Self {
        Self::Con(value)
    }
}

/// Function types print result first: `(to from)`.
impl Display for TypeTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Var(v) => v.fmt(f),
            Self::Con(c) => c.fmt(f),
            Self::Function(from, to) => write!(f, "({to} {from})"),
        }
    }
}

#[derive(Default)]
struct Renaming<'a> {
    forward: HashMap<&'a TypeVariable, &'a TypeVariable>,
    backward: HashMap<&'a TypeVariable, &'a TypeVariable>,
}

impl TypeTerm {
    pub fn function(from: impl Into<Self>, to: impl Into<Self>) -> Self {
        Self::Function(Box::new(from.into()), Box::new(to.into()))
    }

    pub fn individual() -> Self {
        Self::Con(TypeConstant::INDIVIDUAL)
    }

    pub fn boolean() -> Self {
        Self::Con(TypeConstant::BOOLEAN)
    }

    pub fn traverse(&mut self, f: &mut impl FnMut(&mut Self)) {
        f(self);
        match self {
            Self::Var(_) | Self::Con(_) => {}
            Self::Function(from, to) => {
                from.traverse(f);
                to.traverse(f);
            }
        }
    }

    /// Every variable occurrence, argument side first.
    pub fn vars(&self) -> impl Iterator<Item = &TypeVariable> {
        let iter: Box<dyn Iterator<Item = _>> = match self {
            Self::Var(v) => Box::new(iter::once(v)),
            Self::Con(_) => Box::new(iter::empty()),
            Self::Function(from, to) => Box::new(from.vars().chain(to.vars())),
        };
        iter
    }

    pub fn has_variable(&self) -> bool {
        self.vars().next().is_some()
    }

    /// True for any function type with boolean result, which is how sets
    /// and predicates are typed.
    pub fn is_set_type(&self) -> bool {
        matches!(self, Self::Function(_, to) if **to == Self::boolean())
    }

    /// Equality up to a one-to-one renaming of type variables.
    pub fn equiv(&self, other: &Self) -> bool {
        self.equiv_under(other, &mut Renaming::default())
    }

    fn equiv_under<'a>(&'a self, other: &'a Self, renames: &mut Renaming<'a>) -> bool {
        match (self, other) {
            (Self::Var(a), Self::Var(b)) => match (renames.forward.get(a), renames.backward.get(b)) {
                (None, None) => {
                    renames.forward.insert(a, b);
                    renames.backward.insert(b, a);
                    true
                }
                (Some(&b2), Some(&a2)) => b2 == b && a2 == a,
                _ => false,
            },
            (Self::Con(a), Self::Con(b)) => a == b,
            (Self::Function(from1, to1), Self::Function(from2, to2)) => {
                from1.equiv_under(from2, renames) && to1.equiv_under(to2, renames)
            }
            _ => false,
        }
    }
}
