use super::{triviality, Result, Triviality, UnifyError};
use crate::model::typing::{TypeTerm, TypeVariable};
use crate::model::Substitution;
use tracing::{debug, trace};

/// Finds a substitution under which both sides of every pair are the
/// same term. The result is not resolved: bound terms may still mention
/// bound variables.
pub fn unify(pairs: impl IntoIterator<Item = (TypeTerm, TypeTerm)>) -> Result<Substitution> {
    unify_with(Substitution::new(), pairs)
}

pub fn unify_pair(m1: TypeTerm, m2: TypeTerm) -> Result<Substitution> {
    unify([(m1, m2)])
}

/// [`unify`] followed by [`Substitution::resolve`].
pub fn unify_resolved(pairs: impl IntoIterator<Item = (TypeTerm, TypeTerm)>) -> Result<Substitution> {
    unify(pairs).map(Substitution::resolve)
}

/// Extends `subst` so that it also unifies `pairs`. Existing bindings are
/// never overwritten.
pub fn unify_with(
    mut subst: Substitution,
    pairs: impl IntoIterator<Item = (TypeTerm, TypeTerm)>,
) -> Result<Substitution> {
    // The end of the vector is the front of the work list.
    let mut work = pairs.into_iter().collect::<Vec<_>>();
    work.reverse();
    while let Some((m1, m2)) = work.pop() {
        trace!(left = %m1, right = %m2, "unifying");
        match (m1, m2) {
            (TypeTerm::Con(c1), TypeTerm::Con(c2)) if c1 == c2 => {}
            (TypeTerm::Var(v), m) | (m, TypeTerm::Var(v)) => {
                if let Some(next) = bind(&mut subst, v, m)? {
                    work.push(next);
                }
            }
            (TypeTerm::Function(from1, to1), TypeTerm::Function(from2, to2)) => {
                work.push((*from1, *from2));
                work.push((*to1, *to2));
            }
            (TypeTerm::Con(c1), TypeTerm::Con(c2)) => {
                debug!(%c1, %c2, "constant mismatch");
                return Err(UnifyError::ConstantMismatch(c1, c2));
            }
            (m1, m2) => {
                debug!(%m1, %m2, "structural mismatch");
                return Err(UnifyError::StructuralMismatch(m1, m2));
            }
        }
    }
    Ok(subst)
}

/// Binds `v` to `m` if that is needed and possible. A variable that is
/// already bound defers to its binding, returned as the pair still to
/// unify.
fn bind(subst: &mut Substitution, v: TypeVariable, m: TypeTerm) -> Result<Option<(TypeTerm, TypeTerm)>> {
    if let Some(bound) = subst.get(&v) {
        return Ok(Some((bound.clone(), m)));
    }
    match triviality(subst, &v, &m) {
        Triviality::Trivial => {}
        Triviality::Bind => {
            debug!(var = %v, term = %m, "binding");
            subst.insert(v, m);
        }
        Triviality::Cyclic => {
            debug!(var = %v, term = %m, "occurs check failed");
            return Err(UnifyError::OccursCheck(v, m));
        }
    }
    Ok(None)
}
