use super::{TypeTerm, TypeVarFactory, TypeVariable};
use crate::model::Substitution;
use std::collections::HashMap;

impl TypeTerm {
    /// Copies this term, giving every generic variable a fresh
    /// replacement. A variable is non-generic if it occurs in any of
    /// `non_generics`; those and constants are kept as they are. All
    /// occurrences of one variable get the same replacement.
    pub fn freshen(&self, vars: &mut TypeVarFactory, non_generics: &[TypeTerm]) -> Self {
        self.freshen_under(vars, non_generics, &mut Substitution::new())
    }

    /// Like [`TypeTerm::freshen`], but looks at every variable through
    /// `subst` first. Dereferencing compresses paths in `subst`.
    pub fn freshen_under(
        &self,
        vars: &mut TypeVarFactory,
        non_generics: &[TypeTerm],
        subst: &mut Substitution,
    ) -> Self {
        let mut replacements = HashMap::new();
        self.freshen_with(vars, non_generics, subst, &mut replacements)
    }

    /// Renames every variable, keeping the sharing between occurrences.
    pub fn fresh_copy(&self, vars: &mut TypeVarFactory) -> Self {
        self.freshen(vars, &[])
    }

    fn freshen_with(
        &self,
        vars: &mut TypeVarFactory,
        non_generics: &[TypeTerm],
        subst: &mut Substitution,
        replacements: &mut HashMap<TypeVariable, TypeVariable>,
    ) -> Self {
        match subst.dereference(self) {
            Self::Var(v) => {
                if non_generics.iter().any(|m| subst.occurs_in(&v, m)) {
                    Self::Var(v)
                } else {
                    replacements.entry(v).or_insert_with(|| vars.fresh()).clone().into()
                }
            }
            m @ Self::Con(_) => m,
            Self::Function(from, to) => {
                let from = from.freshen_with(vars, non_generics, subst, replacements);
                let to = to.freshen_with(vars, non_generics, subst, replacements);
                Self::function(from, to)
            }
        }
    }
}
