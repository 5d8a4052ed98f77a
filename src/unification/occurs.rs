use crate::model::typing::{TypeTerm, TypeVariable};
use crate::model::Substitution;

/// How a variable relates to a term it is about to be bound to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Triviality {
    /// The term is, after following bindings, the variable itself.
    Trivial,
    /// The term does not mention the variable.
    Bind,
    /// The term strictly contains the variable.
    Cyclic,
}

/// Classifies `m` against `v`, following the bindings in `subst` through
/// variables.
pub fn triviality(subst: &Substitution, v: &TypeVariable, m: &TypeTerm) -> Triviality {
    match m {
        TypeTerm::Var(v2) if v2 == v => Triviality::Trivial,
        TypeTerm::Var(v2) => match subst.get(v2) {
            Some(bound) => triviality(subst, v, bound),
            None => Triviality::Bind,
        },
        TypeTerm::Con(_) => Triviality::Bind,
        TypeTerm::Function(from, to) => {
            if [from, to].iter().any(|m| triviality(subst, v, m) != Triviality::Bind) {
                Triviality::Cyclic
            } else {
                Triviality::Bind
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TypeParser;

    fn classify(subst: &Substitution, parser: &mut TypeParser, v: &str, m: &str) -> Triviality {
        let TypeTerm::Var(v) = parser.parse(v).unwrap() else {
            panic!("'{v}' is not a variable");
        };
        triviality(subst, &v, &parser.parse(m).unwrap())
    }

    #[test]
    fn without_bindings() {
        let s = Substitution::new();
        let mut p = TypeParser::new();
        assert_eq!(classify(&s, &mut p, "t", "t"), Triviality::Trivial);
        assert_eq!(classify(&s, &mut p, "t", "o"), Triviality::Bind);
        assert_eq!(classify(&s, &mut p, "t", "o i"), Triviality::Bind);
        assert_eq!(classify(&s, &mut p, "t", "(o t)"), Triviality::Cyclic);
        assert_eq!(classify(&s, &mut p, "t", "o t2"), Triviality::Bind);
        assert_eq!(classify(&s, &mut p, "t", "(o (i t))"), Triviality::Cyclic);
    }

    #[test]
    fn through_bindings() {
        let mut p = TypeParser::new();
        let TypeTerm::Var(t2) = p.parse("t2").unwrap() else {
            unreachable!()
        };
        let TypeTerm::Var(t3) = p.parse("t3").unwrap() else {
            unreachable!()
        };
        let s = [(t2, p.parse("t1").unwrap()), (t3, p.parse("o t1").unwrap())]
            .into_iter()
            .collect::<Substitution>();
        assert_eq!(classify(&s, &mut p, "t1", "t2"), Triviality::Trivial);
        assert_eq!(classify(&s, &mut p, "t1", "i t2"), Triviality::Cyclic);
        assert_eq!(classify(&s, &mut p, "t1", "t3"), Triviality::Cyclic);
        assert_eq!(classify(&s, &mut p, "t2", "t3"), Triviality::Bind);
    }
}
