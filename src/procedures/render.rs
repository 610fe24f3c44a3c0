/*!
A human readable representation of a proposition.

| Proposition   | Representation |
|---------------|----------------|
| Symbol        | The name of the symbol |
| Negation      | `¬A` |
| Conjunction   | `A ^ B ^ …` |
| Disjunction   | `A v B v …` |
| Implication   | `A => B` |
| Biconditional | `A <=> B` |

The representation is also given through [Display](std::fmt::Display), and so `to_string` may be used in place of [render].

```rust
# use otter_know::structures::proposition::{and, implication, not, or, symbol};
assert_eq!(implication(symbol("P"), symbol("Q")).to_string(), "P => Q");
assert_eq!(not(symbol("P")).to_string(), "¬P");
assert_eq!(not(or([not(symbol("P")), symbol("Q")])).to_string(), "¬(¬P v Q)");
```

# Parentheses

Only the operand of a negation is wrapped in parentheses, and only when the rendered operand is not:
- Empty.
- Something beginning with a letter (as a symbol does).
- Already wrapped by a single pair of parentheses.

The operands of other connectives are written as they are.
So, a conjunction of disjunctions is written as a flat sequence of symbols and connectives, and there is no guarantee the representation of distinct propositions is distinct.
*/

use crate::structures::proposition::Proposition;

/// The (human readable) representation of `proposition`.
pub fn render(proposition: &Proposition) -> String {
    match proposition {
        Proposition::Symbol(symbol) => symbol.name().to_owned(),

        Proposition::Not(operand) => format!("¬{}", parenthesize(render(operand))),

        Proposition::And(conjuncts) => join(conjuncts, " ^ "),

        Proposition::Or(disjuncts) => join(disjuncts, " v "),

        Proposition::Implication(antecedent, consequent) => {
            format!("{} => {}", render(antecedent), render(consequent))
        }

        Proposition::Biconditional(left, right) => {
            format!("{} <=> {}", render(left), render(right))
        }
    }
}

fn join(elements: &[Proposition], connective: &str) -> String {
    elements
        .iter()
        .map(render)
        .collect::<Vec<_>>()
        .join(connective)
}

/// Wraps `s` in parentheses, unless `s` is empty, begins with a letter, or is already enclosed in parentheses.
pub fn parenthesize(s: String) -> String {
    let first = s.chars().next();
    match first {
        None => s,
        Some(first) if first.is_alphabetic() => s,
        Some(_) if enclosed(&s) => s,
        Some(_) => format!("({s})"),
    }
}

/// Whether the first and last characters of `s` are a matching pair of parentheses.
///
/// That is, `s` begins with '(' and the count of '(' less the count of ')' returns to zero only at the last character of `s`.
/// For example, `(A ^ B)` is enclosed, while `(A ^ B) v (C ^ D)` is not.
fn enclosed(s: &str) -> bool {
    if !s.starts_with('(') || !s.ends_with(')') {
        return false;
    }

    let mut depth: isize = 0;
    let mut chars = s.chars().peekable();

    while let Some(character) = chars.next() {
        match character {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }

        if depth <= 0 && chars.peek().is_some() {
            return false;
        }
    }

    depth == 0
}

impl std::fmt::Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::proposition::{and, biconditional, implication, not, or, symbol};

    #[test]
    fn connectives() {
        let p = symbol("P");
        let q = symbol("Q");

        assert_eq!(render(&p), "P");
        assert_eq!(render(&not(p.clone())), "¬P");
        assert_eq!(render(&and([p.clone(), q.clone()])), "P ^ Q");
        assert_eq!(render(&or([p.clone(), q.clone()])), "P v Q");
        assert_eq!(render(&implication(p.clone(), q.clone())), "P => Q");
        assert_eq!(render(&biconditional(p, q)), "P <=> Q");
    }

    #[test]
    fn empty() {
        assert_eq!(render(&and([])), "");
        assert_eq!(render(&not(or([]))), "¬");
    }

    #[test]
    fn nested_negation() {
        assert_eq!(render(&not(not(symbol("P")))), "¬(¬P)");
        assert_eq!(render(&not(not(not(symbol("P"))))), "¬(¬(¬P))");
    }

    // Operands beginning with a letter are left as they are, even when compound.
    #[test]
    fn negation_of_compound() {
        assert_eq!(render(&not(and([symbol("P"), symbol("Q")]))), "¬P ^ Q");
        assert_eq!(render(&not(and([not(symbol("P")), symbol("Q")]))), "¬(¬P ^ Q)");
    }

    // Operands of other connectives are never wrapped.
    #[test]
    fn no_parentheses_elsewhere() {
        let pq = or([symbol("P"), symbol("Q")]);
        let rs = or([symbol("R"), symbol("S")]);
        assert_eq!(render(&and([pq.clone(), rs])), "P v Q ^ R v S");
        assert_eq!(render(&implication(pq, not(symbol("R")))), "P v Q => ¬R");
    }

    #[test]
    fn parenthesize_cases() {
        assert_eq!(parenthesize(String::new()), "");
        assert_eq!(parenthesize("P".to_owned()), "P");
        assert_eq!(parenthesize("P ^ Q".to_owned()), "P ^ Q");
        assert_eq!(parenthesize("¬P".to_owned()), "(¬P)");
        assert_eq!(parenthesize("(A ^ B)".to_owned()), "(A ^ B)");
        assert_eq!(parenthesize("((A) v (B))".to_owned()), "((A) v (B))");
        assert_eq!(parenthesize("(A ^ B) v (C ^ D)".to_owned()), "((A ^ B) v (C ^ D))");
        assert_eq!(parenthesize("(A))(".to_owned()), "((A))()");
        assert_eq!(parenthesize("()".to_owned()), "()");
    }
}
