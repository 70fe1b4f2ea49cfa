//! Strings of terms, clauses, and goal sequences.
//!
//! - Compounds are written in functional notation, `f(a, b)`, and constants by their name.
//! - Unbound variables are written as `_` followed by the stamp of the variable, e.g. `_12`.
//! - Bound variables are written as the term they are bound to.
//! - Compounds of `cons` and `nil` are written as lists, e.g. `[1, 2, 3]`, or `[1 | _7]` with an open tail, and `nil` alone is written `[]`.
//!
//! As there is no occurs-check a variable may be bound to a term which contains the variable.
//! When writing a term, a variable met again while writing the term it is bound to is written as an unbound variable, and so writing always terminates.

use std::{collections::HashSet, fmt::Write};

use crate::{
    builder::{CONS, NIL},
    context::Context,
    db::{goal::Goals, TermKey},
    structures::{atom::Atom, clause::Clause, term::Term},
};

impl Context {
    /// A string of a term, under the current bindings.
    pub fn term_string(&self, term: TermKey) -> String {
        let mut string = String::default();
        self.write_term(term, &mut string);
        string
    }

    /// A string of a clause, under the current bindings, as `head :- goal; goal`, or `head :- true` for a fact.
    pub fn clause_string(&self, clause: &Clause) -> String {
        let body = match clause.is_fact() {
            true => "true".to_owned(),
            false => self.terms_string(clause.body.iter().copied()),
        };
        format!("{} :- {body}", self.term_string(clause.head))
    }

    /// A string of a goal sequence, under the current bindings.
    pub fn goals_string(&self, goals: Goals) -> String {
        match goals {
            None => "true".to_owned(),
            Some(_) => self.terms_string(self.goal_db.goals(goals)),
        }
    }

    fn terms_string(&self, terms: impl Iterator<Item = TermKey>) -> String {
        terms
            .map(|term| self.term_string(term))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn atom_string(&self, atom: Atom) -> &str {
        self.atom_db.name(atom).unwrap_or("?")
    }

    /// Writes a term to `out`.
    ///
    /// Pieces still to write are kept on a stack, with the next piece last, and so the depth of a term does not bound the native stack.
    fn write_term(&self, key: TermKey, out: &mut String) {
        // Bound variables whose bindings are being written.
        let mut active: HashSet<TermKey> = HashSet::default();
        let mut pieces = vec![Piece::Term(key)];

        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => out.push_str(text),

                Piece::Release(variable) => {
                    active.remove(&variable);
                }

                Piece::Term(key) => match self.term_db.get(key) {
                    Err(_) => out.push('?'),

                    Ok(Term::Variable {
                        stamp,
                        binding: None,
                    }) => {
                        let _ = write!(out, "_{stamp}");
                    }

                    Ok(Term::Variable {
                        stamp,
                        binding: Some(next),
                    }) => match active.insert(key) {
                        true => {
                            pieces.push(Piece::Release(key));
                            pieces.push(Piece::Term(*next));
                        }
                        false => {
                            let _ = write!(out, "_{stamp}");
                        }
                    },

                    Ok(Term::Compound { functor, arguments }) => {
                        let name = self.atom_string(*functor);
                        match arguments.as_slice() {
                            [] if name == NIL => out.push_str("[]"),

                            [] => out.push_str(name),

                            [head, tail] if name == CONS => {
                                out.push('[');
                                pieces.push(Piece::Tail(*tail));
                                pieces.push(Piece::Term(*head));
                            }

                            _ => {
                                out.push_str(name);
                                out.push('(');
                                pieces.push(Piece::Text(")"));
                                for (index, argument) in arguments.iter().enumerate().rev() {
                                    pieces.push(Piece::Term(*argument));
                                    if index > 0 {
                                        pieces.push(Piece::Text(", "));
                                    }
                                }
                            }
                        }
                    }
                },

                Piece::Tail(tail) => match self.term_db.get(tail) {
                    Ok(Term::Variable {
                        binding: Some(next),
                        ..
                    }) if !active.contains(&tail) => {
                        active.insert(tail);
                        pieces.push(Piece::Release(tail));
                        pieces.push(Piece::Tail(*next));
                    }

                    Ok(Term::Compound { functor, arguments })
                        if arguments.len() == 2 && self.atom_string(*functor) == CONS =>
                    {
                        out.push_str(", ");
                        pieces.push(Piece::Tail(arguments[1]));
                        pieces.push(Piece::Term(arguments[0]));
                    }

                    Ok(Term::Compound { functor, arguments })
                        if arguments.is_empty() && self.atom_string(*functor) == NIL =>
                    {
                        out.push(']');
                    }

                    _ => {
                        out.push_str(" | ");
                        pieces.push(Piece::Text("]"));
                        pieces.push(Piece::Term(tail));
                    }
                },
            }
        }
    }
}

/// A piece of a term still to be written.
enum Piece {
    /// A term.
    Term(TermKey),

    /// The tail of a list, after some element has been written.
    Tail(TermKey),

    Text(&'static str),

    /// The end of writing the binding of a variable.
    Release(TermKey),
}
