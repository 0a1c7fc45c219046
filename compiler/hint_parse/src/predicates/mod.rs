//! Built-in resolver backed by a table of predicate names.
//!
//! The table starts from the standard rule utilities and can be extended
//! with extra names. When a parse is prepared, predicates declared in the
//! file's code blocks as `boolean name(...)` are added for that parse only.

mod invocation;

use std::fmt;

use hint_ir::Condition;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{BindError, CodeBlocks, ConditionResolver, PredicateBinder, PredicateRequest};

pub use invocation::declared_predicates;

use invocation::{classify_argument, Invocation};

/// Number of arguments a predicate accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, n) = match *self {
            Arity::Exactly(n) => ("", n),
            Arity::AtLeast(n) => ("at least ", n),
        };
        let plural = if n == 1 { "" } else { "s" };
        write!(f, "{prefix}{n} argument{plural}")
    }
}

/// The standard rule-utility predicates.
const STANDARD: &[(&str, Arity)] = &[
    ("hasModifier", Arity::Exactly(2)),
    ("parentMatches", Arity::Exactly(1)),
    ("elementKindMatches", Arity::Exactly(2)),
    ("isNullLiteral", Arity::Exactly(1)),
    ("matchesAny", Arity::AtLeast(2)),
    ("containsAny", Arity::AtLeast(2)),
    ("matchesWithBind", Arity::Exactly(2)),
    ("referencedIn", Arity::Exactly(2)),
    ("sourceVersionGE", Arity::Exactly(1)),
    ("sourceVersionLE", Arity::Exactly(1)),
    ("inClass", Arity::Exactly(1)),
    ("inPackage", Arity::Exactly(1)),
    ("hasAnnotation", Arity::Exactly(2)),
    ("isInSyntheticContext", Arity::Exactly(1)),
];

/// Resolver that links predicates by name and arity.
#[derive(Clone, Debug, Default)]
pub struct PredicateTable {
    known: FxHashMap<String, Arity>,
}

impl PredicateTable {
    /// A table with no predicates. Every free-text condition fails to bind.
    pub fn empty() -> Self {
        PredicateTable::default()
    }

    /// The standard rule utilities.
    pub fn standard() -> Self {
        STANDARD
            .iter()
            .fold(PredicateTable::empty(), |table, &(name, arity)| {
                table.with_predicate(name, arity)
            })
    }

    /// Add or replace a predicate.
    #[must_use]
    pub fn with_predicate(mut self, name: impl Into<String>, arity: Arity) -> Self {
        self.known.insert(name.into(), arity);
        self
    }
}

impl ConditionResolver for PredicateTable {
    type Binder = TableBinder;

    fn prepare(&self, source: &str, code: &CodeBlocks) -> TableBinder {
        let mut known = self.known.clone();
        let mut declared = 0usize;
        for span in code.all() {
            for name in declared_predicates(span.slice(source)) {
                known
                    .entry(name.to_owned())
                    .or_insert(Arity::AtLeast(0));
                declared += 1;
            }
        }
        debug!(declared, total = known.len(), "predicate table prepared");
        TableBinder { known }
    }
}

/// Binder produced by [`PredicateTable::prepare`].
#[derive(Clone, Debug)]
pub struct TableBinder {
    known: FxHashMap<String, Arity>,
}

impl PredicateBinder for TableBinder {
    fn bind(&mut self, request: &PredicateRequest<'_>) -> Result<Condition, BindError> {
        let call = Invocation::parse(request.text)?;
        let arity = self
            .known
            .get(call.name)
            .copied()
            .ok_or_else(|| BindError::UnknownPredicate {
                name: call.name.to_owned(),
            })?;
        if !arity.accepts(call.args.len()) {
            return Err(BindError::WrongArity {
                name: call.name.to_owned(),
                expected: arity.to_string(),
                found: call.args.len(),
            });
        }
        Ok(Condition::MethodPredicate {
            negated: request.negated,
            method_name: call.name.to_owned(),
            ordered_params: call.args.into_iter().map(classify_argument).collect(),
        })
    }
}
