//! The parsed rule model.
//!
//! A hint file is a list of [`HintRule`]s. Each rule has a pattern, an
//! ordered condition chain, an options map, and an ordered list of
//! [`FixDescription`]s, each with its own conditions and options. Ordering is
//! load-bearing everywhere: conditions are evaluated left to right with
//! short-circuit AND, and an `otherwise` fix only applies when no earlier fix
//! matched.

use rustc_hash::FxHashMap;

use crate::Span;

/// Options from `<! key=value, ... >` blocks. Last write wins per key.
pub type Options = FxHashMap<String, String>;

/// Classification of a predicate argument.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamKind {
    /// `$name`, a bound pattern variable.
    Variable,
    /// `"text"`, stored without the quotes.
    StringLiteral,
    /// Decimal integer, optionally signed.
    IntLiteral,
    /// Anything else, e.g. `Modifier.PUBLIC`.
    EnumConstant,
}

/// A boolean gate on a rule or fix.
///
/// Conditions are opaque to this crate; an external evaluator binds them to a
/// program model.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Condition {
    /// `!? $var instanceof Type`
    InstanceOf {
        negated: bool,
        variable_name: String,
        type_text_span: Span,
    },
    /// `!? name(arg, ...)`, linked to a known predicate.
    MethodPredicate {
        negated: bool,
        method_name: String,
        ordered_params: Vec<(String, ParamKind)>,
    },
    /// A condition that could not be linked. Never matches.
    AlwaysFalse,
    /// Matches iff no earlier fix of the same rule matched.
    Otherwise,
}

/// One `=> fix` alternative of a rule.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FixDescription {
    pub display_name: Option<String>,
    pub body_span: Span,
    pub conditions: Vec<Condition>,
    pub options: Options,
}

impl FixDescription {
    pub fn new(display_name: Option<String>, body_span: Span) -> Self {
        FixDescription {
            display_name,
            body_span,
            conditions: Vec::new(),
            options: Options::default(),
        }
    }
}

/// A pattern-matching hint definition.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct HintRule {
    pub display_name: Option<String>,
    pub pattern_span: Span,
    pub conditions: Vec<Condition>,
    pub fixes: Vec<FixDescription>,
    pub options: Options,
    /// Offset of the token that ended the rule (its `;;`), or the source
    /// length when the rule ran into end-of-input.
    pub rule_end_offset: u32,
}

impl HintRule {
    pub fn new(display_name: Option<String>, pattern_span: Span) -> Self {
        HintRule {
            display_name,
            pattern_span,
            conditions: Vec::new(),
            fixes: Vec::new(),
            options: Options::default(),
            rule_end_offset: pattern_span.end,
        }
    }
}
