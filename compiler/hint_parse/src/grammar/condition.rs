//! Condition chains: `cond && cond && ...`.

use hint_diagnostic::unresolved_condition;
use hint_ir::{Condition, Span, Token, TokenKind};
use tracing::{debug, trace};

use super::{Parser, CONDITION_END};
use crate::{PredicateBinder, PredicateRequest};

impl<B: PredicateBinder> Parser<'_, '_, B> {
    /// Parse the chain after `::`. Stops early at end of input.
    pub(super) fn conditions(&mut self) -> Vec<Condition> {
        let mut conditions = Vec::new();
        while let Some(condition) = self.condition() {
            conditions.push(condition);
            if self.cursor.eat(TokenKind::And).is_none() {
                break;
            }
        }
        conditions
    }

    /// One condition, or `None` when input ends before it starts.
    fn condition(&mut self) -> Option<Condition> {
        if self.cursor.is_at_end() {
            return None;
        }
        if self.cursor.eat(TokenKind::Otherwise).is_some() {
            return Some(Condition::Otherwise);
        }
        let negated = self.cursor.eat(TokenKind::Not).is_some();
        if self.cursor.is_at_end() {
            return None;
        }

        if let Some(variable) = self.cursor.eat(TokenKind::Variable) {
            if let Some(keyword) = self.cursor.eat(TokenKind::InstanceOf) {
                return Some(self.instance_of(negated, variable, keyword));
            }
            self.cursor.push_back();
        }
        Some(self.predicate(negated))
    }

    fn instance_of(&mut self, negated: bool, variable: Token, keyword: Token) -> Condition {
        let type_text_span = self
            .span_until(CONDITION_END)
            .unwrap_or(Span::point(keyword.span.end));
        let variable_name = variable.text(self.source).to_owned();
        trace!(variable = %variable_name, ty = ?type_text_span, "instanceof");
        Condition::InstanceOf {
            negated,
            variable_name,
            type_text_span,
        }
    }

    /// Free-text condition, bound by the resolver.
    ///
    /// Failure to bind records `E1001` and yields [`Condition::AlwaysFalse`],
    /// so the enclosing rule or fix never matches.
    fn predicate(&mut self, negated: bool) -> Condition {
        let start = self.current_offset();
        let Some(span) = self.span_until(CONDITION_END) else {
            self.errors
                .push(unresolved_condition(Span::point(start), "expected a condition"));
            return Condition::AlwaysFalse;
        };

        let request = PredicateRequest {
            text: span.slice(self.source),
            negated,
            offset: span.start,
        };
        match self.binder.bind(&request) {
            Ok(condition) => {
                trace!(text = request.text, "bound condition");
                condition
            }
            Err(err) => {
                debug!(text = request.text, %err, "unresolved condition");
                self.errors.push(unresolved_condition(span, err.to_string()));
                Condition::AlwaysFalse
            }
        }
    }
}
