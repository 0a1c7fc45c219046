//! Rules, fixes, display names and pattern regions.

use hint_diagnostic::ignored_text;
use hint_ir::{FixDescription, HintRule, Options, Span, TokenKind};
use tracing::debug;

use super::{Parser, RuleEnd, PATTERN_END, RULE_RESUME};
use crate::PredicateBinder;

impl<B: PredicateBinder> Parser<'_, '_, B> {
    /// Parse one rule starting at the current token.
    pub(super) fn rule(&mut self) -> (HintRule, RuleEnd) {
        let display_name = self.display_name();
        let (pattern_span, options) = self.pattern_region();
        let mut rule = HintRule::new(display_name, pattern_span);
        rule.options = options;

        if self.cursor.eat(TokenKind::DoubleColon).is_some() {
            rule.conditions = self.conditions();
            self.options_into(&mut rule.options);
        }

        loop {
            if self.cursor.eat(TokenKind::LeadsTo).is_some() {
                let fix = self.fix();
                if self.cursor.is_at_end() && fix.body_span.is_empty() && fix.conditions.is_empty()
                {
                    // `=>` with nothing after it
                    continue;
                }
                debug!(
                    name = fix.display_name.as_deref(),
                    body = ?fix.body_span,
                    conditions = fix.conditions.len(),
                    "fix"
                );
                rule.fixes.push(fix);
                continue;
            }

            if let Some(end) = self.cursor.eat(TokenKind::DoubleSemicolon) {
                rule.rule_end_offset = end.span.start;
                if self.cursor.check(TokenKind::LeadsTo) {
                    continue;
                }
                debug!(
                    name = rule.display_name.as_deref(),
                    pattern = ?rule.pattern_span,
                    fixes = rule.fixes.len(),
                    "rule"
                );
                return (rule, RuleEnd::Terminated);
            }

            if self.cursor.is_at_end() {
                rule.rule_end_offset = self.source_len;
                return (rule, RuleEnd::Truncated);
            }
            // Left over after an options block or `otherwise`
            if let Some(ignored) = self.span_until(RULE_RESUME) {
                debug!(span = ?ignored, "ignored text in rule");
                self.errors.push(ignored_text(ignored));
            }
        }
    }

    /// Parse a fix after its `=>`.
    fn fix(&mut self) -> FixDescription {
        let display_name = self.display_name();
        let (body_span, options) = self.pattern_region();
        let mut fix = FixDescription::new(display_name, body_span);
        fix.options = options;

        if self.cursor.eat(TokenKind::DoubleColon).is_some() {
            fix.conditions = self.conditions();
            self.options_into(&mut fix.options);
        }
        fix
    }

    /// A quoted literal immediately followed by `:`.
    ///
    /// Without the colon the literal is pattern text and is pushed back.
    fn display_name(&mut self) -> Option<String> {
        if !matches!(
            self.cursor.current_kind(),
            Some(TokenKind::CharLiteral | TokenKind::StringLiteral)
        ) {
            return None;
        }
        let literal = self.cursor.advance()?;
        if self.cursor.eat(TokenKind::Colon).is_none() {
            self.cursor.push_back();
            return None;
        }
        let text = literal.text(self.source);
        let name = text.get(1..text.len().saturating_sub(1)).unwrap_or("");
        Some(name.to_owned())
    }

    /// Pattern or fix body text, then the options blocks that end it.
    ///
    /// An empty body is a point span at the current offset.
    fn pattern_region(&mut self) -> (Span, Options) {
        let start = self.current_offset();
        let span = self
            .span_until(PATTERN_END)
            .unwrap_or(Span::point(start));
        let mut options = Options::default();
        self.options_into(&mut options);
        (span, options)
    }
}
