//! Inline values for a paused debugger.
//!
//! Given the offset where execution stopped and the span the editor is
//! showing, report which bindings and sub-expressions are worth rendering
//! next to the code (`x = 5`, `a + b = 7`). Nothing is evaluated here; the
//! debug adapter evaluates what we return.
//!
//! The query runs in two steps:
//! 1. `find_scopes` walks outward from the token under the cursor and keeps
//!    a short chain of enclosing scopes (see [`ScopeLimits`]).
//! 2. A `ValueCollector` walks the outermost of those scopes and classifies
//!    every visited node. Only located scopes are entered fully; other
//!    functions, classes, loops and blocks contribute at most their names
//!    and conditions.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tsv_common::TextSpan;
use tsv_parser::{NodeArena, NodeIndex, syntax_kind_ext};

mod collector;
mod scopes;

use collector::ValueCollector;
pub use scopes::{ScopeChain, ScopeLimits};

/// A value the debugger can show inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InlineValue {
    /// Look up a variable by name in the paused frame.
    VariableLookup {
        span: TextSpan,
        #[serde(rename = "variableName")]
        variable_name: String,
    },
    /// Evaluate an expression, given in canonical single-line form.
    EvaluatableExpression { span: TextSpan, expression: String },
}

impl InlineValue {
    pub fn variable_lookup(span: TextSpan, variable_name: impl Into<String>) -> Self {
        InlineValue::VariableLookup {
            span,
            variable_name: variable_name.into(),
        }
    }

    pub fn evaluatable_expression(span: TextSpan, expression: impl Into<String>) -> Self {
        InlineValue::EvaluatableExpression {
            span,
            expression: expression.into(),
        }
    }

    /// Source span of the name or expression.
    pub fn span(&self) -> TextSpan {
        match self {
            InlineValue::VariableLookup { span, .. }
            | InlineValue::EvaluatableExpression { span, .. } => *span,
        }
    }

    /// The variable name or the expression text.
    pub fn text(&self) -> &str {
        match self {
            InlineValue::VariableLookup { variable_name, .. } => variable_name,
            InlineValue::EvaluatableExpression { expression, .. } => expression,
        }
    }
}

/// Provider for debugger inline values.
///
/// Holds an immutable borrow of a parsed file; every query is independent.
pub struct InlineValuesProvider<'a> {
    arena: &'a NodeArena,
    root: NodeIndex,
    limits: ScopeLimits,
}

impl<'a> InlineValuesProvider<'a> {
    pub fn new(arena: &'a NodeArena, root: NodeIndex) -> Self {
        InlineValuesProvider {
            arena,
            root,
            limits: ScopeLimits::default(),
        }
    }

    /// Override the scope bounds used by `find_scopes`.
    pub fn with_limits(mut self, limits: ScopeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> ScopeLimits {
        self.limits
    }

    /// Inline values for execution paused at byte offset `position`,
    /// restricted to nodes that touch `visible_span`.
    ///
    /// Values come back in source order. A position that resolves to no
    /// token, or a token with no enclosing scope, yields an empty list.
    pub fn provide_inline_values(&self, position: u32, visible_span: TextSpan) -> Vec<InlineValue> {
        let Some(token) = self.arena.find_token_at_position(self.root, position) else {
            debug!(position, "no token at position");
            return Vec::new();
        };

        let scopes = self.find_scopes(&token);
        let Some(&outermost) = scopes.last() else {
            debug!(position, token_pos = token.pos, "no provideable scope");
            return Vec::new();
        };
        let outermost_kind = self
            .arena
            .get(outermost)
            .map_or_else(String::new, |node| syntax_kind_ext::kind_name(node.kind));
        debug!(
            position,
            token_pos = token.pos,
            scope_count = scopes.len(),
            outermost = %outermost_kind,
            "collecting inline values"
        );

        let mut collector = ValueCollector::new(self.arena, &scopes, token.pos, visible_span);
        collector.visit(outermost);
        let values = collector.into_values();
        debug!(count = values.len(), "inline values collected");
        values
    }
}

#[cfg(test)]
#[path = "../../tests/inline_values_tests.rs"]
mod tests;
