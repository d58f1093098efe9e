//! Scope chain around the cursor.

use super::InlineValuesProvider;
use smallvec::SmallVec;
use tsv_common::limits::{MAX_SCOPE_COUNT, MAX_STRONG_SCOPE_COUNT};
use tsv_parser::syntax_kind_ext;
use tsv_parser::{NodeIndex, TokenAtPosition};

/// Enclosing scopes, innermost first.
pub type ScopeChain = SmallVec<[NodeIndex; MAX_SCOPE_COUNT]>;

/// Bounds on how far `find_scopes` climbs.
///
/// Plain blocks only count toward `max_scopes`: many statements introduce
/// one incidentally, so they are cheap to include and should not use up the
/// strong budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScopeLimits {
    pub max_strong_scopes: usize,
    pub max_scopes: usize,
}

impl Default for ScopeLimits {
    fn default() -> Self {
        ScopeLimits {
            max_strong_scopes: MAX_STRONG_SCOPE_COUNT,
            max_scopes: MAX_SCOPE_COUNT,
        }
    }
}

impl<'a> InlineValuesProvider<'a> {
    /// Collect provideable scopes from the token outward.
    ///
    /// The bounds are checked before each candidate is considered, so the
    /// chain never holds more than `max_scopes` nodes or more than
    /// `max_strong_scopes` non-block nodes.
    pub fn find_scopes(&self, token: &TokenAtPosition) -> ScopeChain {
        let mut scopes = ScopeChain::new();
        let mut strong_count = 0;

        for idx in self.arena.ancestors(token.containing_node()) {
            if strong_count >= self.limits.max_strong_scopes
                || scopes.len() >= self.limits.max_scopes
            {
                break;
            }
            let Some(node) = self.arena.get(idx) else {
                break;
            };
            if is_provideable_scope(node.kind) {
                scopes.push(idx);
                if node.kind != syntax_kind_ext::BLOCK {
                    strong_count += 1;
                }
            }
        }

        scopes
    }
}

/// Nodes whose contents can be walked for inline values.
fn is_provideable_scope(kind: u16) -> bool {
    use syntax_kind_ext::*;

    is_function_like_kind(kind)
        || matches!(
            kind,
            PROPERTY_ACCESS_EXPRESSION
                | ELEMENT_ACCESS_EXPRESSION
                | CLASS_DECLARATION
                | CLASS_EXPRESSION
                | FOR_IN_STATEMENT
                | FOR_OF_STATEMENT
                | CASE_CLAUSE
                | DEFAULT_CLAUSE
                | SOURCE_FILE
                | BLOCK
                | CLASS_STATIC_BLOCK_DECLARATION
                | IF_STATEMENT
                | FOR_STATEMENT
                | WHILE_STATEMENT
                | DO_STATEMENT
                | SWITCH_STATEMENT
                | MODULE_DECLARATION
                | CATCH_CLAUSE
        )
}
