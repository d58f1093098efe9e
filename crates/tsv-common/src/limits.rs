//! Centralized limits and thresholds.
//!
//! Shared constants for recursion depths and traversal bounds, kept in one
//! place so that tests and embedders can reason about them together.

// =============================================================================
// Inline Value Scope Bounds
// =============================================================================

/// Maximum number of "strong" scopes collected around the cursor.
///
/// A strong scope is any provideable scope other than a plain block
/// (function, loop, conditional, class, source file, ...). Blocks are
/// introduced incidentally by many constructs and do not count here.
///
/// # TypeScript example
///
/// ```typescript
/// function outer() {          // strong #2, traversal stops above this
///     if (ready) {            // strong #1
///         count++;            // <- cursor
///     }
/// }
/// ```
pub const MAX_STRONG_SCOPE_COUNT: usize = 2;

/// Maximum number of scopes (weak blocks included) collected around the cursor.
pub const MAX_SCOPE_COUNT: usize = 4;

// =============================================================================
// Recursion Depth Limits (Parser / Printer)
// =============================================================================

/// Maximum nesting depth for recursive descent parsing.
///
/// Deeper input reports an error and yields missing nodes instead of
/// overflowing the stack.
///
/// ```typescript
/// const x = ((((((((((((((((((1))))))))))))))))));  // ... thousands of levels
/// ```
pub const MAX_PARSER_RECURSION_DEPTH: u32 = 1_000;

/// Maximum nesting depth for printing an expression back to source text.
pub const MAX_PRINT_DEPTH: u32 = 1_000;

/// Maximum AST depth the inline values walk descends to.
///
/// Binary chains are parsed iteratively, so the tree can be far deeper than
/// `MAX_PARSER_RECURSION_DEPTH`:
///
/// ```typescript
/// let total = a + a + a + a + /* ... 50,000 terms ... */ a;
/// ```
pub const MAX_AST_DEPTH: u32 = 500;
