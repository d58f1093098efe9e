//! Packed `Node::flags` bits.

pub const NONE: u16 = 0;
/// `let` declaration list.
pub const LET: u16 = 1 << 0;
/// `const` declaration list.
pub const CONST: u16 = 1 << 1;
/// `using` declaration list.
pub const USING: u16 = 1 << 2;
/// `await using` declaration list.
pub const AWAIT_USING: u16 = CONST | USING;
pub const BLOCK_SCOPED: u16 = LET | CONST | USING;
/// Node was produced while recovering from a syntax error.
pub const THIS_NODE_HAS_ERROR: u16 = 1 << 4;
/// Part of an optional chain (`a?.b.c`).
pub const OPTIONAL_CHAIN: u16 = 1 << 5;
