//! Printer: re-serializes parsed nodes as canonical single-line TypeScript.
//!
//! The printer never consults the original layout, only the tree: spacing is
//! canonical (`a + b`, `{ a: 1 }`, `(x) => x`), comments are dropped unless
//! requested, and line breaks collapse to single spaces. Literal tokens are
//! the exception and are copied from their source spelling, so quotes,
//! escapes and numeric formats survive unchanged.
//!
//! Emission is split by construct family:
//! - `expressions` / `literals` - operators, calls, member access, literals
//! - `functions` - functions, arrows, classes, members and parameters
//! - `binding_patterns` - destructuring patterns
//! - `statements` / `declarations` - statement and declaration forms
//! - `types` - type annotations and type expressions

use crate::source_writer::SourceWriter;
use tracing::warn;
use tsv_common::limits::MAX_PRINT_DEPTH;
use tsv_parser::parser::node::{Node, NodeArena};
use tsv_parser::parser::{NodeIndex, syntax_kind_ext};
use tsv_scanner::{SyntaxKind, token_to_text};

mod binding_patterns;
mod comments;
mod declarations;
mod expressions;
mod functions;
mod helpers;
mod literals;
mod statements;
mod types;

pub use comments::{CommentKind, CommentRange, get_leading_comment_ranges};

/// Printer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Drop every comment. When false, block comments leading a statement
    /// are kept; line comments are always dropped on single-line output.
    pub remove_comments: bool,
    /// Drop the `;` that would end the output.
    pub omit_trailing_semicolon: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        PrinterOptions {
            remove_comments: true,
            omit_trailing_semicolon: true,
        }
    }
}

/// Writes `NodeArena` subtrees back out as source text.
pub struct Printer<'a> {
    pub(super) arena: &'a NodeArena,
    pub(super) source_text: Option<&'a str>,
    pub(super) writer: SourceWriter,
    pub(super) options: PrinterOptions,
    depth: u32,
    depth_exceeded: bool,
}

impl<'a> Printer<'a> {
    pub fn new(arena: &'a NodeArena, options: PrinterOptions) -> Self {
        Printer {
            arena,
            source_text: arena.source_text(),
            writer: SourceWriter::new(),
            options,
            depth: 0,
            depth_exceeded: false,
        }
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    /// Print one node. Missing nodes print as the empty string.
    pub fn print_node(&mut self, idx: NodeIndex) -> String {
        self.writer.clear();
        self.depth = 0;
        self.depth_exceeded = false;
        self.emit(idx);
        self.writer.take_output()
    }

    /// Whether the last `print_node` hit `MAX_PRINT_DEPTH` and left part of
    /// the subtree out.
    pub fn was_truncated(&self) -> bool {
        self.depth_exceeded
    }

    /// Emit a node and its subtree.
    pub(super) fn emit(&mut self, idx: NodeIndex) {
        let Some(node) = self.arena.get(idx) else {
            return;
        };
        if self.depth >= MAX_PRINT_DEPTH {
            if !self.depth_exceeded {
                warn!(
                    kind = %syntax_kind_ext::kind_name(node.kind),
                    pos = node.pos,
                    "print depth limit reached, subtree truncated"
                );
                self.depth_exceeded = true;
            }
            return;
        }
        self.depth += 1;
        self.emit_node(node);
        self.depth -= 1;
    }

    fn emit_node(&mut self, node: &Node) {
        use syntax_kind_ext::*;

        match node.kind {
            // Names
            k if k == SyntaxKind::Identifier as u16 || k == SyntaxKind::PrivateIdentifier as u16 => {
                self.emit_identifier(node)
            }
            QUALIFIED_NAME => self.emit_qualified_name(node),
            COMPUTED_PROPERTY_NAME => self.emit_computed_property_name(node),
            DECORATOR => self.emit_decorator(node),

            // Expressions
            BINARY_EXPRESSION => self.emit_binary_expression(node),
            PREFIX_UNARY_EXPRESSION => self.emit_prefix_unary(node),
            POSTFIX_UNARY_EXPRESSION => self.emit_postfix_unary(node),
            CALL_EXPRESSION => self.emit_call_expression(node),
            NEW_EXPRESSION => self.emit_new_expression(node),
            PROPERTY_ACCESS_EXPRESSION => self.emit_property_access(node),
            ELEMENT_ACCESS_EXPRESSION => self.emit_element_access(node),
            TAGGED_TEMPLATE_EXPRESSION => self.emit_tagged_template(node),
            TYPE_ASSERTION => self.emit_type_assertion(node),
            AS_EXPRESSION | SATISFIES_EXPRESSION => self.emit_as_or_satisfies(node),
            NON_NULL_EXPRESSION => self.emit_non_null(node),
            PARENTHESIZED_EXPRESSION => self.emit_parenthesized(node),
            CONDITIONAL_EXPRESSION => self.emit_conditional(node),
            DELETE_EXPRESSION | TYPE_OF_EXPRESSION | VOID_EXPRESSION | AWAIT_EXPRESSION => {
                self.emit_keyword_unary(node)
            }
            YIELD_EXPRESSION => self.emit_yield(node),
            SPREAD_ELEMENT | SPREAD_ASSIGNMENT => self.emit_spread(node),
            OMITTED_EXPRESSION => {}
            TEMPLATE_EXPRESSION | TEMPLATE_LITERAL_TYPE => self.emit_template_expression(node),
            TEMPLATE_SPAN | TEMPLATE_LITERAL_TYPE_SPAN => self.emit_template_span(node),
            ARRAY_LITERAL_EXPRESSION => self.emit_array_literal(node),
            OBJECT_LITERAL_EXPRESSION => self.emit_object_literal(node),
            PROPERTY_ASSIGNMENT => self.emit_property_assignment(node),
            SHORTHAND_PROPERTY_ASSIGNMENT => self.emit_shorthand_property(node),
            EXPRESSION_WITH_TYPE_ARGUMENTS => self.emit_expression_with_type_arguments(node),

            // Functions and classes
            FUNCTION_DECLARATION | FUNCTION_EXPRESSION => self.emit_function(node),
            ARROW_FUNCTION => self.emit_arrow_function(node),
            CLASS_DECLARATION | CLASS_EXPRESSION => self.emit_class(node),
            HERITAGE_CLAUSE => self.emit_heritage_clause(node),
            PARAMETER => self.emit_parameter(node),
            TYPE_PARAMETER => self.emit_type_parameter(node),
            PROPERTY_DECLARATION => self.emit_property_declaration(node),
            METHOD_DECLARATION => self.emit_method_declaration(node),
            CONSTRUCTOR => self.emit_constructor(node),
            GET_ACCESSOR | SET_ACCESSOR => self.emit_accessor(node),
            CLASS_STATIC_BLOCK_DECLARATION => self.emit_static_block(node),
            INDEX_SIGNATURE => self.emit_index_signature(node),
            SEMICOLON_CLASS_ELEMENT => self.write(";"),

            // Binding patterns
            OBJECT_BINDING_PATTERN | ARRAY_BINDING_PATTERN => self.emit_binding_pattern(node),
            BINDING_ELEMENT => self.emit_binding_element(node),

            // Statements
            SOURCE_FILE => self.emit_source_file(node),
            BLOCK | MODULE_BLOCK => self.emit_block(node),
            EMPTY_STATEMENT => self.write(";"),
            VARIABLE_STATEMENT => self.emit_variable_statement(node),
            VARIABLE_DECLARATION_LIST => self.emit_variable_declaration_list(node),
            VARIABLE_DECLARATION => self.emit_variable_declaration(node),
            EXPRESSION_STATEMENT => self.emit_expression_statement(node),
            IF_STATEMENT => self.emit_if_statement(node),
            DO_STATEMENT => self.emit_do_statement(node),
            WHILE_STATEMENT => self.emit_while_statement(node),
            FOR_STATEMENT => self.emit_for_statement(node),
            FOR_IN_STATEMENT | FOR_OF_STATEMENT => self.emit_for_in_or_of(node),
            CONTINUE_STATEMENT | BREAK_STATEMENT => self.emit_jump_statement(node),
            RETURN_STATEMENT | THROW_STATEMENT => self.emit_return_or_throw(node),
            WITH_STATEMENT => self.emit_with_statement(node),
            SWITCH_STATEMENT => self.emit_switch_statement(node),
            CASE_BLOCK => self.emit_case_block(node),
            CASE_CLAUSE | DEFAULT_CLAUSE => self.emit_case_clause(node),
            LABELED_STATEMENT => self.emit_labeled_statement(node),
            TRY_STATEMENT => self.emit_try_statement(node),
            CATCH_CLAUSE => self.emit_catch_clause(node),
            DEBUGGER_STATEMENT => {
                self.write("debugger");
                self.write_semicolon();
            }

            // Declarations
            INTERFACE_DECLARATION => self.emit_interface(node),
            TYPE_ALIAS_DECLARATION => self.emit_type_alias(node),
            ENUM_DECLARATION => self.emit_enum(node),
            ENUM_MEMBER => self.emit_enum_member(node),
            MODULE_DECLARATION => self.emit_module(node),
            IMPORT_DECLARATION => self.emit_import_declaration(node),
            IMPORT_CLAUSE => self.emit_import_clause(node),
            NAMESPACE_IMPORT => self.emit_namespace_import(node),
            NAMED_IMPORTS | NAMED_EXPORTS => self.emit_named_imports_or_exports(node),
            IMPORT_SPECIFIER | EXPORT_SPECIFIER => self.emit_specifier(node),
            EXPORT_DECLARATION => self.emit_export_declaration(node),
            EXPORT_ASSIGNMENT => self.emit_export_assignment(node),

            // Types
            TYPE_REFERENCE => self.emit_type_reference(node),
            UNION_TYPE => self.emit_composite_type(node, " | "),
            INTERSECTION_TYPE => self.emit_composite_type(node, " & "),
            ARRAY_TYPE => self.emit_array_type(node),
            TUPLE_TYPE => self.emit_tuple_type(node),
            NAMED_TUPLE_MEMBER => self.emit_named_tuple_member(node),
            OPTIONAL_TYPE => self.emit_optional_type(node),
            REST_TYPE => self.emit_rest_type(node),
            PARENTHESIZED_TYPE => self.emit_parenthesized_type(node),
            FUNCTION_TYPE | CONSTRUCTOR_TYPE => self.emit_function_type(node),
            TYPE_QUERY => self.emit_type_query(node),
            TYPE_LITERAL => self.emit_type_literal(node),
            PROPERTY_SIGNATURE => self.emit_property_signature(node),
            METHOD_SIGNATURE | CALL_SIGNATURE | CONSTRUCT_SIGNATURE => {
                self.emit_signature_member(node)
            }
            TYPE_OPERATOR => self.emit_type_operator(node),
            INDEXED_ACCESS_TYPE => self.emit_indexed_access_type(node),
            MAPPED_TYPE => self.emit_mapped_type(node),
            CONDITIONAL_TYPE => self.emit_conditional_type(node),
            INFER_TYPE => self.emit_infer_type(node),
            LITERAL_TYPE => self.emit_literal_type(node),
            TYPE_PREDICATE => self.emit_type_predicate(node),
            THIS_TYPE => self.write("this"),

            // Tokens: literals are copied from source, keywords by their text
            _ => self.emit_token(node),
        }
    }

    fn emit_token(&mut self, node: &Node) {
        let Some(kind) = SyntaxKind::try_from_u16(node.kind) else {
            return;
        };
        if kind.is_literal() || kind.is_template_token() {
            self.emit_literal(node);
        } else if let Some(text) = token_to_text(kind) {
            self.write(text);
        }
    }
}

/// Print a single node with the given options.
pub fn print_node(arena: &NodeArena, idx: NodeIndex, options: PrinterOptions) -> String {
    Printer::new(arena, options).print_node(idx)
}

/// Source text of an operator or keyword kind, empty for anything else.
pub(super) fn get_operator_text(kind: u16) -> &'static str {
    SyntaxKind::try_from_u16(kind)
        .and_then(token_to_text)
        .unwrap_or("")
}

#[cfg(test)]
#[path = "../../tests/printer_tests.rs"]
mod tests;
