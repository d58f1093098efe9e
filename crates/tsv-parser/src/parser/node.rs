//! Thin node architecture for the AST.
//!
//! Every node is a 16-byte `Node` header (kind, flags, pos, end, data index)
//! stored in `NodeArena::nodes`. Node-specific payloads live in typed pools
//! (`identifiers`, `binary_exprs`, `functions`, ...) and `data_index` points
//! into the pool selected by `kind`. Nodes without payload (keyword tokens,
//! `EmptyStatement`, `OmittedExpression`) carry `Node::NO_DATA`.
//!
//! Positions follow TypeScript: `pos` is the full start of the node's first
//! token (leading trivia included) and `end` is the end of its last token.

use super::base::{NodeIndex, NodeList};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A thin 16-byte node header.
///
/// Layout:
/// - `kind`: 2 bytes (token `SyntaxKind` or a `syntax_kind_ext` constant)
/// - `flags`: 2 bytes (see `node_flags`)
/// - `pos`: 4 bytes (full start, leading trivia included)
/// - `end`: 4 bytes (end of the last token)
/// - `data_index`: 4 bytes (index into the kind's pool, `u32::MAX` = no data)
#[repr(C)]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: u16,
    pub flags: u16,
    pub pos: u32,
    pub end: u32,
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    #[inline]
    pub fn new(kind: u16, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    #[inline]
    pub fn with_data(kind: u16, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    /// Width including leading trivia.
    #[inline]
    pub fn full_width(&self) -> u32 {
        self.end.saturating_sub(self.pos)
    }
}

/// Per-node information that is not needed on the hot traversal path.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
}

// =============================================================================
// Child enumeration
// =============================================================================

/// Enumerates the node-valued fields of a data payload in source order.
///
/// Used both to wire parent links when a node is added and by
/// `NodeArena::get_children`.
pub trait NodeChildren {
    fn for_each_child(&self, f: &mut dyn FnMut(NodeIndex));
}

macro_rules! visit_child {
    (node, $value:expr, $f:ident) => {
        if $value.is_some() {
            $f($value);
        }
    };
    (list, $value:expr, $f:ident) => {
        for &child in &$value.nodes {
            $f(child);
        }
    };
    (opt_list, $value:expr, $f:ident) => {
        if let Some(list) = &$value {
            for &child in &list.nodes {
                $f(child);
            }
        }
    };
}

macro_rules! node_children {
    ($($ty:ident { $($field:ident: $how:ident),* $(,)? })+) => {
        $(
            impl NodeChildren for $ty {
                #[allow(unused_variables)]
                fn for_each_child(&self, f: &mut dyn FnMut(NodeIndex)) {
                    $(visit_child!($how, self.$field, f);)*
                }
            }
        )+
    };
}

// =============================================================================
// Typed data pools
// =============================================================================

/// Identifier and PrivateIdentifier text.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Literal tokens (numeric, bigint, string, regex, template pieces).
///
/// `text` is the cooked value; printers read the raw source slice instead.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QualifiedNameData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComputedPropertyData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecoratorData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: u16, // SyntaxKind
    pub right: NodeIndex,
}

/// Prefix and postfix unary expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnaryExprData {
    pub operator: u16, // SyntaxKind
    pub operand: NodeIndex,
}

/// delete/typeof/void/await/yield/spread/non-null expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnaryExprDataEx {
    pub expression: NodeIndex,
    pub asterisk_token: bool, // yield*
}

/// Call and new expressions. `arguments` is `None` for `new C` without parens.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub question_dot_token: bool,
    pub type_arguments: Option<NodeList>,
    pub arguments: Option<NodeList>,
}

/// Property and element access.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub question_dot_token: bool,
    pub name_or_argument: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

/// Array and object literals.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralExprData {
    pub elements: NodeList,
    pub multi_line: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParenthesizedData {
    pub expression: NodeIndex,
}

/// `x as T`, `x satisfies T` and `<T>x`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeAssertionData {
    pub expression: NodeIndex,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateExprData {
    pub head: NodeIndex,
    pub template_spans: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateSpanData {
    pub expression: NodeIndex,
    pub literal: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaggedTemplateData {
    pub tag: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub template: NodeIndex,
}

/// Function declarations, function expressions and arrow functions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionData {
    pub modifiers: Option<NodeList>,
    pub is_async: bool,
    pub asterisk_token: bool,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub body: NodeIndex,
}

/// Class declarations and class expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InterfaceData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeAliasData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub members: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnumMemberData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// `namespace A.B { }` nests: the body of `A` is the declaration of `B`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModuleData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub body: NodeIndex,
}

/// `static { ... }` inside a class body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StaticBlockData {
    pub body: NodeIndex,
}

/// Property, method, call and construct signatures.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignatureData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_parameters: Option<NodeList>,
    pub parameters: Option<NodeList>,
    pub type_annotation: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexSignatureData {
    pub modifiers: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyDeclData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: bool,
    pub exclamation_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Class and object-literal methods.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodDeclData {
    pub modifiers: Option<NodeList>,
    pub asterisk_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConstructorData {
    pub modifiers: Option<NodeList>,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub body: NodeIndex,
}

/// Get and set accessors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessorData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterData {
    pub modifiers: Option<NodeList>,
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeParameterData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub constraint: NodeIndex,
    pub default: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeritageData {
    pub token: u16, // ExtendsKeyword or ImplementsKeyword
    pub types: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprWithTypeArgsData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// for/while/do loops. While and do only use `condition` and `statement`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoopData {
    pub initializer: NodeIndex,
    pub condition: NodeIndex,
    pub incrementor: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForInOfData {
    pub await_modifier: bool,
    pub initializer: NodeIndex, // VariableDeclarationList or expression
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

/// Blocks, module blocks and case blocks (whose statements are the clauses).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
    pub multi_line: bool,
}

/// Variable statements and declaration lists.
///
/// A `VariableStatement` holds a single `VariableDeclarationList` in
/// `declarations`; the list holds the `VariableDeclaration`s.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableData {
    pub modifiers: Option<NodeList>,
    pub declarations: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableDeclarationData {
    pub name: NodeIndex, // Identifier or binding pattern
    pub exclamation_token: bool,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Return and throw statements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwitchData {
    pub expression: NodeIndex,
    pub case_block: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseClauseData {
    pub expression: NodeIndex, // NONE for default clause
    pub statements: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TryData {
    pub try_block: NodeIndex,
    pub catch_clause: NodeIndex,
    pub finally_block: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatchClauseData {
    pub variable_declaration: NodeIndex,
    pub block: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabeledData {
    pub label: NodeIndex,
    pub statement: NodeIndex,
}

/// Break and continue statements.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JumpData {
    pub label: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WithData {
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindingPatternData {
    pub elements: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BindingElementData {
    pub dot_dot_dot_token: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PropertyAssignmentData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// `{ a }` and, in destructuring assignments, `{ a = 1 }`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShorthandPropertyData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub object_assignment_initializer: NodeIndex,
}

// Types

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeRefData {
    pub type_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

/// Union and intersection types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompositeTypeData {
    pub types: NodeList,
}

/// Function and constructor types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionTypeData {
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    pub is_abstract: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeQueryData {
    pub expr_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeLiteralData {
    pub members: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayTypeData {
    pub element_type: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TupleTypeData {
    pub elements: NodeList,
}

/// Parenthesized, optional and rest types.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WrappedTypeData {
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConditionalTypeData {
    pub check_type: NodeIndex,
    pub extends_type: NodeIndex,
    pub true_type: NodeIndex,
    pub false_type: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InferTypeData {
    pub type_parameter: NodeIndex,
}

/// keyof, unique and readonly type operators.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeOperatorData {
    pub operator: u16,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexedAccessTypeData {
    pub object_type: NodeIndex,
    pub index_type: NodeIndex,
}

/// `{ readonly [K in T as N]?: X }`. Modifier tokens are stored as kinds
/// (`PlusToken`, `MinusToken`, `ReadonlyKeyword`, `QuestionToken`) or 0.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MappedTypeData {
    pub readonly_token: u16,
    pub type_parameter: NodeIndex,
    pub name_type: NodeIndex,
    pub question_token: u16,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralTypeData {
    pub literal: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedTupleMemberData {
    pub dot_dot_dot_token: bool,
    pub name: NodeIndex,
    pub question_token: bool,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypePredicateData {
    pub asserts_modifier: bool,
    pub parameter_name: NodeIndex,
    pub type_node: NodeIndex,
}

// Modules

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportDeclData {
    pub modifiers: Option<NodeList>,
    pub import_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImportClauseData {
    pub is_type_only: bool,
    pub name: NodeIndex,
    pub named_bindings: NodeIndex,
}

/// Namespace imports (`* as ns`, uses `name`) and named imports/exports
/// (`{ a, b as c }`, uses `elements`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NamedImportsData {
    pub name: NodeIndex,
    pub elements: NodeList,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpecifierData {
    pub is_type_only: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportDeclData {
    pub modifiers: Option<NodeList>,
    pub is_type_only: bool,
    pub export_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

/// `export default expr;` and `export = expr;`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportAssignmentData {
    pub modifiers: Option<NodeList>,
    pub is_export_equals: bool,
    pub expression: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub statements: NodeList,
    pub end_of_file_token: NodeIndex,
    pub file_name: String,
    #[serde(
        serialize_with = "serialize_arc_str",
        deserialize_with = "deserialize_arc_str"
    )]
    pub text: Arc<str>,
}

fn serialize_arc_str<S>(arc: &Arc<str>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(arc)
}

fn deserialize_arc_str<'de, D>(deserializer: D) -> Result<Arc<str>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(Arc::from(s))
}

node_children! {
    IdentifierData {}
    LiteralData {}
    QualifiedNameData { left: node, right: node }
    ComputedPropertyData { expression: node }
    DecoratorData { expression: node }
    BinaryExprData { left: node, right: node }
    UnaryExprData { operand: node }
    UnaryExprDataEx { expression: node }
    CallExprData { expression: node, type_arguments: opt_list, arguments: opt_list }
    AccessExprData { expression: node, name_or_argument: node }
    ConditionalExprData { condition: node, when_true: node, when_false: node }
    LiteralExprData { elements: list }
    ParenthesizedData { expression: node }
    TypeAssertionData { expression: node, type_node: node }
    TemplateExprData { head: node, template_spans: list }
    TemplateSpanData { expression: node, literal: node }
    TaggedTemplateData { tag: node, type_arguments: opt_list, template: node }
    FunctionData {
        modifiers: opt_list,
        name: node,
        type_parameters: opt_list,
        parameters: list,
        type_annotation: node,
        body: node,
    }
    ClassData {
        modifiers: opt_list,
        name: node,
        type_parameters: opt_list,
        heritage_clauses: opt_list,
        members: list,
    }
    InterfaceData {
        modifiers: opt_list,
        name: node,
        type_parameters: opt_list,
        heritage_clauses: opt_list,
        members: list,
    }
    TypeAliasData { modifiers: opt_list, name: node, type_parameters: opt_list, type_node: node }
    EnumData { modifiers: opt_list, name: node, members: list }
    EnumMemberData { name: node, initializer: node }
    ModuleData { modifiers: opt_list, name: node, body: node }
    StaticBlockData { body: node }
    SignatureData {
        modifiers: opt_list,
        name: node,
        type_parameters: opt_list,
        parameters: opt_list,
        type_annotation: node,
    }
    IndexSignatureData { modifiers: opt_list, parameters: list, type_annotation: node }
    PropertyDeclData { modifiers: opt_list, name: node, type_annotation: node, initializer: node }
    MethodDeclData {
        modifiers: opt_list,
        name: node,
        type_parameters: opt_list,
        parameters: list,
        type_annotation: node,
        body: node,
    }
    ConstructorData { modifiers: opt_list, type_parameters: opt_list, parameters: list, body: node }
    AccessorData {
        modifiers: opt_list,
        name: node,
        type_parameters: opt_list,
        parameters: list,
        type_annotation: node,
        body: node,
    }
    ParameterData { modifiers: opt_list, name: node, type_annotation: node, initializer: node }
    TypeParameterData { modifiers: opt_list, name: node, constraint: node, default: node }
    HeritageData { types: list }
    ExprWithTypeArgsData { expression: node, type_arguments: opt_list }
    IfStatementData { expression: node, then_statement: node, else_statement: node }
    LoopData { initializer: node, condition: node, incrementor: node, statement: node }
    ForInOfData { initializer: node, expression: node, statement: node }
    BlockData { statements: list }
    VariableData { modifiers: opt_list, declarations: list }
    VariableDeclarationData { name: node, type_annotation: node, initializer: node }
    ReturnData { expression: node }
    ExprStatementData { expression: node }
    SwitchData { expression: node, case_block: node }
    CaseClauseData { expression: node, statements: list }
    TryData { try_block: node, catch_clause: node, finally_block: node }
    CatchClauseData { variable_declaration: node, block: node }
    LabeledData { label: node, statement: node }
    JumpData { label: node }
    WithData { expression: node, statement: node }
    BindingPatternData { elements: list }
    BindingElementData { property_name: node, name: node, initializer: node }
    PropertyAssignmentData { modifiers: opt_list, name: node, initializer: node }
    ShorthandPropertyData { modifiers: opt_list, name: node, object_assignment_initializer: node }
    TypeRefData { type_name: node, type_arguments: opt_list }
    CompositeTypeData { types: list }
    FunctionTypeData { type_parameters: opt_list, parameters: list, type_annotation: node }
    TypeQueryData { expr_name: node, type_arguments: opt_list }
    TypeLiteralData { members: list }
    ArrayTypeData { element_type: node }
    TupleTypeData { elements: list }
    WrappedTypeData { type_node: node }
    ConditionalTypeData {
        check_type: node,
        extends_type: node,
        true_type: node,
        false_type: node,
    }
    InferTypeData { type_parameter: node }
    TypeOperatorData { type_node: node }
    IndexedAccessTypeData { object_type: node, index_type: node }
    MappedTypeData { type_parameter: node, name_type: node, type_node: node }
    LiteralTypeData { literal: node }
    NamedTupleMemberData { name: node, type_node: node }
    TypePredicateData { parameter_name: node, type_node: node }
    ImportDeclData { modifiers: opt_list, import_clause: node, module_specifier: node }
    ImportClauseData { name: node, named_bindings: node }
    NamedImportsData { name: node, elements: list }
    SpecifierData { property_name: node, name: node }
    ExportDeclData { modifiers: opt_list, export_clause: node, module_specifier: node }
    ExportAssignmentData { modifiers: opt_list, expression: node }
    SourceFileData { statements: list, end_of_file_token: node }
}

// =============================================================================
// Arena
// =============================================================================

/// Arena for thin nodes with typed data pools.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
    pub extended_info: Vec<ExtendedNodeInfo>,

    // Names
    pub identifiers: Vec<IdentifierData>,
    pub qualified_names: Vec<QualifiedNameData>,
    pub computed_properties: Vec<ComputedPropertyData>,
    pub decorators: Vec<DecoratorData>,

    // Literals
    pub literals: Vec<LiteralData>,

    // Expressions
    pub binary_exprs: Vec<BinaryExprData>,
    pub unary_exprs: Vec<UnaryExprData>,
    pub unary_exprs_ex: Vec<UnaryExprDataEx>,
    pub call_exprs: Vec<CallExprData>,
    pub access_exprs: Vec<AccessExprData>,
    pub conditional_exprs: Vec<ConditionalExprData>,
    pub literal_exprs: Vec<LiteralExprData>,
    pub parenthesized: Vec<ParenthesizedData>,
    pub type_assertions: Vec<TypeAssertionData>,
    pub template_exprs: Vec<TemplateExprData>,
    pub template_spans: Vec<TemplateSpanData>,
    pub tagged_templates: Vec<TaggedTemplateData>,
    pub property_assignments: Vec<PropertyAssignmentData>,
    pub shorthand_properties: Vec<ShorthandPropertyData>,

    // Functions, classes and declarations
    pub functions: Vec<FunctionData>,
    pub classes: Vec<ClassData>,
    pub interfaces: Vec<InterfaceData>,
    pub type_aliases: Vec<TypeAliasData>,
    pub enums: Vec<EnumData>,
    pub enum_members: Vec<EnumMemberData>,
    pub modules: Vec<ModuleData>,
    pub static_blocks: Vec<StaticBlockData>,

    // Signatures and members
    pub signatures: Vec<SignatureData>,
    pub index_signatures: Vec<IndexSignatureData>,
    pub property_decls: Vec<PropertyDeclData>,
    pub method_decls: Vec<MethodDeclData>,
    pub constructors: Vec<ConstructorData>,
    pub accessors: Vec<AccessorData>,
    pub parameters: Vec<ParameterData>,
    pub type_parameters: Vec<TypeParameterData>,
    pub heritage_clauses: Vec<HeritageData>,
    pub expr_with_type_args: Vec<ExprWithTypeArgsData>,

    // Statements
    pub if_statements: Vec<IfStatementData>,
    pub loops: Vec<LoopData>,
    pub for_in_of: Vec<ForInOfData>,
    pub blocks: Vec<BlockData>,
    pub variables: Vec<VariableData>,
    pub variable_declarations: Vec<VariableDeclarationData>,
    pub return_data: Vec<ReturnData>,
    pub expr_statements: Vec<ExprStatementData>,
    pub switch_data: Vec<SwitchData>,
    pub case_clauses: Vec<CaseClauseData>,
    pub try_data: Vec<TryData>,
    pub catch_clauses: Vec<CatchClauseData>,
    pub labeled_data: Vec<LabeledData>,
    pub jump_data: Vec<JumpData>,
    pub with_data: Vec<WithData>,

    // Binding patterns
    pub binding_patterns: Vec<BindingPatternData>,
    pub binding_elements: Vec<BindingElementData>,

    // Types
    pub type_refs: Vec<TypeRefData>,
    pub composite_types: Vec<CompositeTypeData>,
    pub function_types: Vec<FunctionTypeData>,
    pub type_queries: Vec<TypeQueryData>,
    pub type_literals: Vec<TypeLiteralData>,
    pub array_types: Vec<ArrayTypeData>,
    pub tuple_types: Vec<TupleTypeData>,
    pub wrapped_types: Vec<WrappedTypeData>,
    pub conditional_types: Vec<ConditionalTypeData>,
    pub infer_types: Vec<InferTypeData>,
    pub type_operators: Vec<TypeOperatorData>,
    pub indexed_access_types: Vec<IndexedAccessTypeData>,
    pub mapped_types: Vec<MappedTypeData>,
    pub literal_types: Vec<LiteralTypeData>,
    pub named_tuple_members: Vec<NamedTupleMemberData>,
    pub type_predicates: Vec<TypePredicateData>,

    // Import/export
    pub import_decls: Vec<ImportDeclData>,
    pub import_clauses: Vec<ImportClauseData>,
    pub named_imports: Vec<NamedImportsData>,
    pub specifiers: Vec<SpecifierData>,
    pub export_decls: Vec<ExportDeclData>,
    pub export_assignments: Vec<ExportAssignmentData>,

    pub source_files: Vec<SourceFileData>,
}
