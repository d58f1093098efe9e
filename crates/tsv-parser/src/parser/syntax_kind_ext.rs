//! Composite node kinds.
//!
//! Token kinds come from `tsv_scanner::SyntaxKind` and occupy `0..=LAST_TOKEN`.
//! Everything the parser builds on top of tokens is numbered from
//! `FIRST_NODE` upwards. Type nodes are contiguous so `is_type_node` is a
//! range check plus the keyword types.

use tsv_scanner::SyntaxKind;

pub const FIRST_NODE: u16 = 160;

// Names and class/interface members
pub const QUALIFIED_NAME: u16 = 160;
pub const COMPUTED_PROPERTY_NAME: u16 = 161;
pub const TYPE_PARAMETER: u16 = 162;
pub const PARAMETER: u16 = 163;
pub const DECORATOR: u16 = 164;
pub const PROPERTY_SIGNATURE: u16 = 165;
pub const PROPERTY_DECLARATION: u16 = 166;
pub const METHOD_SIGNATURE: u16 = 167;
pub const METHOD_DECLARATION: u16 = 168;
pub const CLASS_STATIC_BLOCK_DECLARATION: u16 = 169;
pub const CONSTRUCTOR: u16 = 170;
pub const GET_ACCESSOR: u16 = 171;
pub const SET_ACCESSOR: u16 = 172;
pub const CALL_SIGNATURE: u16 = 173;
pub const CONSTRUCT_SIGNATURE: u16 = 174;
pub const INDEX_SIGNATURE: u16 = 175;

// Types
pub const TYPE_PREDICATE: u16 = 176;
pub const TYPE_REFERENCE: u16 = 177;
pub const FUNCTION_TYPE: u16 = 178;
pub const CONSTRUCTOR_TYPE: u16 = 179;
pub const TYPE_QUERY: u16 = 180;
pub const TYPE_LITERAL: u16 = 181;
pub const ARRAY_TYPE: u16 = 182;
pub const TUPLE_TYPE: u16 = 183;
pub const OPTIONAL_TYPE: u16 = 184;
pub const REST_TYPE: u16 = 185;
pub const UNION_TYPE: u16 = 186;
pub const INTERSECTION_TYPE: u16 = 187;
pub const CONDITIONAL_TYPE: u16 = 188;
pub const INFER_TYPE: u16 = 189;
pub const PARENTHESIZED_TYPE: u16 = 190;
pub const THIS_TYPE: u16 = 191;
pub const TYPE_OPERATOR: u16 = 192;
pub const INDEXED_ACCESS_TYPE: u16 = 193;
pub const MAPPED_TYPE: u16 = 194;
pub const LITERAL_TYPE: u16 = 195;
pub const NAMED_TUPLE_MEMBER: u16 = 196;
pub const TEMPLATE_LITERAL_TYPE: u16 = 197;
pub const TEMPLATE_LITERAL_TYPE_SPAN: u16 = 198;

pub const FIRST_TYPE_NODE: u16 = TYPE_PREDICATE;
pub const LAST_TYPE_NODE: u16 = TEMPLATE_LITERAL_TYPE_SPAN;

// Binding patterns
pub const OBJECT_BINDING_PATTERN: u16 = 200;
pub const ARRAY_BINDING_PATTERN: u16 = 201;
pub const BINDING_ELEMENT: u16 = 202;

// Expressions
pub const ARRAY_LITERAL_EXPRESSION: u16 = 203;
pub const OBJECT_LITERAL_EXPRESSION: u16 = 204;
pub const PROPERTY_ACCESS_EXPRESSION: u16 = 205;
pub const ELEMENT_ACCESS_EXPRESSION: u16 = 206;
pub const CALL_EXPRESSION: u16 = 207;
pub const NEW_EXPRESSION: u16 = 208;
pub const TAGGED_TEMPLATE_EXPRESSION: u16 = 209;
pub const TYPE_ASSERTION: u16 = 210;
pub const PARENTHESIZED_EXPRESSION: u16 = 211;
pub const FUNCTION_EXPRESSION: u16 = 212;
pub const ARROW_FUNCTION: u16 = 213;
pub const DELETE_EXPRESSION: u16 = 214;
pub const TYPE_OF_EXPRESSION: u16 = 215;
pub const VOID_EXPRESSION: u16 = 216;
pub const AWAIT_EXPRESSION: u16 = 217;
pub const PREFIX_UNARY_EXPRESSION: u16 = 218;
pub const POSTFIX_UNARY_EXPRESSION: u16 = 219;
pub const BINARY_EXPRESSION: u16 = 220;
pub const CONDITIONAL_EXPRESSION: u16 = 221;
pub const TEMPLATE_EXPRESSION: u16 = 222;
pub const YIELD_EXPRESSION: u16 = 223;
pub const SPREAD_ELEMENT: u16 = 224;
pub const CLASS_EXPRESSION: u16 = 225;
pub const OMITTED_EXPRESSION: u16 = 226;
pub const EXPRESSION_WITH_TYPE_ARGUMENTS: u16 = 227;
pub const AS_EXPRESSION: u16 = 228;
pub const NON_NULL_EXPRESSION: u16 = 229;
pub const SATISFIES_EXPRESSION: u16 = 230;
pub const TEMPLATE_SPAN: u16 = 231;

// Statements and declarations
pub const BLOCK: u16 = 232;
pub const EMPTY_STATEMENT: u16 = 233;
pub const VARIABLE_STATEMENT: u16 = 234;
pub const EXPRESSION_STATEMENT: u16 = 235;
pub const IF_STATEMENT: u16 = 236;
pub const DO_STATEMENT: u16 = 237;
pub const WHILE_STATEMENT: u16 = 238;
pub const FOR_STATEMENT: u16 = 239;
pub const FOR_IN_STATEMENT: u16 = 240;
pub const FOR_OF_STATEMENT: u16 = 241;
pub const CONTINUE_STATEMENT: u16 = 242;
pub const BREAK_STATEMENT: u16 = 243;
pub const RETURN_STATEMENT: u16 = 244;
pub const WITH_STATEMENT: u16 = 245;
pub const SWITCH_STATEMENT: u16 = 246;
pub const LABELED_STATEMENT: u16 = 247;
pub const THROW_STATEMENT: u16 = 248;
pub const TRY_STATEMENT: u16 = 249;
pub const DEBUGGER_STATEMENT: u16 = 250;
pub const VARIABLE_DECLARATION: u16 = 251;
pub const VARIABLE_DECLARATION_LIST: u16 = 252;
pub const FUNCTION_DECLARATION: u16 = 253;
pub const CLASS_DECLARATION: u16 = 254;
pub const INTERFACE_DECLARATION: u16 = 255;
pub const TYPE_ALIAS_DECLARATION: u16 = 256;
pub const ENUM_DECLARATION: u16 = 257;
pub const MODULE_DECLARATION: u16 = 258;
pub const MODULE_BLOCK: u16 = 259;
pub const CASE_BLOCK: u16 = 260;
pub const IMPORT_DECLARATION: u16 = 261;
pub const IMPORT_CLAUSE: u16 = 262;
pub const NAMESPACE_IMPORT: u16 = 263;
pub const NAMED_IMPORTS: u16 = 264;
pub const IMPORT_SPECIFIER: u16 = 265;
pub const EXPORT_ASSIGNMENT: u16 = 266;
pub const EXPORT_DECLARATION: u16 = 267;
pub const NAMED_EXPORTS: u16 = 268;
pub const EXPORT_SPECIFIER: u16 = 269;

// Clauses
pub const CASE_CLAUSE: u16 = 270;
pub const DEFAULT_CLAUSE: u16 = 271;
pub const HERITAGE_CLAUSE: u16 = 272;
pub const CATCH_CLAUSE: u16 = 273;

// Object literal and enum members
pub const PROPERTY_ASSIGNMENT: u16 = 274;
pub const SHORTHAND_PROPERTY_ASSIGNMENT: u16 = 275;
pub const SPREAD_ASSIGNMENT: u16 = 276;
pub const ENUM_MEMBER: u16 = 277;

pub const SOURCE_FILE: u16 = 278;
pub const SEMICOLON_CLASS_ELEMENT: u16 = 279;

/// Whether `kind` is a raw scanner token rather than a composite node.
#[inline]
pub fn is_token_kind(kind: u16) -> bool {
    kind <= SyntaxKind::LAST_TOKEN as u16
}

/// Type-position nodes, including the keyword types (`number`, `void`, ...).
pub fn is_type_node_kind(kind: u16) -> bool {
    if (FIRST_TYPE_NODE..=LAST_TYPE_NODE).contains(&kind) || kind == EXPRESSION_WITH_TYPE_ARGUMENTS
    {
        return true;
    }
    matches!(
        SyntaxKind::try_from_u16(kind),
        Some(
            SyntaxKind::AnyKeyword
                | SyntaxKind::UnknownKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::BigIntKeyword
                | SyntaxKind::ObjectKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::SymbolKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::UndefinedKeyword
                | SyntaxKind::NeverKeyword
        )
    )
}

pub fn is_function_like_kind(kind: u16) -> bool {
    matches!(
        kind,
        FUNCTION_DECLARATION
            | FUNCTION_EXPRESSION
            | ARROW_FUNCTION
            | METHOD_DECLARATION
            | CONSTRUCTOR
            | GET_ACCESSOR
            | SET_ACCESSOR
    )
}

/// Debug name for a node kind, used in logs and test failure messages.
pub fn kind_name(kind: u16) -> String {
    if let Some(token) = SyntaxKind::try_from_u16(kind) {
        return format!("{token:?}");
    }
    let name = match kind {
        QUALIFIED_NAME => "QualifiedName",
        COMPUTED_PROPERTY_NAME => "ComputedPropertyName",
        TYPE_PARAMETER => "TypeParameter",
        PARAMETER => "Parameter",
        DECORATOR => "Decorator",
        PROPERTY_SIGNATURE => "PropertySignature",
        PROPERTY_DECLARATION => "PropertyDeclaration",
        METHOD_SIGNATURE => "MethodSignature",
        METHOD_DECLARATION => "MethodDeclaration",
        CLASS_STATIC_BLOCK_DECLARATION => "ClassStaticBlockDeclaration",
        CONSTRUCTOR => "Constructor",
        GET_ACCESSOR => "GetAccessor",
        SET_ACCESSOR => "SetAccessor",
        CALL_SIGNATURE => "CallSignature",
        CONSTRUCT_SIGNATURE => "ConstructSignature",
        INDEX_SIGNATURE => "IndexSignature",
        TYPE_PREDICATE => "TypePredicate",
        TYPE_REFERENCE => "TypeReference",
        FUNCTION_TYPE => "FunctionType",
        CONSTRUCTOR_TYPE => "ConstructorType",
        TYPE_QUERY => "TypeQuery",
        TYPE_LITERAL => "TypeLiteral",
        ARRAY_TYPE => "ArrayType",
        TUPLE_TYPE => "TupleType",
        OPTIONAL_TYPE => "OptionalType",
        REST_TYPE => "RestType",
        UNION_TYPE => "UnionType",
        INTERSECTION_TYPE => "IntersectionType",
        CONDITIONAL_TYPE => "ConditionalType",
        INFER_TYPE => "InferType",
        PARENTHESIZED_TYPE => "ParenthesizedType",
        THIS_TYPE => "ThisType",
        TYPE_OPERATOR => "TypeOperator",
        INDEXED_ACCESS_TYPE => "IndexedAccessType",
        MAPPED_TYPE => "MappedType",
        LITERAL_TYPE => "LiteralType",
        NAMED_TUPLE_MEMBER => "NamedTupleMember",
        TEMPLATE_LITERAL_TYPE => "TemplateLiteralType",
        TEMPLATE_LITERAL_TYPE_SPAN => "TemplateLiteralTypeSpan",
        OBJECT_BINDING_PATTERN => "ObjectBindingPattern",
        ARRAY_BINDING_PATTERN => "ArrayBindingPattern",
        BINDING_ELEMENT => "BindingElement",
        ARRAY_LITERAL_EXPRESSION => "ArrayLiteralExpression",
        OBJECT_LITERAL_EXPRESSION => "ObjectLiteralExpression",
        PROPERTY_ACCESS_EXPRESSION => "PropertyAccessExpression",
        ELEMENT_ACCESS_EXPRESSION => "ElementAccessExpression",
        CALL_EXPRESSION => "CallExpression",
        NEW_EXPRESSION => "NewExpression",
        TAGGED_TEMPLATE_EXPRESSION => "TaggedTemplateExpression",
        TYPE_ASSERTION => "TypeAssertionExpression",
        PARENTHESIZED_EXPRESSION => "ParenthesizedExpression",
        FUNCTION_EXPRESSION => "FunctionExpression",
        ARROW_FUNCTION => "ArrowFunction",
        DELETE_EXPRESSION => "DeleteExpression",
        TYPE_OF_EXPRESSION => "TypeOfExpression",
        VOID_EXPRESSION => "VoidExpression",
        AWAIT_EXPRESSION => "AwaitExpression",
        PREFIX_UNARY_EXPRESSION => "PrefixUnaryExpression",
        POSTFIX_UNARY_EXPRESSION => "PostfixUnaryExpression",
        BINARY_EXPRESSION => "BinaryExpression",
        CONDITIONAL_EXPRESSION => "ConditionalExpression",
        TEMPLATE_EXPRESSION => "TemplateExpression",
        YIELD_EXPRESSION => "YieldExpression",
        SPREAD_ELEMENT => "SpreadElement",
        CLASS_EXPRESSION => "ClassExpression",
        OMITTED_EXPRESSION => "OmittedExpression",
        EXPRESSION_WITH_TYPE_ARGUMENTS => "ExpressionWithTypeArguments",
        AS_EXPRESSION => "AsExpression",
        NON_NULL_EXPRESSION => "NonNullExpression",
        SATISFIES_EXPRESSION => "SatisfiesExpression",
        TEMPLATE_SPAN => "TemplateSpan",
        BLOCK => "Block",
        EMPTY_STATEMENT => "EmptyStatement",
        VARIABLE_STATEMENT => "VariableStatement",
        EXPRESSION_STATEMENT => "ExpressionStatement",
        IF_STATEMENT => "IfStatement",
        DO_STATEMENT => "DoStatement",
        WHILE_STATEMENT => "WhileStatement",
        FOR_STATEMENT => "ForStatement",
        FOR_IN_STATEMENT => "ForInStatement",
        FOR_OF_STATEMENT => "ForOfStatement",
        CONTINUE_STATEMENT => "ContinueStatement",
        BREAK_STATEMENT => "BreakStatement",
        RETURN_STATEMENT => "ReturnStatement",
        WITH_STATEMENT => "WithStatement",
        SWITCH_STATEMENT => "SwitchStatement",
        LABELED_STATEMENT => "LabeledStatement",
        THROW_STATEMENT => "ThrowStatement",
        TRY_STATEMENT => "TryStatement",
        DEBUGGER_STATEMENT => "DebuggerStatement",
        VARIABLE_DECLARATION => "VariableDeclaration",
        VARIABLE_DECLARATION_LIST => "VariableDeclarationList",
        FUNCTION_DECLARATION => "FunctionDeclaration",
        CLASS_DECLARATION => "ClassDeclaration",
        INTERFACE_DECLARATION => "InterfaceDeclaration",
        TYPE_ALIAS_DECLARATION => "TypeAliasDeclaration",
        ENUM_DECLARATION => "EnumDeclaration",
        MODULE_DECLARATION => "ModuleDeclaration",
        MODULE_BLOCK => "ModuleBlock",
        CASE_BLOCK => "CaseBlock",
        IMPORT_DECLARATION => "ImportDeclaration",
        IMPORT_CLAUSE => "ImportClause",
        NAMESPACE_IMPORT => "NamespaceImport",
        NAMED_IMPORTS => "NamedImports",
        IMPORT_SPECIFIER => "ImportSpecifier",
        EXPORT_ASSIGNMENT => "ExportAssignment",
        EXPORT_DECLARATION => "ExportDeclaration",
        NAMED_EXPORTS => "NamedExports",
        EXPORT_SPECIFIER => "ExportSpecifier",
        CASE_CLAUSE => "CaseClause",
        DEFAULT_CLAUSE => "DefaultClause",
        HERITAGE_CLAUSE => "HeritageClause",
        CATCH_CLAUSE => "CatchClause",
        PROPERTY_ASSIGNMENT => "PropertyAssignment",
        SHORTHAND_PROPERTY_ASSIGNMENT => "ShorthandPropertyAssignment",
        SPREAD_ASSIGNMENT => "SpreadAssignment",
        ENUM_MEMBER => "EnumMember",
        SOURCE_FILE => "SourceFile",
        SEMICOLON_CLASS_ELEMENT => "SemicolonClassElement",
        _ => return format!("Kind({kind})"),
    };
    name.to_string()
}
