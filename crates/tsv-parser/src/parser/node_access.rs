//! NodeArena accessor methods.
//!
//! Typed `get_*` accessors check the node kind before indexing into a pool,
//! so a caller holding the wrong kind gets `None` instead of unrelated data.

use super::base::NodeIndex;
use super::node::*;
use super::syntax_kind_ext::*;
use tsv_scanner::{SyntaxKind, skip_trivia};

const IDENTIFIER: u16 = SyntaxKind::Identifier as u16;
const PRIVATE_IDENTIFIER: u16 = SyntaxKind::PrivateIdentifier as u16;
const NUMERIC_LITERAL: u16 = SyntaxKind::NumericLiteral as u16;
const TEMPLATE_TAIL: u16 = SyntaxKind::TemplateTail as u16;

macro_rules! kind_getters {
    ($($name:ident => $pool:ident: $data:ty [$kinds:pat];)+) => {
        impl NodeArena {
            $(
                #[inline]
                pub fn $name(&self, node: &Node) -> Option<&$data> {
                    if node.has_data() && matches!(node.kind, $kinds) {
                        self.$pool.get(node.data_index as usize)
                    } else {
                        None
                    }
                }
            )+

            /// Payload of any node as a child enumerator.
            fn children_data(&self, node: &Node) -> Option<&dyn NodeChildren> {
                if !node.has_data() {
                    return None;
                }
                let i = node.data_index as usize;
                match node.kind {
                    $($kinds => self.$pool.get(i).map(|d| d as &dyn NodeChildren),)+
                    _ => None,
                }
            }
        }
    };
}

kind_getters! {
    get_identifier => identifiers: IdentifierData [IDENTIFIER | PRIVATE_IDENTIFIER];
    get_literal => literals: LiteralData [NUMERIC_LITERAL..=TEMPLATE_TAIL];
    get_qualified_name => qualified_names: QualifiedNameData [QUALIFIED_NAME];
    get_computed_property => computed_properties: ComputedPropertyData [COMPUTED_PROPERTY_NAME];
    get_decorator => decorators: DecoratorData [DECORATOR];
    get_type_parameter => type_parameters: TypeParameterData [TYPE_PARAMETER];
    get_parameter => parameters: ParameterData [PARAMETER];
    get_signature => signatures: SignatureData
        [PROPERTY_SIGNATURE | METHOD_SIGNATURE | CALL_SIGNATURE | CONSTRUCT_SIGNATURE];
    get_property_decl => property_decls: PropertyDeclData [PROPERTY_DECLARATION];
    get_method_decl => method_decls: MethodDeclData [METHOD_DECLARATION];
    get_static_block => static_blocks: StaticBlockData [CLASS_STATIC_BLOCK_DECLARATION];
    get_constructor => constructors: ConstructorData [CONSTRUCTOR];
    get_accessor => accessors: AccessorData [GET_ACCESSOR | SET_ACCESSOR];
    get_index_signature => index_signatures: IndexSignatureData [INDEX_SIGNATURE];
    get_type_predicate => type_predicates: TypePredicateData [TYPE_PREDICATE];
    get_type_ref => type_refs: TypeRefData [TYPE_REFERENCE];
    get_function_type => function_types: FunctionTypeData [FUNCTION_TYPE | CONSTRUCTOR_TYPE];
    get_type_query => type_queries: TypeQueryData [TYPE_QUERY];
    get_type_literal => type_literals: TypeLiteralData [TYPE_LITERAL];
    get_array_type => array_types: ArrayTypeData [ARRAY_TYPE];
    get_tuple_type => tuple_types: TupleTypeData [TUPLE_TYPE];
    get_wrapped_type => wrapped_types: WrappedTypeData
        [OPTIONAL_TYPE | REST_TYPE | PARENTHESIZED_TYPE];
    get_composite_type => composite_types: CompositeTypeData [UNION_TYPE | INTERSECTION_TYPE];
    get_conditional_type => conditional_types: ConditionalTypeData [CONDITIONAL_TYPE];
    get_infer_type => infer_types: InferTypeData [INFER_TYPE];
    get_type_operator => type_operators: TypeOperatorData [TYPE_OPERATOR];
    get_indexed_access_type => indexed_access_types: IndexedAccessTypeData [INDEXED_ACCESS_TYPE];
    get_mapped_type => mapped_types: MappedTypeData [MAPPED_TYPE];
    get_literal_type => literal_types: LiteralTypeData [LITERAL_TYPE];
    get_named_tuple_member => named_tuple_members: NamedTupleMemberData [NAMED_TUPLE_MEMBER];
    get_binding_pattern => binding_patterns: BindingPatternData
        [OBJECT_BINDING_PATTERN | ARRAY_BINDING_PATTERN];
    get_binding_element => binding_elements: BindingElementData [BINDING_ELEMENT];
    get_literal_expr => literal_exprs: LiteralExprData
        [ARRAY_LITERAL_EXPRESSION | OBJECT_LITERAL_EXPRESSION];
    get_access_expr => access_exprs: AccessExprData
        [PROPERTY_ACCESS_EXPRESSION | ELEMENT_ACCESS_EXPRESSION];
    get_call_expr => call_exprs: CallExprData [CALL_EXPRESSION | NEW_EXPRESSION];
    get_tagged_template => tagged_templates: TaggedTemplateData [TAGGED_TEMPLATE_EXPRESSION];
    get_type_assertion => type_assertions: TypeAssertionData
        [TYPE_ASSERTION | AS_EXPRESSION | SATISFIES_EXPRESSION];
    get_parenthesized => parenthesized: ParenthesizedData [PARENTHESIZED_EXPRESSION];
    get_function => functions: FunctionData
        [FUNCTION_DECLARATION | FUNCTION_EXPRESSION | ARROW_FUNCTION];
    get_unary_expr_ex => unary_exprs_ex: UnaryExprDataEx
        [DELETE_EXPRESSION
            | TYPE_OF_EXPRESSION
            | VOID_EXPRESSION
            | AWAIT_EXPRESSION
            | YIELD_EXPRESSION
            | SPREAD_ELEMENT
            | NON_NULL_EXPRESSION
            | SPREAD_ASSIGNMENT];
    get_unary_expr => unary_exprs: UnaryExprData
        [PREFIX_UNARY_EXPRESSION | POSTFIX_UNARY_EXPRESSION];
    get_binary_expr => binary_exprs: BinaryExprData [BINARY_EXPRESSION];
    get_conditional_expr => conditional_exprs: ConditionalExprData [CONDITIONAL_EXPRESSION];
    get_template_expr => template_exprs: TemplateExprData
        [TEMPLATE_EXPRESSION | TEMPLATE_LITERAL_TYPE];
    get_template_span => template_spans: TemplateSpanData
        [TEMPLATE_SPAN | TEMPLATE_LITERAL_TYPE_SPAN];
    get_class => classes: ClassData [CLASS_DECLARATION | CLASS_EXPRESSION];
    get_expr_with_type_args => expr_with_type_args: ExprWithTypeArgsData
        [EXPRESSION_WITH_TYPE_ARGUMENTS];
    get_block => blocks: BlockData [BLOCK | MODULE_BLOCK | CASE_BLOCK];
    get_variable => variables: VariableData [VARIABLE_STATEMENT | VARIABLE_DECLARATION_LIST];
    get_variable_declaration => variable_declarations: VariableDeclarationData
        [VARIABLE_DECLARATION];
    get_expression_statement => expr_statements: ExprStatementData [EXPRESSION_STATEMENT];
    get_if_statement => if_statements: IfStatementData [IF_STATEMENT];
    get_loop => loops: LoopData [DO_STATEMENT | WHILE_STATEMENT | FOR_STATEMENT];
    get_for_in_of => for_in_of: ForInOfData [FOR_IN_STATEMENT | FOR_OF_STATEMENT];
    get_jump_data => jump_data: JumpData [BREAK_STATEMENT | CONTINUE_STATEMENT];
    get_return_statement => return_data: ReturnData [RETURN_STATEMENT | THROW_STATEMENT];
    get_with_statement => with_data: WithData [WITH_STATEMENT];
    get_switch => switch_data: SwitchData [SWITCH_STATEMENT];
    get_labeled_statement => labeled_data: LabeledData [LABELED_STATEMENT];
    get_try => try_data: TryData [TRY_STATEMENT];
    get_interface => interfaces: InterfaceData [INTERFACE_DECLARATION];
    get_type_alias => type_aliases: TypeAliasData [TYPE_ALIAS_DECLARATION];
    get_enum => enums: EnumData [ENUM_DECLARATION];
    get_module => modules: ModuleData [MODULE_DECLARATION];
    get_import_decl => import_decls: ImportDeclData [IMPORT_DECLARATION];
    get_import_clause => import_clauses: ImportClauseData [IMPORT_CLAUSE];
    get_named_imports => named_imports: NamedImportsData
        [NAMESPACE_IMPORT | NAMED_IMPORTS | NAMED_EXPORTS];
    get_specifier => specifiers: SpecifierData [IMPORT_SPECIFIER | EXPORT_SPECIFIER];
    get_export_assignment => export_assignments: ExportAssignmentData [EXPORT_ASSIGNMENT];
    get_export_decl => export_decls: ExportDeclData [EXPORT_DECLARATION];
    get_case_clause => case_clauses: CaseClauseData [CASE_CLAUSE | DEFAULT_CLAUSE];
    get_heritage_clause => heritage_clauses: HeritageData [HERITAGE_CLAUSE];
    get_catch_clause => catch_clauses: CatchClauseData [CATCH_CLAUSE];
    get_property_assignment => property_assignments: PropertyAssignmentData
        [PROPERTY_ASSIGNMENT];
    get_shorthand_property => shorthand_properties: ShorthandPropertyData
        [SHORTHAND_PROPERTY_ASSIGNMENT];
    get_enum_member => enum_members: EnumMemberData [ENUM_MEMBER];
    get_source_file => source_files: SourceFileData [SOURCE_FILE];
}

impl NodeArena {
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Parent of a node, `NodeIndex::NONE` for the source file or unknown nodes.
    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    /// Walk from `index` (inclusive) to the root.
    pub fn ancestors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        std::iter::successors(Some(index).filter(|i| i.is_some()), move |&current| {
            Some(self.parent_of(current)).filter(|p| p.is_some())
        })
    }

    pub fn get_source_file_at(&self, index: NodeIndex) -> Option<&SourceFileData> {
        self.get(index).and_then(|node| self.get_source_file(node))
    }

    /// Source text of the parsed file.
    pub fn source_text(&self) -> Option<&str> {
        self.source_files.last().map(|sf| &*sf.text)
    }

    /// Identifier text, `None` for non-identifiers.
    pub fn get_identifier_text(&self, index: NodeIndex) -> Option<&str> {
        self.get(index)
            .and_then(|node| self.get_identifier(node))
            .map(|data| data.escaped_text.as_str())
    }

    /// Start of the node's first token, leading trivia skipped.
    pub fn get_start(&self, index: NodeIndex) -> u32 {
        let Some(node) = self.get(index) else {
            return 0;
        };
        match self.source_text() {
            Some(text) if (node.pos as usize) < text.len() => {
                (skip_trivia(text, node.pos as usize) as u32).min(node.end.max(node.pos))
            }
            _ => node.pos,
        }
    }

    /// Visit the direct children of a node in source order.
    pub fn for_each_child(&self, index: NodeIndex, f: &mut dyn FnMut(NodeIndex)) {
        let Some(node) = self.get(index) else {
            return;
        };
        match node.kind {
            // `<T>expr`: the type precedes the operand
            TYPE_ASSERTION => {
                if let Some(data) = self.get_type_assertion(node) {
                    for child in [data.type_node, data.expression] {
                        if child.is_some() {
                            f(child);
                        }
                    }
                }
            }
            // `do statement while (condition)`
            DO_STATEMENT => {
                if let Some(data) = self.get_loop(node) {
                    for child in [data.statement, data.condition] {
                        if child.is_some() {
                            f(child);
                        }
                    }
                }
            }
            _ => {
                if let Some(data) = self.children_data(node) {
                    data.for_each_child(f);
                }
            }
        }
    }

    /// Direct children of a node in source order.
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children = Vec::new();
        self.for_each_child(index, &mut |child| children.push(child));
        children
    }

    pub fn is_type_node(&self, index: NodeIndex) -> bool {
        self.get(index).is_some_and(|node| is_type_node_kind(node.kind))
    }

    /// Parameters of any function-like node.
    pub fn function_parameters(&self, index: NodeIndex) -> Option<&super::base::NodeList> {
        let node = self.get(index)?;
        match node.kind {
            FUNCTION_DECLARATION | FUNCTION_EXPRESSION | ARROW_FUNCTION => {
                self.get_function(node).map(|f| &f.parameters)
            }
            METHOD_DECLARATION => self.get_method_decl(node).map(|m| &m.parameters),
            CONSTRUCTOR => self.get_constructor(node).map(|c| &c.parameters),
            GET_ACCESSOR | SET_ACCESSOR => self.get_accessor(node).map(|a| &a.parameters),
            _ => None,
        }
    }
}
