//! NodeArena creation methods (add_* methods).
//!
//! Nodes are built bottom-up: children exist before their parent, so every
//! `add_*` call links the payload's children to the new node's index.

use super::base::NodeIndex;
use super::node::*;

macro_rules! add_methods {
    ($($(#[$meta:meta])* $method:ident($pool:ident, $data:ty);)+) => {
        $(
            $(#[$meta])*
            pub fn $method(&mut self, kind: u16, pos: u32, end: u32, data: $data) -> NodeIndex {
                let data_index = self.$pool.len() as u32;
                let index = self.push_node(Node::with_data(kind, pos, end, data_index), &data);
                self.$pool.push(data);
                index
            }
        )+
    };
}

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow in huge files.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with pre-allocated capacity for the hottest pools.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(Self::MAX_NODE_PREALLOC);
        NodeArena {
            nodes: Vec::with_capacity(safe_capacity),
            extended_info: Vec::with_capacity(safe_capacity),
            identifiers: Vec::with_capacity(safe_capacity / 4),
            literals: Vec::with_capacity(safe_capacity / 8),
            binary_exprs: Vec::with_capacity(safe_capacity / 8),
            call_exprs: Vec::with_capacity(safe_capacity / 8),
            access_exprs: Vec::with_capacity(safe_capacity / 8),
            blocks: Vec::with_capacity(safe_capacity / 16),
            source_files: Vec::with_capacity(1),
            ..NodeArena::default()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push_node(&mut self, node: Node, data: &dyn NodeChildren) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        let info = &mut self.extended_info;
        data.for_each_child(&mut |child| {
            if let Some(entry) = info.get_mut(child.0 as usize) {
                entry.parent = index;
            }
        });
        index
    }

    /// Add a node without payload (keywords, `;`, omitted expressions).
    pub fn add_token(&mut self, kind: u16, pos: u32, end: u32) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind, pos, end));
        self.extended_info.push(ExtendedNodeInfo::default());
        index
    }

    /// Overwrite the packed flags of a node.
    pub fn set_flags(&mut self, index: NodeIndex, flags: u16) {
        if let Some(node) = self.nodes.get_mut(index.0 as usize) {
            node.flags = flags;
        }
    }

    /// OR additional flags into a node.
    pub fn add_flags(&mut self, index: NodeIndex, flags: u16) {
        if let Some(node) = self.nodes.get_mut(index.0 as usize) {
            node.flags |= flags;
        }
    }

    add_methods! {
        add_identifier(identifiers, IdentifierData);
        add_literal(literals, LiteralData);
        add_qualified_name(qualified_names, QualifiedNameData);
        add_computed_property(computed_properties, ComputedPropertyData);
        add_decorator(decorators, DecoratorData);
        add_binary_expr(binary_exprs, BinaryExprData);
        add_unary_expr(unary_exprs, UnaryExprData);
        add_unary_expr_ex(unary_exprs_ex, UnaryExprDataEx);
        add_call_expr(call_exprs, CallExprData);
        add_access_expr(access_exprs, AccessExprData);
        add_conditional_expr(conditional_exprs, ConditionalExprData);
        add_literal_expr(literal_exprs, LiteralExprData);
        add_parenthesized(parenthesized, ParenthesizedData);
        add_type_assertion(type_assertions, TypeAssertionData);
        add_template_expr(template_exprs, TemplateExprData);
        add_template_span(template_spans, TemplateSpanData);
        add_tagged_template(tagged_templates, TaggedTemplateData);
        add_property_assignment(property_assignments, PropertyAssignmentData);
        add_shorthand_property(shorthand_properties, ShorthandPropertyData);
        add_function(functions, FunctionData);
        add_class(classes, ClassData);
        add_interface(interfaces, InterfaceData);
        add_type_alias(type_aliases, TypeAliasData);
        add_enum(enums, EnumData);
        add_enum_member(enum_members, EnumMemberData);
        add_module(modules, ModuleData);
        add_static_block(static_blocks, StaticBlockData);
        add_signature(signatures, SignatureData);
        add_index_signature(index_signatures, IndexSignatureData);
        add_property_decl(property_decls, PropertyDeclData);
        add_method_decl(method_decls, MethodDeclData);
        add_constructor(constructors, ConstructorData);
        add_accessor(accessors, AccessorData);
        add_parameter(parameters, ParameterData);
        add_type_parameter(type_parameters, TypeParameterData);
        add_heritage_clause(heritage_clauses, HeritageData);
        add_expr_with_type_args(expr_with_type_args, ExprWithTypeArgsData);
        add_if_statement(if_statements, IfStatementData);
        add_loop(loops, LoopData);
        add_for_in_of(for_in_of, ForInOfData);
        add_block(blocks, BlockData);
        add_variable(variables, VariableData);
        add_variable_declaration(variable_declarations, VariableDeclarationData);
        add_return(return_data, ReturnData);
        add_expr_statement(expr_statements, ExprStatementData);
        add_switch(switch_data, SwitchData);
        add_case_clause(case_clauses, CaseClauseData);
        add_try(try_data, TryData);
        add_catch_clause(catch_clauses, CatchClauseData);
        add_labeled(labeled_data, LabeledData);
        add_jump(jump_data, JumpData);
        add_with(with_data, WithData);
        add_binding_pattern(binding_patterns, BindingPatternData);
        add_binding_element(binding_elements, BindingElementData);
        add_type_ref(type_refs, TypeRefData);
        add_composite_type(composite_types, CompositeTypeData);
        add_function_type(function_types, FunctionTypeData);
        add_type_query(type_queries, TypeQueryData);
        add_type_literal(type_literals, TypeLiteralData);
        add_array_type(array_types, ArrayTypeData);
        add_tuple_type(tuple_types, TupleTypeData);
        add_wrapped_type(wrapped_types, WrappedTypeData);
        add_conditional_type(conditional_types, ConditionalTypeData);
        add_infer_type(infer_types, InferTypeData);
        add_type_operator(type_operators, TypeOperatorData);
        add_indexed_access_type(indexed_access_types, IndexedAccessTypeData);
        add_mapped_type(mapped_types, MappedTypeData);
        add_literal_type(literal_types, LiteralTypeData);
        add_named_tuple_member(named_tuple_members, NamedTupleMemberData);
        add_type_predicate(type_predicates, TypePredicateData);
        add_import_decl(import_decls, ImportDeclData);
        add_import_clause(import_clauses, ImportClauseData);
        add_named_imports(named_imports, NamedImportsData);
        add_specifier(specifiers, SpecifierData);
        add_export_decl(export_decls, ExportDeclData);
        add_export_assignment(export_assignments, ExportAssignmentData);
        /// The source file is always the last node added.
        add_source_file(source_files, SourceFileData);
    }
}
