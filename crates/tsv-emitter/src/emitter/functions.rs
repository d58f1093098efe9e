use super::Printer;
use tsv_parser::parser::node::{FunctionData, Node};
use tsv_parser::parser::{NodeIndex, NodeList, syntax_kind_ext};
use tsv_scanner::SyntaxKind;

impl<'a> Printer<'a> {
    // =========================================================================
    // Functions
    // =========================================================================

    /// Function declarations and expressions: `async function* name<T>(a): R { }`.
    pub(super) fn emit_function(&mut self, node: &Node) {
        let Some(func) = self.arena.get_function(node) else {
            return;
        };

        self.emit_modifiers(&func.modifiers);
        if func.is_async {
            self.write("async ");
        }
        self.write("function");
        if func.asterisk_token {
            self.write("*");
        }
        self.write_space();
        self.emit(func.name);
        self.emit_signature(&func.type_parameters, &func.parameters, func.type_annotation);
        self.emit_function_body(func.body);
    }

    pub(super) fn emit_arrow_function(&mut self, node: &Node) {
        let Some(func) = self.arena.get_function(node) else {
            return;
        };

        if func.is_async {
            self.write("async ");
        }
        if self.can_emit_simple_arrow_head(node, func) {
            self.emit_comma_separated(&func.parameters.nodes);
        } else {
            self.emit_type_parameters(&func.type_parameters);
            self.emit_parameter_list(&func.parameters);
            self.emit_type_annotation(func.type_annotation);
        }
        self.write(" => ");
        self.emit(func.body);
    }

    /// `x => x` keeps its bare parameter when the source had no parentheses.
    fn can_emit_simple_arrow_head(&self, node: &Node, func: &FunctionData) -> bool {
        let [parameter] = func.parameters.nodes.as_slice() else {
            return false;
        };
        if func.type_annotation.is_some() || func.type_parameters.is_some() || func.is_async {
            return false;
        }
        let Some(param_node) = self.arena.get(*parameter) else {
            return false;
        };
        let Some(param) = self.arena.get_parameter(param_node) else {
            return false;
        };
        param_node.pos == node.pos
            && param.modifiers.is_none()
            && !param.dot_dot_dot_token
            && !param.question_token
            && param.type_annotation.is_none()
            && param.initializer.is_none()
            && self.arena.get_identifier_text(param.name).is_some()
    }

    /// Type parameters, parameters and return type.
    fn emit_signature(
        &mut self,
        type_parameters: &Option<NodeList>,
        parameters: &NodeList,
        return_type: NodeIndex,
    ) {
        self.emit_type_parameters(type_parameters);
        self.emit_parameter_list(parameters);
        self.emit_type_annotation(return_type);
    }

    /// Block body, or `;` for overloads and ambient declarations.
    fn emit_function_body(&mut self, body: NodeIndex) {
        if body.is_some() {
            self.write_space();
            self.emit(body);
        } else {
            self.write_semicolon();
        }
    }

    pub(super) fn emit_parameter_list(&mut self, parameters: &NodeList) {
        self.write("(");
        self.emit_comma_separated(&parameters.nodes);
        self.write(")");
    }

    pub(super) fn emit_type_parameters(&mut self, type_parameters: &Option<NodeList>) {
        if let Some(list) = type_parameters {
            self.write("<");
            self.emit_comma_separated(&list.nodes);
            self.write(">");
        }
    }

    /// `@dec public ...name?: T = init`
    pub(super) fn emit_parameter(&mut self, node: &Node) {
        let Some(param) = self.arena.get_parameter(node) else {
            return;
        };
        self.emit_modifiers(&param.modifiers);
        if param.dot_dot_dot_token {
            self.write("...");
        }
        self.emit(param.name);
        if param.question_token {
            self.write("?");
        }
        self.emit_type_annotation(param.type_annotation);
        self.emit_initializer(param.initializer);
    }

    /// `const T extends C = D`
    pub(super) fn emit_type_parameter(&mut self, node: &Node) {
        let Some(param) = self.arena.get_type_parameter(node) else {
            return;
        };
        self.emit_modifiers(&param.modifiers);
        self.emit(param.name);
        if param.constraint.is_some() {
            self.write(" extends ");
            self.emit(param.constraint);
        }
        if param.default.is_some() {
            self.write(" = ");
            self.emit(param.default);
        }
    }

    // =========================================================================
    // Classes
    // =========================================================================

    pub(super) fn emit_class(&mut self, node: &Node) {
        let Some(class) = self.arena.get_class(node) else {
            return;
        };

        self.emit_modifiers(&class.modifiers);
        self.write("class");
        if class.name.is_some() {
            self.write_space();
            self.emit(class.name);
        }
        self.emit_type_parameters(&class.type_parameters);
        if let Some(clauses) = &class.heritage_clauses {
            for &clause in &clauses.nodes {
                self.write_space();
                self.emit(clause);
            }
        }
        self.write_space();
        self.emit_members(&class.members);
    }

    /// `{ member member }`, an empty body prints `{ }`.
    pub(super) fn emit_members(&mut self, members: &NodeList) {
        self.write("{");
        for &member in &members.nodes {
            self.write_line();
            self.emit(member);
        }
        self.write_line();
        self.write("}");
    }

    pub(super) fn emit_heritage_clause(&mut self, node: &Node) {
        let Some(heritage) = self.arena.get_heritage_clause(node) else {
            return;
        };
        self.write(if heritage.token == SyntaxKind::ImplementsKeyword as u16 {
            "implements "
        } else {
            "extends "
        });
        self.emit_comma_separated(&heritage.types.nodes);
    }

    pub(super) fn emit_property_declaration(&mut self, node: &Node) {
        let Some(prop) = self.arena.get_property_decl(node) else {
            return;
        };
        self.emit_modifiers(&prop.modifiers);
        self.emit(prop.name);
        if prop.question_token {
            self.write("?");
        }
        if prop.exclamation_token {
            self.write("!");
        }
        self.emit_type_annotation(prop.type_annotation);
        self.emit_initializer(prop.initializer);
        self.write_semicolon();
    }

    /// Class methods and object literal methods.
    pub(super) fn emit_method_declaration(&mut self, node: &Node) {
        let Some(method) = self.arena.get_method_decl(node) else {
            return;
        };
        self.emit_modifiers(&method.modifiers);
        if method.asterisk_token {
            self.write("*");
        }
        self.emit(method.name);
        if method.question_token {
            self.write("?");
        }
        self.emit_signature(&method.type_parameters, &method.parameters, method.type_annotation);
        self.emit_function_body(method.body);
    }

    pub(super) fn emit_constructor(&mut self, node: &Node) {
        let Some(ctor) = self.arena.get_constructor(node) else {
            return;
        };
        self.emit_modifiers(&ctor.modifiers);
        self.write("constructor");
        self.emit_signature(&ctor.type_parameters, &ctor.parameters, NodeIndex::NONE);
        self.emit_function_body(ctor.body);
    }

    pub(super) fn emit_accessor(&mut self, node: &Node) {
        let Some(accessor) = self.arena.get_accessor(node) else {
            return;
        };
        self.emit_modifiers(&accessor.modifiers);
        self.write(if node.kind == syntax_kind_ext::GET_ACCESSOR {
            "get "
        } else {
            "set "
        });
        self.emit(accessor.name);
        self.emit_signature(
            &accessor.type_parameters,
            &accessor.parameters,
            accessor.type_annotation,
        );
        self.emit_function_body(accessor.body);
    }

    pub(super) fn emit_static_block(&mut self, node: &Node) {
        let Some(block) = self.arena.get_static_block(node) else {
            return;
        };
        self.write("static ");
        self.emit(block.body);
    }

    /// `[key: string]: T;` in classes, interfaces and type literals.
    pub(super) fn emit_index_signature(&mut self, node: &Node) {
        let Some(signature) = self.arena.get_index_signature(node) else {
            return;
        };
        self.emit_modifiers(&signature.modifiers);
        self.write("[");
        self.emit_comma_separated(&signature.parameters.nodes);
        self.write("]");
        self.emit_type_annotation(signature.type_annotation);
        self.write_semicolon();
    }
}
