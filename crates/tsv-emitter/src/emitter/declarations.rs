//! Declaration Emission Module
//!
//! Interfaces, type aliases, enums, namespaces, imports and exports.

use super::Printer;
use tsv_parser::parser::node::Node;
use tsv_parser::parser::syntax_kind_ext;
use tsv_scanner::SyntaxKind;

impl<'a> Printer<'a> {
    // =========================================================================
    // Type declarations
    // =========================================================================

    /// `interface I<T> extends A, B { a: string; }`
    pub(super) fn emit_interface(&mut self, node: &Node) {
        let Some(interface) = self.arena.get_interface(node) else {
            return;
        };
        self.emit_modifiers(&interface.modifiers);
        self.write("interface ");
        self.emit(interface.name);
        self.emit_type_parameters(&interface.type_parameters);
        if let Some(clauses) = &interface.heritage_clauses {
            for &clause in &clauses.nodes {
                self.write_space();
                self.emit(clause);
            }
        }
        self.write_space();
        self.emit_members(&interface.members);
    }

    pub(super) fn emit_type_alias(&mut self, node: &Node) {
        let Some(alias) = self.arena.get_type_alias(node) else {
            return;
        };
        self.emit_modifiers(&alias.modifiers);
        self.write("type ");
        self.emit(alias.name);
        self.emit_type_parameters(&alias.type_parameters);
        self.write(" = ");
        self.emit(alias.type_node);
        self.write_semicolon();
    }

    /// `enum E { A = 1, B }`
    pub(super) fn emit_enum(&mut self, node: &Node) {
        let Some(enum_decl) = self.arena.get_enum(node) else {
            return;
        };
        self.emit_modifiers(&enum_decl.modifiers);
        self.write("enum ");
        self.emit(enum_decl.name);
        self.write(" {");
        let last = enum_decl.members.nodes.len().saturating_sub(1);
        for (i, &member) in enum_decl.members.nodes.iter().enumerate() {
            self.write_line();
            self.emit(member);
            if i < last || enum_decl.members.has_trailing_comma {
                self.write(",");
            }
        }
        self.write_line();
        self.write("}");
    }

    pub(super) fn emit_enum_member(&mut self, node: &Node) {
        let Some(member) = self.arena.get_enum_member(node) else {
            return;
        };
        self.emit(member.name);
        self.emit_initializer(member.initializer);
    }

    /// `namespace A.B { }`, `module "m" { }` and `declare global { }`.
    ///
    /// Dotted names nest a declaration as the body; the chain is flattened
    /// back into one qualified header.
    pub(super) fn emit_module(&mut self, node: &Node) {
        let Some(module) = self.arena.get_module(node) else {
            return;
        };
        self.emit_modifiers(&module.modifiers);

        let name_kind = self.arena.get(module.name).map(|n| n.kind);
        let is_global = self.arena.get_identifier_text(module.name) == Some("global")
            && self.is_global_augmentation(node);
        if name_kind == Some(SyntaxKind::StringLiteral as u16) {
            self.write("module ");
        } else if !is_global {
            self.write("namespace ");
        }
        self.emit(module.name);

        let mut body = module.body;
        while let Some(body_node) = self.arena.get(body) {
            if body_node.kind != syntax_kind_ext::MODULE_DECLARATION {
                break;
            }
            let Some(inner) = self.arena.get_module(body_node) else {
                break;
            };
            self.write(".");
            self.emit(inner.name);
            body = inner.body;
        }

        if body.is_some() {
            self.write_space();
            self.emit(body);
        } else {
            self.write_semicolon();
        }
    }

    /// `global` without a `namespace`/`module` keyword in front of it.
    fn is_global_augmentation(&self, node: &Node) -> bool {
        let Some(text) = self.source_text else {
            return false;
        };
        let Some(module) = self.arena.get_module(node) else {
            return false;
        };
        let Some(name) = self.arena.get(module.name) else {
            return false;
        };
        let name_start = self.token_start(name) as usize;
        let before = text.get(..name_start).unwrap_or("").trim_end();
        !(before.ends_with("namespace") || before.ends_with("module"))
    }

    // =========================================================================
    // Imports and exports
    // =========================================================================

    pub(super) fn emit_import_declaration(&mut self, node: &Node) {
        let Some(import) = self.arena.get_import_decl(node) else {
            return;
        };
        self.emit_modifiers(&import.modifiers);
        self.write("import ");
        if import.import_clause.is_some() {
            self.emit(import.import_clause);
            self.write(" from ");
        }
        self.emit(import.module_specifier);
        self.write_semicolon();
    }

    /// `type a, { b }`
    pub(super) fn emit_import_clause(&mut self, node: &Node) {
        let Some(clause) = self.arena.get_import_clause(node) else {
            return;
        };
        if clause.is_type_only {
            self.write("type ");
        }
        self.emit(clause.name);
        if clause.name.is_some() && clause.named_bindings.is_some() {
            self.write(", ");
        }
        self.emit(clause.named_bindings);
    }

    /// `* as ns`
    pub(super) fn emit_namespace_import(&mut self, node: &Node) {
        let Some(namespace) = self.arena.get_named_imports(node) else {
            return;
        };
        self.write("* as ");
        self.emit(namespace.name);
    }

    /// `{ a, b as c }`, empty braces print `{}`.
    pub(super) fn emit_named_imports_or_exports(&mut self, node: &Node) {
        let Some(named) = self.arena.get_named_imports(node) else {
            return;
        };
        if named.elements.nodes.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{ ");
        self.emit_comma_list(&named.elements);
        self.write(" }");
    }

    pub(super) fn emit_specifier(&mut self, node: &Node) {
        let Some(specifier) = self.arena.get_specifier(node) else {
            return;
        };
        if specifier.is_type_only {
            self.write("type ");
        }
        if specifier.property_name.is_some() {
            self.emit(specifier.property_name);
            self.write(" as ");
        }
        self.emit(specifier.name);
    }

    /// `export { a } from "m"`, `export * from "m"`, `export * as ns from "m"`.
    pub(super) fn emit_export_declaration(&mut self, node: &Node) {
        let Some(export) = self.arena.get_export_decl(node) else {
            return;
        };
        self.emit_modifiers(&export.modifiers);
        self.write("export ");
        if export.is_type_only {
            self.write("type ");
        }
        if export.export_clause.is_some() {
            self.emit(export.export_clause);
        } else {
            self.write("*");
        }
        if export.module_specifier.is_some() {
            self.write(" from ");
            self.emit(export.module_specifier);
        }
        self.write_semicolon();
    }

    /// `export = x` and `export default x`.
    pub(super) fn emit_export_assignment(&mut self, node: &Node) {
        let Some(assignment) = self.arena.get_export_assignment(node) else {
            return;
        };
        self.emit_modifiers(&assignment.modifiers);
        self.write(if assignment.is_export_equals {
            "export = "
        } else {
            "export default "
        });
        self.emit(assignment.expression);
        self.write_semicolon();
    }
}
