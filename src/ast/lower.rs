//! Lowering tree-sitter nodes into declarations and type expressions

use tracing::{trace, warn};
use tree_sitter::Node;

use super::types::{Declaration, ParsedFile};
use imply_generator::{ImportEntry, InterfaceDecl, MethodSig, Param, TypeExpr};

impl ParsedFile {
    /// Import and type specs in source order, including those declared
    /// inside function bodies
    ///
    /// Specs are lowered lazily, so a consumer that stops early never looks at
    /// later declarations.
    pub fn declarations(&self) -> impl Iterator<Item = Declaration> + '_ {
        let root = self.root();
        let mut cursor = root.walk();
        let top_level: Vec<Node> = root.named_children(&mut cursor).collect();

        top_level
            .into_iter()
            .flat_map(spec_nodes)
            .filter_map(move |spec| self.lower_spec(spec))
    }

    fn lower_spec(&self, spec: Node) -> Option<Declaration> {
        trace!("Visiting {} at line {}", spec.kind(), spec.start_position().row + 1);

        match spec.kind() {
            "import_spec" => self.lower_import(spec).map(Declaration::Import),
            "type_spec" => self.lower_type_spec(spec),
            "type_alias" => Some(Declaration::OtherType {
                name: self.field_text(spec, "name")?.to_string(),
                kind: "type_alias".to_string(),
            }),
            _ => None,
        }
    }

    fn lower_import(&self, spec: Node) -> Option<ImportEntry> {
        let path = self
            .field_text(spec, "path")?
            .trim_matches(|c| c == '"' || c == '`');
        let alias = self.field_text(spec, "name").map(str::to_string);
        Some(ImportEntry::new(alias, path))
    }

    fn lower_type_spec(&self, spec: Node) -> Option<Declaration> {
        let name = self.field_text(spec, "name")?.to_string();
        let ty = spec.child_by_field_name("type")?;

        if ty.kind() != "interface_type" {
            return Some(Declaration::OtherType {
                name,
                kind: ty.kind().to_string(),
            });
        }

        if spec.child_by_field_name("type_parameters").is_some() {
            warn!("Skipping generic interface {}", name);
            return Some(Declaration::OtherType {
                name,
                kind: "generic_interface".to_string(),
            });
        }

        Some(Declaration::Interface(self.lower_interface(name, ty)))
    }

    fn lower_interface(&self, name: String, body: Node) -> InterfaceDecl {
        let mut methods = Vec::new();
        let mut cursor = body.walk();

        for element in body.named_children(&mut cursor) {
            match element.kind() {
                "method_spec" | "method_elem" => methods.push(self.lower_method(element)),
                "comment" => {}
                other => warn!(
                    "Skipping embedded element `{}` ({}) in interface {}",
                    self.text(element),
                    other,
                    name
                ),
            }
        }

        InterfaceDecl { name, methods }
    }

    fn lower_method(&self, method: Node) -> MethodSig {
        let name = self.field_text(method, "name").unwrap_or_default().to_string();

        let params = method
            .child_by_field_name("parameters")
            .map(|list| self.lower_params(list))
            .unwrap_or_default();

        let results = match method.child_by_field_name("result") {
            Some(list) if list.kind() == "parameter_list" => self
                .lower_params(list)
                .into_iter()
                .map(|param| param.ty)
                .collect(),
            Some(single) => vec![self.lower_type(single)],
            None => Vec::new(),
        };

        MethodSig {
            name,
            params,
            results,
        }
    }

    /// Lower a parameter list, one `Param` per declared name
    fn lower_params(&self, list: Node) -> Vec<Param> {
        let mut params = Vec::new();
        let mut cursor = list.walk();

        for decl in list.named_children(&mut cursor) {
            let ty = match decl.kind() {
                "parameter_declaration" => self.lower_field(decl, "type"),
                "variadic_parameter_declaration" => {
                    TypeExpr::variadic(self.lower_field(decl, "type"))
                }
                _ => continue,
            };

            let mut name_cursor = decl.walk();
            let names: Vec<String> = decl
                .children_by_field_name("name", &mut name_cursor)
                .map(|node| self.text(node).to_string())
                .collect();

            if names.is_empty() {
                params.push(Param::unnamed(ty));
            } else {
                params.extend(names.into_iter().map(|name| Param::named(name, ty.clone())));
            }
        }

        params
    }

    fn lower_type(&self, node: Node) -> TypeExpr {
        match node.kind() {
            "type_identifier" | "identifier" => TypeExpr::named(self.text(node)),
            "pointer_type" => match node.named_child(0) {
                Some(inner) => TypeExpr::pointer(self.lower_type(inner)),
                None => self.unsupported(node),
            },
            "slice_type" => TypeExpr::slice(self.lower_field(node, "element")),
            "array_type" => {
                let len = match node.child_by_field_name("length") {
                    Some(len) => self.lower_length(len),
                    None => self.unsupported(node),
                };
                TypeExpr::array(len, self.lower_field(node, "element"))
            }
            "map_type" => {
                TypeExpr::map(self.lower_field(node, "key"), self.lower_field(node, "value"))
            }
            "interface_type" => TypeExpr::AnonymousInterface,
            "qualified_type" => match (
                self.field_text(node, "package"),
                self.field_text(node, "name"),
            ) {
                (Some(package), Some(name)) => TypeExpr::qualified(package, name),
                _ => self.unsupported(node),
            },
            "parenthesized_type" => match node.named_child(0) {
                Some(inner) => self.lower_type(inner),
                None => self.unsupported(node),
            },
            _ => self.unsupported(node),
        }
    }

    fn lower_length(&self, node: Node) -> TypeExpr {
        match node.kind() {
            "int_literal" | "identifier" => TypeExpr::named(self.text(node)),
            _ => self.unsupported(node),
        }
    }

    fn lower_field(&self, node: Node, field: &str) -> TypeExpr {
        match node.child_by_field_name(field) {
            Some(child) => self.lower_type(child),
            None => TypeExpr::Other {
                kind: format!("missing_{field}"),
                text: String::new(),
            },
        }
    }

    fn unsupported(&self, node: Node) -> TypeExpr {
        let text = self.text(node).to_string();
        warn!("Unsupported type form {} `{}`", node.kind(), text);
        TypeExpr::Other {
            kind: node.kind().to_string(),
            text,
        }
    }

    fn field_text(&self, node: Node, field: &str) -> Option<&str> {
        node.child_by_field_name(field).map(|child| self.text(child))
    }
}

/// Expand a node into the import and type specs nested anywhere below it
fn spec_nodes(node: Node) -> Vec<Node> {
    match node.kind() {
        "import_spec" | "type_spec" | "type_alias" => vec![node],
        "package_clause" | "comment" => Vec::new(),
        _ if node.named_child_count() == 0 => Vec::new(),
        _ => {
            let mut cursor = node.walk();
            let specs: Vec<Node> = node.named_children(&mut cursor).flat_map(spec_nodes).collect();
            specs
        }
    }
}
