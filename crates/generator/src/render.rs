//! Rendering type expressions back into Go syntax

use std::fmt;

use crate::types::{Param, TypeExpr};

impl TypeExpr {
    /// Render the expression as Go source text
    pub fn render(&self) -> String {
        match self {
            TypeExpr::Named(name) => name.clone(),
            TypeExpr::Pointer(inner) => format!("*{}", inner.render()),
            TypeExpr::Slice(elem) => format!("[]{}", elem.render()),
            TypeExpr::Array { len, elem } => format!("[{}]{}", len.render(), elem.render()),
            TypeExpr::Map { key, value } => format!("map[{}]{}", key.render(), value.render()),
            TypeExpr::AnonymousInterface => "interface{}".to_string(),
            TypeExpr::Variadic(elem) => format!("...{}", elem.render()),
            TypeExpr::Qualified { package, name } => format!("{package}.{name}"),
            TypeExpr::Other { kind, text } => {
                if text.trim().is_empty() {
                    format!("<{kind}>")
                } else {
                    text.clone()
                }
            }
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Render a parameter list without the surrounding parentheses
pub fn render_params(params: &[Param]) -> String {
    params
        .iter()
        .map(|param| match &param.name {
            Some(name) => format!("{name} {}", param.ty.render()),
            None => param.ty.render(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a result list: empty, a bare type, or a parenthesized tuple
pub fn render_results(results: &[TypeExpr]) -> String {
    match results {
        [] => String::new(),
        [single] => single.render(),
        many => format!(
            "({})",
            many.iter()
                .map(TypeExpr::render)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
