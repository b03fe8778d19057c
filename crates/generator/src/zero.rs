//! Zero-value literals for generated return statements

use crate::types::TypeExpr;

const INTEGER_TYPES: &[&str] = &[
    "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
    "uintptr", "byte", "rune",
];

const FLOAT_TYPES: &[&str] = &["float32", "float64"];

/// Literal that is a valid empty value of `ty`
pub fn zero_value(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Named(name) => named_zero_value(name),
        TypeExpr::Pointer(_)
        | TypeExpr::Slice(_)
        | TypeExpr::Map { .. }
        | TypeExpr::AnonymousInterface => "nil".to_string(),
        TypeExpr::Qualified { name, .. } if name == "Error" => "nil".to_string(),
        TypeExpr::Qualified { .. } => format!("{}{{}}", ty.render()),
        TypeExpr::Array { .. } | TypeExpr::Variadic(_) | TypeExpr::Other { .. } => {
            "nil".to_string()
        }
    }
}

fn named_zero_value(name: &str) -> String {
    match name {
        "string" => "\"\"".to_string(),
        "bool" => "false".to_string(),
        "error" => "nil".to_string(),
        n if INTEGER_TYPES.contains(&n) => "0".to_string(),
        n if FLOAT_TYPES.contains(&n) => "0.0".to_string(),
        other => format!("{other}{{}}"),
    }
}
