//! Go parser using tree-sitter

use std::path::Path;
use tracing::debug;
use tree_sitter::{Node, Parser};

use super::types::ParsedFile;
use crate::{ImplyError, ImplyResult};

/// Longest snippet of offending source quoted in a syntax error
const SNIPPET_LEN: usize = 40;

/// Go source parser
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Create a parser with the Go grammar loaded
    pub fn new() -> ImplyResult<Self> {
        let mut parser = Parser::new();
        parser.set_language(tree_sitter_go::language())?;
        Ok(Self { parser })
    }

    /// Parse Go source text; any syntax error is fatal
    pub fn parse(&mut self, source: &str, path: &Path) -> ImplyResult<ParsedFile> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ImplyError::Parse {
                path: path.to_path_buf(),
                line: 1,
                column: 1,
                message: "parser produced no syntax tree".to_string(),
            })?;

        let root = tree.root_node();
        if let Some(bad) = first_error(root) {
            let position = bad.start_position();
            return Err(ImplyError::Parse {
                path: path.to_path_buf(),
                line: position.row + 1,
                column: position.column + 1,
                message: describe_error(bad, source),
            });
        }

        let package = package_name(root, source).ok_or_else(|| ImplyError::Parse {
            path: path.to_path_buf(),
            line: 1,
            column: 1,
            message: "missing package clause".to_string(),
        })?;
        debug!("Parsed {:?} (package {})", path, package);

        Ok(ParsedFile::new(
            path.to_path_buf(),
            source.to_string(),
            tree,
            package,
        ))
    }
}

/// Find the first ERROR or MISSING node in document order
fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn describe_error(node: Node, source: &str) -> String {
    if node.is_missing() {
        return format!("syntax error: missing `{}`", node.kind());
    }

    let text = &source[node.start_byte()..node.end_byte()];
    let snippet: String = text
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(SNIPPET_LEN)
        .collect();
    if snippet.trim().is_empty() {
        "syntax error".to_string()
    } else {
        format!("syntax error near `{}`", snippet.trim())
    }
}

/// Extract the package name from the package clause
fn package_name(root: Node, source: &str) -> Option<String> {
    let mut cursor = root.walk();
    let clause = root
        .named_children(&mut cursor)
        .find(|node| node.kind() == "package_clause")?;

    let mut clause_cursor = clause.walk();
    let name = clause
        .named_children(&mut clause_cursor)
        .find(|node| node.kind() == "package_identifier")
        .map(|node| source[node.start_byte()..node.end_byte()].to_string());
    name
}
