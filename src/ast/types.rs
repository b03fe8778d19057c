//! Parsed file and top-level declaration types

use std::path::{Path, PathBuf};
use tree_sitter::{Node, Tree};

use imply_generator::{ImportEntry, InterfaceDecl};

/// Top-level declaration as seen by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// Import spec
    Import(ImportEntry),

    /// Type spec whose type is an interface
    Interface(InterfaceDecl),

    /// Any other type spec (struct, alias, generic interface...)
    OtherType {
        /// Declared name
        name: String,

        /// Syntax node kind of the declared type
        kind: String,
    },
}

/// Syntax tree of one Go source file
pub struct ParsedFile {
    /// File the source was read from
    path: PathBuf,

    /// Source text
    source: String,

    /// Tree-sitter syntax tree
    tree: Tree,

    /// Declared package name
    package: String,
}

impl ParsedFile {
    pub(crate) fn new(path: PathBuf, source: String, tree: Tree, package: String) -> Self {
        Self {
            path,
            source,
            tree,
            package,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name from the `package` clause
    pub fn package_name(&self) -> &str {
        &self.package
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`
    pub fn text(&self, node: Node) -> &str {
        &self.source[node.start_byte()..node.end_byte()]
    }
}

impl std::fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("path", &self.path)
            .field("package", &self.package)
            .finish()
    }
}
