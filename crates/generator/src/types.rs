//! Interface model shared by the resolver and the emitter

use std::collections::BTreeSet;

/// Go type expression as it appears in a method signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Plain identifier (`string`, `User`, `error`)
    Named(String),

    /// Pointer type (`*T`)
    Pointer(Box<TypeExpr>),

    /// Slice type (`[]T`)
    Slice(Box<TypeExpr>),

    /// Array type (`[N]T`)
    Array {
        len: Box<TypeExpr>,
        elem: Box<TypeExpr>,
    },

    /// Map type (`map[K]V`)
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },

    /// Inline interface type, always rendered as `interface{}`
    AnonymousInterface,

    /// Trailing variadic parameter (`...T`)
    Variadic(Box<TypeExpr>),

    /// Package-qualified reference (`pkg.Type`)
    Qualified { package: String, name: String },

    /// Any syntactic form not covered above (channels, func types, generics...)
    Other {
        /// Syntax node kind that produced this expression
        kind: String,

        /// Verbatim source text of the expression
        text: String,
    },
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::Slice(Box::new(elem))
    }

    pub fn array(len: TypeExpr, elem: TypeExpr) -> Self {
        TypeExpr::Array {
            len: Box::new(len),
            elem: Box::new(elem),
        }
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn variadic(elem: TypeExpr) -> Self {
        TypeExpr::Variadic(Box::new(elem))
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Qualified {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Collect the package aliases this expression refers to
    pub fn collect_packages<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            TypeExpr::Qualified { package, .. } => {
                out.insert(package.as_str());
            }
            TypeExpr::Pointer(inner) | TypeExpr::Slice(inner) | TypeExpr::Variadic(inner) => {
                inner.collect_packages(out)
            }
            TypeExpr::Array { len, elem } => {
                len.collect_packages(out);
                elem.collect_packages(out);
            }
            TypeExpr::Map { key, value } => {
                key.collect_packages(out);
                value.collect_packages(out);
            }
            TypeExpr::Named(_) | TypeExpr::AnonymousInterface | TypeExpr::Other { .. } => {}
        }
    }
}

/// Method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name, absent for unnamed parameters
    pub name: Option<String>,

    /// Parameter type
    pub ty: TypeExpr,
}

impl Param {
    pub fn named(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    pub fn unnamed(ty: TypeExpr) -> Self {
        Self { name: None, ty }
    }
}

/// Method signature declared inside an interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSig {
    /// Method name
    pub name: String,

    /// Parameters in declaration order
    pub params: Vec<Param>,

    /// Result types in declaration order
    pub results: Vec<TypeExpr>,
}

/// Resolved interface declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    /// Interface name
    pub name: String,

    /// Methods in source declaration order
    pub methods: Vec<MethodSig>,
}

impl InterfaceDecl {
    /// Package aliases referenced by any parameter or result type
    pub fn referenced_packages(&self) -> BTreeSet<&str> {
        let mut packages = BTreeSet::new();
        for method in &self.methods {
            for param in &method.params {
                param.ty.collect_packages(&mut packages);
            }
            for result in &method.results {
                result.collect_packages(&mut packages);
            }
        }
        packages
    }
}

/// Single import spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    /// Name the package is referred to by in the file
    pub alias: String,

    /// Import path without quotes
    pub path: String,
}

impl ImportEntry {
    /// Build an entry, defaulting the alias to the last path segment
    pub fn new(alias: Option<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        let alias = alias.unwrap_or_else(|| last_segment(&path).to_string());
        Self { alias, path }
    }

    /// Whether the alias can be left out when writing the import back
    pub fn is_implicit(&self) -> bool {
        self.alias == last_segment(&self.path)
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Imports keyed by alias, iterated in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    entries: Vec<ImportEntry>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an import; a repeated alias replaces the earlier path in place
    pub fn insert(&mut self, entry: ImportEntry) {
        match self.entries.iter_mut().find(|e| e.alias == entry.alias) {
            Some(existing) => existing.path = entry.path,
            None => self.entries.push(entry),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImportEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only the entries whose alias satisfies `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&ImportEntry) -> bool) {
        self.entries.retain(|e| keep(e));
    }
}

impl FromIterator<ImportEntry> for ImportSet {
    fn from_iter<I: IntoIterator<Item = ImportEntry>>(iter: I) -> Self {
        let mut set = ImportSet::new();
        for entry in iter {
            set.insert(entry);
        }
        set
    }
}
