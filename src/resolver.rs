//! Interface and import resolution over a parsed file

use tracing::{debug, trace};

use crate::ast::{Declaration, ParsedFile};
use crate::{ImplyError, ImplyResult};
use imply_generator::{ImportSet, InterfaceDecl};

/// Interface picked for generation plus the imports seen before it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub interface: InterfaceDecl,
    pub imports: ImportSet,
}

/// Find the first interface matching `selector` (or the first interface at all)
///
/// Imports are accumulated while walking; the walk stops at the accepted
/// interface.
pub fn resolve(file: &ParsedFile, selector: Option<&str>) -> ImplyResult<Resolution> {
    resolve_declarations(file.declarations(), selector)
}

/// Resolution over any declaration sequence, in order
pub fn resolve_declarations<I>(declarations: I, selector: Option<&str>) -> ImplyResult<Resolution>
where
    I: IntoIterator<Item = Declaration>,
{
    let mut imports = ImportSet::new();

    let interface = declarations
        .into_iter()
        .filter_map(|declaration| collect(&mut imports, declaration))
        .find(|candidate| matches_selector(candidate, selector));

    match interface {
        Some(interface) => {
            debug!("Selected interface {}", interface.name);
            Ok(Resolution { interface, imports })
        }
        None => Err(ImplyError::InterfaceNotFound {
            selector: selector.map(str::to_string),
        }),
    }
}

/// Record imports into the accumulator and pass interface candidates through
fn collect(imports: &mut ImportSet, declaration: Declaration) -> Option<InterfaceDecl> {
    match declaration {
        Declaration::Import(entry) => {
            trace!("Import {} => {}", entry.alias, entry.path);
            imports.insert(entry);
            None
        }
        Declaration::Interface(interface) => Some(interface),
        Declaration::OtherType { name, kind } => {
            trace!("Skipping type {} ({})", name, kind);
            None
        }
    }
}

fn matches_selector(candidate: &InterfaceDecl, selector: Option<&str>) -> bool {
    match selector {
        Some(name) => candidate.name == name,
        None => true,
    }
}
