//! Symbol catalog
//!
//! The catalog is the ordered list of GL entry points the loader resolves. The
//! list compiled into this crate lives in [`crate::raw`]; this module holds the
//! entry type, the name lookups over it, and the rules used to build such a
//! list from the registry header (which names count as vendor extensions, and
//! how the list is ordered).

use crate::raw::{Symbol, SYMBOLS};
use const_cstr::ConstCStr;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::ffi::CStr;
use std::fmt::{self, Display, Formatter};

/// Name suffixes marking a vendor extension entry point.
pub const EXTENSION_SUFFIXES: &[&str] = &["ARB", "EXT", "OVR", "NV", "AMD", "INTEL"];

/// Check whether an entry point name carries one of the recognized vendor
/// extension suffixes.
pub fn is_extension(name: &str) -> bool {
    EXTENSION_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Which entry points a catalog includes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InclusionPolicy {
    /// Core profile entry points only
    CoreOnly,
    /// Core profile entry points plus vendor extensions
    WithExtensions,
}

impl InclusionPolicy {
    /// The policy the compiled-in catalog was built with.
    pub fn compiled() -> Self {
        if cfg!(feature = "extensions") {
            InclusionPolicy::WithExtensions
        } else {
            InclusionPolicy::CoreOnly
        }
    }

    /// Check whether an entry point name is included under this policy.
    pub fn includes(self, name: &str) -> bool {
        match self {
            InclusionPolicy::CoreOnly => !is_extension(name),
            InclusionPolicy::WithExtensions => true,
        }
    }
}

impl Default for InclusionPolicy {
    fn default() -> Self {
        InclusionPolicy::CoreOnly
    }
}

/// One entry of the compiled-in catalog.
pub struct SymbolEntry {
    symbol: Symbol,
    name: ConstCStr,
    signature: &'static str,
}

impl SymbolEntry {
    pub(crate) const fn new(symbol: Symbol, name: ConstCStr, signature: &'static str) -> Self {
        Self {
            symbol,
            name,
            signature,
        }
    }

    /// The slot this entry occupies in the proc table
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The full entry point name, e.g. `glGetIntegerv`
    pub fn name(&self) -> &'static str {
        self.name.to_str()
    }

    /// The entry point name as a nul-terminated string, ready to be handed to
    /// a platform resolver
    pub fn name_cstr(&self) -> &'static CStr {
        self.name.as_cstr()
    }

    /// The Rust function pointer type the entry point is called through
    pub fn signature(&self) -> &'static str {
        self.signature
    }

    /// Whether this entry is a vendor extension
    pub fn is_extension(&self) -> bool {
        is_extension(self.name())
    }
}

impl fmt::Debug for SymbolEntry {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("SymbolEntry")
            .field("index", &(self.symbol as usize))
            .field("name", &self.name())
            .field("signature", &self.signature)
            .finish()
    }
}

impl Display for SymbolEntry {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

lazy_static! {
    static ref SYMBOLS_BY_NAME: HashMap<&'static str, Symbol> = SYMBOLS
        .iter()
        .map(|entry| (entry.name(), entry.symbol()))
        .collect();
}

impl Symbol {
    /// The catalog entry for this symbol
    pub fn entry(self) -> &'static SymbolEntry {
        &SYMBOLS[self as usize]
    }

    /// The full entry point name, e.g. `glGetIntegerv`
    pub fn name(self) -> &'static str {
        self.entry().name()
    }

    /// The proc table slot index of this symbol
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up the symbol occupying a proc table slot.
    pub fn from_index(index: usize) -> Option<Symbol> {
        SYMBOLS.get(index).map(SymbolEntry::symbol)
    }

    /// Look up a symbol by its full entry point name, e.g. `glGetIntegerv`.
    pub fn from_name(name: &str) -> Option<Symbol> {
        SYMBOLS_BY_NAME.get(name).copied()
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds an ordered, duplicate-free list of entry point names from the
/// registry header, the same way the compiled-in catalog was built.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    policy: InclusionPolicy,
    names: Vec<String>,
}

impl CatalogBuilder {
    pub fn new(policy: InclusionPolicy) -> Self {
        Self {
            policy,
            names: Vec::new(),
        }
    }

    pub fn policy(&self) -> InclusionPolicy {
        self.policy
    }

    /// Add a single entry point name.
    pub fn add<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.names.push(name.into());
        self
    }

    /// Add every entry point declared in the given header text.
    ///
    /// Only prototype lines of the form `GLAPI <ret> APIENTRY <name> (...)`
    /// declare an entry point; everything else is ignored.
    pub fn parse_header(&mut self, header: &str) -> &mut Self {
        for line in header.lines() {
            if let Some(name) = prototype_name(line) {
                self.names.push(name.to_owned());
            }
        }
        self
    }

    /// Produce the final catalog order: names allowed by the policy, sorted
    /// bytewise, with duplicates removed.
    pub fn build(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .names
            .iter()
            .filter(|name| self.policy.includes(name))
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

/// Extract the entry point name from a registry prototype line.
fn prototype_name(line: &str) -> Option<&str> {
    if !line.starts_with("GLAPI") {
        return None;
    }

    let rest = &line[line.find("APIENTRY")? + "APIENTRY".len()..];
    let trimmed = rest.trim_start();

    // `APIENTRY` must be followed by whitespace, as in `APIENTRY glFoo`
    if trimmed.len() == rest.len() {
        return None;
    }

    let end = trimmed
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or_else(|| trimmed.len());

    if end == 0 {
        None
    } else {
        Some(&trimmed[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::SYMBOL_COUNT;

    const HEADER: &str = "\
#ifndef GL_VERSION_1_0
typedef void GLvoid;
GLAPI void APIENTRY glCullFace (GLenum mode);
GLAPI GLenum APIENTRY glGetError (void);
GLAPI void APIENTRY glGetIntegerv (GLenum pname, GLint *data);
GLAPI void APIENTRY glPolygonOffsetClampEXT (GLfloat factor, GLfloat units, GLfloat clamp);
GLAPI void APIENTRY glBlendBarrierKHR (void);
typedef void (APIENTRYP PFNGLCULLFACEPROC) (GLenum mode);
GLAPI void APIENTRY glGetError (void);
";

    #[test]
    fn vendor_suffixes_are_extensions() {
        for name in &[
            "glGetTextureHandleARB",
            "glPolygonOffsetClampEXT",
            "glFramebufferTextureMultiviewOVR",
            "glBlendBarrierNV",
            "glFramebufferSamplePositionsfvAMD",
            "glApplyFramebufferAttachmentCMAAINTEL",
        ] {
            assert!(is_extension(name), "{} should be an extension", name);
        }

        for name in &["glGetIntegerv", "glBlendBarrierKHR", "glDrawArrays"] {
            assert!(!is_extension(name), "{} should not be an extension", name);
        }
    }

    #[test]
    fn extension_names_excluded_when_core_only() {
        let names = CatalogBuilder::new(InclusionPolicy::CoreOnly)
            .parse_header(HEADER)
            .build();

        assert_eq!(
            names,
            vec!["glBlendBarrierKHR", "glCullFace", "glGetError", "glGetIntegerv"]
        );
    }

    #[test]
    fn extension_names_included_with_extensions() {
        let names = CatalogBuilder::new(InclusionPolicy::WithExtensions)
            .parse_header(HEADER)
            .build();

        assert!(names.iter().any(|n| n == "glPolygonOffsetClampEXT"));
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn builder_sorts_and_dedups() {
        let names = CatalogBuilder::new(InclusionPolicy::CoreOnly)
            .add("glViewport")
            .add("glClear")
            .add("glViewport")
            .add("glClearColor")
            .build();

        assert_eq!(names, vec!["glClear", "glClearColor", "glViewport"]);
    }

    #[test]
    fn prototype_lines_only() {
        assert_eq!(
            prototype_name("GLAPI void APIENTRY glFlush (void);"),
            Some("glFlush")
        );
        assert_eq!(prototype_name("  GLAPI void APIENTRY glFlush (void);"), None);
        assert_eq!(prototype_name("GLAPI void APIENTRYglFlush (void);"), None);
        assert_eq!(prototype_name("typedef void (APIENTRYP PFNGLFLUSHPROC) (void);"), None);
    }

    #[test]
    fn compiled_catalog_shape() {
        assert_eq!(SYMBOLS.len(), SYMBOL_COUNT);

        for (index, entry) in SYMBOLS.iter().enumerate() {
            assert_eq!(entry.symbol().index(), index);
            assert!(entry.name().starts_with("gl"));
            assert_eq!(entry.name_cstr().to_str().unwrap(), entry.name());
            assert!(InclusionPolicy::compiled().includes(entry.name()));
        }
    }

    #[test]
    fn compiled_catalog_groups_are_sorted() {
        let core: Vec<&str> = SYMBOLS
            .iter()
            .filter(|e| !e.is_extension())
            .map(SymbolEntry::name)
            .collect();
        let ext: Vec<&str> = SYMBOLS
            .iter()
            .filter(|e| e.is_extension())
            .map(SymbolEntry::name)
            .collect();

        // Core entries come first, extensions (if compiled in) after
        assert!(SYMBOLS[..core.len()].iter().all(|e| !e.is_extension()));

        for group in &[core, ext] {
            let mut sorted = group.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(group, &sorted);
        }
    }

    #[test]
    fn core_only_catalog_has_no_extensions() {
        if InclusionPolicy::compiled() == InclusionPolicy::CoreOnly {
            assert!(SYMBOLS.iter().all(|e| !e.is_extension()));
        }
    }

    #[test]
    fn symbol_lookups() {
        let sym = Symbol::from_name("glGetIntegerv").unwrap();
        assert_eq!(sym, Symbol::GetIntegerv);
        assert_eq!(sym.name(), "glGetIntegerv");
        assert_eq!(Symbol::from_index(sym.index()), Some(sym));
        assert!(sym.entry().signature().contains("GLint"));

        assert_eq!(Symbol::from_name("GetIntegerv"), None);
        assert_eq!(Symbol::from_name("glNotARealFunction"), None);
        assert_eq!(Symbol::from_index(SYMBOL_COUNT), None);
    }
}
