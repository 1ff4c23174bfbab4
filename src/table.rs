//! The proc table: one function pointer slot per catalog entry.
//!
//! Slot `i` always holds the entry point named by `SYMBOLS[i]`. Slots are
//! addressed by index, by [`Symbol`], by name, or through the typed accessor
//! generated for each entry (`table.GetIntegerv()`), all of which read the
//! same storage.

use crate::catalog::SymbolEntry;
use crate::platform::ProcResolver;
use crate::raw::{GlProc, Symbol, SYMBOLS, SYMBOL_COUNT};
use log::{debug, trace};
use std::fmt::{self, Debug, Formatter};

/// Resolved GL entry points, in catalog order
#[derive(Clone)]
pub struct ProcTable {
    slots: [Option<GlProc>; SYMBOL_COUNT],
}

impl ProcTable {
    /// Create a table with every slot unresolved.
    pub fn new() -> Self {
        Self {
            slots: [None; SYMBOL_COUNT],
        }
    }

    /// Number of slots, equal to the number of catalog entries
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get the entry point in a slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`ProcTable::len`].
    pub fn get(&self, index: usize) -> Option<GlProc> {
        self.slots[index]
    }

    /// Overwrite a slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`ProcTable::len`].
    pub fn set(&mut self, index: usize, proc: Option<GlProc>) {
        self.slots[index] = proc;
    }

    pub fn get_symbol(&self, symbol: Symbol) -> Option<GlProc> {
        self.slots[symbol as usize]
    }

    /// Get an entry point by its full name, e.g. `glGetIntegerv`. Returns
    /// `None` both for names outside the catalog and for unresolved slots.
    pub fn get_by_name(&self, name: &str) -> Option<GlProc> {
        Symbol::from_name(name).and_then(|symbol| self.get_symbol(symbol))
    }

    /// The raw slots, in catalog order
    pub fn as_slice(&self) -> &[Option<GlProc>] {
        &self.slots
    }

    /// Iterate over every catalog entry alongside its slot.
    pub fn iter(&self) -> impl Iterator<Item = (&'static SymbolEntry, Option<GlProc>)> + '_ {
        SYMBOLS.iter().zip(self.slots.iter().copied())
    }

    /// Number of slots holding an entry point
    pub fn resolved_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Mark every slot unresolved.
    pub fn clear(&mut self) {
        self.slots = [None; SYMBOL_COUNT];
    }

    /// Resolve every catalog entry, in catalog order, and store the result in
    /// its slot. Entries the resolver can't find are stored as `None`; every
    /// slot is written, so nothing survives from an earlier load.
    ///
    /// Returns the number of resolved entries.
    pub fn load<R: ProcResolver>(&mut self, mut resolver: R) -> usize {
        let mut resolved = 0;

        for (slot, entry) in self.slots.iter_mut().zip(SYMBOLS) {
            *slot = resolver.resolve(entry.name_cstr());

            if slot.is_some() {
                resolved += 1;
            } else {
                trace!("{} is unavailable", entry);
            }
        }

        debug!("Resolved {} of {} GL entry points", resolved, SYMBOL_COUNT);
        resolved
    }
}

impl Default for ProcTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ProcTable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("ProcTable")
            .field("len", &self.len())
            .field("resolved", &self.resolved_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    extern "system" fn noop() {}

    #[test]
    fn starts_unresolved() {
        let table = ProcTable::new();
        assert_eq!(table.len(), SYMBOL_COUNT);
        assert_eq!(table.resolved_count(), 0);
        assert!(table.as_slice().iter().all(Option::is_none));
        assert!(table.GetIntegerv().is_none());
    }

    #[test]
    fn set_and_get_agree_across_views() {
        let mut table = ProcTable::new();
        let index = Symbol::GetError.index();

        table.set(index, Some(noop as GlProc));

        assert_eq!(table.get(index).map(|f| f as usize), Some(noop as GlProc as usize));
        assert_eq!(
            table.get_symbol(Symbol::GetError).map(|f| f as usize),
            Some(noop as GlProc as usize)
        );
        assert_eq!(
            table.get_by_name("glGetError").map(|f| f as usize),
            Some(noop as GlProc as usize)
        );
        assert_eq!(table.GetError().map(|f| f as usize), Some(noop as GlProc as usize));
        assert_eq!(table.resolved_count(), 1);

        table.clear();
        assert!(table.GetError().is_none());
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get_panics() {
        ProcTable::new().get(SYMBOL_COUNT);
    }

    #[test]
    fn load_visits_catalog_in_order() {
        let mut table = ProcTable::new();
        let mut seen = Vec::new();

        let resolved = table.load(|name: &CStr| {
            seen.push(name.to_str().unwrap().to_owned());
            if name.to_bytes() == b"glFinish" {
                Some(noop as GlProc)
            } else {
                None
            }
        });

        let expected: Vec<String> = SYMBOLS.iter().map(|e| e.name().to_owned()).collect();
        assert_eq!(seen, expected);
        assert_eq!(resolved, 1);
        assert!(table.Finish().is_some());
        assert!(table.Flush().is_none());
    }

    #[test]
    fn load_overwrites_previous_contents() {
        let mut table = ProcTable::new();

        table.load(|_: &CStr| Some(noop as GlProc));
        assert_eq!(table.resolved_count(), SYMBOL_COUNT);

        table.load(|name: &CStr| {
            if name.to_bytes() == b"glClear" {
                None
            } else {
                Some(noop as GlProc)
            }
        });
        assert_eq!(table.resolved_count(), SYMBOL_COUNT - 1);
        assert!(table.Clear().is_none());
    }

    #[test]
    fn iter_pairs_entries_with_slots() {
        let mut table = ProcTable::new();
        table.set(Symbol::Viewport.index(), Some(noop as GlProc));

        let resolved: Vec<&str> = table
            .iter()
            .filter(|(_, slot)| slot.is_some())
            .map(|(entry, _)| entry.name())
            .collect();

        assert_eq!(resolved, vec!["glViewport"]);
    }
}
