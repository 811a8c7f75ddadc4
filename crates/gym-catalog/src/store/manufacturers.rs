//! Manufacturer checkbox lists and the price slider.

use serde::{Deserialize, Serialize};

use crate::catalog::{seed_entries, ManufacturerEntry, ManufacturerList};
use crate::ids::ManufacturerId;
use crate::search::PriceRange;

/// The two manufacturer filter lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerFilterStore {
    gym: Vec<ManufacturerEntry>,
    parts: Vec<ManufacturerEntry>,
}

impl ManufacturerFilterStore {
    /// Seed both lists from the static manufacturer catalog, all unchecked.
    pub fn new() -> Self {
        Self {
            gym: seed_entries(ManufacturerList::Gym.seed_titles()),
            parts: seed_entries(ManufacturerList::Parts.seed_titles()),
        }
    }

    /// Entries of one list, in seed order.
    pub fn entries(&self, list: ManufacturerList) -> &[ManufacturerEntry] {
        match list {
            ManufacturerList::Gym => &self.gym,
            ManufacturerList::Parts => &self.parts,
        }
    }

    fn entries_mut(&mut self, list: ManufacturerList) -> &mut Vec<ManufacturerEntry> {
        match list {
            ManufacturerList::Gym => &mut self.gym,
            ManufacturerList::Parts => &mut self.parts,
        }
    }

    /// Set the checked state of the entry with `id`.
    ///
    /// Returns `false` and changes nothing if no entry matches.
    pub fn toggle(&mut self, list: ManufacturerList, id: &ManufacturerId, checked: bool) -> bool {
        match self.entries_mut(list).iter_mut().find(|e| &e.id == id) {
            Some(entry) => {
                entry.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Replace a whole list.
    pub fn replace_all(&mut self, list: ManufacturerList, entries: Vec<ManufacturerEntry>) {
        *self.entries_mut(list) = entries;
    }

    /// Check every entry whose title is in `titles` (exact match).
    ///
    /// Additive: entries not named keep their current state. Returns the
    /// number of entries that matched.
    pub fn restore_from_titles(&mut self, list: ManufacturerList, titles: &[String]) -> usize {
        let mut matched = 0;
        for entry in self.entries_mut(list).iter_mut() {
            if titles.iter().any(|t| *t == entry.title) {
                entry.checked = true;
                matched += 1;
            }
        }
        matched
    }

    /// Uncheck every entry of one list.
    pub fn uncheck_all(&mut self, list: ManufacturerList) {
        let unchecked = self
            .entries(list)
            .iter()
            .map(|e| e.with_checked(false))
            .collect();
        self.replace_all(list, unchecked);
    }

    /// Uncheck both lists.
    pub fn reset(&mut self) {
        for list in ManufacturerList::ALL {
            self.uncheck_all(list);
        }
    }

    /// Checked entries of one list.
    pub fn checked(&self, list: ManufacturerList) -> impl Iterator<Item = &ManufacturerEntry> {
        self.entries(list).iter().filter(|e| e.checked)
    }

    /// Titles of the checked entries, in list order.
    pub fn checked_titles(&self, list: ManufacturerList) -> Vec<String> {
        self.checked(list).map(|e| e.title.clone()).collect()
    }

    pub fn any_checked(&self, list: ManufacturerList) -> bool {
        self.entries(list).iter().any(|e| e.checked)
    }
}

impl Default for ManufacturerFilterStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Price slider state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceFilter {
    /// Current slider range.
    pub range: PriceRange,
    /// Whether the user (or a restored URL) moved the slider since the last reset.
    pub touched: bool,
}

impl PriceFilter {
    /// Untouched slider at `default_range`.
    pub fn new(default_range: PriceRange) -> Self {
        Self {
            range: default_range,
            touched: false,
        }
    }

    /// Move the slider.
    pub fn set(&mut self, range: PriceRange) {
        self.range = range;
        self.touched = true;
    }

    /// Put the slider back to `default_range` and clear the touched flag.
    pub fn reset(&mut self, default_range: PriceRange) {
        *self = Self::new(default_range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_by_id() {
        let mut store = ManufacturerFilterStore::new();
        let id = store.entries(ManufacturerList::Gym)[1].id.clone();

        assert!(store.toggle(ManufacturerList::Gym, &id, true));
        assert_eq!(store.checked_titles(ManufacturerList::Gym), titles(&["Technogym"]));
        assert!(!store.any_checked(ManufacturerList::Parts));

        assert!(store.toggle(ManufacturerList::Gym, &id, false));
        assert!(!store.any_checked(ManufacturerList::Gym));
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = ManufacturerFilterStore::new();
        let before = store.clone();

        assert!(!store.toggle(ManufacturerList::Gym, &ManufacturerId::new("missing"), true));
        // An id from the other list does not match either.
        let parts_id = store.entries(ManufacturerList::Parts)[0].id.clone();
        assert!(!store.toggle(ManufacturerList::Gym, &parts_id, true));

        assert_eq!(store, before);
    }

    #[test]
    fn test_restore_from_titles_is_additive() {
        let mut store = ManufacturerFilterStore::new();
        let cybex = store
            .entries(ManufacturerList::Gym)
            .iter()
            .find(|e| e.title == "Cybex")
            .map(|e| e.id.clone())
            .unwrap();
        store.toggle(ManufacturerList::Gym, &cybex, true);

        let matched = store.restore_from_titles(
            ManufacturerList::Gym,
            &titles(&["Technogym", "Matrix ", "Unknown"]),
        );

        assert_eq!(matched, 2);
        assert_eq!(
            store.checked_titles(ManufacturerList::Gym),
            titles(&["Technogym", "Matrix ", "Cybex"])
        );
    }

    #[test]
    fn test_restore_is_exact_match() {
        let mut store = ManufacturerFilterStore::new();
        let matched = store.restore_from_titles(
            ManufacturerList::Gym,
            &titles(&["technogym", "Matrix", "Star Trac"]),
        );
        assert_eq!(matched, 0);
        assert!(!store.any_checked(ManufacturerList::Gym));
    }

    #[test]
    fn test_uncheck_all_keeps_ids_and_other_list() {
        let mut store = ManufacturerFilterStore::new();
        store.restore_from_titles(ManufacturerList::Gym, &titles(&["Cybex"]));
        store.restore_from_titles(ManufacturerList::Parts, &titles(&["Grips"]));
        let ids: Vec<_> = store
            .entries(ManufacturerList::Gym)
            .iter()
            .map(|e| e.id.clone())
            .collect();

        store.uncheck_all(ManufacturerList::Gym);

        assert!(!store.any_checked(ManufacturerList::Gym));
        assert!(store.any_checked(ManufacturerList::Parts));
        let after: Vec<_> = store
            .entries(ManufacturerList::Gym)
            .iter()
            .map(|e| e.id.clone())
            .collect();
        assert_eq!(ids, after);

        store.reset();
        assert!(!store.any_checked(ManufacturerList::Parts));
    }

    #[test]
    fn test_replace_all() {
        let mut store = ManufacturerFilterStore::new();
        let entries = vec![ManufacturerEntry::new("Only").with_checked(true)];
        store.replace_all(ManufacturerList::Parts, entries);
        assert_eq!(store.checked_titles(ManufacturerList::Parts), titles(&["Only"]));
        assert_eq!(store.entries(ManufacturerList::Parts).len(), 1);
    }

    #[test]
    fn test_price_filter_touch_and_reset() {
        let default = PriceRange::new(1000.0, 9000.0);
        let mut price = PriceFilter::new(default);
        assert!(!price.touched);

        price.set(PriceRange::new(1500.0, 3000.0));
        assert!(price.touched);
        assert_eq!(price.range, PriceRange::new(1500.0, 3000.0));

        price.reset(default);
        assert_eq!(price, PriceFilter::new(default));
    }
}
