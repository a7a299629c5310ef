use tracing::{debug, info};
use uuid::Uuid;

use super::{
    comparison::{ComparisonResult, compare},
    priced_entry::{EntryDraft, EntryError, PricedEntry},
};

pub const DEFAULT_PLACEHOLDER_NAME: &str = "Item";

/// The running list of entries, newest first. All mutation goes through
/// [`PriceList::add`], [`PriceList::remove`] and [`PriceList::clear`].
#[derive(Debug, Clone)]
pub struct PriceList {
    placeholder_name: String,
    entries: Vec<PricedEntry>,
}

impl Default for PriceList {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_NAME)
    }
}

impl PriceList {
    pub fn new(placeholder_name: impl Into<String>) -> Self {
        Self {
            placeholder_name: placeholder_name.into(),
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[PricedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&PricedEntry> {
        self.entries.iter().find(|e| e.id == *id)
    }

    /// Validates the draft and puts the new entry at the front of the list.
    pub fn add(&mut self, draft: &EntryDraft) -> Result<&PricedEntry, EntryError> {
        let fallback_name = format!("{} {}", self.placeholder_name, self.entries.len() + 1);
        let entry = PricedEntry::from_draft(draft, fallback_name)?;

        info!(
            "added entry {} ({}) at {:.2}/kg",
            entry.id, entry.name, entry.price_per_kilogram
        );

        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    /// Removes the entry with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &Uuid) -> Option<PricedEntry> {
        let Some(index) = self.entries.iter().position(|e| e.id == *id) else {
            debug!("remove ignored, no entry {id}");
            return None;
        };

        let entry = self.entries.remove(index);
        info!("removed entry {} ({})", entry.id, entry.name);
        Some(entry)
    }

    pub fn clear(&mut self) {
        info!("cleared {} entries", self.entries.len());
        self.entries.clear();
    }

    pub fn comparison(&self) -> Option<ComparisonResult> {
        compare(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::unit::QuantityUnit;

    fn draft(name: &str, price: &str, quantity: &str) -> EntryDraft {
        EntryDraft::new(name, price, quantity, QuantityUnit::G)
    }

    #[test]
    fn newest_first() {
        let mut list = PriceList::default();
        let a = list.add(&draft("A", "10", "500")).unwrap().id;
        let b = list.add(&draft("B", "15", "500")).unwrap().id;

        let ids: Vec<Uuid> = list.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![b, a]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn placeholder_names_count_the_list() {
        let mut list = PriceList::new("Товар");
        list.add(&draft("", "1", "100")).unwrap();
        list.add(&draft("Named", "1", "100")).unwrap();
        let third = list.add(&draft(" ", "1", "100")).unwrap();
        assert_eq!(third.name, "Товар 3");
        assert_eq!(list.entries()[2].name, "Товар 1");
    }

    #[test]
    fn invalid_draft_leaves_list_untouched() {
        let mut list = PriceList::default();
        list.add(&draft("A", "10", "500")).unwrap();

        assert!(list.add(&draft("B", "", "500")).is_err());
        assert!(list.add(&draft("B", "10", "0")).is_err());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut list = PriceList::default();
        let id = list.add(&draft("A", "10", "500")).unwrap().id;

        assert!(list.remove(&Uuid::new_v4()).is_none());
        assert_eq!(list.len(), 1);

        let removed = list.remove(&id).unwrap();
        assert_eq!(removed.name, "A");
        assert!(list.is_empty());
        assert!(list.remove(&id).is_none());
    }

    #[test]
    fn comparison_tracks_the_list() {
        let mut list = PriceList::default();
        let a = list.add(&draft("A", "10", "500")).unwrap().id;
        assert!(list.comparison().is_none());

        let b = list.add(&draft("B", "15", "500")).unwrap().id;
        let result = list.comparison().unwrap();
        assert_eq!(result.winner.id, a);
        assert_eq!(result.insights[0].savings_percent, 33);

        list.remove(&a);
        assert!(list.comparison().is_none());
        assert!(list.get(&b).is_some());

        list.clear();
        assert!(list.is_empty());
        assert!(list.comparison().is_none());
    }

    #[test]
    fn readding_keeps_price_per_kilogram() {
        let mut list = PriceList::default();
        let first = list.add(&draft("A", "4.5", "300")).unwrap().clone();
        list.remove(&first.id);
        let second = list.add(&draft("A", "4.5", "300")).unwrap().clone();

        assert_ne!(first.id, second.id);
        assert_eq!(first.price_per_kilogram, second.price_per_kilogram);
        assert_eq!(first.name, second.name);
        assert_eq!(first.unit, second.unit);
    }
}
