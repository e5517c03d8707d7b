//! Ordered, user-editable registries for categories, tracking items, and
//! quotes.
//!
//! Each registry is a whole-list record in the kv store, seeded from its
//! type's defaults on first run and re-persisted after every mutation.
//! Order matters (it drives UI listing and name lookups); duplicate names
//! are permitted; removal never cascades into historical schedule data.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::error::StorageError;
use crate::model::{Quote, ScheduleCategory, TrackingItem};
use crate::storage::Database;

const CATEGORIES_KEY: &str = "categories";
const TRACKING_ITEMS_KEY: &str = "tracking_items";
const QUOTES_KEY: &str = "quotes";

/// Read a whole-list record, falling back to `seed` when the record is
/// missing (first run) or unreadable (corrupt data is dropped with a
/// warning, never surfaced as an error).
fn load_list<T: DeserializeOwned>(
    db: &Database,
    key: &str,
    seed: fn() -> Vec<T>,
) -> Result<(Vec<T>, bool), StorageError> {
    match db.kv_get(key)? {
        Some(json) => match serde_json::from_str(&json) {
            Ok(items) => Ok((items, false)),
            Err(err) => {
                warn!(key, %err, "discarding unreadable registry record");
                Ok((seed(), true))
            }
        },
        None => Ok((seed(), true)),
    }
}

fn save_list<T: Serialize>(db: &Database, key: &str, items: &[T]) -> Result<(), StorageError> {
    let json = serde_json::to_string(items).map_err(|e| StorageError::EncodeFailed {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    db.kv_set(key, &json)
}

/// Move one element of `items` from `from` to `to`, preserving the relative
/// order of everything else. Out-of-range `from` is a no-op.
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to.min(items.len()), item);
}

/// Ordered list of schedule categories.
pub struct CategoryRegistry {
    items: Vec<ScheduleCategory>,
}

impl CategoryRegistry {
    /// Load from storage, seeding the defaults on first run.
    pub fn load(db: &Database) -> Result<Self, StorageError> {
        let (items, seeded) = load_list(db, CATEGORIES_KEY, ScheduleCategory::defaults)?;
        let registry = Self { items };
        if seeded {
            registry.save(db)?;
        }
        Ok(registry)
    }

    pub fn save(&self, db: &Database) -> Result<(), StorageError> {
        save_list(db, CATEGORIES_KEY, &self.items)
    }

    pub fn all(&self) -> &[ScheduleCategory] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&ScheduleCategory> {
        self.items.iter().find(|c| c.id == id)
    }

    /// First category with the given name, in registry order.
    pub fn find_by_name(&self, name: &str) -> Option<&ScheduleCategory> {
        self.items.iter().find(|c| c.name == name)
    }

    /// Display name for a category id. Ids no longer in the registry
    /// (deleted categories still referenced by old blocks) resolve to an
    /// unknown placeholder, never an error.
    pub fn display_name(&self, id: Uuid) -> &str {
        self.get(id).map(|c| c.name.as_str()).unwrap_or("(unknown)")
    }

    pub fn add(&mut self, category: ScheduleCategory) {
        self.items.push(category);
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        self.items.len() != before
    }

    /// Replace the entry with the same id in place.
    pub fn update(&mut self, category: ScheduleCategory) -> bool {
        match self.items.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category;
                true
            }
            None => false,
        }
    }

    pub fn move_item(&mut self, from: usize, to: usize) {
        move_item(&mut self.items, from, to);
    }
}

/// Ordered list of tracking item definitions.
pub struct TrackingItemRegistry {
    items: Vec<TrackingItem>,
}

impl TrackingItemRegistry {
    /// Load from storage, seeding the defaults on first run.
    pub fn load(db: &Database) -> Result<Self, StorageError> {
        let (items, seeded) = load_list(db, TRACKING_ITEMS_KEY, TrackingItem::defaults)?;
        let registry = Self { items };
        if seeded {
            registry.save(db)?;
        }
        Ok(registry)
    }

    pub fn save(&self, db: &Database) -> Result<(), StorageError> {
        save_list(db, TRACKING_ITEMS_KEY, &self.items)
    }

    pub fn all(&self) -> &[TrackingItem] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&TrackingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&TrackingItem> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn add(&mut self, item: TrackingItem) {
        self.items.push(item);
    }

    /// Remove an item definition. Historical tracking values keyed by this
    /// id stay in the schedules; aggregation simply stops reporting them.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn update(&mut self, item: TrackingItem) -> bool {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn move_item(&mut self, from: usize, to: usize) {
        move_item(&mut self.items, from, to);
    }
}

/// Ordered, user-appendable list of quotes.
pub struct QuoteRegistry {
    items: Vec<Quote>,
}

impl QuoteRegistry {
    /// Load from storage, seeding the defaults on first run.
    pub fn load(db: &Database) -> Result<Self, StorageError> {
        let (items, seeded) = load_list(db, QUOTES_KEY, Quote::defaults)?;
        let registry = Self { items };
        if seeded {
            registry.save(db)?;
        }
        Ok(registry)
    }

    pub fn save(&self, db: &Database) -> Result<(), StorageError> {
        save_list(db, QUOTES_KEY, &self.items)
    }

    pub fn all(&self) -> &[Quote] {
        &self.items
    }

    pub fn add(&mut self, quote: Quote) {
        self.items.push(quote);
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|q| q.id != id);
        self.items.len() != before
    }

    pub fn update(&mut self, quote: Quote) -> bool {
        match self.items.iter_mut().find(|q| q.id == quote.id) {
            Some(slot) => {
                *slot = quote;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_OVERTIME_ID;

    #[test]
    fn first_run_seeds_defaults_and_persists_them() {
        let db = Database::open_memory().unwrap();
        let categories = CategoryRegistry::load(&db).unwrap();
        assert_eq!(categories.all().len(), 9);
        assert!(categories.find_by_name("Work").is_some());

        // Second load reads the persisted list, ids unchanged.
        let reloaded = CategoryRegistry::load(&db).unwrap();
        assert_eq!(reloaded.all(), categories.all());
    }

    #[test]
    fn corrupt_registry_record_falls_back_to_defaults() {
        let db = Database::open_memory().unwrap();
        db.kv_set("tracking_items", "not json").unwrap();
        let registry = TrackingItemRegistry::load(&db).unwrap();
        assert_eq!(registry.all().len(), 1);
        assert_eq!(registry.all()[0].id, DEFAULT_OVERTIME_ID);
    }

    #[test]
    fn remove_and_update() {
        let db = Database::open_memory().unwrap();
        let mut categories = CategoryRegistry::load(&db).unwrap();
        let id = categories.find_by_name("Hobby").unwrap().id;
        assert!(categories.remove(id));
        assert!(!categories.remove(id));
        assert!(categories.get(id).is_none());

        let mut renamed = categories.all()[0].clone();
        renamed.name = "Deep Work".to_string();
        assert!(categories.update(renamed.clone()));
        assert_eq!(categories.all()[0].name, "Deep Work");

        let mut unknown = renamed;
        unknown.id = Uuid::new_v4();
        assert!(!categories.update(unknown));
    }

    #[test]
    fn move_preserves_relative_order() {
        let mut items: Vec<i32> = vec![1, 2, 3, 4, 5];
        move_item(&mut items, 0, 3);
        assert_eq!(items, vec![2, 3, 4, 1, 5]);
        move_item(&mut items, 3, 0);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        // Out-of-range source is a no-op; destination clamps.
        move_item(&mut items, 9, 0);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        move_item(&mut items, 0, 99);
        assert_eq!(items, vec![2, 3, 4, 5, 1]);
    }

    #[test]
    fn duplicate_names_are_permitted() {
        let db = Database::open_memory().unwrap();
        let mut categories = CategoryRegistry::load(&db).unwrap();
        categories.add(ScheduleCategory::new("Work", "#111111"));
        let works: Vec<_> = categories.all().iter().filter(|c| c.name == "Work").collect();
        assert_eq!(works.len(), 2);
        // Name lookup resolves to the first in registry order.
        assert_eq!(
            categories.find_by_name("Work").unwrap().id,
            works[0].id
        );
    }

    #[test]
    fn quotes_seed_and_append() {
        let db = Database::open_memory().unwrap();
        let mut quotes = QuoteRegistry::load(&db).unwrap();
        let seeded = quotes.all().len();
        assert!(seeded >= 2);
        quotes.add(Quote::new("Ship it.", "Anonymous"));
        quotes.save(&db).unwrap();
        let reloaded = QuoteRegistry::load(&db).unwrap();
        assert_eq!(reloaded.all().len(), seeded + 1);
    }
}
