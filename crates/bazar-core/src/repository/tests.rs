//! Repository Integration Tests
//!
//! Tests for ListStore with in-memory storage and a controllable clock.

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::{DateTime, TimeZone, Utc};

    use crate::domain::{ItemId, Language, ListId, ListKind, NewItem, ShoppingList};
    use crate::error::{StorageError, StoreError};
    use crate::notice::{Message, NoticeLevel};
    use crate::repository::{Clock, KeyValueStore, ListStore, MemoryStorage, ACTIVE_LIST_KEY, LISTS_KEY};
    use crate::voice::Transcript;

    /// Clock that advances one second per reading
    struct StepClock {
        millis: Cell<i64>,
    }

    impl StepClock {
        fn boxed() -> Box<dyn Clock> {
            Box::new(StepClock { millis: Cell::new(1_700_000_000_000) })
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            let millis = self.millis.get();
            self.millis.set(millis + 1_000);
            Utc.timestamp_millis_opt(millis).unwrap()
        }
    }

    /// Clock frozen at one instant
    struct FrozenClock;

    impl Clock for FrozenClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
        }
    }

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl KeyValueStore for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }
    }

    fn setup_store() -> ListStore<MemoryStorage> {
        ListStore::initialize_with_clock(MemoryStorage::new(), StepClock::boxed())
    }

    fn default_id() -> ListId {
        ListId::new("default")
    }

    fn persisted(store: &ListStore<MemoryStorage>) -> Vec<ShoppingList> {
        store
            .lists()
            .iter()
            .filter(|list| list.kind.is_persisted())
            .cloned()
            .collect()
    }

    fn item_count(store: &ListStore<MemoryStorage>, id: &ListId) -> usize {
        store.list(id).unwrap().items.len()
    }

    // ========================
    // Initialize
    // ========================

    #[test]
    fn test_fresh_start_seeds_and_creates_default() {
        let mut store = setup_store();

        let ids: Vec<_> = store.lists().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["durga-puja", "poila-boishakh", "default"]);
        assert_eq!(store.active_list_id(), Some(&default_id()));
        assert_eq!(store.active_list().unwrap().kind, ListKind::Custom);
        assert!(store.take_notices().is_empty());

        assert_eq!(store.storage().raw(ACTIVE_LIST_KEY), Some("default"));
        let saved = store.storage().raw(LISTS_KEY).unwrap();
        assert!(saved.contains("\"default\""));
        assert!(!saved.contains("durga-puja"));
    }

    #[test]
    fn test_corrupt_saved_lists_fall_back_to_seed() {
        let storage = MemoryStorage::with_entries([(LISTS_KEY, "{not json")]);
        let mut store = ListStore::initialize_with_clock(storage, StepClock::boxed());

        assert_eq!(store.lists().len(), 3);
        assert_eq!(store.active_list_id(), Some(&default_id()));
        let notices = store.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, Message::PersistedDataCorrupt);
    }

    #[test]
    fn test_corrupt_saved_lists_with_festival_selection() {
        let storage = MemoryStorage::with_entries([(LISTS_KEY, "{not json"), (ACTIVE_LIST_KEY, "durga-puja")]);
        let store = ListStore::initialize_with_clock(storage, StepClock::boxed());

        let ids: Vec<_> = store.lists().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["durga-puja", "poila-boishakh", "default"]);
        assert_eq!(store.active_list_id(), Some(&ListId::new("durga-puja")));

        let saved = store.storage().raw(LISTS_KEY).unwrap();
        let lists: Vec<ShoppingList> = serde_json::from_str(saved).unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, default_id());
    }

    #[test]
    fn test_saved_list_with_reserved_id_is_ignored() {
        let saved = r#"[
            {"id":"durga-puja","name":"shadow","items":[],"createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z","type":"custom"},
            {"id":"42","name":"Weekly","items":[{"id":"43","name":"rice","completed":true}],"createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}
        ]"#;
        let storage = MemoryStorage::with_entries([(LISTS_KEY, saved), (ACTIVE_LIST_KEY, "42")]);
        let store = ListStore::initialize_with_clock(storage, StepClock::boxed());

        assert_eq!(store.festival_lists()[0].name, "দুর্গা পূজার বাজার");
        assert_eq!(store.lists().len(), 3);
        assert_eq!(store.active_list_id(), Some(&ListId::new("42")));
        assert!(store.active_list().unwrap().items[0].completed);
        // saved active list resolves, so no default list is created
        assert!(store.list(&default_id()).is_none());
    }

    #[test]
    fn test_unknown_saved_active_id_selects_default() {
        let storage = MemoryStorage::with_entries([(LISTS_KEY, "[]"), (ACTIVE_LIST_KEY, "gone")]);
        let store = ListStore::initialize_with_clock(storage, StepClock::boxed());

        assert_eq!(store.active_list_id(), Some(&default_id()));
        assert!(store.list(&default_id()).is_some());
        assert_eq!(store.storage().raw(ACTIVE_LIST_KEY), Some("default"));
    }

    #[test]
    fn test_festival_lists_in_seed_order() {
        let store = setup_store();
        let festivals: Vec<_> = store.festival_lists().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(festivals, vec!["durga-puja", "poila-boishakh"]);
    }

    // ========================
    // Lists
    // ========================

    #[test]
    fn test_add_list() {
        let mut store = setup_store();
        let id = store.add_list("Eid shopping", ListKind::Custom);

        let list = store.list(&id).unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.created_at, list.updated_at);
        assert_eq!(store.active_list_id(), Some(&id));
        assert_eq!(
            store.take_notices()[0].message,
            Message::ListCreated { name: "Eid shopping".to_string() }
        );
    }

    #[test]
    fn test_add_list_ids_unique_under_frozen_clock() {
        let mut store = ListStore::initialize_with_clock(MemoryStorage::new(), Box::new(FrozenClock));
        let a = store.add_list("same", ListKind::Custom);
        let b = store.add_list("same", ListKind::Custom);
        let c = store.add_list("same", ListKind::Recipe);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(store.lists().len(), 6);
    }

    #[test]
    fn test_delete_festival_list_is_refused() {
        let mut store = setup_store();
        let before = store.lists().to_vec();

        let result = store.delete_list(&ListId::new("durga-puja"));
        assert_eq!(result, Err(StoreError::ProtectedList(ListId::new("durga-puja"))));
        assert_eq!(store.lists(), before.as_slice());
        let notices = store.take_notices();
        assert_eq!(notices[0].level, NoticeLevel::Warning);
    }

    #[test]
    fn test_delete_active_list_falls_back_to_first() {
        let mut store = setup_store();
        let id = store.add_list("temp", ListKind::Custom);

        let removed = store.delete_list(&id).unwrap();
        assert_eq!(removed.name, "temp");
        assert!(store.list(&id).is_none());
        assert_eq!(store.active_list_id(), Some(&ListId::new("durga-puja")));
        assert_eq!(store.storage().raw(ACTIVE_LIST_KEY), Some("durga-puja"));
    }

    #[test]
    fn test_delete_inactive_list_keeps_selection() {
        let mut store = setup_store();
        let first = store.add_list("first", ListKind::Custom);
        let second = store.add_list("second", ListKind::Custom);

        store.delete_list(&first).unwrap();
        assert_eq!(store.active_list_id(), Some(&second));
    }

    #[test]
    fn test_delete_unknown_list() {
        let mut store = setup_store();
        store.take_notices();
        assert_eq!(
            store.delete_list(&ListId::new("nope")),
            Err(StoreError::ListNotFound(ListId::new("nope")))
        );
        assert!(store.take_notices().is_empty());
    }

    #[test]
    fn test_active_selection_always_resolves() {
        let mut store = setup_store();
        let mut created = Vec::new();
        for round in 0..4 {
            created.push(store.add_list(&format!("list {}", round), ListKind::Custom));
            if round % 2 == 1 {
                let victim = created.remove(0);
                store.delete_list(&victim).unwrap();
            }
            assert!(store.active_list().is_some());
        }
        store.delete_list(&default_id()).unwrap();
        for id in created {
            store.delete_list(&id).unwrap();
            let active = store.active_list_id().cloned();
            assert!(active.map_or(true, |id| store.list(&id).is_some()));
        }
        // only festival lists remain
        assert_eq!(store.lists().len(), 2);
        assert!(store.active_list().is_some());
    }

    #[test]
    fn test_set_active_list() {
        let mut store = setup_store();
        store.set_active_list(&ListId::new("poila-boishakh")).unwrap();
        assert_eq!(store.active_list().unwrap().kind, ListKind::Festival);
        assert_eq!(
            store.set_active_list(&ListId::new("missing")),
            Err(StoreError::ListNotFound(ListId::new("missing")))
        );
        assert_eq!(store.active_list_id(), Some(&ListId::new("poila-boishakh")));
    }

    // ========================
    // Items
    // ========================

    #[test]
    fn test_add_item() {
        let mut store = setup_store();
        let created_at = store.list(&default_id()).unwrap().updated_at;

        let id = store
            .add_item(&default_id(), NewItem::named("  Rice ").category("grain").language(Language::English))
            .unwrap();

        let list = store.list(&default_id()).unwrap();
        let item = &list.items[0];
        assert_eq!(item.id, id);
        assert_eq!(item.name, "Rice");
        assert!(!item.completed);
        assert_eq!(item.category.as_deref(), Some("grain"));
        assert_eq!(item.language, Some(Language::English));
        assert!(list.updated_at > created_at);
    }

    #[test]
    fn test_add_duplicate_item_ignores_case() {
        let mut store = setup_store();
        store.add_item(&default_id(), NewItem::named("Sugar")).unwrap();
        store.take_notices();

        let result = store.add_item(&default_id(), NewItem::named("sUGAR"));
        assert_eq!(result, Err(StoreError::DuplicateItem("sUGAR".to_string())));
        assert_eq!(item_count(&store, &default_id()), 1);
        let notices = store.take_notices();
        assert_eq!(notices[0].level, NoticeLevel::Info);
    }

    #[test]
    fn test_add_item_to_unknown_list_is_silent() {
        let mut store = setup_store();
        let result = store.add_item(&ListId::new("nope"), NewItem::named("salt"));
        assert_eq!(result, Err(StoreError::ListNotFound(ListId::new("nope"))));
        assert!(store.take_notices().is_empty());
    }

    #[test]
    fn test_add_blank_item() {
        let mut store = setup_store();
        assert_eq!(store.add_item(&default_id(), NewItem::named("   ")), Err(StoreError::EmptyName));
        assert_eq!(item_count(&store, &default_id()), 0);
    }

    #[test]
    fn test_item_ids_unique_under_frozen_clock() {
        let mut store = ListStore::initialize_with_clock(MemoryStorage::new(), Box::new(FrozenClock));
        let a = store.add_item(&default_id(), NewItem::named("a1")).unwrap();
        let b = store.add_item(&default_id(), NewItem::named("b1")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = setup_store();
        let id = store.add_item(&default_id(), NewItem::named("milk")).unwrap();

        assert_eq!(store.toggle_item_completed(&default_id(), &id), Ok(true));
        assert_eq!(store.toggle_item_completed(&default_id(), &id), Ok(false));
        assert!(!store.list(&default_id()).unwrap().items[0].completed);
    }

    #[test]
    fn test_toggle_unknown_item() {
        let mut store = setup_store();
        let missing = ItemId::new("missing");
        assert_eq!(
            store.toggle_item_completed(&default_id(), &missing),
            Err(StoreError::ItemNotFound(missing))
        );
    }

    #[test]
    fn test_festival_items_are_editable() {
        let mut store = setup_store();
        let puja = ListId::new("durga-puja");
        assert_eq!(store.toggle_item_completed(&puja, &ItemId::new("1")), Ok(true));
        store.remove_item(&puja, &ItemId::new("2")).unwrap();
        assert_eq!(item_count(&store, &puja), 4);
    }

    #[test]
    fn test_update_item_replaces_all_fields() {
        let mut store = setup_store();
        let id = store.add_item(&default_id(), NewItem::named("dal")).unwrap();

        let mut item = store.list(&default_id()).unwrap().items[0].clone();
        item.name = "masoor dal".to_string();
        item.completed = true;
        item.category = Some("pulses".to_string());
        item.quantity = Some("1".to_string());
        item.unit = Some("kg".to_string());
        store.update_item(&default_id(), item.clone()).unwrap();

        let stored = &store.list(&default_id()).unwrap().items[0];
        assert_eq!(stored, &item);
        assert_eq!(stored.id, id);
    }

    #[test]
    fn test_update_unknown_item() {
        let mut store = setup_store();
        let stray = crate::domain::Item::new(ItemId::new("stray"), "x");
        assert_eq!(
            store.update_item(&default_id(), stray),
            Err(StoreError::ItemNotFound(ItemId::new("stray")))
        );
        assert_eq!(item_count(&store, &default_id()), 0);
    }

    #[test]
    fn test_remove_item() {
        let mut store = setup_store();
        let keep = store.add_item(&default_id(), NewItem::named("keep")).unwrap();
        let drop = store.add_item(&default_id(), NewItem::named("drop")).unwrap();

        let removed = store.remove_item(&default_id(), &drop).unwrap();
        assert_eq!(removed.name, "drop");
        assert_eq!(store.list(&default_id()).unwrap().items[0].id, keep);

        assert!(store.remove_item(&default_id(), &drop).is_err());
        assert_eq!(item_count(&store, &default_id()), 1);
    }

    // ========================
    // Persistence
    // ========================

    #[test]
    fn test_persisted_round_trip() {
        let mut store = setup_store();
        let weekly = store.add_list("Weekly", ListKind::Custom);
        store
            .add_item(&weekly, NewItem::named("চাল").language(Language::Bengali).quantity("5", Some("kg")))
            .unwrap();
        let oil = store.add_item(&weekly, NewItem::named("oil").category("kitchen")).unwrap();
        store.toggle_item_completed(&weekly, &oil).unwrap();
        store.add_list("Khichuri", ListKind::Recipe);
        store.set_active_list(&weekly).unwrap();

        let reloaded = ListStore::initialize_with_clock(store.storage().clone(), StepClock::boxed());

        assert_eq!(persisted(&reloaded), persisted(&store));
        assert_eq!(reloaded.active_list_id(), Some(&weekly));
        assert_eq!(reloaded.festival_lists().len(), 2);
    }

    #[test]
    fn test_ids_after_reload_do_not_collide() {
        let mut store = ListStore::initialize_with_clock(MemoryStorage::new(), Box::new(FrozenClock));
        let first = store.add_list("a", ListKind::Custom);

        let mut reloaded = ListStore::initialize_with_clock(store.storage().clone(), Box::new(FrozenClock));
        let second = reloaded.add_list("b", ListKind::Custom);
        assert_ne!(first, second);
    }

    #[test]
    fn test_write_failure_keeps_state_and_reports() {
        let mut store = ListStore::initialize_with_clock(ReadOnlyStorage, StepClock::boxed());
        store.take_notices();

        let id = store.add_list("offline", ListKind::Custom);
        assert!(store.list(&id).is_some());
        let notices = store.take_notices();
        assert!(notices.iter().any(|n| n.message == Message::PersistFailed));
        assert!(notices.iter().any(|n| n.level == NoticeLevel::Success));
    }

    #[test]
    fn test_deleting_default_moves_selection() {
        let mut store = setup_store();
        store.delete_list(&default_id()).unwrap();
        // festival lists always remain, so the selection moves instead of clearing
        assert_eq!(store.storage().raw(ACTIVE_LIST_KEY), Some("durga-puja"));
    }

    // ========================
    // Recipe and voice input
    // ========================

    #[test]
    fn test_import_recipe() {
        let mut store = setup_store();
        store.take_notices();

        let count = store
            .import_recipe(&default_id(), "Ingredients: rice, 2, sugar\nMethod: boil")
            .unwrap();
        assert_eq!(count, 2);
        let names: Vec<_> = store.list(&default_id()).unwrap().items.iter().map(|i| i.name.clone()).collect();
        assert_eq!(names, vec!["rice", "sugar"]);
        let notices = store.take_notices();
        assert_eq!(notices.last().unwrap().message, Message::IngredientsAdded { count: 2 });
    }

    #[test]
    fn test_import_recipe_counts_only_inserted() {
        let mut store = setup_store();
        store.add_item(&default_id(), NewItem::named("Rice")).unwrap();
        store.take_notices();

        let count = store.import_recipe(&default_id(), "rice, salt").unwrap();
        assert_eq!(count, 1);
        let notices = store.take_notices();
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(notices[1].message, Message::IngredientsAdded { count: 1 });
    }

    #[test]
    fn test_import_recipe_with_nothing_new() {
        let mut store = setup_store();
        store.add_item(&default_id(), NewItem::named("rice")).unwrap();
        store.add_item(&default_id(), NewItem::named("salt")).unwrap();
        store.take_notices();

        assert_eq!(store.import_recipe(&default_id(), "Rice, salt"), Ok(0));
        assert_eq!(item_count(&store, &default_id()), 2);
        let last = store.take_notices().pop().unwrap();
        assert_eq!(last.level, NoticeLevel::Info);
        assert_eq!(last.message, Message::IngredientsAlreadyListed);
    }

    #[test]
    fn test_import_empty_recipe() {
        let mut store = setup_store();
        store.take_notices();

        assert_eq!(store.import_recipe(&default_id(), ""), Err(StoreError::EmptyExtraction));
        assert_eq!(item_count(&store, &default_id()), 0);
        let notices = store.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, Message::NoIngredients);
    }

    #[test]
    fn test_add_transcript() {
        let mut store = setup_store();
        store.take_notices();

        let transcript = Transcript { text: " ডিম ".to_string(), language: Language::Bengali };
        store.add_transcript(&default_id(), transcript).unwrap();

        let item = &store.list(&default_id()).unwrap().items[0];
        assert_eq!(item.name, "ডিম");
        assert_eq!(item.language, Some(Language::Bengali));
        assert_eq!(store.take_notices()[0].message, Message::ItemAdded { name: "ডিম".to_string() });
    }
}
