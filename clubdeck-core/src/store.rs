//! In-memory record stores backing each list screen
//!
//! A store owns one screen's records for the lifetime of the session.
//! Records keep their insertion order; the only mutation paths are
//! [`RecordStore::upsert`] (replace-by-id or prepend-with-new-id) and
//! [`RecordStore::update_with`] for single-field edits.

/// An entity with a stable, store-unique string id.
///
/// The id is immutable once a record is in a store; `set_id` exists so the
/// store can stamp freshly created records before inserting them.
pub trait Record {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
}

/// Generates session-unique ids of the form `{prefix}_{n}`.
///
/// The counter starts past the largest numeric suffix present in the seed
/// data, so generated ids never collide with seeded ones within a session.
/// Ids are not unique across restarts; nothing here persists.
#[derive(Debug, Clone)]
pub struct IdGen {
    prefix: &'static str,
    next: u64,
}

impl IdGen {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix, next: 1000 }
    }

    /// Advance the counter past every `{prefix}_{n}` id in `ids`.
    pub fn seed_past<'a>(&mut self, ids: impl Iterator<Item = &'a str>) {
        let marker = format!("{}_", self.prefix);
        for id in ids {
            if let Some(rest) = id.strip_prefix(&marker) {
                if let Ok(n) = rest.parse::<u64>() {
                    self.next = self.next.max(n + 1);
                }
            }
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}_{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// An insertion-ordered collection of records with upsert semantics.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    ids: IdGen,
}

impl<R: Record> RecordStore<R> {
    /// Build a store around seed data. The id generator is advanced past the
    /// seeded ids so future inserts cannot collide with them.
    pub fn new(prefix: &'static str, seed: Vec<R>) -> Self {
        let mut ids = IdGen::new(prefix);
        ids.seed_past(seed.iter().map(|r| r.id()));
        Self { records: seed, ids }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Replace the record with a matching id in place, or stamp a fresh id
    /// and prepend. Returns the id the record ended up with.
    pub fn upsert(&mut self, mut record: R) -> String {
        let id = record.id().to_string();
        if !id.is_empty() {
            if let Some(existing) = self.records.iter_mut().find(|r| r.id() == id) {
                *existing = record;
                return id;
            }
        }
        let id = self.ids.next_id();
        record.set_id(id.clone());
        self.records.insert(0, record);
        id
    }

    /// Apply an in-place edit to the record with the given id.
    ///
    /// Returns `false` (and does nothing) when no such record exists.
    pub fn update_with(&mut self, id: &str, edit: impl FnOnce(&mut R)) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                edit(record);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        body: String,
    }

    impl Record for Note {
        fn id(&self) -> &str {
            &self.id
        }

        fn set_id(&mut self, id: String) {
            self.id = id;
        }
    }

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: id.into(),
            body: body.into(),
        }
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut store = RecordStore::new("nt", vec![note("nt_1001", "a"), note("nt_1002", "b")]);

        store.upsert(note("nt_1002", "b2"));

        assert_eq!(store.len(), 2);
        // position preserved
        assert_eq!(store.records()[1], note("nt_1002", "b2"));
    }

    #[test]
    fn upsert_same_id_twice_keeps_one_record() {
        let mut store: RecordStore<Note> = RecordStore::new("nt", vec![]);
        let id = store.upsert(note("", "first"));
        store.upsert(note(&id, "second"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].body, "second");
    }

    #[test]
    fn upsert_unknown_id_prepends_with_generated_id() {
        let mut store = RecordStore::new("nt", vec![note("nt_1001", "a")]);

        let id = store.upsert(note("", "new"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].id, id);
        assert_eq!(store.records()[0].body, "new");
        assert_eq!(id, "nt_1002");
    }

    #[test]
    fn generated_ids_skip_seeded_suffixes() {
        let mut store = RecordStore::new("nt", vec![note("nt_4500", "a"), note("nt_1001", "b")]);

        assert_eq!(store.upsert(note("", "x")), "nt_4501");
        assert_eq!(store.upsert(note("", "y")), "nt_4502");
    }

    #[test]
    fn id_gen_ignores_foreign_prefixes() {
        let mut ids = IdGen::new("nt");
        ids.seed_past(["ev_9000", "nt_1005", "garbage"].into_iter());
        let mut next = ids.clone();
        assert_eq!(next.next_id(), "nt_1006");
    }

    #[test]
    fn update_with_edits_matching_record() {
        let mut store = RecordStore::new("nt", vec![note("nt_1001", "a")]);

        assert!(store.update_with("nt_1001", |n| n.body.push('!')));
        assert!(!store.update_with("nt_9999", |n| n.body.clear()));

        assert_eq!(store.records()[0].body, "a!");
    }
}
