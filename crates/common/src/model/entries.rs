use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sub-record with a stable identifier inside its parent collection.
pub trait Keyed {
    fn entry_id(&self) -> Uuid;
}

/// Ordered sequence of sub-records embedded in an aggregate.
///
/// All nested collections (likes, comments, experience, education) share the
/// same two invariants, enforced here rather than re-derived per route:
/// insertion is always at the front (most-recent-first), and removal takes
/// out at most the first positional match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList<T>(Vec<T>);

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> EntryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepend(&mut self, entry: T) {
        self.0.insert(0, entry);
    }

    /// Remove the first entry matching the predicate, if any.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let idx = self.0.iter().position(|e| pred(e))?;
        Some(self.0.remove(idx))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: Keyed> EntryList<T> {
    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.0.iter().find(|e| e.entry_id() == id)
    }

    pub fn contains_id(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn remove_by_id(&mut self, id: Uuid) -> Option<T> {
        self.remove_where(|e| e.entry_id() == id)
    }
}

impl<T> From<Vec<T>> for EntryList<T> {
    fn from(entries: Vec<T>) -> Self {
        Self(entries)
    }
}

impl<'a, T> IntoIterator for &'a EntryList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        id: Uuid,
        tag: &'static str,
    }

    impl Entry {
        fn new(tag: &'static str) -> Self {
            Self {
                id: Uuid::new_v4(),
                tag,
            }
        }
    }

    impl Keyed for Entry {
        fn entry_id(&self) -> Uuid {
            self.id
        }
    }

    #[test]
    fn prepend_keeps_most_recent_first() {
        let mut list = EntryList::new();
        list.prepend(Entry::new("first"));
        list.prepend(Entry::new("second"));

        let tags: Vec<_> = list.iter().map(|e| e.tag).collect();
        assert_eq!(tags, vec!["second", "first"]);
    }

    #[test]
    fn remove_by_id_takes_out_exactly_one() {
        let mut list = EntryList::new();
        let a = Entry::new("a");
        let a_id = a.id;
        list.prepend(a);
        list.prepend(Entry::new("b"));
        list.prepend(Entry::new("c"));

        let removed = list.remove_by_id(a_id).unwrap();
        assert_eq!(removed.tag, "a");
        assert_eq!(list.len(), 2);
        assert!(!list.contains_id(a_id));
    }

    #[test]
    fn remove_unknown_id_leaves_list_unchanged() {
        let mut list = EntryList::new();
        list.prepend(Entry::new("a"));

        assert!(list.remove_by_id(Uuid::new_v4()).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_where_only_removes_first_match() {
        let mut list = EntryList::new();
        list.prepend(Entry::new("dup"));
        list.prepend(Entry::new("dup"));

        assert!(list.remove_where(|e| e.tag == "dup").is_some());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn serializes_transparently() {
        let mut list: EntryList<u32> = EntryList::new();
        list.prepend(1);
        list.prepend(2);

        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "[2,1]");

        let back: EntryList<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
