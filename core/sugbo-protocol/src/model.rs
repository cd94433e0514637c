use rkyv::{Archive, Deserialize, Serialize};
use crate::tags::{PartOfSpeech, TagSet};
use alloc::string::String;
use alloc::vec::Vec;

/// One dictionary headword. `tags` holds raw `TagSet` bits so the archive
/// stays a plain integer.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[archive(check_bytes)]
pub struct Entry {
    pub root: String,
    pub tags: u64,
}

impl Entry {
    pub fn new(root: impl Into<String>, parts: &[PartOfSpeech]) -> Self {
        Self {
            root: root.into(),
            tags: PartOfSpeech::tags_of(parts).bits(),
        }
    }

    pub fn tag_set(&self) -> TagSet {
        TagSet::from_bits_truncate(self.tags)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[archive(check_bytes)]
pub struct Dictionary {
    pub version: u32,
    pub entries: Vec<Entry>,
}

impl Dictionary {
    pub fn new(version: u32) -> Self {
        Self { version, entries: Vec::new() }
    }

    /// Add a root, merging its parts of speech into an existing entry.
    pub fn insert(&mut self, root: &str, parts: &[PartOfSpeech]) {
        let bits = PartOfSpeech::tags_of(parts).bits();
        match self.entries.iter_mut().find(|e| e.root == root) {
            Some(entry) => entry.tags |= bits,
            None => self.entries.push(Entry { root: root.into(), tags: bits }),
        }
    }

    /// Entries ordered by root, the layout the dictionary compiler writes.
    pub fn sorted(mut self) -> Self {
        self.entries.sort_by(|a, b| a.root.cmp(&b.root));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The dictionary collaborator: root word -> parts of speech, or not found.
pub trait RootLookup {
    fn lookup(&self, root: &str) -> Option<TagSet>;

    fn contains(&self, root: &str) -> bool {
        self.lookup(root).is_some()
    }
}

impl RootLookup for Dictionary {
    // Linear scan; dictionaries here are a few thousand roots at most.
    fn lookup(&self, root: &str) -> Option<TagSet> {
        self.entries
            .iter()
            .find(|e| e.root == root)
            .map(Entry::tag_set)
    }
}

impl RootLookup for ArchivedDictionary {
    fn lookup(&self, root: &str) -> Option<TagSet> {
        self.entries
            .iter()
            .find(|e| e.root.as_str() == root)
            .map(|e| TagSet::from_bits_truncate(e.tags))
    }
}

impl<T: RootLookup + ?Sized> RootLookup for &T {
    fn lookup(&self, root: &str) -> Option<TagSet> {
        (**self).lookup(root)
    }
}
