#![no_std] // Shared with the no_std stemmer

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod tags;
pub mod stem;

// Re-export core types for convenience
pub use tags::{PartOfSpeech, TagSet};
pub use stem::Stem;

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use rkyv::{check_archived_root, to_bytes, from_bytes};

    #[test]
    fn test_dictionary_archive_lookup() {
        let mut dict = Dictionary::new(1);
        dict.insert("kaon", &[PartOfSpeech::Verb]);
        dict.insert("balay", &[PartOfSpeech::Noun]);
        dict.insert("kaon", &[PartOfSpeech::Noun]);

        let bytes = to_bytes::<_, 256>(&dict.clone().sorted()).expect("Failed to serialize Dictionary");
        let archived = check_archived_root::<Dictionary>(&bytes).expect("archive should validate");

        assert_eq!(archived.lookup("kaon"), Some(TagSet::VERB | TagSet::NOUN));
        assert_eq!(archived.lookup("balay"), Some(TagSet::NOUN));
        assert_eq!(archived.lookup("iring"), None);
        assert_eq!(dict.lookup("kaon"), archived.lookup("kaon"));
    }

    #[test]
    fn test_dictionary_round_trip() {
        let mut dict = Dictionary::new(3);
        dict.insert("dako", &[PartOfSpeech::Adjective]);

        let bytes = to_bytes::<_, 256>(&dict).expect("Failed to serialize Dictionary");
        let restored: Dictionary = from_bytes(&bytes).expect("Failed to deserialize Dictionary");

        assert_eq!(restored, dict);
    }

    #[test]
    fn test_insert_merges_duplicate_roots() {
        let mut dict = Dictionary::new(1);
        dict.insert("sa", &[PartOfSpeech::Preposition]);
        dict.insert("sa", &[PartOfSpeech::Determiner]);

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.lookup("sa"), Some(TagSet::PREP | TagSet::DET));
    }

    #[test]
    fn test_tag_display_order() {
        let tags = TagSet::POS_LINK | TagSet::DET | TagSet::PREP;
        assert_eq!(tags.to_string(), "DET, PREP, POS_LINK");
        assert_eq!(TagSet::empty().to_string(), "");
    }

    #[test]
    fn test_stem_accessors() {
        let stem = Stem::new("nag", "kaon", "");
        assert_eq!(stem.prefix(), Some("nag"));
        assert_eq!(stem.suffix(), None);
        assert_eq!(stem.surface(), "nagkaon");
        assert_eq!(Stem::bare("balay").prefix(), None);
    }

    #[test]
    fn test_tag_layout() {
        // Every tag fits the u64 word stored in the archive
        assert_eq!(core::mem::size_of::<TagSet>(), 8);
        assert!(TagSet::all().bits() < u64::MAX);
    }
}
