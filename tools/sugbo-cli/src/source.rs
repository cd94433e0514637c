//! The JSON dictionary source and the two on-disk forms it is read from.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};
use rkyv::ser::{serializers::AllocSerializer, Serializer};
use rkyv::AlignedVec;
use serde::{Deserialize, Serialize};
use sugbo_protocol::{Dictionary, PartOfSpeech};
use tracing::info;

/// Built-in sample dictionary, used when no `--dictionary` is given.
pub const SAMPLE: &str = include_str!("../../../data/dictionary.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub root: String,
    pub pos: Vec<PartOfSpeech>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySource {
    pub version: u32,
    pub entries: Vec<SourceEntry>,
}

impl DictionarySource {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("malformed dictionary JSON")
    }

    /// Roots are lower-cased; repeated roots merge their parts of speech.
    pub fn into_dictionary(self) -> Dictionary {
        let mut dict = Dictionary::new(self.version);
        for entry in self.entries {
            dict.insert(&entry.root.to_lowercase(), &entry.pos);
        }
        dict.sorted()
    }
}

pub fn compile(dict: &Dictionary) -> anyhow::Result<AlignedVec> {
    let mut serializer = AllocSerializer::<256>::default();
    serializer
        .serialize_value(dict)
        .map_err(|e| anyhow!("failed to archive dictionary: {e:?}"))?;
    Ok(serializer.into_serializer().into_inner())
}

/// A dictionary as found on disk.
pub enum DictionaryFile {
    Json(Dictionary),
    /// Compiled bytes; validate with `check_archived_root` before use.
    Archive(AlignedVec),
}

impl DictionaryFile {
    /// `.json` files are sources; anything else is taken to be compiled.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let dict = DictionarySource::from_json(&text)?.into_dictionary();
            info!(entries = dict.len(), "loaded JSON dictionary");
            return Ok(DictionaryFile::Json(dict));
        }

        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(&bytes);
        info!(bytes = aligned.len(), "loaded compiled dictionary");
        Ok(DictionaryFile::Archive(aligned))
    }

    pub fn sample() -> anyhow::Result<Self> {
        Ok(DictionaryFile::Json(DictionarySource::from_json(SAMPLE)?.into_dictionary()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rkyv::check_archived_root;
    use sugbo_protocol::{RootLookup, TagSet};

    #[test]
    fn test_source_merges_and_sorts() {
        let source = DictionarySource::from_json(
            r#"{"version": 3, "entries": [
                {"root": "Luto", "pos": ["verb"]},
                {"root": "balay", "pos": ["noun"]},
                {"root": "luto", "pos": ["noun"]}
            ]}"#,
        )
        .unwrap();
        let dict = source.into_dictionary();

        assert_eq!(dict.version, 3);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.entries[0].root, "balay");
        assert_eq!(dict.lookup("luto"), Some(TagSet::VERB | TagSet::NOUN));
    }

    #[test]
    fn test_compiled_dictionary_validates() {
        let dict = DictionarySource::from_json(SAMPLE).unwrap().into_dictionary();
        let bytes = compile(&dict).unwrap();
        let archived = check_archived_root::<Dictionary>(&bytes[..]).unwrap();

        assert_eq!(archived.entries.len(), dict.len());
        assert_eq!(archived.lookup("kaon"), Some(TagSet::VERB));
        assert_eq!(archived.lookup("didto"), Some(TagSet::PLACE));
    }

    #[test]
    fn test_unknown_part_of_speech_is_rejected() {
        let err = DictionarySource::from_json(
            r#"{"version": 1, "entries": [{"root": "x", "pos": ["gerund"]}]}"#,
        );
        assert!(err.is_err());
    }
}
