//! A small root dictionary for tests.

use sugbo_protocol::{Dictionary, PartOfSpeech};

pub(crate) fn dictionary() -> Dictionary {
    let mut dict = Dictionary::new(1);
    let groups: &[(&[&str], PartOfSpeech)] = &[
        (
            &["kaon", "dula", "laba", "inom", "lakaw", "basa", "sulat", "palit"],
            PartOfSpeech::Verb,
        ),
        (
            &["bata", "balay", "iring", "iro", "libro", "tubig", "nanay", "tindahan"],
            PartOfSpeech::Noun,
        ),
        (&["dako", "gamay", "maayo", "nindot", "pula"], PartOfSpeech::Adjective),
        (&["alas", "dili", "kanunay"], PartOfSpeech::Adverb),
        (&["diri", "didto", "dinhi"], PartOfSpeech::Place),
    ];
    for (roots, part) in groups {
        for root in roots.iter() {
            dict.insert(root, &[*part]);
        }
    }
    dict
}
