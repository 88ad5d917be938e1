//! Curated words served when no quote matches the caller's preferences.

use crate::card::WordCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackWord {
    pub word: &'static str,
    pub definition: &'static str,
    pub example: &'static str,
    pub source: &'static str,
}

pub const WORDS: &[FallbackWord] = &[
    FallbackWord {
        word: "Ephemeral",
        definition: "Lasting for a very short time.",
        example: "Fame in the digital age is often ephemeral, here today and forgotten tomorrow.",
        source: "Inspired by Black Mirror",
    },
    FallbackWord {
        word: "Sanguine",
        definition: "Optimistic or positive, especially in an apparently bad or difficult situation.",
        example: "Despite the mounting evidence, the detective remained sanguine about cracking the case.",
        source: "Inspired by Sherlock",
    },
    FallbackWord {
        word: "Obfuscate",
        definition: "To render obscure, unclear, or unintelligible.",
        example: "The lawyers tried to obfuscate the facts until nobody in the courtroom knew what was true.",
        source: "Inspired by Better Call Saul",
    },
    FallbackWord {
        word: "Mercurial",
        definition: "Subject to sudden or unpredictable changes of mood or mind.",
        example: "The mercurial chef could praise a dish one moment and hurl it across the kitchen the next.",
        source: "Inspired by The Bear",
    },
    FallbackWord {
        word: "Perfidious",
        definition: "Deceitful and untrustworthy.",
        example: "Every house in the realm feared a perfidious ally more than an open enemy.",
        source: "Inspired by Game of Thrones",
    },
    FallbackWord {
        word: "Laconic",
        definition: "Using very few words.",
        example: "The gunslinger's laconic reply said more than any speech could.",
        source: "Inspired by classic Westerns",
    },
    FallbackWord {
        word: "Ineffable",
        definition: "Too great or extreme to be expressed or described in words.",
        example: "Standing before the monolith, the astronauts felt an ineffable sense of awe.",
        source: "Inspired by 2001: A Space Odyssey",
    },
    FallbackWord {
        word: "Pernicious",
        definition: "Having a harmful effect, especially in a gradual or subtle way.",
        example: "The pernicious influence of the empire crept into every corner of the kingdom.",
        source: "Inspired by Star Wars",
    },
];

impl FallbackWord {
    pub fn to_card(self) -> WordCard {
        WordCard {
            word: self.word.to_string(),
            definition: self.definition.to_string(),
            quote: self.example.to_string(),
            character: String::new(),
            title: self.source.to_string(),
        }
    }
}

/// A uniformly random entry from [`WORDS`].
pub fn pick() -> FallbackWord {
    WORDS[fastrand::usize(..WORDS.len())]
}
