//! Vocabulary domain types.

use std::fmt::{self, Display, Formatter};


/// Maximum length (in characters) of [`NewWord::german_word`].
pub const GERMAN_WORD_MAX_LENGTH: usize = 100;

/// Maximum length (in characters) of [`NewWord::translation`].
pub const TRANSLATION_MAX_LENGTH: usize = 200;

/// Maximum length (in characters) of [`NewWord::image`].
pub const IMAGE_MAX_LENGTH: usize = 500;

/// Maximum length (in characters) of each verb and plural form.
pub const WORD_FORM_MAX_LENGTH: usize = 100;



/// Difficulty of a word, always in the `0..=100` range.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HardLevel(u8);

impl HardLevel {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Returns `None` if `value` lies outside of `0..=100`.
    pub fn new(value: i64) -> Option<Self> {
        if !(i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            return None;
        }

        u8::try_from(value).ok().map(Self)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for HardLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}



/// Grammatical forms attached to a word.
///
/// A word is either a plain word, a verb (with its second and third form)
/// or a noun with a plural form; never more than one of these.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WordForms {
    #[default]
    Plain,

    Verb {
        second_verb: String,
        third_verb: String,
    },

    Plural {
        plural: String,
    },
}

impl WordForms {
    #[inline]
    pub fn is_verb(&self) -> bool {
        matches!(self, Self::Verb { .. })
    }

    #[inline]
    pub fn is_plural(&self) -> bool {
        matches!(self, Self::Plural { .. })
    }

    pub fn second_verb(&self) -> Option<&str> {
        match self {
            Self::Verb { second_verb, .. } => Some(second_verb.as_str()),
            _ => None,
        }
    }

    pub fn third_verb(&self) -> Option<&str> {
        match self {
            Self::Verb { third_verb, .. } => Some(third_verb.as_str()),
            _ => None,
        }
    }

    pub fn plural(&self) -> Option<&str> {
        match self {
            Self::Plural { plural } => Some(plural.as_str()),
            _ => None,
        }
    }
}



/// A fully validated word that does not exist yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewWord {
    pub german_word: String,
    pub translation: String,
    pub image: Option<String>,
    pub hard_level: HardLevel,
    pub forms: WordForms,
}


/// A validated set of changes to apply to an existing word.
///
/// Each `None` means "leave as is".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordChanges {
    pub german_word: Option<String>,

    pub translation: Option<String>,

    /// `Some(None)` clears the image.
    pub image: Option<Option<String>>,

    pub hard_level: Option<HardLevel>,

    /// When present, replaces all verb and plural forms at once.
    pub forms: Option<WordForms>,
}

impl WordChanges {
    pub fn has_any_changes(&self) -> bool {
        self.german_word.is_some()
            || self.translation.is_some()
            || self.image.is_some()
            || self.hard_level.is_some()
            || self.forms.is_some()
    }
}
