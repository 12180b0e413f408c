use std::borrow::Cow;

use deutsch_learn_core::id::WordId;
use deutsch_learn_core::words::{HardLevel, WordForms};

use crate::TryIntoExternalModel;


#[derive(Clone, Debug)]
pub struct WordModel {
    pub id: WordId,

    pub german_word: String,

    pub translation: String,

    pub image: Option<String>,

    pub hard_level: HardLevel,

    pub forms: WordForms,
}


/// A row of the `words` table, exactly as stored.
#[derive(sqlx::FromRow)]
pub struct InternalWordModel {
    pub(crate) id: i64,

    pub(crate) german_word: String,

    pub(crate) translation: String,

    pub(crate) image: Option<String>,

    pub(crate) hard_level: i64,

    pub(crate) is_verb: bool,

    pub(crate) second_verb: Option<String>,

    pub(crate) third_verb: Option<String>,

    pub(crate) is_plural: bool,

    pub(crate) plural: Option<String>,
}

impl TryIntoExternalModel for InternalWordModel {
    type ExternalModel = WordModel;
    type Error = Cow<'static, str>;

    fn try_into_external_model(self) -> Result<Self::ExternalModel, Self::Error> {
        let hard_level = HardLevel::new(self.hard_level).ok_or_else(|| {
            Cow::from(format!(
                "word {} has hard level {}, expected a value between 0 and 100",
                self.id, self.hard_level
            ))
        })?;

        let forms = match (
            self.is_verb,
            self.is_plural,
            self.second_verb,
            self.third_verb,
            self.plural,
        ) {
            (false, false, None, None, None) => WordForms::Plain,
            (true, false, Some(second_verb), Some(third_verb), None) => WordForms::Verb {
                second_verb,
                third_verb,
            },
            (false, true, None, None, Some(plural)) => WordForms::Plural { plural },
            (is_verb, is_plural, ..) => {
                return Err(Cow::from(format!(
                    "word {} has inconsistent verb and plural columns \
                    (is_verb = {}, is_plural = {})",
                    self.id, is_verb, is_plural
                )));
            }
        };

        Ok(Self::ExternalModel {
            id: WordId::new(self.id),
            german_word: self.german_word,
            translation: self.translation,
            image: self.image,
            hard_level,
            forms,
        })
    }
}
