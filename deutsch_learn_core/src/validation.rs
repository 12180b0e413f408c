//! Validation of incoming word payloads.
//!
//! Request models are turned into [`NewWord`] and [`WordChanges`] only through
//! [`WordCreationRequest::validate`] and [`WordUpdateRequest::validate`],
//! so anything past this point is guaranteed to respect field bounds and
//! the verb / plural consistency rules.

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::api_models::{WordCreationRequest, WordUpdateRequest};
use crate::words::{
    HardLevel,
    NewWord,
    WordChanges,
    WordForms,
    GERMAN_WORD_MAX_LENGTH,
    IMAGE_MAX_LENGTH,
    TRANSLATION_MAX_LENGTH,
    WORD_FORM_MAX_LENGTH,
};



/// Names a field of a word payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordField {
    GermanWord,
    Translation,
    Image,
    HardLevel,
    IsVerb,
    SecondVerb,
    ThirdVerb,
    IsPlural,
    Plural,
}

impl WordField {
    /// Name of the field as it appears in JSON payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GermanWord => "german_word",
            Self::Translation => "translation",
            Self::Image => "image",
            Self::HardLevel => "hard_level",
            Self::IsVerb => "is_verb",
            Self::SecondVerb => "second_verb",
            Self::ThirdVerb => "third_verb",
            Self::IsPlural => "is_plural",
            Self::Plural => "plural",
        }
    }
}

impl Display for WordField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}



#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordValidationError {
    #[error("field \"{field}\" must not be empty")]
    EmptyField { field: WordField },

    #[error(
        "field \"{field}\" is too long: {length} characters, at most {max_length} are allowed"
    )]
    FieldTooLong {
        field: WordField,
        length: usize,
        max_length: usize,
    },

    #[error(
        "field \"hard_level\" must be between {} and {}, got {value}",
        HardLevel::MIN,
        HardLevel::MAX
    )]
    HardLevelOutOfRange { value: i64 },

    #[error("field \"{field}\" is required when \"{flag}\" is true")]
    MissingWordForm { field: WordField, flag: WordField },

    #[error("field \"{field}\" can only be updated together with \"is_verb\" or \"is_plural\"")]
    WordFormWithoutFlag { field: WordField },
}

impl WordValidationError {
    /// The field that failed validation.
    pub fn field(&self) -> WordField {
        match self {
            Self::EmptyField { field } => *field,
            Self::FieldTooLong { field, .. } => *field,
            Self::HardLevelOutOfRange { .. } => WordField::HardLevel,
            Self::MissingWordForm { field, .. } => *field,
            Self::WordFormWithoutFlag { field } => *field,
        }
    }
}



fn ensure_not_longer_than(
    value: &str,
    field: WordField,
    max_length: usize,
) -> Result<(), WordValidationError> {
    let length = value.chars().count();

    if length > max_length {
        return Err(WordValidationError::FieldTooLong {
            field,
            length,
            max_length,
        });
    }

    Ok(())
}

fn validate_required_text(
    value: String,
    field: WordField,
    max_length: usize,
) -> Result<String, WordValidationError> {
    if value.is_empty() {
        return Err(WordValidationError::EmptyField { field });
    }

    ensure_not_longer_than(&value, field, max_length)?;

    Ok(value)
}

fn validate_optional_text(
    value: Option<String>,
    field: WordField,
    max_length: usize,
) -> Result<Option<String>, WordValidationError> {
    if let Some(value) = value.as_deref() {
        ensure_not_longer_than(value, field, max_length)?;
    }

    Ok(value)
}

fn validate_hard_level(value: i64) -> Result<HardLevel, WordValidationError> {
    HardLevel::new(value).ok_or(WordValidationError::HardLevelOutOfRange { value })
}

fn require_word_form(
    value: Option<String>,
    field: WordField,
    flag: WordField,
) -> Result<String, WordValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(WordValidationError::MissingWordForm { field, flag }),
    }
}


/// Derives the word forms from the flat flag-and-field representation.
///
/// Verbs take precedence over plurals. Form fields that the chosen
/// variant doesn't use are discarded.
fn resolve_word_forms(
    is_verb: bool,
    is_plural: bool,
    second_verb: Option<String>,
    third_verb: Option<String>,
    plural: Option<String>,
) -> Result<WordForms, WordValidationError> {
    let second_verb = validate_optional_text(
        second_verb,
        WordField::SecondVerb,
        WORD_FORM_MAX_LENGTH,
    )?;
    let third_verb = validate_optional_text(
        third_verb,
        WordField::ThirdVerb,
        WORD_FORM_MAX_LENGTH,
    )?;
    let plural = validate_optional_text(plural, WordField::Plural, WORD_FORM_MAX_LENGTH)?;


    if is_verb {
        let second_verb = require_word_form(second_verb, WordField::SecondVerb, WordField::IsVerb)?;
        let third_verb = require_word_form(third_verb, WordField::ThirdVerb, WordField::IsVerb)?;

        Ok(WordForms::Verb {
            second_verb,
            third_verb,
        })
    } else if is_plural {
        let plural = require_word_form(plural, WordField::Plural, WordField::IsPlural)?;

        Ok(WordForms::Plural { plural })
    } else {
        Ok(WordForms::Plain)
    }
}



impl WordCreationRequest {
    pub fn validate(self) -> Result<NewWord, WordValidationError> {
        let german_word = validate_required_text(
            self.german_word,
            WordField::GermanWord,
            GERMAN_WORD_MAX_LENGTH,
        )?;

        let translation = validate_required_text(
            self.translation,
            WordField::Translation,
            TRANSLATION_MAX_LENGTH,
        )?;

        let image = validate_optional_text(self.image, WordField::Image, IMAGE_MAX_LENGTH)?;

        let hard_level = validate_hard_level(self.hard_level)?;

        let forms = resolve_word_forms(
            self.is_verb,
            self.is_plural,
            self.second_verb,
            self.third_verb,
            self.plural,
        )?;


        Ok(NewWord {
            german_word,
            translation,
            image,
            hard_level,
            forms,
        })
    }
}


impl WordUpdateRequest {
    /// Validates the supplied fields.
    ///
    /// Supplying `is_verb` or `is_plural` replaces the word's forms as a whole
    /// (an omitted flag counts as `false`). Form fields supplied without
    /// either flag are rejected.
    pub fn validate(self) -> Result<WordChanges, WordValidationError> {
        let german_word = self
            .german_word
            .map(|german_word| {
                validate_required_text(
                    german_word,
                    WordField::GermanWord,
                    GERMAN_WORD_MAX_LENGTH,
                )
            })
            .transpose()?;

        let translation = self
            .translation
            .map(|translation| {
                validate_required_text(
                    translation,
                    WordField::Translation,
                    TRANSLATION_MAX_LENGTH,
                )
            })
            .transpose()?;

        let image = self
            .image
            .map(|image| validate_optional_text(image, WordField::Image, IMAGE_MAX_LENGTH))
            .transpose()?;

        let hard_level = self.hard_level.map(validate_hard_level).transpose()?;


        let forms = if self.is_verb.is_none() && self.is_plural.is_none() {
            let unflagged_form_field = [
                (WordField::SecondVerb, self.second_verb.is_some()),
                (WordField::ThirdVerb, self.third_verb.is_some()),
                (WordField::Plural, self.plural.is_some()),
            ]
            .into_iter()
            .find_map(|(field, is_present)| is_present.then_some(field));

            if let Some(field) = unflagged_form_field {
                return Err(WordValidationError::WordFormWithoutFlag { field });
            }

            None
        } else {
            Some(resolve_word_forms(
                self.is_verb.unwrap_or(false),
                self.is_plural.unwrap_or(false),
                self.second_verb,
                self.third_verb,
                self.plural,
            )?)
        };


        Ok(WordChanges {
            german_word,
            translation,
            image,
            hard_level,
            forms,
        })
    }
}



#[cfg(test)]
mod test {
    use super::*;

    fn creation_request(german_word: &str, translation: &str) -> WordCreationRequest {
        WordCreationRequest {
            german_word: german_word.to_string(),
            translation: translation.to_string(),
            image: None,
            hard_level: 0,
            is_verb: false,
            second_verb: None,
            third_verb: None,
            is_plural: false,
            plural: None,
        }
    }

    #[test]
    fn plain_word_passes_creation_validation() {
        let new_word = creation_request("Hund", "dog").validate().unwrap();

        assert_eq!(new_word.german_word, "Hund");
        assert_eq!(new_word.translation, "dog");
        assert_eq!(new_word.image, None);
        assert_eq!(new_word.hard_level, HardLevel::MIN);
        assert_eq!(new_word.forms, WordForms::Plain);
    }

    #[test]
    fn verb_requires_both_additional_forms() {
        let mut request = creation_request("laufen", "to run");
        request.is_verb = true;
        request.third_verb = Some("gelaufen".to_string());

        assert_eq!(
            request.clone().validate().unwrap_err(),
            WordValidationError::MissingWordForm {
                field: WordField::SecondVerb,
                flag: WordField::IsVerb
            }
        );

        request.second_verb = Some(String::new());
        assert_eq!(
            request.clone().validate().unwrap_err().field(),
            WordField::SecondVerb
        );

        request.second_verb = Some("lief".to_string());
        let new_word = request.validate().unwrap();

        assert_eq!(
            new_word.forms,
            WordForms::Verb {
                second_verb: "lief".to_string(),
                third_verb: "gelaufen".to_string()
            }
        );
    }

    #[test]
    fn verb_takes_precedence_over_plural() {
        let mut request = creation_request("laufen", "to run");
        request.is_verb = true;
        request.second_verb = Some("lief".to_string());
        request.third_verb = Some("gelaufen".to_string());
        request.is_plural = true;
        request.plural = Some("laufens".to_string());

        let new_word = request.validate().unwrap();

        assert!(new_word.forms.is_verb());
        assert!(!new_word.forms.is_plural());
        assert_eq!(new_word.forms.plural(), None);
    }

    #[test]
    fn plural_requires_plural_form() {
        let mut request = creation_request("Hund", "dog");
        request.is_plural = true;

        assert_eq!(
            request.clone().validate().unwrap_err(),
            WordValidationError::MissingWordForm {
                field: WordField::Plural,
                flag: WordField::IsPlural
            }
        );

        request.plural = Some("Hunde".to_string());
        request.second_verb = Some("ignored".to_string());

        let new_word = request.validate().unwrap();
        assert_eq!(
            new_word.forms,
            WordForms::Plural {
                plural: "Hunde".to_string()
            }
        );
    }

    #[test]
    fn unflagged_forms_are_discarded_on_creation() {
        let mut request = creation_request("Hund", "dog");
        request.second_verb = Some("x".to_string());
        request.third_verb = Some("y".to_string());
        request.plural = Some("Hunde".to_string());

        assert_eq!(request.validate().unwrap().forms, WordForms::Plain);
    }

    #[test]
    fn hard_level_bounds_are_enforced() {
        for invalid_level in [-1, 101] {
            let mut request = creation_request("Hund", "dog");
            request.hard_level = invalid_level;

            assert_eq!(
                request.validate().unwrap_err(),
                WordValidationError::HardLevelOutOfRange {
                    value: invalid_level
                }
            );
        }

        let mut request = creation_request("Hund", "dog");
        request.hard_level = 100;
        assert_eq!(request.validate().unwrap().hard_level, HardLevel::MAX);
    }

    #[test]
    fn text_bounds_are_counted_in_characters() {
        assert_eq!(
            creation_request("", "dog").validate().unwrap_err(),
            WordValidationError::EmptyField {
                field: WordField::GermanWord
            }
        );

        assert_eq!(
            creation_request("Hund", "").validate().unwrap_err().field(),
            WordField::Translation
        );

        // 100 umlauts are 200 bytes, but still within the limit.
        let long_but_valid = "ä".repeat(GERMAN_WORD_MAX_LENGTH);
        assert!(creation_request(&long_but_valid, "dog").validate().is_ok());

        let too_long = "ä".repeat(GERMAN_WORD_MAX_LENGTH + 1);
        assert_eq!(
            creation_request(&too_long, "dog").validate().unwrap_err(),
            WordValidationError::FieldTooLong {
                field: WordField::GermanWord,
                length: GERMAN_WORD_MAX_LENGTH + 1,
                max_length: GERMAN_WORD_MAX_LENGTH
            }
        );

        let mut request = creation_request("Hund", "dog");
        request.image = Some("x".repeat(IMAGE_MAX_LENGTH + 1));
        assert_eq!(request.validate().unwrap_err().field(), WordField::Image);
    }

    #[test]
    fn empty_update_has_no_changes() {
        let changes = WordUpdateRequest::default().validate().unwrap();

        assert!(!changes.has_any_changes());
    }

    #[test]
    fn update_without_flags_leaves_forms_untouched() {
        let changes = WordUpdateRequest {
            translation: Some("hound".to_string()),
            hard_level: Some(42),
            image: Some(None),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(changes.translation.as_deref(), Some("hound"));
        assert_eq!(changes.hard_level, HardLevel::new(42));
        assert_eq!(changes.image, Some(None));
        assert_eq!(changes.forms, None);
    }

    #[test]
    fn update_rejects_form_fields_without_flags() {
        let error = WordUpdateRequest {
            plural: Some("Hunde".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            error,
            WordValidationError::WordFormWithoutFlag {
                field: WordField::Plural
            }
        );
    }

    #[test]
    fn update_with_flag_replaces_forms_as_a_whole() {
        let changes = WordUpdateRequest {
            is_plural: Some(true),
            plural: Some("Hunde".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(
            changes.forms,
            Some(WordForms::Plural {
                plural: "Hunde".to_string()
            })
        );


        let changes = WordUpdateRequest {
            is_verb: Some(false),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(changes.forms, Some(WordForms::Plain));


        let error = WordUpdateRequest {
            is_verb: Some(true),
            second_verb: Some("lief".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(error.field(), WordField::ThirdVerb);
    }

    #[test]
    fn update_checks_bounds_of_supplied_fields() {
        let error = WordUpdateRequest {
            hard_level: Some(101),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(error.field(), WordField::HardLevel);

        let error = WordUpdateRequest {
            german_word: Some(String::new()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        assert_eq!(error.field(), WordField::GermanWord);
    }

    #[test]
    fn validation_errors_name_the_field() {
        let error = WordValidationError::MissingWordForm {
            field: WordField::SecondVerb,
            flag: WordField::IsVerb,
        };

        assert_eq!(
            error.to_string(),
            "field \"second_verb\" is required when \"is_verb\" is true"
        );

        assert_eq!(
            WordValidationError::HardLevelOutOfRange { value: 101 }.to_string(),
            "field \"hard_level\" must be between 0 and 100, got 101"
        );
    }
}
