use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::id::WordId;


/// A single vocabulary entry.
///
/// Verb and plural forms are flattened: `second_verb` and `third_verb` are
/// set exactly when `is_verb` is true, `plural` exactly when `is_plural` is true.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[schema(
    example = json!({
        "id": 2,
        "german_word": "laufen",
        "translation": "to run",
        "image": null,
        "hard_level": 10,
        "is_verb": true,
        "second_verb": "lief",
        "third_verb": "gelaufen",
        "is_plural": false,
        "plural": null
    })
)]
pub struct Word {
    #[schema(value_type = i64)]
    pub id: WordId,

    pub german_word: String,

    pub translation: String,

    pub image: Option<String>,

    pub hard_level: u8,

    pub is_verb: bool,

    pub second_verb: Option<String>,

    pub third_verb: Option<String>,

    pub is_plural: bool,

    pub plural: Option<String>,
}



#[derive(Deserialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
#[schema(
    example = json!({
        "german_word": "Hund",
        "translation": "dog",
        "hard_level": 5,
        "is_verb": false,
        "is_plural": true,
        "plural": "Hunde"
    })
)]
pub struct WordCreationRequest {
    pub german_word: String,

    pub translation: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Must be between 0 and 100 (inclusive). Defaults to 0.
    #[serde(default)]
    pub hard_level: i64,

    #[serde(default)]
    pub is_verb: bool,

    /// Required if `is_verb` is true, ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_verb: Option<String>,

    /// Required if `is_verb` is true, ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_verb: Option<String>,

    #[serde(default)]
    pub is_plural: bool,

    /// Required if `is_plural` is true (and `is_verb` is false), ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
}



/// Partial update of a word. Omitted fields are left unchanged.
///
/// If either `is_verb` or `is_plural` is present, the verb and plural forms
/// are replaced as a whole: the omitted flag counts as `false` and the same
/// rules as on creation apply. Providing `second_verb`, `third_verb` or `plural`
/// without any of the two flags is rejected.
#[derive(Deserialize, Clone, PartialEq, Eq, Debug, Default, ToSchema)]
#[cfg_attr(feature = "serde_impls_for_client_on_models", derive(Serialize))]
#[schema(
    example = json!({
        "translation": "hound",
        "hard_level": 20,
        "image": null
    })
)]
pub struct WordUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub german_word: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,

    /// # Interpreting the double option
    /// To distinguish from an unset and a null JSON value, this field is a
    /// double option. `None` indicates the field was not present
    /// (i.e. that the image should not change as part of this update),
    /// while `Some(None)` indicates it was set to `null`
    /// (i.e. that the image should be removed).
    ///
    /// See also: [`serde_with::rust::double_option`].
    #[serde(
        default,
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub image: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_level: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verb: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_verb: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_verb: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_plural: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn creation_request_fills_in_defaults() {
        let request: WordCreationRequest = serde_json::from_str(
            r#"{ "german_word": "Hund", "translation": "dog" }"#,
        )
        .unwrap();

        assert_eq!(request.image, None);
        assert_eq!(request.hard_level, 0);
        assert!(!request.is_verb);
        assert!(!request.is_plural);
        assert_eq!(request.plural, None);
    }

    #[test]
    fn update_request_distinguishes_null_image_from_missing_image() {
        let request: WordUpdateRequest = serde_json::from_str(r#"{ "image": null }"#).unwrap();
        assert_eq!(request.image, Some(None));

        let request: WordUpdateRequest =
            serde_json::from_str(r#"{ "image": "dog.png" }"#).unwrap();
        assert_eq!(request.image, Some(Some("dog.png".to_string())));

        let request: WordUpdateRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(request, WordUpdateRequest::default());
    }

    #[test]
    fn update_request_treats_null_as_missing_for_other_fields() {
        let request: WordUpdateRequest =
            serde_json::from_str(r#"{ "translation": null, "is_verb": null }"#).unwrap();

        assert_eq!(request.translation, None);
        assert_eq!(request.is_verb, None);
    }

    #[test]
    fn word_serializes_absent_fields_as_null() {
        let word = Word {
            id: WordId::new(1),
            german_word: "Hund".to_string(),
            translation: "dog".to_string(),
            image: None,
            hard_level: 0,
            is_verb: false,
            second_verb: None,
            third_verb: None,
            is_plural: false,
            plural: None,
        };

        let serialized = serde_json::to_value(&word).unwrap();

        assert_eq!(
            serialized,
            serde_json::json!({
                "id": 1,
                "german_word": "Hund",
                "translation": "dog",
                "image": null,
                "hard_level": 0,
                "is_verb": false,
                "second_verb": null,
                "third_verb": null,
                "is_plural": false,
                "plural": null
            })
        );
    }
}
