use deutsch_learn_core::id::WordId;
use sqlx::SqliteConnection;

use super::{InternalWordModel, WordModel};
use crate::{QueryError, QueryResult, TryIntoExternalModel};


pub(super) fn into_external_word_model(
    internal_word: InternalWordModel,
) -> QueryResult<WordModel> {
    internal_word
        .try_into_external_model()
        .map_err(QueryError::database_inconsistency)
}

fn into_external_word_models(
    internal_words: Vec<InternalWordModel>,
) -> QueryResult<Vec<WordModel>> {
    internal_words
        .into_iter()
        .map(into_external_word_model)
        .collect()
}



pub struct WordQuery;

impl WordQuery {
    pub async fn get_all_ordered_by_id(
        database_connection: &mut SqliteConnection,
    ) -> QueryResult<Vec<WordModel>> {
        let internal_words = sqlx::query_as::<_, InternalWordModel>(
            "SELECT \
                    id, german_word, translation, image, hard_level, \
                    is_verb, second_verb, third_verb, is_plural, plural \
                FROM words \
                ORDER BY id ASC",
        )
        .fetch_all(database_connection)
        .await?;

        into_external_word_models(internal_words)
    }

    /// Returns all words in a random order, reshuffled on every call.
    pub async fn get_all_shuffled(
        database_connection: &mut SqliteConnection,
    ) -> QueryResult<Vec<WordModel>> {
        let internal_words = sqlx::query_as::<_, InternalWordModel>(
            "SELECT \
                    id, german_word, translation, image, hard_level, \
                    is_verb, second_verb, third_verb, is_plural, plural \
                FROM words \
                ORDER BY RANDOM()",
        )
        .fetch_all(database_connection)
        .await?;

        into_external_word_models(internal_words)
    }

    pub async fn get_by_id(
        database_connection: &mut SqliteConnection,
        word_id: WordId,
    ) -> QueryResult<Option<WordModel>> {
        let internal_word = sqlx::query_as::<_, InternalWordModel>(
            "SELECT \
                    id, german_word, translation, image, hard_level, \
                    is_verb, second_verb, third_verb, is_plural, plural \
                FROM words \
                WHERE id = ?",
        )
        .bind(word_id.into_inner())
        .fetch_optional(database_connection)
        .await?;

        internal_word.map(into_external_word_model).transpose()
    }

    pub async fn exists_by_translation(
        database_connection: &mut SqliteConnection,
        translation: &str,
    ) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS (\
                SELECT 1 \
                    FROM words \
                    WHERE translation = ?\
            )",
        )
        .bind(translation)
        .fetch_one(database_connection)
        .await?;

        Ok(exists == 1)
    }

    pub async fn exists_by_translation_on_other_word(
        database_connection: &mut SqliteConnection,
        translation: &str,
        excluded_word_id: WordId,
    ) -> QueryResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS (\
                SELECT 1 \
                    FROM words \
                    WHERE translation = ? AND id != ?\
            )",
        )
        .bind(translation)
        .bind(excluded_word_id.into_inner())
        .fetch_one(database_connection)
        .await?;

        Ok(exists == 1)
    }
}
