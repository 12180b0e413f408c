use deutsch_learn_core::id::WordId;
use deutsch_learn_core::words::{NewWord, WordChanges};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use super::query::into_external_word_model;
use super::{InternalWordModel, WordModel};
use crate::QueryResult;


/// SQLite limits the number of bound parameters per statement,
/// so larger deletions are split into several statements.
const MAX_IDS_PER_DELETE_STATEMENT: usize = 500;


fn build_word_update_query(
    word_id: WordId,
    changes: WordChanges,
) -> QueryBuilder<'static, Sqlite> {
    let mut update_query_builder = QueryBuilder::new("UPDATE words SET ");

    let mut separated_set_expressions = update_query_builder.separated(", ");

    if let Some(new_german_word) = changes.german_word {
        separated_set_expressions.push("german_word = ");
        separated_set_expressions.push_bind_unseparated(new_german_word);
    }

    if let Some(new_translation) = changes.translation {
        separated_set_expressions.push("translation = ");
        separated_set_expressions.push_bind_unseparated(new_translation);
    }

    if let Some(new_image) = changes.image {
        separated_set_expressions.push("image = ");
        separated_set_expressions.push_bind_unseparated(new_image);
    }

    if let Some(new_hard_level) = changes.hard_level {
        separated_set_expressions.push("hard_level = ");
        separated_set_expressions.push_bind_unseparated(i64::from(new_hard_level.value()));
    }

    if let Some(new_forms) = changes.forms {
        separated_set_expressions.push("is_verb = ");
        separated_set_expressions.push_bind_unseparated(new_forms.is_verb());

        separated_set_expressions.push("second_verb = ");
        separated_set_expressions.push_bind_unseparated(new_forms.second_verb().map(str::to_string));

        separated_set_expressions.push("third_verb = ");
        separated_set_expressions.push_bind_unseparated(new_forms.third_verb().map(str::to_string));

        separated_set_expressions.push("is_plural = ");
        separated_set_expressions.push_bind_unseparated(new_forms.is_plural());

        separated_set_expressions.push("plural = ");
        separated_set_expressions.push_bind_unseparated(new_forms.plural().map(str::to_string));
    }


    update_query_builder.push(" WHERE id = ");
    update_query_builder.push_bind(word_id.into_inner());

    update_query_builder.push(
        " RETURNING \
            id, german_word, translation, image, hard_level, \
            is_verb, second_verb, third_verb, is_plural, plural",
    );

    update_query_builder
}




pub struct WordMutation;

impl WordMutation {
    pub async fn create(
        database_connection: &mut SqliteConnection,
        new_word: NewWord,
    ) -> QueryResult<WordModel> {
        let is_verb = new_word.forms.is_verb();
        let is_plural = new_word.forms.is_plural();
        let second_verb = new_word.forms.second_verb().map(str::to_string);
        let third_verb = new_word.forms.third_verb().map(str::to_string);
        let plural = new_word.forms.plural().map(str::to_string);

        let newly_created_word = sqlx::query_as::<_, InternalWordModel>(
            "INSERT INTO words \
                (german_word, translation, image, hard_level, \
                 is_verb, second_verb, third_verb, is_plural, plural) \
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
                RETURNING \
                    id, german_word, translation, image, hard_level, \
                    is_verb, second_verb, third_verb, is_plural, plural",
        )
        .bind(new_word.german_word)
        .bind(new_word.translation)
        .bind(new_word.image)
        .bind(i64::from(new_word.hard_level.value()))
        .bind(is_verb)
        .bind(second_verb)
        .bind(third_verb)
        .bind(is_plural)
        .bind(plural)
        .fetch_one(database_connection)
        .await?;

        into_external_word_model(newly_created_word)
    }

    /// Applies `changes` to the word and returns its updated state.
    ///
    /// Returns `None` if no word with the given ID exists, or if `changes` is empty
    /// (in which case nothing is executed).
    pub async fn update(
        database_connection: &mut SqliteConnection,
        word_id: WordId,
        changes: WordChanges,
    ) -> QueryResult<Option<WordModel>> {
        if !changes.has_any_changes() {
            return Ok(None);
        }


        let mut update_query_builder = build_word_update_query(word_id, changes);

        let updated_word = update_query_builder
            .build_query_as::<InternalWordModel>()
            .fetch_optional(database_connection)
            .await?;


        updated_word.map(into_external_word_model).transpose()
    }

    /// Deletes all words with the given IDs, ignoring IDs that don't exist.
    /// Returns the number of deleted words.
    pub async fn delete_by_ids(
        database_connection: &mut SqliteConnection,
        word_ids: &[WordId],
    ) -> QueryResult<u64> {
        let mut total_deleted_words = 0;

        for word_id_chunk in word_ids.chunks(MAX_IDS_PER_DELETE_STATEMENT) {
            let mut delete_query_builder =
                QueryBuilder::<Sqlite>::new("DELETE FROM words WHERE id IN (");

            let mut separated_ids = delete_query_builder.separated(", ");
            for word_id in word_id_chunk {
                separated_ids.push_bind(word_id.into_inner());
            }
            separated_ids.push_unseparated(")");


            let query_result = delete_query_builder
                .build()
                .execute(&mut *database_connection)
                .await?;

            total_deleted_words += query_result.rows_affected();
        }

        Ok(total_deleted_words)
    }
}
