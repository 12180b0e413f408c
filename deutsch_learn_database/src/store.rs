//! Transactional word operations.
//!
//! [`WordStore`] combines [`WordQuery`] and [`WordMutation`] into the operations
//! the API exposes. Every operation that checks something before writing runs both
//! steps inside one write transaction, and reports translation conflicts and other
//! constraint violations as outcomes instead of errors. Only unexpected database
//! failures end up as [`QueryError`]s, after the transaction has been rolled back.
//!
//! Write transactions are opened with `BEGIN IMMEDIATE`: SQLite then takes the
//! write lock up front (waiting on the busy timeout if another writer holds it),
//! instead of failing with `SQLITE_BUSY` when a deferred transaction tries to
//! upgrade its read lock after the checks.

use deutsch_learn_core::id::WordId;
use deutsch_learn_core::words::{NewWord, WordChanges};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use crate::entities::{WordModel, WordMutation, WordQuery};
use crate::{QueryError, QueryResult};


pub enum WordCreationOutcome {
    Created { word: WordModel },

    /// Another word already uses the same translation.
    TranslationConflict,

    /// The database rejected the word for violating a check or not-null constraint.
    ConstraintViolation,
}


pub enum WordUpdateOutcome {
    Updated { word: WordModel },

    NotFound,

    /// Another word already uses the requested translation.
    TranslationConflict,

    /// The database rejected the update for violating a check or not-null constraint.
    ConstraintViolation,
}



/// What to do with a write that failed.
enum WriteFailure {
    TranslationConflict,
    ConstraintViolation,
    Fault(QueryError),
}

impl From<QueryError> for WriteFailure {
    fn from(error: QueryError) -> Self {
        if error.is_unique_violation() {
            Self::TranslationConflict
        } else if error.is_constraint_violation() {
            Self::ConstraintViolation
        } else {
            Self::Fault(error)
        }
    }
}

impl From<sqlx::Error> for WriteFailure {
    fn from(error: sqlx::Error) -> Self {
        Self::from(QueryError::from(error))
    }
}


async fn begin_write_transaction(
    database_pool: &SqlitePool,
) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    database_pool.begin_with("BEGIN IMMEDIATE").await
}

async fn commit(transaction: Transaction<'static, Sqlite>) -> Result<(), WriteFailure> {
    transaction.commit().await.map_err(WriteFailure::from)
}



pub struct WordStore;

impl WordStore {
    pub async fn list_all(database_pool: &SqlitePool) -> QueryResult<Vec<WordModel>> {
        let mut database_connection = database_pool.acquire().await?;

        WordQuery::get_all_ordered_by_id(&mut database_connection).await
    }

    pub async fn list_shuffled(database_pool: &SqlitePool) -> QueryResult<Vec<WordModel>> {
        let mut database_connection = database_pool.acquire().await?;

        WordQuery::get_all_shuffled(&mut database_connection).await
    }

    pub async fn get_by_id(
        database_pool: &SqlitePool,
        word_id: WordId,
    ) -> QueryResult<Option<WordModel>> {
        let mut database_connection = database_pool.acquire().await?;

        WordQuery::get_by_id(&mut database_connection, word_id).await
    }

    /// Deletes every word whose ID is in `word_ids` in a single transaction.
    /// Unknown IDs are ignored. Returns the number of deleted words.
    pub async fn delete_by_ids(
        database_pool: &SqlitePool,
        word_ids: &[WordId],
    ) -> QueryResult<u64> {
        if word_ids.is_empty() {
            return Ok(0);
        }

        let mut transaction = begin_write_transaction(database_pool).await?;

        let deleted_words = WordMutation::delete_by_ids(&mut transaction, word_ids).await?;

        transaction.commit().await?;

        Ok(deleted_words)
    }

    pub async fn create(
        database_pool: &SqlitePool,
        new_word: NewWord,
    ) -> QueryResult<WordCreationOutcome> {
        let mut transaction = begin_write_transaction(database_pool).await?;

        let translation_exists =
            WordQuery::exists_by_translation(&mut transaction, &new_word.translation).await?;

        if translation_exists {
            debug!(
                translation = new_word.translation.as_str(),
                "Refusing to create word: translation already exists."
            );

            return Ok(WordCreationOutcome::TranslationConflict);
        }


        let inserted_word = WordMutation::create(&mut transaction, new_word).await;

        let creation_result = match inserted_word {
            Ok(word) => commit(transaction).await.map(|_| word),
            Err(error) => Err(WriteFailure::from(error)),
        };

        match creation_result {
            Ok(word) => Ok(WordCreationOutcome::Created { word }),
            Err(WriteFailure::TranslationConflict) => {
                debug!("Database rejected new word: translation already exists.");
                Ok(WordCreationOutcome::TranslationConflict)
            }
            Err(WriteFailure::ConstraintViolation) => {
                debug!("Database rejected new word due to a constraint violation.");
                Ok(WordCreationOutcome::ConstraintViolation)
            }
            Err(WriteFailure::Fault(error)) => Err(error),
        }
    }

    /// Applies `changes` to an existing word.
    ///
    /// Changing the translation to the word's current translation is allowed.
    /// An empty set of changes returns the word as it is.
    pub async fn update(
        database_pool: &SqlitePool,
        word_id: WordId,
        changes: WordChanges,
    ) -> QueryResult<WordUpdateOutcome> {
        let mut transaction = begin_write_transaction(database_pool).await?;

        let Some(existing_word) = WordQuery::get_by_id(&mut transaction, word_id).await? else {
            return Ok(WordUpdateOutcome::NotFound);
        };


        if let Some(new_translation) = changes.translation.as_deref() {
            if new_translation != existing_word.translation {
                let translation_is_taken = WordQuery::exists_by_translation_on_other_word(
                    &mut transaction,
                    new_translation,
                    word_id,
                )
                .await?;

                if translation_is_taken {
                    debug!(
                        word_id = %word_id,
                        translation = new_translation,
                        "Refusing to update word: translation already exists."
                    );

                    return Ok(WordUpdateOutcome::TranslationConflict);
                }
            }
        }

        if !changes.has_any_changes() {
            return Ok(WordUpdateOutcome::Updated {
                word: existing_word,
            });
        }


        let updated_word = WordMutation::update(&mut transaction, word_id, changes).await;

        let update_result = match updated_word {
            Ok(Some(word)) => commit(transaction).await.map(|_| Some(word)),
            Ok(None) => Ok(None),
            Err(error) => Err(WriteFailure::from(error)),
        };

        match update_result {
            Ok(Some(word)) => Ok(WordUpdateOutcome::Updated { word }),
            Ok(None) => Err(QueryError::database_inconsistency(format!(
                "word {word_id} disappeared while being updated"
            ))),
            Err(WriteFailure::TranslationConflict) => {
                debug!(
                    word_id = %word_id,
                    "Database rejected word update: translation already exists."
                );
                Ok(WordUpdateOutcome::TranslationConflict)
            }
            Err(WriteFailure::ConstraintViolation) => {
                debug!(
                    word_id = %word_id,
                    "Database rejected word update due to a constraint violation."
                );
                Ok(WordUpdateOutcome::ConstraintViolation)
            }
            Err(WriteFailure::Fault(error)) => Err(error),
        }
    }
}
