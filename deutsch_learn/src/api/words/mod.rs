mod endpoints;
use actix_web::web;
pub use endpoints::*;
mod model_impls;


/// Router for everything under `/words`.
///
/// The fixed `/all` and `/all-mixed` routes must be registered
/// before `/{word_id}`, otherwise they would be matched as word IDs.
#[rustfmt::skip]
pub fn words_router() -> actix_web::Scope {
    web::scope("/words")
        .service(get_all_words)
        .service(get_all_words_shuffled)
        .service(get_specific_word)
        .service(create_word)
        .service(update_specific_word)
        .service(delete_words)
}
