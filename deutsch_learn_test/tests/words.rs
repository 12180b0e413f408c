use std::collections::HashSet;

use deutsch_learn_test::prelude::*;



fn word_ids(words: &[Word]) -> Vec<i64> {
    words.iter().map(|word| word.id.into_inner()).collect()
}

fn invalid_word_fields_field(response: &TestResponse) -> String {
    match response.json_body::<ResponseWithErrorReason>().reason {
        ErrorReason::Word(WordErrorReason::InvalidWordFields { field, .. }) => field,
        other => panic!("expected an invalid-word-fields reason, got {other:?}"),
    }
}



#[actix_web::test]
async fn creating_plain_word_assigns_id_and_leaves_forms_empty() {
    let server = initialize_test_server().await;

    let response = server
        .request(Method::POST, "/api/words")
        .with_json_body(json!({
            "german_word": "Hund",
            "translation": "dog",
            "is_verb": false,
            "is_plural": false
        }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::CREATED);
    response.assert_header_equals("content-type", "application/json");

    let word = response.json_body::<Word>();
    assert_eq!(word.german_word, "Hund");
    assert_eq!(word.translation, "dog");
    assert_eq!(word.image, None);
    assert_eq!(word.hard_level, 0);
    assert!(!word.is_verb);
    assert!(!word.is_plural);
    assert_eq!(word.second_verb, None);
    assert_eq!(word.third_verb, None);
    assert_eq!(word.plural, None);


    let response = server
        .request(Method::GET, format!("/api/words/{}", word.id))
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);
    response.assert_json_body_matches(word);
}


#[actix_web::test]
async fn creating_word_with_existing_translation_is_a_conflict() {
    let server = initialize_test_server().await;

    let verb = SampleWord::Laufen.create(&server).await;
    assert!(verb.is_verb);
    assert_eq!(verb.second_verb.as_deref(), Some("lief"));
    assert_eq!(verb.third_verb.as_deref(), Some("gelaufen"));


    let response = server
        .request(Method::POST, "/api/words")
        .with_json_body(json!({
            "german_word": "rennen",
            "translation": "to run",
            "is_verb": true,
            "second_verb": "rannte",
            "third_verb": "gerannt"
        }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    response.assert_error_reason_equals(WordErrorReason::translation_already_exists());


    // Translations are compared case-sensitively.
    server
        .request(Method::POST, "/api/words")
        .with_json_body(json!({
            "german_word": "rennen",
            "translation": "To run"
        }))
        .send()
        .await
        .assert_status_equals(StatusCode::CREATED);


    let words = server
        .request(Method::GET, "/api/words/all")
        .send()
        .await
        .json_body::<Vec<Word>>();

    assert_eq!(words.len(), 2);
}


#[actix_web::test]
async fn creating_word_with_missing_forms_is_rejected() {
    let server = initialize_test_server().await;

    let response = server
        .request(Method::POST, "/api/words")
        .with_json_body(json!({
            "german_word": "laufen",
            "translation": "to run",
            "is_verb": true,
            "third_verb": "gelaufen"
        }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    assert_eq!(invalid_word_fields_field(&response), "second_verb");


    let response = server
        .request(Method::POST, "/api/words")
        .with_json_body(json!({
            "german_word": "Hund",
            "translation": "dog",
            "is_plural": true
        }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    assert_eq!(invalid_word_fields_field(&response), "plural");


    let response = server
        .request(Method::POST, "/api/words")
        .with_json_body(json!({
            "german_word": "",
            "translation": "nothing"
        }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    assert_eq!(invalid_word_fields_field(&response), "german_word");


    // Nothing should have been stored.
    server
        .request(Method::GET, "/api/words/all")
        .send()
        .await
        .assert_json_body_matches(Vec::<Word>::new());
}


#[actix_web::test]
async fn verb_takes_precedence_and_unused_forms_are_dropped() {
    let server = initialize_test_server().await;

    let response = server
        .request(Method::POST, "/api/words")
        .with_json_body(json!({
            "german_word": "gehen",
            "translation": "to go",
            "is_verb": true,
            "second_verb": "ging",
            "third_verb": "gegangen",
            "is_plural": true,
            "plural": "gehens"
        }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::CREATED);

    let word = response.json_body::<Word>();
    assert!(word.is_verb);
    assert!(!word.is_plural);
    assert_eq!(word.plural, None);


    let response = server
        .request(Method::POST, "/api/words")
        .with_json_body(json!({
            "german_word": "Katze",
            "translation": "cat",
            "second_verb": "ignored",
            "plural": "ignored as well"
        }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::CREATED);

    let word = response.json_body::<Word>();
    assert_eq!(word.second_verb, None);
    assert_eq!(word.plural, None);
}


#[actix_web::test]
async fn hard_level_outside_bounds_is_rejected() {
    let server = initialize_test_server().await;

    for hard_level in [-1, 101] {
        let response = server
            .request(Method::POST, "/api/words")
            .with_json_body(json!({
                "german_word": "Haus",
                "translation": "house",
                "hard_level": hard_level
            }))
            .send()
            .await;

        response.assert_status_equals(StatusCode::BAD_REQUEST);
        assert_eq!(invalid_word_fields_field(&response), "hard_level");
    }


    let word = SampleWord::Haus.create(&server).await;

    for hard_level in [-1, 101] {
        let response = server
            .request(Method::PUT, format!("/api/words/{}", word.id))
            .with_json_body(json!({ "hard_level": hard_level }))
            .send()
            .await;

        response.assert_status_equals(StatusCode::BAD_REQUEST);
        assert_eq!(invalid_word_fields_field(&response), "hard_level");
    }

    for hard_level in [0, 100] {
        let response = server
            .request(Method::PUT, format!("/api/words/{}", word.id))
            .with_json_body(json!({ "hard_level": hard_level }))
            .send()
            .await;

        response.assert_status_equals(StatusCode::OK);
        assert_eq!(
            i64::from(response.json_body::<Word>().hard_level),
            hard_level
        );
    }
}


#[actix_web::test]
async fn listing_returns_words_ordered_or_shuffled() {
    let server = initialize_test_server().await;

    let created_words = vec![
        SampleWord::Haus.create(&server).await,
        SampleWord::Hund.create(&server).await,
        SampleWord::Laufen.create(&server).await,
    ];

    assert_eq!(word_ids(&created_words), vec![1, 2, 3]);


    let response = server.request(Method::GET, "/api/words/all").send().await;

    response.assert_status_equals(StatusCode::OK);
    response.assert_json_body_matches(created_words.clone());


    let response = server
        .request(Method::GET, "/api/words/all-mixed")
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let shuffled_words = response.json_body::<Vec<Word>>();
    assert_eq!(shuffled_words.len(), 3);
    assert_eq!(
        word_ids(&shuffled_words).into_iter().collect::<HashSet<_>>(),
        HashSet::from([1, 2, 3])
    );
}


#[actix_web::test]
async fn getting_word_by_id_handles_missing_and_malformed_ids() {
    let server = initialize_test_server().await;

    let word = SampleWord::Hund.create(&server).await;


    let response = server
        .request(Method::GET, format!("/api/words/{}", word.id))
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);
    response.assert_json_body_matches(word);


    let response = server.request(Method::GET, "/api/words/999").send().await;

    response.assert_status_equals(StatusCode::NOT_FOUND);
    response.assert_error_reason_equals(WordErrorReason::word_not_found());


    let response = server.request(Method::GET, "/api/words/abc").send().await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    response.assert_error_reason_equals(ErrorReason::invalid_word_id_format());
}


#[actix_web::test]
async fn deleting_words_is_idempotent() {
    let server = initialize_test_server().await;

    SampleWord::Haus.create(&server).await;
    let dog = SampleWord::Hund.create(&server).await;
    SampleWord::Laufen.create(&server).await;


    let response = server
        .request(Method::DELETE, "/api/words")
        .with_json_body(json!([1, 3]))
        .send()
        .await;

    response.assert_status_equals(StatusCode::NO_CONTENT);
    response.assert_body_is_empty();

    server
        .request(Method::GET, "/api/words/all")
        .send()
        .await
        .assert_json_body_matches(vec![dog.clone()]);


    // Repeating the deletion (with a trailing slash this time) changes nothing.
    server
        .request(Method::DELETE, "/api/words/")
        .with_json_body(json!([1, 3]))
        .send()
        .await
        .assert_status_equals(StatusCode::NO_CONTENT);

    server
        .request(Method::DELETE, "/api/words")
        .with_json_body(json!([]))
        .send()
        .await
        .assert_status_equals(StatusCode::NO_CONTENT);

    server
        .request(Method::GET, "/api/words/all")
        .send()
        .await
        .assert_json_body_matches(vec![dog]);


    let response = server
        .request(Method::DELETE, "/api/words")
        .with_json_body(json!(["one"]))
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    response.assert_error_reason_equals(ErrorReason::invalid_json_body(
        InvalidJsonBodyReason::InvalidData,
    ));
}


#[actix_web::test]
async fn updating_missing_word_is_not_found() {
    let server = initialize_test_server().await;

    let response = server
        .request(Method::PUT, "/api/words/42")
        .with_json_body(json!({ "translation": "anything" }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::NOT_FOUND);
    response.assert_error_reason_equals(WordErrorReason::word_not_found());


    let response = server
        .request(Method::PUT, "/api/words/forty-two")
        .with_json_body(json!({ "translation": "anything" }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    response.assert_error_reason_equals(ErrorReason::invalid_word_id_format());
}


#[actix_web::test]
async fn updating_translation_checks_other_words_only() {
    let server = initialize_test_server().await;

    let house = SampleWord::Haus.create(&server).await;
    let dog = SampleWord::Hund.create(&server).await;


    let response = server
        .request(Method::PUT, format!("/api/words/{}", dog.id))
        .with_json_body(json!({ "translation": "house" }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::NOT_FOUND);
    response.assert_error_reason_equals(WordErrorReason::translation_already_exists());


    let response = server
        .request(Method::PUT, format!("/api/words/{}", house.id))
        .with_json_body(json!({ "translation": "house", "hard_level": 60 }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let updated_house = response.json_body::<Word>();
    assert_eq!(updated_house.translation, "house");
    assert_eq!(updated_house.hard_level, 60);


    // The rejected update must not have touched the word.
    server
        .request(Method::GET, format!("/api/words/{}", dog.id))
        .send()
        .await
        .assert_json_body_matches(dog);
}


#[actix_web::test]
async fn partial_updates_only_touch_provided_fields() {
    let server = initialize_test_server().await;

    let house = SampleWord::Haus.create(&server).await;
    assert!(house.image.is_some());


    // Empty update: nothing changes.
    let response = server
        .request(Method::PUT, format!("/api/words/{}", house.id))
        .with_json_body(json!({}))
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);
    response.assert_json_body_matches(house.clone());


    // An explicit null clears the image, other fields stay.
    let response = server
        .request(Method::PUT, format!("/api/words/{}", house.id))
        .with_json_body(json!({ "image": null, "german_word": "Häuschen" }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let updated_house = response.json_body::<Word>();
    assert_eq!(updated_house.image, None);
    assert_eq!(updated_house.german_word, "Häuschen");
    assert_eq!(updated_house.translation, house.translation);
    assert_eq!(updated_house.hard_level, house.hard_level);


    // Flags replace the forms as a whole.
    let response = server
        .request(Method::PUT, format!("/api/words/{}", house.id))
        .with_json_body(json!({ "is_plural": true, "plural": "Häuschen" }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let updated_house = response.json_body::<Word>();
    assert!(updated_house.is_plural);
    assert_eq!(updated_house.plural.as_deref(), Some("Häuschen"));

    let response = server
        .request(Method::PUT, format!("/api/words/{}", house.id))
        .with_json_body(json!({
            "is_verb": true,
            "second_verb": "hauste",
            "third_verb": "gehaust"
        }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::OK);

    let updated_house = response.json_body::<Word>();
    assert!(updated_house.is_verb);
    assert!(!updated_house.is_plural);
    assert_eq!(updated_house.plural, None);
    assert_eq!(updated_house.second_verb.as_deref(), Some("hauste"));


    // Forms without a flag are rejected.
    let response = server
        .request(Method::PUT, format!("/api/words/{}", house.id))
        .with_json_body(json!({ "second_verb": "wohnte" }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    assert_eq!(invalid_word_fields_field(&response), "second_verb");


    // A flag without its forms is rejected as well.
    let response = server
        .request(Method::PUT, format!("/api/words/{}", house.id))
        .with_json_body(json!({ "is_plural": true }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    assert_eq!(invalid_word_fields_field(&response), "plural");
}


#[actix_web::test]
async fn malformed_json_bodies_are_rejected() {
    let server = initialize_test_server().await;

    let response = server
        .request(Method::POST, "/api/words")
        .with_raw_body(None, r#"{"german_word": "Haus", "translation": "house"}"#)
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    response.assert_error_reason_equals(ErrorReason::missing_json_body());


    let response = server
        .request(Method::POST, "/api/words")
        .with_raw_body(Some("application/json"), r#"{"german_word": "Haus""#)
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    response.assert_error_reason_equals(ErrorReason::invalid_json_body(
        InvalidJsonBodyReason::NotJson,
    ));


    let response = server
        .request(Method::POST, "/api/words")
        .with_json_body(json!({
            "german_word": "Haus",
            "translation": "house",
            "hard_level": "very hard"
        }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    response.assert_error_reason_equals(ErrorReason::invalid_json_body(
        InvalidJsonBodyReason::InvalidData,
    ));


    let response = server
        .request(Method::PUT, "/api/words/1")
        .with_json_body(json!({ "is_verb": "yes" }))
        .send()
        .await;

    response.assert_status_equals(StatusCode::BAD_REQUEST);
    response.assert_error_reason_equals(ErrorReason::invalid_json_body(
        InvalidJsonBodyReason::InvalidData,
    ));
}


#[actix_web::test]
async fn inconsistent_stored_word_is_an_internal_error() {
    let server = initialize_test_server().await;

    SampleWord::Hund.create(&server).await;

    sqlx::query("PRAGMA ignore_check_constraints = ON")
        .execute(server.database_pool())
        .await
        .unwrap();

    sqlx::query(
        "INSERT INTO words (german_word, translation, is_verb, second_verb, third_verb) \
            VALUES ('laufen', 'to run', TRUE, NULL, NULL)",
    )
    .execute(server.database_pool())
    .await
    .unwrap();


    let response = server.request(Method::GET, "/api/words/all").send().await;

    response.assert_status_equals(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_body_is_empty();


    // Words that are stored correctly can still be fetched one by one.
    server
        .request(Method::GET, "/api/words/1")
        .send()
        .await
        .assert_status_equals(StatusCode::OK);

    server
        .request(Method::GET, "/api/words/2")
        .send()
        .await
        .assert_status_equals(StatusCode::INTERNAL_SERVER_ERROR);
}
