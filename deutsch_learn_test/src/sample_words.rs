use actix_web::http::{Method, StatusCode};
use deutsch_learn_core::api_models::{Word, WordCreationRequest};

use crate::TestServer;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SampleWord {
    /// A plain noun with an image.
    Haus,

    /// A noun with a plural form.
    Hund,

    /// A verb with its second and third forms.
    Laufen,
}

impl SampleWord {
    pub fn german_word(&self) -> &'static str {
        match self {
            SampleWord::Haus => "Haus",
            SampleWord::Hund => "Hund",
            SampleWord::Laufen => "laufen",
        }
    }

    pub fn translation(&self) -> &'static str {
        match self {
            SampleWord::Haus => "house",
            SampleWord::Hund => "dog",
            SampleWord::Laufen => "to run",
        }
    }

    pub fn creation_request(&self) -> WordCreationRequest {
        let mut request = WordCreationRequest {
            german_word: self.german_word().to_string(),
            translation: self.translation().to_string(),
            image: None,
            hard_level: 0,
            is_verb: false,
            second_verb: None,
            third_verb: None,
            is_plural: false,
            plural: None,
        };

        match self {
            SampleWord::Haus => {
                request.image = Some("https://example.com/haus.png".to_string());
                request.hard_level = 5;
            }
            SampleWord::Hund => {
                request.hard_level = 10;
                request.is_plural = true;
                request.plural = Some("Hunde".to_string());
            }
            SampleWord::Laufen => {
                request.hard_level = 40;
                request.is_verb = true;
                request.second_verb = Some("lief".to_string());
                request.third_verb = Some("gelaufen".to_string());
            }
        }

        request
    }

    pub async fn create(&self, server: &TestServer) -> Word {
        let response = server
            .request(Method::POST, "/api/words")
            .with_json_body(self.creation_request())
            .send()
            .await;

        response.assert_status_equals(StatusCode::CREATED);

        response.json_body::<Word>()
    }
}
