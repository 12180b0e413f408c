use deutsch_learn_core::api_models::Word;
use deutsch_learn_database::entities;

use crate::api::traits::IntoApiModel;



impl IntoApiModel for entities::WordModel {
    type ApiModel = Word;

    fn into_api_model(self) -> Self::ApiModel {
        Word {
            id: self.id,
            is_verb: self.forms.is_verb(),
            second_verb: self.forms.second_verb().map(str::to_string),
            third_verb: self.forms.third_verb().map(str::to_string),
            is_plural: self.forms.is_plural(),
            plural: self.forms.plural().map(str::to_string),
            german_word: self.german_word,
            translation: self.translation,
            image: self.image,
            hard_level: self.hard_level.value(),
        }
    }
}
