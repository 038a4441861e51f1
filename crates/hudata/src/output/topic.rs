//! Types and functionality for creating a topic document.

use crate::{
    primary::PrimarySheet,
    secondary::SecondarySheet,
    topics::{TopicDef, TopicName},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDocument {
    pub id: String,
    pub name: TopicName,
    pub questions: Vec<Question>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub word_hu: String,
    pub example_hu: String,
    pub word_en: String,
    pub example_en: String,
    pub word_ru: String,
    pub example_ru: String,
}

impl TopicDocument {
    /// Merges the two sheets of a topic into its document.
    ///
    /// The primary sheet is authoritative: every one of its rows becomes a
    /// question, with the Russian fields empty. The secondary sheet is then
    /// merged in by position only, so row i translates question i. Secondary
    /// rows past the end of the question list are ignored, and a secondary
    /// sheet that is too short leaves the trailing questions untranslated.
    /// Nothing checks that the two sheets describe the same questions.
    pub fn derive(def: &TopicDef, primary: PrimarySheet, secondary: SecondarySheet) -> Self {
        let mut questions = primary
            .rows
            .into_iter()
            .map(|row| Question {
                word_hu: row.word_hu,
                example_hu: row.example_hu,
                word_en: row.word_en,
                example_en: row.example_en,
                word_ru: String::new(),
                example_ru: String::new(),
            })
            .collect::<Vec<_>>();

        for (question, row) in questions.iter_mut().zip(secondary.rows) {
            if let Some(translation) = row {
                question.word_ru = translation.word_ru;
                question.example_ru = translation.example_ru;
            }
        }

        let count = questions.len();
        TopicDocument {
            id: def.id.to_string(),
            name: def.name(),
            questions,
            count,
        }
    }
}
