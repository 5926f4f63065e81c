//! Post-conversation feedback survey types.
//!
//! The survey is a fixed record: twelve ratings on a 1-5 scale plus one
//! optional free-text comment. Ratings are validated at the boundary,
//! before anything reaches persistence.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TandemError};
use crate::language::Language;

/// Number of rating questions in the survey.
pub const QUESTION_COUNT: usize = 12;

/// Localized survey question texts, indexed q1..q12.
pub const QUESTIONS_EN: [&str; QUESTION_COUNT] = [
    "The chatbot's personality was realistic and engaging",
    "The chatbot seemed too robotic",
    "The chatbot was welcoming during initial setup",
    "The chatbot seemed very unfriendly",
    "The chatbot behaved and communicated appropriately within the context of the role-playing game.",
    "The chatbot did not behave according to its role.",
    "The chatbot was easy to navigate",
    "It would be easy to get confused when using the chatbot",
    "The chatbot coped well with any errors or mistakes",
    "The chatbot seemed unable to cope with any errors",
    "The chatbot was easy to use",
    "The chatbot was very complex",
];

pub const QUESTIONS_DE: [&str; QUESTION_COUNT] = [
    "Die Persönlichkeit des Chatbots war realistisch und ansprechend",
    "Der Chatbot wirkte zu robotisch",
    "Der Chatbot war beim ersten Setup einladend",
    "Der Chatbot wirkte sehr unfreundlich",
    "Der Chatbot hat sich sinnvoll im Rahmen des Rollenspiels verhalten und kommuniziert.",
    "Der Chatbot hat sich nicht entsprechend seiner Rolle verhalten.",
    "Der Chatbot war leicht zu navigieren",
    "Die Nutzung des Chatbots wäre leicht verwirrend",
    "Der Chatbot ging gut mit Fehlern oder Missverständnissen um",
    "Der Chatbot konnte nicht gut mit Fehlern umgehen",
    "Der Chatbot war leicht zu bedienen",
    "Der Chatbot war sehr komplex",
];

/// Question texts for the given language, indexed q1..q12.
pub fn questions(language: Language) -> &'static [&'static str; QUESTION_COUNT] {
    match language {
        Language::English => &QUESTIONS_EN,
        Language::German => &QUESTIONS_DE,
    }
}

/// The completed survey: twelve bounded ratings and an optional comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAnswers {
    pub q1: u8,
    pub q2: u8,
    pub q3: u8,
    pub q4: u8,
    pub q5: u8,
    pub q6: u8,
    pub q7: u8,
    pub q8: u8,
    pub q9: u8,
    pub q10: u8,
    pub q11: u8,
    pub q12: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl FeedbackAnswers {
    /// Builds a validated survey record from raw ratings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any rating falls outside 1..=5.
    pub fn new(ratings: [u8; QUESTION_COUNT], comment: Option<String>) -> Result<Self> {
        for (index, rating) in ratings.iter().enumerate() {
            if !(1..=5).contains(rating) {
                return Err(TandemError::invalid_input(format!(
                    "Rating q{} out of range: {} (expected 1-5)",
                    index + 1,
                    rating
                )));
            }
        }
        let comment = comment.filter(|c| !c.trim().is_empty());
        let [q1, q2, q3, q4, q5, q6, q7, q8, q9, q10, q11, q12] = ratings;
        Ok(Self {
            q1,
            q2,
            q3,
            q4,
            q5,
            q6,
            q7,
            q8,
            q9,
            q10,
            q11,
            q12,
            comment,
        })
    }

    /// Ratings as an array, indexed q1..q12.
    pub fn ratings(&self) -> [u8; QUESTION_COUNT] {
        [
            self.q1, self.q2, self.q3, self.q4, self.q5, self.q6, self.q7, self.q8, self.q9,
            self.q10, self.q11, self.q12,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ratings_accepted() {
        let answers = FeedbackAnswers::new([3; QUESTION_COUNT], Some("ok".into())).unwrap();
        assert_eq!(answers.q1, 3);
        assert_eq!(answers.q12, 3);
        assert_eq!(answers.comment.as_deref(), Some("ok"));
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let mut ratings = [3; QUESTION_COUNT];
        ratings[7] = 0;
        let err = FeedbackAnswers::new(ratings, None).unwrap_err();
        assert!(err.to_string().contains("q8"));

        ratings[7] = 6;
        assert!(FeedbackAnswers::new(ratings, None).is_err());
    }

    #[test]
    fn test_blank_comment_dropped() {
        let answers = FeedbackAnswers::new([5; QUESTION_COUNT], Some("   ".into())).unwrap();
        assert_eq!(answers.comment, None);
    }

    #[test]
    fn test_question_tables_complete() {
        assert_eq!(questions(Language::English).len(), QUESTION_COUNT);
        assert_eq!(questions(Language::German).len(), QUESTION_COUNT);
    }
}
