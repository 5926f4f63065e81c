//! The post-conversation feedback survey prompt flow.

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::history::DefaultHistory;
use tandem_core::feedback::{self, FeedbackAnswers, QUESTION_COUNT};
use tandem_core::language::Language;

use crate::CliHelper;

/// Asks the twelve localized rating questions plus the optional comment.
///
/// Invalid ratings are re-prompted; the learner can't leave the survey
/// with an out-of-range value. Returns `None` if input was aborted
/// (ctrl-c/ctrl-d), leaving the session awaiting feedback.
pub fn collect(
    rl: &mut Editor<CliHelper, DefaultHistory>,
    language: Language,
) -> Result<Option<FeedbackAnswers>> {
    let heading = match language {
        Language::English => "Short feedback",
        Language::German => "Kurzes Feedback",
    };
    println!("{}", format!("=== {heading} ===").bright_magenta().bold());
    println!(
        "{}",
        match language {
            Language::English => "Rate each statement from 1 (disagree) to 5 (agree).",
            Language::German => "Bewerten Sie jede Aussage von 1 (trifft nicht zu) bis 5 (trifft zu).",
        }
        .bright_black()
    );

    let questions = feedback::questions(language);
    let mut ratings = [0u8; QUESTION_COUNT];

    for (index, question) in questions.iter().enumerate() {
        println!("{}", format!("Q{}. {}", index + 1, question).bright_yellow());
        loop {
            let line = match rl.readline("[1-5] > ") {
                Ok(line) => line,
                Err(_) => return Ok(None),
            };
            match line.trim().parse::<u8>() {
                Ok(rating) if (1..=5).contains(&rating) => {
                    ratings[index] = rating;
                    break;
                }
                _ => {
                    println!(
                        "{}",
                        match language {
                            Language::English => "Please enter a number between 1 and 5.",
                            Language::German => "Bitte geben Sie eine Zahl zwischen 1 und 5 ein.",
                        }
                        .red()
                    );
                }
            }
        }
    }

    let comment_prompt = match language {
        Language::English => "Optional comment (empty to skip)",
        Language::German => "Optionaler Kommentar (leer zum Überspringen)",
    };
    println!("{}", comment_prompt.bright_yellow());
    let comment = match rl.readline("> ") {
        Ok(line) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(_) => return Ok(None),
    };

    let answers = FeedbackAnswers::new(ratings, comment)?;
    Ok(Some(answers))
}
