use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::content::Topic;

pub const MENU: &str = "menu";
pub const NEXT: &str = "next";
pub const PREV: &str = "prev";
pub const START_QUIZ: &str = "start_quiz";
pub const ANSWER_PREFIX: &str = "quiz_";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntentError {
    #[error("empty callback data")]
    Empty,
    #[error("malformed answer token '{0}'")]
    MalformedAnswer(String),
}

/// An option picked from a question's keyboard.
///
/// Buttons rendered by the bot are bound to the question they were shown
/// with (`quiz_<question>_<option>`). The unbound `quiz_<option>` form is
/// still understood and applies to whatever question is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerToken {
    pub question: Option<usize>,
    pub option: usize,
}

/// Everything a user can ask for by pressing a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Menu,
    Select(Topic),
    Next,
    Prev,
    StartQuiz,
    Answer(AnswerToken),
}

impl Intent {
    pub fn parse(data: &str) -> Result<Self, IntentError> {
        match data {
            "" => Err(IntentError::Empty),
            MENU => Ok(Intent::Menu),
            NEXT => Ok(Intent::Next),
            PREV => Ok(Intent::Prev),
            START_QUIZ => Ok(Intent::StartQuiz),
            other => match other.strip_prefix(ANSWER_PREFIX) {
                Some(rest) => parse_answer(rest)
                    .map(Intent::Answer)
                    .ok_or_else(|| IntentError::MalformedAnswer(other.to_owned())),
                None => Ok(Intent::Select(Topic::new(other))),
            },
        }
    }

    /// Callback data that parses back into this intent.
    pub fn token(&self) -> String {
        match self {
            Intent::Menu => MENU.to_owned(),
            Intent::Next => NEXT.to_owned(),
            Intent::Prev => PREV.to_owned(),
            Intent::StartQuiz => START_QUIZ.to_owned(),
            Intent::Select(topic) => topic.as_str().to_owned(),
            Intent::Answer(AnswerToken {
                question: Some(question),
                option,
            }) => answer_token(*question, *option),
            Intent::Answer(AnswerToken {
                question: None,
                option,
            }) => format!("{ANSWER_PREFIX}{option}"),
        }
    }
}

impl FromStr for Intent {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::parse(s)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

pub fn answer_token(question: usize, option: usize) -> String {
    format!("{ANSWER_PREFIX}{question}_{option}")
}

/// Whether `key` would be mistaken for a navigation token.
pub fn is_reserved(key: &str) -> bool {
    matches!(key, MENU | NEXT | PREV | START_QUIZ) || key.starts_with(ANSWER_PREFIX)
}

fn parse_answer(rest: &str) -> Option<AnswerToken> {
    let index = |s: &str| -> Option<usize> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok()
    };

    match rest.split_once('_') {
        Some((question, option)) => Some(AnswerToken {
            question: Some(index(question)?),
            option: index(option)?,
        }),
        None => Some(AnswerToken {
            question: None,
            option: index(rest)?,
        }),
    }
}
