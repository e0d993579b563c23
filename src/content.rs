use std::{collections::HashSet, fmt, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::intent;

mod aptos;

/// Telegram rejects callback data longer than this many bytes.
pub const MAX_TOKEN_LEN: usize = 64;

const DEFAULT_WELCOME: &str = "Welcome! What would you like to learn about?";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("course has no topics")]
    NoTopics,
    #[error("topic #{position} has an empty key")]
    EmptyKey { position: usize },
    #[error("topic '{0}' is defined more than once")]
    DuplicateKey(String),
    #[error("topic key '{0}' collides with a navigation token")]
    ReservedKey(String),
    #[error("topic key '{0}' does not fit into callback data")]
    KeyTooLong(String),
    #[error("question #{question} of '{topic}' needs at least two options")]
    TooFewOptions { topic: String, question: usize },
    #[error(
        "question #{question} of '{topic}' marks option {correct} correct, but has {options} options"
    )]
    CorrectOutOfRange {
        topic: String,
        question: usize,
        correct: usize,
        options: usize,
    },
    #[error("{0} is empty")]
    EmptyText(String),
    #[error("failed to read course file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse course file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Key naming a unit of content, echoed back verbatim in menu buttons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Lesson {
    pages: Vec<String>,
}

impl Lesson {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    prompt: String,
    options: Vec<String>,
    correct: usize,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: Vec<String>, correct: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn correct_text(&self) -> &str {
        &self.options[self.correct]
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicEntry {
    key: Topic,
    title: String,
    #[serde(default)]
    lesson: Lesson,
    #[serde(default)]
    quiz: Quiz,
}

impl TopicEntry {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        lesson: Lesson,
        quiz: Quiz,
    ) -> Self {
        Self {
            key: Topic::new(key),
            title: title.into(),
            lesson,
            quiz,
        }
    }

    pub fn key(&self) -> &Topic {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }
}

#[derive(Deserialize)]
struct CourseFile {
    #[serde(default)]
    welcome: Option<String>,
    topics: Vec<TopicEntry>,
}

/// The bot's whole knowledge base: every topic with its lesson and quiz, in
/// menu order. Built once at startup and shared read-only between handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    welcome: String,
    topics: Vec<TopicEntry>,
}

impl Catalog {
    /// Validates the course and freezes it.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContentError`] found, in topic order.
    pub fn new(
        welcome: impl Into<String>,
        topics: Vec<TopicEntry>,
    ) -> Result<Self, ContentError> {
        let welcome = welcome.into();
        require_text(&welcome, || "welcome text".to_owned())?;
        validate(&topics)?;
        Ok(Self { welcome, topics })
    }

    /// The Aptos course compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        aptos::catalog()
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let course: CourseFile = serde_json::from_str(raw)?;
        Self::new(
            course.welcome.unwrap_or_else(|| DEFAULT_WELCOME.to_owned()),
            course.topics,
        )
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    pub fn topics(&self) -> &[TopicEntry] {
        &self.topics
    }

    pub fn get(&self, key: &str) -> Option<&TopicEntry> {
        self.topics.iter().find(|entry| entry.key.as_str() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

fn validate(topics: &[TopicEntry]) -> Result<(), ContentError> {
    if topics.is_empty() {
        return Err(ContentError::NoTopics);
    }

    let mut seen = HashSet::new();
    for (position, entry) in topics.iter().enumerate() {
        let key = entry.key.as_str();
        if key.is_empty() {
            return Err(ContentError::EmptyKey { position });
        }
        if intent::is_reserved(key) {
            return Err(ContentError::ReservedKey(key.to_owned()));
        }
        if key.len() > MAX_TOKEN_LEN {
            return Err(ContentError::KeyTooLong(key.to_owned()));
        }
        if !seen.insert(key) {
            return Err(ContentError::DuplicateKey(key.to_owned()));
        }
        require_text(&entry.title, || format!("title of '{key}'"))?;
        for (page, text) in entry.lesson.pages.iter().enumerate() {
            require_text(text, || format!("page #{page} of '{key}'"))?;
        }

        for (question, q) in entry.quiz.questions().iter().enumerate() {
            require_text(&q.prompt, || format!("question #{question} of '{key}'"))?;
            for (option, text) in q.options.iter().enumerate() {
                require_text(text, || {
                    format!("option #{option} of question #{question} of '{key}'")
                })?;
            }
            if q.options.len() < 2 {
                return Err(ContentError::TooFewOptions {
                    topic: key.to_owned(),
                    question,
                });
            }
            if q.correct >= q.options.len() {
                return Err(ContentError::CorrectOutOfRange {
                    topic: key.to_owned(),
                    question,
                    correct: q.correct,
                    options: q.options.len(),
                });
            }
        }
    }

    Ok(())
}

// Telegram refuses to send blank messages and buttons.
fn require_text(text: &str, what: impl FnOnce() -> String) -> Result<(), ContentError> {
    if text.trim().is_empty() {
        return Err(ContentError::EmptyText(what()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    fn entry(key: &str) -> TopicEntry {
        TopicEntry::new(
            key,
            "Title",
            Lesson::new(vec!["page".into()]),
            Quiz::new(vec![Question::new("q?", options(&["a", "b"]), 1)]),
        )
    }

    #[test]
    fn builtin_course_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        let keys: Vec<_> = catalog.topics().iter().map(|t| t.key().as_str()).collect();
        assert_eq!(keys, ["intro", "features", "start_guide", "basic_ops", "advanced"]);

        let intro = catalog.get("intro").unwrap();
        assert_eq!(intro.title(), "Introduction to Aptos");
        assert_eq!(intro.lesson().len(), 4);
        assert_eq!(intro.quiz().len(), 2);
        assert_eq!(intro.quiz().question(0).unwrap().correct(), 1);
        assert_eq!(intro.quiz().question(1).unwrap().correct(), 2);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = Catalog::new("hi", vec![entry("intro"), entry("intro")]).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateKey(key) if key == "intro"));
    }

    #[test]
    fn rejects_reserved_keys() {
        for key in ["menu", "next", "prev", "start_quiz", "quiz_1"] {
            let err = Catalog::new("hi", vec![entry(key)]).unwrap_err();
            assert!(matches!(err, ContentError::ReservedKey(k) if k == key));
        }
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let bad = TopicEntry::new(
            "intro",
            "Intro",
            Lesson::default(),
            Quiz::new(vec![Question::new("q?", options(&["a", "b"]), 2)]),
        );
        let err = Catalog::new("hi", vec![bad]).unwrap_err();
        assert!(matches!(err, ContentError::CorrectOutOfRange { correct: 2, options: 2, .. }));
    }

    #[test]
    fn rejects_single_option_question() {
        let bad = TopicEntry::new(
            "intro",
            "Intro",
            Lesson::default(),
            Quiz::new(vec![Question::new("q?", options(&["only"]), 0)]),
        );
        assert!(matches!(
            Catalog::new("hi", vec![bad]),
            Err(ContentError::TooFewOptions { question: 0, .. })
        ));
    }

    #[test]
    fn rejects_overlong_key() {
        let key = "k".repeat(MAX_TOKEN_LEN + 1);
        assert!(matches!(
            Catalog::new("hi", vec![entry(&key)]),
            Err(ContentError::KeyTooLong(_))
        ));
    }

    #[test]
    fn rejects_empty_key() {
        let err = Catalog::new("hi", vec![entry("intro"), entry("")]).unwrap_err();
        assert!(matches!(err, ContentError::EmptyKey { position: 1 }));
    }

    #[test]
    fn rejects_empty_course() {
        assert!(matches!(Catalog::new("hi", vec![]), Err(ContentError::NoTopics)));
        assert!(matches!(
            Catalog::from_json(r#"{"topics":[]}"#),
            Err(ContentError::NoTopics)
        ));
    }

    #[test]
    fn rejects_blank_text() {
        assert!(matches!(
            Catalog::new(" ", vec![entry("intro")]),
            Err(ContentError::EmptyText(what)) if what == "welcome text"
        ));

        let untitled = TopicEntry::new("intro", "", Lesson::default(), Quiz::default());
        assert!(matches!(
            Catalog::new("hi", vec![untitled]),
            Err(ContentError::EmptyText(what)) if what == "title of 'intro'"
        ));

        let blank_page = r#"{"topics": [{"key": "a", "title": "A", "lesson": ["x", ""]}]}"#;
        assert!(matches!(
            Catalog::from_json(blank_page),
            Err(ContentError::EmptyText(what)) if what == "page #1 of 'a'"
        ));

        let blank_option = TopicEntry::new(
            "intro",
            "Intro",
            Lesson::default(),
            Quiz::new(vec![Question::new("q?", options(&["a", ""]), 0)]),
        );
        assert!(matches!(
            Catalog::new("hi", vec![blank_option]),
            Err(ContentError::EmptyText(what)) if what == "option #1 of question #0 of 'intro'"
        ));
    }

    #[test]
    fn parses_course_file() {
        let raw = r#"{
            "topics": [
                {
                    "key": "rust",
                    "title": "Rust basics",
                    "lesson": ["Ownership", "Borrowing"],
                    "quiz": [
                        {
                            "question": "Who owns a value?",
                            "options": ["One owner", "Everyone"],
                            "correct": 0
                        }
                    ]
                },
                { "key": "empty", "title": "Nothing yet" }
            ]
        }"#;
        let catalog = Catalog::from_json(raw).unwrap();

        assert_eq!(catalog.welcome(), DEFAULT_WELCOME);
        let rust = catalog.get("rust").unwrap();
        assert_eq!(rust.lesson().page(1), Some("Borrowing"));
        assert_eq!(rust.quiz().question(0).unwrap().correct_text(), "One owner");
        assert!(catalog.get("empty").unwrap().lesson().is_empty());
        assert!(catalog.get("empty").unwrap().quiz().is_empty());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("course.json");
        fs::write(
            &path,
            r#"{"welcome": "Hey", "topics": [{"key": "a", "title": "A", "lesson": ["x"]}]}"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.welcome(), "Hey");
        assert!(catalog.contains("a"));
    }

    #[test]
    fn load_reports_malformed_json() {
        assert!(matches!(Catalog::from_json("{"), Err(ContentError::Parse(_))));
    }
}
