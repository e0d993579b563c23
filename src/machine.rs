//! Lesson and quiz progression.
//!
//! Every inbound button press is turned into a [`Transition`]: the session to
//! store for the chat and the messages to deliver, in order. Nothing here
//! talks to Telegram, so the whole conversation can be driven from tests.

use thiserror::Error;

use crate::{
    content::{Catalog, TopicEntry},
    intent::{self, AnswerToken, Intent, IntentError},
    session::{Session, Stage},
};

pub const NOT_AVAILABLE: &str = "I'm sorry, that option isn't available yet.";
pub const LESSON_COMPLETE: &str =
    "You've completed this lesson! Let's test your knowledge with a quiz.";
pub const CORRECT: &str = "Correct!";

/// A button: what the user sees and what comes back when it is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: String,
    pub token: String,
}

impl Action {
    fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub text: String,
    pub rows: Vec<Vec<Action>>,
}

impl View {
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.rows.iter().flatten()
    }

    pub fn offers(&self, token: &str) -> bool {
        self.actions().any(|action| action.token == token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Replaces the message the pressed button belonged to.
    Show(View),
    /// A separate plain message, without buttons.
    Notify(String),
}

/// Why a button press was not applied. The session is left as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error(transparent)]
    Malformed(#[from] IntentError),
    #[error("topic '{0}' is not in the catalog")]
    UnknownTopic(String),
    #[error("'{token}' is not valid while {stage:?}")]
    WrongStage { token: String, stage: Stage },
    #[error("answer given before the quiz started")]
    QuizNotStarted,
    #[error("answer given after the quiz was completed")]
    QuizComplete,
    #[error("answer for question {got}, but question {expected} is current")]
    StaleQuestion { expected: usize, got: usize },
    #[error("option {option} is out of range, question has {options} options")]
    OptionOutOfRange { option: usize, options: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: Session,
    pub outbound: Vec<Outbound>,
    pub rejected: Option<Rejection>,
}

impl Transition {
    fn new(session: Session, outbound: Vec<Outbound>) -> Self {
        Self {
            session,
            outbound,
            rejected: None,
        }
    }

    fn show(session: Session, view: View) -> Self {
        Self::new(session, vec![Outbound::Show(view)])
    }

    /// The last view in this transition, if any.
    pub fn view(&self) -> Option<&View> {
        self.outbound.iter().rev().find_map(|out| match out {
            Outbound::Show(view) => Some(view),
            Outbound::Notify(_) => None,
        })
    }
}

/// `/start`: forget everything and show the menu.
pub fn start(catalog: &Catalog) -> Transition {
    Transition::show(Session::default(), menu_view(catalog))
}

/// Applies raw callback data to `session`.
pub fn advance(session: &Session, data: &str, catalog: &Catalog) -> Transition {
    match Intent::parse(data) {
        Ok(intent) => apply(session, intent, catalog),
        Err(err) => reject(session, catalog, err.into()),
    }
}

pub fn apply(session: &Session, intent: Intent, catalog: &Catalog) -> Transition {
    if intent == Intent::Menu {
        let mut next = session.clone();
        next.to_menu();
        return Transition::show(next, menu_view(catalog));
    }

    if session.stage() == Stage::Choosing {
        return match intent {
            Intent::Select(topic) => match catalog.get(topic.as_str()) {
                Some(entry) => {
                    let next = Session::for_topic(entry);
                    let view = current_view(&next, entry, catalog);
                    Transition::show(next, view)
                }
                None => reject(session, catalog, Rejection::UnknownTopic(topic.to_string())),
            },
            other => reject(
                session,
                catalog,
                Rejection::WrongStage {
                    token: other.token(),
                    stage: Stage::Choosing,
                },
            ),
        };
    }

    let Some(entry) = topic_entry(session, catalog) else {
        // Progress for a topic the catalog no longer knows about.
        return start(catalog);
    };

    let mut next = session.clone();
    match (session.stage(), intent) {
        (Stage::Reading, Intent::Next) => next.next_page(entry.lesson().len()),
        (Stage::Reading, Intent::Prev) => next.previous_page(),
        (Stage::Quizzing, Intent::StartQuiz) => next.begin_quiz(),
        (Stage::Quizzing, Intent::Answer(answer)) => {
            return answer_question(session, entry, answer, catalog)
        }
        (stage, other) => {
            return reject(
                session,
                catalog,
                Rejection::WrongStage {
                    token: other.token(),
                    stage,
                },
            )
        }
    }

    let view = current_view(&next, entry, catalog);
    Transition::show(next, view)
}

/// The view the session is currently looking at.
pub fn render(session: &Session, catalog: &Catalog) -> View {
    match topic_entry(session, catalog) {
        Some(entry) => current_view(session, entry, catalog),
        None => menu_view(catalog),
    }
}

fn answer_question(
    session: &Session,
    entry: &TopicEntry,
    answer: AnswerToken,
    catalog: &Catalog,
) -> Transition {
    let quiz = entry.quiz();
    let current = session.quiz_index();

    if !session.quiz_started() {
        return reject(session, catalog, Rejection::QuizNotStarted);
    }
    let Some(question) = quiz.question(current) else {
        return reject(session, catalog, Rejection::QuizComplete);
    };
    if let Some(got) = answer.question.filter(|&got| got != current) {
        return reject(
            session,
            catalog,
            Rejection::StaleQuestion {
                expected: current,
                got,
            },
        );
    }
    if answer.option >= question.options().len() {
        return reject(
            session,
            catalog,
            Rejection::OptionOutOfRange {
                option: answer.option,
                options: question.options().len(),
            },
        );
    }

    let correct = question.is_correct(answer.option);
    let feedback = if correct {
        CORRECT.to_owned()
    } else {
        format!("Sorry, the correct answer was: {}", question.correct_text())
    };

    let mut next = session.clone();
    next.record_answer(correct, quiz.len());
    let view = current_view(&next, entry, catalog);
    Transition::new(next, vec![Outbound::Notify(feedback), Outbound::Show(view)])
}

fn reject(session: &Session, catalog: &Catalog, reason: Rejection) -> Transition {
    let outbound = if session.stage() == Stage::Choosing {
        vec![Outbound::Notify(NOT_AVAILABLE.to_owned())]
    } else {
        vec![Outbound::Show(render(session, catalog))]
    };
    Transition {
        session: session.clone(),
        outbound,
        rejected: Some(reason),
    }
}

fn topic_entry<'a>(session: &Session, catalog: &'a Catalog) -> Option<&'a TopicEntry> {
    session.topic().and_then(|topic| catalog.get(topic.as_str()))
}

fn current_view(session: &Session, entry: &TopicEntry, catalog: &Catalog) -> View {
    match session.stage() {
        Stage::Choosing => menu_view(catalog),
        Stage::Reading => lesson_view(session, entry),
        Stage::Quizzing if !session.quiz_started() => lesson_complete_view(),
        Stage::Quizzing => quiz_view(session, entry),
    }
}

pub fn menu_view(catalog: &Catalog) -> View {
    View {
        text: catalog.welcome().to_owned(),
        rows: catalog
            .topics()
            .iter()
            .map(|entry| vec![Action::new(entry.title(), entry.key().as_str())])
            .collect(),
    }
}

fn lesson_view(session: &Session, entry: &TopicEntry) -> View {
    let index = session.lesson_index();
    let Some(page) = entry.lesson().page(index) else {
        return lesson_complete_view();
    };

    let mut row = Vec::with_capacity(2);
    if index > 0 {
        row.push(Action::new("Previous", intent::PREV));
    }
    row.push(Action::new("Next", intent::NEXT));

    View {
        text: page.to_owned(),
        rows: vec![row],
    }
}

fn lesson_complete_view() -> View {
    View {
        text: LESSON_COMPLETE.to_owned(),
        rows: vec![vec![Action::new("Start Quiz", intent::START_QUIZ)]],
    }
}

fn quiz_view(session: &Session, entry: &TopicEntry) -> View {
    let index = session.quiz_index();
    match entry.quiz().question(index) {
        Some(question) => View {
            text: format!("Question {}: {}", index + 1, question.prompt()),
            rows: question
                .options()
                .iter()
                .enumerate()
                .map(|(option, label)| {
                    vec![Action::new(label, intent::answer_token(index, option))]
                })
                .collect(),
        },
        None => View {
            text: format!(
                "Quiz completed! Your score: {}/{}\nChoose another topic to continue learning.",
                session.score(),
                entry.quiz().len()
            ),
            rows: vec![vec![Action::new("Back to Menu", intent::MENU)]],
        },
    }
}
