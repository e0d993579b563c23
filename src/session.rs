use crate::content::{Topic, TopicEntry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Choosing,
    Reading,
    Quizzing,
}

/// Per-chat progress through a topic.
///
/// `lesson_index` runs up to the lesson length, where the lesson counts as
/// read and the session waits in [`Stage::Quizzing`] for the quiz to start.
/// `quiz_index` runs up to the quiz length, and `score` never exceeds the
/// number of questions answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    stage: Stage,
    topic: Option<Topic>,
    lesson_index: usize,
    quiz_index: usize,
    score: usize,
    quiz_started: bool,
}

impl Session {
    /// Fresh progress for `entry`, overwriting whatever came before.
    pub fn for_topic(entry: &TopicEntry) -> Self {
        let mut session = Self {
            stage: Stage::Reading,
            topic: Some(entry.key().clone()),
            ..Self::default()
        };
        if entry.lesson().is_empty() {
            session.stage = Stage::Quizzing;
        }
        session
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn topic(&self) -> Option<&Topic> {
        self.topic.as_ref()
    }

    pub fn lesson_index(&self) -> usize {
        self.lesson_index
    }

    pub fn quiz_index(&self) -> usize {
        self.quiz_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn quiz_started(&self) -> bool {
        self.quiz_started
    }

    pub fn lesson_complete(&self, lesson_len: usize) -> bool {
        self.lesson_index >= lesson_len
    }

    pub fn quiz_complete(&self, quiz_len: usize) -> bool {
        self.quiz_index >= quiz_len
    }

    /// Moves one page forward, switching to the quiz stage once the last
    /// page has been passed.
    pub fn next_page(&mut self, lesson_len: usize) {
        if self.lesson_index < lesson_len {
            self.lesson_index += 1;
        }
        if self.lesson_complete(lesson_len) {
            self.stage = Stage::Quizzing;
        }
    }

    pub fn previous_page(&mut self) {
        self.lesson_index = self.lesson_index.saturating_sub(1);
    }

    pub fn begin_quiz(&mut self) {
        self.stage = Stage::Quizzing;
        self.quiz_started = true;
    }

    pub fn record_answer(&mut self, correct: bool, quiz_len: usize) {
        if self.quiz_complete(quiz_len) {
            return;
        }
        if correct {
            self.score += 1;
        }
        self.quiz_index += 1;
    }

    /// Leaves progress untouched so a later topic selection is the only reset.
    pub fn to_menu(&mut self) {
        self.stage = Stage::Choosing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Lesson, Quiz};

    fn entry(pages: usize) -> TopicEntry {
        let pages = (0..pages).map(|i| format!("page {i}")).collect();
        TopicEntry::new("t", "T", Lesson::new(pages), Quiz::default())
    }

    #[test]
    fn default_session_is_choosing() {
        let session = Session::default();
        assert_eq!(session.stage(), Stage::Choosing);
        assert_eq!(session.topic(), None);
    }

    #[test]
    fn topic_selection_resets_progress() {
        let mut session = Session::for_topic(&entry(2));
        session.next_page(2);
        session.next_page(2);
        session.begin_quiz();
        session.record_answer(true, 3);

        let session = Session::for_topic(&entry(2));
        assert_eq!(session.stage(), Stage::Reading);
        assert_eq!(session.lesson_index(), 0);
        assert_eq!(session.quiz_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(!session.quiz_started());
    }

    #[test]
    fn empty_lesson_goes_straight_to_quiz() {
        let session = Session::for_topic(&entry(0));
        assert_eq!(session.stage(), Stage::Quizzing);
        assert!(session.lesson_complete(0));
    }

    #[test]
    fn page_index_stays_in_bounds() {
        let mut session = Session::for_topic(&entry(1));
        session.previous_page();
        assert_eq!(session.lesson_index(), 0);

        session.next_page(1);
        session.next_page(1);
        assert_eq!(session.lesson_index(), 1);
        assert_eq!(session.stage(), Stage::Quizzing);
    }

    #[test]
    fn score_never_exceeds_quiz_length() {
        let mut session = Session::for_topic(&entry(0));
        session.begin_quiz();
        for _ in 0..5 {
            session.record_answer(true, 2);
        }
        assert_eq!(session.quiz_index(), 2);
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn menu_keeps_indices() {
        let mut session = Session::for_topic(&entry(3));
        session.next_page(3);
        session.to_menu();
        assert_eq!(session.stage(), Stage::Choosing);
        assert_eq!(session.lesson_index(), 1);
    }
}
