use anyhow::{bail, Result};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Question;

/// A question together with its answer choices in display order
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuestion {
    pub question: Question,
    pub choices: Vec<String>,
}

impl PreparedQuestion {
    /// Combine incorrect and correct answers and shuffle them once
    pub fn prepare<R: Rng + ?Sized>(question: Question, rng: &mut R) -> Self {
        let mut choices = question.incorrect_answers.clone();
        choices.push(question.correct_answer.clone());
        choices.shuffle(rng);
        Self { question, choices }
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.question.correct_answer
    }
}

/// Where the user is within the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Answering { selected: usize },
    Revealed { selected: usize, correct: bool },
}

/// Outcome of moving past a revealed question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextQuestion,
    Finished,
    /// The current question has not been answered yet
    NotRevealed,
}

/// In-memory state of one quiz run
///
/// Questions are asked in the order they were fetched. Each question's
/// choices are shuffled exactly once, when the session is built, so the
/// order is stable for as long as the question is on screen.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<PreparedQuestion>,
    index: usize,
    phase: Phase,
    correct_count: usize,
    finished: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        Self::with_rng(questions, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(questions: Vec<Question>, rng: &mut R) -> Result<Self> {
        if questions.is_empty() {
            bail!("cannot start a quiz without questions");
        }

        let questions = questions
            .into_iter()
            .map(|q| PreparedQuestion::prepare(q, rng))
            .collect();

        Ok(Self {
            questions,
            index: 0,
            phase: Phase::Answering { selected: 0 },
            correct_count: 0,
            finished: false,
        })
    }

    pub fn current(&self) -> &PreparedQuestion {
        &self.questions[self.index]
    }

    /// Zero-based index of the current question
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Index of the highlighted choice
    pub fn selected(&self) -> usize {
        match self.phase {
            Phase::Answering { selected } | Phase::Revealed { selected, .. } => selected,
        }
    }

    pub fn selected_choice(&self) -> &str {
        &self.current().choices[self.selected()]
    }

    /// Move the highlight; ignored once the answer is revealed
    pub fn select(&mut self, index: usize) {
        if let Phase::Answering { .. } = self.phase {
            if index < self.current().choices.len() {
                self.phase = Phase::Answering { selected: index };
            }
        }
    }

    pub fn select_next(&mut self) {
        let len = self.current().choices.len();
        self.select((self.selected() + 1) % len);
    }

    pub fn select_previous(&mut self) {
        let len = self.current().choices.len();
        self.select((self.selected() + len - 1) % len);
    }

    /// Lock in the highlighted choice and reveal whether it was right
    ///
    /// Returns the correctness, or `None` if the question was already answered.
    pub fn submit(&mut self) -> Option<bool> {
        match self.phase {
            Phase::Answering { selected } => {
                let correct = self.current().is_correct(&self.current().choices[selected]);
                if correct {
                    self.correct_count += 1;
                }
                self.phase = Phase::Revealed { selected, correct };
                Some(correct)
            }
            Phase::Revealed { .. } => None,
        }
    }

    pub fn advance(&mut self) -> Advance {
        match self.phase {
            Phase::Answering { .. } => Advance::NotRevealed,
            Phase::Revealed { .. } if self.index + 1 >= self.questions.len() => {
                self.finished = true;
                Advance::Finished
            }
            Phase::Revealed { .. } => {
                self.index += 1;
                self.phase = Phase::Answering { selected: 0 };
                Advance::NextQuestion
            }
        }
    }

    /// (correct answers, total questions)
    pub fn score(&self) -> (usize, usize) {
        (self.correct_count, self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(prompt: &str, correct: &str, incorrect: &[&str]) -> Question {
        Question {
            question: prompt.to_string(),
            correct_answer: correct.to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
            category: None,
            difficulty: None,
        }
    }

    fn session() -> QuizSession {
        let mut rng = StdRng::seed_from_u64(7);
        QuizSession::with_rng(
            vec![
                question("one", "a", &["b", "c", "d"]),
                question("two", "w", &["x", "y", "z"]),
            ],
            &mut rng,
        )
        .unwrap()
    }

    fn correct_index(session: &QuizSession) -> usize {
        let current = session.current();
        current
            .choices
            .iter()
            .position(|c| *c == current.question.correct_answer)
            .unwrap()
    }

    #[test]
    fn test_empty_questions_rejected() {
        assert!(QuizSession::new(vec![]).is_err());
    }

    #[test]
    fn test_choices_contain_every_answer_once() {
        let s = session();
        let mut choices = s.current().choices.clone();
        choices.sort();
        assert_eq!(choices, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_shuffle_is_deterministic_for_seed() {
        let first = session();
        let second = session();
        assert_eq!(first.current().choices, second.current().choices);
    }

    #[test]
    fn test_choice_order_stable_across_reads() {
        let s = session();
        let before = s.current().choices.clone();
        let _ = s.selected_choice();
        assert_eq!(s.current().choices, before);
    }

    #[test]
    fn test_initial_selection_is_first_choice() {
        let s = session();
        assert_eq!(s.phase(), Phase::Answering { selected: 0 });
        assert_eq!(s.selected_choice(), s.current().choices[0]);
    }

    #[test]
    fn test_selection_wraps() {
        let mut s = session();
        s.select_previous();
        assert_eq!(s.selected(), 3);
        s.select_next();
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn test_correct_answer_reveals_correct() {
        let mut s = session();
        let idx = correct_index(&s);
        s.select(idx);
        assert_eq!(s.submit(), Some(true));
        assert_eq!(s.phase(), Phase::Revealed { selected: idx, correct: true });
        assert_eq!(s.score(), (1, 2));
    }

    #[test]
    fn test_wrong_answer_reveals_wrong() {
        let mut s = session();
        let idx = (correct_index(&s) + 1) % 4;
        s.select(idx);
        assert_eq!(s.submit(), Some(false));
        assert_eq!(s.score(), (0, 2));
    }

    #[test]
    fn test_submit_twice_is_noop() {
        let mut s = session();
        s.select(correct_index(&s));
        s.submit();
        assert_eq!(s.submit(), None);
        assert_eq!(s.score(), (1, 2));
    }

    #[test]
    fn test_selection_locked_after_reveal() {
        let mut s = session();
        s.submit();
        let selected = s.selected();
        s.select_next();
        assert_eq!(s.selected(), selected);
    }

    #[test]
    fn test_advance_requires_reveal() {
        let mut s = session();
        assert_eq!(s.advance(), Advance::NotRevealed);
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn test_full_run() {
        let mut s = session();
        s.select(correct_index(&s));
        s.submit();
        assert_eq!(s.advance(), Advance::NextQuestion);
        assert_eq!(s.index(), 1);
        assert_eq!(s.current().question.question, "two");
        assert_eq!(s.phase(), Phase::Answering { selected: 0 });

        s.select((correct_index(&s) + 1) % 4);
        s.submit();
        assert_eq!(s.advance(), Advance::Finished);
        assert!(s.is_finished());
        assert_eq!(s.score(), (1, 2));
    }

    #[test]
    fn test_answer_compared_by_text() {
        // A question whose decoded answers contain punctuation and unicode
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = QuizSession::with_rng(
            vec![question("q", "Pokémon & Co.", &["Digimon", "Yu-Gi-Oh!", "Beyblade"])],
            &mut rng,
        )
        .unwrap();
        s.select(correct_index(&s));
        assert_eq!(s.submit(), Some(true));
    }
}
