//! Eclipse Theater - rotate the moon into the level's target window
//!
//! Each level gates its quiz behind an alignment check against an
//! [`AlignmentWindow`]; answering the quiz correctly banks the level's
//! reward. The solved-set keeps a re-answered quiz from crediting twice.

use crate::core::types::RewardSink;
use crate::data::levels::{EclipseLevel, ECLIPSE_LEVELS};
use std::collections::HashSet;

/// Outcome of answering the current level's quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    /// First correct answer for this level; reward credited
    Correct,
    /// Level already solved; no further credit
    AlreadySolved,
    Wrong,
    /// The quiz is not open (alignment not confirmed yet, or game finished)
    NotOpen,
}

/// Eclipse Theater state
#[derive(Debug)]
pub struct EclipseTheater {
    level_index: usize,
    /// Moon rotation slider, degrees (any real value; membership wraps)
    pub angle: f64,
    /// Alignment confirmed for the current level, quiz showing
    quiz_open: bool,
    /// Ids of levels whose reward has been credited
    solved: HashSet<u32>,
    pub score: u32,
    pub feedback: String,
}

impl EclipseTheater {
    pub fn new() -> Self {
        Self {
            level_index: 0,
            angle: 0.0,
            quiz_open: false,
            solved: HashSet::new(),
            score: 0,
            feedback: String::new(),
        }
    }

    /// The active level, or None once all levels are finished
    pub fn current_level(&self) -> Option<&'static EclipseLevel> {
        ECLIPSE_LEVELS.get(self.level_index)
    }

    pub fn is_complete(&self) -> bool {
        self.level_index >= ECLIPSE_LEVELS.len()
    }

    pub fn quiz_open(&self) -> bool {
        self.quiz_open
    }

    /// Has the active level's reward been banked?
    pub fn current_solved(&self) -> bool {
        self.current_level()
            .map(|l| self.solved.contains(&l.id))
            .unwrap_or(false)
    }

    /// Test the slider angle against the level's window
    pub fn check_alignment(&mut self) -> bool {
        let Some(level) = self.current_level() else {
            return false;
        };
        if level.window.contains(self.angle) {
            self.quiz_open = true;
            self.feedback = "Perfect Alignment! Answer the question.".to_string();
            true
        } else {
            self.feedback = "Not aligned yet. Look closely at the instruction!".to_string();
            false
        }
    }

    /// Answer the open quiz
    pub fn answer(&mut self, option: usize, sink: &mut impl RewardSink) -> QuizOutcome {
        let Some(level) = self.current_level() else {
            return QuizOutcome::NotOpen;
        };
        if !self.quiz_open {
            return QuizOutcome::NotOpen;
        }

        if option != level.quiz.correct_answer {
            self.feedback = "Try again!".to_string();
            return QuizOutcome::Wrong;
        }

        self.feedback = level.fact.to_string();
        if !self.solved.insert(level.id) {
            return QuizOutcome::AlreadySolved;
        }
        self.score += level.reward;
        sink.add_reward(level.reward);
        QuizOutcome::Correct
    }

    /// Advance to the next level (or into the finished state)
    pub fn next_level(&mut self) {
        if self.level_index < ECLIPSE_LEVELS.len() {
            self.level_index += 1;
        }
        self.angle = 0.0;
        self.quiz_open = false;
        self.feedback.clear();
    }

    /// Restart from level 1; replaying re-earns rewards by design
    pub fn reset(&mut self) {
        self.level_index = 0;
        self.angle = 0.0;
        self.quiz_open = false;
        self.solved.clear();
        self.score = 0;
        self.feedback.clear();
    }
}

impl Default for EclipseTheater {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSink(u32);
    impl RewardSink for CountingSink {
        fn add_reward(&mut self, amount: u32) {
            self.0 += amount;
        }
    }

    #[test]
    fn test_alignment_gates_the_quiz() {
        let mut game = EclipseTheater::new();
        let mut sink = CountingSink(0);

        // Level 1 window is 160-200; angle 0 misses.
        assert!(!game.check_alignment());
        assert_eq!(game.answer(1, &mut sink), QuizOutcome::NotOpen);

        game.angle = 180.0;
        assert!(game.check_alignment());
        assert!(game.quiz_open());
    }

    #[test]
    fn test_correct_answer_credits_once() {
        let mut game = EclipseTheater::new();
        let mut sink = CountingSink(0);
        game.angle = 180.0;
        game.check_alignment();

        assert_eq!(game.answer(1, &mut sink), QuizOutcome::Correct);
        assert_eq!(sink.0, 20);
        assert_eq!(game.score, 20);

        // Answering again on the solved level never double-credits.
        assert_eq!(game.answer(1, &mut sink), QuizOutcome::AlreadySolved);
        assert_eq!(sink.0, 20);
        assert_eq!(game.score, 20);
    }

    #[test]
    fn test_wrong_answer_allows_retry() {
        let mut game = EclipseTheater::new();
        let mut sink = CountingSink(0);
        game.angle = 170.0;
        game.check_alignment();

        assert_eq!(game.answer(0, &mut sink), QuizOutcome::Wrong);
        assert_eq!(game.feedback, "Try again!");
        assert_eq!(game.answer(1, &mut sink), QuizOutcome::Correct);
    }

    #[test]
    fn test_wraparound_levels_accept_seam_angles() {
        let mut game = EclipseTheater::new();
        let mut sink = CountingSink(0);

        // Clear levels 1 and 2.
        for angle in [180.0, 180.0] {
            game.angle = angle;
            game.check_alignment();
            game.answer(game.current_level().unwrap().quiz.correct_answer, &mut sink);
            game.next_level();
        }

        // Level 3: 340-20 wrapping; 350 should align.
        game.angle = 350.0;
        assert!(game.check_alignment());
        game.answer(0, &mut sink);
        game.next_level();

        // Level 4: 355-5 wrapping; a negative slider angle wraps in.
        game.angle = -2.0;
        assert!(game.check_alignment());
        game.answer(1, &mut sink);

        assert_eq!(sink.0, 20 + 50 + 20 + 100);
    }

    #[test]
    fn test_next_level_resets_slider_and_quiz() {
        let mut game = EclipseTheater::new();
        let mut sink = CountingSink(0);
        game.angle = 180.0;
        game.check_alignment();
        game.answer(1, &mut sink);

        game.next_level();
        assert_eq!(game.angle, 0.0);
        assert!(!game.quiz_open());
        assert_eq!(game.current_level().unwrap().id, 2);
    }

    #[test]
    fn test_finishing_all_levels_completes() {
        let mut game = EclipseTheater::new();
        let mut sink = CountingSink(0);
        let aligned = [180.0, 180.0, 0.0, 0.0];
        for angle in aligned {
            game.angle = angle;
            assert!(game.check_alignment());
            game.answer(game.current_level().unwrap().quiz.correct_answer, &mut sink);
            game.next_level();
        }
        assert!(game.is_complete());
        assert!(game.current_level().is_none());
    }

    #[test]
    fn test_reset_rearms_rewards() {
        let mut game = EclipseTheater::new();
        let mut sink = CountingSink(0);
        game.angle = 180.0;
        game.check_alignment();
        game.answer(1, &mut sink);

        game.reset();
        assert_eq!(game.score, 0);
        game.angle = 180.0;
        game.check_alignment();
        assert_eq!(game.answer(1, &mut sink), QuizOutcome::Correct);
        assert_eq!(sink.0, 40);
    }
}
