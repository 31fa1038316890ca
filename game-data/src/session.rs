//! Quiz-session progression, kept separate from presentation.
//!
//! The UI drives this state machine from its event callbacks: `respond` on a
//! selection or drag release, `advance` when the auto-advance timer fires or
//! the continue button is pressed. Timers themselves are presentation and
//! stay outside; this type only guarantees the transitions are sound —
//! a second response to the same entry is ignored, and the final tally is
//! handed out exactly once for the best-score update.

/// Result of one entry, as judged by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    total: usize,
    current: usize,
    responded: bool,
    results: Vec<Outcome>,
    tally_taken: bool,
}

impl QuizSession {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            current: 0,
            responded: false,
            results: Vec::with_capacity(total),
            tally_taken: false,
        }
    }

    /// Index of the entry currently showing, `None` once complete.
    pub fn current(&self) -> Option<usize> {
        (self.current < self.total).then_some(self.current)
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.total
    }

    /// Whether the current entry has already been responded to.
    pub fn has_responded(&self) -> bool {
        self.responded
    }

    /// Register the outcome for the current entry.
    ///
    /// Only the first response per entry counts; repeats and responses after
    /// completion return false and change nothing.
    pub fn respond(&mut self, outcome: Outcome) -> bool {
        if self.is_complete() || self.responded {
            return false;
        }
        self.responded = true;
        self.results.push(outcome);
        true
    }

    /// Move to the next entry; returns its index, or `None` on completion.
    pub fn advance(&mut self) -> Option<usize> {
        if self.is_complete() {
            return None;
        }
        self.current += 1;
        self.responded = false;
        self.current()
    }

    /// Correct answers so far.
    pub fn score(&self) -> u32 {
        self.results
            .iter()
            .filter(|outcome| **outcome == Outcome::Correct)
            .count() as u32
    }

    pub fn results(&self) -> &[Outcome] {
        &self.results
    }

    /// The final tally, yielded exactly once after completion.
    ///
    /// Callers feed this to [`crate::ScoreBoard::record`]; the single-shot
    /// contract keeps one session from recording twice.
    pub fn take_final_tally(&mut self) -> Option<u32> {
        if !self.is_complete() || self.tally_taken {
            return None;
        }
        self.tally_taken = true;
        Some(self.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkthrough() {
        let mut session = QuizSession::new(3);
        assert_eq!(session.current(), Some(0));

        assert!(session.respond(Outcome::Correct));
        assert_eq!(session.advance(), Some(1));

        assert!(session.respond(Outcome::Incorrect));
        assert_eq!(session.advance(), Some(2));

        assert!(session.respond(Outcome::Correct));
        assert_eq!(session.advance(), None);

        assert!(session.is_complete());
        assert_eq!(session.score(), 2);
        assert_eq!(
            session.results(),
            &[Outcome::Correct, Outcome::Incorrect, Outcome::Correct]
        );
    }

    #[test]
    fn test_second_response_to_same_entry_is_ignored() {
        let mut session = QuizSession::new(2);

        assert!(session.respond(Outcome::Incorrect));
        // Tapping another option before the advance timer fires.
        assert!(!session.respond(Outcome::Correct));

        assert_eq!(session.score(), 0);
        assert_eq!(session.results().len(), 1);
    }

    #[test]
    fn test_advance_resets_response_guard() {
        let mut session = QuizSession::new(2);
        session.respond(Outcome::Correct);
        session.advance();

        assert!(!session.has_responded());
        assert!(session.respond(Outcome::Correct));
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn test_respond_after_complete_is_ignored() {
        let mut session = QuizSession::new(1);
        session.respond(Outcome::Correct);
        session.advance();

        assert!(!session.respond(Outcome::Correct));
        assert_eq!(session.advance(), None);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_final_tally_is_single_shot() {
        let mut session = QuizSession::new(1);

        // Not available before completion.
        assert_eq!(session.take_final_tally(), None);

        session.respond(Outcome::Correct);
        session.advance();

        assert_eq!(session.take_final_tally(), Some(1));
        assert_eq!(session.take_final_tally(), None);
    }

    #[test]
    fn test_empty_session_is_immediately_complete() {
        let mut session = QuizSession::new(0);
        assert!(session.is_complete());
        assert_eq!(session.current(), None);
        assert_eq!(session.take_final_tally(), Some(0));
    }
}
