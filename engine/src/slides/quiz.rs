//! Quiz slide: four questions, a score, and a certificate.

use std::time::Duration;

use longshot_types::Cue;

use crate::sound::SoundState;

/// A locked-in answer shows its feedback this long before moving on.
const FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
}

pub const QUESTIONS: [Question; 4] = [
    Question {
        prompt: "A basket holds 10 apples and just one is red. What is the chance of pulling out the red one?",
        options: ["1 in 2", "1 in 5", "1 in 10", "1 in 100"],
        correct: 2,
    },
    Question {
        prompt: "How many numbers does a EuroMillions ticket pick?",
        options: ["3 numbers", "5 numbers", "7 numbers", "10 numbers"],
        correct: 1,
    },
    Question {
        prompt: "The chance of winning the jackpot is about 1 in...",
        options: ["1 million", "10 million", "140 million", "1 billion"],
        correct: 2,
    },
    Question {
        prompt: "What is a better thing to do with the money than buying tickets?",
        options: [
            "Buy even more tickets",
            "Books, toys, or ice cream",
            "Bury it in the garden",
            "Throw it out the window",
        ],
        correct: 1,
    },
];

/// An answer the viewer has locked in, waiting out its feedback delay.
#[derive(Debug, Clone, Copy)]
pub struct PickedAnswer {
    pub choice: usize,
    pub correct: bool,
    since: Duration,
}

#[derive(Debug)]
pub enum QuizPhase {
    /// The "ready for the quiz?" intro card.
    Intro,
    Question {
        index: usize,
        picked: Option<PickedAnswer>,
    },
    Certificate,
}

#[derive(Debug)]
pub struct QuizUnit {
    phase: QuizPhase,
    answers: Vec<bool>,
    cursor: usize,
}

impl QuizUnit {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: QuizPhase::Intro,
            answers: Vec::new(),
            cursor: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    #[must_use]
    pub fn answers(&self) -> &[bool] {
        &self.answers
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| **a).count()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn start(&mut self, sound: &mut SoundState) {
        if !matches!(self.phase, QuizPhase::Intro) {
            return;
        }
        sound.play(Cue::Click);
        self.phase = QuizPhase::Question {
            index: 0,
            picked: None,
        };
        self.cursor = 0;
    }

    /// Move the option cursor on the current question.
    pub fn move_cursor(&mut self, delta: i32) {
        if let QuizPhase::Question { picked: None, .. } = self.phase {
            let count = QUESTIONS[0].options.len() as i32;
            self.cursor = (self.cursor as i32 + delta).rem_euclid(count) as usize;
        }
    }

    /// Lock in an answer on the current question. Ignored once one is picked.
    pub fn answer(&mut self, choice: usize, sound: &mut SoundState) {
        let QuizPhase::Question { index, picked } = &mut self.phase else {
            return;
        };
        if picked.is_some() || choice >= QUESTIONS[*index].options.len() {
            return;
        }
        let correct = choice == QUESTIONS[*index].correct;
        sound.play(if correct { Cue::Success } else { Cue::Wrong });
        self.answers.push(correct);
        *picked = Some(PickedAnswer {
            choice,
            correct,
            since: Duration::ZERO,
        });
    }

    /// Answer at the cursor position.
    pub fn answer_at_cursor(&mut self, sound: &mut SoundState) {
        self.answer(self.cursor, sound);
    }

    /// Back to the intro with a clean score sheet.
    pub fn reset(&mut self, sound: &mut SoundState) {
        sound.play(Cue::Click);
        self.phase = QuizPhase::Intro;
        self.answers.clear();
        self.cursor = 0;
    }

    /// Returns true exactly once, when the last feedback delay elapses and
    /// the certificate appears.
    pub fn advance(&mut self, delta: Duration, sound: &mut SoundState) -> bool {
        let QuizPhase::Question { index, picked } = &mut self.phase else {
            return false;
        };
        let index = *index;
        let Some(answer) = picked.as_mut() else {
            return false;
        };
        answer.since = answer.since.saturating_add(delta);
        if answer.since < FEEDBACK_DELAY {
            return false;
        }
        if index < QUESTIONS.len() - 1 {
            self.phase = QuizPhase::Question {
                index: index + 1,
                picked: None,
            };
            self.cursor = 0;
            false
        } else {
            sound.play(Cue::Fanfare);
            self.phase = QuizPhase::Certificate;
            true
        }
    }
}

impl Default for QuizUnit {
    fn default() -> Self {
        Self::new()
    }
}
