//! Question catalog oracle.

/// A multiple-choice question record.
///
/// Immutable content: sessions copy a question into their pending slot but
/// never create or modify catalog entries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// The question text shown to the player.
    pub text: String,
    /// Ordered answer options, exactly as rendered.
    pub options: Vec<String>,
    /// The designated correct answer. Always one of `options`.
    pub correct: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options,
            correct: correct.into(),
        }
    }

    /// Exact string comparison against the designated correct answer.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct == answer
    }
}

/// Read-only access to the question catalog.
///
/// Implementations are guaranteed non-empty by construction; the draw action
/// treats an empty catalog as a pipeline error rather than a reachable
/// runtime state.
pub trait CatalogOracle: Send + Sync {
    /// Number of questions available for random draws.
    fn question_count(&self) -> usize;

    /// Returns the question at `index`, if within bounds.
    ///
    /// Catalog order carries no meaning; draws sample uniformly with
    /// replacement.
    fn question(&self, index: usize) -> Option<Question>;
}
