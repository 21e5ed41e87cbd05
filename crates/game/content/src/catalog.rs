//! Owned question collection backing the catalog oracle.

use game_core::{CatalogOracle, Question};

use crate::loaders::{CatalogLoader, LoadResult};

/// Immutable question catalog loaded once at startup.
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    questions: Vec<Question>,
}

impl StaticCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The default catalog embedded in the binary.
    pub fn embedded() -> LoadResult<Self> {
        CatalogLoader::parse(crate::EMBEDDED_QUESTIONS)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl CatalogOracle for StaticCatalog {
    fn question_count(&self) -> usize {
        self.questions.len()
    }

    fn question(&self, index: usize) -> Option<Question> {
        self.questions.get(index).cloned()
    }
}
