//! Question catalog loader.

use std::path::Path;

use game_core::Question;
use serde::{Deserialize, Serialize};

use crate::catalog::StaticCatalog;
use crate::loaders::{LoadResult, read_file};

/// Question catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionCatalog {
    pub questions: Vec<Question>,
}

/// Loader for question catalogs from RON sources.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a question catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a QuestionCatalog
    pub fn load(path: &Path) -> LoadResult<StaticCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog {}: {}", path.display(), e))
    }

    /// Parse a question catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<StaticCatalog> {
        let catalog: QuestionCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse question catalog RON: {}", e))?;

        Ok(StaticCatalog::new(catalog.questions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::CatalogOracle;
    use std::io::Write;

    const SAMPLE: &str = r#"
QuestionCatalog(
    questions: [
        (
            text: "Que vaut 7 × 8 ?",
            options: ["54", "56", "64"],
            correct: "56",
        ),
        (
            text: "Un angle droit mesure...",
            options: ["45°", "90°"],
            correct: "90°",
        ),
    ],
)
"#;

    #[test]
    fn parses_ron_records_into_questions() {
        let catalog = CatalogLoader::parse(SAMPLE).expect("parse");
        assert_eq!(catalog.question_count(), 2);

        let question = catalog.question(0).expect("first question");
        assert_eq!(question.text, "Que vaut 7 × 8 ?");
        assert_eq!(question.options, vec!["54", "56", "64"]);
        assert!(question.is_correct("56"));
        assert!(!question.is_correct("54"));
    }

    #[test]
    fn loads_a_catalog_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write");

        let catalog = CatalogLoader::load(file.path()).expect("load");
        assert_eq!(catalog.question_count(), 2);
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(CatalogLoader::parse("QuestionCatalog(questions: [").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(CatalogLoader::load(Path::new("/nonexistent/questions.ron")).is_err());
    }
}
