//! Traits describing read-only external data.
//!
//! Oracles expose the question catalog, game configuration, and random
//! number generation. The [`Env`] aggregate bundles them so the engine can
//! access everything it needs without hard coupling to concrete
//! implementations.
mod catalog;
mod config;
mod error;
mod rng;

pub use catalog::{CatalogOracle, Question};
pub use config::ConfigOracle;
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, compute_seed};

/// Aggregates read-only oracles required by the action pipeline.
#[derive(Debug)]
pub struct Env<'a, Q, C, R>
where
    Q: CatalogOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    catalog: Option<&'a Q>,
    config: Option<&'a C>,
    rng: Option<&'a R>,
}

pub type QuizEnv<'a> = Env<'a, dyn CatalogOracle + 'a, dyn ConfigOracle + 'a, dyn RngOracle + 'a>;

// Manual impls: the derived versions would demand Copy/Clone of the oracle
// types themselves, which trait objects cannot satisfy.
impl<'a, Q, C, R> Clone for Env<'a, Q, C, R>
where
    Q: CatalogOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, Q, C, R> Copy for Env<'a, Q, C, R>
where
    Q: CatalogOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

impl<'a, Q, C, R> Env<'a, Q, C, R>
where
    Q: CatalogOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(catalog: Option<&'a Q>, config: Option<&'a C>, rng: Option<&'a R>) -> Self {
        Self {
            catalog,
            config,
            rng,
        }
    }

    pub fn with_all(catalog: &'a Q, config: &'a C, rng: &'a R) -> Self {
        Self::new(Some(catalog), Some(config), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            catalog: None,
            config: None,
            rng: None,
        }
    }

    /// Returns the CatalogOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog oracle was
    /// provided.
    pub fn catalog(&self) -> Result<&'a Q, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was
    /// provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the winning score from the config oracle.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was
    /// provided.
    pub fn winning_score(&self) -> Result<u32, OracleError> {
        Ok(self.config()?.winning_score())
    }
}

impl<'a, Q, C, R> Env<'a, Q, C, R>
where
    Q: CatalogOracle + 'a,
    C: ConfigOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `QuizEnv`
    /// (consumes self).
    pub fn into_quiz_env(self) -> QuizEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(catalog, config, rng)
    }

    /// Converts this environment into a trait-object based `QuizEnv`
    /// (borrows self). Use this when converting more than once.
    pub fn as_quiz_env(&self) -> QuizEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(catalog, config, rng)
    }
}
