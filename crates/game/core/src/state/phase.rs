/// Mutually exclusive phases of a session, derived from the `started` and
/// `winner` flags. Each phase corresponds to exactly one UI screen.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SessionPhase {
    /// Collecting player count and names.
    Setup,
    /// Turns in progress, no winner yet.
    Active,
    /// A player reached the winning score; terminal until reset.
    Victory,
}
