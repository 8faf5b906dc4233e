use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A draft score that must be numeric by the time it reaches the roster
    /// could not be parsed. Validated drafts never hit this.
    #[error("Invalid score value: {raw:?}")]
    InvalidScore { raw: String },

    /// A non-empty draft id that does not name a roster record id.
    #[error("Invalid player id: {raw:?}")]
    InvalidPlayerId { raw: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
