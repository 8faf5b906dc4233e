pub mod draft;
pub mod player;

pub use draft::{DraftField, PlayerDraft};
pub use player::Player;
