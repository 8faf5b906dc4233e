use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Player;

/// The editable fields of a draft. Doubles as the key of validation error
/// maps, so the wire name must match the form field name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    FirstName,
    LastName,
    Score,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::FirstName => "firstName",
            DraftField::LastName => "lastName",
            DraftField::Score => "score",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient edit buffer for a single player record.
///
/// All fields are raw strings straight from form input. An empty `id` marks
/// a draft for a new record; a non-empty `id` targets an existing one.
/// Owned by the presentation layer (or a `FormSession`), never by the roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerDraft {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub score: String,
}

impl PlayerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when submitting this draft should create a record rather than
    /// update one.
    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    /// Load an existing record into the edit buffer.
    pub fn from_player(player: &Player) -> Self {
        Self {
            id: player.id.to_string(),
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            score: player.score.to_string(),
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::FirstName => self.first_name = value,
            DraftField::LastName => self.last_name = value,
            DraftField::Score => self.score = value,
        }
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Score => &self.score,
        }
    }

    /// Reset to the empty "new record" state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
