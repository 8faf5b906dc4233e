use serde::{Deserialize, Serialize};

/// A committed roster record.
///
/// # Boundary Contract
/// - Wire names are camelCase (`firstName`, `lastName`) so embedding hosts
///   can bind form fields and table columns without renaming.
/// - `score` lies in 0..=100 for every record that went through draft
///   validation; the range is checked at submit time, not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub score: u8,
}

impl Player {
    pub fn new(
        id: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        score: u8,
    ) -> Self {
        Self { id, first_name: first_name.into(), last_name: last_name.into(), score }
    }

    /// Table cell rendering: "Last, First".
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let player = Player::new(1, "John", "Smith", 30);
        assert_eq!(player.display_name(), "Smith, John");
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let player = Player::new(2, "David", "Jones", 55);
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["firstName"], "David");
        assert_eq!(json["lastName"], "Jones");
        assert_eq!(json["score"], 55);
    }
}
