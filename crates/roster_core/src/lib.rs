//! # roster_core - Player Record Lifecycle Core
//!
//! This library provides the record lifecycle and validation logic for an
//! in-memory collection of players (name + score), consumed by a thin
//! presentation layer that re-reads the roster and re-renders it sorted.
//!
//! ## Features
//! - Create / update / remove with a monotonic id counter
//! - Field validation collecting every failure in one pass
//! - Stable standing sort (score descending, last name ascending)
//! - Form session state machine (draft buffer, submit dispatch, clear)
//! - JSON API for easy integration with embedding hosts

pub mod api;
pub mod error;
pub mod models;
pub mod roster;
pub mod state;

// Re-export main API functions
pub use api::roster_json::{
    create_player_json, list_players_json, remove_player_json, update_player_json,
    validate_draft_json, ApiError, ApiResponse,
};
pub use error::{Result, RosterError};

// Re-export model types
pub use models::{DraftField, Player, PlayerDraft};

// Re-export roster operations
pub use roster::validation::{DraftValidator, ValidationReport};
pub use roster::{seed_roster, sort_players, PlayerRoster};

// Re-export form session types
pub use state::{FormPhase, FormSession, SubmitOutcome};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_form_lifecycle() {
        let mut session = FormSession::seeded();

        // Reject a bad draft, fix it, commit it.
        session.set_field(DraftField::FirstName, "Anna");
        session.set_field(DraftField::Score, "72");
        let outcome = session.submit().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));

        session.set_field(DraftField::LastName, "Brown");
        let outcome = session.submit().unwrap();
        let created = match outcome {
            SubmitOutcome::Created(player) => player,
            other => panic!("expected Created, got {:?}", other),
        };

        // Edit the new record, then delete it again.
        session.edit(created.id);
        session.set_field(DraftField::Score, "99");
        let outcome = session.submit().unwrap();
        assert!(matches!(outcome, SubmitOutcome::Updated(Some(_))));
        assert_eq!(session.roster().get(created.id).unwrap().score, 99);

        session.remove(created.id);
        assert_eq!(session.roster().len(), 4);
    }

    #[test]
    fn test_json_surface_round_trip() {
        let mut roster = PlayerRoster::seeded();

        let create = json!({
            "schema_version": "v1",
            "draft": {"firstName": "Anna", "lastName": "Brown", "score": "72"}
        });
        let response: serde_json::Value =
            serde_json::from_str(&create_player_json(&create.to_string(), &mut roster)).unwrap();
        assert_eq!(response["success"], true);
        let id = response["data"]["player"]["id"].as_u64().unwrap() as u32;

        let listing: serde_json::Value =
            serde_json::from_str(&list_players_json(&roster)).unwrap();
        assert_eq!(listing["data"]["total"], 5);
        // 72 beats every seed score, so the new row leads the table.
        assert_eq!(listing["data"]["players"][0]["displayName"], "Brown, Anna");

        let remove = json!({"player_id": id});
        let response: serde_json::Value =
            serde_json::from_str(&remove_player_json(&remove.to_string(), &mut roster)).unwrap();
        assert_eq!(response["data"]["removed"], true);
        assert_eq!(roster.players(), seed_roster().as_slice());
    }

    #[test]
    fn test_schema_version_constant_matches_api_envelope() {
        let response: serde_json::Value =
            serde_json::from_str(&list_players_json(&PlayerRoster::new())).unwrap();
        assert_eq!(response["schema_version"], "v1");
        assert_eq!(SCHEMA_VERSION, 1);
    }
}
