//! JSON API for roster operations
//!
//! String-in/string-out endpoints for embedding hosts, supporting draft
//! validation, record creation, updates, removal, and table listing. Every
//! response is wrapped in an `ApiResponse` envelope with a schema version
//! and timestamp.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::models::{DraftField, Player, PlayerDraft};
use crate::roster::validation::{DraftValidator, ValidationReport};
use crate::roster::PlayerRoster;

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with codes and details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: None }
    }

    /// Validation failure with the field -> message map in `details`.
    pub fn from_report(report: &ValidationReport) -> Self {
        let details = report
            .errors()
            .iter()
            .map(|(field, message)| {
                (field.as_str().to_string(), serde_json::Value::String(message.clone()))
            })
            .collect();
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: "Draft validation failed".to_string(),
            details: Some(details),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Draft validation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateDraftRequest {
    pub schema_version: Option<String>,
    pub draft: PlayerDraft,
}

/// Draft validation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub errors: BTreeMap<DraftField, String>,
}

/// Player creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    pub schema_version: Option<String>,
    pub draft: PlayerDraft,
}

/// Player creation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlayerResponse {
    pub player: Player,
}

/// Player update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlayerRequest {
    pub schema_version: Option<String>,
    pub player_id: u32,
    pub draft: PlayerDraft,
}

/// Player update response; `updated` is false when the id named no record,
/// which is not an error at this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlayerResponse {
    pub updated: bool,
    pub player: Option<Player>,
}

/// Player removal request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovePlayerRequest {
    pub schema_version: Option<String>,
    pub player_id: u32,
}

/// Player removal response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovePlayerResponse {
    pub removed: bool,
    pub player: Option<Player>,
}

/// One table row, in standing order, with the display name precomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    pub id: u32,
    pub display_name: String,
    pub score: u8,
}

/// Roster listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPlayersResponse {
    pub players: Vec<PlayerRow>,
    pub total: usize,
}

fn encode<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
}

/// Validate a draft from a JSON request string.
///
/// # Returns
/// JSON string containing `ApiResponse<ValidationResponse>`
pub fn validate_draft_json(request_json: &str) -> String {
    debug!("Processing draft validation request");

    let request: ValidateDraftRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse ValidateDraftRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return encode(&ApiResponse::<ValidationResponse>::error(error));
        }
    };

    let report = DraftValidator::validate(&request.draft);
    let response =
        ValidationResponse { valid: report.is_valid(), errors: report.errors().clone() };
    encode(&ApiResponse::success(response))
}

/// Create a player from a JSON request string.
///
/// The draft is validated first; a validation failure is returned as a
/// `VALIDATION_FAILED` error whose details carry the field messages.
///
/// # Returns
/// JSON string containing `ApiResponse<CreatePlayerResponse>`
pub fn create_player_json(request_json: &str, roster: &mut PlayerRoster) -> String {
    info!("Processing player creation request");

    let request: CreatePlayerRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse CreatePlayerRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return encode(&ApiResponse::<CreatePlayerResponse>::error(error));
        }
    };

    let report = DraftValidator::validate(&request.draft);
    if !report.is_valid() {
        warn!("Player creation request validation failed: {:?}", report.errors());
        return encode(&ApiResponse::<CreatePlayerResponse>::error(ApiError::from_report(
            &report,
        )));
    }

    match roster.create(&request.draft) {
        Ok(player) => {
            info!("Successfully created player: {} (id: {})", player.display_name(), player.id);
            encode(&ApiResponse::success(CreatePlayerResponse { player }))
        }
        Err(e) => {
            error!("Failed to create player: {}", e);
            encode(&ApiResponse::<CreatePlayerResponse>::error(ApiError::new(
                "INVALID_SCORE",
                &e.to_string(),
            )))
        }
    }
}

/// Update a player from a JSON request string.
///
/// An id that names no record yields `updated: false` on a success envelope;
/// the roster stays silent about absent ids.
///
/// # Returns
/// JSON string containing `ApiResponse<UpdatePlayerResponse>`
pub fn update_player_json(request_json: &str, roster: &mut PlayerRoster) -> String {
    info!("Processing player update request");

    let request: UpdatePlayerRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse UpdatePlayerRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return encode(&ApiResponse::<UpdatePlayerResponse>::error(error));
        }
    };

    let report = DraftValidator::validate(&request.draft);
    if !report.is_valid() {
        warn!("Player update request validation failed: {:?}", report.errors());
        return encode(&ApiResponse::<UpdatePlayerResponse>::error(ApiError::from_report(
            &report,
        )));
    }

    match roster.update(request.player_id, &request.draft) {
        Ok(()) => {
            let player = roster.get(request.player_id).cloned();
            let updated = player.is_some();
            if updated {
                info!("Successfully updated player: {}", request.player_id);
            } else {
                debug!("Update targeted unknown player id: {}", request.player_id);
            }
            encode(&ApiResponse::success(UpdatePlayerResponse { updated, player }))
        }
        Err(e) => {
            error!("Failed to update player: {}", e);
            encode(&ApiResponse::<UpdatePlayerResponse>::error(ApiError::new(
                "INVALID_SCORE",
                &e.to_string(),
            )))
        }
    }
}

/// Remove a player from a JSON request string.
///
/// # Returns
/// JSON string containing `ApiResponse<RemovePlayerResponse>`
pub fn remove_player_json(request_json: &str, roster: &mut PlayerRoster) -> String {
    info!("Processing player removal request");

    let request: RemovePlayerRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse RemovePlayerRequest: {}", e);
            let error = ApiError::new("INVALID_JSON", &format!("Invalid JSON format: {}", e));
            return encode(&ApiResponse::<RemovePlayerResponse>::error(error));
        }
    };

    let player = roster.remove(request.player_id);
    let removed = player.is_some();
    if removed {
        info!("Successfully removed player: {}", request.player_id);
    } else {
        debug!("Removal targeted unknown player id: {}", request.player_id);
    }
    encode(&ApiResponse::success(RemovePlayerResponse { removed, player }))
}

/// List the roster in standing order as table rows.
///
/// # Returns
/// JSON string containing `ApiResponse<ListPlayersResponse>`
pub fn list_players_json(roster: &PlayerRoster) -> String {
    debug!("Processing roster listing request");

    let players: Vec<PlayerRow> = roster
        .sorted()
        .into_iter()
        .map(|p| PlayerRow { id: p.id, display_name: p.display_name(), score: p.score })
        .collect();
    let total = players.len();
    encode(&ApiResponse::success(ListPlayersResponse { players, total }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(response: &str) -> serde_json::Value {
        serde_json::from_str(response).unwrap()
    }

    #[test]
    fn test_validate_endpoint_reports_field_errors() {
        let request = json!({
            "draft": {"firstName": "", "lastName": "Smith", "score": "50"}
        });
        let response = parse(&validate_draft_json(&request.to_string()));

        assert_eq!(response["success"], true);
        assert_eq!(response["schema_version"], "v1");
        let data = &response["data"];
        assert_eq!(data["valid"], false);
        assert_eq!(data["errors"]["firstName"], "First name is required.");
        assert!(data["errors"].get("lastName").is_none());
    }

    #[test]
    fn test_malformed_request_yields_invalid_json_error() {
        let response = parse(&validate_draft_json("not json"));
        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "INVALID_JSON");
    }

    #[test]
    fn test_create_endpoint_appends_player() {
        let mut roster = PlayerRoster::seeded();
        let request = json!({
            "draft": {"firstName": "Anna", "lastName": "Brown", "score": "72"}
        });
        let response = parse(&create_player_json(&request.to_string(), &mut roster));

        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["player"]["id"], 5);
        assert_eq!(response["data"]["player"]["score"], 72);
        assert_eq!(roster.len(), 5);
    }

    #[test]
    fn test_create_endpoint_rejects_invalid_draft_with_details() {
        let mut roster = PlayerRoster::seeded();
        let request = json!({
            "draft": {"firstName": "John1", "lastName": "Smith", "score": "150"}
        });
        let response = parse(&create_player_json(&request.to_string(), &mut roster));

        assert_eq!(response["success"], false);
        assert_eq!(response["error"]["code"], "VALIDATION_FAILED");
        let details = &response["error"]["details"];
        assert_eq!(details["firstName"], "Please enter a correct first name.");
        assert_eq!(details["score"], "Score must be in interval 0-100.");
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_update_endpoint_reports_unknown_id_without_error() {
        let mut roster = PlayerRoster::seeded();
        let request = json!({
            "player_id": 99,
            "draft": {"firstName": "John", "lastName": "Smith", "score": "10"}
        });
        let response = parse(&update_player_json(&request.to_string(), &mut roster));

        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["updated"], false);
        assert!(response["data"]["player"].is_null());
        assert_eq!(roster, PlayerRoster::seeded());
    }

    #[test]
    fn test_update_endpoint_overwrites_record() {
        let mut roster = PlayerRoster::seeded();
        let request = json!({
            "player_id": 3,
            "draft": {"id": "3", "firstName": "Mike", "lastName": "Johnson", "score": "80"}
        });
        let response = parse(&update_player_json(&request.to_string(), &mut roster));

        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["updated"], true);
        assert_eq!(response["data"]["player"]["firstName"], "Mike");
        assert_eq!(roster.get(3).unwrap().score, 80);
    }

    #[test]
    fn test_remove_endpoint() {
        let mut roster = PlayerRoster::seeded();
        let request = json!({"player_id": 2});
        let response = parse(&remove_player_json(&request.to_string(), &mut roster));

        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["removed"], true);
        assert_eq!(response["data"]["player"]["lastName"], "Jones");
        assert_eq!(roster.len(), 3);

        let response = parse(&remove_player_json(&request.to_string(), &mut roster));
        assert_eq!(response["data"]["removed"], false);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_list_endpoint_is_in_standing_order() {
        let roster = PlayerRoster::seeded();
        let response = parse(&list_players_json(&roster));

        assert_eq!(response["success"], true);
        assert_eq!(response["data"]["total"], 4);
        let rows = response["data"]["players"].as_array().unwrap();
        let names: Vec<&str> =
            rows.iter().map(|row| row["displayName"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec!["Jones, David", "Johnson, Michael", "Lee, Chris", "Smith, John"]
        );
    }
}
