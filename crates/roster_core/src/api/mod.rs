pub mod roster_json;

pub use roster_json::{
    create_player_json, list_players_json, remove_player_json, update_player_json,
    validate_draft_json, ApiError, ApiResponse, CreatePlayerRequest, CreatePlayerResponse,
    ListPlayersResponse, PlayerRow, RemovePlayerRequest, RemovePlayerResponse,
    UpdatePlayerRequest, UpdatePlayerResponse, ValidateDraftRequest, ValidationResponse,
};
