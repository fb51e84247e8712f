use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sender side of a game transfer is a game-side account.
pub const FROM_TYPE_GAME: u8 = 1;
/// Recipient side of a game transfer is a player account.
pub const TO_TYPE_PLAYER: u8 = 2;
/// Plain transfer, no special transaction semantics.
pub const TRANSACTION_TYPE_TRANSFER: u8 = 0;

/// Prefix for the idempotency key sent with each transfer.
pub const CLIENT_ID_PREFIX: &str = "dinosty-airdrop-";

/// Request body for POST /ft/tokens/balance/game/transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from_id: String,
    pub from_type: u8,
    pub to_id: String,
    pub to_type: u8,
    pub token_id: String,
    /// Amount in the token's smallest unit, as a decimal-integer string.
    pub amount: String,
    /// Server-side idempotency/correlation key, derived from the recipient id.
    pub client_id: String,
    pub transaction_type: u8,
}

impl TransferRequest {
    /// Build a transfer from the game account to one player account.
    pub fn game_to_player(
        from_id: impl Into<String>,
        to_id: impl Into<String>,
        token_id: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        let to_id = to_id.into();
        Self {
            from_id: from_id.into(),
            from_type: FROM_TYPE_GAME,
            client_id: format!("{}{}", CLIENT_ID_PREFIX, to_id),
            to_id,
            to_type: TO_TYPE_PLAYER,
            token_id: token_id.into(),
            amount: amount.into(),
            transaction_type: TRANSACTION_TYPE_TRANSFER,
        }
    }
}

/// Accepted transfer: the HTTP status and whatever JSON the endpoint returned.
///
/// The response schema is not validated; only status and raw body are surfaced.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Transfer API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    #[error("Request Error: {0}")]
    RequestError(String),
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}
