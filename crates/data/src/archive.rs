use crate::StoreError;
use flip7_core::GameRound;

pub fn encode_history(history: &[GameRound]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(history)?)
}

pub fn decode_history(raw: &str) -> Result<Vec<GameRound>, StoreError> {
    Ok(serde_json::from_str(raw)?)
}
