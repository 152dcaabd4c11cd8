use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CallFailure;

use super::Snapshot;

pub(super) const GET_IP_PATH: &str = "get_ip";
pub(super) const ADD_IP_PATH: &str = "add_ip";
pub(super) const SET_ALGORITHM_PATH: &str = "set_algorithm";

/// Body of `GET get_ip`.
#[derive(Debug, Deserialize)]
pub(super) struct GetIpResponse {
    pub ip: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub stats: BTreeMap<String, u64>,
}

impl From<GetIpResponse> for Snapshot {
    fn from(response: GetIpResponse) -> Self {
        Self {
            selected_id: response.ip,
            message: response.message,
            counts_by_id: response.stats,
        }
    }
}

/// Body of `POST add_ip`.
#[derive(Debug, Serialize)]
pub(super) struct AddIpRequest<'body> {
    pub ip: &'body str,
}

/// Optional acknowledgement sent back by `set_algorithm` and `add_ip`.
#[derive(Debug, Default, Deserialize)]
struct Ack {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

/// Treats a 2xx body as success unless it explicitly says otherwise.
pub(super) fn check_ack(body: &str) -> Result<(), CallFailure> {
    if body.trim().is_empty() {
        return Ok(());
    }
    let ack: Ack = serde_json::from_str(body).unwrap_or_default();
    if ack.success == Some(false) {
        return Err(CallFailure::Rejected {
            message: ack
                .message
                .unwrap_or_else(|| "no reason given".to_owned()),
        });
    }
    Ok(())
}
