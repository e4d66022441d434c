use super::RpcMethod;
use serde::{Deserialize, Serialize};

pub const SERVICE: &str = "zemberek.normalization.NormalizationService";

pub const NORMALIZE: RpcMethod = RpcMethod::new(SERVICE, "Normalize");

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationRequest<'a> {
    pub input: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizationResponse {
    pub normalized_input: String,
    /// 服務端無法正規化時填入，此時 `normalized_input` 為空
    pub error: String,
}
