use super::RpcMethod;
use serde::{Deserialize, Serialize};

pub const SERVICE: &str = "zemberek.langid.LanguageIdService";

/// 只在相近語言群組內評分
pub const GET_SCORES_TR: RpcMethod = RpcMethod::new(SERVICE, "GetScoresTr");
pub const GET_SCORES_FAST_TR: RpcMethod = RpcMethod::new(SERVICE, "GetScoresFastTr");

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageIdRequest<'a> {
    pub input: &'a str,
    pub max_sample_count: u32,
    pub include_scores: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageIdScoresResponse {
    pub id_result: Vec<IdResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdResult {
    pub id: String,
    pub score: f64,
}
