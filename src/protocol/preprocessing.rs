use super::RpcMethod;
use serde::{Deserialize, Serialize};

pub const SERVICE: &str = "zemberek.preprocessor.PreprocessingService";

pub const EXTRACT_SENTENCES: RpcMethod = RpcMethod::new(SERVICE, "ExtractSentences");

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceExtractionRequest<'a> {
    pub document: &'a str,
    pub do_not_split_in_double_quotes: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentenceExtractionResponse {
    pub sentences: Vec<String>,
}
