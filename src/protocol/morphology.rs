use super::RpcMethod;
use serde::{Deserialize, Serialize};

pub const SERVICE: &str = "zemberek.morphology.MorphologyService";

pub const ANALYZE_SENTENCE: RpcMethod = RpcMethod::new(SERVICE, "AnalyzeSentence");

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceAnalysisRequest<'a> {
    pub input: &'a str,
    pub contain_all_analyses: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentenceAnalysisProto {
    pub input: String,
    pub results: Vec<SentenceWordAnalysisProto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentenceWordAnalysisProto {
    pub token: String,
    pub best: Option<SingleAnalysisProto>,
    pub all: Option<WordAnalysisProto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordAnalysisProto {
    pub analyses: Vec<SingleAnalysisProto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SingleAnalysisProto {
    pub analysis: String,
    pub pos: String,
    pub informal: bool,
    pub dictionary_item: Option<DictionaryItemProto>,
    pub runtime: bool,
    pub lemmas: Vec<String>,
    pub morphemes: Vec<MorphemeDataProto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionaryItemProto {
    pub lemma: String,
    pub primary_pos: String,
    pub secondary_pos: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MorphemeDataProto {
    pub morpheme: String,
    pub surface: String,
}
