use crate::core::invoker::RpcInvoker;
use crate::domain::model::{Analysis, DictionaryItem, Morpheme, SentenceAnalysis, WordAnalysis};
use crate::domain::ports::Transport;
use crate::protocol::morphology::{
    DictionaryItemProto, MorphemeDataProto, SentenceAnalysisProto, SentenceAnalysisRequest,
    SentenceWordAnalysisProto, SingleAnalysisProto, ANALYZE_SENTENCE,
};
use crate::utils::error::Result;
use std::sync::Arc;

pub struct MorphologyAnalyzer<T: Transport + ?Sized> {
    invoker: RpcInvoker<T>,
    all_analyses: bool,
}

impl<T: Transport + ?Sized> MorphologyAnalyzer<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            invoker: RpcInvoker::new(transport),
            all_analyses: false,
        }
    }

    /// 除了最佳分析外，也要求服務回傳每個詞的所有候選分析
    pub fn with_all_analyses(mut self, enabled: bool) -> Self {
        self.all_analyses = enabled;
        self
    }

    /// 整段文字一次送出，不在本地切句；詞序與服務回傳一致
    pub async fn analyze_sentence(&self, sentence: &str) -> Result<SentenceAnalysis> {
        let request = SentenceAnalysisRequest {
            input: sentence,
            contain_all_analyses: self.all_analyses,
        };

        let response: SentenceAnalysisProto =
            self.invoker.invoke(&ANALYZE_SENTENCE, &request).await?;

        tracing::debug!("Analyzed {} words", response.results.len());
        Ok(response.into())
    }
}

impl From<SentenceAnalysisProto> for SentenceAnalysis {
    fn from(proto: SentenceAnalysisProto) -> Self {
        Self {
            input: proto.input,
            words: proto.results.into_iter().map(WordAnalysis::from).collect(),
        }
    }
}

impl From<SentenceWordAnalysisProto> for WordAnalysis {
    fn from(proto: SentenceWordAnalysisProto) -> Self {
        Self {
            token: proto.token,
            best: proto.best.map(Analysis::from),
            all: proto
                .all
                .map(|all| all.analyses.into_iter().map(Analysis::from).collect())
                .unwrap_or_default(),
        }
    }
}

impl From<SingleAnalysisProto> for Analysis {
    fn from(proto: SingleAnalysisProto) -> Self {
        Self {
            analysis: proto.analysis,
            pos: proto.pos,
            informal: proto.informal,
            runtime: proto.runtime,
            dictionary_item: proto.dictionary_item.map(DictionaryItem::from),
            lemmas: proto.lemmas,
            morphemes: proto.morphemes.into_iter().map(Morpheme::from).collect(),
        }
    }
}

impl From<DictionaryItemProto> for DictionaryItem {
    fn from(proto: DictionaryItemProto) -> Self {
        // proto3 沒有 null，空字串代表沒有次要詞性
        let secondary_pos = Some(proto.secondary_pos).filter(|pos| !pos.is_empty());
        Self {
            lemma: proto.lemma,
            primary_pos: proto.primary_pos,
            secondary_pos,
        }
    }
}

impl From<MorphemeDataProto> for Morpheme {
    fn from(proto: MorphemeDataProto) -> Self {
        Self {
            id: proto.morpheme,
            surface: proto.surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeTransport;
    use crate::utils::error::ClientError;

    fn kitap_response() -> serde_json::Value {
        serde_json::json!({
            "input": "Kitabı okudum. Güzeldi.",
            "results": [
                {
                    "token": "Kitabı",
                    "best": {
                        "analysis": "[kitap:Noun] kitab:Noun+A3sg+ı:Acc",
                        "pos": "Noun",
                        "dictionaryItem": {"lemma": "kitap", "primaryPos": "Noun"},
                        "lemmas": ["kitap"],
                        "morphemes": [
                            {"morpheme": "Noun", "surface": "kitab"},
                            {"morpheme": "A3sg", "surface": ""},
                            {"morpheme": "Acc", "surface": "ı"}
                        ]
                    }
                },
                {
                    "token": "okudum",
                    "best": {
                        "analysis": "[okumak:Verb] oku:Verb+du:Past+m:A1sg",
                        "pos": "Verb",
                        "dictionaryItem": {"lemma": "okumak", "primaryPos": "Verb"},
                        "lemmas": ["oku", "okumak"]
                    }
                },
                {"token": ".", "best": {"analysis": "[.:Punc] .:Punc", "pos": "Punc"}}
            ]
        })
    }

    #[tokio::test]
    async fn test_whole_text_sent_as_single_request() {
        let transport = Arc::new(FakeTransport::replying(kitap_response()));
        let analyzer = MorphologyAnalyzer::new(Arc::clone(&transport));

        let analysis = analyzer
            .analyze_sentence("Kitabı okudum. Güzeldi.")
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, ANALYZE_SENTENCE);
        assert_eq!(
            requests[0].1,
            serde_json::json!({"input": "Kitabı okudum. Güzeldi.", "containAllAnalyses": false})
        );

        // 回應只有三個詞，結果就是三個詞，不依輸入詞數調整
        assert_eq!(analysis.input, "Kitabı okudum. Güzeldi.");
        let tokens: Vec<&str> = analysis.words.iter().map(|w| w.token.as_str()).collect();
        assert_eq!(tokens, vec!["Kitabı", "okudum", "."]);
        assert_eq!(transport.released(), 1);
    }

    #[tokio::test]
    async fn test_analysis_fields_are_mapped() {
        let transport = Arc::new(FakeTransport::replying(kitap_response()));
        let analyzer = MorphologyAnalyzer::new(transport);

        let analysis = analyzer.analyze_sentence("Kitabı okudum.").await.unwrap();

        let best = analysis.words[0].best.as_ref().unwrap();
        assert_eq!(best.pos, "Noun");
        assert!(!best.informal);
        assert_eq!(best.lemmas, vec!["kitap"]);
        assert_eq!(
            best.dictionary_item,
            Some(DictionaryItem {
                lemma: "kitap".to_string(),
                primary_pos: "Noun".to_string(),
                secondary_pos: None,
            })
        );
        let surfaces: Vec<&str> = best.morphemes.iter().map(|m| m.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["kitab", "", "ı"]);
        assert!(analysis.words[0].all.is_empty());
        assert!(analysis.words[2].best.as_ref().unwrap().dictionary_item.is_none());
    }

    #[tokio::test]
    async fn test_all_analyses_requested_and_mapped() {
        let transport = Arc::new(FakeTransport::replying(serde_json::json!({
            "input": "yüz",
            "results": [{
                "token": "yüz",
                "best": {"analysis": "[yüz:Num,Card]", "pos": "Num"},
                "all": {"analyses": [
                    {"analysis": "[yüz:Num,Card]", "pos": "Num",
                     "dictionaryItem": {"lemma": "yüz", "primaryPos": "Num", "secondaryPos": "Card"}},
                    {"analysis": "[yüz:Noun]", "pos": "Noun"},
                    {"analysis": "[yüzmek:Verb]", "pos": "Verb"}
                ]}
            }]
        })));
        let analyzer = MorphologyAnalyzer::new(Arc::clone(&transport)).with_all_analyses(true);

        let analysis = analyzer.analyze_sentence("yüz").await.unwrap();

        assert_eq!(transport.requests()[0].1["containAllAnalyses"], true);
        let all = &analysis.words[0].all;
        assert_eq!(all.len(), 3);
        assert_eq!(
            all[0].dictionary_item.as_ref().unwrap().secondary_pos.as_deref(),
            Some("Card")
        );
        let pos: Vec<&str> = all.iter().map(|a| a.pos.as_str()).collect();
        assert_eq!(pos, vec!["Num", "Noun", "Verb"]);
    }

    #[tokio::test]
    async fn test_remote_error_releases_handle() {
        let transport = Arc::new(FakeTransport::responding(|method, _| {
            Err(ClientError::remote(method.to_string(), "status 500"))
        }));
        let analyzer = MorphologyAnalyzer::new(Arc::clone(&transport));

        let err = analyzer.analyze_sentence("Kitap").await.unwrap_err();

        assert!(matches!(err, ClientError::RemoteCall { .. }));
        assert_eq!(transport.acquired(), 1);
        assert_eq!(transport.released(), 1);
    }
}
