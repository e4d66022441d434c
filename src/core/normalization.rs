use crate::core::edit_score::score;
use crate::core::invoker::RpcInvoker;
use crate::domain::model::NormalizationResult;
use crate::domain::ports::Transport;
use crate::protocol::normalization::{NormalizationRequest, NormalizationResponse, NORMALIZE};
use crate::utils::error::{ClientError, Result};
use std::sync::Arc;

pub struct Normalizer<T: Transport + ?Sized> {
    invoker: RpcInvoker<T>,
}

impl<T: Transport + ?Sized> Normalizer<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            invoker: RpcInvoker::new(transport),
        }
    }

    /// 正規化文字，並在本地計算與原文的編輯距離。
    ///
    /// 空字串無法計算百分比，在連線前就回傳 `ClientError::Metric`。
    pub async fn normalize(&self, text: &str) -> Result<NormalizationResult> {
        if text.is_empty() {
            return Err(ClientError::Metric {
                message: "cannot normalize empty text".to_string(),
            });
        }

        let response: NormalizationResponse = self
            .invoker
            .invoke(&NORMALIZE, &NormalizationRequest { input: text })
            .await?;

        if !response.error.is_empty() {
            tracing::warn!("Normalization rejected by service: {}", response.error);
            return Err(ClientError::remote(NORMALIZE.to_string(), response.error));
        }

        let edit = score(text, &response.normalized_input)?;

        Ok(NormalizationResult {
            original: text.to_string(),
            normalized: response.normalized_input,
            distance: edit.distance,
            percentage: edit.percentage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeTransport;

    #[tokio::test]
    async fn test_normalize_scores_locally() {
        let transport = Arc::new(FakeTransport::replying(serde_json::json!({
            "normalizedInput": "bir şey yapmadım"
        })));
        let normalizer = Normalizer::new(Arc::clone(&transport));

        let result = normalizer.normalize("bişey yapmadım").await.unwrap();

        assert_eq!(
            result,
            NormalizationResult {
                original: "bişey yapmadım".to_string(),
                normalized: "bir şey yapmadım".to_string(),
                distance: 2,
                // 2 * 100 / 14
                percentage: 14,
            }
        );
        assert_eq!(transport.requests()[0].1, serde_json::json!({"input": "bişey yapmadım"}));
        assert_eq!(transport.released(), 1);
    }

    #[tokio::test]
    async fn test_unchanged_text_scores_zero() {
        let transport = Arc::new(FakeTransport::responding(|_, payload| {
            Ok(serde_json::json!({ "normalizedInput": payload["input"] }))
        }));
        let normalizer = Normalizer::new(transport);

        let result = normalizer.normalize("kitten").await.unwrap();

        assert_eq!(result.normalized, "kitten");
        assert_eq!((result.distance, result.percentage), (0, 0));
    }

    #[tokio::test]
    async fn test_service_error_field_is_remote_error() {
        let transport = Arc::new(FakeTransport::replying(serde_json::json!({
            "error": "Normalization model is not loaded"
        })));
        let normalizer = Normalizer::new(Arc::clone(&transport));

        let err = normalizer.normalize("bişey").await.unwrap_err();

        match err {
            ClientError::RemoteCall { method, message } => {
                assert_eq!(method, NORMALIZE.to_string());
                assert_eq!(message, "Normalization model is not loaded");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(transport.acquired(), 1);
        assert_eq!(transport.released(), 1);
    }

    #[tokio::test]
    async fn test_empty_text_fails_before_connecting() {
        let transport = Arc::new(FakeTransport::replying(serde_json::json!({})));
        let normalizer = Normalizer::new(Arc::clone(&transport));

        let err = normalizer.normalize("").await.unwrap_err();

        assert!(matches!(err, ClientError::Metric { .. }));
        assert_eq!(transport.acquired(), 0);
        assert_eq!(transport.released(), 0);
    }
}
