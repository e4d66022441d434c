use crate::core::invoker::RpcInvoker;
use crate::domain::ports::Transport;
use crate::protocol::preprocessing::{
    SentenceExtractionRequest, SentenceExtractionResponse, EXTRACT_SENTENCES,
};
use crate::utils::error::Result;
use std::sync::Arc;

pub struct SentenceSegmenter<T: Transport + ?Sized> {
    invoker: RpcInvoker<T>,
}

impl<T: Transport + ?Sized> SentenceSegmenter<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            invoker: RpcInvoker::new(transport),
        }
    }

    /// 把文件切成句子，順序與服務回傳一致。
    /// `do_not_split_in_double_quotes` 為 true 時，雙引號內不會產生句界。
    pub async fn extract_sentences(
        &self,
        document: &str,
        do_not_split_in_double_quotes: bool,
    ) -> Result<Vec<String>> {
        let request = SentenceExtractionRequest {
            document,
            do_not_split_in_double_quotes,
        };

        let response: SentenceExtractionResponse =
            self.invoker.invoke(&EXTRACT_SENTENCES, &request).await?;

        tracing::debug!("Extracted {} sentences", response.sentences.len());
        Ok(response.sentences)
    }
}
