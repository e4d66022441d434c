use crate::core::invoker::RpcInvoker;
use crate::domain::model::LanguageScore;
use crate::domain::ports::Transport;
use crate::protocol::langid::{
    IdResult, LanguageIdRequest, LanguageIdScoresResponse, GET_SCORES_FAST_TR, GET_SCORES_TR,
};
use crate::utils::error::Result;
use std::sync::Arc;

pub const DEFAULT_MAX_SAMPLE_COUNT: u32 = 1000;

pub struct LanguageIdentifier<T: Transport + ?Sized> {
    invoker: RpcInvoker<T>,
    fast: bool,
}

impl<T: Transport + ?Sized> LanguageIdentifier<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            invoker: RpcInvoker::new(transport),
            fast: false,
        }
    }

    /// 改用較快但較不精確的評分方法
    pub fn with_fast_scoring(mut self, enabled: bool) -> Self {
        self.fast = enabled;
        self
    }

    /// 候選語言與分數，順序與服務回傳一致（信心最高者在前）。
    /// 一律要求分數，並限定在相近語言群組內比較。
    pub async fn identify(&self, text: &str, max_sample_count: u32) -> Result<Vec<LanguageScore>> {
        let request = LanguageIdRequest {
            input: text,
            max_sample_count,
            include_scores: true,
        };
        // 群組限制由方法決定，不是請求欄位
        let method = if self.fast {
            GET_SCORES_FAST_TR
        } else {
            GET_SCORES_TR
        };

        let response: LanguageIdScoresResponse = self.invoker.invoke(&method, &request).await?;

        Ok(response
            .id_result
            .into_iter()
            .map(LanguageScore::from)
            .collect())
    }
}

impl From<IdResult> for LanguageScore {
    fn from(result: IdResult) -> Self {
        Self {
            language: result.id,
            score: result.score,
        }
    }
}
