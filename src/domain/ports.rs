use crate::protocol::RpcMethod;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 單次呼叫使用的連線；用完即關閉，不可重用
#[async_trait]
pub trait Connection: Send {
    async fn call(&mut self, method: &RpcMethod, payload: serde_json::Value)
        -> Result<serde_json::Value>;

    /// 必須可重複呼叫而不出錯；`TransportHandle` 只會呼叫一次
    fn close(&mut self);
}

/// 連線來源。每次 `connect` 都必須交出一條全新、可用的連線。
#[async_trait]
pub trait Transport: Send + Sync {
    fn endpoint(&self) -> &str;

    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn connect_timeout(&self) -> Duration;
}
