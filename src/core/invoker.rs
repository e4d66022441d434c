use crate::core::handle::TransportHandle;
use crate::domain::ports::Transport;
use crate::protocol::RpcMethod;
use crate::utils::error::{ClientError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// 四個服務共用的呼叫流程：取得連線 → 送出請求 → 釋放連線 → 解碼回應
pub struct RpcInvoker<T: Transport + ?Sized> {
    transport: Arc<T>,
}

impl<T: Transport + ?Sized> Clone for RpcInvoker<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport + ?Sized> RpcInvoker<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    pub async fn invoke<Req, Resp>(&self, method: &RpcMethod, request: &Req) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let handle = TransportHandle::acquire(self.transport.as_ref()).await?;
        let payload = serde_json::to_value(request)?;

        tracing::debug!("Calling {} on {}", method, handle.endpoint());
        let started = Instant::now();

        let raw = handle.call(method, payload).await.inspect_err(|e| {
            tracing::warn!("{} failed after {:?}: {}", method, started.elapsed(), e);
        })?;

        tracing::debug!("{} completed in {:?}", method, started.elapsed());

        serde_json::from_value(raw).map_err(|e| {
            ClientError::remote(method.to_string(), format!("Undecodable response: {}", e))
        })
    }
}
