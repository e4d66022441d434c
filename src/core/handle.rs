use crate::domain::ports::{Connection, Transport};
use crate::protocol::RpcMethod;
use crate::utils::error::{ClientError, Result};

/// 單次呼叫的連線憑證。
///
/// `call` 會消耗 handle，因此一個 handle 最多只能發出一次請求；
/// 連線在 `Drop` 時關閉，成功、失敗、提早返回或 future 被丟棄都一樣。
pub struct TransportHandle {
    endpoint: String,
    connection: Option<Box<dyn Connection>>,
}

impl TransportHandle {
    pub async fn acquire<T: Transport + ?Sized>(transport: &T) -> Result<Self> {
        tracing::debug!("Acquiring transport handle for {}", transport.endpoint());
        let connection = transport.connect().await?;

        Ok(Self {
            endpoint: transport.endpoint().to_string(),
            connection: Some(connection),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn call(
        mut self,
        method: &RpcMethod,
        payload: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let connection = self.connection.as_mut().ok_or_else(|| {
            ClientError::remote(method.to_string(), "transport handle already released")
        })?;

        let result = connection.call(method, payload).await;
        self.release();
        result
    }

    pub fn release(mut self) {
        self.close();
    }

    fn close(&mut self) {
        if let Some(mut connection) = self.connection.take() {
            connection.close();
            tracing::debug!("Released transport handle for {}", self.endpoint);
        }
    }
}

impl Drop for TransportHandle {
    fn drop(&mut self) {
        self.close();
    }
}
