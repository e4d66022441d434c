use crate::core::{ConfigProvider, Connection, Transport};
use crate::protocol::RpcMethod;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::endpoint_url;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tokio::net::TcpStream;
use url::Url;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

const MAX_ERROR_BODY_CHARS: usize = 200;

/// 以 HTTP/JSON 呼叫服務的連線來源。
///
/// 每次 `connect` 都會先確認端點可連線，再建立一個不保留閒置連線的
/// `reqwest::Client`；連線在 handle 釋放時隨 client 一起關閉。
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    base_url: Url,
    request_timeout: Duration,
    connect_timeout: Duration,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Result<Self> {
        let mut base_url = endpoint_url(endpoint).map_err(|reason| ClientError::InvalidConfigValue {
            field: "endpoint".to_string(),
            value: endpoint.to_string(),
            reason,
        })?;

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            endpoint: endpoint.to_string(),
            base_url,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(config.endpoint())?
            .with_timeouts(config.request_timeout(), config.connect_timeout()))
    }

    pub fn with_timeouts(mut self, request_timeout: Duration, connect_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn socket_address(&self) -> Result<String> {
        let host = self
            .base_url
            .host_str()
            .ok_or_else(|| ClientError::connection(&self.endpoint, "endpoint has no host"))?;
        let port = self
            .base_url
            .port_or_known_default()
            .ok_or_else(|| ClientError::connection(&self.endpoint, "endpoint has no port"))?;
        Ok(format!("{}:{}", host, port))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        let address = self.socket_address()?;

        // 只確認端點可連線，隨即關閉；實際請求的連線由 reqwest 另外建立
        match tokio::time::timeout(self.connect_timeout, TcpStream::connect(&address)).await {
            Ok(Ok(_probe)) => {}
            Ok(Err(e)) => return Err(ClientError::connection(&self.endpoint, e)),
            Err(_) => {
                return Err(ClientError::connection(
                    &self.endpoint,
                    format!("connect timed out after {:?}", self.connect_timeout),
                ))
            }
        }

        let client = Client::builder()
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ClientError::connection(&self.endpoint, e))?;

        Ok(Box::new(HttpConnection {
            endpoint: self.endpoint.clone(),
            base_url: self.base_url.clone(),
            client: Some(client),
        }))
    }
}

struct HttpConnection {
    endpoint: String,
    base_url: Url,
    client: Option<Client>,
}

impl HttpConnection {
    fn classify(&self, method: &RpcMethod, error: reqwest::Error) -> ClientError {
        if error.is_connect() {
            ClientError::connection(&self.endpoint, error)
        } else if error.is_timeout() {
            ClientError::remote(method.to_string(), format!("timed out: {}", error))
        } else {
            ClientError::remote(method.to_string(), error)
        }
    }
}

#[async_trait]
impl Connection for HttpConnection {
    async fn call(
        &mut self,
        method: &RpcMethod,
        payload: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| ClientError::remote(method.to_string(), "connection is closed"))?;

        let url = self
            .base_url
            .join(method.path().trim_start_matches('/'))
            .map_err(|e| ClientError::remote(method.to_string(), e))?;

        tracing::debug!("POST {}", url);
        let response = client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.classify(method, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.classify(method, e))?;

        if !status.is_success() {
            return Err(ClientError::remote(
                method.to_string(),
                describe_failure(status, &body),
            ));
        }

        // proto3 的空訊息可能以空 body 回傳
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Object(serde_json::Map::new()));
        }

        serde_json::from_str(&body).map_err(|e| {
            ClientError::remote(method.to_string(), format!("Response is not JSON: {}", e))
        })
    }

    fn close(&mut self) {
        if self.client.take().is_some() {
            tracing::debug!("Closed HTTP connection to {}", self.endpoint);
        }
    }
}

/// 轉碼閘道回傳的錯誤格式：`{"code": 3, "message": "..."}`
#[derive(Debug, Deserialize)]
struct RpcStatus {
    #[serde(default)]
    code: i32,
    #[serde(default)]
    message: String,
}

fn describe_failure(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<RpcStatus>(body) {
        Ok(rpc) if !rpc.message.is_empty() => {
            format!("HTTP {} (rpc code {}): {}", status.as_u16(), rpc.code, rpc.message)
        }
        _ if body.trim().is_empty() => format!("HTTP {}", status.as_u16()),
        _ => {
            let snippet: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            format!("HTTP {}: {}", status.as_u16(), snippet.trim())
        }
    }
}
