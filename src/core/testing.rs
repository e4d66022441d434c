use crate::domain::ports::{Connection, Transport};
use crate::protocol::RpcMethod;
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Responder = dyn Fn(&RpcMethod, &Value) -> Result<Value> + Send + Sync;

#[derive(Default)]
struct Counters {
    acquired: AtomicUsize,
    released: AtomicUsize,
    requests: Mutex<Vec<(RpcMethod, Value)>>,
}

/// 記錄 acquire/release 次數與收到的請求的假連線來源
pub(crate) struct FakeTransport {
    counters: Arc<Counters>,
    responder: Arc<Responder>,
    refuse: bool,
}

impl FakeTransport {
    pub(crate) fn responding(
        responder: impl Fn(&RpcMethod, &Value) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            counters: Arc::new(Counters::default()),
            responder: Arc::new(responder),
            refuse: false,
        }
    }

    pub(crate) fn replying(response: Value) -> Self {
        Self::responding(move |_, _| Ok(response.clone()))
    }

    pub(crate) fn refusing() -> Self {
        let mut transport = Self::replying(Value::Null);
        transport.refuse = true;
        transport
    }

    pub(crate) fn acquired(&self) -> usize {
        self.counters.acquired.load(Ordering::SeqCst)
    }

    pub(crate) fn released(&self) -> usize {
        self.counters.released.load(Ordering::SeqCst)
    }

    pub(crate) fn requests(&self) -> Vec<(RpcMethod, Value)> {
        self.counters.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    fn endpoint(&self) -> &str {
        "fake:0"
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        if self.refuse {
            return Err(ClientError::connection(self.endpoint(), "connection refused"));
        }

        self.counters.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeConnection {
            counters: Arc::clone(&self.counters),
            responder: Arc::clone(&self.responder),
            closed: false,
        }))
    }
}

struct FakeConnection {
    counters: Arc<Counters>,
    responder: Arc<Responder>,
    closed: bool,
}

#[async_trait]
impl Connection for FakeConnection {
    async fn call(&mut self, method: &RpcMethod, payload: Value) -> Result<Value> {
        assert!(!self.closed, "call on a closed connection");
        let response = (self.responder)(method, &payload);
        self.counters.requests.lock().unwrap().push((*method, payload));
        response
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.counters.released.fetch_add(1, Ordering::SeqCst);
        }
    }
}
