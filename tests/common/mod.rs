#![allow(dead_code)]

use async_trait::async_trait;
use enginectl::error::Result;
use enginectl::transport::{RequestPayload, ResponseBody, ResponseMeta, Transport};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub raw: Option<Vec<u8>>,
}

impl RecordedCall {
    pub fn json(&self) -> Value {
        let raw = self.raw.as_ref().expect("call carried no body");
        serde_json::from_slice(raw).expect("call body is JSON")
    }

    pub fn request_type(&self) -> String {
        self.json()["type"].as_str().unwrap_or_default().to_string()
    }
}

type Responder = Box<dyn Fn(&RecordedCall) -> Result<Vec<u8>> + Send + Sync>;

/// In-memory transport that records every call and answers through a
/// closure.
pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    responder: Responder,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Self::with_responder(|_| Ok(b"{}".to_vec()))
    }

    pub fn with_responder<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&RecordedCall) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> RecordedCall {
        self.calls().last().cloned().expect("no calls recorded")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Option<RequestPayload>,
    ) -> Result<(ResponseMeta, ResponseBody)> {
        let call = RecordedCall {
            method,
            path: path.to_string(),
            raw: payload.map(|p| p.as_bytes().to_vec()),
        };
        self.calls.lock().unwrap().push(call.clone());
        let body = (self.responder)(&call)?;
        let meta = ResponseMeta {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
        };
        Ok((meta, ResponseBody::from_bytes(body)))
    }
}
