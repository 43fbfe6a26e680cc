use async_trait::async_trait;
use domain::{ChatTransport, ExchangeError, Message, TransportResponse};
use std::sync::Mutex;

/// Replies `reply <n>` to the n-th request and keeps every body it was sent.
#[derive(Default)]
pub struct RecordingTransport {
    bodies: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_count(&self) -> usize {
        self.bodies.lock().unwrap().len()
    }

    /// Messages carried by each request, in send order.
    pub fn sent_histories(&self) -> Vec<Vec<Message>> {
        self.bodies
            .lock()
            .unwrap()
            .iter()
            .map(|body| {
                let value: serde_json::Value = serde_json::from_str(body).unwrap();
                serde_json::from_value(value["messages"].clone()).unwrap()
            })
            .collect()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn post_json(&self, body: String) -> Result<TransportResponse, ExchangeError> {
        let n = {
            let mut bodies = self.bodies.lock().unwrap();
            bodies.push(body);
            bodies.len()
        };
        let reply = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": format!("reply {n}")}}]
        });
        Ok(TransportResponse::new(200, reply.to_string()))
    }
}
