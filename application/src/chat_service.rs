use domain::{
    ChatCompletionRequest, ChatCompletionResponse, ChatTransport, ExchangeError,
    GenerationParams, Message, Persona,
};
use shared::telemetry::Telemetry;
use tracing::{debug, error};

/// One stateless request/response round trip per call.
///
/// Everything the exchange needs arrives through the constructor; nothing is
/// read from the environment here.
pub struct ChatService<T: ChatTransport> {
    transport: T,
    params: GenerationParams,
    persona: Persona,
}

impl<T: ChatTransport> ChatService<T> {
    pub fn new(transport: T, params: GenerationParams, persona: Persona) -> Self {
        Self {
            transport,
            params,
            persona,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Send the history and return the first choice's content, or the cause of
    /// failure.
    pub async fn exchange(&self, messages: &[Message]) -> Result<String, ExchangeError> {
        let telemetry = Telemetry::new();

        let request = ChatCompletionRequest::new(&self.params, messages);
        let body = serde_json::to_string(&request).map_err(ExchangeError::Encode)?;

        let response = self.transport.post_json(body).await?;
        debug!(
            status = response.status,
            elapsed_ms = telemetry.elapsed_ms() as u64,
            "chat completion returned"
        );

        if !response.is_ok() {
            debug!(body = %response.body, "non-success response body");
            return Err(ExchangeError::Status {
                status: response.status,
                reason: response.reason,
                body: response.body,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&response.body).map_err(ExchangeError::Decode)?;

        parsed
            .first_content()
            .map(str::to_owned)
            .ok_or(ExchangeError::EmptyChoices)
    }

    /// Like [`exchange`](Self::exchange) but never fails: errors are logged and
    /// become an empty reply, and an empty choice list becomes the persona's
    /// fallback text.
    pub async fn reply(&self, messages: &[Message]) -> String {
        match self.exchange(messages).await {
            Ok(content) => content,
            Err(ExchangeError::EmptyChoices) => self.persona.fallback_reply(),
            Err(err) => {
                error!("{err}");
                String::new()
            }
        }
    }
}
