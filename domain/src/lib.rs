pub mod error;
pub mod models;
pub mod session;
pub mod transport;

pub use error::ExchangeError;
pub use models::{ChatCompletionRequest, ChatCompletionResponse, GenerationParams};
pub use session::{Conversation, Message, Persona, Role};
pub use transport::{ChatTransport, TransportResponse};
