use serde::{Deserialize, Serialize};

/// `{ "dados": ... }` wrapper used by the plan and template endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub dados: T,
}

/// Accepts a payload either wrapped in `dados` or bare. Endpoints are not
/// consistent about it, so this is only used where the shape is not known.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MaybeEnveloped<T> {
    Wrapped(Envelope<T>),
    Bare(T),
}

impl<T> MaybeEnveloped<T> {
    pub fn into_inner(self) -> T {
        match self {
            MaybeEnveloped::Wrapped(envelope) => envelope.dados,
            MaybeEnveloped::Bare(value) => value,
        }
    }
}

/// Error body returned alongside non-2xx statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
