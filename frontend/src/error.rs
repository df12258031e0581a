use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Request to content source failed: {0}")]
    Network(String),

    #[error("Content source returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed book rows: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ContentError {
    fn from(err: gloo_net::Error) -> Self {
        ContentError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Decode(err.to_string())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    #[error("Media element is not mounted")]
    MissingElement,

    #[error("Playback was rejected: {0}")]
    Rejected(String),
}

impl From<JsValue> for PlaybackError {
    fn from(value: JsValue) -> Self {
        let reason = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        PlaybackError::Rejected(reason)
    }
}
