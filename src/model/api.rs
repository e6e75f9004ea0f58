use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Plain acknowledgement returned by the auth API, e.g. `{"response": "OK"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseDto {
    pub response: String,
}

impl ResponseDto {
    pub fn is_ok(&self) -> bool {
        self.response == "OK"
    }
}
