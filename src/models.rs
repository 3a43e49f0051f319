use serde::{Deserialize, Serialize};

/// Success envelope shared by every endpoint
///
/// `{"success": true, "message": "...", "result": ...}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(result: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            result: Some(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_serialization() {
        let response = ApiResponse::ok("token-value".to_string(), "User signed in");
        let json = serde_json::to_value(&response).expect("Failed to serialize ApiResponse");

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "User signed in");
        assert_eq!(json["result"], "token-value");
    }
}
