//! API request and response models for the Storekeep backend

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Generic result envelope wrapping every backend response
///
/// `success == true` implies `data` is present; `success == false` implies
/// `message` carries a human-readable cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Build a local failure envelope (network errors never reach the server)
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The failure message, or a generic fallback
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Get the data, returning an error if the response was unsuccessful
    pub fn into_result(self) -> Result<T, ClientError> {
        if self.success {
            self.data.ok_or_else(|| {
                ClientError::api("Response indicated success but contained no data")
            })
        } else {
            Err(ClientError::api(
                self.message
                    .unwrap_or_else(|| "Unknown API error".to_string()),
            ))
        }
    }
}

/// Login request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// Login response payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginSession {
    pub access_token: String,
}

/// User record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl User {
    /// Display name used in confirmation prompts
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// User creation payload; the identifier is server-assigned
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// User update payload; an empty password means "unchanged"
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Product record; `category_name` is derived server-side from the foreign key
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    #[serde(default)]
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub category_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
}

/// Product category record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let envelope = Envelope {
            success: true,
            data: Some("payload".to_string()),
            message: None,
        };

        assert!(envelope.is_success());
        let result = envelope.into_result();
        assert_eq!(result.unwrap(), "payload");
    }

    #[test]
    fn test_envelope_failure() {
        let envelope: Envelope<String> = Envelope::failure("invalid credentials");

        assert!(!envelope.is_success());
        let result = envelope.into_result();
        match result.unwrap_err() {
            ClientError::Api(msg) => assert_eq!(msg, "invalid credentials"),
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_envelope_success_without_data_is_error() {
        let envelope: Envelope<String> = Envelope {
            success: true,
            data: None,
            message: None,
        };

        assert!(envelope.into_result().is_err());
    }

    #[test]
    fn test_envelope_wire_shape() {
        let json = r#"{"success":true,"data":{"accessToken":"tok123"},"message":null}"#;
        let envelope: Envelope<LoginSession> = serde_json::from_str(json).unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap().access_token, "tok123");
    }

    #[test]
    fn test_user_wire_shape_is_camel_case() {
        let json = r#"{"id":"u-1","firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","phone":"+44 1234567"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_update_user_omits_empty_password() {
        let update = UpdateUser {
            id: "u-1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "123456789".to_string(),
            password: None,
        };

        let json = serde_json::to_string(&update).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("firstName"));
    }
}
