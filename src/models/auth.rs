use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of POST /refresh-token (cookie-authenticated silent re-auth).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Minimal shape every mutation endpoint responds with.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_uses_camel_case_token() {
        let json = r#"{"accessToken":"abc123","user":{"id":"u1","email":"jo@example.com","role":"admin"},"message":"Welcome back"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "abc123");
        assert_eq!(response.user.role, Role::Admin);
        assert_eq!(response.message.as_deref(), Some("Welcome back"));
    }

    #[test]
    fn user_accepts_mongo_style_id() {
        let json = r#"{"_id":"64fe","email":"a@b.c","role":"user"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "64fe");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn message_response_tolerates_missing_message() {
        let response: MessageResponse = serde_json::from_str("{}").unwrap();
        assert!(response.message.is_none());
    }
}
