//! Response models for the presence analytics API.

use serde::{Deserialize, Serialize};

/// A directory entry from `/api/v1/users`.
///
/// Identity is the numeric `id`; it is also the value the selection
/// dropdown submits and the path segment of every per-user endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Profile payload from `/api/v1/users/{id}`, fetched separately from the
/// directory entry. Only the avatar image URL is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_directory_deserializes_in_order() {
        let users: Vec<User> = serde_json::from_str(
            r#"[{"id": 11, "name": "Maciej D."}, {"id": 10, "name": "Adam P."}]"#,
        )
        .unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 11);
        assert_eq!(users[0].name, "Maciej D.");
        // Server order is preserved, never re-sorted client-side.
        assert_eq!(users[1].id, 10);
    }

    #[test]
    fn test_profile_ignores_extra_fields() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"name": "Adam P.", "image": "https://intranet.example.com/api/images/users/10"}"#,
        )
        .unwrap();
        assert_eq!(
            profile.image,
            "https://intranet.example.com/api/images/users/10"
        );
    }
}
