//! # Session user model
//!
//! [`SessionUser`] is the only entity with a lifecycle in AgriFuture. It is
//! fabricated on the client when someone logs in or registers, mirrored to the
//! platform key/value store as JSON, and removed again on logout:
//!
//! ```json
//! {"id":"1","name":"Demo Farmer","email":"a@b.c","points":120,"role":"farmer"}
//! ```
//!
//! No field is validated against a backend. The record is either present or
//! absent; there are no other invariants.

use serde::{Deserialize, Serialize};

/// Identifier every fabricated record carries.
pub const LOCAL_USER_ID: &str = "1";

/// Display name given to users who log in without registering first.
pub const DEMO_NAME: &str = "Demo Farmer";

/// Points granted to a demo login.
pub const DEMO_POINTS: u32 = 120;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Farmer,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Farmer => "Farmer",
        }
    }
}

/// The locally stored "logged-in user".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub points: u32,
    pub role: Role,
}

impl SessionUser {
    /// Record produced by a successful login.
    pub fn demo(email: &str) -> Self {
        Self {
            id: LOCAL_USER_ID.to_string(),
            name: DEMO_NAME.to_string(),
            email: email.to_string(),
            points: DEMO_POINTS,
            role: Role::Farmer,
        }
    }

    /// Record produced by a successful registration. New accounts start at zero points.
    pub fn registered(name: &str, email: &str) -> Self {
        Self {
            id: LOCAL_USER_ID.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            points: 0,
            role: Role::Farmer,
        }
    }

    /// First name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_layout() {
        let user = SessionUser::demo("farmer@example.com");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Demo Farmer",
                "email": "farmer@example.com",
                "points": 120,
                "role": "farmer"
            })
        );
    }

    #[test]
    fn test_first_name() {
        let user = SessionUser::registered("Asha Patel", "asha@example.com");
        assert_eq!(user.first_name(), "Asha");
        assert_eq!(user.points, 0);
    }
}
