//! Property-based tests for the public user view and request types
//!
//! Uses proptest to generate random inputs and verify that credentials
//! never leak into serialized views or debug output.

use authgate::backend::auth::User;
use authgate::shared::{LoginRequest, SignupRequest};
use chrono::Utc;
use proptest::prelude::*;
use uuid::Uuid;

fn user(email: String, password_hash: String) -> User {
    User {
        id: Uuid::new_v4(),
        email,
        password_hash,
        created_at: Utc::now(),
    }
}

proptest! {
    #[test]
    fn test_view_has_only_id_and_email(
        email in "[a-z0-9]{1,16}@[a-z]{1,10}\\.[a-z]{2,4}",
        hash in "\\$2b\\$04\\$[A-Za-z0-9./]{53}",
    ) {
        let user = user(email.clone(), hash.clone());
        let json = serde_json::to_value(user.view()).unwrap();
        let object = json.as_object().unwrap();

        prop_assert_eq!(object.len(), 2);
        prop_assert_eq!(object.get("email").and_then(|v| v.as_str()), Some(email.as_str()));
        prop_assert!(!json.to_string().contains(&hash));
    }

    #[test]
    fn test_user_debug_omits_hash(
        email in "[a-z0-9]{1,16}@[a-z]{1,10}\\.[a-z]{2,4}",
        hash in "\\$2b\\$04\\$[A-Za-z0-9./]{53}",
    ) {
        let user = user(email, hash.clone());
        let debug = format!("{:?}", user);
        prop_assert!(!debug.contains(&hash));
    }

    #[test]
    fn test_request_debug_redacts_password(
        email in "[a-z0-9]{1,16}@[a-z]{1,10}\\.[a-z]{2,4}",
        password in "[A-Za-z0-9]{12,32}",
    ) {
        let signup = SignupRequest::new(email.clone(), password.clone());
        let login = LoginRequest::new(email, password.clone());

        let signup_debug = format!("{:?}", signup);
        let login_debug = format!("{:?}", login);
        prop_assert!(!signup_debug.contains(&password));
        prop_assert!(!login_debug.contains(&password));
    }
}
