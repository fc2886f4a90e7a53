use super::*;

fn sample_user() -> User {
    User {
        id: "user-abc123def".to_owned(),
        name: "sam".to_owned(),
        email: "sam@example.com".to_owned(),
        profile_picture: "https://api.dicebear.com/7.x/avataaars/svg?seed=sam%40example.com".to_owned(),
    }
}

// =============================================================
// User record
// =============================================================

#[test]
fn user_serializes_profile_picture_as_camel_case() {
    let value = serde_json::to_value(sample_user()).unwrap();
    assert_eq!(value["profilePicture"], sample_user().profile_picture);
    assert!(value.get("profile_picture").is_none());
}

#[test]
fn user_parses_record_without_avatar() {
    let raw = r#"{"id":"user-1","name":"Ana","email":"ana@example.com"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.profile_picture, "");
    assert!(user.is_well_formed());
}

#[test]
fn user_with_blank_id_is_not_well_formed() {
    let user = User { id: "  ".to_owned(), ..sample_user() };
    assert!(!user.is_well_formed());
}

#[test]
fn user_with_bad_email_is_not_well_formed() {
    let user = User { email: "nope".to_owned(), ..sample_user() };
    assert!(!user.is_well_formed());
}

// =============================================================
// Chat DTOs
// =============================================================

#[test]
fn chat_request_omits_missing_thread_id() {
    let req = ChatRequest { message: "hi".to_owned(), thread_id: None };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "message": "hi" }));
}

#[test]
fn chat_response_parses_response_field() {
    let resp: ChatResponse = serde_json::from_str(r#"{"response":"hello there"}"#).unwrap();
    assert_eq!(resp.response, "hello there");
}
