use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_login_user(role: &str) -> LoginUser {
    LoginUser {
        id: 42,
        user_account: Some("alice".to_owned()),
        user_name: Some("Alice".to_owned()),
        user_avatar: Some("https://example.com/a.png".to_owned()),
        user_profile: None,
        user_role: role.to_owned(),
        create_time: Some("2025-01-01 10:00:00".to_owned()),
        update_time: None,
    }
}

// =============================================================
// BaseResponse
// =============================================================

#[test]
fn base_response_success_yields_data() {
    let resp: BaseResponse<i64> = serde_json::from_str(r#"{"code":0,"data":7,"message":"ok"}"#).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.into_result().unwrap(), Some(7));
}

#[test]
fn base_response_success_without_data_is_none() {
    let resp: BaseResponse<LoginUser> = serde_json::from_str(r#"{"code":0,"data":null}"#).unwrap();
    assert_eq!(resp.into_result().unwrap(), None);
}

#[test]
fn base_response_error_code_becomes_business_error() {
    let resp: BaseResponse<LoginUser> =
        serde_json::from_str(r#"{"code":40100,"data":null,"message":"not logged in"}"#).unwrap();
    assert!(!resp.is_success());
    assert_eq!(
        resp.into_result().unwrap_err(),
        ApiError::Business { code: 40100, message: "not logged in".to_owned() }
    );
}

#[test]
fn business_error_user_message_prefers_server_text() {
    let err = ApiError::Business { code: 40000, message: "bad password".to_owned() };
    assert_eq!(err.user_message(), "bad password");
    assert_eq!(ApiError::Status(502).user_message(), "server responded with status 502");
}

// =============================================================
// LoginUser
// =============================================================

#[test]
fn login_user_parses_camel_case_with_string_id() {
    let json = r#"{
        "id": "1900000000000000001",
        "userAccount": "root",
        "userName": "Root",
        "userAvatar": null,
        "userProfile": "hi",
        "userRole": "admin",
        "createTime": "2025-01-01 10:00:00",
        "updateTime": "2025-01-02 10:00:00"
    }"#;
    let user: LoginUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, 1_900_000_000_000_000_001);
    assert_eq!(user.user_account.as_deref(), Some("root"));
    assert!(user.is_admin());
}

#[test]
fn login_user_tolerates_missing_optional_fields() {
    let user: LoginUser = serde_json::from_str(r#"{"id":3}"#).unwrap();
    assert_eq!(user.id, 3);
    assert!(user.user_name.is_none());
    assert_eq!(user.user_role, "");
    assert!(!user.is_admin());
}

#[test]
fn login_user_rejects_non_numeric_id() {
    assert!(serde_json::from_str::<LoginUser>(r#"{"id":"abc"}"#).is_err());
    assert!(serde_json::from_str::<LoginUser>(r#"{"id":true}"#).is_err());
}

#[test]
fn login_user_role_comparison_is_exact() {
    assert!(make_login_user("admin").is_admin());
    assert!(!make_login_user("Admin").is_admin());
    assert!(!make_login_user("user").is_admin());
}

#[test]
fn login_user_display_name_falls_back_to_account() {
    let mut user = make_login_user("user");
    assert_eq!(user.display_name(), "Alice");
    user.user_name = Some(String::new());
    assert_eq!(user.display_name(), "alice");
    user.user_account = None;
    assert_eq!(user.display_name(), "anonymous");
}

#[test]
fn login_user_serializes_camel_case() {
    let value = serde_json::to_value(make_login_user("user")).unwrap();
    assert_eq!(value["userAccount"], "alice");
    assert_eq!(value["userRole"], "user");
    assert_eq!(value["id"], 42);
}

// =============================================================
// Page / ChatHistoryVo
// =============================================================

#[test]
fn page_of_chat_history_parses() {
    let json = r#"{
        "records": [{
            "id": "9",
            "message": "build me a todo app",
            "messageType": "user",
            "appId": "5",
            "userId": 42,
            "createTime": "2025-01-01 10:00:00",
            "user": null
        }],
        "pageNumber": 1,
        "pageSize": 10,
        "totalPage": 1,
        "totalRow": 1
    }"#;
    let page: Page<ChatHistoryVo> = serde_json::from_str(json).unwrap();
    assert_eq!(page.total_row, 1);
    assert_eq!(page.records[0].app_id, 5);
    assert_eq!(page.records[0].message_type, "user");
}

#[test]
fn page_defaults_missing_counters() {
    let page: Page<UserVo> = serde_json::from_str("{}").unwrap();
    assert!(page.records.is_empty());
    assert_eq!(page.total_row, 0);
}

// =============================================================
// Requests
// =============================================================

#[test]
fn user_query_request_omits_unset_filters() {
    let req = UserQueryRequest { page_num: 1, page_size: 10, user_role: Some("admin".to_owned()), ..Default::default() };
    let value = serde_json::to_value(req).unwrap();
    assert_eq!(value, serde_json::json!({"pageNum": 1, "pageSize": 10, "userRole": "admin"}));
}

#[test]
fn register_request_uses_backend_field_names() {
    let req = UserRegisterRequest {
        user_account: "bob".to_owned(),
        user_password: "12345678".to_owned(),
        check_password: "12345678".to_owned(),
    };
    let value = serde_json::to_value(req).unwrap();
    assert_eq!(value["checkPassword"], "12345678");
    assert_eq!(value["userAccount"], "bob");
}
