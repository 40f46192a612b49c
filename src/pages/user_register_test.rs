use super::*;

#[test]
fn register_request_builds_trimmed_request() {
    let req = register_request(" carol ", "password1", "password1").unwrap();
    assert_eq!(req.user_account, "carol");
    assert_eq!(req.check_password, "password1");
}

#[test]
fn register_request_rejects_mismatched_passwords() {
    assert_eq!(register_request("carol", "password1", "password2"), Err("Passwords do not match."));
}

#[test]
fn register_request_requires_every_field() {
    assert_eq!(register_request("carol", "password1", ""), Err("Fill in every field."));
    assert_eq!(register_request("", "password1", "password1"), Err("Fill in every field."));
}

#[test]
fn register_request_enforces_minimum_lengths() {
    assert_eq!(register_request("cat", "password1", "password1"), Err("Account must be at least 4 characters."));
    assert_eq!(register_request("carol", "pw", "pw"), Err("Password must be at least 8 characters."));
}
