//! End-to-end issuance and verification flows against an in-memory store

use card_server::cards::verify::{MSG_INVALID_SIGNATURE, MSG_MALFORMED, MSG_REVOKED};
use card_server::{AppError, DbService, EmployeeRepository, RepoError, card_tag, issue_card, verify_card};
use shared::{CardToken, EmployeeCreate, LIFETIME};

const SECRET: &str = "PJ_TEST_SECRET";

async fn setup() -> EmployeeRepository {
    let db = DbService::open_in_memory().await.unwrap();
    EmployeeRepository::new(db.pool)
}

fn asha() -> EmployeeCreate {
    EmployeeCreate {
        name: "Asha Rao".to_string(),
        ref_id: "EMP-001".to_string(),
        gender: "F".to_string(),
        purpose: "Staff".to_string(),
        expiry: None,
        is_lifetime: Some(true),
    }
}

#[tokio::test]
async fn issue_then_verify_round_trip() {
    let repo = setup().await;
    let employee = issue_card(asha(), SECRET, &repo).await.unwrap();

    assert_eq!(employee.signature.len(), 15);
    assert!(employee.signature.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(employee.expiry, None);
    assert!(employee.is_lifetime);
    assert!(employee.valid);
    assert!(employee.id > 0);

    let token = CardToken::for_employee(&employee);
    assert_eq!(token.expiry, LIFETIME);

    let result = verify_card(&token.encode(), SECRET, &repo).await;
    assert!(result.valid);
    let echoed = result.employee.unwrap();
    assert_eq!(echoed.ref_id, "EMP-001");
    assert_eq!(echoed.id, employee.id);
}

#[tokio::test]
async fn dated_card_round_trip() {
    let repo = setup().await;
    let payload = EmployeeCreate {
        expiry: Some("2030-01-01".to_string()),
        is_lifetime: None,
        ..asha()
    };
    let employee = issue_card(payload, SECRET, &repo).await.unwrap();
    assert!(!employee.is_lifetime);
    assert!(employee.expiry.is_some());

    let token = CardToken::for_employee(&employee).encode();
    let result = verify_card(&token, SECRET, &repo).await;
    assert!(result.valid);
    assert_eq!(result.employee.unwrap().expiry, employee.expiry);
}

#[tokio::test]
async fn tampered_signature_is_rejected() {
    let repo = setup().await;
    let employee = issue_card(asha(), SECRET, &repo).await.unwrap();

    let mut token = CardToken::for_employee(&employee);
    token.signature = "0000000000000000".to_string();

    let result = verify_card(&token.encode(), SECRET, &repo).await;
    assert!(!result.valid);
    assert_eq!(result.message.as_deref(), Some(MSG_INVALID_SIGNATURE));
    assert!(result.employee.is_none());
}

#[tokio::test]
async fn tampered_name_invalidates_the_tag() {
    let repo = setup().await;
    let employee = issue_card(asha(), SECRET, &repo).await.unwrap();

    let mut token = CardToken::for_employee(&employee);
    token.name = "Someone Else".to_string();

    let result = verify_card(&token.encode(), SECRET, &repo).await;
    assert!(!result.valid);
    assert_eq!(result.message.as_deref(), Some(MSG_INVALID_SIGNATURE));
}

#[tokio::test]
async fn malformed_tokens_are_rejected() {
    let repo = setup().await;

    for garbage in ["not base64 at all!!!", "aGVsbG8gd29ybGQ=", ""] {
        let result = verify_card(garbage, SECRET, &repo).await;
        assert!(!result.valid, "accepted: {garbage:?}");
        assert_eq!(result.message.as_deref(), Some(MSG_MALFORMED));
    }
}

#[tokio::test]
async fn unknown_reference_falls_back_to_token_fields() {
    let repo = setup().await;

    // Never issued, but the tag is computed with the right secret
    let token = CardToken {
        name: "Ghost Worker".to_string(),
        ref_id: "EMP-404".to_string(),
        gender: "M".to_string(),
        purpose: "Contractor".to_string(),
        expiry: LIFETIME.to_string(),
        signature: card_tag("Ghost Worker", "EMP-404", SECRET),
    };

    let result = verify_card(&token.encode(), SECRET, &repo).await;
    assert!(result.valid);
    let synthesized = result.employee.unwrap();
    assert_eq!(synthesized.id, 0);
    assert_eq!(synthesized.ref_id, "EMP-404");
    assert!(synthesized.is_lifetime);
    assert!(synthesized.valid);
}

#[tokio::test]
async fn stored_record_wins_over_token_fields() {
    let repo = setup().await;
    let employee = issue_card(asha(), SECRET, &repo).await.unwrap();

    // Same name/ref (so the tag still checks out) but a doctored purpose
    let mut token = CardToken::for_employee(&employee);
    token.purpose = "Director".to_string();

    let result = verify_card(&token.encode(), SECRET, &repo).await;
    assert!(result.valid);
    assert_eq!(result.employee.unwrap().purpose, "Staff");
}

#[tokio::test]
async fn revoked_card_fails_verification() {
    let repo = setup().await;
    let employee = issue_card(asha(), SECRET, &repo).await.unwrap();
    let token = CardToken::for_employee(&employee).encode();

    let revoked = repo.set_valid("EMP-001", false).await.unwrap();
    assert!(!revoked.valid);

    let result = verify_card(&token, SECRET, &repo).await;
    assert!(!result.valid);
    assert_eq!(result.message.as_deref(), Some(MSG_REVOKED));
}

#[tokio::test]
async fn duplicate_reference_is_rejected() {
    let repo = setup().await;
    issue_card(asha(), SECRET, &repo).await.unwrap();

    let second = EmployeeCreate {
        name: "Another Person".to_string(),
        ..asha()
    };
    let err = issue_card(second, SECRET, &repo).await.unwrap_err();
    assert!(matches!(err, AppError::Duplicate(_)), "got: {err:?}");

    // The losing create leaves no record behind
    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Asha Rao");
}

#[tokio::test]
async fn revoking_unknown_reference_is_not_found() {
    let repo = setup().await;
    let err = repo.set_valid("EMP-404", false).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn find_by_ref_miss_is_none() {
    let repo = setup().await;
    assert!(repo.find_by_ref("EMP-404").await.unwrap().is_none());
}
