//! End-to-end: keystrokes through the mask, blur through the controller,
//! the real HTTP transport underneath.

use leadcap_capture::{ApiBackend, CaptureSession, CommitOutcome};
use leadcap_mask::{MaskKind, MaskedValue};
use leadcap_transport::{ClientConfig, LeadApi, MemoryTokenStore, TransportClient};
use leadcap_types::LeadId;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_against(server: &MockServer) -> CaptureSession {
    let store = Arc::new(MemoryTokenStore::new());
    let client =
        Arc::new(TransportClient::new(ClientConfig::new(server.uri()), store).unwrap());
    CaptureSession::new(Arc::new(ApiBackend::new(LeadApi::new(client))))
}

#[tokio::test]
async fn phone_field_from_keystrokes_to_acknowledged_lead() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/leads/partial"))
        .and(body_json(json!({
            "data": {"telefone": "11999998888"},
            "partial_lead_id": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lead_id": "L1"})))
        .expect(1)
        .mount(&server)
        .await;

    // The user types the number digit by digit into a masked control.
    let mut telefone = MaskedValue::new(MaskKind::Phone);
    for digit in "11999998888".chars() {
        let typed = format!("{}{}", telefone.display(), digit);
        telefone.set_display(&typed);
    }
    assert_eq!(telefone.display(), "(11) 99999-8888");
    assert_eq!(telefone.raw(), "11999998888");

    // On blur, the raw value is committed.
    let session = session_against(&server);
    let outcome = session.commit_field("telefone", telefone.raw()).await;

    assert_eq!(outcome, CommitOutcome::Saved);
    assert_eq!(session.lead_id().await, Some(LeadId::new("L1")));
}

#[tokio::test]
async fn second_step_folds_into_the_same_lead() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/leads/partial"))
        .and(body_json(json!({
            "data": {"whatsapp": "5511999998888"},
            "partial_lead_id": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lead_id": "L7"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/leads/partial"))
        .and(body_json(json!({
            "data": {"whatsapp": "5511999998888", "nome": "Ana"},
            "partial_lead_id": "L7"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lead_id": "L7"})))
        .expect(1)
        .mount(&server)
        .await;

    let whatsapp = MaskedValue::from_raw("11999998888", MaskKind::Whatsapp);
    assert_eq!(whatsapp.display(), "+55 (11) 99999-8888");

    let session = session_against(&server);
    assert_eq!(
        session.commit_field("whatsapp", whatsapp.raw()).await,
        CommitOutcome::Saved
    );
    assert_eq!(
        session.commit_field("nome", "Ana").await,
        CommitOutcome::Saved
    );
    assert_eq!(session.lead_id().await, Some(LeadId::new("L7")));
}

#[tokio::test]
async fn backend_outage_never_reaches_the_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/leads/partial"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_string("<html><body>Bad Gateway</body></html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let session = session_against(&server);
    // Classified and swallowed; the session stays usable.
    assert_eq!(
        session.commit_field("nome", "Ana").await,
        CommitOutcome::SaveFailed
    );
    assert!(session.saved_fields().await.is_empty());
    assert_eq!(session.lead_id().await, None);
}
