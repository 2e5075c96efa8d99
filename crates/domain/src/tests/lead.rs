// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Assignee, Lead, LeadStage, LeadStatus, MessageRole};
use serde_json::{Value, json};

fn create_backend_lead_json() -> Value {
    json!({
        "id": "65f0c1",
        "name": "Riya Sharma",
        "leadPhoneNumber": "+919800000001",
        "businessPhoneNumber": "+919700000000",
        "neetScore": 612,
        "numberOfEnquiry": 2,
        "status": "active",
        "stage": "follow_up",
        "tags": ["Interested", "Qualified"],
        "assignedTo": { "id": "67ced4c72fe58c7016c27423", "name": "Arpit" },
        "city": "Pune",
        "state": "Maharashtra",
        "createdAt": "2025-03-10T09:12:33.123Z",
        "chatHistory": [
            {
                "messageId": "m1",
                "content": "Hello",
                "role": "lead",
                "timestamp": "2025-03-10T09:13:00Z",
                "status": "read"
            }
        ],
        "whatsappOptIn": true
    })
}

#[test]
fn test_lead_deserializes_backend_record() {
    let lead: Lead = serde_json::from_value(create_backend_lead_json()).unwrap();

    assert_eq!(lead.id, "65f0c1");
    assert_eq!(lead.neet_score, Some(612));
    assert_eq!(lead.status, LeadStatus::Active);
    assert_eq!(lead.stage, Some(LeadStage::FollowUp));
    assert_eq!(lead.tags, vec!["Interested", "Qualified"]);
    assert_eq!(
        lead.assigned_to,
        Some(Assignee::new("67ced4c72fe58c7016c27423", "Arpit"))
    );
    assert!(lead.created_at.is_some());
    assert_eq!(lead.message_count, 0);
    let history = lead.chat_history.as_ref().unwrap();
    assert_eq!(history[0].role, MessageRole::Lead);
}

#[test]
fn test_lead_preserves_unmodelled_fields_on_write_back() {
    let lead: Lead = serde_json::from_value(create_backend_lead_json()).unwrap();
    assert_eq!(lead.extra.get("whatsappOptIn"), Some(&Value::Bool(true)));

    let written: Value = serde_json::to_value(&lead).unwrap();
    assert_eq!(written["whatsappOptIn"], Value::Bool(true));
    assert_eq!(written["leadPhoneNumber"], "+919800000001");
    assert_eq!(written["stage"], "follow_up");
}

#[test]
fn test_lead_accepts_null_assignee_and_score() {
    let lead: Lead = serde_json::from_value(json!({
        "id": "1",
        "leadPhoneNumber": "+91",
        "businessPhoneNumber": "+92",
        "neetScore": null,
        "assignedTo": null
    }))
    .unwrap();

    assert_eq!(lead.neet_score, None);
    assert_eq!(lead.assigned_to, None);
    assert_eq!(lead.neet_status_label(), "Without Score");
}

#[test]
fn test_display_location_joins_city_and_state() {
    let mut lead: Lead = Lead::new("1", "+91", "+92");
    assert_eq!(lead.display_location(), None);

    lead.city = Some(String::from("Pune"));
    assert_eq!(lead.display_location().as_deref(), Some("Pune"));

    lead.state = Some(String::from("Maharashtra"));
    assert_eq!(
        lead.display_location().as_deref(),
        Some("Pune, Maharashtra")
    );

    lead.location = Some(String::from("Pune West"));
    assert_eq!(lead.display_location().as_deref(), Some("Pune West"));
}

#[test]
fn test_display_name_falls_back_to_phone() {
    let mut lead: Lead = Lead::new("1", "+919800000001", "+92");
    assert_eq!(lead.display_name(), "+919800000001");
    lead.name = Some(String::from("Riya"));
    assert_eq!(lead.display_name(), "Riya");
}

#[test]
fn test_stage_label_defaults_to_new_lead() {
    let mut lead: Lead = Lead::new("1", "+91", "+92");
    assert_eq!(lead.stage_label(), "New Lead");
    lead.stage = Some(LeadStage::DocumentsRequested);
    assert_eq!(lead.stage_label(), "Documents Requested");
}

#[test]
fn test_stage_parses_wire_names() {
    for stage in LeadStage::ALL {
        assert_eq!(stage.as_str().parse::<LeadStage>().unwrap(), stage);
    }
    assert!("won".parse::<LeadStage>().is_err());
}

#[test]
fn test_unknown_stage_and_status_are_kept() {
    let mut record: Value = create_backend_lead_json();
    record["stage"] = json!("");
    record["status"] = json!("on_hold");

    let lead: Lead = serde_json::from_value(record).unwrap();

    assert_eq!(lead.stage, Some(LeadStage::Other(String::new())));
    assert_eq!(lead.stage_label(), "New Lead");
    assert_eq!(lead.status, LeadStatus::Other(String::from("on_hold")));

    let written: Value = serde_json::to_value(&lead).unwrap();
    assert_eq!(written["stage"], "");
    assert_eq!(written["status"], "on_hold");
}

#[test]
fn test_known_stage_writes_wire_name() {
    let mut lead: Lead = Lead::new("1", "+91", "+92");
    lead.stage = Some(LeadStage::ClosedWon);

    let written: Value = serde_json::to_value(&lead).unwrap();

    assert_eq!(written["stage"], "closed_won");
    assert_eq!(written["status"], "active");
}

#[test]
fn test_tags_keep_insertion_order_without_duplicates() {
    let mut lead: Lead = Lead::new("1", "+91", "+92");
    assert!(lead.add_tag("Junk").unwrap());
    assert!(lead.add_tag("Interested").unwrap());
    assert!(!lead.add_tag("Junk").unwrap());
    assert_eq!(lead.tags, vec!["Junk", "Interested"]);

    assert!(lead.remove_tag("Junk"));
    assert_eq!(lead.tags, vec!["Interested"]);
    assert!(lead.add_tag("").is_err());
}
