//! Shared fixtures for integration tests.

#![allow(dead_code, unused_imports)]

use chrono::{DateTime, TimeZone, Utc};
use resqlink::config::Defaults;
use resqlink::domain::{
    Alert, AlertKind, ContactInfo, Crisis, CrisisKind, CrisisStatus, EntityId, NewCrisis,
    NewOpportunity, NewResource, Ngo, NgoKind, OpportunityKind, Priority, ResourceKind,
    ResourceNeed, ResourceStatus, Severity, VolunteerOpportunity,
};
use resqlink::store::{ReliefState, Store};
use resqlink::ui::app::App;

pub fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
}

pub fn crisis(id: &str, total_funding: u64, funding_goal: u64) -> Crisis {
    Crisis {
        id: EntityId::from(id),
        title: format!("Crisis {id}"),
        kind: CrisisKind::Earthquake,
        severity: Severity::High,
        status: CrisisStatus::Active,
        location: "Coastal Region".to_string(),
        coordinates: None,
        description: "Test crisis".to_string(),
        affected_population: 10_000,
        start_date: timestamp(),
        estimated_duration: None,
        required_resources: Vec::new(),
        assigned_ngos: Vec::new(),
        total_funding,
        funding_goal,
    }
}

pub fn resource(id: &str, crisis_id: &str, quantity: u64, fulfilled: u64) -> ResourceNeed {
    ResourceNeed {
        id: EntityId::from(id),
        crisis_id: EntityId::from(crisis_id),
        kind: ResourceKind::Water,
        item: format!("Item {id}"),
        quantity,
        unit: "liters".to_string(),
        priority: Priority::High,
        status: ResourceStatus::from_progress(fulfilled, quantity),
        requested_by: "Relief Org".to_string(),
        deadline: None,
        description: None,
        fulfilled,
    }
}

pub fn opportunity(id: &str, crisis_id: &str, needed: u32, registered: u32) -> VolunteerOpportunity {
    VolunteerOpportunity {
        id: EntityId::from(id),
        title: format!("Opportunity {id}"),
        crisis_id: EntityId::from(crisis_id),
        ngo_id: EntityId::from("ngo-1"),
        ngo_name: "Relief Org".to_string(),
        kind: OpportunityKind::Logistics,
        location: "Warehouse".to_string(),
        required_skills: Vec::new(),
        time_commitment: "2 weeks".to_string(),
        start_date: timestamp(),
        end_date: None,
        volunteers_needed: needed,
        volunteers_registered: registered,
        description: String::new(),
        requirements: Vec::new(),
    }
}

pub fn alert(id: &str, acknowledged: bool) -> Alert {
    Alert {
        id: EntityId::from(id),
        title: format!("Alert {id}"),
        message: "Road closed".to_string(),
        kind: AlertKind::Update,
        severity: Severity::Medium,
        target_roles: None,
        crisis_id: None,
        timestamp: timestamp(),
        acknowledged,
        expires_at: None,
    }
}

pub fn ngo(id: &str, active_crises: &[&str]) -> Ngo {
    Ngo {
        id: EntityId::from(id),
        name: format!("NGO {id}"),
        kind: NgoKind::Relief,
        location: "Capital".to_string(),
        description: String::new(),
        specializations: Vec::new(),
        verified: true,
        rating: 4.5,
        total_projects: 12,
        active_crises: active_crises.iter().map(|id| EntityId::from(*id)).collect(),
        contact_info: ContactInfo {
            email: "contact@example.org".to_string(),
            phone: "+1 555 0100".to_string(),
            website: None,
        },
    }
}

pub fn new_crisis(title: &str, funding_goal: u64) -> NewCrisis {
    NewCrisis {
        title: title.to_string(),
        kind: CrisisKind::Flood,
        severity: Severity::Critical,
        location: "River Delta".to_string(),
        coordinates: None,
        description: "Flooding".to_string(),
        affected_population: 5_000,
        start_date: timestamp(),
        estimated_duration: Some("3 months".to_string()),
        funding_goal,
    }
}

pub fn new_resource(crisis_id: &EntityId, quantity: u64) -> NewResource {
    NewResource {
        crisis_id: crisis_id.clone(),
        kind: ResourceKind::Food,
        item: "Ration packs".to_string(),
        quantity,
        unit: "packs".to_string(),
        priority: Priority::Urgent,
        requested_by: "Relief Org".to_string(),
        deadline: None,
        description: None,
    }
}

pub fn new_opportunity(crisis_id: &EntityId, needed: u32) -> NewOpportunity {
    NewOpportunity {
        title: "Distribution volunteers".to_string(),
        crisis_id: crisis_id.clone(),
        ngo_id: EntityId::from("ngo-1"),
        ngo_name: "Relief Org".to_string(),
        kind: OpportunityKind::FieldWork,
        location: "Camp".to_string(),
        required_skills: vec!["lifting".to_string()],
        time_commitment: "weekends".to_string(),
        start_date: timestamp(),
        end_date: None,
        volunteers_needed: needed,
        description: String::new(),
        requirements: Vec::new(),
    }
}

/// Two crises, one resource each, one opportunity and one pending alert.
pub fn sample_state() -> ReliefState {
    ReliefState {
        crises: vec![crisis("c1", 45_000_000, 100_000_000), crisis("c2", 1_000, 50_000)],
        resources: vec![resource("r1", "c1", 10_000, 3_500), resource("r2", "c2", 200, 0)],
        opportunities: vec![opportunity("o1", "c1", 5, 4)],
        alerts: vec![alert("a1", false), alert("a2", true)],
        ngos: vec![ngo("n1", &["c1"]), ngo("n2", &[])],
        ..ReliefState::default()
    }
}

pub fn sample_store() -> Store {
    Store::new(sample_state())
}

pub fn sample_app() -> App {
    App::new(sample_store(), &Defaults::default())
}
