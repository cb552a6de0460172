//! Donations: monetary, in-kind or service contributions toward a crisis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::EntityId;
use super::user::User;

pub const ANONYMOUS_DONOR: &str = "Anonymous Donor";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodsItem {
    pub name: String,
    pub quantity: u64,
    pub unit: String,
}

/// What was given. Tagged by `type` so seed files keep the flat donation shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Contribution {
    Monetary {
        #[serde(default)]
        amount: Option<u64>,
        #[serde(default)]
        currency: Option<String>,
    },
    Goods {
        #[serde(default)]
        items: Vec<GoodsItem>,
    },
    Services,
}

impl Contribution {
    /// Amount that counts toward crisis funding.
    pub fn monetary_amount(&self) -> Option<u64> {
        match self {
            Contribution::Monetary { amount, .. } => *amount,
            Contribution::Goods { .. } | Contribution::Services => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Contribution::Monetary { .. } => "monetary",
            Contribution::Goods { .. } => "goods",
            Contribution::Services => "services",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DonationStatus {
    Pledged,
    Confirmed,
    Delivered,
}

impl DonationStatus {
    pub fn label(self) -> &'static str {
        match self {
            DonationStatus::Pledged => "pledged",
            DonationStatus::Confirmed => "confirmed",
            DonationStatus::Delivered => "delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: EntityId,
    pub donor_id: EntityId,
    pub donor_name: String,
    pub crisis_id: EntityId,
    #[serde(flatten)]
    pub contribution: Contribution,
    pub status: DonationStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub anonymous: bool,
}

impl Donation {
    pub fn display_name(&self) -> &str {
        if self.anonymous {
            ANONYMOUS_DONOR
        } else {
            &self.donor_name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDonation {
    pub donor_id: EntityId,
    pub donor_name: String,
    pub crisis_id: EntityId,
    #[serde(flatten)]
    pub contribution: Contribution,
    pub status: DonationStatus,
    pub timestamp: DateTime<Utc>,
    pub anonymous: bool,
}

impl NewDonation {
    /// Confirmed monetary gift from `donor`, as made by the quick-donate action.
    pub fn monetary(
        donor: &User,
        crisis_id: EntityId,
        amount: u64,
        currency: impl Into<String>,
        anonymous: bool,
    ) -> Self {
        let donor_name = if anonymous {
            ANONYMOUS_DONOR.to_string()
        } else {
            donor.name.clone()
        };
        Self {
            donor_id: donor.id.clone(),
            donor_name,
            crisis_id,
            contribution: Contribution::Monetary {
                amount: Some(amount),
                currency: Some(currency.into()),
            },
            status: DonationStatus::Confirmed,
            timestamp: Utc::now(),
            anonymous,
        }
    }

    /// Pledged in-kind gift. Items without a name or quantity are dropped.
    pub fn goods(donor: &User, crisis_id: EntityId, items: Vec<GoodsItem>, anonymous: bool) -> Self {
        let donor_name = if anonymous {
            ANONYMOUS_DONOR.to_string()
        } else {
            donor.name.clone()
        };
        let items = items
            .into_iter()
            .filter(|item| !item.name.is_empty() && item.quantity > 0)
            .collect();
        Self {
            donor_id: donor.id.clone(),
            donor_name,
            crisis_id,
            contribution: Contribution::Goods { items },
            status: DonationStatus::Pledged,
            timestamp: Utc::now(),
            anonymous,
        }
    }

    pub fn into_donation(self, id: EntityId) -> Donation {
        Donation {
            id,
            donor_id: self.donor_id,
            donor_name: self.donor_name,
            crisis_id: self.crisis_id,
            contribution: self.contribution,
            status: self.status,
            timestamp: self.timestamp,
            anonymous: self.anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_monetary_donation() {
        let json = r#"{
            "id": "1",
            "donorId": "donor1",
            "donorName": "Someone",
            "crisisId": "1",
            "type": "monetary",
            "amount": 50000,
            "currency": "USD",
            "status": "confirmed",
            "timestamp": "2024-02-07T10:30:00Z",
            "anonymous": true
        }"#;
        let donation: Donation = serde_json::from_str(json).unwrap();
        assert_eq!(donation.contribution.monetary_amount(), Some(50_000));
        assert_eq!(donation.display_name(), ANONYMOUS_DONOR);
    }

    #[test]
    fn parses_goods_donation() {
        let json = r#"{
            "id": "2",
            "donorId": "donor2",
            "donorName": "Tech for Good Foundation",
            "crisisId": "1",
            "type": "goods",
            "items": [{ "name": "Solar Chargers", "quantity": 500, "unit": "units" }],
            "status": "delivered",
            "timestamp": "2024-02-05T14:20:00Z",
            "anonymous": false
        }"#;
        let donation: Donation = serde_json::from_str(json).unwrap();
        assert_eq!(donation.contribution.monetary_amount(), None);
        assert_eq!(donation.display_name(), "Tech for Good Foundation");
        match donation.contribution {
            Contribution::Goods { items } => assert_eq!(items.len(), 1),
            other => panic!("expected goods, got {other:?}"),
        }
    }

    #[test]
    fn goods_drops_blank_items() {
        let donor = User::default();
        let draft = NewDonation::goods(
            &donor,
            EntityId::from("c1"),
            vec![
                GoodsItem {
                    name: "Blankets".to_string(),
                    quantity: 20,
                    unit: "units".to_string(),
                },
                GoodsItem {
                    name: String::new(),
                    quantity: 5,
                    unit: "units".to_string(),
                },
                GoodsItem {
                    name: "Water".to_string(),
                    quantity: 0,
                    unit: "liters".to_string(),
                },
            ],
            false,
        );
        assert_eq!(draft.status, DonationStatus::Pledged);
        match draft.contribution {
            Contribution::Goods { items } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].name, "Blankets");
            }
            other => panic!("expected goods, got {other:?}"),
        }
    }

    #[test]
    fn anonymous_monetary_hides_name() {
        let donor = User::default();
        let draft = NewDonation::monetary(&donor, EntityId::from("c1"), 100, "USD", true);
        assert_eq!(draft.donor_name, ANONYMOUS_DONOR);
        assert!(draft.anonymous);
        assert_eq!(draft.donor_id, donor.id);
    }
}
