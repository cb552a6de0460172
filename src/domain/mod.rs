//! Entity types for the relief store.

mod alert;
mod crisis;
mod donation;
mod id;
mod ngo;
mod resource;
mod user;
mod volunteer;

pub use alert::{Alert, AlertKind};
pub use crisis::{Coordinates, Crisis, CrisisKind, CrisisPatch, CrisisStatus, NewCrisis, Severity};
pub use donation::{
    Contribution, Donation, DonationStatus, GoodsItem, NewDonation, ANONYMOUS_DONOR,
};
pub use id::EntityId;
pub use ngo::{ContactInfo, Ngo, NgoKind};
pub use resource::{
    NewResource, Priority, ResourceKind, ResourceNeed, ResourcePatch, ResourceStatus,
};
pub use user::{Role, Section, UnknownRole, User};
pub use volunteer::{NewOpportunity, OpportunityKind, VolunteerOpportunity};
