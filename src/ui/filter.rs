//! Per-view list filters, cycled with `t`.
//!
//! Each filter walks `all` → its special cases → every kind of the entity, then
//! wraps back to `all`.

use crate::domain::{
    Alert, AlertKind, Crisis, CrisisKind, OpportunityKind, Priority, ResourceKind, ResourceNeed,
    ResourceStatus, Severity, VolunteerOpportunity,
};

pub trait ListFilter: Copy + Default {
    type Item;

    fn matches(&self, item: &Self::Item) -> bool;

    /// The filter after this one in the cycle.
    fn next(self) -> Self;

    fn label(&self) -> &'static str;
}

fn kind_after<K: Copy + PartialEq>(all: &[K], current: K) -> Option<K> {
    let index = all.iter().position(|kind| *kind == current)?;
    all.get(index + 1).copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrisisFilter {
    #[default]
    All,
    Active,
    Critical,
    Kind(CrisisKind),
}

impl ListFilter for CrisisFilter {
    type Item = Crisis;

    fn matches(&self, crisis: &Crisis) -> bool {
        match self {
            CrisisFilter::All => true,
            CrisisFilter::Active => crisis.is_active(),
            CrisisFilter::Critical => crisis.severity == Severity::Critical,
            CrisisFilter::Kind(kind) => crisis.kind == *kind,
        }
    }

    fn next(self) -> Self {
        match self {
            CrisisFilter::All => CrisisFilter::Active,
            CrisisFilter::Active => CrisisFilter::Critical,
            CrisisFilter::Critical => CrisisFilter::Kind(CrisisKind::ALL[0]),
            CrisisFilter::Kind(kind) => {
                kind_after(&CrisisKind::ALL, kind).map_or(CrisisFilter::All, CrisisFilter::Kind)
            }
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CrisisFilter::All => "all",
            CrisisFilter::Active => "active",
            CrisisFilter::Critical => "critical",
            CrisisFilter::Kind(kind) => kind.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceFilter {
    #[default]
    All,
    /// Urgent priority, whatever the status.
    Urgent,
    Needed,
    Kind(ResourceKind),
}

impl ListFilter for ResourceFilter {
    type Item = ResourceNeed;

    fn matches(&self, resource: &ResourceNeed) -> bool {
        match self {
            ResourceFilter::All => true,
            ResourceFilter::Urgent => resource.priority == Priority::Urgent,
            ResourceFilter::Needed => resource.status == ResourceStatus::Needed,
            ResourceFilter::Kind(kind) => resource.kind == *kind,
        }
    }

    fn next(self) -> Self {
        match self {
            ResourceFilter::All => ResourceFilter::Urgent,
            ResourceFilter::Urgent => ResourceFilter::Needed,
            ResourceFilter::Needed => ResourceFilter::Kind(ResourceKind::ALL[0]),
            ResourceFilter::Kind(kind) => kind_after(&ResourceKind::ALL, kind)
                .map_or(ResourceFilter::All, ResourceFilter::Kind),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ResourceFilter::All => "all",
            ResourceFilter::Urgent => "urgent",
            ResourceFilter::Needed => "needed",
            ResourceFilter::Kind(kind) => kind.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpportunityFilter {
    #[default]
    All,
    Available,
    /// Less than half of the needed volunteers registered.
    Urgent,
    Kind(OpportunityKind),
}

impl ListFilter for OpportunityFilter {
    type Item = VolunteerOpportunity;

    fn matches(&self, opportunity: &VolunteerOpportunity) -> bool {
        match self {
            OpportunityFilter::All => true,
            OpportunityFilter::Available => opportunity.has_open_slots(),
            OpportunityFilter::Urgent => opportunity.is_urgent(),
            OpportunityFilter::Kind(kind) => opportunity.kind == *kind,
        }
    }

    fn next(self) -> Self {
        match self {
            OpportunityFilter::All => OpportunityFilter::Available,
            OpportunityFilter::Available => OpportunityFilter::Urgent,
            OpportunityFilter::Urgent => OpportunityFilter::Kind(OpportunityKind::ALL[0]),
            OpportunityFilter::Kind(kind) => kind_after(&OpportunityKind::ALL, kind)
                .map_or(OpportunityFilter::All, OpportunityFilter::Kind),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            OpportunityFilter::All => "all",
            OpportunityFilter::Available => "available",
            OpportunityFilter::Urgent => "urgent",
            OpportunityFilter::Kind(kind) => kind.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertFilter {
    #[default]
    All,
    Unread,
    Kind(AlertKind),
}

impl ListFilter for AlertFilter {
    type Item = Alert;

    fn matches(&self, alert: &Alert) -> bool {
        match self {
            AlertFilter::All => true,
            AlertFilter::Unread => !alert.acknowledged,
            AlertFilter::Kind(kind) => alert.kind == *kind,
        }
    }

    fn next(self) -> Self {
        match self {
            AlertFilter::All => AlertFilter::Unread,
            AlertFilter::Unread => AlertFilter::Kind(AlertKind::ALL[0]),
            AlertFilter::Kind(kind) => {
                kind_after(&AlertKind::ALL, kind).map_or(AlertFilter::All, AlertFilter::Kind)
            }
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AlertFilter::All => "all",
            AlertFilter::Unread => "unread",
            AlertFilter::Kind(kind) => kind.label(),
        }
    }
}

/// Active filter for every list view. Kept across navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Filters {
    pub crises: CrisisFilter,
    pub resources: ResourceFilter,
    pub opportunities: OpportunityFilter,
    pub alerts: AlertFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle_length<F: ListFilter + PartialEq>() -> usize {
        let start = F::default();
        let mut filter = start.next();
        let mut steps = 1;
        while filter != start {
            filter = filter.next();
            steps += 1;
        }
        steps
    }

    #[test]
    fn cycles_visit_every_kind_once() {
        assert_eq!(cycle_length::<CrisisFilter>(), 3 + CrisisKind::ALL.len());
        assert_eq!(cycle_length::<ResourceFilter>(), 3 + ResourceKind::ALL.len());
        assert_eq!(cycle_length::<OpportunityFilter>(), 3 + OpportunityKind::ALL.len());
        assert_eq!(cycle_length::<AlertFilter>(), 2 + AlertKind::ALL.len());
    }

    #[test]
    fn kind_filters_follow_the_special_cases() {
        assert_eq!(
            CrisisFilter::Critical.next(),
            CrisisFilter::Kind(CrisisKind::Earthquake)
        );
        assert_eq!(
            ResourceFilter::Kind(ResourceKind::Personnel).next(),
            ResourceFilter::All
        );
        assert_eq!(AlertFilter::Unread.next().label(), "emergency");
        assert_eq!(OpportunityFilter::Available.next().label(), "urgent");
    }
}
