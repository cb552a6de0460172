use crate::config::Defaults;
use crate::domain::{
    Alert, Crisis, CrisisPatch, NewDonation, ResourceNeed, Role, Section, VolunteerOpportunity,
};
use crate::store::{ReliefState, Store};
use crate::ui::filter::{Filters, ListFilter};
use crate::ui::nav::{RoleConfig, View};

/// Terminal front end state: the store plus list selection and quick-action settings.
pub struct App {
    store: Store,
    should_quit: bool,
    /// Row selected in the current list view.
    selection: usize,
    filters: Filters,
    /// Alert list shown in place of the current section.
    show_alerts: bool,
    quick_donation_amount: u64,
    currency: String,
    anonymous_donations: bool,
    fulfillment_step: u64,
    /// One-line feedback for the last action, cleared on navigation.
    notice: Option<String>,
}

impl App {
    pub fn new(store: Store, defaults: &Defaults) -> Self {
        Self {
            store,
            should_quit: false,
            selection: 0,
            filters: Filters::default(),
            show_alerts: false,
            quick_donation_amount: defaults.quick_donation_amount,
            currency: defaults.currency.clone(),
            anonymous_donations: defaults.anonymous_donations,
            fulfillment_step: defaults.fulfillment_step,
            notice: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn state(&self) -> &ReliefState {
        self.store.state()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn role_config(&self) -> RoleConfig {
        RoleConfig::for_role(self.state().user.role)
    }

    pub fn view(&self) -> View {
        if self.show_alerts {
            View::Alerts
        } else {
            View::for_section(self.state().section)
        }
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn switch_role(&mut self, role: Role) {
        self.store.switch_role(role);
        self.show_alerts = false;
        self.selection = 0;
        self.notice = None;
    }

    pub fn navigate(&mut self, section: Section) {
        self.store.navigate(section);
        self.show_alerts = false;
        self.selection = 0;
        self.notice = None;
    }

    /// Open or close the alert list.
    pub fn toggle_alerts(&mut self) {
        self.show_alerts = !self.show_alerts;
        self.selection = 0;
        self.notice = None;
    }

    /// Step the current view's filter. Views without a filter ignore this.
    pub fn cycle_filter(&mut self) {
        let label = match self.view() {
            View::Crises => {
                self.filters.crises = self.filters.crises.next();
                self.filters.crises.label()
            }
            View::Resources => {
                self.filters.resources = self.filters.resources.next();
                self.filters.resources.label()
            }
            View::Opportunities => {
                self.filters.opportunities = self.filters.opportunities.next();
                self.filters.opportunities.label()
            }
            View::Alerts => {
                self.filters.alerts = self.filters.alerts.next();
                self.filters.alerts.label()
            }
            View::Dashboard | View::Donations => return,
        };
        self.selection = 0;
        self.notice = Some(format!("Filter: {label}"));
    }

    pub fn visible_crises(&self) -> impl Iterator<Item = &Crisis> + '_ {
        let filter = self.filters.crises;
        self.state().crises.iter().filter(move |crisis| filter.matches(crisis))
    }

    pub fn visible_resources(&self) -> impl Iterator<Item = &ResourceNeed> + '_ {
        let filter = self.filters.resources;
        self.state()
            .resources
            .iter()
            .filter(move |resource| filter.matches(resource))
    }

    pub fn visible_opportunities(&self) -> impl Iterator<Item = &VolunteerOpportunity> + '_ {
        let filter = self.filters.opportunities;
        self.state()
            .opportunities
            .iter()
            .filter(move |opportunity| filter.matches(opportunity))
    }

    pub fn visible_alerts(&self) -> impl Iterator<Item = &Alert> + '_ {
        let filter = self.filters.alerts;
        self.state().alerts.iter().filter(move |alert| filter.matches(alert))
    }

    /// Move to the next (`step > 0`) or previous nav item of the current role, wrapping.
    pub fn cycle_section(&mut self, step: i32) {
        let config = self.role_config();
        let len = config.nav_items.len();
        if len == 0 {
            return;
        }
        let current = config.position(self.state().section).unwrap_or(0);
        let next = if step.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
        self.navigate(config.nav_items[next].section);
    }

    /// Number of selectable rows in the current view, after filtering.
    pub fn selectable_len(&self) -> usize {
        match self.view() {
            View::Crises => self.visible_crises().count(),
            View::Resources => self.visible_resources().count(),
            View::Opportunities => self.visible_opportunities().count(),
            View::Alerts => self.visible_alerts().count(),
            View::Donations => self.state().active_crises().count(),
            View::Dashboard => 0,
        }
    }

    pub fn move_selection(&mut self, step: i32) {
        let len = self.selectable_len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let current = self.selection.min(len - 1);
        self.selection = if step.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Crisis under the cursor: the filtered crisis list, or active crises in the donation view.
    pub fn selected_crisis(&self) -> Option<&Crisis> {
        match self.view() {
            View::Crises => self.visible_crises().nth(self.selection),
            View::Donations => self.state().active_crises().nth(self.selection),
            _ => None,
        }
    }

    pub fn selected_resource(&self) -> Option<&ResourceNeed> {
        match self.view() {
            View::Resources => self.visible_resources().nth(self.selection),
            _ => None,
        }
    }

    pub fn selected_opportunity(&self) -> Option<&VolunteerOpportunity> {
        match self.view() {
            View::Opportunities => self.visible_opportunities().nth(self.selection),
            _ => None,
        }
    }

    pub fn selected_alert(&self) -> Option<&Alert> {
        match self.view() {
            View::Alerts => self.visible_alerts().nth(self.selection),
            _ => None,
        }
    }

    /// Keep the cursor on the list after an action shrinks it.
    fn clamp_selection(&mut self) {
        let len = self.selectable_len();
        self.selection = self.selection.min(len.saturating_sub(1));
    }

    /// Contribute up to one fulfillment step to the selected resource need.
    pub fn fulfill_selected(&mut self) {
        let Some(resource) = self.selected_resource() else {
            return;
        };
        let contribution = self.fulfillment_step.min(resource.remaining());
        if contribution == 0 {
            let message = format!("{} is already fulfilled", resource.item);
            self.notice = Some(message);
            return;
        }
        let id = resource.id.clone();
        let item = resource.item.clone();
        let unit = resource.unit.clone();
        self.store.fulfill_resource(&id, contribution);
        self.clamp_selection();
        self.notice = Some(format!("Contributed {contribution} {unit} to {item}"));
    }

    /// Register for the selected opportunity. Full opportunities are refused here,
    /// not by the store.
    pub fn apply_selected(&mut self) {
        let Some(opportunity) = self.selected_opportunity() else {
            return;
        };
        if !opportunity.has_open_slots() {
            let message = format!("{} is full", opportunity.title);
            self.notice = Some(message);
            return;
        }
        let id = opportunity.id.clone();
        let title = opportunity.title.clone();
        self.store.apply_to_opportunity(&id);
        self.clamp_selection();
        self.notice = Some(format!("Applied to {title}"));
    }

    /// Quick-donate the configured amount to the active crisis selected in the donation view.
    pub fn donate_selected(&mut self) {
        if self.view() != View::Donations {
            return;
        }
        let Some(crisis) = self.selected_crisis() else {
            return;
        };
        let crisis_id = crisis.id.clone();
        let title = crisis.title.clone();
        let draft = NewDonation::monetary(
            &self.state().user,
            crisis_id,
            self.quick_donation_amount,
            self.currency.clone(),
            self.anonymous_donations,
        );
        self.store.make_donation(draft);
        self.notice = Some(format!(
            "Donated {} {} to {title}",
            self.quick_donation_amount, self.currency
        ));
    }

    /// Advance the selected crisis through active → monitoring → resolved.
    pub fn cycle_selected_status(&mut self) {
        if self.view() != View::Crises {
            return;
        }
        let Some(crisis) = self.selected_crisis() else {
            return;
        };
        let id = crisis.id.clone();
        let status = crisis.status.next();
        self.store.update_crisis(&id, CrisisPatch::status(status));
        self.clamp_selection();
        self.notice = Some(format!("Crisis marked {}", status.label()));
    }

    pub fn acknowledge_selected(&mut self) {
        let Some(alert) = self.selected_alert() else {
            return;
        };
        if alert.acknowledged {
            let message = format!("{} is already read", alert.title);
            self.notice = Some(message);
            return;
        }
        let id = alert.id.clone();
        let title = alert.title.clone();
        self.store.acknowledge_alert(&id);
        self.clamp_selection();
        self.notice = Some(format!("Marked {title} as read"));
    }

    pub fn acknowledge_alerts(&mut self) {
        let pending = self.state().unacknowledged_alerts();
        self.store.acknowledge_all_alerts();
        self.clamp_selection();
        self.notice = Some(format!("Marked {pending} alerts as read"));
    }
}
