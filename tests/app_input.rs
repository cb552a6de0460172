mod common;

use common::{opportunity, sample_app, sample_state};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use resqlink::config::Defaults;
use resqlink::domain::{
    CrisisKind, CrisisStatus, EntityId, OpportunityKind, Priority, ResourceKind, ResourceStatus,
    Role, Section, Severity,
};
use resqlink::store::{ReliefState, Store};
use resqlink::ui::app::App;
use resqlink::ui::filter::{CrisisFilter, Filters, OpportunityFilter, ResourceFilter};
use resqlink::ui::input::handle_key;
use resqlink::ui::nav::View;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_with(state: ReliefState) -> App {
    App::new(Store::new(state), &Defaults::default())
}

fn visible_ids(ids: impl Iterator<Item = EntityId>) -> Vec<String> {
    ids.map(|id| id.as_str().to_string()).collect()
}

#[test]
fn number_keys_switch_role() {
    let mut app = sample_app();
    app.navigate(Section::Resources);

    handle_key(&mut app, press(KeyCode::Char('3')));

    assert_eq!(app.state().user.role, Role::Donor);
    assert_eq!(app.state().section, Section::Dashboard);
    assert_eq!(app.view(), View::Dashboard);
}

#[test]
fn tab_cycles_role_sections_and_wraps() {
    let mut app = sample_app();
    handle_key(&mut app, press(KeyCode::Char('2')));

    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.state().section, Section::Opportunities);

    handle_key(&mut app, press(KeyCode::BackTab));
    handle_key(&mut app, press(KeyCode::BackTab));
    assert_eq!(app.state().section, Section::Communications);
}

#[test]
fn fulfill_key_contributes_one_step() {
    let mut app = sample_app();
    app.navigate(Section::Resources);
    handle_key(&mut app, press(KeyCode::Down));

    handle_key(&mut app, press(KeyCode::Char('f')));

    let resource = app.state().resource(&EntityId::from("r2")).unwrap();
    assert_eq!(resource.fulfilled, 100);
    assert_eq!(resource.status, ResourceStatus::PartiallyFulfilled);

    handle_key(&mut app, press(KeyCode::Char('f')));
    handle_key(&mut app, press(KeyCode::Char('f')));
    let resource = app.state().resource(&EntityId::from("r2")).unwrap();
    assert_eq!(resource.fulfilled, 200);
    assert_eq!(resource.status, ResourceStatus::Fulfilled);
    assert!(app.notice().unwrap().contains("already fulfilled"));
}

#[test]
fn apply_is_refused_when_full() {
    let mut app = sample_app();
    app.navigate(Section::Volunteers);

    handle_key(&mut app, press(KeyCode::Char('a')));
    assert_eq!(
        app.state()
            .opportunity(&EntityId::from("o1"))
            .unwrap()
            .volunteers_registered,
        5
    );

    handle_key(&mut app, press(KeyCode::Char('a')));
    assert_eq!(
        app.state()
            .opportunity(&EntityId::from("o1"))
            .unwrap()
            .volunteers_registered,
        5
    );
    assert!(app.notice().unwrap().ends_with("is full"));
}

#[test]
fn selection_wraps_around_lists() {
    let mut app = sample_app();
    app.navigate(Section::Crises);
    assert_eq!(app.selectable_len(), 2);

    handle_key(&mut app, press(KeyCode::Up));
    assert_eq!(app.selection(), 1);
    handle_key(&mut app, press(KeyCode::Char('j')));
    assert_eq!(app.selection(), 0);
}

#[test]
fn donate_key_funds_selected_active_crisis() {
    let mut app = sample_app();
    app.switch_role(Role::Donor);
    app.navigate(Section::Donate);
    handle_key(&mut app, press(KeyCode::Char('j')));

    handle_key(&mut app, press(KeyCode::Char('d')));

    let state = app.state();
    assert_eq!(state.crisis(&EntityId::from("c2")).unwrap().total_funding, 1_100);
    assert_eq!(state.donations.len(), 1);
    assert_eq!(state.donations[0].donor_id, state.user.id);
}

#[test]
fn status_key_cycles_crisis_status() {
    let mut app = sample_app();
    app.navigate(Section::Crises);

    handle_key(&mut app, press(KeyCode::Char('s')));
    assert_eq!(app.state().crises[0].status, CrisisStatus::Monitoring);

    handle_key(&mut app, press(KeyCode::Char('s')));
    handle_key(&mut app, press(KeyCode::Char('s')));
    assert_eq!(app.state().crises[0].status, CrisisStatus::Active);
}

#[test]
fn actions_outside_their_view_do_nothing() {
    let mut app = sample_app();
    let before = app.state().clone();

    handle_key(&mut app, press(KeyCode::Char('f')));
    handle_key(&mut app, press(KeyCode::Char('a')));
    handle_key(&mut app, press(KeyCode::Char('d')));
    handle_key(&mut app, press(KeyCode::Char('s')));

    assert_eq!(app.state(), &before);
}

#[test]
fn mark_alerts_read() {
    let mut app = sample_app();
    handle_key(&mut app, press(KeyCode::Char('m')));
    assert_eq!(app.state().unacknowledged_alerts(), 0);
}

#[test]
fn quit_keys() {
    for key in [
        press(KeyCode::Char('q')),
        press(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = sample_app();
        handle_key(&mut app, key);
        assert!(app.should_quit());
    }
}

#[test]
fn key_releases_are_ignored() {
    let mut app = sample_app();
    let release = KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    handle_key(&mut app, release);
    assert!(!app.should_quit());
}

#[test]
fn ngo_volunteers_section_lists_opportunities() {
    let mut app = sample_app();
    app.navigate(Section::Volunteers);
    assert_eq!(app.view(), View::Opportunities);
    assert_eq!(
        app.selected_opportunity().map(|o| o.id.clone()),
        Some(opportunity("o1", "c1", 5, 4).id)
    );
}

#[test]
fn donate_key_is_ignored_in_crisis_list() {
    let mut app = sample_app();
    app.navigate(Section::Crises);
    let before = app.state().clone();

    handle_key(&mut app, press(KeyCode::Char('d')));

    assert_eq!(app.state(), &before);
    assert!(app.notice().is_none());
}

#[test]
fn alerts_key_opens_list_and_esc_closes_it() {
    let mut app = sample_app();
    app.navigate(Section::Resources);

    handle_key(&mut app, press(KeyCode::Char('n')));
    assert_eq!(app.view(), View::Alerts);
    assert_eq!(app.selectable_len(), 2);
    assert_eq!(app.selected_alert().unwrap().title, "Alert a1");

    handle_key(&mut app, press(KeyCode::Esc));
    assert!(!app.should_quit());
    assert_eq!(app.view(), View::Resources);
}

#[test]
fn read_key_acknowledges_only_selected_alert() {
    let mut state = sample_state();
    state.alerts[1].acknowledged = false;
    let mut app = app_with(state);
    handle_key(&mut app, press(KeyCode::Char('n')));
    handle_key(&mut app, press(KeyCode::Down));

    handle_key(&mut app, press(KeyCode::Char('r')));

    let state = app.state();
    assert!(state.alerts[1].acknowledged);
    assert!(!state.alerts[0].acknowledged);
    assert_eq!(state.unacknowledged_alerts(), 1);
    assert_eq!(app.notice(), Some("Marked Alert a2 as read"));

    handle_key(&mut app, press(KeyCode::Char('r')));
    assert_eq!(app.notice(), Some("Alert a2 is already read"));
}

#[test]
fn read_key_outside_alert_list_does_nothing() {
    let mut app = sample_app();
    let before = app.state().clone();

    handle_key(&mut app, press(KeyCode::Char('r')));

    assert_eq!(app.state(), &before);
}

#[test]
fn unread_alert_filter_drops_acknowledged_alerts() {
    let mut app = sample_app();
    handle_key(&mut app, press(KeyCode::Char('n')));

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.notice(), Some("Filter: unread"));
    assert_eq!(app.selectable_len(), 1);

    handle_key(&mut app, press(KeyCode::Char('r')));
    assert_eq!(app.selectable_len(), 0);
    assert_eq!(app.selection(), 0);
    assert!(app.selected_alert().is_none());

    // Next stop is the first alert kind; the sample alerts are updates.
    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.selectable_len(), 0);
    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.notice(), Some("Filter: update"));
    assert_eq!(app.selectable_len(), 2);
}

#[test]
fn crisis_filters_narrow_the_list() {
    let mut state = sample_state();
    state.crises[0].status = CrisisStatus::Monitoring;
    state.crises[1].severity = Severity::Critical;
    state.crises[1].kind = CrisisKind::Flood;
    let mut app = app_with(state);
    app.navigate(Section::Crises);
    let shown = |app: &App| visible_ids(app.visible_crises().map(|c| c.id.clone()));

    assert_eq!(shown(&app), ["c1", "c2"]);

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.filters().crises, CrisisFilter::Active);
    assert_eq!(shown(&app), ["c2"]);
    assert_eq!(app.selected_crisis().unwrap().id, EntityId::from("c2"));

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.filters().crises, CrisisFilter::Critical);
    assert_eq!(shown(&app), ["c2"]);

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.filters().crises, CrisisFilter::Kind(CrisisKind::Earthquake));
    assert_eq!(shown(&app), ["c1"]);

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.filters().crises, CrisisFilter::Kind(CrisisKind::Flood));
    assert_eq!(shown(&app), ["c2"]);
}

#[test]
fn status_change_under_active_filter_keeps_cursor_in_range() {
    let mut app = sample_app();
    app.navigate(Section::Crises);
    handle_key(&mut app, press(KeyCode::Char('t')));
    handle_key(&mut app, press(KeyCode::Down));
    assert_eq!(app.selection(), 1);

    handle_key(&mut app, press(KeyCode::Char('s')));

    assert_eq!(app.state().crises[1].status, CrisisStatus::Monitoring);
    assert_eq!(app.selectable_len(), 1);
    assert_eq!(app.selection(), 0);
}

#[test]
fn resource_filters_narrow_the_list() {
    let mut state = sample_state();
    state.resources[0].priority = Priority::Urgent;
    state.resources[1].kind = ResourceKind::Food;
    let mut app = app_with(state);
    app.navigate(Section::Resources);
    let shown = |app: &App| visible_ids(app.visible_resources().map(|r| r.id.clone()));

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.filters().resources, ResourceFilter::Urgent);
    assert_eq!(shown(&app), ["r1"]);

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.filters().resources, ResourceFilter::Needed);
    assert_eq!(shown(&app), ["r2"]);

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.filters().resources, ResourceFilter::Kind(ResourceKind::Food));
    assert_eq!(shown(&app), ["r2"]);

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.filters().resources, ResourceFilter::Kind(ResourceKind::Water));
    assert_eq!(shown(&app), ["r1"]);

    // Contributions go to the filtered selection.
    handle_key(&mut app, press(KeyCode::Char('f')));
    assert_eq!(app.state().resource(&EntityId::from("r1")).unwrap().fulfilled, 3_600);
}

#[test]
fn opportunity_filters_narrow_the_list() {
    let mut state = sample_state();
    let mut medical = opportunity("o2", "c2", 10, 2);
    medical.kind = OpportunityKind::Medical;
    state.opportunities.push(medical);
    state.opportunities.push(opportunity("o3", "c2", 3, 3));
    let mut app = app_with(state);
    app.navigate(Section::Volunteers);
    let shown = |app: &App| visible_ids(app.visible_opportunities().map(|o| o.id.clone()));

    assert_eq!(shown(&app), ["o1", "o2", "o3"]);

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.filters().opportunities, OpportunityFilter::Available);
    assert_eq!(shown(&app), ["o1", "o2"]);

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(app.filters().opportunities, OpportunityFilter::Urgent);
    assert_eq!(shown(&app), ["o2"]);

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(
        app.filters().opportunities,
        OpportunityFilter::Kind(OpportunityKind::FieldWork)
    );
    assert!(shown(&app).is_empty());
    assert!(app.selected_opportunity().is_none());

    handle_key(&mut app, press(KeyCode::Char('t')));
    assert_eq!(shown(&app), ["o1", "o3"]);
}

#[test]
fn filter_key_is_ignored_without_a_list() {
    let mut app = sample_app();

    handle_key(&mut app, press(KeyCode::Char('t')));

    assert!(app.notice().is_none());
    assert_eq!(app.filters(), &Filters::default());
}
