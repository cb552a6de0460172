use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::nav::NavBar;
use crate::ui::views::render_body;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let state = app.state();

    frame.render_widget(Header::widget(state), regions.header);
    frame.render_widget(
        NavBar::widget(&app.role_config(), state.section),
        regions.nav,
    );
    frame.render_widget(Clear, regions.body);
    render_body(frame, regions.body, app);
    frame.render_widget(
        Footer::widget(app.view(), app.notice(), regions.footer),
        regions.footer,
    );
}
