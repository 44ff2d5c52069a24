use crate::ui::app::App;
use crate::ui::create::render_create;
use crate::ui::deck_list::{render_community, render_library};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::render_home;
use crate::ui::layout::layout_regions;
use crate::ui::view::ViewState;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.mode()).widget(), header);
    frame.render_widget(Clear, body);
    match app.view() {
        ViewState::Home => render_home(frame, body),
        ViewState::Create(form) => render_create(frame, body, form),
        ViewState::Library(list) => render_library(frame, body, list, app.library()),
        ViewState::Community(list) => render_community(frame, body, list, app.community()),
    }
    let footer_widget = Footer::new(app.mode(), app.status());
    frame.render_widget(footer_widget.widget(footer), footer);
}
