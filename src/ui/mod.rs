pub mod filter_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use filter_pane::render_filter_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    // Search edits in place in the filter bar; every other mode opens
    // the bottom input line
    let input_open = !matches!(app.ui_mode, UiMode::Normal | UiMode::Searching);
    let layout = create_layout(size, input_open);

    render_filter_pane(f, app, layout.filter_area);
    render_list_pane(f, app, layout.list_area);
    render_keybindings(f, layout.keybindings_area);

    if let Some(input_area) = layout.input_area {
        render_input_form(f, app, input_area);
    }
}
