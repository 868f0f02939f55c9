use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed areas for the main screen
pub struct AppLayout {
    pub filter_area: Rect,
    pub list_area: Rect,
    /// Present only while a text input is open
    pub input_area: Option<Rect>,
    pub keybindings_area: Rect,
}

/// Split the frame: filter bar on top, list in the middle, an optional
/// input line above the hint bar at the bottom.
pub fn create_layout(area: Rect, input_open: bool) -> AppLayout {
    let constraints = if input_open {
        vec![
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ]
    } else {
        vec![
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if input_open {
        AppLayout {
            filter_area: chunks[0],
            list_area: chunks[1],
            input_area: Some(chunks[2]),
            keybindings_area: chunks[3],
        }
    } else {
        AppLayout {
            filter_area: chunks[0],
            list_area: chunks[1],
            input_area: None,
            keybindings_area: chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_input() {
        let layout = create_layout(Rect::new(0, 0, 80, 24), false);
        assert!(layout.input_area.is_none());
        assert_eq!(layout.filter_area.height, 3);
        assert_eq!(layout.keybindings_area.height, 1);
    }

    #[test]
    fn test_layout_with_input() {
        let layout = create_layout(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.input_area.unwrap().height, 3);
    }
}
