//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub tabs: Rect,
    pub info: Rect,
    pub list: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, has_status: bool) -> MainLayout {
    let chunks = if has_status {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area)
    };

    let (status_area, help_area) = if has_status {
        (Some(chunks[3]), chunks[4])
    } else {
        (None, chunks[3])
    };

    MainLayout {
        tabs: chunks[0],
        info: chunks[1],
        list: chunks[2],
        status: status_area,
        help: help_area,
    }
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the right-anchored slide-over area for the detail panel
pub fn slide_over(area: Rect, percent_width: u16) -> Rect {
    let width = ((u32::from(area.width) * u32::from(percent_width)) / 100) as u16;
    let width = width.min(area.width);
    Rect::new(
        area.x + area.width - width,
        area.y,
        width,
        area.height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_over_is_right_anchored() {
        let area = Rect::new(0, 0, 100, 40);
        let panel = slide_over(area, 60);
        assert_eq!(panel.width, 60);
        assert_eq!(panel.x, 40);
        assert_eq!(panel.height, 40);
    }

    #[test]
    fn test_slide_over_full_width() {
        let area = Rect::new(0, 0, 80, 24);
        let panel = slide_over(area, 100);
        assert_eq!(panel, area);
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let popup = centered_popup(area, 50, 20);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 10);
    }

    #[test]
    fn test_main_layout_status_row() {
        let area = Rect::new(0, 0, 80, 30);
        let with_status = calculate_main_layout(area, true);
        assert!(with_status.status.is_some());

        let without = calculate_main_layout(area, false);
        assert!(without.status.is_none());
    }
}
