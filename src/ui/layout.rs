use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Content-mode regions: header, search box, book list, footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let search_height = 3.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(
        area.height
            .saturating_sub(header_height + search_height),
    );
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let search = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: search_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let list = Rect {
        x: area.x,
        y: area.y + header_height + search_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + search_height + footer_height),
    };
    (header, search, list, footer)
}

/// Centered region for the loading and error panels.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (header, search, list, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(search.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(list.height, 24 - 9);
        assert_eq!(search.y, header.y + header.height);
        assert_eq!(list.y, search.y + search.height);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 2,
        };
        let (header, search, list, _footer) = layout_regions(area);
        assert_eq!(header.height, 2);
        assert_eq!(search.height, 0);
        assert_eq!(list.height, 0);
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 40,
        };
        let centered = centered_rect(60, 20, area);
        assert!(centered.width <= area.width);
        assert!(centered.height <= area.height);
        assert!(centered.x >= area.x && centered.y >= area.y);
    }
}
