//! Layout and view-reading helpers shared by the screens.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::domain::ports::PresentationPort;
use crate::infrastructure::view::{Element, ViewTree};

/// Creates a centered rect using a percentage of `r`.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Text of the element with `id`, empty when absent.
#[must_use]
pub fn text_of<'a>(view: &'a ViewTree, id: &str) -> &'a str {
    view.by_id(id).map_or("", Element::text)
}

/// Whether the element with `id` exists and is not hidden.
#[must_use]
pub fn is_shown(view: &ViewTree, id: &str) -> bool {
    view.by_id(id).is_some_and(Element::is_visible)
}

/// Text of the first descendant of `id` matching `selector`.
#[must_use]
pub fn descendant_text<'a>(view: &'a ViewTree, id: &str, selector: &str) -> &'a str {
    view.get_element(id)
        .and_then(|el| view.query_descendant(el, selector))
        .and_then(|el| view.element(el))
        .map_or("", Element::text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::view::Node;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);

        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
    }

    #[test]
    fn test_view_helpers() {
        let mut view = ViewTree::new();
        let card = view.append(None, Node::new().id("card"));
        view.append(Some(card), Node::new().class("title").text("Box 1"));
        view.append(None, Node::new().id("gone").hidden());

        assert_eq!(descendant_text(&view, "card", ".title"), "Box 1");
        assert_eq!(descendant_text(&view, "card", ".missing"), "");
        assert_eq!(text_of(&view, "nope"), "");
        assert!(is_shown(&view, "card"));
        assert!(!is_shown(&view, "gone"));
    }
}
