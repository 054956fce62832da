//! Presentation port definition.

use crate::domain::errors::ViewError;

/// Handle to a visual element owned by a presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef(usize);

impl ElementRef {
    /// Wraps an adapter-specific index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the adapter-specific index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Port for the visual elements the controllers mutate.
///
/// Selectors are either `#id` or `.class`; a bare word is treated as a class.
pub trait PresentationPort: Send {
    /// Looks up an element by id.
    fn get_element(&self, id: &str) -> Option<ElementRef>;

    /// Returns every element matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<ElementRef>;

    /// Returns the first descendant of `element` matching `selector`.
    fn query_descendant(&self, element: ElementRef, selector: &str) -> Option<ElementRef>;

    /// Replaces the element's own text.
    fn set_text(&mut self, element: ElementRef, text: &str);

    /// Returns the text of the element and all its descendants.
    ///
    /// Non-empty texts are joined in document order with a single space, so
    /// adjacent elements never run together into one word. A query that
    /// contains the space can still span two elements.
    fn text_content(&self, element: ElementRef) -> String;

    /// Replaces the element's icon, `None` removes it.
    fn set_icon(&mut self, element: ElementRef, icon: Option<&str>);

    /// Shows or hides the element.
    fn set_visible(&mut self, element: ElementRef, visible: bool);

    /// Sets a background color token, `None` resets to the stylesheet value.
    fn set_background(&mut self, element: ElementRef, color: Option<&str>);

    /// Sets opacity, `None` resets to fully opaque.
    fn set_opacity(&mut self, element: ElementRef, opacity: Option<f32>);

    /// Enables or disables pointer interaction.
    fn set_interactive(&mut self, element: ElementRef, interactive: bool);

    /// Sets the disabled attribute of a control.
    fn set_disabled(&mut self, element: ElementRef, disabled: bool);

    /// Checks class membership.
    fn has_class(&self, element: ElementRef, class: &str) -> bool;

    /// Adds a class.
    fn add_class(&mut self, element: ElementRef, class: &str);

    /// Removes a class.
    fn remove_class(&mut self, element: ElementRef, class: &str);

    /// Returns the current value of an input.
    fn value(&self, element: ElementRef) -> String;

    /// Replaces the value of an input.
    fn set_value(&mut self, element: ElementRef, value: &str);

    /// Sets the vertical scroll offset.
    fn set_scroll_top(&mut self, element: ElementRef, offset: u32);

    /// Returns the first element matching `selector`.
    fn query_first(&self, selector: &str) -> Option<ElementRef> {
        self.query_all(selector).into_iter().next()
    }

    /// Flips a class, returns whether it is now present.
    fn toggle_class(&mut self, element: ElementRef, class: &str) -> bool {
        if self.has_class(element, class) {
            self.remove_class(element, class);
            false
        } else {
            self.add_class(element, class);
            true
        }
    }

    /// Adds or removes a class depending on `on`.
    fn set_class(&mut self, element: ElementRef, class: &str, on: bool) {
        if on {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }

    /// Returns the input value with surrounding whitespace removed.
    fn read_trimmed_value(&self, element: ElementRef) -> String {
        self.value(element).trim().to_string()
    }

    /// Looks up an element by id, failing when it is absent.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if no element has this id.
    fn require(&self, id: &str) -> Result<ElementRef, ViewError> {
        self.get_element(id).ok_or_else(|| ViewError::missing(id))
    }

    /// Looks up the first element matching `selector`, failing when none does.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if nothing matches.
    fn require_first(&self, selector: &str) -> Result<ElementRef, ViewError> {
        self.query_first(selector)
            .ok_or_else(|| ViewError::missing(selector))
    }
}
