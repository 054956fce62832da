//! Package list filtering and expansion.

use tracing::debug;

use crate::domain::elements::{ACTIVE, OPEN, packages};
use crate::domain::entities::{PackageCard, PackageTab};
use crate::domain::errors::ViewError;
use crate::domain::ports::{ElementRef, PresentationPort};

/// Filters the package cards by status tab or free text.
#[derive(Debug, Clone)]
pub struct PackageFilter {
    cards: Vec<PackageCard>,
    tab: PackageTab,
}

impl PackageFilter {
    /// Creates a filter over `cards` with the default tab selected.
    #[must_use]
    pub fn new(cards: Vec<PackageCard>) -> Self {
        Self {
            cards,
            tab: PackageTab::default(),
        }
    }

    /// Returns the cards.
    #[must_use]
    pub fn cards(&self) -> &[PackageCard] {
        &self.cards
    }

    /// Returns the last selected tab.
    #[must_use]
    pub const fn tab(&self) -> PackageTab {
        self.tab
    }

    fn resolve_cards(&self, view: &dyn PresentationPort) -> Result<Vec<ElementRef>, ViewError> {
        self.cards
            .iter()
            .map(|card| view.require(card.element_id()))
            .collect()
    }

    /// Selects `tab` and shows only the cards whose status matches it.
    ///
    /// `control` becomes the only tab marked active.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if the control or a card is absent.
    pub fn set_tab(
        &mut self,
        view: &mut dyn PresentationPort,
        tab: PackageTab,
        control: &str,
    ) -> Result<usize, ViewError> {
        let control = view.require(control)?;
        let elements = self.resolve_cards(view)?;

        for other in view.query_all(packages::TAB_SELECTOR) {
            view.remove_class(other, ACTIVE);
        }
        view.add_class(control, ACTIVE);

        let mut shown = 0;
        for (card, element) in self.cards.iter().zip(elements) {
            let visible = tab.matches(card.status());
            view.set_visible(element, visible);
            shown += usize::from(visible);
        }

        self.tab = tab;
        debug!(tab = tab.title(), shown, "Package tab selected");
        Ok(shown)
    }

    /// Flips the detail panel of one card. Returns the new expanded state.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if the card is unknown or absent.
    pub fn toggle_expanded(
        &mut self,
        view: &mut dyn PresentationPort,
        element_id: &str,
    ) -> Result<bool, ViewError> {
        let element = view.require(element_id)?;
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.element_id() == element_id)
            .ok_or_else(|| ViewError::missing(element_id))?;

        let expanded = card.toggle_expanded();
        view.set_class(element, OPEN, expanded);
        debug!(card = element_id, expanded, "Package card toggled");
        Ok(expanded)
    }

    /// Shows cards whose rendered text contains `query`, ignoring case.
    ///
    /// # Errors
    /// Returns `ViewError::MissingElement` if a card is absent.
    pub fn filter_by_text(
        &self,
        view: &mut dyn PresentationPort,
        query: &str,
    ) -> Result<usize, ViewError> {
        let query = query.to_lowercase();
        let elements = self.resolve_cards(view)?;

        let mut shown = 0;
        for element in elements {
            let visible = view.text_content(element).to_lowercase().contains(&query);
            view.set_visible(element, visible);
            shown += usize::from(visible);
        }

        debug!(query = %query, shown, "Packages filtered");
        Ok(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PackageStatus;
    use crate::infrastructure::view::{ViewTree, build_shell_view, demo_packages, demo_settings};

    fn setup() -> (PackageFilter, ViewTree) {
        let cards = demo_packages();
        let view = build_shell_view(&cards, &demo_settings());
        (PackageFilter::new(cards), view)
    }

    fn visible_ids(filter: &PackageFilter, view: &ViewTree) -> Vec<String> {
        filter
            .cards()
            .iter()
            .filter(|c| view.by_id(c.element_id()).unwrap().is_visible())
            .map(|c| c.element_id().to_string())
            .collect()
    }

    #[test]
    fn test_active_tab_shows_only_active_cards() {
        let (mut filter, mut view) = setup();

        let shown = filter
            .set_tab(&mut view, PackageTab::Active, "pkg-tab-active")
            .unwrap();

        let visible = visible_ids(&filter, &view);
        assert_eq!(shown, visible.len());
        for card in filter.cards() {
            assert_eq!(
                visible.contains(&card.element_id().to_string()),
                card.status() == PackageStatus::Active
            );
        }
    }

    #[test]
    fn test_tab_control_is_exclusively_active() {
        let (mut filter, mut view) = setup();

        filter
            .set_tab(&mut view, PackageTab::Pending, "pkg-tab-pending")
            .unwrap();

        assert!(view.by_id("pkg-tab-pending").unwrap().has_class(ACTIVE));
        assert!(!view.by_id("pkg-tab-active").unwrap().has_class(ACTIVE));
        assert!(!view.by_id("pkg-tab-completed").unwrap().has_class(ACTIVE));
        assert_eq!(filter.tab(), PackageTab::Pending);
    }

    #[test]
    fn test_completed_tab_is_empty_for_demo_data() {
        let (mut filter, mut view) = setup();

        let shown = filter
            .set_tab(&mut view, PackageTab::Completed, "pkg-tab-completed")
            .unwrap();

        assert_eq!(shown, 0);
        assert!(visible_ids(&filter, &view).is_empty());
    }

    #[test]
    fn test_completed_tab_matches_completed_data() {
        let mut cards = demo_packages();
        cards.push(PackageCard::new(
            "pkg-card-9",
            PackageStatus::Completed,
            "TRK-0000-0001",
            "1 Done Way",
        ));
        let mut view = build_shell_view(&cards, &demo_settings());
        let mut filter = PackageFilter::new(cards);

        let shown = filter
            .set_tab(&mut view, PackageTab::Completed, "pkg-tab-completed")
            .unwrap();

        assert_eq!(shown, 1);
        assert_eq!(visible_ids(&filter, &view), vec!["pkg-card-9".to_string()]);
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let (filter, mut view) = setup();

        let shown = filter.filter_by_text(&mut view, "drv-2026").unwrap();

        assert_eq!(shown, 1);
        assert_eq!(visible_ids(&filter, &view), vec!["pkg-card-1".to_string()]);
    }

    #[test]
    fn test_empty_query_shows_all() {
        let (filter, mut view) = setup();
        filter.filter_by_text(&mut view, "no such package").unwrap();
        assert!(visible_ids(&filter, &view).is_empty());

        let shown = filter.filter_by_text(&mut view, "").unwrap();

        assert_eq!(shown, filter.cards().len());
    }

    #[test]
    fn test_toggle_expanded_is_independent_per_card() {
        let (mut filter, mut view) = setup();

        assert!(filter.toggle_expanded(&mut view, "pkg-card-1").unwrap());
        assert!(filter.toggle_expanded(&mut view, "pkg-card-2").unwrap());

        assert!(view.by_id("pkg-card-1").unwrap().has_class(OPEN));
        assert!(view.by_id("pkg-card-2").unwrap().has_class(OPEN));

        assert!(!filter.toggle_expanded(&mut view, "pkg-card-1").unwrap());
        assert!(!view.by_id("pkg-card-1").unwrap().has_class(OPEN));
        assert!(filter.cards()[1].is_expanded());
    }

    #[test]
    fn test_toggle_unknown_card_fails() {
        let (mut filter, mut view) = setup();
        assert!(filter.toggle_expanded(&mut view, "pkg-card-42").is_err());
    }
}
