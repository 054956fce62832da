//! Shell markup and demo data used to seed the element tree.

use crate::domain::elements::{self, home, login, navigate, packages, settings};
use crate::domain::ports::ElementRef;
use crate::domain::{
    LoginMode, PackageCard, PackageStatus, PackageTab, ScreenId, SettingKind, SettingRow,
};

use super::view_tree::{Node, ViewTree};

/// Packages assigned to the demo driver.
#[must_use]
pub fn demo_packages() -> Vec<PackageCard> {
    vec![
        PackageCard::new(
            "pkg-card-1",
            PackageStatus::Active,
            "TRK-4471-9920",
            "1420 Market St, San Francisco",
        ),
        PackageCard::new(
            "pkg-card-2",
            PackageStatus::Active,
            "TRK-4471-9921",
            "88 Mission St, Apt 5B",
        ),
        PackageCard::new(
            "pkg-card-3",
            PackageStatus::Pending,
            "TRK-4471-9935",
            "300 Howard St, Floor 2",
        ),
        PackageCard::new(
            "pkg-card-4",
            PackageStatus::Active,
            "TRK-4471-9940",
            "55 Hawthorne St",
        ),
        PackageCard::new(
            "pkg-card-5",
            PackageStatus::Pending,
            "TRK-4471-9952",
            "701 Folsom St, Unit 12",
        ),
    ]
}

/// Detail line of a demo card.
fn card_detail(card: &PackageCard) -> String {
    match card.element_id() {
        "pkg-card-1" => "Assigned to DRV-2026-456 · Signature required".to_string(),
        "pkg-card-3" => "Loading bay 4 · Fragile".to_string(),
        _ => "Leave at front desk".to_string(),
    }
}

/// Preference rows on the settings screen.
#[must_use]
pub fn demo_settings() -> Vec<SettingRow> {
    vec![
        SettingRow::new(
            "setting-notifications",
            "Push Notifications",
            SettingKind::Standard,
            true,
        ),
        SettingRow::new("setting-sound", "Sound Alerts", SettingKind::Standard, true),
        SettingRow::new(
            "setting-location",
            "Location Sharing",
            SettingKind::Standard,
            true,
        ),
        SettingRow::new("setting-dark-mode", "Dark Mode", SettingKind::DarkMode, false),
    ]
}

/// Builds the five-screen shell with the given data.
#[must_use]
pub fn build_shell_view(cards: &[PackageCard], rows: &[SettingRow]) -> ViewTree {
    let mut tree = ViewTree::new();
    let app = tree.append(None, Node::new().id("app"));

    build_login(&mut tree, app);
    build_home(&mut tree, app);
    build_packages(&mut tree, app, cards);
    build_navigate(&mut tree, app);
    build_settings(&mut tree, app, rows);

    tree
}

fn screen(tree: &mut ViewTree, app: ElementRef, id: ScreenId) -> ElementRef {
    let mut node = Node::new().id(id.element_id()).class(elements::SCREEN);
    if id != ScreenId::Login {
        node = node.class(elements::HIDDEN);
    }
    tree.append(Some(app), node)
}

fn build_login(tree: &mut ViewTree, app: ElementRef) {
    let root = screen(tree, app, ScreenId::Login);
    let mode = LoginMode::default();

    tree.append(Some(root), Node::new().class("brand").text("RouteOptimize"));
    let toggles = tree.append(Some(root), Node::new().class("mode-toggle"));
    tree.append(
        Some(toggles),
        Node::new()
            .id(login::DRIVER_TOGGLE)
            .class(elements::ACTIVE)
            .text("Driver"),
    );
    tree.append(
        Some(toggles),
        Node::new().id(login::ADMIN_TOGGLE).text("Admin"),
    );
    tree.append(
        Some(root),
        Node::new().id(login::EMAIL).value(mode.default_email()),
    );
    tree.append(Some(root), Node::new().id(login::PASSWORD));
    let button = tree.append(Some(root), Node::new().id(login::SUBMIT));
    tree.append(
        Some(button),
        Node::new()
            .id(login::SUBMIT_LABEL)
            .text(mode.submit_label()),
    );
}

fn build_home(tree: &mut ViewTree, app: ElementRef) {
    let root = screen(tree, app, ScreenId::Home);
    let scroll = tree.append(Some(root), Node::new().class("scroll"));

    let header = tree.append(Some(scroll), Node::new().class("home-header"));
    tree.append(Some(header), Node::new().id(home::AVATAR).text("JD"));
    tree.append(
        Some(header),
        Node::new().id(home::GREETING).text("Good morning,"),
    );
    tree.append(Some(header), Node::new().id(home::NAME).text("John Driver"));

    tree.append(
        Some(scroll),
        Node::new()
            .id(home::ADMIN_BANNER)
            .text("Fleet overview: 14 drivers on route")
            .hidden(),
    );

    let stats = tree.append(Some(scroll), Node::new().id(home::DRIVER_STATS));
    for stat in ["12 Stops", "48 Packages", "86 mi"] {
        tree.append(Some(stats), Node::new().class("stat").text(stat));
    }
}

fn build_packages(tree: &mut ViewTree, app: ElementRef, cards: &[PackageCard]) {
    let root = screen(tree, app, ScreenId::Packages);
    tree.append(Some(root), Node::new().id(packages::SEARCH));

    let tabs = tree.append(Some(root), Node::new().class("pkg-tabs"));
    for tab in PackageTab::ALL {
        let mut node = Node::new()
            .id(tab.element_id())
            .class("pkg-tab")
            .text(tab.title());
        if tab == PackageTab::default() {
            node = node.class(elements::ACTIVE);
        }
        tree.append(Some(tabs), node);
    }

    let scroll = tree.append(Some(root), Node::new().class("scroll"));
    for card in cards {
        let element = tree.append(
            Some(scroll),
            Node::new().id(card.element_id()).class("pkg-card"),
        );
        tree.append(
            Some(element),
            Node::new().class("pkg-tracking").text(card.tracking()),
        );
        tree.append(
            Some(element),
            Node::new().class("pkg-address").text(card.address()),
        );
        tree.append(
            Some(element),
            Node::new().class("pkg-detail").text(card_detail(card)),
        );
    }
}

fn build_navigate(tree: &mut ViewTree, app: ElementRef) {
    let root = screen(tree, app, ScreenId::Navigate);
    let scroll = tree.append(Some(root), Node::new().class("scroll"));
    tree.append(
        Some(scroll),
        Node::new()
            .id(navigate::STOP)
            .text("Stop 3 of 12 · 1420 Market St"),
    );
    tree.append(
        Some(scroll),
        Node::new().class("nav-eta").text("ETA 4 min · 0.8 mi"),
    );
    tree.append(
        Some(scroll),
        Node::new()
            .class("nav-btn-arrived")
            .icon(navigate::ARRIVED_ICON)
            .text(navigate::ARRIVED_LABEL),
    );
}

fn build_settings(tree: &mut ViewTree, app: ElementRef, rows: &[SettingRow]) {
    let root = screen(tree, app, ScreenId::Settings);
    let scroll = tree.append(Some(root), Node::new().class("scroll"));

    let profile = tree.append(Some(scroll), Node::new().class("profile-card"));
    tree.append(Some(profile), Node::new().id(settings::AVATAR).text("JD"));
    tree.append(
        Some(profile),
        Node::new().id(settings::NAME).text("John Driver"),
    );
    tree.append(
        Some(profile),
        Node::new()
            .id(settings::EMAIL)
            .text(LoginMode::Driver.default_email()),
    );
    tree.append(
        Some(profile),
        Node::new()
            .id(settings::ROLE)
            .text("Driver ID: DRV-2026-456"),
    );

    for row in rows {
        let element = tree.append(
            Some(scroll),
            Node::new().id(row.element_id()).class(settings::ROW),
        );
        tree.append(Some(element), Node::new().class("label").text(row.label()));
        let mut toggle = Node::new().class("toggle");
        if row.is_on() {
            toggle = toggle.class(elements::ON);
        }
        tree.append(Some(element), toggle);
    }

    tree.append(
        Some(scroll),
        Node::new().id(settings::LOGOUT).text("Log Out"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PresentationPort;

    #[test]
    fn test_every_screen_exists_and_only_login_is_shown() {
        let tree = build_shell_view(&demo_packages(), &demo_settings());
        for screen in crate::domain::SCREEN_ORDER {
            let element = tree.by_id(&screen.element_id()).expect("screen present");
            assert_eq!(
                element.has_class(elements::HIDDEN),
                screen != ScreenId::Login,
                "{screen}"
            );
        }
    }

    #[test]
    fn test_cards_and_rows_are_rendered() {
        let cards = demo_packages();
        let rows = demo_settings();
        let tree = build_shell_view(&cards, &rows);

        assert_eq!(tree.query_all(packages::CARD_SELECTOR).len(), cards.len());
        assert_eq!(tree.query_all(".setting-row").len(), rows.len());
        assert!(tree.query_first(navigate::ARRIVED_SELECTOR).is_some());
        assert!(
            cards
                .iter()
                .all(|c| c.status() != PackageStatus::Completed)
        );
    }
}
