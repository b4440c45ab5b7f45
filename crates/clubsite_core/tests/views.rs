use std::time::Duration;

use clubsite_core::{
    address_info, contact_cards, loop_track, normalize, panel_page_view, ContactChannel,
    ContactDefaults, DatasetKind, Marquee, PanelRoute, RawRecord,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn semester_page_shows_section_headings() {
    let records = vec![
        RawRecord::from_value("p", json!({ "Name": "P", "Order": 1 })).in_category("Executive Panel"),
        RawRecord::from_value("g", json!({ "Name": "G" })).in_category("General Members"),
    ];
    let route = PanelRoute::from_slug("fall-2024");

    let view = panel_page_view(&route, normalize(&records, DatasetKind::PanelMembers));

    assert_eq!(view.heading, "Fall 2024");
    assert_eq!(view.badge, "Leadership");
    assert_eq!(view.member_count(), 2);
    assert!(view.sections.iter().all(|section| section.show_heading));
}

#[test]
fn hall_of_fame_page_hides_its_heading() {
    let records = vec![RawRecord::from_value("h", json!({ "Name": "H" }))];
    let route = PanelRoute::from_slug("hall-of-fame");

    let view = panel_page_view(&route, normalize(&records, DatasetKind::HallOfFame));

    assert_eq!(view.badge, "Legends");
    assert_eq!(view.sections.len(), 1);
    assert!(!view.sections[0].show_heading);
}

#[test]
fn empty_panel_page_has_no_sections() {
    let view = panel_page_view(&PanelRoute::from_slug("spring-2030"), Vec::new());
    assert!(view.is_empty());
}

#[test]
fn contact_blocks_fill_missing_fields_from_defaults() {
    let defaults = ContactDefaults::default();
    let doc = RawRecord::from_value(
        "Contact_Info",
        json!({ "Email": "club@uni.edu", "Messenger_LinkText": "Say hi" }),
    );

    let cards = contact_cards(Some(&doc), &defaults);

    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].channel, ContactChannel::Email);
    assert_eq!(cards[0].link, "mailto:club@uni.edu");
    assert_eq!(cards[1].info, defaults.location);
    assert_eq!(cards[2].link_text, "Say hi");

    let address = address_info(None, &defaults);
    assert_eq!(address, defaults.address);
}

#[test]
fn marquee_wraps_and_pauses_without_reset() {
    let mut marquee = Marquee::new(64.0, 1920.0);

    assert_eq!(marquee.tick(Duration::from_secs(10)), 640.0);
    assert_eq!(marquee.tick(Duration::from_secs(20)), 0.0);
    assert_eq!(marquee.tick(Duration::from_millis(500)), 32.0);

    marquee.set_paused(true);
    assert_eq!(marquee.tick(Duration::from_secs(5)), 32.0);
    marquee.set_paused(false);
    assert_eq!(marquee.tick(Duration::from_secs(1)), 96.0);
}

#[test]
fn marquee_with_zero_width_stays_put() {
    let mut marquee = Marquee::new(64.0, 0.0);
    assert_eq!(marquee.tick(Duration::from_secs(3)), 0.0);
}

#[test]
fn marquee_ignores_non_finite_speed() {
    for speed in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut marquee = Marquee::new(speed, 1920.0);
        assert_eq!(marquee.tick(Duration::from_secs(2)), 0.0);
        assert_eq!(marquee.tick(Duration::from_secs(2)), 0.0);
    }
}

#[test]
fn loop_track_repeats_items_once() {
    assert_eq!(loop_track(&[1, 2, 3]), vec![1, 2, 3, 1, 2, 3]);
}
