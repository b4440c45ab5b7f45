use clubsite_core::{group_sections, CategoryTable, DisplayItem, DEFAULT_SORT_KEY};
use pretty_assertions::assert_eq;

fn item(id: &str, category: Option<&str>, sort_key: i64) -> DisplayItem {
    let mut item = DisplayItem::new(id, id.to_uppercase(), sort_key);
    item.category = category.map(str::to_string);
    item
}

fn ids(items: &[DisplayItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn sorting_is_idempotent() {
    let table = CategoryTable::default();
    let input = vec![
        item("c", Some("General Members"), 3),
        item("a", Some("Executive Panel"), 2),
        item("b", Some("Executive Panel"), 2),
        item("d", None, DEFAULT_SORT_KEY),
    ];

    let once = table.classify_and_sort(input);
    let twice = table.classify_and_sort(once.clone());

    assert_eq!(ids(&once), vec!["a", "b", "c", "d"]);
    assert_eq!(once, twice);
}

#[test]
fn distinct_keys_sort_the_same_under_permutation() {
    let table = CategoryTable::default();
    let base = vec![
        item("x1", Some("Advisory Panel"), 2),
        item("x2", Some("Advisory Panel"), 1),
        item("y1", Some("Working Committee"), 4),
        item("y2", Some("Executive Panel"), 3),
    ];
    let mut reversed = base.clone();
    reversed.reverse();
    let mut rotated = base.clone();
    rotated.rotate_left(1);

    let expected = vec!["x2", "x1", "y2", "y1"];
    assert_eq!(ids(&table.classify_and_sort(base)), expected);
    assert_eq!(ids(&table.classify_and_sort(reversed)), expected);
    assert_eq!(ids(&table.classify_and_sort(rotated)), expected);
}

#[test]
fn equal_keys_keep_input_order() {
    let table = CategoryTable::default();
    let input = vec![
        item("first", Some("General Members"), DEFAULT_SORT_KEY),
        item("second", Some("General Members"), DEFAULT_SORT_KEY),
        item("third", Some("General Members"), DEFAULT_SORT_KEY),
    ];
    assert_eq!(ids(&table.classify_and_sort(input)), vec!["first", "second", "third"]);
}

#[test]
fn unranked_categories_trail_in_first_seen_order() {
    let table = CategoryTable::default();
    let input = vec![
        item("z", Some("Zeta Desk"), 1),
        item("m", Some("Media Cell"), 1),
        item("g", Some("General Members"), 50),
        item("z2", Some("Zeta Desk"), 0),
    ];

    let sorted = table.classify_and_sort(input);

    assert_eq!(ids(&sorted), vec!["g", "z2", "z", "m"]);
}

#[test]
fn unknown_names_never_survive() {
    let table = CategoryTable::default();
    let mut vacant = item("v", Some("Executive Panel"), 1);
    vacant.name = "Unknown".to_string();
    let mut generic = item("g", Some("Executive Panel"), 2);
    generic.generic = true;

    let sorted = table.classify_and_sort(vec![vacant, generic]);

    assert_eq!(ids(&sorted), vec!["g"]);
}

#[test]
fn sections_group_in_display_order() {
    let table = CategoryTable::default();
    let sorted = table.classify_and_sort(vec![
        item("o", None, 1),
        item("e", Some("Executive Panel"), 1),
        item("a", Some("Advisory Panel"), 1),
        item("e2", Some("Executive Panel"), 2),
    ]);

    let sections = group_sections(sorted);

    let titles: Vec<&str> = sections.iter().map(|(title, _)| title.as_str()).collect();
    assert_eq!(titles, vec!["Advisory Panel", "Executive Panel", "Other"]);
    assert_eq!(ids(&sections[1].1), vec!["e", "e2"]);
}
