use fuzzy_era::{
    DateError, DateRange, Era, EventDate, FuzzyDate, SortValue, parse_event_date,
};

fn sort_value(text: &str) -> SortValue {
    parse_event_date(text).unwrap().sort_value()
}

#[test]
fn open_bounds_sit_a_tenth_outside_their_anchor() {
    assert_eq!(sort_value("1 Jan 1 BCE"), SortValue::from_tenths(0));
    assert_eq!(sort_value("< 1 Jan 1 BCE"), SortValue::from_tenths(-1));
    assert_eq!(sort_value("> 1 Jan 1 BCE"), SortValue::from_tenths(1));
    assert_eq!(sort_value("1 Jan 1 BCE - 1 Jan 1000 CE"), SortValue::from_tenths(1));
}

#[test]
fn sort_value_scales_anchor_days_exactly() {
    assert_eq!(sort_value("1 Jan 1 CE"), SortValue::from_days(365));
    assert_eq!(sort_value("< 1 Jan 9 BCE").to_string(), "-2921.1");
    assert_eq!(sort_value("> 1 Jan 5 CE").to_string(), "1826.1");
}

#[test]
fn range_orders_like_after_on_the_same_day() {
    let after = parse_event_date("> 15 Mar 44 BCE").unwrap();
    let range = parse_event_date("15 Mar 44 BCE - 17 Mar 44 BCE").unwrap();
    let specific = parse_event_date("15 Mar 44 BCE").unwrap();
    let before = parse_event_date("< 15 Mar 44 BCE").unwrap();
    assert_eq!(after.sort_value(), range.sort_value());
    assert!(before.sort_value() < specific.sort_value());
    assert!(specific.sort_value() < after.sort_value());
}

#[test]
fn between_rejects_inverted_endpoints() {
    let early = FuzzyDate::from_year(44, Era::Bce).unwrap();
    let late = FuzzyDate::from_year(1, Era::Ce).unwrap();
    assert!(EventDate::between(early, late).is_ok());
    assert!(EventDate::between(early, early).is_ok());
    assert_eq!(EventDate::between(late, early), Err(DateError::InvertedRange));
    assert_eq!(
        parse_event_date("1 CE - 44 BCE"),
        Err(DateError::InvertedRange)
    );
}

#[test]
fn between_compares_by_first_covered_day() {
    // The year starts before the day it contains, so this range is valid.
    let year = FuzzyDate::from_year(2000, Era::Ce).unwrap();
    let day = FuzzyDate::from_day(1, 1, 2000, Era::Ce).unwrap();
    assert!(EventDate::between(year, day).is_ok());
    assert!(EventDate::between(day, year).is_ok());
}

#[test]
fn displays_each_variant() {
    let d = FuzzyDate::from_day(5, 1, 32, Era::Bce).unwrap();
    let last = FuzzyDate::from_month(6, 32, Era::Bce).unwrap();
    assert_eq!(EventDate::specific(d).to_string(), "05 Jan 32 BCE");
    assert_eq!(EventDate::before(d).to_string(), "< 05 Jan 32 BCE");
    assert_eq!(EventDate::after(d).to_string(), "> 05 Jan 32 BCE");
    assert_eq!(
        EventDate::between(d, last).unwrap().to_string(),
        "05 Jan 32 BCE - Jun 32 BCE"
    );
}

#[test]
fn anchor_and_range_accessors() {
    let first = FuzzyDate::from_month(3, 44, Era::Bce).unwrap();
    let last = FuzzyDate::from_year(30, Era::Bce).unwrap();
    let event = EventDate::between(first, last).unwrap();
    assert_eq!(event.anchor(), &first);

    let range = DateRange::new(first, last).unwrap();
    assert_eq!(range.first(), &first);
    assert_eq!(range.last(), &last);
    assert!(range.contains(&FuzzyDate::from_year(40, Era::Bce).unwrap()));
    assert!(!range.contains(&FuzzyDate::from_year(45, Era::Bce).unwrap()));
}

#[test]
fn stable_sort_keeps_input_order_on_ties() {
    let texts = ["> 1 CE", "1 CE - 5 CE", "< 1 CE", "1 CE"];
    let mut events: Vec<(usize, EventDate)> = texts
        .iter()
        .map(|t| parse_event_date(t).unwrap())
        .enumerate()
        .collect();
    events.sort_by(|a, b| a.1.cmp_chronological(&b.1));
    let order: Vec<usize> = events.iter().map(|(i, _)| *i).collect();
    assert_eq!(order, [2, 3, 0, 1]);
}
