use blp::{ColumnKey, Label, Options, Value};

use crate::helpers::{IBM, JPM, VOD, connected, ymd};

#[test]
fn one_row_per_record_labeled_by_security() {
    let (mut svc, _) = connected();
    let t = svc
        .bulk_lookup([IBM, VOD], "DVD_HIST_ALL", &Options::new())
        .unwrap();
    assert_eq!(t.height(), 4);
    let labels: Vec<_> = t.index().iter().map(ToString::to_string).collect();
    assert_eq!(labels, [IBM, IBM, IBM, VOD]);
    assert_eq!(t.columns()[0], ColumnKey::new("Declared Date"));

    let ex_dates = t.column(&ColumnKey::new("Ex-Date")).unwrap();
    assert_eq!(ex_dates[0], &Value::Date(ymd(2015, 2, 6)));
    let amounts = t.column(&ColumnKey::new("Dividend Amount")).unwrap();
    assert_eq!(amounts[3], &Value::Float(3.53));
}

#[test]
fn securities_without_records_are_left_out() {
    let (mut svc, _) = connected();
    // VOD has no adjustment factors
    let t = svc
        .bulk_lookup([IBM, VOD, JPM], "EQY_DVD_ADJUST_FACT", &Options::new())
        .unwrap();
    assert_eq!(t.height(), 3);
    assert!(!t.index().contains(&Label::text(VOD)));
}

#[test]
fn no_records_at_all_is_an_empty_table() {
    let (mut svc, _) = connected();
    let t = svc
        .bulk_lookup(VOD, "EQY_DVD_ADJUST_FACT", &Options::new())
        .unwrap();
    assert!(t.is_empty());
    assert_eq!(t.to_string(), "Empty table\n");
}
