use blp::{
    BlpService, ColumnKey, HistoricalDefaults, Label, Options, PeriodicitySelection, Value,
};
use blp_mock::{MockTransport, NODATA};

use crate::helpers::{IBM, JPM, VOD, connected, ymd};

#[test]
fn columns_are_grouped_by_security_over_a_sorted_date_index() {
    let (mut svc, _) = connected();
    let t = svc
        .historical_lookup(
            [IBM, JPM],
            ["PX_LAST", "PX_VOLUME"],
            "20150101",
            "20150109",
            &Options::new(),
        )
        .unwrap();

    let expected: Vec<Label> = [1, 2, 5, 6, 7, 8, 9]
        .into_iter()
        .map(|d| Label::Date(ymd(2015, 1, d)))
        .collect();
    assert_eq!(t.index(), expected.as_slice());
    assert_eq!(
        t.columns(),
        &[
            ColumnKey::grouped(IBM, "PX_LAST"),
            ColumnKey::grouped(IBM, "PX_VOLUME"),
            ColumnKey::grouped(JPM, "PX_LAST"),
            ColumnKey::grouped(JPM, "PX_VOLUME"),
        ]
    );
}

#[test]
fn no_history_placeholders_become_missing() {
    let (mut svc, _) = connected();
    let t = svc
        .historical_lookup(JPM, "PX_VOLUME", "20150101", "20150102", &Options::new())
        .unwrap();
    let col = ColumnKey::grouped(JPM, "PX_VOLUME");
    assert_eq!(t.get(&Label::Date(ymd(2015, 1, 1)), &col), Some(&Value::Missing));
    assert!(matches!(t.get(&Label::Date(ymd(2015, 1, 2)), &col), Some(Value::Int(_))));
    assert!(t.rows().all(|(_, cells)| cells.iter().all(|v| v.as_str() != Some(blp::NO_HISTORY))));
}

#[test]
fn range_without_observations_is_an_empty_table() {
    let (mut svc, _) = connected();
    // a weekend
    let t = svc
        .historical_lookup(IBM, "PX_LAST", "20150103", "20150104", &Options::new())
        .unwrap();
    assert!(t.is_empty());
}

#[test]
fn securities_without_data_do_not_shift_the_others() {
    let (mut svc, _) = connected();
    let t = svc
        .historical_lookup([NODATA, VOD], "PX_LAST", "20150105", "20150106", &Options::new())
        .unwrap();
    assert_eq!(t.columns(), &[ColumnKey::grouped(VOD, "PX_LAST")]);
    assert_eq!(t.height(), 2);
}

#[test]
fn date_values_and_strings_are_interchangeable() {
    let (mut svc, controller) = connected();
    let a = svc
        .historical_lookup(IBM, "PX_LAST", ymd(2015, 1, 5), ymd(2015, 1, 9), &Options::new())
        .unwrap();
    let b = svc
        .historical_lookup(IBM, "PX_LAST", "20150105", "20150109", &Options::new())
        .unwrap();
    assert_eq!(a, b);
    let sent = controller.sent_requests();
    assert_eq!(sent[0].parameter("startDate"), Some(&Value::from("20150105")));
}

#[test]
fn caller_options_override_defaults() {
    let (mut svc, controller) = connected();
    let weekly = Options::new().with("periodicitySelection", "WEEKLY");
    let t = svc
        .historical_lookup(IBM, "PX_LAST", "20150101", "20150131", &weekly)
        .unwrap();
    // Fridays only
    assert_eq!(t.height(), 5);
    let sent = controller.sent_requests();
    assert_eq!(sent[0].parameter("periodicitySelection"), Some(&Value::from("WEEKLY")));
    assert_eq!(sent[0].parameter("adjustmentSplit"), Some(&Value::Bool(true)));
}

#[test]
fn builder_defaults_apply_to_every_request() {
    let (transport, controller) = MockTransport::new_with_controller();
    let defaults = HistoricalDefaults {
        periodicity_selection: PeriodicitySelection::Monthly,
        adjustment_split: false,
        ..HistoricalDefaults::default()
    };
    let mut svc = BlpService::builder(transport)
        .historical_defaults(defaults)
        .connect()
        .unwrap();
    let t = svc
        .historical_lookup(IBM, "PX_LAST", "20150101", "20150331", &Options::new())
        .unwrap();
    let expected = [ymd(2015, 1, 30), ymd(2015, 2, 27), ymd(2015, 3, 31)].map(Label::Date);
    assert_eq!(t.index(), expected.as_slice());
    let sent = controller.sent_requests();
    assert_eq!(sent[0].parameter("adjustmentSplit"), Some(&Value::Bool(false)));
}

#[test]
fn repeated_security_yields_one_column_group() {
    let (mut svc, _) = connected();
    let t = svc
        .historical_lookup([IBM, IBM], "PX_LAST", "20150105", "20150106", &Options::new())
        .unwrap();
    assert_eq!(t.columns(), &[ColumnKey::grouped(IBM, "PX_LAST")]);
    assert_eq!(t.height(), 2);
}
