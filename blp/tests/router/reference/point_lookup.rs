use blp::{ColumnKey, Label, Options, Value};

use crate::helpers::{IBM, VOD, connected};

#[test]
fn single_security_single_field_is_one_cell() {
    let (mut svc, _) = connected();
    let t = svc.point_lookup(IBM, "PX_LAST", &Options::new()).unwrap();
    assert_eq!((t.height(), t.width()), (1, 1));
    assert_eq!(
        t.get(&Label::text(IBM), &ColumnKey::new("PX_LAST")),
        Some(&Value::Float(160.44))
    );
}

#[test]
fn rows_are_securities_and_columns_are_fields() {
    let (mut svc, _) = connected();
    let t = svc
        .point_lookup([IBM, VOD], ["NAME", "PX_LAST", "CRNCY"], &Options::new())
        .unwrap();
    assert_eq!(t.index(), &[Label::text(IBM), Label::text(VOD)]);
    let cols: Vec<_> = t.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(cols, ["NAME", "PX_LAST", "CRNCY"]);
    assert_eq!(
        t.get(&Label::text(VOD), &ColumnKey::new("CRNCY")),
        Some(&Value::from("GBp"))
    );
}

#[test]
fn field_not_returned_for_one_security_stays_missing() {
    let (mut svc, _) = connected();
    // EQY_SH_OUT only has data for IBM
    let t = svc
        .point_lookup([IBM, VOD], ["PX_LAST", "EQY_SH_OUT"], &Options::new())
        .unwrap();
    assert_eq!(t.height(), 2);
    let vod_shares = t.get(&Label::text(VOD), &ColumnKey::new("EQY_SH_OUT"));
    assert!(vod_shares.is_none_or(Value::is_missing));
}

#[test]
fn scalar_and_singleton_inputs_build_identical_tables() {
    let (mut svc, _) = connected();
    let a = svc.point_lookup(IBM, "NAME", &Options::new()).unwrap();
    let b = svc
        .point_lookup(vec![IBM.to_string()], &["NAME"][..], &Options::new())
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn options_are_sent_as_overrides_in_order() {
    let (mut svc, controller) = connected();
    let opts = Options::new()
        .with("EQY_FUND_CRNCY", "EUR")
        .with("BEST_FPERIOD_OVERRIDE", "1BF");
    svc.point_lookup(IBM, "PX_LAST", &opts).unwrap();

    let sent = controller.sent_requests();
    assert_eq!(sent.len(), 1);
    let ids: Vec<_> = sent[0].overrides().iter().map(|o| o.field_id.as_str()).collect();
    assert_eq!(ids, ["EQY_FUND_CRNCY", "BEST_FPERIOD_OVERRIDE"]);
}
