//! Entry validation against marker snapshots

use chart_risk::marker::{Line, Marker, MarkerKind, MarkerSnapshot};
use chart_risk::order::TradeType;
use chart_risk::risk::{has_opposing_take_profit_zone, is_entry_anchored, EntryGate};
use rust_decimal_macros::dec;

use super::eurusd;

const SNAPSHOT: &str = r#"{
    "markers": [
        {"type": "line", "y": "1.2009", "kind": "support"},
        {"type": "line", "y": "1.2150", "kind": "resistance"},
        {"type": "zone", "y1": "1.2200", "y2": "1.2180",
         "time1": "2024-03-04T08:00:00Z", "time2": "2024-03-01T08:00:00Z",
         "kind": "resistance"},
        {"type": "zone", "y1": "1.1850", "y2": "1.1880",
         "time1": "2024-03-01T08:00:00Z", "time2": "2024-03-04T08:00:00Z",
         "kind": "support"},
        {"type": "line", "y": "1.2100", "kind": "neutral"}
    ]
}"#;

#[test]
fn test_buy_anchored_to_support_line_from_snapshot() {
    let snapshot = MarkerSnapshot::from_json(SNAPSHOT).unwrap();
    assert!(is_entry_anchored(
        TradeType::Buy,
        dec!(1.2000),
        dec!(10),
        &eurusd(),
        snapshot.as_slice()
    ));
}

#[test]
fn test_sell_anchored_to_resistance_zone_from_snapshot() {
    let snapshot = MarkerSnapshot::from_json(SNAPSHOT).unwrap();
    // zone floor 1.2180 is 5 pips above the target
    assert!(is_entry_anchored(
        TradeType::Sell,
        dec!(1.2175),
        dec!(10),
        &eurusd(),
        snapshot.as_slice()
    ));
    // neutral line at 1.2100 does not count
    assert!(!is_entry_anchored(
        TradeType::Sell,
        dec!(1.2100),
        dec!(10),
        &eurusd(),
        snapshot.as_slice()
    ));
}

#[test]
fn test_scenario_ten_pip_tolerance() {
    let instrument = eurusd();
    let near = [Marker::Line(Line::new(dec!(1.2009), MarkerKind::Support))];
    let far = [Marker::Line(Line::new(dec!(1.2012), MarkerKind::Support))];

    assert!(is_entry_anchored(TradeType::Buy, dec!(1.2000), dec!(10), &instrument, &near));
    assert!(!is_entry_anchored(TradeType::Buy, dec!(1.2000), dec!(10), &instrument, &far));
}

#[test]
fn test_take_profit_zones_from_snapshot() {
    let snapshot = MarkerSnapshot::from_json(SNAPSHOT).unwrap();
    let markers = snapshot.as_slice();

    assert!(has_opposing_take_profit_zone(TradeType::Buy, dec!(1.2002), dec!(1.2000), markers));
    assert!(has_opposing_take_profit_zone(TradeType::Sell, dec!(1.2002), dec!(1.2000), markers));

    // market already inside the resistance zone
    assert!(!has_opposing_take_profit_zone(TradeType::Buy, dec!(1.2190), dec!(1.2188), markers));
    // market already inside the support zone
    assert!(!has_opposing_take_profit_zone(TradeType::Sell, dec!(1.1862), dec!(1.1860), markers));
}

#[test]
fn test_entry_gate_with_trade_type_parsed_from_text() {
    let snapshot = MarkerSnapshot::from_json(SNAPSHOT).unwrap();
    let gate = EntryGate::new(dec!(10));

    let side: TradeType = "Buy".parse().unwrap();
    assert!(gate.allows(side, dec!(1.2000), &eurusd(), snapshot.as_slice()));
    assert!("flat".parse::<TradeType>().is_err());
}
