use super::*;

#[test]
fn default_is_no_delay() {
    assert_eq!(RevealSpec::default().delay_ms, 0);
    assert_eq!(RevealSpec::from_attr(None), RevealSpec::default());
}

#[test]
fn reads_configured_delay() {
    assert_eq!(RevealSpec::from_attr(Some("200")).delay_ms, 200);
    assert_eq!(RevealSpec::from_attr(Some(" 450 ")).delay_ms, 450);
}

#[test]
fn malformed_delay_means_no_delay() {
    assert_eq!(RevealSpec::from_attr(Some("")).delay_ms, 0);
    assert_eq!(RevealSpec::from_attr(Some("later")).delay_ms, 0);
    assert_eq!(RevealSpec::from_attr(Some("-50")).delay_ms, 0);
}
