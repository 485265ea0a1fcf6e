use super::*;

#[test]
fn first_fill_is_immediate() {
    assert_eq!(stagger_delay_ms(0), 0);
}

#[test]
fn fills_are_staggered_by_200ms() {
    let delays: Vec<u32> = (0..5).map(stagger_delay_ms).collect();
    assert_eq!(delays, vec![0, 200, 400, 600, 800]);
}

#[test]
fn each_fill_strictly_after_previous_and_no_earlier_than_k_times_200() {
    for k in 1..50 {
        let delay = stagger_delay_ms(k);
        assert!(delay > stagger_delay_ms(k - 1));
        assert!(u64::from(delay) >= k as u64 * 200);
    }
}

#[test]
fn huge_index_saturates() {
    assert_eq!(stagger_delay_ms(usize::MAX), u32::MAX);
    assert_eq!(stagger_delay_ms(30_000_000), u32::MAX);
}

#[test]
fn fill_width_uses_attribute_as_percent() {
    assert_eq!(fill_width(Some("90")), "90%");
    assert_eq!(fill_width(Some("72.5")), "72.5%");
}

#[test]
fn fill_width_falls_back_to_zero() {
    assert_eq!(fill_width(None), "0%");
    assert_eq!(fill_width(Some("full")), "0%");
}

#[test]
fn fill_width_is_clamped() {
    assert_eq!(fill_width(Some("250")), "100%");
}
