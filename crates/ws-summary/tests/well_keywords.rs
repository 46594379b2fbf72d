mod common;

use common::{assert_close, run_demo, value};

#[test]
fn production_rates() {
    let t = run_demo();
    assert_close(value(&t, 1, "W_1", "WWPR"), 10.0);
    assert_close(value(&t, 1, "W_1", "WOPR"), 10.1);
    assert_close(value(&t, 1, "W_1", "WGPR"), 10.2);
    assert_close(value(&t, 1, "W_1", "WLPR"), 20.1);
    assert_close(value(&t, 1, "W_2", "WWPR"), 20.0);
    assert_close(value(&t, 1, "W_2", "WLPR"), 40.1);
    assert_eq!(value(&t, 1, "W_3", "WWPR"), 0.0);
    assert_eq!(value(&t, 1, "W_3", "WLPR"), 0.0);
}

#[test]
fn production_totals() {
    let t = run_demo();
    assert_eq!(value(&t, 0, "W_1", "WOPT"), 0.0);
    assert_close(value(&t, 1, "W_1", "WOPT"), 10.1);
    assert_close(value(&t, 2, "W_1", "WOPT"), 2.0 * 10.1);
    assert_close(value(&t, 2, "W_1", "WWPT"), 2.0 * 10.0);
    assert_close(value(&t, 2, "W_1", "WGPT"), 2.0 * 10.2);
    assert_close(value(&t, 2, "W_1", "WLPT"), 2.0 * 20.1);
    assert_close(value(&t, 2, "W_2", "WOPT"), 2.0 * 20.1);
    assert_eq!(value(&t, 2, "W_3", "WOPT"), 0.0);
}

#[test]
fn historical_production() {
    let t = run_demo();
    assert_close(value(&t, 1, "W_1", "WWPRH"), 10.0);
    assert_close(value(&t, 1, "W_2", "WGPRH"), 20.2);
    assert_close(value(&t, 2, "W_1", "WOPTH"), 2.0 * 10.1);
    assert_eq!(value(&t, 1, "W_3", "WWPRH"), 0.0);
    assert_eq!(value(&t, 2, "W_3", "WWPTH"), 0.0);
}

#[test]
fn injection_rates_and_totals() {
    let t = run_demo();
    assert_close(value(&t, 1, "W_3", "WWIR"), 30.0);
    assert_close(value(&t, 1, "W_3", "WGIR"), 30.2);
    assert_close(value(&t, 1, "W_3", "WWIT"), 30.0);
    assert_close(value(&t, 2, "W_3", "WWIT"), 60.0);
    assert_close(value(&t, 2, "W_3", "WGIT"), 60.4);
    assert_eq!(value(&t, 1, "W_1", "WWIR"), 0.0);
    assert_eq!(value(&t, 2, "W_1", "WWIT"), 0.0);
}

#[test]
fn historical_injection_follows_schedule() {
    let t = run_demo();
    // W_3 history starts at report step 1
    assert_eq!(value(&t, 0, "W_3", "WWIRH"), 0.0);
    assert_close(value(&t, 1, "W_3", "WWIRH"), 30.0);
    assert_eq!(value(&t, 1, "W_3", "WGIRH"), 0.0);
    assert_eq!(value(&t, 1, "W_3", "WWITH"), 0.0);
    assert_close(value(&t, 2, "W_3", "WWITH"), 30.0);
    assert_eq!(value(&t, 2, "W_3", "WGITH"), 0.0);
}

#[test]
fn ratios() {
    let t = run_demo();
    assert_close(value(&t, 1, "W_1", "WWCT"), 10.0 / 20.1);
    assert_close(value(&t, 1, "W_2", "WWCT"), 20.0 / 40.1);
    assert_close(value(&t, 1, "W_1", "WGOR"), 10.2 / 10.1);
    assert_close(value(&t, 1, "W_2", "WGOR"), 20.2 / 20.1);
    assert_close(value(&t, 1, "W_1", "WGLR"), 10.2 / 20.1);
    assert_close(value(&t, 1, "W_1", "WGORH"), 10.2 / 10.1);
    assert_close(value(&t, 1, "W_2", "WGLRH"), 20.2 / 40.1);
}

#[test]
fn injector_ratios_fall_back_to_zero() {
    let t = run_demo();
    assert_eq!(value(&t, 1, "W_3", "WWCT"), 0.0);
    assert_eq!(value(&t, 1, "W_3", "WGOR"), 0.0);
    assert_eq!(value(&t, 1, "W_3", "WGLR"), 0.0);
    assert_eq!(value(&t, 1, "W_3", "WGORH"), 0.0);
    assert_eq!(value(&t, 1, "W_3", "WGLRH"), 0.0);
}

#[test]
fn pressures_in_bar() {
    let t = run_demo();
    assert_close(value(&t, 1, "W_1", "WBHP"), 0.1);
    assert_close(value(&t, 1, "W_2", "WBHP"), 1.1);
    assert_close(value(&t, 1, "W_3", "WBHP"), 2.1);
    assert_close(value(&t, 1, "W_1", "WTHP"), 0.2);
    assert_close(value(&t, 1, "W_3", "WTHP"), 2.2);
}

#[test]
fn typed_well_accessor() {
    let t = run_demo();
    let v = ws_results::query::well_var(&t, 1, "W_1", "WWPR").unwrap();
    assert_close(v, 10.0);
    assert!(ws_results::query::well_var(&t, 1, "W_9", "WWPR").is_none());
}
