// Host-side tests for boot configuration parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::*;
use constants::*;
use scrollfield_core::Theme;

#[test]
fn missing_attributes_use_defaults() {
    let cfg = BootConfig::from_attributes(None, None, None);
    assert_eq!(cfg, BootConfig::default());
    assert_eq!(cfg.theme, Theme::Dark);
    assert_eq!(cfg.seed, None);
    assert_eq!(cfg.scroll_damping_sec, SCROLL_DAMPING_SEC);
}

#[test]
fn attributes_override_defaults() {
    let cfg = BootConfig::from_attributes(Some(" Light "), Some("42"), Some("0.3"));
    assert_eq!(cfg.theme, Theme::Light);
    assert_eq!(cfg.seed, Some(42));
    assert_eq!(cfg.scroll_damping_sec, 0.3);
}

#[test]
fn bad_attributes_are_ignored() {
    let cfg = BootConfig::from_attributes(Some("sepia"), Some("-1"), Some("fast"));
    assert_eq!(cfg, BootConfig::default());
}

#[test]
fn damping_is_capped_and_rejects_nonsense() {
    assert_eq!(parse_damping(Some("0")), Some(0.0));
    assert_eq!(parse_damping(Some("10")), Some(SCROLL_DAMPING_MAX_SEC));
    assert_eq!(parse_damping(Some("-0.5")), None);
    assert_eq!(parse_damping(Some("NaN")), None);
    assert_eq!(parse_damping(Some("inf")), None);
    assert_eq!(parse_damping(None), None);
}

#[test]
fn seeds_parse_as_unsigned() {
    assert_eq!(parse_seed(Some("18446744073709551615")), Some(u64::MAX));
    assert_eq!(parse_seed(Some(" 7 ")), Some(7));
    assert_eq!(parse_seed(Some("")), None);
}
