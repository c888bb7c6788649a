// Host-side tests for the floating hexagon styles.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod hexagons {
    include!("../src/core/hexagons.rs");
}

use hexagons::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn random_styles_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let s = HexagonStyle::random(&mut rng);
        assert!(s.scale >= 0.5 && s.scale < 1.5);
        assert!(s.opacity >= 0.02 && s.opacity < 0.06 + 1e-6);
        assert!(s.left_pct >= 0.0 && s.left_pct < 100.0);
        assert!(s.top_pct >= 0.0 && s.top_pct < 100.0);
        assert!(s.delay_sec >= 0.0 && s.delay_sec < 5.0);
    }
}

#[test]
fn styles_vary_between_elements() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = HexagonStyle::random(&mut rng);
    let b = HexagonStyle::random(&mut rng);
    assert_ne!(a, b);
}

#[test]
fn css_properties_use_css_units() {
    let style = HexagonStyle {
        scale: 1.25,
        opacity: 0.05,
        left_pct: 12.5,
        top_pct: 80.0,
        delay_sec: 2.5,
    };
    let props = style.css_properties();
    assert_eq!(props[0], ("transform", "scale(1.25)".to_string()));
    assert_eq!(props[1], ("opacity", "0.05".to_string()));
    assert_eq!(props[2], ("left", "12.5%".to_string()));
    assert_eq!(props[3], ("top", "80%".to_string()));
    assert_eq!(props[4], ("animation-delay", "2.5s".to_string()));
}
