use crate::depth_pipeline::common::constants::{LUT_SIZE, PXZMAX, SENTINEL_DEPTH_MM};
use crate::depth_pipeline::common::error::DepthError;
use crate::depth_pipeline::lut::DepthLut;
use crate::depth_pipeline::unpack::invert_code;

const LAST: usize = PXZMAX as usize;

#[test]
fn test_known_entries() {
    let lut = DepthLut::new();

    assert_eq!(lut.forward(0), 305);
    assert_eq!(lut.forward(500), 583);
    assert_eq!(lut.forward(800), 1195);
    assert_eq!(lut.forward(1000), 3779);
    assert_eq!(lut.forward(1041), 6764);
    assert_eq!(lut.forward(1042), 6897);
    assert_eq!(lut.forward(2047), SENTINEL_DEPTH_MM);
}

#[test]
fn test_entries_track_calibration_curve() {
    let lut = DepthLut::new();

    for code in 0..=1050u16 {
        let reference = 1000.0 * 0.1236 * (f64::from(code) / 2842.5 + 1.1863).tan();
        let diff = (f64::from(lut.forward(code)) - reference.floor()).abs();
        assert!(diff <= 1.0, "code {code}: {} vs {reference}", lut.forward(code));
    }
}

#[test]
fn test_monotonic_over_valid_range() {
    let lut = DepthLut::new();
    let entries = lut.entries();

    for i in 0..LAST {
        assert!(entries[i] <= entries[i + 1], "entry {i} decreases");
    }
    // The curve passes its asymptote right after the valid range
    assert!(entries[LAST + 1] < 0);
}

#[test]
fn test_reverse_exact_hits() {
    let lut = DepthLut::new();

    for i in 0..=LAST {
        let depth = lut.forward(i as u16);
        let idx = usize::from(lut.reverse(depth));

        assert_eq!(lut.forward(idx as u16), depth);
        assert!(idx >= i);
        if idx < LAST {
            assert!(lut.forward(idx as u16 + 1) > depth);
        }
    }
}

#[test]
fn test_reverse_between_entries() {
    let lut = DepthLut::new();

    for i in 0..LAST {
        let lo = lut.forward(i as u16);
        let hi = lut.forward(i as u16 + 1);
        for depth in (lo + 1)..hi.min(lo + 50) {
            assert_eq!(usize::from(lut.reverse(depth)), i);
        }
    }
}

#[test]
fn test_reverse_clamps() {
    let lut = DepthLut::new();

    assert_eq!(lut.reverse(i32::MIN), 0);
    assert_eq!(lut.reverse(0), 0);
    assert_eq!(lut.reverse(lut.forward(0) - 1), 0);
    assert_eq!(lut.reverse(i32::MAX), PXZMAX as u16);
    assert_eq!(lut.reverse(SENTINEL_DEPTH_MM), PXZMAX as u16);
}

#[test]
fn test_reverse_mid_range() {
    let lut = DepthLut::new();

    assert_eq!(lut.reverse(3500), 992);
    assert_eq!(lut.forward(992), 3479);
    assert_eq!(lut.reverse(3514), 993);
}

#[test]
fn test_depth_of_raw_uses_inverted_code() {
    let lut = DepthLut::new();

    assert_eq!(lut.depth_of_raw(invert_code(1000)), 3779);
    assert_eq!(lut.depth_of_raw(0), SENTINEL_DEPTH_MM);
    assert_eq!(lut.get(2048), None);
}

#[test]
fn test_shared_is_single_instance() {
    let a = DepthLut::shared();
    let b = DepthLut::shared();

    assert!(std::ptr::eq(a, b));
    assert_eq!(a, &DepthLut::new());
}

#[test]
fn test_from_entries_synthetic_table() {
    let mut entries = [0i32; LUT_SIZE];
    for (i, entry) in entries.iter_mut().enumerate() {
        *entry = i as i32 * 10;
    }

    let lut = DepthLut::from_entries(entries).unwrap();
    assert_eq!(lut.forward(7), 70);
    assert_eq!(lut.reverse(75), 7);
    assert_eq!(lut.reverse(70), 7);
}

#[test]
fn test_from_entries_rejects_decreasing_table() {
    let mut entries = [0i32; LUT_SIZE];
    entries[10] = 5;

    assert!(matches!(
        DepthLut::from_entries(entries).unwrap_err(),
        DepthError::NonMonotonicLut { index: 10 }
    ));
}
