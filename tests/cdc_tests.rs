//! Unit tests for the clock-domain synchronizer.

use power_memctl::cdc::Synchronizer;

/// Tests that the output is false for the first three ticks after reset.
#[test]
fn test_synchronizer_cold_start() {
    let mut sync = Synchronizer::new(3);
    assert!(!sync.observe(true));
    assert!(!sync.observe(true));
    assert!(!sync.observe(true));
    assert!(sync.observe(true));
}

/// Tests that a single assertion propagates after exactly three ticks.
#[test]
fn test_synchronizer_single_pulse() {
    let mut sync = Synchronizer::new(3);
    assert!(!sync.observe(true));
    assert!(!sync.observe(false));
    assert!(!sync.observe(false));
    assert!(sync.observe(false));
    assert!(!sync.observe(false));
    assert!(!sync.observe(false));
}

/// Tests the delay contract over an arbitrary input sequence: the output at
/// tick t equals the raw input at tick t-3.
#[test]
fn test_synchronizer_delay_property() {
    let mut sync = Synchronizer::new(3);
    let mut history: Vec<bool> = Vec::new();

    // Deterministic pseudo-random input sequence.
    let mut lcg: u64 = 0x2545F491;
    for t in 0..200 {
        lcg = lcg.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let raw = (lcg >> 33) & 1 == 1;
        let out = sync.observe(raw);
        history.push(raw);

        let expected = if t >= 3 { history[t - 3] } else { false };
        assert_eq!(out, expected, "delay violated at tick {}", t);
    }
}

/// Tests that two instances do not share internal state.
#[test]
fn test_synchronizer_instances_independent() {
    let mut save = Synchronizer::new(3);
    let mut restore = Synchronizer::new(3);

    // Assert both simultaneously, then only one.
    save.observe(true);
    restore.observe(true);
    save.observe(false);
    restore.observe(true);
    save.observe(false);
    restore.observe(true);

    assert!(save.observe(false));
    assert!(restore.observe(false));
    assert!(!save.observe(false));
    assert!(restore.observe(false));
}

/// Tests that reset clears the shift history.
#[test]
fn test_synchronizer_reset() {
    let mut sync = Synchronizer::new(3);
    sync.observe(true);
    sync.observe(true);
    sync.observe(true);
    sync.reset();
    assert!(!sync.observe(false));
    assert!(!sync.observe(false));
    assert!(!sync.observe(false));
}

/// Tests a non-default depth.
#[test]
fn test_synchronizer_depth_two() {
    let mut sync = Synchronizer::new(2);
    assert!(!sync.observe(true));
    assert!(!sync.observe(false));
    assert!(sync.observe(false));
    assert!(!sync.observe(false));
}
