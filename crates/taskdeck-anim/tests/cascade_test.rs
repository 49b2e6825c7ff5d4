//! Integration tests for ramps and the fade-in cascade.

use proptest::prelude::*;
use std::time::Duration;
use taskdeck_anim::{FadeCascade, Ramp, stagger_offsets};

const MS_40: Duration = Duration::from_millis(40);
const MS_150: Duration = Duration::from_millis(150);

#[test]
fn ramp_duration_tracking() {
    let mut ramp = Ramp::new(0.0, 1.0, Duration::from_secs(1));
    for _ in 0..1000 {
        ramp.tick(Duration::from_millis(1));
    }
    assert!(ramp.is_complete(), "1000x1ms should complete a 1s ramp");
}

#[test]
fn canceled_members_are_eligible_for_the_next_cascade() {
    let mut cascade = FadeCascade::new();
    cascade.start([1u64, 2, 3], MS_40, MS_150);
    cascade.tick(Duration::from_millis(10));
    // Member 3 has not started fading yet; a restart must still include it.
    cascade.start([2u64, 3, 4], MS_40, MS_150);
    assert!(cascade.contains(3));
    assert!(cascade.contains(4));
    assert!(!cascade.contains(1));
}

proptest! {
    #[test]
    fn cascade_values_stay_normalized(ticks in prop::collection::vec(0u64..500, 0..40)) {
        let mut cascade = FadeCascade::new();
        cascade.start([1u64, 2, 3, 4, 5], MS_40, MS_150);
        for ms in ticks {
            cascade.tick(Duration::from_millis(ms));
            for (_, v) in cascade.values() {
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn stagger_offsets_monotonic(count in 0usize..64, step_ms in 0u64..200) {
        let offsets = stagger_offsets(count, Duration::from_millis(step_ms));
        prop_assert_eq!(offsets.len(), count);
        for pair in offsets.windows(2) {
            prop_assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn ramp_value_bounded_by_endpoints(from in -2.0f32..2.0, to in -2.0f32..2.0, ticks in prop::collection::vec(0u64..100, 0..30)) {
        let lo = from.min(to);
        let hi = from.max(to);
        let mut ramp = Ramp::new(from, to, MS_150).delayed(MS_40);
        for ms in ticks {
            ramp.tick(Duration::from_millis(ms));
            let v = ramp.value();
            prop_assert!(v >= lo - 0.001 && v <= hi + 0.001);
        }
    }
}
