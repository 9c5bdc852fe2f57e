//! Property tests for the carousel index invariant.
//!
//! For any slide count and any interleaving of manual navigation, jumps,
//! and autoplay ticks, the index must stay inside `[0, slide_count)` and
//! every manual action must leave the countdown at zero.

use std::time::Duration;

use petals_core::Carousel;
use proptest::prelude::*;

const INTERVAL: Duration = Duration::from_millis(6000);
const STEP: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
enum Op {
    Next,
    Prev,
    JumpTo(usize),
    Tick(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Prev),
        (0usize..16).prop_map(Op::JumpTo),
        (1u8..=150).prop_map(Op::Tick),
    ]
}

proptest! {
    #[test]
    fn index_never_leaves_range(
        slide_count in 1usize..12,
        ops in prop::collection::vec(op_strategy(), 0..64),
    ) {
        let mut slider = Carousel::new(slide_count, INTERVAL);
        for op in ops {
            match op {
                Op::Next => slider.next(),
                Op::Prev => slider.prev(),
                Op::JumpTo(i) => slider.jump_to(i),
                Op::Tick(n) => {
                    for _ in 0..n {
                        slider.tick(STEP);
                    }
                }
            }
            prop_assert!(slider.index() < slide_count);
            prop_assert!(slider.progress() >= 0.0 && slider.progress() < 1.0);
        }
    }

    #[test]
    fn manual_actions_always_zero_the_countdown(
        slide_count in 1usize..12,
        warmup_ticks in 0usize..119,
    ) {
        let mut slider = Carousel::new(slide_count, INTERVAL);
        for _ in 0..warmup_ticks {
            slider.tick(STEP);
        }
        slider.next();
        prop_assert_eq!(slider.elapsed(), Duration::ZERO);

        for _ in 0..warmup_ticks {
            slider.tick(STEP);
        }
        slider.prev();
        prop_assert_eq!(slider.elapsed(), Duration::ZERO);
    }

    #[test]
    fn next_then_prev_returns_to_the_same_slide(
        slide_count in 1usize..12,
        start in 0usize..12,
    ) {
        prop_assume!(start < slide_count);
        let mut slider = Carousel::new(slide_count, INTERVAL);
        slider.jump_to(start);
        slider.next();
        slider.prev();
        prop_assert_eq!(slider.index(), start);
    }
}
