use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{Slot, TruncState, Transition, truncate};

/// Width model: every slot is `full`, `short` or zero columns wide.
fn widths(slots: &[Slot], full: &[usize], short: &[usize]) -> usize {
	slots
		.iter()
		.enumerate()
		.map(|(i, slot)| match slot.state {
			TruncState::Full => full[i],
			TruncState::Short => short[i],
			TruncState::Hidden => 0,
		})
		.sum()
}

fn run(slots: &mut [Slot], full: &[usize], short: &[usize], budget: usize) -> super::Truncation {
	let initial = widths(slots, full, short);
	let mut model = slots.to_vec();
	truncate(slots, budget, initial, |index, to| {
		model[index].state = to;
		widths(&model, full, short)
	})
}

#[test]
fn fitting_line_is_untouched() {
	let mut slots = [Slot::new(0, true, true)];
	let result = run(&mut slots, &[5], &[1], 10);
	assert!(result.transitions.is_empty());
	assert!(result.fits);
	assert_eq!(result.width, 5);
}

#[test]
fn degrades_lowest_priority_first_with_stable_ties() {
	let mut slots = [Slot::new(0, true, false), Slot::new(1, true, false), Slot::new(-1, true, false)];
	let result = run(&mut slots, &[10, 10, 10], &[1, 1, 1], 0);

	let order: Vec<_> = result.transitions.iter().map(|t| t.index).collect();
	assert_eq!(order, vec![2, 0, 1]);
	assert!(result.transitions.iter().all(|t| t.to == TruncState::Short));
	assert!(!result.fits);
}

#[test]
fn equal_priorities_degrade_left_to_right() {
	let mut slots = [Slot::new(0, true, false), Slot::new(0, true, false)];
	let result = run(&mut slots, &[4, 4], &[1, 1], 5);
	assert_eq!(result.transitions, vec![Transition { index: 0, to: TruncState::Short }]);
	assert_eq!(result.width, 5);
}

#[test]
fn hide_only_component_skips_short() {
	let mut slots = [Slot::new(0, false, true)];
	let result = run(&mut slots, &[8], &[8], 4);
	assert_eq!(result.transitions, vec![Transition { index: 0, to: TruncState::Hidden }]);
	assert_eq!(slots[0].state, TruncState::Hidden);
	assert!(result.fits);
}

#[test]
fn short_before_hide_for_the_same_component() {
	let mut slots = [Slot::new(0, true, true)];
	let result = run(&mut slots, &[8], &[6], 4);
	assert_eq!(
		result.transitions,
		vec![
			Transition { index: 0, to: TruncState::Short },
			Transition { index: 0, to: TruncState::Hidden },
		]
	);
}

#[test]
fn lower_priority_hide_precedes_higher_priority_shorten() {
	let mut slots = [Slot::new(5, true, false), Slot::new(-5, false, true)];
	let result = run(&mut slots, &[6, 6], &[2, 2], 6);
	assert_eq!(result.transitions, vec![Transition { index: 1, to: TruncState::Hidden }]);
}

#[test]
fn undegradable_components_are_skipped() {
	let mut slots = [Slot::new(-10, false, false), Slot::new(3, true, false)];
	let result = run(&mut slots, &[20, 10], &[20, 2], 5);

	assert_eq!(result.transitions, vec![Transition { index: 1, to: TruncState::Short }]);
	assert_eq!(slots[0].state, TruncState::Full);
	assert_eq!(result.width, 22);
	assert!(!result.fits);
}

fn arb_slots() -> impl Strategy<Value = Vec<(i32, bool, bool, usize, usize)>> {
	prop::collection::vec((-3i32..3, any::<bool>(), any::<bool>(), 0usize..20, 0usize..20), 0..8)
}

proptest! {
	/// The same inputs always produce the same transition sequence.
	#[test]
	fn prop_truncation_is_deterministic(spec in arb_slots(), budget in 0usize..80) {
		let build = || spec.iter().map(|&(p, s, h, _, _)| Slot::new(p, s, h)).collect::<Vec<_>>();
		let full: Vec<_> = spec.iter().map(|s| s.3).collect();
		let short: Vec<_> = spec.iter().map(|s| s.4).collect();

		let mut a = build();
		let mut b = build();
		prop_assert_eq!(run(&mut a, &full, &short, budget), run(&mut b, &full, &short, budget));
		prop_assert_eq!(a, b);
	}

	/// Either the result fits or nothing is left to degrade, and no slot
	/// takes more than two steps.
	#[test]
	fn prop_truncation_terminates_in_a_fixed_point(spec in arb_slots(), budget in 0usize..80) {
		let mut slots: Vec<_> = spec.iter().map(|&(p, s, h, _, _)| Slot::new(p, s, h)).collect();
		let full: Vec<_> = spec.iter().map(|s| s.3).collect();
		let short: Vec<_> = spec.iter().map(|s| s.4).collect();

		let result = run(&mut slots, &full, &short, budget);
		prop_assert!(result.fits || slots.iter().all(|slot| slot.next_state().is_none()));
		prop_assert!(result.transitions.len() <= 2 * slots.len());
		prop_assert_eq!(result.width, widths(&slots, &full, &short));
	}
}
