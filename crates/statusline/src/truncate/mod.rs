//! Priority-ordered degradation of components until a line fits.
//!
//! Each component slot moves through `Full -> Short -> Hidden`. The engine
//! only tracks states and widths; re-rendering a slot in its new state is
//! the caller's job, reported back through the `apply` callback.

/// Truncation state of one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TruncState {
	#[default]
	Full,
	Short,
	Hidden,
}

/// Truncation-relevant facts about one rendered component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
	pub priority: i32,
	/// The component declares a short provider.
	pub has_short: bool,
	pub truncate_hide: bool,
	pub state: TruncState,
}

impl Slot {
	pub fn new(priority: i32, has_short: bool, truncate_hide: bool) -> Self {
		Self {
			priority,
			has_short,
			truncate_hide,
			state: TruncState::Full,
		}
	}

	/// The next degradation step, if any. Shortening is preferred over
	/// hiding.
	pub fn next_state(&self) -> Option<TruncState> {
		match self.state {
			TruncState::Full if self.has_short => Some(TruncState::Short),
			TruncState::Full | TruncState::Short if self.truncate_hide => Some(TruncState::Hidden),
			_ => None,
		}
	}
}

/// A single applied degradation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
	/// Index of the slot in the input order.
	pub index: usize,
	pub to: TruncState,
}

/// Outcome of a truncation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Truncation {
	/// Steps in the order they were applied.
	pub transitions: Vec<Transition>,
	/// Width after the last step.
	pub width: usize,
	/// Whether the final width fits the budget. Overflow is accepted when
	/// nothing is left to degrade.
	pub fits: bool,
}

/// Degrades `slots` until `width <= budget` or no candidate remains.
///
/// Candidates are the slots with a further step available, ordered by
/// priority with ties broken by position. Each iteration applies one step
/// to the first candidate, then `apply(index, new_state)` re-renders the
/// slot and returns the new total width. Slots that can never degrade are
/// never candidates, so the loop always terminates.
pub fn truncate<F>(slots: &mut [Slot], budget: usize, initial_width: usize, mut apply: F) -> Truncation
where
	F: FnMut(usize, TruncState) -> usize,
{
	let mut width = initial_width;
	let mut transitions = Vec::new();

	while width > budget {
		let Some((index, to)) = next_candidate(slots) else {
			tracing::debug!(width, budget, "Truncation exhausted candidates, line overflows");
			break;
		};
		slots[index].state = to;
		let before = width;
		width = apply(index, to);
		tracing::debug!(index, ?to, before, after = width, budget, "Truncated component");
		transitions.push(Transition { index, to });
	}

	Truncation {
		transitions,
		width,
		fits: width <= budget,
	}
}

fn next_candidate(slots: &[Slot]) -> Option<(usize, TruncState)> {
	let mut candidates: Vec<(usize, i32, TruncState)> = slots
		.iter()
		.enumerate()
		.filter_map(|(index, slot)| slot.next_state().map(|to| (index, slot.priority, to)))
		.collect();
	candidates.sort_by_key(|&(_, priority, _)| priority);
	candidates.first().map(|&(index, _, to)| (index, to))
}

#[cfg(test)]
mod tests;
