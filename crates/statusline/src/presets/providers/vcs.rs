//! Git branch and diff counts.

use super::count_with_icon;
use crate::value::{ComponentView, ProviderOpts, ProviderOutput, Scope};

const BRANCH_ICON: &str = "\u{e0a0} ";

pub(super) fn git_branch(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	match scope.host().git() {
		Some(git) if !git.branch.is_empty() => ProviderOutput::new(git.branch.clone()).with_icon(BRANCH_ICON),
		_ => ProviderOutput::default(),
	}
}

pub(super) fn git_diff_added(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	count_with_icon(scope.host().git().map_or(0, |git| git.added), " +")
}

pub(super) fn git_diff_removed(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	count_with_icon(scope.host().git().map_or(0, |git| git.removed), " -")
}

pub(super) fn git_diff_changed(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	count_with_icon(scope.host().git().map_or(0, |git| git.changed), " ~")
}
