//! Language server clients and diagnostic counts.

use super::count_with_icon;
use crate::value::{ComponentView, ProviderOpts, ProviderOutput, Scope};

/// Attached client names separated by spaces.
pub(super) fn lsp_client_names(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	ProviderOutput::new(scope.host().lsp_clients().join(" "))
}

pub(super) fn diagnostic_errors(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	count_with_icon(scope.host().diagnostics().errors, " E-")
}

pub(super) fn diagnostic_warnings(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	count_with_icon(scope.host().diagnostics().warnings, " W-")
}

pub(super) fn diagnostic_hints(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	count_with_icon(scope.host().diagnostics().hints, " H-")
}

pub(super) fn diagnostic_info(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	count_with_icon(scope.host().diagnostics().info, " I-")
}
