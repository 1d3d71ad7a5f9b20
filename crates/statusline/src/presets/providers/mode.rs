//! Mode indicator.

use crate::presets::mode_name;
use crate::value::{ComponentView, ProviderOpts, ProviderOutput, Scope};

/// Mode name (`NORMAL`, `INSERT`, ...). Opt `icon` sets a default icon.
pub(super) fn vi_mode(scope: &Scope<'_>, _: &ComponentView<'_>, opts: &ProviderOpts) -> ProviderOutput {
	let output = ProviderOutput::new(mode_name(scope.host().mode()));
	match opts.get_str("icon") {
		Some(icon) => output.with_icon(icon),
		None => output,
	}
}
