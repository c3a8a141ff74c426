use pagekit_runtime::Config;

use crate::presentation::view_models::{CommandResultViewModel, GuidanceViewModel};

pub fn present_guidance(
    config_exists: bool,
    config: &Config,
) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        config_exists,
        endpoint_configured: config.events.endpoint.is_some(),
    })
}
