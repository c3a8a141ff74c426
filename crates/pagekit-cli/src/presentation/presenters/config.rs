use pagekit_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(
    data_dir: &Path,
    config_path: &Path,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let language_source = if config.language.is_some() {
        "config"
    } else {
        "environment"
    };

    let content = ConfigViewModel {
        data_dir: data_dir.display().to_string(),
        config_path: config_path.display().to_string(),
        config_exists: config_path.exists(),
        language: config.language(),
        language_source: language_source.to_string(),
        endpoint: config.events.endpoint.clone(),
        discord_url: config.events.discord_url.clone(),
        toc_max_depth: config.toc.max_depth,
    };

    let config_exists = content.config_exists;
    let endpoint_missing = content.endpoint.is_none();
    let mut result = CommandResultViewModel::new(content);

    if !config_exists {
        result = result
            .with_badge(StatusBadge::info("No config file, using defaults"))
            .with_suggestion(Guidance::new(format!(
                "Create {} with an [events] endpoint",
                config_path.display()
            )));
    } else if endpoint_missing {
        result = result
            .with_badge(StatusBadge::warning("No events endpoint configured"))
            .with_suggestion(
                Guidance::new("Pass one per run").with_command("pagekit events --endpoint <URL|DIR>"),
            );
    }

    result
}
