use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, CreateView, ViewMode};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        let exists = if data.config_exists { "" } else { " (not found)" };

        writeln!(f, "Data directory: {}", data.data_dir)?;
        writeln!(f, "Config file:    {}{}", data.config_path, exists)?;
        writeln!(f, "Language:       {} ({})", data.language, data.language_source)?;
        writeln!(
            f,
            "Events:         {}",
            data.endpoint.as_deref().unwrap_or("(not set)")
        )?;
        if let Some(url) = &data.discord_url {
            writeln!(f, "Discord:        {}", url)?;
        }
        writeln!(f, "TOC max depth:  {}", data.toc_max_depth)
    }
}
