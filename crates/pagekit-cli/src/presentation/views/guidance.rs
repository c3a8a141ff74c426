use std::fmt;

use crate::presentation::view_models::{CreateView, GuidanceViewModel, ViewMode};

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "pagekit - community events and in-page index renderer\n")?;

        writeln!(f, "Quick commands:")?;
        if self.data.endpoint_configured {
            writeln!(f, "  pagekit events                     # Show the community events panel")?;
        } else {
            writeln!(f, "  pagekit events --endpoint <URL|DIR>  # Show the community events panel")?;
        }
        writeln!(f, "  pagekit toc <FILE.md>              # Show a page's in-page index")?;
        writeln!(f, "  pagekit config show                # Inspect configuration\n")?;

        if !self.data.config_exists {
            writeln!(f, "No config file yet. Set [events] endpoint in config.toml to skip --endpoint.\n")?;
        }

        writeln!(f, "For more commands:")?;
        writeln!(f, "  pagekit --help")
    }
}
