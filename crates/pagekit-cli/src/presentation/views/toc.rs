use std::fmt;

use crate::presentation::view_models::{CreateView, TocEntryViewModel, TocViewModel, ViewMode};

impl CreateView for TocViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(TocView::new(self, mode))
    }
}

pub struct TocView<'a> {
    data: &'a TocViewModel,
    mode: ViewMode,
}

impl<'a> TocView<'a> {
    pub fn new(data: &'a TocViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn marker(entry: &TocEntryViewModel) -> &'static str {
        if entry.active { "> " } else { "  " }
    }

    fn indent(entry: &TocEntryViewModel) -> String {
        "  ".repeat(entry.depth.saturating_sub(1) as usize)
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.entries {
            writeln!(f, "{}", entry.href)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for entry in &self.data.entries {
            let active = if entry.active { "*" } else { " " };
            writeln!(f, "{} {}  {}", active, entry.href, entry.display_title)?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.title)?;

        if self.data.entries.is_empty() {
            return writeln!(f, "  {}", self.data.empty_label);
        }

        for entry in &self.data.entries {
            write!(
                f,
                "{}{}{}  {}",
                Self::marker(entry),
                Self::indent(entry),
                entry.display_title,
                entry.href
            )?;
            if self.mode == ViewMode::Verbose {
                let origin = if entry.custom_anchor { "custom" } else { "derived" };
                write!(f, "  [{}]", origin)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;

        writeln!(f)?;
        writeln!(f, "File:      {}", self.data.file)?;
        writeln!(f, "Max depth: {}", self.data.max_depth)?;
        if let Some(fragment) = &self.data.fragment {
            writeln!(f, "Fragment:  {}", fragment)?;
        }

        if !self.data.diagnostics.is_empty() {
            writeln!(f)?;
            writeln!(f, "Diagnostics:")?;
            for diagnostic in &self.data.diagnostics {
                writeln!(
                    f,
                    "  {}: {:?} -> #{}",
                    diagnostic.kind, diagnostic.title, diagnostic.anchor_id
                )?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for TocView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}
