use std::io::Write;

use crate::error::ReportError;
use crate::level::{Level, Levels};
use crate::report_config::{ReportConfig, ReportStyle};

/// Prints the layout of a chain, one line per level, head-first.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    config: &'a ReportConfig,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, level: &Level) -> String {
        match self.config.style {
            ReportStyle::Sizes => format!("{}", level.size_of_head),
            ReportStyle::SizesAndCounts => format!("{} {} ", level.size_of_head, level.count),
        }
    }

    /// The lines [`Report::write`] would print for a chain of type `C`, without line terminators.
    pub fn lines<C: Levels>(&self) -> Vec<String> {
        C::levels().iter().map(|level| self.render(level)).collect()
    }

    /// Writes one line per level of `C` into `out`, then flushes it.
    pub fn write<C, W>(&self, mut out: W) -> Result<(), ReportError>
    where
        C: Levels,
        W: Write,
    {
        for level in C::levels() {
            log::trace!("writing level #{} [{:?}]", level.depth, level);
            writeln!(out, "{}", self.render(&level))
                .map_err(|source| ReportError::Write { depth: level.depth, source })?;
        }
        out.flush().map_err(ReportError::Flush)
    }
}
