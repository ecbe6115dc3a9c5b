use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// The environment variable [`ReportConfig::from_env`] reads the style from.
pub const ENV_REPORT_STYLE: &str = "HCHAIN_REPORT_STYLE";

/// What a [`Report`](crate::report::Report) prints for every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ReportStyle {
    /// `"{size_of_head}"`
    Sizes,

    /// `"{size_of_head} {count}"`
    #[default]
    SizesAndCounts,
}

/// Configuration for [`Report`](crate::report::Report)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportConfig {
    /// what to print per level
    #[cfg_attr(feature = "serde", serde(default = "defaults::default_style"))]
    pub style: ReportStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { style: defaults::default_style() }
    }
}

impl ReportConfig {
    /// The default configuration, with the style overridden by `HCHAIN_REPORT_STYLE` if it is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(ENV_REPORT_STYLE) {
            Ok(value) => Ok(Self { style: value.parse()? }),
            Err(VarError::NotPresent) => Ok(Default::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(ENV_REPORT_STYLE)),
        }
    }
}

impl FromStr for ReportStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sizes" => Ok(Self::Sizes),
            "sizes-and-counts" => Ok(Self::SizesAndCounts),
            unknown => Err(ConfigError::UnknownStyle(unknown.to_owned())),
        }
    }
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sizes => write!(f, "sizes"),
            Self::SizesAndCounts => write!(f, "sizes-and-counts"),
        }
    }
}

mod defaults {
    use super::*;

    pub(super) const DEFAULT_STYLE: ReportStyle = ReportStyle::SizesAndCounts;

    pub(super) fn default_style() -> ReportStyle {
        DEFAULT_STYLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_from_str() {
        assert_eq!("sizes".parse::<ReportStyle>().unwrap(), ReportStyle::Sizes);
        assert_eq!(
            " sizes-and-counts\n".parse::<ReportStyle>().unwrap(),
            ReportStyle::SizesAndCounts
        );
        assert!(matches!(
            "counts".parse::<ReportStyle>(),
            Err(ConfigError::UnknownStyle(s)) if s == "counts"
        ));
    }

    #[test]
    fn style_display_parses_back() {
        for style in [ReportStyle::Sizes, ReportStyle::SizesAndCounts] {
            assert_eq!(style.to_string().parse::<ReportStyle>().unwrap(), style);
        }
    }

    #[test]
    fn default_reports_counts() {
        assert_eq!(ReportConfig::default().style, ReportStyle::SizesAndCounts);
    }
}
