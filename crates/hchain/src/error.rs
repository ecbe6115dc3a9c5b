use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write level #{depth}")]
    Write {
        depth: usize,
        #[source]
        source: io::Error,
    },

    #[error("Failed to flush the report")]
    Flush(#[source] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown report style: {0:?} (expected \"sizes\" or \"sizes-and-counts\")")]
    UnknownStyle(String),

    #[error("The value of {0} is not valid unicode")]
    NotUnicode(&'static str),
}
