//! Graph command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub plan: PathBuf,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

crate::impl_builder!(GraphOptions, GraphOptionsBuilder {
    with_plan => plan: PathBuf,
    with_format => format: GraphFormat,
    with_output => output: Option<PathBuf>,
    with_highlight_cycles => highlight_cycles: bool,
});
