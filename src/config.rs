use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "data/ExcelOutput";
pub const DEFAULT_OUTPUT: &str = "data/ARDB4HSR.json";

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SourceConfig {
    /// Directory holding the upstream ExcelOutput JSON files
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Where the generated score model is written
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
