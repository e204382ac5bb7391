use crate::error::{EngineError, Result};
use derive_builder::Builder;
use std::path::PathBuf;

/// 入力ファイルのデフォルト名 (カレントディレクトリ基準)
pub const DEFAULT_INPUT: &str = "measurements.txt";

/// Default lookback when snapping a chunk boundary to a line terminator.
/// Doubles as the upper bound on how far a record may straddle a planned
/// boundary before planning fails loudly.
pub const DEFAULT_SCAN_WINDOW: u64 = 128;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Input file, one `key;value` record per line.
    #[builder(default = "PathBuf::from(DEFAULT_INPUT)")]
    pub path: PathBuf,
    /// Target chunk count, usually the number of available cores.
    #[builder(default = "num_cpus::get()")]
    pub workers: usize,
    /// Boundary snap lookback in bytes.
    #[builder(default = "DEFAULT_SCAN_WINDOW")]
    pub scan_window: u64,
    /// Memory-map the input instead of reading it onto the heap.
    #[builder(default = "true")]
    pub mmap: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT),
            workers: num_cpus::get(),
            scan_window: DEFAULT_SCAN_WINDOW,
            mmap: true,
        }
    }
}

impl Config {
    /// Reject settings the chunk planner cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(EngineError::Config(
                "worker count must be at least 1".into(),
            ));
        }
        if self.scan_window == 0 {
            return Err(EngineError::Config(
                "scan window must be at least 1 byte".into(),
            ));
        }
        Ok(())
    }
}
