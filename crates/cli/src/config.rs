// crates/cli/src/config.rs
use crate::args::Args;
pub use station_stats_engine::config::{Config, ConfigBuilder, DEFAULT_SCAN_WINDOW};

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let workers = args.workers.unwrap_or_else(num_cpus::get);
        let scan_window = args.scan_window.unwrap_or(DEFAULT_SCAN_WINDOW);

        ConfigBuilder::default()
            .path(args.path)
            .workers(workers)
            .scan_window(scan_window)
            .mmap(!args.no_mmap)
            .build()
            .expect("Failed to build config")
    }
}
