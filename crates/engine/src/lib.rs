// crates/engine/src/lib.rs
use rayon::prelude::*;

pub mod chunk;
pub mod config;
pub mod error;
pub mod parse;
pub mod processor;
pub mod source;
pub mod stats;

use crate::chunk::{ByteRange, plan_chunks};
use crate::config::Config;
use crate::error::Result;
use crate::processor::process_chunk;
use crate::source::FileView;
use crate::stats::{AggregateMap, Summary, merge_maps};

/// Aggregate every record in `data` into one merged, unsorted mapping.
///
/// Chunks are planned once, scanned in parallel, and the per-chunk maps are
/// reduced pairwise; the combine step is associative and commutative, so the
/// reduction shape does not affect the result. Sorting and rendering are
/// left to the caller.
///
/// # Errors
///
/// Fails fast: the first malformed record, unsnappable boundary, or invalid
/// worker count aborts the whole aggregation.
pub fn aggregate(data: &[u8], workers: usize, scan_window: u64) -> Result<AggregateMap> {
    let ranges = plan_chunks(data, workers, scan_window)?;
    aggregate_ranges(data, ranges)
}

fn aggregate_ranges(data: &[u8], ranges: Vec<ByteRange>) -> Result<AggregateMap> {
    ranges
        .into_par_iter()
        .map(|range| process_chunk(data, range))
        .try_reduce(AggregateMap::new, |global, local| {
            Ok(merge_maps(global, local))
        })
}

/// Run the aggregation engine over the configured input file.
///
/// # Errors
///
/// Propagates configuration, I/O, planning, and scan errors; no partial
/// result is ever returned.
pub fn run(config: &Config) -> Result<Summary> {
    config.validate()?;

    let view = FileView::open(&config.path, config.mmap)?;
    let ranges = plan_chunks(&view, config.workers, config.scan_window)?;
    log::debug!(
        "planned {} chunk(s) over {} bytes of '{}'",
        ranges.len(),
        view.len(),
        config.path.display()
    );
    for (i, range) in ranges.iter().enumerate() {
        log::trace!("chunk {i}: {range}");
    }

    let chunks = ranges.len();
    let stations = aggregate_ranges(&view, ranges)?;
    log::debug!("merged {} station(s)", stations.len());

    Ok(Summary {
        stations,
        bytes: view.len() as u64,
        chunks,
    })
}
