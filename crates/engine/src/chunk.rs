use crate::error::{EngineError, Result};
use memchr::memrchr;
use std::fmt;

/// Half-open `[start, end)` byte interval into the source file.
///
/// Planned ranges partition the file with no gaps or overlaps, and every
/// interior `end` lands immediately after a line terminator, so no record
/// is ever split across two chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Snap `candidate` back to the nearest line start in `(floor, candidate]`.
///
/// Looks at most `window` bytes backward for a `\n`. Three outcomes:
/// `Ok(Some(pos))` when a terminator was found (`floor < pos <= candidate`),
/// `Ok(None)` when everything down to `floor` is one unfinished line and the
/// caller should grow the chunk instead, and `ChunkBoundary` when the window
/// is exhausted with `floor` still further back.
fn find_line_boundary(data: &[u8], candidate: u64, floor: u64, window: u64) -> Result<Option<u64>> {
    let low = candidate.saturating_sub(window).max(floor);
    let haystack = &data[low as usize..candidate as usize];
    match memrchr(b'\n', haystack) {
        Some(pos) => Ok(Some(low + pos as u64 + 1)),
        None if low == floor => Ok(None),
        None => Err(EngineError::ChunkBoundary {
            offset: candidate,
            window,
        }),
    }
}

/// Plan line-aligned chunks covering all of `data`.
///
/// `workers` is the target chunk count. The actual count may differ: a small
/// file yields fewer chunks, a boundary snapped backward can squeeze an
/// extra one in, and a line longer than an ideal chunk is absorbed whole by
/// the chunk it starts in.
///
/// # Errors
/// `ChunkBoundary` when a record straddling a planned boundary is longer
/// than `window` bytes, `Config` when `workers` is zero.
pub fn plan_chunks(data: &[u8], workers: usize, window: u64) -> Result<Vec<ByteRange>> {
    if workers == 0 {
        return Err(EngineError::Config(
            "worker count must be at least 1".into(),
        ));
    }
    let total = data.len() as u64;
    if total == 0 {
        return Ok(Vec::new());
    }
    let ideal = (total / workers as u64).max(1);

    let mut ranges = Vec::with_capacity(workers + 1);
    let mut start = 0u64;
    while start < total {
        let mut candidate = start.saturating_add(ideal);
        loop {
            if candidate >= total {
                ranges.push(ByteRange::new(start, total));
                start = total;
                break;
            }
            match find_line_boundary(data, candidate, start, window)? {
                Some(end) => {
                    ranges.push(ByteRange::new(start, end));
                    start = end;
                    break;
                }
                // チャンク全体が 1 行の途中: 境界を次の理想位置まで押し出す
                None => candidate = candidate.saturating_add(ideal),
            }
        }
    }
    Ok(ranges)
}
