use hashbrown::HashMap;
use std::fmt;

/// Per-chunk (and, once merged, global) mapping from key to statistics.
pub type AggregateMap = HashMap<String, Stats>;

/// Running accumulator for one key, in the ×10 scaled integer domain.
///
/// `count == 0` is the identity element for [`Stats::merge`]; its min/max
/// sentinels are never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub min: i64,
    pub max: i64,
    pub sum: i64,
    pub count: u64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            min: i64::MAX,
            max: i64::MIN,
            sum: 0,
            count: 0,
        }
    }
}

impl Stats {
    /// Fold one scaled measurement into the accumulator.
    #[inline]
    pub fn record(&mut self, value: i64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;
    }

    /// Combine two accumulators. Associative and commutative, so partial
    /// results can be merged in any order and grouping.
    pub fn merge(&mut self, other: &Stats) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }

    /// Mean in the scaled domain, rounded half away from zero.
    /// Meaningful only once `count > 0`.
    pub fn mean_scaled(&self) -> i64 {
        debug_assert!(self.count > 0);
        let magnitude = self.sum.unsigned_abs();
        let quotient = magnitude / self.count;
        let remainder = magnitude % self.count;
        let rounded = if remainder * 2 >= self.count {
            quotient + 1
        } else {
            quotient
        };
        if self.sum < 0 {
            -(rounded as i64)
        } else {
            rounded as i64
        }
    }
}

impl fmt::Display for Stats {
    /// `min/mean/max`, one decimal place each.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            format_scaled(self.min),
            format_scaled(self.mean_scaled()),
            format_scaled(self.max)
        )
    }
}

/// Render a ×10 scaled value with exactly one decimal place without going
/// through floating point: `-35` → `"-3.5"`, `7` → `"0.7"`.
pub fn format_scaled(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    format!("{sign}{}.{}", magnitude / 10, magnitude % 10)
}

/// Fold `local` into `global` key by key. With [`Stats::merge`] associative
/// and commutative, any reduction tree over chunk maps yields the same
/// result.
pub fn merge_maps(mut global: AggregateMap, local: AggregateMap) -> AggregateMap {
    for (key, stats) in local {
        global.entry(key).or_default().merge(&stats);
    }
    global
}

/// Result of a full run: the merged mapping plus scan metadata.
#[derive(Debug)]
pub struct Summary {
    /// Merged, unsorted key → statistics mapping.
    pub stations: AggregateMap,
    /// Bytes scanned, i.e. the input file length.
    pub bytes: u64,
    /// Number of chunks the file was split into.
    pub chunks: usize,
}
