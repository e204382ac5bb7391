use crate::chunk::ByteRange;
use crate::error::{EngineError, Result};
use crate::parse::parse_fixed_point;
use crate::stats::AggregateMap;
use memchr::memchr;

/// Scan one chunk and fold every record into a fresh local map.
///
/// The range must be line-aligned, which `plan_chunks` guarantees; only the
/// final line of the file may lack its terminator. Nothing shared is
/// touched, so chunks can be scanned on any thread in any order.
///
/// # Errors
/// `MissingDelimiter` for a record without `;`, `MalformedNumber` for a
/// value outside the fixed-point grammar. Both carry the absolute byte
/// offset of the record and the chunk being scanned.
pub fn process_chunk(data: &[u8], range: ByteRange) -> Result<AggregateMap> {
    let mut map = AggregateMap::new();
    let chunk = &data[range.start as usize..range.end as usize];

    let mut pos = 0usize;
    while pos < chunk.len() {
        let rest = &chunk[pos..];
        let (line, advance) = match memchr(b'\n', rest) {
            Some(newline) => (&rest[..newline], newline + 1),
            // 終端に改行のない最終行
            None => (rest, rest.len()),
        };
        record_line(line, range.start + pos as u64, range, &mut map)?;
        pos += advance;
    }
    Ok(map)
}

/// Split one record into key and value and fold it into `map`.
fn record_line(line: &[u8], offset: u64, chunk: ByteRange, map: &mut AggregateMap) -> Result<()> {
    // a \r\n terminator leaves its \r on the line; it belongs to no field
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    let delimiter = memchr(b';', line).ok_or(EngineError::MissingDelimiter { offset, chunk })?;
    let (key, value) = (&line[..delimiter], &line[delimiter + 1..]);

    let scaled = parse_fixed_point(value).ok_or_else(|| EngineError::MalformedNumber {
        value: String::from_utf8_lossy(value).into_owned(),
        offset,
        chunk,
    })?;

    let key = String::from_utf8_lossy(key);
    map.entry_ref(key.as_ref()).or_default().record(scaled);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stats;

    fn whole(data: &[u8]) -> ByteRange {
        ByteRange::new(0, data.len() as u64)
    }

    #[test]
    fn aggregates_terminated_records() {
        let data = b"Hamburg;12.3\nPalermo;-5.0\nHamburg;8.7\n";
        let map = process_chunk(data, whole(data)).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map["Hamburg"],
            Stats {
                min: 87,
                max: 123,
                sum: 210,
                count: 2
            }
        );
        assert_eq!(map["Palermo"].count, 1);
    }

    #[test]
    fn final_line_may_lack_its_terminator() {
        let data = b"Hamburg;12.3\nPalermo;-5.0";
        let map = process_chunk(data, whole(data)).unwrap();
        assert_eq!(map["Palermo"].min, -50);
    }

    #[test]
    fn crlf_records_aggregate_cleanly() {
        let data = b"Hamburg;12.3\r\nHamburg;8.7\r\n";
        let map = process_chunk(data, whole(data)).unwrap();
        assert_eq!(map["Hamburg"].count, 2);
        assert_eq!(map["Hamburg"].max, 123);
    }

    #[test]
    fn scans_only_its_own_range() {
        let data = b"aa;1.0\nbb;2.0\ncc;3.0\n";
        let map = process_chunk(data, ByteRange::new(7, 14)).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["bb"].sum, 20);
    }

    #[test]
    fn empty_range_yields_empty_map() {
        let data = b"aa;1.0\n";
        let map = process_chunk(data, ByteRange::new(0, 0)).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn missing_delimiter_reports_absolute_offset() {
        let data = b"aa;1.0\nbogus\ncc;3.0\n";
        let err = process_chunk(data, whole(data)).unwrap_err();
        match err {
            EngineError::MissingDelimiter { offset, chunk } => {
                assert_eq!(offset, 7);
                assert_eq!(chunk, whole(data));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_line_is_a_missing_delimiter() {
        let data = b"aa;1.0\n\ncc;3.0\n";
        let err = process_chunk(data, whole(data)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::MissingDelimiter { offset: 7, .. }
        ));
    }

    #[test]
    fn two_fraction_digits_are_malformed() {
        let data = b"City;12.34\n";
        let err = process_chunk(data, whole(data)).unwrap_err();
        match err {
            EngineError::MalformedNumber { value, offset, .. } => {
                assert_eq!(value, "12.34");
                assert_eq!(offset, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn integer_without_fraction_is_malformed() {
        let data = b"City;12\n";
        assert!(matches!(
            process_chunk(data, whole(data)),
            Err(EngineError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn only_the_first_delimiter_splits() {
        let data = b"a;b;1.0\n";
        assert!(matches!(
            process_chunk(data, whole(data)),
            Err(EngineError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn empty_key_is_still_a_key() {
        let data = b";1.0\n;2.0\n";
        let map = process_chunk(data, whole(data)).unwrap();
        assert_eq!(map[""].count, 2);
    }

    #[test]
    fn non_utf8_keys_are_replaced_not_dropped() {
        let data = b"\xff\xfe;1.0\n";
        let map = process_chunk(data, whole(data)).unwrap();
        assert_eq!(map.len(), 1);
        let key = map.keys().next().unwrap();
        assert!(key.contains('\u{fffd}'));
    }
}
