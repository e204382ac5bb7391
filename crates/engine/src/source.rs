use crate::error::{EngineError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

/// Read-only byte view of the input file.
///
/// Workers index disjoint ranges of the view concurrently. Both backings
/// hand out a plain `&[u8]`, so the scanning code never knows which one it
/// got.
#[derive(Debug)]
pub enum FileView {
    Mmap(Mmap),
    Heap(Vec<u8>),
}

impl FileView {
    /// Open `path` read-only, memory-mapped unless `mmap` is false.
    ///
    /// # Errors
    /// Returns `FileRead` when the file cannot be opened, mapped, or read.
    pub fn open(path: &Path, mmap: bool) -> Result<Self> {
        let mut file = File::open(path).map_err(|source| EngineError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        if mmap {
            // Sound as long as the file is not modified while mapped; a run
            // treats its input as immutable.
            let map = unsafe { Mmap::map(&file) }.map_err(|source| EngineError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Self::Mmap(map))
        } else {
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .map_err(|source| EngineError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(Self::Heap(buf))
        }
    }
}

impl Deref for FileView {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Mmap(map) => map.as_ref(),
            Self::Heap(buf) => buf.as_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn both_backings_expose_the_same_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Hamburg;12.3\n").unwrap();

        let mapped = FileView::open(file.path(), true).unwrap();
        let heap = FileView::open(file.path(), false).unwrap();
        assert_eq!(&mapped[..], b"Hamburg;12.3\n");
        assert_eq!(&heap[..], &mapped[..]);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = FileView::open(Path::new("no/such/file.txt"), true).unwrap_err();
        match err {
            EngineError::FileRead { path, .. } => {
                assert_eq!(path, Path::new("no/such/file.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_maps_to_empty_view() {
        let file = NamedTempFile::new().unwrap();
        let view = FileView::open(file.path(), false).unwrap();
        assert!(view.is_empty());
    }
}
