//! Single-file line counters.
//!
//! Every variant counts the `'\n'` bytes of a file. An unterminated final
//! line does not count, so `"a\nb"` yields 1 and an empty file yields 0.

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::Strategy;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Count the lines of `path` with the strategy selected in `config`.
///
/// # Errors
/// Returns [`EngineError::FileRead`] if the file cannot be opened or read.
pub fn count_file(path: &Path, config: &Config) -> Result<u64> {
    let file = File::open(path).map_err(|e| read_error(path, e))?;
    match config.strategy {
        Strategy::Getline => count_getline(file),
        Strategy::DelimiterScan => count_delimiters(file),
        Strategy::BufferedDelimiterScan => count_chunked(file, config.chunk_size),
    }
    .map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, source: io::Error) -> EngineError {
    EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads delimited lines one at a time; only terminated lines count.
///
/// Line content is consumed straight from the reader's buffer and never
/// accumulated, so a file without newlines needs no more than one buffer.
pub fn count_getline<R: Read>(source: R) -> io::Result<u64> {
    let mut reader = BufReader::new(source);
    let mut lines = 0;

    loop {
        let (terminated, used) = {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }
            match buf.iter().position(|&b| b == b'\n') {
                Some(i) => (true, i + 1),
                None => (false, buf.len()),
            }
        };
        reader.consume(used);
        if terminated {
            lines += 1;
        }
    }

    Ok(lines)
}

/// Inspects every byte of a default-buffered stream.
pub fn count_delimiters<R: Read>(source: R) -> io::Result<u64> {
    let mut lines = 0;
    for byte in BufReader::new(source).bytes() {
        if byte? == b'\n' {
            lines += 1;
        }
    }
    Ok(lines)
}

/// Reads `chunk_size` bytes at a time and counts newlines in whatever each
/// read returned, including a short final chunk.
pub fn count_chunked<R: Read>(mut source: R, chunk_size: usize) -> io::Result<u64> {
    let mut buffer = vec![0u8; chunk_size.max(1)];
    let mut lines = 0u64;

    loop {
        let n = match source.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        lines += bytecount::count(&buffer[..n], b'\n') as u64;
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn counts(content: &[u8], chunk_size: usize) -> [u64; 3] {
        [
            count_getline(Cursor::new(content)).unwrap(),
            count_delimiters(Cursor::new(content)).unwrap(),
            count_chunked(Cursor::new(content), chunk_size).unwrap(),
        ]
    }

    /// Yields at most `step` bytes per read to exercise short reads.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_empty_input_counts_zero() {
        assert_eq!(counts(b"", 4), [0, 0, 0]);
    }

    #[test]
    fn test_unterminated_line_is_not_counted() {
        assert_eq!(counts(b"abc", 4), [0, 0, 0]);
        assert_eq!(counts(b"a\nb", 4), [1, 1, 1]);
    }

    #[test]
    fn test_trailing_newline_counts_newlines_only() {
        assert_eq!(counts(b"x\ny\n", 4), [2, 2, 2]);
        assert_eq!(counts(b"\n\n\n", 4), [3, 3, 3]);
    }

    #[test]
    fn test_crlf_is_not_normalized() {
        assert_eq!(counts(b"a\r\nb\r\n\r", 2), [2, 2, 2]);
    }

    #[test]
    fn test_chunk_boundaries() {
        // size is an exact multiple of the chunk size
        assert_eq!(counts(b"abc\nabc\n", 4), [2, 2, 2]);
        // newline at the first byte of the second chunk
        assert_eq!(counts(b"abcd\nefg", 4), [1, 1, 1]);
        // single-byte chunks
        assert_eq!(counts(b"\na\n\nb", 1), [3, 3, 3]);
    }

    #[test]
    fn test_getline_lines_longer_than_reader_buffer() {
        let mut content = vec![b'a'; 100_000];
        content.push(b'\n');
        content.extend(vec![b'b'; 50_000]);
        content.push(b'\n');
        content.extend(vec![b'c'; 20_000]);
        assert_eq!(count_getline(Cursor::new(&content)).unwrap(), 2);
    }

    #[test]
    fn test_getline_streams_input_without_newlines() {
        let endless_line = io::repeat(b'x').take(64 * 1024 * 1024);
        assert_eq!(count_getline(endless_line).unwrap(), 0);

        let trickled = Trickle {
            data: b"ab\ncd\n\nef",
            step: 1,
        };
        assert_eq!(count_getline(trickled).unwrap(), 3);
    }

    #[test]
    fn test_chunked_handles_short_reads() {
        let data = b"one\ntwo\nthree\nfour";
        let lines = count_chunked(Trickle { data, step: 3 }, 8).unwrap();
        assert_eq!(lines, 3);
    }

    #[test]
    fn test_count_file_uses_selected_strategy() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "first\nsecond\nthird").unwrap();

        for strategy in Strategy::ALL {
            let config = ConfigBuilder::default()
                .strategy(strategy)
                .chunk_size(5usize)
                .build()
                .unwrap();
            assert_eq!(count_file(file.path(), &config).unwrap(), 2, "{strategy}");
        }
    }

    #[test]
    fn test_count_file_missing_path_reports_file_read() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.txt");

        let err = count_file(&missing, &Config::default()).unwrap_err();
        match err {
            EngineError::FileRead { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
