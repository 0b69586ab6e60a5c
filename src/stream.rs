//! The fully buffered byte stream handed between pipeline stages.

use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom};

/// Raw, not yet decoded image bytes.
///
/// The buffer is filled once at construction and never modified; reading
/// only advances the cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteStream {
    inner: Cursor<Vec<u8>>,
}

impl ByteStream {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.get_ref().is_empty()
    }

    /// All bytes, independent of the read position.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.get_ref()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl From<Vec<u8>> for ByteStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for ByteStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

impl Seek for ByteStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

/// Why [`read_bounded`] gave up.
#[derive(Debug)]
pub(crate) enum BoundedReadError {
    Io(io::Error),
    TooLarge,
}

/// Reads `reader` to the end, failing once more than `limit` bytes arrive.
pub(crate) fn read_bounded<R: Read>(reader: R, limit: u64) -> Result<Vec<u8>, BoundedReadError> {
    let mut bytes = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(BoundedReadError::Io)?;

    if bytes.len() as u64 > limit {
        return Err(BoundedReadError::TooLarge);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_constructed_bytes() {
        let mut stream = ByteStream::new(b"PNGDATA".to_vec());
        let mut out = String::new();
        stream.read_to_string(&mut out).expect("read");

        assert_eq!(out, "PNGDATA");
        assert_eq!(stream.as_bytes(), b"PNGDATA");
    }

    #[test]
    fn rewinding_replays_the_same_bytes() {
        let mut stream = ByteStream::new(vec![1, 2, 3]);
        let mut first = Vec::new();
        stream.read_to_end(&mut first).expect("read");
        stream.rewind().expect("rewind");
        let mut second = Vec::new();
        stream.read_to_end(&mut second).expect("read");

        assert_eq!(first, second);
    }

    #[test]
    fn bounded_read_accepts_exact_limit() {
        let bytes = read_bounded(&b"abcd"[..], 4).expect("within limit");
        assert_eq!(bytes, b"abcd");
    }

    #[test]
    fn bounded_read_rejects_one_byte_over() {
        let err = read_bounded(&b"abcde"[..], 4).expect_err("over limit");
        assert!(matches!(err, BoundedReadError::TooLarge));
    }
}
