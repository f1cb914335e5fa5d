use std::slice;

use super::{Buffer, BufferSequence};

/// An ordered list of output chunks.
///
/// The logical contents are the concatenation of all chunks in list
/// order. Chunks may originate from different allocations and are
/// never modified once pushed.
#[derive(Clone, Debug, Default)]
pub struct ChunkList<'a> {
    chunks: Vec<Buffer<'a>>,
    size: u64,
}

impl<'a> ChunkList<'a> {
    /// Creates an empty chunk list.
    pub const fn new() -> Self {
        Self {
            chunks: Vec::new(),
            size: 0,
        }
    }

    /// Creates an empty chunk list with room for `capacity` chunks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chunks: Vec::with_capacity(capacity),
            size: 0,
        }
    }

    /// Appends a chunk to the end of the list.
    pub fn push(&mut self, chunk: impl Into<Buffer<'a>>) {
        let chunk = chunk.into();
        self.size += chunk.len() as u64;
        self.chunks.push(chunk);
    }

    /// Appends every successfully read buffer of `seq` in order and
    /// returns how many were appended.
    pub fn push_sequence(&mut self, seq: &BufferSequence<'a>) -> usize {
        let before = self.chunks.len();
        for buf in seq.iter().filter_map(|r| r.as_ref().ok()) {
            self.push(*buf);
        }

        self.chunks.len() - before
    }

    /// The number of chunks.
    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The size of the concatenated contents in bytes.
    #[inline]
    pub fn total_size(&self) -> u64 {
        self.size
    }

    /// Iterates over the chunks in write order.
    pub fn iter(&self) -> slice::Iter<'_, Buffer<'a>> {
        self.chunks.iter()
    }

    /// Gets all chunks as a slice, in write order.
    pub fn as_slice(&self) -> &[Buffer<'a>] {
        &self.chunks
    }
}

impl<'a> Extend<Buffer<'a>> for ChunkList<'a> {
    fn extend<I: IntoIterator<Item = Buffer<'a>>>(&mut self, iter: I) {
        for chunk in iter {
            self.push(chunk);
        }
    }
}

impl<'a> FromIterator<Buffer<'a>> for ChunkList<'a> {
    fn from_iter<I: IntoIterator<Item = Buffer<'a>>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'l, 'a> IntoIterator for &'l ChunkList<'a> {
    type Item = &'l Buffer<'a>;
    type IntoIter = slice::Iter<'l, Buffer<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_size() {
        let mut list = ChunkList::new();
        list.push(b"header");
        list.push(Buffer::EMPTY);
        list.push(&b"text"[..]);

        assert_eq!(list.len(), 3);
        assert_eq!(&*list.as_slice()[2], b"text");
        assert_eq!(list.total_size(), 10);
    }
}
