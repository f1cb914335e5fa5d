use std::{ops::Index, slice};

use super::Buffer;
use crate::ReadError;

/// The outcome of reading a single file.
pub type ReadResult<'a> = Result<Buffer<'a>, ReadError>;

/// The results of a batch read, index-aligned with its input paths.
///
/// The sequence always has exactly one slot per input path, even when
/// some of the reads failed. Failures are tagged in their own slot so
/// the caller can name the offending input.
#[derive(Debug, Default)]
pub struct BufferSequence<'a> {
    slots: Vec<ReadResult<'a>>,
}

impl<'a> BufferSequence<'a> {
    pub(crate) fn from_slots(slots: Vec<ReadResult<'a>>) -> Self {
        Self { slots }
    }

    /// The number of slots in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the sequence was produced from an empty path list.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Gets the result in slot `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&ReadResult<'a>> {
        self.slots.get(index)
    }

    /// Gets the buffer in slot `index` when that read succeeded.
    pub fn buffer(&self, index: usize) -> Option<Buffer<'a>> {
        self.slots.get(index)?.as_ref().ok().copied()
    }

    /// Iterates over all slots in input order.
    pub fn iter(&self) -> slice::Iter<'_, ReadResult<'a>> {
        self.slots.iter()
    }

    /// Iterates over all slots in input order, substituting an empty
    /// buffer for every failed read.
    ///
    /// Only useful to callers which checked [`BufferSequence::failures`]
    /// beforehand, since failures become indistinguishable from empty
    /// files here.
    pub fn buffers(&self) -> impl Iterator<Item = Buffer<'a>> {
        self.slots.iter().map(|r| r.as_ref().ok().copied().unwrap_or_default())
    }

    /// Iterates over the failed slots along with their index.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &ReadError)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().err().map(|e| (i, e)))
    }

    /// Whether any slot holds a failed read.
    pub fn has_failures(&self) -> bool {
        self.slots.iter().any(Result::is_err)
    }

    /// The combined size of all successfully read buffers.
    pub fn total_size(&self) -> u64 {
        self.slots
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(|b| b.len() as u64)
            .sum()
    }

    /// Consumes the sequence into its raw slots.
    pub fn into_results(self) -> Vec<ReadResult<'a>> {
        self.slots
    }
}

impl<'a> Index<usize> for BufferSequence<'a> {
    type Output = ReadResult<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<'s, 'a> IntoIterator for &'s BufferSequence<'a> {
    type Item = &'s ReadResult<'a>;
    type IntoIter = slice::Iter<'s, ReadResult<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<'a> IntoIterator for BufferSequence<'a> {
    type Item = ReadResult<'a>;
    type IntoIter = std::vec::IntoIter<ReadResult<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}
