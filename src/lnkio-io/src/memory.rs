use std::ops::Deref;

mod arena;
pub use arena::Arena;

mod chunks;
pub use chunks::ChunkList;

mod sequence;
pub use sequence::{BufferSequence, ReadResult};

/// An immutable view over bytes of known length.
///
/// Buffers returned by this crate point into an [`Arena`] and are
/// bound to its lifetime. Buffers may also be created over any other
/// borrowed memory, e.g. for output chunks that were produced
/// elsewhere.
///
/// A zero-length buffer is a valid value and stands for an empty
/// file. It never signals a failed read; see [`ReadResult`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Buffer<'a>(&'a [u8]);

impl<'a> Buffer<'a> {
    /// The empty buffer.
    pub const EMPTY: Buffer<'static> = Buffer(&[]);

    /// Creates a buffer over the given bytes.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self(data)
    }

    /// Gets the underlying bytes with the full lifetime of the
    /// memory they live in.
    #[inline]
    pub const fn as_slice(&self) -> &'a [u8] {
        self.0
    }
}

impl Deref for Buffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl AsRef<[u8]> for Buffer<'_> {
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl<'a> From<&'a [u8]> for Buffer<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self(value)
    }
}

impl<'a> From<&'a mut [u8]> for Buffer<'a> {
    fn from(value: &'a mut [u8]) -> Self {
        Self(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Buffer<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self(value)
    }
}
