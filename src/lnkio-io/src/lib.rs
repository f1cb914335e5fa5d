//! Bulk file I/O for the inputs and outputs of a linker.
//!
//! # Motivation
//!
//! A link routinely ingests thousands of object files and archives
//! and emits a handful of large artifacts. Reading inputs one after
//! another is dominated by I/O latency, so inputs are fanned out onto
//! a pool of worker threads and collected back in their original
//! order.
//!
//! # Design
//!
//! All file contents are carved out of an [`Arena`] owned by the
//! caller. Buffers borrow from it and are never freed individually;
//! they go away together when the arena is reset or dropped.
//!
//! Reading a batch of files produces a [`BufferSequence`] with one
//! slot per input path. A failed read is recorded in its own slot and
//! never affects any of its siblings.
//!
//! Outputs are written from a [`ChunkList`] of independently produced
//! pieces, in order, without concatenating them in memory first.

#![deny(
    rust_2018_idioms,
    rustdoc::broken_intra_doc_links,
    unsafe_op_in_unsafe_fn
)]

mod executor;
pub use executor::*;

mod fs;

mod memory;
pub use memory::*;

mod read;
pub use read::*;

mod write;
pub use write::*;
