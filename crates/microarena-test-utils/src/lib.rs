//! Test utilities and mock types for microarena development.
//!
//! Provides a recording implementation of [`ErrorReporter`], an aligned
//! backing buffer, and descriptor fixtures (see [`fixtures`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt;

use microarena_core::ErrorReporter;

/// Mock implementation of [`ErrorReporter`].
///
/// Stores every report as a `String` so tests can assert on how many
/// diagnostics a failure produced and what they said.
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    messages: Vec<String>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports received so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of reports received.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent report.
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Whether any report contains `needle`.
    pub fn any_contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&mut self, args: fmt::Arguments<'_>) {
        self.messages.push(args.to_string());
    }
}

/// Heap-backed arena buffer whose base is 8-byte aligned.
///
/// A plain `Vec<u8>` gives no alignment guarantee, which would make typed
/// views of 4- and 8-byte tensors fail. Backing the bytes with `u64`
/// words fixes the base alignment.
pub struct AlignedBuffer {
    words: Vec<u64>,
    len: usize,
}

impl AlignedBuffer {
    /// Create a zeroed buffer of exactly `len` bytes.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(8)],
            len,
        }
    }

    /// Create a buffer of `len` bytes, every byte set to `byte`.
    pub fn filled(len: usize, byte: u8) -> Self {
        let mut buf = Self::new(len);
        buf.as_bytes_mut().fill(byte);
        buf
    }

    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(self.words.as_slice())[..self.len]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut::<u64, u8>(self.words.as_mut_slice())[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
