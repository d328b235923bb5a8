//! One-shot upload staging.
//!
//! [`StagingWriter`] packs the payloads for a copy pass into a single
//! contiguous transfer buffer, handing back each payload's byte offset as it
//! is appended. The caller records the offsets, finishes the writer into a
//! `COPY_SRC` buffer, and issues its buffer/texture copies against them.

use wgpu::util::DeviceExt;

/// Accumulates upload payloads into one contiguous staging allocation.
pub struct StagingWriter {
    data: Vec<u8>,
}

impl StagingWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Pre-sized writer, for when the combined byte length is known up front.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            data: Vec::with_capacity(bytes),
        }
    }

    /// Append a payload, returning its byte offset within the transfer buffer.
    pub fn push(&mut self, bytes: &[u8]) -> u64 {
        let offset = self.data.len() as u64;
        self.data.extend_from_slice(bytes);
        offset
    }

    /// Total bytes staged so far: the exact sum of the pushed payloads.
    pub fn total(&self) -> u64 {
        self.data.len() as u64
    }

    /// Create the transfer buffer holding everything staged.
    ///
    /// wgpu pads the allocation to `COPY_BUFFER_ALIGNMENT` if the exact total
    /// is not already aligned; offsets handed out by [`push`](Self::push) are
    /// unaffected.
    pub fn finish(self, device: &wgpu::Device) -> wgpu::Buffer {
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("staging transfer buffer"),
            contents: &self.data,
            usage: wgpu::BufferUsages::COPY_SRC,
        })
    }
}

impl Default for StagingWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_contiguous() {
        let mut writer = StagingWriter::new();
        let a = writer.push(&[0u8; 80]);
        let b = writer.push(&[0u8; 12]);
        let c = writer.push(&[0u8; 16]);
        assert_eq!(a, 0);
        assert_eq!(b, 80);
        assert_eq!(c, 92);
        assert_eq!(writer.total(), 108);
    }

    #[test]
    fn total_is_exact_sum() {
        let mut writer = StagingWriter::with_capacity(7);
        writer.push(&[1, 2, 3]);
        writer.push(&[4]);
        writer.push(&[5, 6, 7]);
        assert_eq!(writer.total(), 7);
    }

    #[test]
    fn empty_writer_stages_nothing() {
        let writer = StagingWriter::new();
        assert_eq!(writer.total(), 0);
    }
}
