//! Fixed-capacity packet buffer.

use crate::MAX_PACKET_DATA;
use crate::command::Command;
use crate::errors::{ProtocolError, Result};

/// Fixed-capacity byte buffer sized to hold any command packet.
///
/// Transport code owns one of these per in-flight packet. The buffer
/// does not track which layout it holds: the first byte of any packet
/// is its command tag, and the receiver peeks it via [`Self::command`]
/// to select a typed view of the rest.
///
/// Buffers are plain values: no allocation, copyable, dropped on
/// scope exit. If a surrounding transport is multi-threaded, each
/// buffer belongs to exactly one logical operation at a time; the
/// codec itself holds no shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PacketBuffer {
    bytes: [u8; MAX_PACKET_DATA],
    len: usize,
}

impl PacketBuffer {
    /// Buffer capacity in bytes, fixed at [`MAX_PACKET_DATA`].
    pub const CAPACITY: usize = MAX_PACKET_DATA;

    /// Empty buffer.
    pub const fn new() -> Self {
        Self { bytes: [0; MAX_PACKET_DATA], len: 0 }
    }

    /// Buffer holding a copy of `src`.
    ///
    /// Fails with [`ProtocolError::Size`] if `src` is longer than
    /// [`Self::CAPACITY`].
    pub fn from_slice(src: &[u8]) -> Result<Self> {
        if src.len() > Self::CAPACITY {
            return Err(ProtocolError::Size { needed: src.len(), available: Self::CAPACITY });
        }
        let mut buf = Self::new();
        buf.bytes[..src.len()].copy_from_slice(src);
        buf.len = src.len();
        Ok(buf)
    }

    /// Buffer capacity in bytes.
    ///
    /// Exposed for callers sizing transport buffers.
    pub const fn capacity() -> usize {
        Self::CAPACITY
    }

    /// Number of bytes currently held.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if the buffer holds no packet.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes of the held packet.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Command tag of the held packet, or `None` if the buffer is
    /// empty.
    ///
    /// The tag is always the first byte, so peeking here is enough to
    /// select a layout before decoding.
    pub fn command(&self) -> Option<Command> {
        self.as_bytes().first().copied().map(Command)
    }
}

impl AsRef<[u8]> for PacketBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, PacketBuffer, ProtocolError};

    #[test]
    fn capacity_is_ten_bytes() {
        assert_eq!(PacketBuffer::capacity(), 10);
    }

    #[test]
    fn empty_buffer_has_no_command() {
        let buf = PacketBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.command(), None);
    }

    #[test]
    fn first_byte_is_the_command_tag() -> Result<(), ProtocolError> {
        let buf = PacketBuffer::from_slice(&[0x05, 0x34, 0x12])?;
        assert_eq!(buf.command(), Some(Command(0x05)));
        assert_eq!(buf.len(), 3);
        Ok(())
    }

    #[test]
    fn rejects_slices_over_capacity() {
        let oversized = [0u8; 11];
        assert_eq!(
            PacketBuffer::from_slice(&oversized),
            Err(ProtocolError::Size { needed: 11, available: 10 })
        );
    }

    #[test]
    fn full_capacity_fill_is_accepted() -> Result<(), ProtocolError> {
        let exact = [0xAA; 10];
        let buf = PacketBuffer::from_slice(&exact)?;
        assert_eq!(buf.as_bytes(), exact);
        Ok(())
    }
}
