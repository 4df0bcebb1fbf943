//! Error types for packet encoding and decoding.
//!
//! The codec performs no I/O, so every error here is local to the
//! operation that produced it: nothing retries and nothing is fatal.

/// Convenience alias for fallible codec operations.
pub type Result<T> = core::result::Result<T, ProtocolError>;

/// Errors produced while encoding or decoding command packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// A buffer was too small for the requested packet layout.
    ///
    /// Returned when decoding from a buffer with fewer bytes than the
    /// layout occupies, or when filling a [`PacketBuffer`] with more
    /// than [`MAX_PACKET_DATA`] bytes.
    ///
    /// [`PacketBuffer`]: crate::PacketBuffer
    /// [`MAX_PACKET_DATA`]: crate::MAX_PACKET_DATA
    #[error("packet needs {needed} bytes but only {available} are available")]
    Size {
        /// Bytes the layout occupies on the wire.
        needed: usize,
        /// Bytes actually available.
        available: usize,
    },

    /// A command tag with no registered packet layout.
    ///
    /// The codec treats tags as an open set and never produces this
    /// itself; it exists so callers that keep a command table report
    /// missing tags uniformly.
    #[error("unknown command tag {0:#04x}")]
    UnknownCommand(u8),
}

#[cfg(test)]
mod tests {
    use super::ProtocolError;

    #[test]
    fn size_error_names_both_lengths() {
        let err = ProtocolError::Size { needed: 3, available: 2 };
        assert_eq!(err.to_string(), "packet needs 3 bytes but only 2 are available");
    }

    #[test]
    fn unknown_command_formats_tag_as_hex() {
        let err = ProtocolError::UnknownCommand(0x7F);
        assert_eq!(err.to_string(), "unknown command tag 0x7f");
    }
}
