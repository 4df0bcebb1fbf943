//! Wire format for the AP command protocol.
//!
//! AP commands are small fixed-size binary packets that share one
//! 10-byte buffer. Every packet starts with a one-byte command tag;
//! the bytes after the tag are that command's parameters, packed with
//! no padding. Multi-byte parameters are little-endian.
//!
//! The tag-first convention is the one structural guarantee of the
//! format: a receiver peeks the first byte, looks the tag up in its
//! own command table, and only then picks a typed layout for the rest.
//! The tag set itself is open: command tables are generated per
//! deployment, so this crate never enumerates them.
//!
//! # Security
//!
//! All parsing uses compile-time verified layouts via `zerocopy`.
//! Every layout is checked at compile time to fit in
//! [`MAX_PACKET_DATA`] bytes, and decoding a short buffer fails with
//! [`ProtocolError::Size`] instead of reading out of bounds.

pub mod buffer;
pub mod command;
pub mod errors;
pub mod packet;

pub use buffer::PacketBuffer;
pub use command::Command;
pub use errors::{ProtocolError, Result};
pub use packet::{BareCommand, Packet, PacketLayout, ParamCommand, Wire};

/// Capacity of the shared packet buffer, in bytes.
///
/// Every packet layout must encode to at most this many bytes; see
/// [`PacketBuffer`].
pub const MAX_PACKET_DATA: usize = 10;

/// Numeric constant published by the AP command tables.
pub const TEST: u32 = 123;

/// String constant published by the AP command tables.
pub const FOO: &str = "123";
