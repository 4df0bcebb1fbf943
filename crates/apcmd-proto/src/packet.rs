//! Typed packet layouts and the encode/decode contract.

use zerocopy::little_endian::U16;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::MAX_PACKET_DATA;
use crate::buffer::PacketBuffer;
use crate::command::Command;
use crate::errors::{ProtocolError, Result};

/// Byte-exact wire layout of one packet variant.
///
/// Implementors are plain-data structs whose in-memory representation
/// IS the wire representation: fixed-width fields, no padding, command
/// tag first. The `zerocopy` bounds verify those properties at compile
/// time, so encoding is a plain copy and decoding never reads past the
/// source buffer.
pub trait Wire: IntoBytes + FromBytes + Immutable + KnownLayout + Unaligned + Sized {
    /// Encoded size of this layout, in bytes.
    const SIZE: usize;

    /// Command tag carried in the packet's first byte.
    fn command(&self) -> Command;

    /// Encode into a fresh packet buffer.
    ///
    /// The returned buffer holds exactly [`Self::SIZE`] bytes. Known
    /// layouts are checked against the buffer capacity at compile
    /// time; the runtime check stays so future layouts cannot bypass
    /// it.
    fn encode(&self) -> Result<PacketBuffer> {
        PacketBuffer::from_slice(self.as_bytes())
    }

    /// Decode from the leading bytes of `buf`.
    ///
    /// Trailing bytes are ignored; the caller has already selected
    /// this layout from the command tag. Fails with
    /// [`ProtocolError::Size`] if fewer than [`Self::SIZE`] bytes are
    /// available.
    fn decode(buf: &[u8]) -> Result<Self> {
        Self::read_from_prefix(buf).map(|(pkt, _rest)| pkt).map_err(|_| ProtocolError::Size {
            needed: Self::SIZE,
            available: buf.len(),
        })
    }
}

/// Command with no parameters.
///
/// One byte on the wire: the tag itself.
#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct BareCommand {
    /// Command tag.
    pub cmd: Command,
}

impl BareCommand {
    /// Packet carrying only `cmd`.
    pub const fn new(cmd: Command) -> Self {
        Self { cmd }
    }
}

impl Wire for BareCommand {
    const SIZE: usize = size_of::<Self>();

    fn command(&self) -> Command {
        self.cmd
    }
}

/// Command with one 16-bit parameter.
///
/// Three bytes on the wire: the tag, then the parameter little-endian,
/// contiguous with no padding.
#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ParamCommand {
    /// Command tag.
    pub cmd: Command,
    /// 16-bit parameter, stored little-endian.
    pub parm: U16,
}

impl ParamCommand {
    /// Packet carrying `cmd` and `parm`.
    pub const fn new(cmd: Command, parm: u16) -> Self {
        Self { cmd, parm: U16::new(parm) }
    }

    /// Parameter value in native byte order.
    pub const fn parm(&self) -> u16 {
        self.parm.get()
    }
}

impl Wire for ParamCommand {
    const SIZE: usize = size_of::<Self>();

    fn command(&self) -> Command {
        self.cmd
    }
}

// Every layout must be byte-exact and fit the shared packet buffer.
const _: () = assert!(size_of::<BareCommand>() == 1);
const _: () = assert!(size_of::<ParamCommand>() == 3);
const _: () = assert!(size_of::<BareCommand>() <= MAX_PACKET_DATA);
const _: () = assert!(size_of::<ParamCommand>() <= MAX_PACKET_DATA);

/// Layout selector for [`PacketLayout::decode`].
///
/// Receivers map a command tag to one of these through their own
/// command table; the codec does not own that table because the tag
/// set is open. Tags missing from a table should surface as
/// [`ProtocolError::UnknownCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketLayout {
    /// Tag only; one byte.
    Bare,
    /// Tag plus a 16-bit parameter; three bytes.
    Param,
}

impl PacketLayout {
    /// Encoded size of packets with this layout, in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::Bare => BareCommand::SIZE,
            Self::Param => ParamCommand::SIZE,
        }
    }

    /// Decode the leading bytes of `buf` as this layout.
    pub fn decode(self, buf: &[u8]) -> Result<Packet> {
        match self {
            Self::Bare => BareCommand::decode(buf).map(Packet::Bare),
            Self::Param => ParamCommand::decode(buf).map(Packet::Param),
        }
    }
}

/// A decoded packet of any known layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packet {
    /// See [`BareCommand`].
    Bare(BareCommand),
    /// See [`ParamCommand`].
    Param(ParamCommand),
}

impl Packet {
    /// Command tag of the packet.
    pub const fn command(&self) -> Command {
        match self {
            Self::Bare(pkt) => pkt.cmd,
            Self::Param(pkt) => pkt.cmd,
        }
    }

    /// Layout of the packet.
    pub const fn layout(&self) -> PacketLayout {
        match self {
            Self::Bare(_) => PacketLayout::Bare,
            Self::Param(_) => PacketLayout::Param,
        }
    }

    /// Encode into a fresh packet buffer.
    pub fn encode(&self) -> Result<PacketBuffer> {
        match self {
            Self::Bare(pkt) => pkt.encode(),
            Self::Param(pkt) => pkt.encode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use zerocopy::IntoBytes as _;

    use super::{BareCommand, Command, Packet, PacketLayout, ParamCommand, ProtocolError, Wire};

    #[test]
    fn bare_command_is_one_byte() {
        let pkt = BareCommand::new(Command(0xFF));
        assert_eq!(pkt.as_bytes(), [0xFF]);
        assert_eq!(BareCommand::SIZE, 1);
    }

    #[test]
    fn param_command_is_tag_then_little_endian_parm() {
        let pkt = ParamCommand::new(Command(0x05), 0x1234);
        assert_eq!(pkt.as_bytes(), [0x05, 0x34, 0x12]);
        assert_eq!(ParamCommand::SIZE, 3);
        assert_eq!(pkt.parm(), 0x1234);
    }

    #[test]
    fn decode_ignores_trailing_bytes() -> Result<(), ProtocolError> {
        let buf = [0x05, 0x34, 0x12, 0xDE, 0xAD];
        let pkt = ParamCommand::decode(&buf)?;
        assert_eq!(pkt, ParamCommand::new(Command(0x05), 0x1234));
        Ok(())
    }

    #[test]
    fn decode_short_buffer_reports_size() {
        assert_eq!(
            ParamCommand::decode(&[0x05, 0x34]),
            Err(ProtocolError::Size { needed: 3, available: 2 })
        );
        assert_eq!(
            BareCommand::decode(&[]),
            Err(ProtocolError::Size { needed: 1, available: 0 })
        );
    }

    #[test]
    fn layout_selector_sizes_match_wire_sizes() {
        assert_eq!(PacketLayout::Bare.size(), 1);
        assert_eq!(PacketLayout::Param.size(), 3);
    }

    #[test]
    fn layout_selector_decodes_to_typed_packets() -> Result<(), ProtocolError> {
        let packet = PacketLayout::Param.decode(&[0x05, 0x34, 0x12])?;
        assert_eq!(packet, Packet::Param(ParamCommand::new(Command(0x05), 0x1234)));
        assert_eq!(packet.command(), Command(0x05));
        assert_eq!(packet.layout(), PacketLayout::Param);
        Ok(())
    }
}
