//! Command tags.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// One-byte command identifier, the first byte of every packet.
///
/// The set of valid tags is open: command tables are generated
/// elsewhere and differ per deployment, so the codec carries no enum
/// of known commands. A `Command` is only a tag; pairing it with a
/// packet layout is the receiver's job (see
/// [`PacketLayout`](crate::packet::PacketLayout)).
#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Command(pub u8);

impl Command {
    /// Raw tag value.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Command {
    fn from(tag: u8) -> Self {
        Self(tag)
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> Self {
        cmd.0
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn converts_to_and_from_raw_tags() {
        let cmd = Command::from(0xA5);
        assert_eq!(cmd.get(), 0xA5);
        assert_eq!(u8::from(cmd), 0xA5);
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Command(0x05).to_string(), "0x05");
        assert_eq!(Command(0xFF).to_string(), "0xff");
    }
}
