//! Decoding arbitrary bytes must never panic or read out of bounds,
//! and anything that decodes must re-encode to the same prefix.
#![no_main]

use apcmd_proto::{BareCommand, PacketLayout, ParamCommand, Wire};
use libfuzzer_sys::fuzz_target;
use zerocopy::IntoBytes as _;

fuzz_target!(|data: &[u8]| {
    if let Ok(pkt) = BareCommand::decode(data) {
        assert_eq!(pkt.as_bytes(), &data[..BareCommand::SIZE]);
    }
    if let Ok(pkt) = ParamCommand::decode(data) {
        assert_eq!(pkt.as_bytes(), &data[..ParamCommand::SIZE]);
    }
    let _ = PacketLayout::Bare.decode(data);
    let _ = PacketLayout::Param.decode(data);
});
