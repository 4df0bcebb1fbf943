//! Filling the packet buffer from arbitrary slices must either hold
//! the exact bytes or reject the slice, never truncate silently.
#![no_main]

use apcmd_proto::PacketBuffer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match PacketBuffer::from_slice(data) {
        Ok(buf) => {
            assert_eq!(buf.as_bytes(), data);
            assert_eq!(buf.command().map(u8::from), data.first().copied());
        }
        Err(_) => assert!(data.len() > PacketBuffer::capacity()),
    }
});
