#![no_std]

//! The diagnostic write sequence shared by the freestanding demo
//! binaries and the host-side tests: two fixed 6-byte payloads, one
//! success-or-failure marker per payload, nothing else.

use sys::SysRet;

/// First payload; the sequence writes it from a stack buffer.
pub const PAYLOAD_ONE: [u8; 6] = *b"Hello\n";

/// Second payload, written straight from read-only data.
pub const PAYLOAD_TWO: &[u8] = b"World\n";

/// Marker bytes for check `check` (0-based; only checks 0 and 1 exist).
///
/// The success form is chosen exactly when `ret` is non-negative. A
/// short write still counts as success here; the sequence only ever
/// inspects the sign.
pub fn result_marker(check: usize, ret: SysRet) -> &'static [u8] {
    match (check, sys::is_failure(ret)) {
        (0, false) => b"1OK\n",
        (0, true) => b"1ERR\n",
        (1, false) => b"2OK\n",
        _ => b"2ERR\n",
    }
}

/// The fixed diagnostic sequence: two independent writes to `fd`, then
/// one result marker per write, in program order.
///
/// Markers go to the same descriptor as the payloads, so on a dead
/// stream they vanish along with everything else; the returned pair is
/// the only observable in that case. Failures are reported, never
/// recovered, and the caller is expected to exit 0 regardless.
pub fn run_write_checks(fd: i32) -> [SysRet; 2] {
    // Payload one leaves from the stack, payload two from read-only
    // data; both paths must reach the same descriptor.
    let first: [u8; 6] = PAYLOAD_ONE;
    let r1 = sys::write(fd, &first);
    let r2 = sys::write(fd, PAYLOAD_TWO);

    sys::write(fd, result_marker(0, r1));
    sys::write(fd, result_marker(1, r2));

    [r1, r2]
}
