use crate::arch;
use crate::nr;

/// Terminate the calling process immediately, reporting `status` to the
/// execution environment.
///
/// No cleanup runs: no destructors, no flushing. Anything that must
/// reach a stream has to have been written before this call. The never
/// type keeps any code after the call unreachable.
pub fn exit(status: i32) -> ! {
    unsafe { arch::syscall1_noreturn(nr::EXIT, status as usize) }
}

/// Terminate every thread in the process. The programs here are
/// single-threaded, so this behaves exactly like [`exit`].
pub fn exit_group(status: i32) -> ! {
    unsafe { arch::syscall1_noreturn(nr::EXIT_GROUP, status as usize) }
}
