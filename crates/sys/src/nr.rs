//! Linux x86-64 system call numbers.
//!
//! Only `WRITE`, `WRITE_VECTOR`, `EXIT` and `EXIT_GROUP` are wrapped by
//! this crate. The rest are calls a minimal static binary still runs
//! into during startup or teardown; they are listed so a port to
//! another kernel has the full set to re-map in one place.

/// write() - output a contiguous buffer to a file descriptor.
pub const WRITE: usize = 1;

/// close() - close a file descriptor.
pub const CLOSE: usize = 3;

/// ioctl() - device-specific input/output control.
pub const IO_CONTROL: usize = 16;

/// writev() - output data gathered from multiple buffers.
pub const WRITE_VECTOR: usize = 20;

/// exit() - terminate the calling thread.
pub const EXIT: usize = 60;

/// arch_prctl() - set architecture-specific thread state.
pub const ARCH_PROCESS_CONTROL: usize = 158;

/// set_tid_address() - set the pointer to the thread ID.
pub const SET_THREAD_ID_ADDRESS: usize = 218;

/// exit_group() - terminate every thread in the process.
pub const EXIT_GROUP: usize = 231;
