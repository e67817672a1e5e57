#![no_std]

//! Raw x86-64 Linux system call shim: three fixed kernel operations
//! (write, vectored write, process exit) behind a narrow interface.
//! Every convention-specific detail lives in [`arch`]; nothing here
//! buffers, formats, retries, or allocates.

pub mod arch;

#[macro_use]
pub mod entry;

pub mod io;
pub use io::{IoSegment, STDERR, STDOUT, write, writev};

pub mod nr;

pub mod process;
pub use process::{exit, exit_group};

/// Raw result of a system call: non-negative values are the number of
/// bytes transferred, negative values are kernel failure codes. Exit
/// never produces one.
pub type SysRet = isize;

/// True when `ret` reports a kernel failure. A short transfer is not a
/// failure; callers that care must compare against the requested count.
pub fn is_failure(ret: SysRet) -> bool {
    ret < 0
}
