use core::marker::PhantomData;

use crate::SysRet;
use crate::arch;
use crate::nr;

/// Standard output descriptor, pre-opened by the execution environment.
pub const STDOUT: i32 = 1;

/// Standard error descriptor, pre-opened by the execution environment.
pub const STDERR: i32 = 2;

/// One element of a vectored write, laid out exactly like the kernel's
/// iovec: a base pointer followed by a byte length. The lifetime ties a
/// segment to the buffer it borrows, so the referenced memory cannot go
/// away before the call that uses it.
#[repr(C)]
pub struct IoSegment<'a> {
    base: *const u8,
    length: usize,
    _buf: PhantomData<&'a [u8]>,
}

impl<'a> IoSegment<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            base: buf.as_ptr(),
            length: buf.len(),
            _buf: PhantomData,
        }
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Transfer `buf` to the stream identified by `fd`.
///
/// Returns the number of bytes the kernel accepted, which may be fewer
/// than requested, or a negative failure code. Nothing here retries a
/// partial or interrupted transfer.
pub fn write(fd: i32, buf: &[u8]) -> SysRet {
    unsafe { arch::syscall3(nr::WRITE, fd as usize, buf.as_ptr() as usize, buf.len()) }
}

/// Transfer every segment of `segs` to `fd`, in array order, as a
/// single gathered write. Result semantics match [`write`]: the count
/// covers all segments together, and the kernel may still stop short.
pub fn writev(fd: i32, segs: &[IoSegment<'_>]) -> SysRet {
    unsafe {
        arch::syscall3(
            nr::WRITE_VECTOR,
            fd as usize,
            segs.as_ptr() as usize,
            segs.len(),
        )
    }
}
