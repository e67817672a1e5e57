#![no_std]
#![no_main]

//! Vectored variant: the greeting leaves in a single gathered transfer
//! over two segments instead of two separate writes.

use sys::{IoSegment, STDOUT, writev};

fn main() -> i32 {
    let head = b"Hello, ";
    let tail = b"world\n";
    let segments = [IoSegment::new(head), IoSegment::new(tail)];
    writev(STDOUT, &segments);
    0
}

sys::entry!(main);
