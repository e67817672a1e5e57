#![no_std]
#![no_main]

//! Single-call baseline: one write straight to stdout and an exit, in
//! one fused block with the registers loaded by hand. No shim, no
//! diagnostics; the other binaries go through the `sys` crate instead.

use core::arch::asm;

#[unsafe(no_mangle)]
pub extern "C" fn _start() -> ! {
    let msg: [u8; 6] = *b"Hello\n";
    unsafe {
        asm!(
            "mov eax, 1",  // write
            "mov edi, 1",  // stdout
            "mov edx, 6",  // length
            "syscall",
            "mov eax, 60", // exit
            "xor edi, edi", // status 0
            "syscall",
            in("rsi") msg.as_ptr(),
            options(noreturn, nostack),
        )
    }
}

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}
