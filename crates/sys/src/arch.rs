//! Register-pinned trap intrinsics for the x86-64 Linux kernel call
//! convention: call number in `rax`, arguments in `rdi`, `rsi`, `rdx`,
//! the `syscall` instruction, result back in `rax`. The instruction
//! clobbers `rcx` and `r11`.
//!
//! The `x86_64-unknown-none` bare target is accepted alongside hosted
//! Linux so the freestanding binaries can be linked without std; they
//! still run against the same kernel ABI.

use crate::SysRet;

/// Three-argument system call.
///
/// # Safety
/// Pointer-typed arguments must reference memory that stays valid and
/// readable for the whole call, and `nr` must denote a call taking at
/// most three arguments.
#[cfg(all(target_arch = "x86_64", any(target_os = "linux", target_os = "none")))]
pub unsafe fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) -> SysRet {
    let ret: SysRet;
    unsafe {
        core::arch::asm!(
            "syscall",
            inlateout("rax") nr as isize => ret,
            in("rdi") a1,
            in("rsi") a2,
            in("rdx") a3,
            out("rcx") _,
            out("r11") _,
            options(nostack),
        );
    }
    ret
}

/// One-argument system call that must not return. Only process
/// termination goes through here; the never type makes any control
/// flow after the trap unrepresentable.
///
/// # Safety
/// `nr` must denote a call that terminates the process.
#[cfg(all(target_arch = "x86_64", any(target_os = "linux", target_os = "none")))]
pub unsafe fn syscall1_noreturn(nr: usize, a1: usize) -> ! {
    unsafe {
        core::arch::asm!(
            "syscall",
            in("rax") nr,
            in("rdi") a1,
            options(noreturn, nostack),
        )
    }
}

// Inert stubs so the crate still type-checks on foreign targets.

/// # Safety
/// None of the arguments are inspected on this target.
#[cfg(not(all(target_arch = "x86_64", any(target_os = "linux", target_os = "none"))))]
pub unsafe fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) -> SysRet {
    let _ = (nr, a1, a2, a3);
    -38 // ENOSYS
}

/// # Safety
/// None of the arguments are inspected on this target.
#[cfg(not(all(target_arch = "x86_64", any(target_os = "linux", target_os = "none"))))]
pub unsafe fn syscall1_noreturn(nr: usize, a1: usize) -> ! {
    let _ = (nr, a1);
    loop {}
}
