/// Declares the raw `_start` entry symbol and the freestanding panic
/// handler around a `fn() -> i32`. The wrapped function's return value
/// becomes the process exit status.
///
/// Only for `#![no_std]` + `#![no_main]` binaries: the execution
/// environment jumps straight to `_start` with no runtime setup, and
/// the panic handler would collide with std's in a hosted build.
#[macro_export]
macro_rules! entry {
    ($main:path) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn _start() -> ! {
            let status: i32 = $main();
            $crate::exit(status)
        }

        #[panic_handler]
        fn panic(_info: &core::panic::PanicInfo) -> ! {
            $crate::exit(101)
        }
    };
}
