//! Host-side checks for the freestanding demo binaries: parse a built
//! ELF image and verify the process entry contract — raw `_start`
//! entry, statically linked, x86-64.

pub mod elf;
pub use elf::{EntryReport, inspect_bytes};
