//! Drives the inspector over hand-assembled minimal ELF64 images: a
//! 64-byte header plus one program header per segment, no sections.

use elfcheck::inspect_bytes;
use goblin::elf::header::EM_X86_64;

const ENTRY: u64 = 0x40_0000;

fn push_phdr(image: &mut Vec<u8>, p_type: u32, flags: u32, vaddr: u64, size: u64) {
    image.extend_from_slice(&p_type.to_le_bytes());
    image.extend_from_slice(&flags.to_le_bytes());
    image.extend_from_slice(&0u64.to_le_bytes()); // offset
    image.extend_from_slice(&vaddr.to_le_bytes());
    image.extend_from_slice(&vaddr.to_le_bytes()); // paddr
    image.extend_from_slice(&size.to_le_bytes()); // filesz
    image.extend_from_slice(&size.to_le_bytes()); // memsz
    image.extend_from_slice(&0x1000u64.to_le_bytes()); // align
}

fn minimal_elf(machine: u16, entry: u64, with_interp: bool) -> Vec<u8> {
    let phnum: u16 = if with_interp { 2 } else { 1 };

    let mut image = Vec::new();
    image.extend_from_slice(&[0x7f, b'E', b'L', b'F', 2, 1, 1, 0]); // ELF64, little-endian
    image.extend_from_slice(&[0u8; 8]); // ident padding
    image.extend_from_slice(&2u16.to_le_bytes()); // ET_EXEC
    image.extend_from_slice(&machine.to_le_bytes());
    image.extend_from_slice(&1u32.to_le_bytes()); // version
    image.extend_from_slice(&entry.to_le_bytes());
    image.extend_from_slice(&64u64.to_le_bytes()); // phoff: right after the header
    image.extend_from_slice(&0u64.to_le_bytes()); // shoff: no sections
    image.extend_from_slice(&0u32.to_le_bytes()); // flags
    image.extend_from_slice(&64u16.to_le_bytes()); // ehsize
    image.extend_from_slice(&56u16.to_le_bytes()); // phentsize
    image.extend_from_slice(&phnum.to_le_bytes());
    image.extend_from_slice(&0u16.to_le_bytes()); // shentsize
    image.extend_from_slice(&0u16.to_le_bytes()); // shnum
    image.extend_from_slice(&0u16.to_le_bytes()); // shstrndx

    // One R+X PT_LOAD covering the nominal entry address.
    push_phdr(&mut image, 1, 0x5, ENTRY, 0x1000);
    if with_interp {
        push_phdr(&mut image, 3, 0x4, ENTRY + 0x1000, 16);
    }
    image
}

#[test]
fn minimal_static_image_satisfies_the_contract() {
    let image = minimal_elf(EM_X86_64, ENTRY, false);
    let report = inspect_bytes(&image).unwrap();

    assert_eq!(report.machine, EM_X86_64);
    assert_eq!(report.entry, ENTRY);
    assert!(report.executable);
    assert!(report.statically_linked);
    assert!(report.entry_mapped);
    assert!(report.entry_symbol.is_none()); // no symtab in the minimal image
    assert!(report.is_freestanding());
}

#[test]
fn entry_outside_any_executable_segment_violates_the_contract() {
    let image = minimal_elf(EM_X86_64, ENTRY + 0x10_0000, false);
    let report = inspect_bytes(&image).unwrap();

    assert!(!report.entry_mapped);
    assert!(!report.is_freestanding());
}

#[test]
fn interpreter_segment_means_not_freestanding() {
    let image = minimal_elf(EM_X86_64, ENTRY, true);
    let report = inspect_bytes(&image).unwrap();

    assert!(!report.statically_linked);
    assert!(!report.is_freestanding());
}

#[test]
fn foreign_machine_is_rejected() {
    let image = minimal_elf(0xf3, ENTRY, false); // RISC-V
    let report = inspect_bytes(&image).unwrap();

    assert_eq!(report.machine, 0xf3);
    assert!(!report.is_freestanding());
}

#[test]
fn garbage_bytes_are_an_error() {
    assert!(inspect_bytes(b"definitely not an elf image").is_err());
}
