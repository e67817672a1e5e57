use goblin::elf::Elf;
use goblin::elf::header::{EM_X86_64, ET_DYN, ET_EXEC};
use goblin::elf::program_header::{PF_X, PT_INTERP, PT_LOAD};

/// What the entry contract requires of a built demo binary: the loader
/// must be able to jump straight to the entry with no interpreter and
/// no runtime setup.
pub struct EntryReport {
    /// Virtual address of the entry point.
    pub entry: u64,
    /// Machine tag from the ELF header.
    pub machine: u16,
    /// The image is an executable (ET_EXEC or a PIE-style ET_DYN).
    pub executable: bool,
    /// No PT_INTERP segment: nothing runs before the entry point.
    pub statically_linked: bool,
    /// The entry address falls inside an executable PT_LOAD segment.
    pub entry_mapped: bool,
    /// Name of the function symbol at the entry address, when a symbol
    /// table survived stripping.
    pub entry_symbol: Option<String>,
}

impl EntryReport {
    /// True when the image satisfies the freestanding entry contract.
    /// A stripped image passes as long as the structural checks hold;
    /// with symbols present, the entry must be `_start`.
    pub fn is_freestanding(&self) -> bool {
        self.machine == EM_X86_64
            && self.executable
            && self.statically_linked
            && self.entry_mapped
            && self
                .entry_symbol
                .as_deref()
                .map_or(true, |name| name == "_start")
    }
}

/// Parses `bytes` as an ELF image and reports how it stands against the
/// entry contract.
pub fn inspect_bytes(bytes: &[u8]) -> Result<EntryReport, goblin::error::Error> {
    let elf = Elf::parse(bytes)?;
    let entry = elf.header.e_entry;

    let statically_linked = !elf
        .program_headers
        .iter()
        .any(|ph| ph.p_type == PT_INTERP);

    let entry_mapped = elf.program_headers.iter().any(|ph| {
        ph.p_type == PT_LOAD
            && ph.p_flags & PF_X != 0
            && entry >= ph.p_vaddr
            && entry < ph.p_vaddr + ph.p_memsz
    });

    let entry_symbol = elf
        .syms
        .iter()
        .find(|sym| sym.is_function() && sym.st_value == entry)
        .and_then(|sym| elf.strtab.get_at(sym.st_name))
        .map(str::to_string);

    Ok(EntryReport {
        entry,
        machine: elf.header.e_machine,
        executable: matches!(elf.header.e_type, ET_EXEC | ET_DYN),
        statically_linked,
        entry_mapped,
        entry_symbol,
    })
}
