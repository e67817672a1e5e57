use std::env;
use std::fs;

use elfcheck::inspect_bytes;

fn main() {
    let path = env::args()
        .nth(1)
        .expect("pass a path to a built demo ELF as the first argument");
    let bytes = fs::read(&path).expect("failed to read the ELF file");

    let report = inspect_bytes(&bytes).expect("not a parseable ELF image");

    println!("entry:    {:#x}", report.entry);
    println!("machine:  {:#x}", report.machine);
    println!("static:   {}", report.statically_linked);
    println!("mapped:   {}", report.entry_mapped);
    println!(
        "symbol:   {}",
        report.entry_symbol.as_deref().unwrap_or("<stripped>")
    );

    if report.is_freestanding() {
        println!("contract: satisfied");
    } else {
        println!("contract: violated");
        std::process::exit(1);
    }
}
