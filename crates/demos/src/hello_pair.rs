#![no_std]
#![no_main]

//! Dual-call variant: two payload writes to stdout followed by one
//! result marker per write. The exit status stays 0 whether or not the
//! writes succeeded; failures are only visible through the markers.

use demos::run_write_checks;
use sys::STDOUT;

fn main() -> i32 {
    run_write_checks(STDOUT);
    0
}

sys::entry!(main);
