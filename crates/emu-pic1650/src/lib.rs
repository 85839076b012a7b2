//! PIC1650 machine emulator.
//!
//! Wraps the `gi-pic1650` CPU core with the pieces a host needs to run
//! compiled program images: a ROM image loader, a CSV execution trace,
//! and a whole-ROM disassembly listing.

pub mod listing;
pub mod rom;
pub mod trace;

pub use rom::{ROM_BYTES, RomError, read_rom};
pub use trace::{TraceError, Tracer};
