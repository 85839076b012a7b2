//! Whole-ROM disassembly listing.

use std::io::{self, Write};

use gi_pic1650::{IllegalInstruction, ROM_WORDS, decode};

/// Write one line per ROM word: the address in decimal and hex, then
/// the disassembled instruction.
///
/// Undecodable words print their illegal-instruction message in place
/// of a mnemonic; a listing covers the whole image either way.
///
/// # Errors
///
/// Propagates write failures from the sink.
pub fn disassemble_rom<W: Write>(rom: &[u16; ROM_WORDS], out: &mut W) -> io::Result<()> {
    for (pc, &word) in rom.iter().enumerate() {
        write!(out, "{pc:<3} x{pc:03X}:   ")?;
        match decode(word) {
            Some(inst) => writeln!(out, "{inst}")?,
            None => writeln!(out, "{}", IllegalInstruction(word))?,
        }
    }
    Ok(())
}
