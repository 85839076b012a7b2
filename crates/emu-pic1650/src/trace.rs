//! CSV execution trace.
//!
//! One row per executed instruction: the full register file, the output
//! latches, both stack slots, the raw opcode, and its disassembly. The
//! header goes out once at construction; downstream consumers key on
//! these exact column names.

use std::fmt;
use std::io::{self, Write};

use gi_pic1650::{IllegalInstruction, Instruction, Pic1650};

/// Fixed header row.
pub const HEADER: &str = "cnt,starting_pc,rtcc,pc,C,DC,Z,fsr,w,RA,RB,RC,RD,\
                          f9,f10,f11,r12,f13,f14,f15,f16,f17,f18,f19,f20,f21,f22,f23,f24,f25,\
                          f26,f27,f28,r29,f30,f31,stack0,stack1,opcode,decoded";

#[derive(Debug)]
pub enum TraceError {
    /// The CPU faulted; no row is emitted for the faulting tick.
    Cpu(IllegalInstruction),
    /// The sink rejected a row.
    Io(io::Error),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "trace write failed: {e}"),
        }
    }
}

impl std::error::Error for TraceError {}

impl From<IllegalInstruction> for TraceError {
    fn from(e: IllegalInstruction) -> Self {
        Self::Cpu(e)
    }
}

impl From<io::Error> for TraceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Trace emitter wrapping the executor.
///
/// Borrows nothing from the CPU; the sink is owned for the emitter's
/// lifetime. The cycle counter starts at zero and advances once per
/// emitted row.
pub struct Tracer<W: Write> {
    out: W,
    cycles: u64,
}

impl<W: Write> Tracer<W> {
    /// Create a tracer and emit the header row.
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "{HEADER}")?;
        Ok(Self { out, cycles: 0 })
    }

    /// Rows emitted so far.
    #[must_use]
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Consume the tracer, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Execute one instruction and emit its row.
    ///
    /// Captures the starting PC and opcode before the tick so the row
    /// shows what was fetched, then the post-tick state.
    pub fn tick(&mut self, pic: &mut Pic1650) -> Result<(), TraceError> {
        let starting_pc = pic.pc();
        let opcode = pic.rom_word(starting_pc);
        let inst = pic.tick()?;
        self.write_row(pic, starting_pc, opcode, inst)?;
        Ok(())
    }

    fn write_row(
        &mut self,
        pic: &Pic1650,
        starting_pc: u16,
        opcode: u16,
        inst: Instruction,
    ) -> io::Result<()> {
        let regs = pic.registers();
        write!(
            self.out,
            "{},{},{},{},{},{},{},{},{},",
            self.cycles,
            starting_pc,
            regs.rtcc,
            regs.pc,
            u8::from(regs.status.c),
            u8::from(regs.status.dc),
            u8::from(regs.status.z),
            regs.fsr,
            regs.w,
        )?;
        for latch in pic.output_latches() {
            write!(self.out, "0b{latch:08b},")?;
        }
        for gpr in regs.gpr {
            write!(self.out, "{gpr},")?;
        }
        writeln!(
            self.out,
            "{},{},0b{opcode:012b},{inst}",
            regs.stack[0], regs.stack[1],
        )?;
        self.cycles += 1;
        Ok(())
    }
}
