//! PIC1650 emulator binary.
//!
//! Reads a 1024-byte ROM image (from `--rom <file>` or stdin) and runs
//! it silently, runs it with a CSV trace on stdout, or disassembles the
//! whole image to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use emu_pic1650::{Tracer, listing, read_rom};
use gi_pic1650::{IllegalInstruction, Pic1650, ROM_WORDS};

struct CliArgs {
    rom_path: Option<PathBuf>,
    trace: bool,
    disasm: bool,
    ticks: Option<u64>,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        rom_path: None,
        trace: false,
        disasm: false,
        ticks: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rom" => {
                i += 1;
                cli.rom_path = args.get(i).map(PathBuf::from);
            }
            "--trace" => {
                cli.trace = true;
            }
            "--disasm" => {
                cli.disasm = true;
            }
            "--ticks" => {
                i += 1;
                cli.ticks = args.get(i).and_then(|s| s.parse().ok());
            }
            "--help" | "-h" => {
                eprintln!("Usage: emu-pic1650 [OPTIONS]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --rom <file>   ROM image, 512 LE 16-bit words (default: stdin)");
                eprintln!("  --trace        Write a CSV trace of every instruction to stdout");
                eprintln!("  --disasm       Disassemble the image to stdout instead of running");
                eprintln!("  --ticks <n>    Stop after n instructions (default: run until fault)");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn load_rom(cli: &CliArgs) -> [u16; ROM_WORDS] {
    let result = match cli.rom_path {
        Some(ref path) => File::open(path)
            .map_err(Into::into)
            .and_then(|mut file| read_rom(&mut file)),
        None => read_rom(&mut io::stdin().lock()),
    };

    match result {
        Ok(rom) => rom,
        Err(e) => {
            eprintln!("Failed to load ROM: {e}");
            process::exit(1);
        }
    }
}

fn run_silent(pic: &mut Pic1650, ticks: Option<u64>) -> Result<(), IllegalInstruction> {
    match ticks {
        Some(n) => {
            for _ in 0..n {
                pic.tick()?;
            }
            Ok(())
        }
        None => loop {
            pic.tick()?;
        },
    }
}

fn run_traced(pic: &mut Pic1650, ticks: Option<u64>) {
    let stdout = io::stdout().lock();
    let mut tracer = match Tracer::new(BufWriter::new(stdout)) {
        Ok(tracer) => tracer,
        Err(e) => {
            eprintln!("Failed to start trace: {e}");
            process::exit(1);
        }
    };

    let result = match ticks {
        Some(n) => (0..n).try_for_each(|_| tracer.tick(pic)),
        None => loop {
            if let Err(e) = tracer.tick(pic) {
                break Err(e);
            }
        },
    };

    if let Err(e) = tracer.into_inner().flush() {
        eprintln!("Trace flush failed: {e}");
        process::exit(1);
    }
    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn main() {
    let cli = parse_args();
    let rom = load_rom(&cli);

    if cli.disasm {
        let stdout = io::stdout().lock();
        let mut out = BufWriter::new(stdout);
        if let Err(e) = listing::disassemble_rom(&rom, &mut out).and_then(|()| out.flush()) {
            eprintln!("Disassembly failed: {e}");
            process::exit(1);
        }
        return;
    }

    let mut pic = Pic1650::new(rom);
    if cli.trace {
        run_traced(&mut pic, cli.ticks);
    } else if let Err(e) = run_silent(&mut pic, cli.ticks) {
        eprintln!("{e}");
        process::exit(1);
    }
}
