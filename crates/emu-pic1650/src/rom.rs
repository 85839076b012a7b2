//! ROM image loading.
//!
//! An image is exactly 512 little-endian 16-bit words (1024 bytes).
//! Each word carries a 12-bit opcode; bits 12-15 are dropped on load.

use std::fmt;
use std::io::{self, Read};

use gi_pic1650::ROM_WORDS;

/// Image size in bytes.
pub const ROM_BYTES: usize = ROM_WORDS * 2;

#[derive(Debug)]
pub enum RomError {
    /// The stream ended after this many bytes, short of a full image.
    TooShort(usize),
    Io(io::Error),
}

impl fmt::Display for RomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(got) => {
                write!(f, "short ROM image: {got} bytes (expected {ROM_BYTES})")
            }
            Self::Io(e) => write!(f, "ROM read failed: {e}"),
        }
    }
}

impl std::error::Error for RomError {}

impl From<io::Error> for RomError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Read a full ROM image from a byte stream.
///
/// # Errors
///
/// [`RomError::TooShort`] if the stream ends early; a truncated image
/// is rejected rather than padded. [`RomError::Io`] on read failure.
pub fn read_rom<R: Read>(reader: &mut R) -> Result<[u16; ROM_WORDS], RomError> {
    let mut bytes = [0u8; ROM_BYTES];
    let mut filled = 0;
    while filled < ROM_BYTES {
        match reader.read(&mut bytes[filled..]) {
            Ok(0) => return Err(RomError::TooShort(filled)),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }

    let mut rom = [0u16; ROM_WORDS];
    for (word, pair) in rom.iter_mut().zip(bytes.chunks_exact(2)) {
        *word = u16::from_le_bytes([pair[0], pair[1]]) & 0x0FFF;
    }
    Ok(rom)
}
