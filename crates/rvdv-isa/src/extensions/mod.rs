//! RISC-V instruction set extensions.
//!
//! Each extension decodes its own slice of the encoding space. The composite
//! decoder tries them in order and the first one that recognises an encoding
//! wins, so the order only matters where encodings overlap.

mod a;
mod base;
mod c;
mod m;
mod system;
mod zicsr;
mod zifencei;

pub use a::AExtension;
pub use base::BaseExtension;
pub use c::CExtension;
pub use m::MExtension;
pub use system::SystemExtension;
pub use zicsr::ZicsrExtension;
pub use zifencei::ZifenceiExtension;

use crate::{DecodeError, DecodedInstr};

/// Extension point for instruction decoding.
pub trait InstructionExtension: Send + Sync {
    /// Extension name (for diagnostics).
    fn name(&self) -> &'static str;

    /// Try to decode a 32-bit encoding. Return None to fall through.
    fn decode32(&self, _raw: u32) -> Option<DecodedInstr> {
        None
    }

    /// Try to decode a 16-bit compressed encoding. Return None to fall through.
    fn decode16(&self, _raw: u16) -> Option<DecodedInstr> {
        None
    }
}

/// Anything that can turn a raw encoding into disassembly text.
///
/// Failing to decode is an expected outcome, not a fault in the caller.
pub trait Disassembler {
    /// Disassemble `raw` into `"mnemonic operands"` text.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the encoding is not recognised.
    fn disassemble(&self, raw: u64) -> Result<String, DecodeError>;
}

/// Composite decoder that chains multiple extensions.
pub struct CompositeDecoder {
    extensions: Vec<Box<dyn InstructionExtension>>,
}

impl CompositeDecoder {
    /// Create a new composite decoder with the given extensions.
    #[must_use]
    pub fn new(extensions: Vec<Box<dyn InstructionExtension>>) -> Self {
        Self { extensions }
    }

    /// Create a composite decoder with all supported RV64 extensions.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(CExtension),
            Box::new(BaseExtension),
            Box::new(MExtension),
            Box::new(AExtension),
            Box::new(ZicsrExtension),
            Box::new(ZifenceiExtension),
            Box::new(SystemExtension),
        ])
    }

    /// Create an empty composite decoder (no extensions).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            extensions: Vec::new(),
        }
    }

    /// Add an extension to the decoder chain.
    #[must_use]
    pub fn with_extension(mut self, ext: impl InstructionExtension + 'static) -> Self {
        self.extensions.push(Box::new(ext));
        self
    }

    /// Names of the extensions in decode order.
    pub fn extension_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.extensions.iter().map(|ext| ext.name())
    }

    /// Decode a raw encoding.
    ///
    /// The encoding width is inferred from the value: anything with the low
    /// two bits clear of `0b11` that fits in 16 bits is compressed, anything
    /// else must fit in 32 bits.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TooWide`] for values above 32 bits and
    /// [`DecodeError::Unsupported`] when no extension recognises the encoding.
    pub fn decode(&self, raw: u64) -> Result<DecodedInstr, DecodeError> {
        let word = u32::try_from(raw).map_err(|_| DecodeError::TooWide(raw))?;

        let decoded = if word & 0x3 == 0x3 {
            self.extensions.iter().find_map(|ext| ext.decode32(word))
        } else if let Ok(half) = u16::try_from(word) {
            self.extensions.iter().find_map(|ext| ext.decode16(half))
        } else {
            None
        };

        decoded.ok_or(DecodeError::Unsupported(word))
    }
}

impl Default for CompositeDecoder {
    fn default() -> Self {
        Self::standard()
    }
}

impl Disassembler for CompositeDecoder {
    fn disassemble(&self, raw: u64) -> Result<String, DecodeError> {
        self.decode(raw).map(|instr| instr.to_string())
    }
}
