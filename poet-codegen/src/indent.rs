//! Indentation configuration for code generation.

const SPACES: &str = "        ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width, capped at 8.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, as recommended by PEP 8.
    pub const PEP8: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const COMPACT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }

    /// Write `depth` indent levels into `buffer`.
    pub fn write_to(&self, buffer: &mut String, depth: usize) {
        let unit = self.as_str();
        buffer.reserve(unit.len() * depth);
        for _ in 0..depth {
            buffer.push_str(unit);
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PEP8
    }
}
