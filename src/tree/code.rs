use crate::foundation::error::{HuffvisError, HuffvisResult};
use std::fmt;

/// A prefix-code bit string, most significant (root-side) bit first.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// The empty code (the root's own path).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a string of `'0'` and `'1'` characters.
    pub fn parse(s: &str) -> HuffvisResult<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(HuffvisError::validation(format!(
                    "code '{s}' contains non-bit character '{other}'"
                ))),
            })
            .collect::<HuffvisResult<Vec<_>>>()?;
        Ok(Self { bits })
    }

    /// Return a copy of this code with one more bit appended.
    pub fn child(&self, bit: bool) -> Self {
        let mut bits = self.bits.clone();
        bits.push(bit);
        Self { bits }
    }

    /// Bits in path order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Code length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// `true` for the empty code.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Code {
    type Err = HuffvisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
