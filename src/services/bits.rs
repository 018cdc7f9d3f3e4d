//! Random bit patterns for paired numeric/byte-array test parameters.

use rand::Rng;

/// A string of `0`/`1` digits, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPattern {
    digits: String,
}

impl BitPattern {
    pub fn generate<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Self {
        let digits = (0..width)
            .map(|_| if rng.random_bool(0.5) { '1' } else { '0' })
            .collect();
        Self { digits }
    }

    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// `0b_xxxxxxxx_xxxxxxxx...`, most significant byte first.
    pub fn unsigned_literal(&self) -> String {
        let mut out = String::from("0b");
        for byte in self.bytes_msb_first() {
            out.push('_');
            out.push_str(byte);
        }
        out
    }

    /// `0b_xxxxxxxx, 0b_xxxxxxxx, ...`, least significant byte first.
    pub fn byte_array_literal(&self) -> String {
        self.bytes_msb_first()
            .rev()
            .map(|b| format!("0b_{b}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn bytes_msb_first(&self) -> impl DoubleEndedIterator<Item = &str> {
        (0..self.digits.len() / 8).map(move |i| &self.digits[i * 8..i * 8 + 8])
    }
}
