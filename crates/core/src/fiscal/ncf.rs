//! NCF (Número de Comprobante Fiscal) structural parsing.
//!
//! Report rows carry NCF strings verbatim; parsing is only used to flag
//! malformed numbers before a filing is submitted.

use thiserror::Error;

/// Series prefix of an NCF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NcfSeries {
    /// Series B, printed fiscal documents (11 characters).
    Standard,
    /// Series E, electronic fiscal documents / e-CF (13 characters).
    Electronic,
}

impl NcfSeries {
    /// Returns the series prefix letter.
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Self::Standard => 'B',
            Self::Electronic => 'E',
        }
    }

    /// Returns the total length of an NCF in this series.
    #[must_use]
    pub const fn ncf_len(self) -> usize {
        match self {
            Self::Standard => 11,
            Self::Electronic => 13,
        }
    }
}

/// Errors produced when parsing an NCF string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NcfError {
    /// The string is empty.
    #[error("NCF is empty")]
    Empty,

    /// The series letter is not 'B' or 'E'.
    #[error("NCF series must be 'B' or 'E', got '{0}'")]
    UnknownSeries(char),

    /// The string length does not match the series layout.
    #[error("NCF in series '{series}' must be {expected} characters, got {actual}")]
    WrongLength {
        /// Series prefix letter.
        series: char,
        /// Length the series requires.
        expected: usize,
        /// Length found.
        actual: usize,
    },

    /// A character after the series prefix is not an ASCII digit.
    #[error("NCF must be all digits after the series prefix")]
    NonDigit,
}

/// A structurally valid NCF.
///
/// Layout is the series letter, a two-digit document type, and the assigned
/// sequence: `B` + 2 + 8 digits, or `E` + 2 + 10 digits for e-CF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ncf {
    series: NcfSeries,
    document_code: String,
    sequence: String,
}

impl Ncf {
    /// Parses an NCF string, tolerating surrounding whitespace and lowercase
    /// input.
    pub fn parse(input: &str) -> Result<Self, NcfError> {
        let normalized = input.trim().to_uppercase();
        let Some(prefix) = normalized.chars().next() else {
            return Err(NcfError::Empty);
        };

        let series = match prefix {
            'B' => NcfSeries::Standard,
            'E' => NcfSeries::Electronic,
            other => return Err(NcfError::UnknownSeries(other)),
        };

        let expected = series.ncf_len();
        if normalized.len() != expected {
            return Err(NcfError::WrongLength {
                series: series.prefix(),
                expected,
                actual: normalized.len(),
            });
        }

        let payload = &normalized[1..];
        if !payload.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NcfError::NonDigit);
        }

        Ok(Self {
            series,
            document_code: payload[..2].to_string(),
            sequence: payload[2..].to_string(),
        })
    }

    /// Returns the series this NCF belongs to.
    #[must_use]
    pub const fn series(&self) -> NcfSeries {
        self.series
    }

    /// Returns the embedded two-digit document type code, uninterpreted.
    #[must_use]
    pub fn document_code(&self) -> &str {
        &self.document_code
    }

    /// Returns the assigned sequence digits.
    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Returns true for e-CF (series E) numbers.
    #[must_use]
    pub const fn is_electronic(&self) -> bool {
        matches!(self.series, NcfSeries::Electronic)
    }
}

impl std::fmt::Display for Ncf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.series.prefix(),
            self.document_code,
            self.sequence
        )
    }
}

impl std::str::FromStr for Ncf {
    type Err = NcfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
