use crate::error::{LentilError, Result};
use std::fmt;

/// A genomic bin `chr:start-end`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenomicBin {
    pub chr: Box<str>,
    pub start: u64,
    pub end: u64,
}

impl fmt::Display for GenomicBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chr, self.start, self.end)
    }
}

/// One row of a contact matrix:
/// `chr1 start1 end1 chr2 start2 end2 value`
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRecord {
    pub bin1: GenomicBin,
    pub bin2: GenomicBin,
    pub value: f64,
}

impl ContactRecord {
    pub const NUM_FIELDS: usize = 7;

    pub fn new(bin1: GenomicBin, bin2: GenomicBin, value: f64) -> Self {
        Self { bin1, bin2, value }
    }

    /// Parse the seven fields in their fixed order. Coordinates
    /// must be non-negative integers and the value a finite real.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self> {
        if fields.len() != Self::NUM_FIELDS {
            return Err(LentilError::Parse(format!(
                "expected {} fields, found {}",
                Self::NUM_FIELDS,
                fields.len()
            )));
        }

        let f = |i: usize| fields[i].as_ref().trim();

        let bin1 = GenomicBin {
            chr: parse_chr(f(0))?,
            start: parse_coord(f(1), "start1")?,
            end: parse_coord(f(2), "end1")?,
        };
        let bin2 = GenomicBin {
            chr: parse_chr(f(3))?,
            start: parse_coord(f(4), "start2")?,
            end: parse_coord(f(5), "end2")?,
        };

        Ok(Self::new(bin1, bin2, parse_value(f(6))?))
    }

    /// Parse a tab-separated line
    pub fn parse_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();
        Self::from_fields(&fields)
    }

    /// `chr1:start1-end1;chr2:start2-end2`
    pub fn canonical_key(&self) -> Box<str> {
        format!("{};{}", self.bin1, self.bin2).into_boxed_str()
    }

    /// Key-value pair that goes into a sample vector
    pub fn into_key_value(self) -> (Box<str>, f64) {
        (self.canonical_key(), self.value)
    }
}

/// Parse one line into its canonical bin-pair key and value
pub fn normalize_line(line: &str) -> Result<(Box<str>, f64)> {
    ContactRecord::parse_line(line).map(ContactRecord::into_key_value)
}

fn parse_chr(s: &str) -> Result<Box<str>> {
    // these characters delimit the canonical key or the output tables
    if s.is_empty() || s.contains([':', ';', ',', '\t', ' ']) {
        return Err(LentilError::Parse(format!(
            "invalid chromosome name `{}`",
            s
        )));
    }
    Ok(s.into())
}

fn parse_coord(s: &str, what: &str) -> Result<u64> {
    s.parse::<u64>().map_err(|e| {
        LentilError::Parse(format!("{} `{}` is not a non-negative integer: {}", what, s, e))
    })
}

fn parse_value(s: &str) -> Result<f64> {
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        Ok(_) => Err(LentilError::Parse(format!("value `{}` is not finite", s))),
        Err(e) => Err(LentilError::Parse(format!(
            "value `{}` is not a number: {}",
            s, e
        ))),
    }
}
