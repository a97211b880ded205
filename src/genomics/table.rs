use std::fmt;
use std::io::{self, Write};

use super::types::{PairCode, VariantRecord};

/// Column names of the comparison table, in output order.
pub const OUTPUT_HEADER: [&str; 11] = [
    "CHROM",
    "POS",
    "REF.Length",
    "ALT.Length",
    "DELTA.Length",
    "h1_h2",
    "h1_h3",
    "h1_h4",
    "h2_h3",
    "h2_h4",
    "h3_h4",
];

/// Terminator written after the header and after every data row.
pub const ROW_TERMINATOR: &str = "\r\n";

/// One output row derived from a variant record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow<'a> {
    /// Chromosome, verbatim.
    pub chrom: &'a str,
    /// Position, verbatim.
    pub pos: &'a str,
    /// REF length.
    pub ref_len: usize,
    /// ALT lengths in file order.
    pub alt_lengths: Vec<usize>,
    /// Longest ALT minus REF.
    pub delta_len: i64,
    /// Pair codes in h1_h2..h3_h4 order.
    pub codes: [PairCode; 6],
}

impl<'a> From<&VariantRecord<'a>> for ComparisonRow<'a> {
    fn from(record: &VariantRecord<'a>) -> Self {
        Self {
            chrom: record.chrom,
            pos: record.pos,
            ref_len: record.ref_len(),
            alt_lengths: record.alt_lengths(),
            delta_len: record.delta_len(),
            codes: record.haplotypes.pairwise(),
        }
    }
}

impl fmt::Display for ComparisonRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t", self.chrom, self.pos, self.ref_len)?;
        for (idx, len) in self.alt_lengths.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{len}")?;
        }
        write!(f, "\t{}", self.delta_len)?;
        for code in &self.codes {
            write!(f, "\t{code}")?;
        }
        Ok(())
    }
}

/// Tab-separated table writer. The header row is written on construction.
#[derive(Debug)]
pub struct TableWriter<W: Write> {
    inner: W,
    rows: usize,
}

impl<W: Write> TableWriter<W> {
    /// Wrap a sink and emit the fixed header row.
    pub fn new(mut inner: W) -> io::Result<Self> {
        write!(inner, "{}{ROW_TERMINATOR}", OUTPUT_HEADER.join("\t"))?;
        Ok(Self { inner, rows: 0 })
    }

    /// Write one data row.
    pub fn write_row(&mut self, row: &ComparisonRow<'_>) -> io::Result<()> {
        write!(self.inner, "{row}{ROW_TERMINATOR}")?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
