//! Header scanning and variant-line parsing for four-haplotype VCF text.
//!
//! The parser does not read the per-record FORMAT declaration. The genotype
//! is always taken as the first `:`-delimited subfield of each sample column,
//! which holds for files that declare `GT` first.

use tracing::debug;

use super::types::{Haplotypes, SampleColumns, VariantRecord, FIXED_COLUMNS, HAPLOTYPE_COUNT};
use crate::CompareError;

const META_PREFIX: &str = "##";
const HEADER_PREFIX: &str = "#CHROM";

const CHROM_FIELD: usize = 0;
const POS_FIELD: usize = 1;
const REF_FIELD: usize = 3;
const ALT_FIELD: usize = 4;

/// Class of a single (already trimmed) input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty after trimming.
    Blank,
    /// `##` meta-information line.
    Meta,
    /// `#CHROM` column header.
    Header,
    /// Anything else is a variant record.
    Data,
}

/// Classify a trimmed line. Blank wins over every other class.
pub fn classify_line(line: &str) -> LineClass {
    if line.is_empty() {
        LineClass::Blank
    } else if line.starts_with(META_PREFIX) {
        LineClass::Meta
    } else if line.starts_with(HEADER_PREFIX) {
        LineClass::Header
    } else {
        LineClass::Data
    }
}

impl SampleColumns {
    /// Fix the sample-column positions from a `#CHROM` header line.
    ///
    /// Every column after the nine fixed VCF columns is a sample; there must
    /// be exactly four of them.
    pub fn from_header(line: &str) -> Result<Self, CompareError> {
        let total = line.split('\t').count();
        let found = total.saturating_sub(FIXED_COLUMNS);
        if found != HAPLOTYPE_COUNT {
            return Err(CompareError::SampleCount { found });
        }

        let mut positions = [0usize; HAPLOTYPE_COUNT];
        for (slot, position) in positions.iter_mut().zip(FIXED_COLUMNS..total) {
            *slot = position;
        }
        let columns = SampleColumns::new(positions);
        debug!(positions = ?columns.positions(), "fixed haplotype sample columns");
        Ok(columns)
    }
}

impl<'a> VariantRecord<'a> {
    /// Parse one trimmed variant line using the header's sample columns.
    ///
    /// `line_no` is only used for error reporting.
    pub fn parse(
        line: &'a str,
        columns: &SampleColumns,
        line_no: usize,
    ) -> Result<Self, CompareError> {
        let fields: Vec<&'a str> = line.split('\t').collect();
        let required = columns.required_fields();
        if fields.len() < required {
            return Err(CompareError::TruncatedLine {
                line: line_no,
                required,
                found: fields.len(),
            });
        }

        let tokens = columns.positions().map(|idx| genotype_token(fields[idx]));

        Ok(VariantRecord {
            chrom: fields[CHROM_FIELD],
            pos: fields[POS_FIELD],
            reference: fields[REF_FIELD],
            alternates: fields[ALT_FIELD].split(',').collect(),
            haplotypes: Haplotypes::new(tokens),
        })
    }
}

/// First `:` subfield of a sample column.
fn genotype_token(sample: &str) -> &str {
    sample.split(':').next().unwrap_or(sample)
}
