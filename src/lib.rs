//! # Haplotype Truth-Set Comparison
//!
//! Builds a per-variant comparison table from a gzip-compressed VCF that
//! carries exactly four haplotype sample columns.
//!
//! ## Core Transformation
//!
//! 1. **Header scan**: `##` meta lines are skipped, the `#CHROM` line fixes
//!    the four sample-column positions once
//! 2. **Variant parse**: REF/ALT allele lengths and the delta between the
//!    longest ALT and REF
//! 3. **Pairwise comparison**: all six haplotype pairs are classified as
//!    both-missing, one-missing, same or different
//! 4. **Row emission**: one tab-separated row per variant, written as soon
//!    as it is computed
//!
//! ## Usage Example
//!
//! ```
//! use hapcompare::compare_haplotypes;
//!
//! let vcf = "##fileformat=VCFv4.2\n\
//!            #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tH1\tH2\tH3\tH4\n\
//!            chr1\t100\t.\tA\tAT\t.\tPASS\t.\tGT\t0\t1\t.\t0\n";
//! let mut table = Vec::new();
//! let summary = compare_haplotypes(vcf.as_bytes(), &mut table).unwrap();
//! assert_eq!(summary.records, 1);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod genomics; // VCF parsing, comparison and table primitives
pub mod pipeline; // One-pass line-stream driver

pub use genomics::{
    compare_genotypes, ComparisonRow, Haplotypes, PairCode, SampleColumns, TableWriter,
    VariantRecord, HAPLOTYPE_PAIRS, OUTPUT_HEADER,
};
pub use pipeline::{compare_haplotypes, RunSummary};

use thiserror::Error;

/// Errors that abort a comparison run.
///
/// None of these are recoverable: a dropped variant row would silently
/// skew downstream truth-set statistics, so every malformed line stops the
/// run.
#[derive(Error, Debug)]
pub enum CompareError {
    /// The `#CHROM` header did not list exactly four sample columns.
    #[error("Expected exactly 4 sample columns, but found {found}")]
    SampleCount {
        /// Number of sample columns present in the header.
        found: usize,
    },

    /// A variant line appeared before the `#CHROM` header.
    #[error("Variant line {line} appears before the #CHROM header")]
    MissingHeader {
        /// 1-based input line number.
        line: usize,
    },

    /// A second `#CHROM` header appeared after the sample columns were fixed.
    #[error("Duplicate #CHROM header on line {line}")]
    DuplicateHeader {
        /// 1-based input line number.
        line: usize,
    },

    /// A variant line has fewer tab-separated fields than the sample columns need.
    #[error("Truncated variant line {line}: expected at least {required} fields, found {found}")]
    TruncatedLine {
        /// 1-based input line number.
        line: usize,
        /// Minimum field count implied by the sample-column mapping.
        required: usize,
        /// Field count actually present.
        found: usize,
    },

    /// Reading the input stream or writing the table failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
