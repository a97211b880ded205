//! Genomics primitives for four-haplotype truth-set comparison.
//!
//! This module exposes the pieces the line-stream driver is built from:
//! VCF header/record parsing, the pairwise genotype comparator, the output
//! table writer and the file wrappers around them.

mod comparison;
pub mod io;
mod table;
mod types;
mod vcf;

pub use comparison::{compare_genotypes, HAPLOTYPE_PAIRS, MISSING_GENOTYPE};
pub use table::{ComparisonRow, TableWriter, OUTPUT_HEADER, ROW_TERMINATOR};
pub use types::{
    Haplotypes, PairCode, SampleColumns, VariantRecord, FIXED_COLUMNS, HAPLOTYPE_COUNT,
};
pub use vcf::{classify_line, LineClass};
