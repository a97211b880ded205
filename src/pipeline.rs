//! One-pass driver: scan lines, fix the sample columns, compare, emit.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::genomics::{
    classify_line, ComparisonRow, LineClass, SampleColumns, TableWriter, VariantRecord,
};
use crate::CompareError;

/// Line counts gathered during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// `##` meta-information lines skipped.
    pub meta_lines: usize,
    /// Lines that were empty after trimming.
    pub blank_lines: usize,
    /// Variant rows written.
    pub records: usize,
}

/// Transform a decompressed VCF line stream into the comparison table.
///
/// The header row is always written first. Each variant row is written as
/// soon as its line is parsed; the first malformed line aborts the run.
pub fn compare_haplotypes<R: BufRead, W: Write>(
    reader: R,
    writer: W,
) -> Result<RunSummary, CompareError> {
    let mut table = TableWriter::new(writer)?;
    let mut columns: Option<SampleColumns> = None;
    let mut summary = RunSummary::default();

    let mut line_no = 0;
    for chunk in reader.lines() {
        let chunk = chunk?;
        // A bare CR is a line break too, not part of the record.
        for line in chunk.split('\r') {
            line_no += 1;
            let line = line.trim();

            match classify_line(line) {
                LineClass::Blank => summary.blank_lines += 1,
                LineClass::Meta => summary.meta_lines += 1,
                LineClass::Header => {
                    if columns.is_some() {
                        return Err(CompareError::DuplicateHeader { line: line_no });
                    }
                    columns = Some(SampleColumns::from_header(line)?);
                }
                LineClass::Data => {
                    let sample_columns = columns
                        .as_ref()
                        .ok_or(CompareError::MissingHeader { line: line_no })?;
                    let record = VariantRecord::parse(line, sample_columns, line_no)?;
                    table.write_row(&ComparisonRow::from(&record))?;
                }
            }
        }
    }

    summary.records = table.rows();
    table.finish()?;

    match columns {
        None => warn!("input ended without a #CHROM header; table has no data rows"),
        Some(_) if summary.records == 0 => {
            warn!("input has a #CHROM header but no variant lines; table has no data rows")
        }
        Some(_) => {}
    }
    info!(
        records = summary.records,
        meta_lines = summary.meta_lines,
        blank_lines = summary.blank_lines,
        "haplotype comparison complete"
    );

    Ok(summary)
}
