use std::fmt;

/// Number of fixed VCF columns preceding the sample columns.
pub const FIXED_COLUMNS: usize = 9;

/// Number of haplotype sample columns a truth-set VCF must carry.
pub const HAPLOTYPE_COUNT: usize = 4;

/// Positions of the four haplotype columns, fixed once from the `#CHROM` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleColumns {
    positions: [usize; HAPLOTYPE_COUNT],
}

impl SampleColumns {
    /// Construct from explicit 0-based column positions, in h1..h4 order.
    pub fn new(positions: [usize; HAPLOTYPE_COUNT]) -> Self {
        Self { positions }
    }

    /// Column positions in h1..h4 order.
    pub fn positions(&self) -> &[usize; HAPLOTYPE_COUNT] {
        &self.positions
    }

    /// Minimum number of tab-separated fields a variant line needs.
    pub fn required_fields(&self) -> usize {
        let last = self.positions.iter().copied().max().unwrap_or(0);
        (last + 1).max(FIXED_COLUMNS)
    }
}

/// Genotype tokens for h1..h4, in header order.
///
/// Tokens are opaque text: `0/1` and `1/0` are different genotypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Haplotypes<'a> {
    tokens: [&'a str; HAPLOTYPE_COUNT],
}

impl<'a> Haplotypes<'a> {
    /// Wrap four genotype tokens.
    pub fn new(tokens: [&'a str; HAPLOTYPE_COUNT]) -> Self {
        Self { tokens }
    }

    /// Genotype token of haplotype `index` (0-based, so `get(0)` is h1).
    pub fn get(&self, index: usize) -> &'a str {
        self.tokens[index]
    }

    /// All four tokens.
    pub fn tokens(&self) -> &[&'a str; HAPLOTYPE_COUNT] {
        &self.tokens
    }
}

/// One parsed variant line, borrowing from the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord<'a> {
    /// Chromosome/contig name, verbatim.
    pub chrom: &'a str,
    /// Position, verbatim (not reparsed as an integer).
    pub pos: &'a str,
    /// Reference allele.
    pub reference: &'a str,
    /// Alternate alleles in file order (at least one, possibly empty strings).
    pub alternates: Vec<&'a str>,
    /// Genotype tokens of the four haplotypes.
    pub haplotypes: Haplotypes<'a>,
}

impl VariantRecord<'_> {
    /// Reference allele length in characters.
    pub fn ref_len(&self) -> usize {
        allele_len(self.reference)
    }

    /// Alternate allele lengths, in file order.
    pub fn alt_lengths(&self) -> Vec<usize> {
        self.alternates.iter().map(|alt| allele_len(alt)).collect()
    }

    /// Length of the longest alternate allele.
    pub fn max_alt_len(&self) -> usize {
        self.alternates
            .iter()
            .map(|alt| allele_len(alt))
            .max()
            .unwrap_or(0)
    }

    /// Longest ALT length minus REF length. Negative for deletions.
    pub fn delta_len(&self) -> i64 {
        self.max_alt_len() as i64 - self.ref_len() as i64
    }
}

fn allele_len(allele: &str) -> usize {
    allele.chars().count()
}

/// Relationship between two haplotype genotype tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairCode {
    /// Both tokens are the missing marker (`0`).
    BothMissing,
    /// Neither token is missing and they are equal (`1`).
    Same,
    /// Exactly one token is missing (`2`).
    OneMissing,
    /// Neither token is missing and they differ (`3`).
    Different,
}

impl PairCode {
    /// Single-digit code written to the output table.
    pub fn code(self) -> char {
        match self {
            PairCode::BothMissing => '0',
            PairCode::Same => '1',
            PairCode::OneMissing => '2',
            PairCode::Different => '3',
        }
    }
}

impl fmt::Display for PairCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
