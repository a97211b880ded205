use super::types::{Haplotypes, PairCode};

/// Genotype token marking a missing call.
pub const MISSING_GENOTYPE: &str = ".";

/// Unordered haplotype pairs, in output column order: h1_h2, h1_h3, h1_h4,
/// h2_h3, h2_h4, h3_h4.
pub const HAPLOTYPE_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Classify two genotype tokens.
///
/// Missing-ness is checked before equality, so `(".", ".")` is
/// [`PairCode::BothMissing`] rather than [`PairCode::Same`].
pub fn compare_genotypes(a: &str, b: &str) -> PairCode {
    match (a == MISSING_GENOTYPE, b == MISSING_GENOTYPE) {
        (true, true) => PairCode::BothMissing,
        (true, false) | (false, true) => PairCode::OneMissing,
        (false, false) if a == b => PairCode::Same,
        (false, false) => PairCode::Different,
    }
}

impl Haplotypes<'_> {
    /// Comparison codes for all six pairs, ordered as [`HAPLOTYPE_PAIRS`].
    pub fn pairwise(&self) -> [PairCode; 6] {
        HAPLOTYPE_PAIRS.map(|(i, j)| compare_genotypes(self.get(i), self.get(j)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_table() {
        assert_eq!(compare_genotypes(".", "."), PairCode::BothMissing);
        assert_eq!(compare_genotypes(".", "0/1"), PairCode::OneMissing);
        assert_eq!(compare_genotypes("0/1", "."), PairCode::OneMissing);
        assert_eq!(compare_genotypes("0/1", "0/1"), PairCode::Same);
        assert_eq!(compare_genotypes("0/1", "1/1"), PairCode::Different);
    }

    #[test]
    fn unphased_order_is_not_normalized() {
        assert_eq!(compare_genotypes("0/1", "1/0"), PairCode::Different);
    }

    #[test]
    fn only_bare_dot_counts_as_missing() {
        assert_eq!(compare_genotypes("./.", "./."), PairCode::Same);
        assert_eq!(compare_genotypes("./.", "."), PairCode::OneMissing);
    }

    #[test]
    fn pairwise_follows_pair_order() {
        let haps = Haplotypes::new(["0/0", "0/1", ".", "0/0"]);
        let codes: Vec<char> = haps.pairwise().iter().map(|c| c.code()).collect();
        assert_eq!(codes, vec!['3', '2', '1', '2', '3', '2']);
    }
}
