//! Throughput of the per-line transformation

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hapcompare::compare_haplotypes;

const HEADER: &str = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tH1\tH2\tH3\tH4";
const GENOTYPES: [&str; 5] = [".", "0/0", "0/1", "1/1", "1/0"];

fn synthetic_vcf(records: usize) -> String {
    let mut vcf = format!("##fileformat=VCFv4.2\n{HEADER}\n");
    for i in 0..records {
        let gt = |k: usize| GENOTYPES[(i + k) % GENOTYPES.len()];
        vcf.push_str(&format!(
            "chr1\t{}\t.\tACGT\tA,ACGTACGT\t.\tPASS\t.\tGT:DP\t{}:10\t{}:12\t{}:9\t{}:11\n",
            i + 1,
            gt(0),
            gt(1),
            gt(3),
            gt(4),
        ));
    }
    vcf
}

fn benchmark_comparison(c: &mut Criterion) {
    let vcf = synthetic_vcf(10_000);
    let mut group = c.benchmark_group("compare_haplotypes");
    group.throughput(Throughput::Bytes(vcf.len() as u64));
    group.bench_function("records=10000", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(vcf.len());
            let summary = compare_haplotypes(black_box(vcf.as_bytes()), &mut out).unwrap();
            black_box(summary);
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_comparison);
criterion_main!(benches);
