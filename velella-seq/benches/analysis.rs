use criterion::{black_box, criterion_group, criterion_main, Criterion};
use velella_seq::motif::{find_motifs, MotifQuery};
use velella_seq::{frequency_report, gc_report, DnaSequence};

fn random_dna(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut state: u64 = 42;
    for _ in 0..len {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        seq.push(bases[((state >> 33) % 4) as usize]);
    }
    seq
}

fn bench_gc(c: &mut Criterion) {
    let seq = DnaSequence::new(random_dna(1_000_000)).unwrap();
    c.bench_function("gc_report_1mb", |b| b.iter(|| gc_report(black_box(&seq))));
}

fn bench_frequency(c: &mut Criterion) {
    let seq = DnaSequence::new(random_dna(1_000_000)).unwrap();
    c.bench_function("frequency_report_1mb", |b| {
        b.iter(|| frequency_report(black_box(&seq)))
    });
}

fn bench_motif(c: &mut Criterion) {
    let seq = DnaSequence::new(random_dna(1_000_000)).unwrap();
    let literal = MotifQuery::literal("GATTACA");
    let regex = MotifQuery::regex("GAT+ACA");

    let mut group = c.benchmark_group("motif_search_1mb");
    group.bench_function("literal", |b| {
        b.iter(|| find_motifs(black_box(&seq), black_box(&literal)))
    });
    group.bench_function("regex", |b| {
        b.iter(|| find_motifs(black_box(&seq), black_box(&regex)))
    });
    group.finish();
}

criterion_group!(benches, bench_gc, bench_frequency, bench_motif);
criterion_main!(benches);
