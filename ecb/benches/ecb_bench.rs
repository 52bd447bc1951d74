use aes::Aes256;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ecb::{BlockMode, Ecb, RustCrypto};

fn bench_ecb(c: &mut Criterion) {
    let cipher = RustCrypto::<Aes256>::new_from_slice(&[0x42; 32]).unwrap();
    let mut group = c.benchmark_group("ecb_aes256");

    for size in [1024usize, 64 * 1024, 1024 * 1024] {
        let data = vec![0xA5u8; size];
        let mut out = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &data, |b, data| {
            b.iter(|| Ecb::encrypter(&cipher).crypt_blocks(black_box(&mut out), black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &data, |b, data| {
            b.iter(|| Ecb::encrypter(&cipher).par_crypt_blocks(black_box(&mut out), black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ecb);
criterion_main!(benches);
