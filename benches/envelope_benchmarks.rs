use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ethseal::{aes, demo, SymmetricKey, Wallet};

const PRIVATE_KEY: &str = "0x0123456789012345678901234567890123456789012345678901234567890123";

fn wallet_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("wallet");

    group.bench_function("from_private_key", |b| {
        b.iter(|| Wallet::from_private_key(PRIVATE_KEY))
    });

    let wallet = Wallet::from_private_key(PRIVATE_KEY).unwrap();
    group.bench_function("address", |b| b.iter(|| wallet.address()));

    group.finish();
}

fn aes_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("aes");
    let key = SymmetricKey::generate().unwrap();

    group.bench_function("evp_bytes_to_key", |b| {
        b.iter(|| aes::evp_bytes_to_key(key.as_passphrase().as_bytes(), &[7u8; aes::SALT_LEN]))
    });

    for size in [32usize, 1024, 65536].iter() {
        let data = vec![0x42u8; *size];
        group.bench_with_input(BenchmarkId::new("encrypt", size), size, |b, _| {
            b.iter(|| aes::encrypt(&data, key.as_passphrase()))
        });

        let sealed = aes::encrypt(&data, key.as_passphrase()).unwrap();
        group.bench_with_input(BenchmarkId::new("decrypt", size), size, |b, _| {
            b.iter(|| aes::decrypt(&sealed, key.as_passphrase()))
        });
    }

    group.finish();
}

fn demo_benchmarks(c: &mut Criterion) {
    c.bench_function("demo_run_default", |b| b.iter(demo::run_default));
}

criterion_group!(benches, wallet_benchmarks, aes_benchmarks, demo_benchmarks);
criterion_main!(benches);
