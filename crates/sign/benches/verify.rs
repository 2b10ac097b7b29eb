//! Benchmarks for Dilithium signature verification.
//!
//! Valid signatures come from the SigVer vector file. The message-size
//! benchmarks verify against random messages, which run the full pipeline and
//! are rejected only at the final comparison.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dverify_params::pqc::dilithium::{
    Dilithium2Params, Dilithium3Params, Dilithium5Params, DilithiumSchemeParams,
};
use dverify_sign::pq::dilithium;
use dverify_sign::DilithiumVerifier;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Message sizes to benchmark (in bytes)
const MESSAGE_SIZES: &[usize] = &[
    32,    // Small message (hash size)
    256,   // Medium message
    1024,  // 1 KB
    4096,  // 4 KB
    16384, // 16 KB
    65536, // 64 KB
];

struct Vector {
    msg: Vec<u8>,
    pk: Vec<u8>,
    sig: Vec<u8>,
}

/// First accepting vector of `[section]`
fn load_vector(section: &str) -> Vector {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/vectors/SigVer.rsp");
    let content = fs::read_to_string(path).expect("vector file");

    let header = format!("[{}]", section);
    let mut in_section = false;
    let (mut msg, mut pk, mut sig) = (None, None, None);
    for line in content.lines().map(str::trim) {
        if line.starts_with('[') {
            in_section = line == header;
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some(v) = line.strip_prefix("msg = ") {
            msg = hex::decode(v).ok();
        } else if let Some(v) = line.strip_prefix("pk = ") {
            pk = hex::decode(v).ok();
        } else if let Some(v) = line.strip_prefix("sig = ") {
            sig = hex::decode(v).ok();
        } else if line == "result = P" {
            if let (Some(msg), Some(pk), Some(sig)) = (msg.take(), pk.take(), sig.take()) {
                return Vector { msg, pk, sig };
            }
        }
    }
    panic!("no accepting vector in [{}]", section);
}

fn bench_level<P: DilithiumSchemeParams>(c: &mut Criterion, section: &str) {
    let v = load_vector(section);
    let verifier = DilithiumVerifier::<P>::new(&v.pk).expect("valid key");

    let mut group = c.benchmark_group(format!("{}_verify", section.to_lowercase()));

    group.bench_function("core_entry_point", |b| {
        b.iter(|| {
            let _ = black_box(dilithium::verify::<P>(
                black_box(&v.pk),
                black_box(&v.msg),
                black_box(&v.sig),
            ));
        });
    });

    group.bench_function("key_bound_verifier", |b| {
        b.iter(|| {
            let _ = black_box(verifier.verify(black_box(&v.sig), black_box(&v.msg)));
        });
    });

    group.bench_function("verifier_new", |b| {
        b.iter(|| {
            let _ = black_box(DilithiumVerifier::<P>::new(black_box(&v.pk)).is_ok());
        });
    });

    // Fixed RNG for reproducibility
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    for size in MESSAGE_SIZES {
        let mut message = vec![0u8; *size];
        rng.fill_bytes(&mut message);

        group.bench_with_input(BenchmarkId::new("message_size", size), size, |b, _| {
            b.iter(|| {
                let _ = black_box(verifier.verify(black_box(&v.sig), black_box(&message)));
            });
        });
    }

    group.finish();
}

fn bench_dilithium2(c: &mut Criterion) {
    bench_level::<Dilithium2Params>(c, "Dilithium2");
}

fn bench_dilithium3(c: &mut Criterion) {
    bench_level::<Dilithium3Params>(c, "Dilithium3");
}

fn bench_dilithium5(c: &mut Criterion) {
    bench_level::<Dilithium5Params>(c, "Dilithium5");
}

criterion_group!(benches, bench_dilithium2, bench_dilithium3, bench_dilithium5);
criterion_main!(benches);
