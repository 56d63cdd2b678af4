use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vq_codec::{compress_to_base64, decompress_from_base64};

fn generate_payload(items: usize) -> String {
    let mut vocabulary = Vec::with_capacity(items);
    for i in 0..items {
        vocabulary.push(format!(
            r#"{{"id":"{i}","vietnamese":"xin chào {i}","chinese":"你好","pinyin":"nǐ hǎo","phonetic":"ni hao","hanViet":"nhĩ hảo"}}"#
        ));
    }
    format!(r#"{{"vocabulary":[{}],"updatedAt":1700000000000}}"#, vocabulary.join(","))
}

fn bench_compress(c: &mut Criterion) {
    for &n in &[10usize, 100, 1000] {
        let payload = generate_payload(n);
        c.bench_function(&format!("compress_to_base64_{n}_items"), |b| {
            b.iter(|| black_box(compress_to_base64(black_box(&payload))))
        });
    }
}

fn bench_decompress(c: &mut Criterion) {
    for &n in &[10usize, 100, 1000] {
        let code = compress_to_base64(&generate_payload(n));
        c.bench_function(&format!("decompress_from_base64_{n}_items"), |b| {
            b.iter(|| black_box(decompress_from_base64(black_box(&code))))
        });
    }
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
