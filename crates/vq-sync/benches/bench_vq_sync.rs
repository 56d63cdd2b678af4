use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tokio::runtime::Runtime;
use vq_core::{SyncSnapshot, VocabularyItem};
use vq_sync::{sync_latest, MemoryStore, SnapshotStore};

fn snapshot(n: usize, updated_at: i64) -> SyncSnapshot {
    let items = (0..n)
        .map(|i| VocabularyItem::new(format!("từ mới {i}"), "生词", "shēngcí", "sheng tsi", "sinh từ"))
        .collect();
    SyncSnapshot::new(items, updated_at)
}

fn bench_sync_latest(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let newer = snapshot(500, 2);
    let older = snapshot(500, 1);

    c.bench_function("sync_latest_push_500", |b| {
        b.iter(|| {
            rt.block_on(async {
                let local = MemoryStore::with_snapshot(newer.clone());
                let remote = MemoryStore::with_snapshot(older.clone());
                black_box(sync_latest(&local, &remote).await)
            })
        })
    });

    c.bench_function("sync_latest_in_sync_500", |b| {
        let local = MemoryStore::with_snapshot(newer.clone());
        let remote = MemoryStore::with_snapshot(newer.clone());
        b.iter(|| rt.block_on(async { black_box(sync_latest(&local, &remote).await) }))
    });
}

fn bench_memory_store_roundtrip(c: &mut Criterion) {
    let rt = Runtime::new().expect("tokio runtime");
    let snap = snapshot(500, 1);
    let store = MemoryStore::new();
    c.bench_function("memory_store_save_load_500", |b| {
        b.iter(|| {
            rt.block_on(async {
                store.save(&snap).await.expect("save");
                black_box(store.load().await)
            })
        })
    });
}

criterion_group!(benches, bench_sync_latest, bench_memory_store_roundtrip);
criterion_main!(benches);
