//! Mock Service Layer
//!
//! Emulates a remote inventory API over the keyed product store. Each call
//! waits out a simulated network latency first and only then touches
//! storage, so the read-modify-write of a record never spans a suspension
//! point.

use async_trait::async_trait;
use std::collections::HashSet;
use std::time::Duration;

use crate::config::AppConfig;
use crate::controller::{Effect, Outcome};
use crate::domain::{InventoryError, InventoryResult, Product, ProductDraft, ProductId, Snapshot};
use crate::repository::{KeyValueStore, ProductRepository, Repository};

/// Source of simulated network latency
#[async_trait(?Send)]
pub trait Latency {
    async fn pause(&self, duration: Duration);
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait(?Send)]
impl Latency for NoLatency {
    async fn pause(&self, _duration: Duration) {}
}

/// Source of creation timestamps for new ids
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone)]
pub struct InventoryService<S, L, C = SystemClock> {
    repo: ProductRepository<S>,
    latency: L,
    clock: C,
    list_latency: Duration,
    write_latency: Duration,
}

impl<S: KeyValueStore, L: Latency> InventoryService<S, L, SystemClock> {
    pub fn new(store: S, latency: L, config: &AppConfig) -> Self {
        Self::with_clock(store, latency, SystemClock, config)
    }
}

impl<S: KeyValueStore, L: Latency, C: Clock> InventoryService<S, L, C> {
    pub fn with_clock(store: S, latency: L, clock: C, config: &AppConfig) -> Self {
        Self {
            repo: ProductRepository::new(store, config.storage_key.clone()),
            latency,
            clock,
            list_latency: config.list_latency(),
            write_latency: config.write_latency(),
        }
    }

    /// Full snapshot
    pub async fn list(&self) -> InventoryResult<Snapshot> {
        tracing::debug!("listing products");
        self.latency.pause(self.list_latency).await;
        self.repo.load()
    }

    /// Create (no id) or merge onto an existing record (id). Returns the
    /// updated snapshot.
    pub async fn upsert(&self, draft: ProductDraft) -> InventoryResult<Snapshot> {
        tracing::debug!(product_id = ?draft.id, "saving product");
        self.latency.pause(self.write_latency).await;
        let saved = self.write_draft(draft)?;
        tracing::info!(product_id = %saved.id, version = saved.version, "product saved");
        self.repo.load()
    }

    /// Delete by id; absent ids are a no-op. Returns the updated snapshot.
    pub async fn remove(&self, id: &ProductId) -> InventoryResult<Snapshot> {
        tracing::debug!(product_id = %id, "removing product");
        self.latency.pause(self.write_latency).await;
        if self.repo.delete(id)? {
            tracing::info!(product_id = %id, "product removed");
        } else {
            tracing::debug!(product_id = %id, "remove of unknown product ignored");
        }
        self.repo.load()
    }

    /// Discard stored data and re-seed the defaults
    pub async fn reset(&self) -> InventoryResult<Snapshot> {
        self.latency.pause(self.write_latency).await;
        self.repo.reset()
    }

    /// Run a controller effect
    pub async fn execute(&self, effect: Effect) -> Outcome {
        match effect {
            Effect::Load => Outcome::Loaded(self.list().await),
            Effect::Upsert(draft) => Outcome::Saved(self.upsert(draft).await),
            Effect::Remove(id) => Outcome::Removed(self.remove(&id).await),
            Effect::Reset => Outcome::Reset(self.reset().await),
        }
    }

    /// Synchronous keyed write; last write wins
    fn write_draft(&self, draft: ProductDraft) -> InventoryResult<Product> {
        let Some(id) = draft.id.clone() else {
            let taken: HashSet<ProductId> = self.repo.ids()?.into_iter().collect();
            let id = ProductId::generate(self.clock.now_millis(), |c| taken.contains(c));
            let product = draft.into_new_product(id)?;
            return self.repo.put(&product);
        };

        let existing = self
            .repo
            .find_by_id(&id)?
            .ok_or_else(|| InventoryError::NotFound(id.clone()))?;
        if let Some(base) = draft.base_version {
            if base < existing.version {
                tracing::warn!(
                    product_id = %id,
                    base,
                    stored = existing.version,
                    "overwriting a newer revision"
                );
            }
        }
        let merged = draft.merge_into(&existing)?;
        self.repo.put(&merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Controller, Route};
    use crate::repository::MemoryStore;
    use std::cell::Cell;

    /// Sleeps on the tokio timer so concurrent calls interleave
    #[derive(Clone, Copy)]
    struct TokioLatency;

    #[async_trait(?Send)]
    impl Latency for TokioLatency {
        async fn pause(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    /// Always reports the same millisecond
    struct FrozenClock(Cell<i64>);

    impl Clock for FrozenClock {
        fn now_millis(&self) -> i64 {
            self.0.get()
        }
    }

    fn service() -> InventoryService<MemoryStore, NoLatency> {
        InventoryService::new(MemoryStore::new(), NoLatency, &AppConfig::default())
    }

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[tokio::test]
    async fn test_upsert_without_id_appends_one_fresh_record() {
        let svc = service();
        let before = svc.list().await.unwrap();

        let after = svc
            .upsert(ProductDraft::full(None, "Webcam HD", "Aksesoris", 12, 450_000))
            .await
            .expect("Upsert failed");

        assert_eq!(after.len(), before.len() + 1);
        let added = after.products.last().unwrap();
        assert!(!before.contains(&added.id));
        assert_eq!(added.name, "Webcam HD");
        assert_eq!(added.version, 1);
    }

    #[tokio::test]
    async fn test_upsert_same_millisecond_gets_distinct_ids() {
        let svc = InventoryService::with_clock(
            MemoryStore::new(),
            NoLatency,
            FrozenClock(Cell::new(1_700_000_000_000)),
            &AppConfig::default(),
        );
        svc.upsert(ProductDraft::full(None, "A", "X", 1, 1)).await.unwrap();
        let snapshot = svc.upsert(ProductDraft::full(None, "B", "X", 1, 1)).await.unwrap();

        let ids: Vec<_> = snapshot.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(&ids[5..], &["p1700000000000", "p1700000000000-1"]);
    }

    #[tokio::test]
    async fn test_upsert_with_id_replaces_fields_only() {
        let svc = service();
        let before = svc.list().await.unwrap();

        let draft = ProductDraft::full(Some(id("p2")), "Keyboard TKL", "Aksesoris", 30, 1_100_000);
        let after = svc.upsert(draft).await.unwrap();

        assert_eq!(after.len(), before.len());
        let updated = after.get(&id("p2")).unwrap();
        assert_eq!(updated.name, "Keyboard TKL");
        assert_eq!(updated.stock, 30);
        assert_eq!(updated.version, 2);
        assert_eq!(after.products[1].id, id("p2"));
        for (old, new) in before.products.iter().zip(&after.products) {
            if old.id != id("p2") {
                assert_eq!(old, new);
            }
        }
    }

    #[tokio::test]
    async fn test_upsert_unknown_id_is_not_found() {
        let svc = service();
        let err = svc
            .upsert(ProductDraft::full(Some(id("ghost")), "X", "Y", 1, 1))
            .await
            .unwrap_err();
        assert_eq!(err, InventoryError::NotFound(id("ghost")));
    }

    #[tokio::test]
    async fn test_remove_only_target() {
        let svc = service();
        let before = svc.list().await.unwrap();

        let after = svc.remove(&id("p3")).await.unwrap();
        assert_eq!(after.len(), before.len() - 1);
        assert!(!after.contains(&id("p3")));
        let expected: Vec<_> = before.products.iter().filter(|p| p.id != id("p3")).cloned().collect();
        assert_eq!(after.products, expected);
    }

    #[tokio::test]
    async fn test_remove_unknown_is_noop() {
        let svc = service();
        let before = svc.list().await.unwrap();
        let after = svc.remove(&id("missing")).await.unwrap();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_concurrent_updates_to_different_records_both_persist() {
        let store = MemoryStore::new();
        let config = AppConfig {
            write_latency_ms: 10,
            ..AppConfig::default().without_latency()
        };
        let svc = InventoryService::new(store, TokioLatency, &config);
        svc.list().await.unwrap();

        let stock = ProductDraft {
            id: Some(id("p1")),
            stock: Some(1),
            ..Default::default()
        };
        let price = ProductDraft {
            id: Some(id("p4")),
            price: Some(9),
            ..Default::default()
        };
        let (a, b) = tokio::join!(svc.upsert(stock), svc.upsert(price));
        a.unwrap();
        b.unwrap();

        let snapshot = svc.list().await.unwrap();
        assert_eq!(snapshot.get(&id("p1")).unwrap().stock, 1);
        assert_eq!(snapshot.get(&id("p4")).unwrap().price, 9);
    }

    #[tokio::test]
    async fn test_concurrent_create_and_delete_both_apply() {
        let config = AppConfig {
            write_latency_ms: 5,
            ..AppConfig::default().without_latency()
        };
        let svc = InventoryService::new(MemoryStore::new(), TokioLatency, &config);
        svc.list().await.unwrap();

        let p5 = id("p5");
        let (created, removed) = tokio::join!(
            svc.upsert(ProductDraft::full(None, "Tablet", "Elektronik", 4, 3_000_000)),
            svc.remove(&p5),
        );
        created.unwrap();
        removed.unwrap();

        let snapshot = svc.list().await.unwrap();
        assert_eq!(snapshot.len(), 5);
        assert!(!snapshot.contains(&id("p5")));
        assert!(snapshot.products.iter().any(|p| p.name == "Tablet"));
    }

    #[tokio::test]
    async fn test_same_record_last_write_wins() {
        let svc = service();
        svc.list().await.unwrap();

        let first = ProductDraft::full(Some(id("p1")), "A", "X", 1, 1).with_base_version(1);
        let second = ProductDraft::full(Some(id("p1")), "B", "X", 2, 2).with_base_version(1);
        svc.upsert(first).await.unwrap();
        let snapshot = svc.upsert(second).await.unwrap();

        let product = snapshot.get(&id("p1")).unwrap();
        assert_eq!(product.name, "B");
        assert_eq!(product.version, 3);
    }

    #[tokio::test]
    async fn test_revision_increases_per_write() {
        let svc = service();
        let r0 = svc.list().await.unwrap().revision;
        let r1 = svc.remove(&id("p1")).await.unwrap().revision;
        let r2 = svc
            .upsert(ProductDraft::full(None, "X", "Y", 1, 1))
            .await
            .unwrap()
            .revision;
        assert!(r0 < r1 && r1 < r2);
    }

    #[tokio::test]
    async fn test_controller_round_trip() {
        let svc = service();
        let (mut controller, effect) = Controller::start();
        controller.apply(svc.execute(effect).await);
        assert_eq!(controller.products().len(), 5);

        controller.request_delete(id("p2")).unwrap();
        controller.cancel_delete();
        assert_eq!(svc.list().await.unwrap().len(), 5);

        controller.request_delete(id("p2")).unwrap();
        let effect = controller.confirm_delete().unwrap();
        controller.apply(svc.execute(effect).await);
        assert_eq!(controller.products().len(), 4);

        controller.navigate(Route::NewProduct);
        let effect = controller
            .submit(ProductDraft::full(None, "Headset", "Aksesoris", 25, 600_000))
            .unwrap();
        controller.apply(svc.execute(effect).await);
        assert_eq!(controller.products().len(), 5);
        assert_eq!(controller.products().last().unwrap().name, "Headset");
    }

    #[tokio::test]
    async fn test_reset_after_index_corrupted_mid_session() {
        let store = MemoryStore::new();
        let svc = InventoryService::new(store.clone(), NoLatency, &AppConfig::default());
        let (mut controller, effect) = Controller::start();
        controller.apply(svc.execute(effect).await);

        for name in ["A", "B", "C"] {
            controller.navigate(Route::NewProduct);
            let effect = controller
                .submit(ProductDraft::full(None, name, "X", 1, 1))
                .unwrap();
            controller.apply(svc.execute(effect).await);
        }
        assert_eq!(controller.revision(), 4);
        assert_eq!(controller.products().len(), 8);

        store.set("inventory_products", "garbage").unwrap();
        controller.request_delete(id("p1")).unwrap();
        let effect = controller.confirm_delete().unwrap();
        controller.apply(svc.execute(effect).await);
        assert!(controller.error().is_some_and(InventoryError::is_recoverable_by_reset));

        let effect = controller.reset().unwrap();
        controller.apply(svc.execute(effect).await);

        let stored = svc.list().await.unwrap();
        assert_eq!(controller.products(), stored.products.as_slice());
        assert_eq!(controller.revision(), stored.revision);
        assert_eq!(stored.len(), 5);
        assert!(controller.error().is_none());
        // Records of the three created products are swept too
        assert_eq!(store.len(), 6);
    }
}
