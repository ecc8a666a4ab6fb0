//! Initial-load lifecycle: success, failure, and the liveness guard that
//! discards a fetch result arriving after the view is torn down.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::{sample_customer, MockBackend};
use rigdesk_client::{BackendError, CustomerBackend};
use rigdesk_core::{Customer, CustomerFields, CustomerId};
use rigdesk_sync::{Directory, Liveness, LoadState};

#[tokio::test]
async fn load_replaces_collection_and_marks_loaded() {
    let backend = MockBackend::seeded(vec![
        sample_customer(1, "Acme"),
        sample_customer(2, "Borr"),
    ]);
    let liveness = Liveness::new();
    let mut directory = Directory::new();

    directory.load(&backend, &liveness.token()).await;

    assert_eq!(*directory.load_state(), LoadState::Loaded);
    assert_eq!(directory.store().len(), 2);
    assert_eq!(backend.fetch_calls(), 1);
}

#[tokio::test]
async fn load_failure_reports_message_and_keeps_store_empty() {
    let backend = MockBackend::new();
    backend.fail_with_status(503);
    let liveness = Liveness::new();
    let mut directory = Directory::new();

    directory.load(&backend, &liveness.token()).await;

    match directory.load_state() {
        LoadState::Failed(message) => assert!(message.contains("503")),
        state => panic!("expected failure, got {state:?}"),
    }
    assert!(directory.store().is_empty());
}

/// Backend whose fetch completes only after the view has been torn down:
/// it revokes the liveness flag just before returning, simulating a
/// response that arrives too late.
struct TornDownDuringFetch {
    inner: MockBackend,
    liveness: Arc<Liveness>,
}

#[async_trait]
impl CustomerBackend for TornDownDuringFetch {
    async fn fetch_all(&self) -> Result<Vec<Customer>, BackendError> {
        let result = self.inner.fetch_all().await;
        self.liveness.revoke();
        result
    }

    async fn create(&self, fields: &CustomerFields) -> Result<CustomerId, BackendError> {
        self.inner.create(fields).await
    }

    async fn update(&self, id: CustomerId, fields: &CustomerFields) -> Result<(), BackendError> {
        self.inner.update(id, fields).await
    }

    async fn delete(&self, id: CustomerId) -> Result<(), BackendError> {
        self.inner.delete(id).await
    }
}

#[tokio::test]
async fn late_fetch_result_is_discarded_after_teardown() {
    let liveness = Arc::new(Liveness::new());
    let backend = TornDownDuringFetch {
        inner: MockBackend::seeded(vec![sample_customer(1, "Acme")]),
        liveness: Arc::clone(&liveness),
    };
    let token = liveness.token();
    let mut directory = Directory::new();

    directory.load(&backend, &token).await;

    // The response arrived, but nothing was applied.
    assert!(directory.store().is_empty());
    assert_ne!(*directory.load_state(), LoadState::Loaded);
}
