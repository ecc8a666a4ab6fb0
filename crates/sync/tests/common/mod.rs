//! Shared in-memory backend for synchronizer tests.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rigdesk_client::{BackendError, CustomerBackend};
use rigdesk_core::{Customer, CustomerFields, CustomerId};

/// In-memory stand-in for a customer backend.
///
/// Counts every call so tests can assert exactly how many requests went
/// out, and can be told to fail every subsequent call with a given HTTP
/// status.
pub struct MockBackend {
    items: Mutex<Vec<Customer>>,
    next_id: AtomicI64,
    fetch_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    fail_status: Mutex<Option<u16>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    pub fn seeded(items: Vec<Customer>) -> Self {
        let next_id = items.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            items: Mutex::new(items),
            next_id: AtomicI64::new(next_id),
            fetch_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            fail_status: Mutex::new(None),
        }
    }

    /// Fail every subsequent call with this HTTP status.
    pub fn fail_with_status(&self, status: u16) {
        *self.fail_status.lock().unwrap() = Some(status);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn injected_failure(&self) -> Option<BackendError> {
        self.fail_status
            .lock()
            .unwrap()
            .map(|status| BackendError::Api {
                status,
                body: "injected failure".to_string(),
            })
    }
}

#[async_trait]
impl CustomerBackend for MockBackend {
    async fn fetch_all(&self) -> Result<Vec<Customer>, BackendError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.injected_failure() {
            return Err(e);
        }
        Ok(self.items.lock().unwrap().clone())
    }

    async fn create(&self, fields: &CustomerFields) -> Result<CustomerId, BackendError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.injected_failure() {
            return Err(e);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.items.lock().unwrap().push(Customer {
            id,
            fields: fields.clone(),
        });
        Ok(id)
    }

    async fn update(&self, id: CustomerId, fields: &CustomerFields) -> Result<(), BackendError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.injected_failure() {
            return Err(e);
        }
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|c| c.id == id) {
            Some(item) => {
                item.fields = fields.clone();
                Ok(())
            }
            None => Err(BackendError::Api {
                status: 404,
                body: "item not found".to_string(),
            }),
        }
    }

    async fn delete(&self, id: CustomerId) -> Result<(), BackendError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = self.injected_failure() {
            return Err(e);
        }
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|c| c.id != id);
        if items.len() == before {
            return Err(BackendError::Api {
                status: 404,
                body: "item not found".to_string(),
            });
        }
        Ok(())
    }
}

pub fn sample_fields(name: &str) -> CustomerFields {
    CustomerFields {
        name: name.to_string(),
        address: "1 Harbor Way".to_string(),
        no_rigs: 4,
        no_jackups: 2,
        no_modus: 1,
        site_url: "https://example.com".to_string(),
    }
}

pub fn sample_customer(id: CustomerId, name: &str) -> Customer {
    Customer {
        id,
        fields: sample_fields(name),
    }
}
