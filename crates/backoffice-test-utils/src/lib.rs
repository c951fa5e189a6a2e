//! Testing utilities for the backoffice workspace
//!
//! Shared in-memory service, call recording and fixtures.

#![allow(missing_docs)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use backoffice_entity::{
    Brand, Category, Customer, Entity, EntityError, EntityService, NewRecord, Order, OrderItem,
    OrderStatus, Product,
};
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use tokio::sync::Semaphore;

/// One recorded service call
#[derive(Debug, Clone, PartialEq)]
pub enum Call<T> {
    List,
    GetById(String),
    Create(T),
    Update(String, T),
    Delete(String),
}

/// In-memory [`EntityService`] that records every call
///
/// Ids are assigned sequentially after the highest numeric id seeded.
/// `fail_next` makes the next call fail; `hold_mutations` parks mutations
/// until `release` is called, which keeps them observably pending.
#[derive(Debug)]
pub struct InMemoryService<T: Entity> {
    records: Mutex<Vec<T>>,
    calls: Mutex<Vec<Call<T>>>,
    next_id: AtomicU64,
    failure: Mutex<Option<EntityError>>,
    gate: Mutex<Option<Arc<Semaphore>>>,
}

impl<T: Entity> Default for InMemoryService<T> {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl<T: Entity> InMemoryService<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed records; records without an id get one
    pub fn with_records(records: Vec<T>) -> Self {
        let highest = records
            .iter()
            .filter_map(|r| r.id().and_then(|id| id.parse::<u64>().ok()))
            .max()
            .unwrap_or(0);
        let service = Self {
            records: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(highest + 1),
            failure: Mutex::new(None),
            gate: Mutex::new(None),
        };
        let seeded = records
            .into_iter()
            .map(|r| match r.id() {
                Some(_) => r,
                None => {
                    let id = service.allocate_id();
                    r.with_id(id)
                }
            })
            .collect();
        *service.records.lock() = seeded;
        service
    }

    pub fn shared(records: Vec<T>) -> Arc<Self> {
        Arc::new(Self::with_records(records))
    }

    /// Snapshot of stored records
    pub fn records(&self) -> Vec<T> {
        self.records.lock().clone()
    }

    /// Every call so far, in order
    pub fn calls(&self) -> Vec<Call<T>> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Make the next call fail with `error`
    pub fn fail_next(&self, error: EntityError) {
        *self.failure.lock() = Some(error);
    }

    /// Park create/update/delete until `release` is called
    pub fn hold_mutations(&self) {
        *self.gate.lock() = Some(Arc::new(Semaphore::new(0)));
    }

    /// Let one parked mutation through
    pub fn release(&self) {
        if let Some(gate) = self.gate.lock().as_ref() {
            gate.add_permits(1);
        }
    }

    fn allocate_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
    }

    fn record(&self, call: Call<T>) -> Result<(), EntityError> {
        self.calls.lock().push(call);
        match self.failure.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn pass_gate(&self) {
        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
    }
}

#[async_trait]
impl<T: Entity> EntityService for InMemoryService<T> {
    type Record = T;

    async fn list(&self) -> Result<Vec<T>, EntityError> {
        self.record(Call::List)?;
        Ok(self.records())
    }

    async fn get_by_id(&self, id: &str) -> Result<T, EntityError> {
        self.record(Call::GetById(id.to_string()))?;
        self.records
            .lock()
            .iter()
            .find(|r| r.id() == Some(id))
            .cloned()
            .ok_or_else(|| EntityError::NotFound(id.to_string()))
    }

    async fn create(&self, record: NewRecord<T>) -> Result<T, EntityError> {
        self.record(Call::Create(record.record().clone()))?;
        self.pass_gate().await;
        let created = record.assign_id(self.allocate_id());
        self.records.lock().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, record: T) -> Result<T, EntityError> {
        self.record(Call::Update(id.to_string(), record.clone()))?;
        self.pass_gate().await;
        let mut records = self.records.lock();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == Some(id))
            .ok_or_else(|| EntityError::NotFound(id.to_string()))?;
        *slot = record.with_id(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), EntityError> {
        self.record(Call::Delete(id.to_string()))?;
        self.pass_gate().await;
        let mut records = self.records.lock();
        let before = records.len();
        records.retain(|r| r.id() != Some(id));
        if records.len() == before {
            return Err(EntityError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        Category::named("Bebidas").with_id("1"),
        Category::named("Snacks").with_id("7"),
    ]
}

pub fn brands() -> Vec<Brand> {
    vec![
        Brand::named("Acme").with_id("1"),
        Brand::named("Globex").with_id("2"),
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product::new("Refrigerante 2L", 9.9)
            .in_category(Category::named("Bebidas").with_id("1"))
            .with_brand(Brand::named("Acme").with_id("1"))
            .with_id("1"),
        Product::new("Batata chips", 12.5)
            .in_category(Category::named("Snacks").with_id("7"))
            .with_id("2"),
    ]
}

pub fn orders() -> Vec<Order> {
    let cola = products().remove(0);
    vec![
        Order {
            id: Some("1".to_string()),
            customer: Customer {
                id: Some("c1".to_string()),
                name: "Maria Souza".to_string(),
            },
            status: OrderStatus::Shipped,
            total: 1234.56,
            items: vec![OrderItem {
                id: Some("i1".to_string()),
                product: cola,
                quantity: 2,
                value: 617.28,
            }],
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).single(),
            updated_at: None,
        },
        Order {
            id: Some("2".to_string()),
            customer: Customer {
                id: Some("c2".to_string()),
                name: "João Lima".to_string(),
            },
            status: OrderStatus::New,
            total: 19.8,
            items: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2024, 11, 20, 9, 30, 0).single(),
            updated_at: None,
        },
    ]
}
