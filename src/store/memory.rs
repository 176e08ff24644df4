use super::{ReceiptStore, StoreError, StoreResult};
use crate::models::{Receipt, ReceiptSubmission};
use dashmap::DashMap;
use uuid::Uuid;

/// 内存存储 (DashMap 保证并发读写安全，无淘汰、无持久化)
#[derive(Debug, Default)]
pub struct MemoryReceiptStore {
    receipts: DashMap<String, Receipt>,
}

impl MemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for MemoryReceiptStore {
    fn insert(&self, submission: ReceiptSubmission) -> Receipt {
        let receipt = Receipt::new(Uuid::new_v4().to_string(), submission);
        self.receipts
            .insert(receipt.id().to_string(), receipt.clone());
        receipt
    }

    fn get(&self, id: &str) -> StoreResult<Receipt> {
        self.receipts
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn len(&self) -> usize {
        self.receipts.len()
    }
}
