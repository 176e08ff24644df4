//! 收据存储
//!
//! 按生成的ID写入、按ID读取。积分计算不依赖存储层。

pub mod memory;

pub use memory::MemoryReceiptStore;

use crate::models::{Receipt, ReceiptSubmission};
use thiserror::Error;

/// 存储层错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No receipt found for id {0}")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 收据存储接口
pub trait ReceiptStore: Send + Sync {
    /// 保存提交的收据，分配新的唯一ID
    fn insert(&self, submission: ReceiptSubmission) -> Receipt;

    /// 按ID读取收据
    fn get(&self, id: &str) -> StoreResult<Receipt>;

    /// 已保存的收据数量
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
