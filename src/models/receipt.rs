use super::fields::{Amount, PurchaseDate, PurchaseTime};
use serde::{Deserialize, Serialize};

/// 收据明细项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: Amount,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<Amount>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// 提交的收据请求体 (不含ID，客户端传入的 id 字段会被忽略)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    pub retailer: String,
    pub purchase_date: PurchaseDate,
    pub purchase_time: PurchaseTime,
    pub items: Vec<Item>,
    pub total: Amount,
}

/// 已登记的收据
///
/// 由存储层分配ID后构造，之后不再修改；只提供只读访问。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    id: String,
    retailer: String,
    purchase_date: PurchaseDate,
    purchase_time: PurchaseTime,
    items: Vec<Item>,
    total: Amount,
}

impl Receipt {
    pub fn new(id: impl Into<String>, submission: ReceiptSubmission) -> Self {
        let ReceiptSubmission {
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        } = submission;

        Self {
            id: id.into(),
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn purchase_date(&self) -> &PurchaseDate {
        &self.purchase_date
    }

    pub fn purchase_time(&self) -> &PurchaseTime {
        &self.purchase_time
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total(&self) -> &Amount {
        &self.total
    }
}
