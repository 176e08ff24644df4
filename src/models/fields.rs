use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// 日期形如 dddd-dd-dd
const DATE_SHAPE: &[u8] = b"dddd-dd-dd";
/// 时间形如 dd:dd
const TIME_SHAPE: &[u8] = b"dd:dd";

/// 按形状逐字节校验，`d` 位置必须是ASCII数字，其余位置必须原样相同
fn matches_shape(raw: &str, shape: &[u8]) -> bool {
    raw.len() == shape.len()
        && raw.bytes().zip(shape).all(|(b, &expected)| match expected {
            b'd' => b.is_ascii_digit(),
            _ => b == expected,
        })
}

/// 仅接受普通十进制写法: 可选符号、整数部分、可选的 `.小数部分`
///
/// 指数写法 ("1e3")、NaN、首尾空白等一律视为无法解析。
fn is_plain_decimal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(whole) && fraction.map_or(true, all_digits)
}

/// 金额字段 (如 "6.49")
///
/// 保留提交时的原始字符串，同时在构造时解析一次十进制值。
/// 解析失败不报错，`value()` 返回 `None`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Amount {
    raw: String,
    value: Option<BigDecimal>,
}

impl Amount {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = if is_plain_decimal(&raw) {
            BigDecimal::from_str(&raw).ok()
        } else {
            None
        };
        Self { raw, value }
    }

    /// 原始字符串
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 解析后的十进制值
    pub fn value(&self) -> Option<&BigDecimal> {
        self.value.as_ref()
    }
}

impl From<String> for Amount {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Amount {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.raw
    }
}

/// 购买日期 ("YYYY-MM-DD")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PurchaseDate {
    raw: String,
    value: Option<NaiveDate>,
}

impl PurchaseDate {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = if matches_shape(&raw, DATE_SHAPE) {
            NaiveDate::parse_from_str(&raw, DATE_FORMAT).ok()
        } else {
            None
        };
        Self { raw, value }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }
}

impl From<String> for PurchaseDate {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for PurchaseDate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<PurchaseDate> for String {
    fn from(date: PurchaseDate) -> Self {
        date.raw
    }
}

/// 购买时间 (24小时制 "HH:MM")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PurchaseTime {
    raw: String,
    value: Option<NaiveTime>,
}

impl PurchaseTime {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = if matches_shape(&raw, TIME_SHAPE) {
            NaiveTime::parse_from_str(&raw, TIME_FORMAT).ok()
        } else {
            None
        };
        Self { raw, value }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<NaiveTime> {
        self.value
    }
}

impl From<String> for PurchaseTime {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for PurchaseTime {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<PurchaseTime> for String {
    fn from(time: PurchaseTime) -> Self {
        time.raw
    }
}
