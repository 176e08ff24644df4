//! 收据积分计算
//!
//! 七条规则互相独立，各自只读取收据字段并返回非负积分；
//! 字段无法解析时该规则不计分，整个计算不会失败。

use crate::models::{Amount, Item, PointsBreakdown, PurchaseDate, PurchaseTime, Receipt};
use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use chrono::{Datelike, Timelike};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// 14:00 (含) 到 16:00 (不含)
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// 计算收据总积分
pub fn compute_points(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total()
}

/// 逐条规则计算积分明细
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_name_points(receipt.retailer()),
        round_dollar_total: round_dollar_points(receipt.total()),
        quarter_multiple_total: quarter_multiple_points(receipt.total()),
        item_pairs: item_pair_points(receipt.items()),
        item_descriptions: item_description_points(receipt.items()),
        odd_purchase_day: odd_day_points(receipt.purchase_date()),
        afternoon_purchase: afternoon_points(receipt.purchase_time()),
    }
}

/// 规则1: 商户名中每个ASCII字母或数字计1分
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

/// 规则2: 总额字面以 ".00" 结尾计50分 (字面判断，"10.0" 不算)
pub fn round_dollar_points(total: &Amount) -> u64 {
    if total.as_str().ends_with(".00") {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// 规则3: 总额是 0.25 的整数倍计25分
pub fn quarter_multiple_points(total: &Amount) -> u64 {
    let Some(value) = total.value() else {
        return 0;
    };

    let quarters = value * &BigDecimal::from(4);
    if quarters.with_scale(0) == quarters {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// 规则4: 每两个明细项计5分
pub fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// 规则5: 去除首尾空白后描述长度为3的倍数时，计 ceil(价格 × 0.2) 分
///
/// 长度为 0 同样满足条件。价格无法解析的明细不计分。
pub fn item_description_points(items: &[Item]) -> u64 {
    items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .filter_map(|item| item.price.value())
        .map(fifth_rounded_up)
        .fold(0u64, |acc, points| acc.saturating_add(points))
}

/// 规则6: 购买日期为奇数日计6分
pub fn odd_day_points(date: &PurchaseDate) -> u64 {
    match date.value() {
        Some(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// 规则7: 购买时间在 14:00 到 15:59 之间计10分
pub fn afternoon_points(time: &PurchaseTime) -> u64 {
    match time.value() {
        Some(time) if AFTERNOON_HOURS.contains(&time.hour()) => AFTERNOON_POINTS,
        _ => 0,
    }
}

/// ceil(price × 0.2)，负数价格计0分
fn fifth_rounded_up(price: &BigDecimal) -> u64 {
    // × 0.2 等价于 ÷ 5，结果总是有限小数
    let fifth = price.clone() / BigDecimal::from(5);
    if fifth <= BigDecimal::zero() {
        return 0;
    }

    let whole = fifth.with_scale(0);
    let ceiling = if whole < fifth {
        whole + BigDecimal::from(1)
    } else {
        whole
    };

    ceiling.to_u64().unwrap_or(u64::MAX)
}
