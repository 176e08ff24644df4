use serde::Serialize;

/// 积分明细 - 七条规则各自的贡献
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    /// 各规则贡献之和
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .iter()
        .fold(0u64, |acc, points| acc.saturating_add(*points))
    }
}
