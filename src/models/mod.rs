pub mod fields;
pub mod points;
pub mod receipt;

pub use fields::{Amount, PurchaseDate, PurchaseTime};
pub use points::PointsBreakdown;
pub use receipt::{Item, Receipt, ReceiptSubmission};
