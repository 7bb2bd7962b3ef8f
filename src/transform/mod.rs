//! Record transformation for the export connector.
//!
//! Pure functions mapping Numero records onto PublicForms bodies, plus the
//! date and phone conversions they rely on. Nothing in this module performs
//! I/O.

mod contribution;
mod date;
mod payout;
mod phone;

pub use contribution::{convert_contribution, convert_contributions};
pub use date::convert_date;
pub use payout::{convert_payout, convert_payouts};
pub use phone::convert_phone_number;
