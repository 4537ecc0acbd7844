//! Order module
//!
//! Trade direction, pending order views and open position helpers

mod position;
mod types;

pub use position::{weighted_average_price, Position};
pub use types::{OrderId, OrderTicket, PendingOrder, TradeType};
