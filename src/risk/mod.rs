//! Risk management module
//!
//! Entry validation against drawn markers and risk-based position sizing

mod constraints;
mod resize;
mod types;

pub use constraints::{has_opposing_take_profit_zone, is_entry_anchored, EntryGate};
pub use resize::{
    allowable_risk_amount, resize_plan_of_market_order, resize_plan_of_pending_orders,
    PositionSizer,
};
pub use types::{ResizePlan, RiskError};
