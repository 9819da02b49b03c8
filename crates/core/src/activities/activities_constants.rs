/// Activity types
///
/// Each constant is the serialized name of one ledger record kind.

/// Incoming funds. Increases cash.
pub const ACTIVITY_TYPE_DEPOSIT: &str = "DEPOSIT";

/// Outgoing funds. Decreases cash.
pub const ACTIVITY_TYPE_WITHDRAWAL: &str = "WITHDRAWAL";

/// Purchase of shares. Decreases cash and increases quantity.
pub const ACTIVITY_TYPE_BUY: &str = "BUY";

/// Disposal of shares. Increases cash and decreases quantity.
pub const ACTIVITY_TYPE_SELL: &str = "SELL";

/// Trading activity types
pub const TRADING_ACTIVITY_TYPES: [&str; 2] = [ACTIVITY_TYPE_BUY, ACTIVITY_TYPE_SELL];

/// Cash-only activity types (no security involved)
pub const CASH_ACTIVITY_TYPES: [&str; 2] = [ACTIVITY_TYPE_DEPOSIT, ACTIVITY_TYPE_WITHDRAWAL];

/// Checks if an activity type is a cash-only activity.
pub fn is_cash_activity(activity_type: &str) -> bool {
    CASH_ACTIVITY_TYPES.contains(&activity_type)
}

/// Checks if an activity type moves shares.
pub fn is_trading_activity(activity_type: &str) -> bool {
    TRADING_ACTIVITY_TYPES.contains(&activity_type)
}
