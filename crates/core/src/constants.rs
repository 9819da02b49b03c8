/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Identifier used when no account id is configured
pub const DEFAULT_ACCOUNT_ID: &str = "user1";

/// Opening balance used when none is configured
pub const DEFAULT_OPENING_BALANCE: &str = "10000.00";
