// Server configuration
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8000";
pub const DEFAULT_DATA_PATH: &str = "data";
pub const DEFAULT_DATABASE_NAME: &str = "finance.db";

// Collection names
pub const COLLECTION_ACCOUNT: &str = "account";
pub const COLLECTION_CATEGORY: &str = "category";
pub const COLLECTION_TRANSACTION: &str = "transaction";
pub const COLLECTION_BUDGET: &str = "budget";

// Defaults applied when a payload omits an optional field
pub const DEFAULT_ACCOUNT_COLOR: &str = "#6366F1";
pub const DEFAULT_CATEGORY_COLOR: &str = "#22C55E";

// Validation limits
pub const MAX_NAME_LENGTH: usize = 255;

// The summary endpoint returns at most this many recent transactions
pub const SUMMARY_TRANSACTION_LIMIT: usize = 50;

// /test truncates store error text to this many characters
pub const STATUS_ERROR_TEXT_LIMIT: usize = 80;

// Error messages
pub const ERR_ACCOUNT_NOT_FOUND: &str = "Account not found";
pub const ERR_CATEGORY_NOT_FOUND: &str = "Category not found";
pub const ERR_BUDGET_CATEGORY_TYPE: &str = "Budget only allowed for expense categories";
