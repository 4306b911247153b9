// Authorization
pub const ERR_NOT_OWNER: &str = "Caller is not the owner";

// Phase
pub const ERR_SALE_NOT_ACTIVE: &str = "Sale is not active";
pub const ERR_CLAIM_NOT_ALLOWED: &str = "Claim is not allowed";

// Purchase
pub const ERR_LIMIT_VIOLATION: &str = "Amount outside buy limits";
pub const ERR_INSUFFICIENT_PAYMENT: &str = "Insufficient payment";
pub const ERR_ZERO_AMOUNT: &str = "Token amount must be greater than zero";
pub const ERR_SOLD_OUT: &str = "Not enough tokens left for sale";

// External transfers
pub const ERR_INVALID_PAYMENT_TOKEN: &str = "Invalid payment token";
pub const ERR_INSUFFICIENT_CUSTODY: &str = "Contract token balance too low";

// Claim
pub const ERR_ALREADY_CLAIMED: &str = "Nothing to claim or already claimed";
pub const ERR_PAYOUT_TOO_SMALL: &str = "Claim payout rounds to zero";

// Configuration
pub const ERR_INVALID_PRICE: &str = "Price must be greater than zero";
pub const ERR_INVALID_LIMITS: &str = "Invalid buy limits";
pub const ERR_INVALID_NATIVE_RATE: &str = "Native rate must be greater than zero";
pub const ERR_INVALID_TAX: &str = "Claim tax above maximum";
pub const ERR_SALE_NOT_CONFIGURED: &str = "Price and limits must be set first";
pub const ERR_INVALID_TOKEN_ID: &str = "Invalid token identifier";
pub const ERR_SAME_TOKEN: &str = "Sale and stable token must be different";
pub const ERR_WITHDRAW_EXCEEDS_UNPLEDGED: &str = "Amount exceeds unpledged balance";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "Nothing to withdraw";
