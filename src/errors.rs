// Every failure condition is a distinct, named message so calling tooling
// can branch on cause.

pub const ERR_ZERO_ADDRESS: &str = "Party address cannot be zero";
pub const ERR_SAME_PARTY: &str = "Depositor and beneficiary must differ";
pub const ERR_NOT_ARBITER: &str = "Caller is not an allow-listed arbiter";
pub const ERR_INVALID_AMOUNT: &str = "Amount must be greater than zero";
pub const ERR_INVALID_INSTALLMENTS: &str = "Installment count must be greater than zero";
pub const ERR_INVALID_RATE: &str = "Daily interest rate must be below 100%";
pub const ERR_UNEVEN_SPLIT: &str = "Total does not divide evenly across installments";
pub const ERR_SCHEDULE_LENGTH: &str = "Custom schedule length does not match installment count";
pub const ERR_SCHEDULE_SUM: &str = "Custom schedule amounts do not sum to the total";
pub const ERR_ASSET_NOT_ALLOWED: &str = "Asset is not allow-listed";
pub const ERR_ITEM_NOT_ALLOWED: &str = "Item is not allow-listed";

pub const ERR_ESCROW_NOT_FOUND: &str = "Escrow does not exist";
pub const ERR_INVALID_STATE: &str = "Invalid escrow state for this action";
pub const ERR_UNAUTHORIZED: &str = "Caller is not authorized";

pub const ERR_GUARANTEE_NOT_REQUIRED: &str = "Escrow does not require a guarantee";
pub const ERR_GUARANTEE_ALREADY_PROVIDED: &str = "Guarantee already provided";
pub const ERR_GUARANTEE_MISSING: &str = "Guarantee has not been provided";
pub const ERR_NO_GUARANTEE_ENTRY: &str = "No guarantee entry for this asset";

pub const ERR_WRONG_PAYMENT_ASSET: &str = "Payment asset does not match escrow configuration";
pub const ERR_ALL_INSTALLMENTS_PAID: &str = "All installments already paid";
pub const ERR_NOT_FULLY_PAID: &str = "Installments are not fully paid";
pub const ERR_INSUFFICIENT_PAYMENT: &str = "Payment does not cover the amount due";
pub const ERR_DISTRIBUTION_EXCEEDS_BALANCE: &str = "Distribution exceeds accounted balance";
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient accounted balance";

pub const ERR_APPROVALS_MISSING: &str = "All three parties must approve first";
pub const ERR_NO_SETTLEMENT_PROPOSAL: &str = "No settlement proposal";
pub const ERR_SETTLEMENT_EXPIRED: &str = "Settlement proposal has expired";
pub const ERR_OWN_PROPOSAL: &str = "Proposer cannot accept own proposal";

pub const ERR_DEADLINE_NOT_REACHED: &str = "Deadline has not been reached";
pub const ERR_PARTIAL_NOT_ALLOWED: &str = "Partial withdrawal not permitted for this escrow";
pub const ERR_INVALID_RECIPIENT: &str = "Recipient must be the depositor or the beneficiary";
pub const ERR_REENTRANT_CALL: &str = "Reentrant call rejected";
pub const ERR_INVALID_BPS: &str = "Basis points value out of range";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "Nothing to withdraw";
