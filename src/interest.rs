multiversx_sc::imports!();

use crate::{
    types::{EscrowRecord, InterestModel},
    BPS_DENOMINATOR, SECONDS_PER_DAY,
};

/// Late-interest arithmetic. Ceiling division throughout so the platform
/// never under-charges; the compound path iterates day by day to match the
/// contractual daily-accrual promise rather than a closed-form approximation.
#[multiversx_sc::module]
pub trait InterestModule: crate::storage::StorageModule {
    fn simple_interest(&self, base: &BigUint, rate_bps: u64, days: u64) -> BigUint {
        if days == 0 || rate_bps == 0 {
            return BigUint::zero();
        }
        self.ceil_div_bps(base * rate_bps * days)
    }

    fn compound_interest(&self, base: &BigUint, rate_bps: u64, days: u64) -> BigUint {
        if days == 0 || rate_bps == 0 {
            return BigUint::zero();
        }
        let mut total = base.clone();
        for _ in 0..days {
            total += self.ceil_div_bps(&total * rate_bps);
        }
        total - base
    }

    /// Whole days past the payment interval. Sub-day lateness counts as zero.
    fn overdue_days(&self, last_payment_timestamp: u64, interval_seconds: u64) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        let elapsed = now - last_payment_timestamp;
        if elapsed <= interval_seconds {
            0
        } else {
            (elapsed - interval_seconds) / SECONDS_PER_DAY
        }
    }

    /// (base, interest) due for the next unpaid installment of `record`.
    fn current_installment_due(&self, record: &EscrowRecord<Self::Api>) -> (BigUint, BigUint) {
        let next_index = record.installments_paid as usize + 1;
        let detail = self.installments(record.id).get(next_index);
        let days = self.overdue_days(
            record.last_payment_timestamp,
            record.payment_interval_seconds,
        );
        let interest = match record.interest_model {
            InterestModel::Simple => {
                self.simple_interest(&detail.amount, record.daily_interest_rate_bps, days)
            }
            InterestModel::Compound => {
                self.compound_interest(&detail.amount, record.daily_interest_rate_bps, days)
            }
        };
        (detail.amount, interest)
    }

    fn mul_bps(&self, amount: &BigUint, bps: u64) -> BigUint {
        amount * bps / BPS_DENOMINATOR
    }

    fn ceil_div_bps(&self, numerator: BigUint) -> BigUint {
        (numerator + BigUint::from(BPS_DENOMINATOR - 1)) / BPS_DENOMINATOR
    }
}
