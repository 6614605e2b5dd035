#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod errors;
pub mod events;
pub mod guarantee;
pub mod interest;
pub mod storage;
pub mod types;

use errors::*;
use types::{EscrowRecord, EscrowStatus, GuaranteeEntry, InstallmentDetail, InterestModel};

// ============================================================
// Constants
// ============================================================

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Fixed horizon from creation after which anyone may force execution: 90 days
pub const AUTO_EXECUTE_HORIZON: u64 = 90 * SECONDS_PER_DAY;

/// Additional horizon past the auto-execute deadline before the operator
/// escape hatch opens: 180 days (~270 days from creation in total)
pub const EMERGENCY_EXTENSION: u64 = 180 * SECONDS_PER_DAY;

/// Settlement proposals lapse this long after being made: 30 days
pub const SETTLEMENT_WINDOW: u64 = 30 * SECONDS_PER_DAY;

// ============================================================
// Contract
// ============================================================

/// Conditional escrow between a depositor and a beneficiary: installment
/// payment with late-interest accrual, optional multi-asset collateral,
/// three-party approval gating, arbitrated disputes, voluntary settlement,
/// and a layered timeout ladder ending in an operator escape hatch.
#[multiversx_sc::contract]
pub trait InstallmentEscrow:
    storage::StorageModule
    + events::EventsModule
    + interest::InterestModule
    + guarantee::GuaranteeModule
    + admin::AdminModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, treasury: ManagedAddress, fee_bps: u64) {
        require!(!treasury.is_zero(), ERR_ZERO_ADDRESS);
        require!(fee_bps <= BPS_DENOMINATOR, ERR_INVALID_BPS);

        let caller = self.blockchain().get_caller();
        self.owner().set(caller);
        self.treasury().set(treasury);
        self.fee_bps().set(fee_bps);
        self.escrow_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createEscrow
    // Opened by an allow-listed arbiter, who becomes the record's
    // escrow owner and third approval party.
    // ========================================================

    #[endpoint(createEscrow)]
    fn create_escrow(
        &self,
        depositor: ManagedAddress,
        beneficiary: ManagedAddress,
        payment_token: EgldOrEsdtTokenIdentifier,
        total_amount: BigUint,
        total_installments: u32,
        payment_interval_seconds: u64,
        daily_interest_rate_bps: u64,
        interest_model: InterestModel,
        requires_guarantee: bool,
        allow_partial_withdrawal: bool,
        custom_schedule: MultiValueEncoded<MultiValue2<u64, BigUint>>,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.owner().get() || self.arbiters().contains(&caller),
            ERR_NOT_ARBITER
        );
        require!(
            !depositor.is_zero() && !beneficiary.is_zero(),
            ERR_ZERO_ADDRESS
        );
        require!(depositor != beneficiary, ERR_SAME_PARTY);
        require!(total_amount > 0u64, ERR_INVALID_AMOUNT);
        require!(total_installments > 0, ERR_INVALID_INSTALLMENTS);
        require!(daily_interest_rate_bps < BPS_DENOMINATOR, ERR_INVALID_RATE);
        if payment_token.is_esdt() {
            require!(
                self.allowed_assets()
                    .contains(&payment_token.clone().unwrap_esdt()),
                ERR_ASSET_NOT_ALLOWED
            );
        }

        let now = self.blockchain().get_block_timestamp();
        let escrow_id = self.escrow_count().get() + 1u64;
        self.escrow_count().set(escrow_id);

        if custom_schedule.is_empty() {
            // Even split with incrementing due dates. The total must divide
            // exactly; rounding remainders are not silently absorbed.
            let per_installment = &total_amount / (total_installments as u64);
            require!(
                &per_installment * (total_installments as u64) == total_amount,
                ERR_UNEVEN_SPLIT
            );
            for i in 1..=(total_installments as u64) {
                self.installments(escrow_id).push(&InstallmentDetail {
                    due_date: now + payment_interval_seconds * i,
                    amount: per_installment.clone(),
                    paid: false,
                });
            }
        } else {
            require!(
                custom_schedule.len() == total_installments as usize,
                ERR_SCHEDULE_LENGTH
            );
            let mut sum = BigUint::zero();
            for entry in custom_schedule.into_iter() {
                let (due_date, amount) = entry.into_tuple();
                require!(amount > 0u64, ERR_INVALID_AMOUNT);
                sum += &amount;
                self.installments(escrow_id).push(&InstallmentDetail {
                    due_date,
                    amount,
                    paid: false,
                });
            }
            require!(sum == total_amount, ERR_SCHEDULE_SUM);
        }

        let record = EscrowRecord {
            id: escrow_id,
            depositor: depositor.clone(),
            beneficiary: beneficiary.clone(),
            escrow_owner: caller.clone(),
            status: EscrowStatus::Inactive,
            payment_token,
            total_amount: total_amount.clone(),
            total_installments,
            installments_paid: 0,
            payment_interval_seconds,
            daily_interest_rate_bps,
            interest_model,
            requires_guarantee,
            guarantee_provided: false,
            allow_partial_withdrawal,
            start_timestamp: 0,
            last_payment_timestamp: 0,
            auto_execute_deadline: now + AUTO_EXECUTE_HORIZON,
            settlement_deadline: 0,
            last_interaction: now,
            depositor_approved: false,
            beneficiary_approved: false,
            owner_approved: false,
            is_disputed: false,
            dispute_raised_by: ManagedAddress::zero(),
            has_settlement_proposal: false,
            settlement_amount_to_depositor: BigUint::zero(),
            settlement_amount_to_beneficiary: BigUint::zero(),
            settlement_proposer: ManagedAddress::zero(),
        };
        self.escrows(escrow_id).set(&record);

        self.escrow_created_event(escrow_id, &depositor, &beneficiary, &caller, &total_amount, now);

        escrow_id
    }

    // ========================================================
    // ENDPOINT: startEscrow
    // ========================================================

    #[endpoint(startEscrow)]
    fn start_escrow(&self, escrow_id: u64) {
        let mut record = self.require_escrow(escrow_id);
        let caller = self.blockchain().get_caller();
        require!(
            caller == record.depositor || caller == record.beneficiary,
            ERR_UNAUTHORIZED
        );
        require!(record.status == EscrowStatus::Inactive, ERR_INVALID_STATE);
        if record.requires_guarantee {
            require!(record.guarantee_provided, ERR_GUARANTEE_MISSING);
        }

        let now = self.blockchain().get_block_timestamp();
        record.status = EscrowStatus::Active;
        record.start_timestamp = now;
        record.last_payment_timestamp = now;
        record.last_interaction = now;
        self.escrows(escrow_id).set(&record);

        self.escrow_started_event(escrow_id, &caller, now);
    }

    // ========================================================
    // ENDPOINT: payInstallment
    // One installment at the scheduled base amount plus interest for
    // whole overdue days. Overpayment is refunded exactly; the refund
    // leaves after all bookkeeping is final.
    // ========================================================

    #[payable("*")]
    #[endpoint(payInstallment)]
    fn pay_installment(&self, escrow_id: u64) {
        self.lock_reentrancy();

        let mut record = self.require_escrow(escrow_id);
        let caller = self.blockchain().get_caller();
        require!(caller == record.depositor, ERR_UNAUTHORIZED);
        require!(record.status == EscrowStatus::Active, ERR_INVALID_STATE);
        require!(!record.fully_paid(), ERR_ALL_INSTALLMENTS_PAID);

        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == record.payment_token && payment.token_nonce == 0,
            ERR_WRONG_PAYMENT_ASSET
        );

        let (base, interest) = self.current_installment_due(&record);
        let due = &base + &interest;
        require!(payment.amount >= due, ERR_INSUFFICIENT_PAYMENT);
        let excess = &payment.amount - &due;

        let installment_index = record.installments_paid + 1;
        let mut detail = self.installments(escrow_id).get(installment_index as usize);
        detail.paid = true;
        self.installments(escrow_id)
            .set(installment_index as usize, &detail);

        let now = self.blockchain().get_block_timestamp();
        record.installments_paid = installment_index;
        record.last_payment_timestamp = now;
        record.last_interaction = now;

        // Credit the full payment, then debit the excess: the accounted
        // balance never reflects refunded value.
        let balance_mapper = self.escrow_balances(escrow_id, &record.payment_token);
        balance_mapper.update(|b| *b += &payment.amount);
        if excess > 0u64 {
            balance_mapper.update(|b| *b -= &excess);
        }

        self.try_auto_complete(&mut record);
        self.escrows(escrow_id).set(&record);

        self.installment_paid_event(escrow_id, installment_index, &base, &interest, &excess, now);

        if excess > 0u64 {
            self.send()
                .direct(&caller, &record.payment_token, 0, &excess);
        }

        self.release_reentrancy();
    }

    // ========================================================
    // ENDPOINT: payAllRemaining
    // Clears the whole schedule at the current installment's due amount
    // (base plus its accrued interest) times the remaining count. Later
    // installments do not get their own interest recalculated.
    // ========================================================

    #[payable("*")]
    #[endpoint(payAllRemaining)]
    fn pay_all_remaining(&self, escrow_id: u64) {
        self.lock_reentrancy();

        let mut record = self.require_escrow(escrow_id);
        let caller = self.blockchain().get_caller();
        require!(caller == record.depositor, ERR_UNAUTHORIZED);
        require!(record.status == EscrowStatus::Active, ERR_INVALID_STATE);
        require!(!record.fully_paid(), ERR_ALL_INSTALLMENTS_PAID);

        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == record.payment_token && payment.token_nonce == 0,
            ERR_WRONG_PAYMENT_ASSET
        );

        let (base, interest) = self.current_installment_due(&record);
        let per_installment_due = &base + &interest;
        let remaining = record.total_installments - record.installments_paid;
        let due = per_installment_due * (remaining as u64);
        require!(payment.amount >= due, ERR_INSUFFICIENT_PAYMENT);
        let excess = &payment.amount - &due;

        let first_unpaid = record.installments_paid + 1;
        for index in first_unpaid..=record.total_installments {
            let mut detail = self.installments(escrow_id).get(index as usize);
            detail.paid = true;
            self.installments(escrow_id).set(index as usize, &detail);
        }

        let now = self.blockchain().get_block_timestamp();
        record.installments_paid = record.total_installments;
        record.last_payment_timestamp = now;
        record.last_interaction = now;

        let balance_mapper = self.escrow_balances(escrow_id, &record.payment_token);
        balance_mapper.update(|b| *b += &payment.amount);
        if excess > 0u64 {
            balance_mapper.update(|b| *b -= &excess);
        }

        self.try_auto_complete(&mut record);
        self.escrows(escrow_id).set(&record);

        let zero = BigUint::zero();
        for index in first_unpaid..=record.total_installments {
            let refunded = if index == record.total_installments {
                &excess
            } else {
                &zero
            };
            self.installment_paid_event(escrow_id, index, &base, &interest, refunded, now);
        }

        if excess > 0u64 {
            self.send()
                .direct(&caller, &record.payment_token, 0, &excess);
        }

        self.release_reentrancy();
    }

    // ========================================================
    // ENDPOINT: setApproval
    // Each party controls its own bit, at will, while the record is
    // active or disputed.
    // ========================================================

    #[endpoint(setApproval)]
    fn set_approval(&self, escrow_id: u64, approved: bool) {
        let mut record = self.require_escrow(escrow_id);
        require!(
            record.status == EscrowStatus::Active || record.status == EscrowStatus::Disputed,
            ERR_INVALID_STATE
        );

        let caller = self.blockchain().get_caller();
        if caller == record.depositor {
            record.depositor_approved = approved;
        } else if caller == record.beneficiary {
            record.beneficiary_approved = approved;
        } else if caller == record.escrow_owner {
            record.owner_approved = approved;
        } else {
            sc_panic!(ERR_UNAUTHORIZED);
        }

        let now = self.blockchain().get_block_timestamp();
        record.last_interaction = now;
        if !record.is_disputed {
            self.try_auto_complete(&mut record);
        }
        self.escrows(escrow_id).set(&record);

        self.approval_changed_event(escrow_id, &caller, approved, now);
    }

    // ========================================================
    // ENDPOINT: openDispute
    // Freezes withdrawal and approval-driven completion until resolved.
    // ========================================================

    #[endpoint(openDispute)]
    fn open_dispute(&self, escrow_id: u64) {
        let mut record = self.require_escrow(escrow_id);
        let caller = self.blockchain().get_caller();
        require!(
            caller == record.depositor || caller == record.beneficiary,
            ERR_UNAUTHORIZED
        );
        require!(record.status == EscrowStatus::Active, ERR_INVALID_STATE);

        let now = self.blockchain().get_block_timestamp();
        record.status = EscrowStatus::Disputed;
        record.is_disputed = true;
        record.dispute_raised_by = caller.clone();
        record.last_interaction = now;
        self.escrows(escrow_id).set(&record);

        self.dispute_opened_event(escrow_id, &caller, now);
    }

    // ========================================================
    // ENDPOINT: resolveDispute
    // The arbiter distributes an explicit split once all three parties
    // have signalled acceptance of arbitration via their approval bits.
    // ========================================================

    #[endpoint(resolveDispute)]
    fn resolve_dispute(
        &self,
        escrow_id: u64,
        amount_to_depositor: BigUint,
        amount_to_beneficiary: BigUint,
    ) {
        self.lock_reentrancy();

        let mut record = self.require_escrow(escrow_id);
        let caller = self.blockchain().get_caller();
        require!(caller == record.escrow_owner, ERR_UNAUTHORIZED);
        require!(record.status == EscrowStatus::Disputed, ERR_INVALID_STATE);
        require!(record.all_approved(), ERR_APPROVALS_MISSING);

        let balance = self.escrow_balances(escrow_id, &record.payment_token).get();
        let fee = self.mul_bps(&balance, self.fee_bps().get());
        require!(
            &amount_to_depositor + &amount_to_beneficiary + &fee <= balance,
            ERR_DISTRIBUTION_EXCEEDS_BALANCE
        );

        let now = self.blockchain().get_block_timestamp();
        self.escrow_balances(escrow_id, &record.payment_token).clear();
        record.status = EscrowStatus::Complete;
        record.is_disputed = false;
        record.last_interaction = now;
        self.escrows(escrow_id).set(&record);

        self.dispute_resolved_event(
            escrow_id,
            &amount_to_depositor,
            &amount_to_beneficiary,
            &fee,
            now,
        );

        self.distribute(&record, &amount_to_depositor, &amount_to_beneficiary, &fee);

        self.release_reentrancy();
    }

    // ========================================================
    // ENDPOINT: proposeSettlement
    // Voluntary alternative to arbitration. A fresh proposal overwrites
    // any prior one; an expired proposal is simply inert.
    // ========================================================

    #[endpoint(proposeSettlement)]
    fn propose_settlement(
        &self,
        escrow_id: u64,
        amount_to_depositor: BigUint,
        amount_to_beneficiary: BigUint,
    ) {
        let mut record = self.require_escrow(escrow_id);
        let caller = self.blockchain().get_caller();
        require!(
            caller == record.depositor || caller == record.beneficiary,
            ERR_UNAUTHORIZED
        );
        require!(record.status == EscrowStatus::Active, ERR_INVALID_STATE);

        let balance = self.escrow_balances(escrow_id, &record.payment_token).get();
        let fee = self.mul_bps(&balance, self.fee_bps().get());
        require!(
            &amount_to_depositor + &amount_to_beneficiary + &fee <= balance,
            ERR_DISTRIBUTION_EXCEEDS_BALANCE
        );

        let now = self.blockchain().get_block_timestamp();
        record.has_settlement_proposal = true;
        record.settlement_amount_to_depositor = amount_to_depositor.clone();
        record.settlement_amount_to_beneficiary = amount_to_beneficiary.clone();
        record.settlement_proposer = caller.clone();
        record.settlement_deadline = now + SETTLEMENT_WINDOW;
        record.last_interaction = now;
        self.escrows(escrow_id).set(&record);

        self.settlement_proposed_event(
            escrow_id,
            &caller,
            &amount_to_depositor,
            &amount_to_beneficiary,
            record.settlement_deadline,
        );
    }

    // ========================================================
    // ENDPOINT: acceptSettlement
    // Only the counterparty, only before the deadline lapses.
    // ========================================================

    #[endpoint(acceptSettlement)]
    fn accept_settlement(&self, escrow_id: u64) {
        self.lock_reentrancy();

        let mut record = self.require_escrow(escrow_id);
        require!(record.status == EscrowStatus::Active, ERR_INVALID_STATE);
        require!(record.has_settlement_proposal, ERR_NO_SETTLEMENT_PROPOSAL);

        let caller = self.blockchain().get_caller();
        require!(
            caller == record.depositor || caller == record.beneficiary,
            ERR_UNAUTHORIZED
        );
        require!(caller != record.settlement_proposer, ERR_OWN_PROPOSAL);

        let now = self.blockchain().get_block_timestamp();
        require!(now <= record.settlement_deadline, ERR_SETTLEMENT_EXPIRED);

        let to_depositor = record.settlement_amount_to_depositor.clone();
        let to_beneficiary = record.settlement_amount_to_beneficiary.clone();
        let balance = self.escrow_balances(escrow_id, &record.payment_token).get();
        let fee = self.mul_bps(&balance, self.fee_bps().get());
        require!(
            &to_depositor + &to_beneficiary + &fee <= balance,
            ERR_DISTRIBUTION_EXCEEDS_BALANCE
        );

        self.escrow_balances(escrow_id, &record.payment_token).clear();
        record.status = EscrowStatus::Complete;
        record.has_settlement_proposal = false;
        record.last_interaction = now;
        self.escrows(escrow_id).set(&record);

        self.settlement_accepted_event(escrow_id, &caller, &to_depositor, &to_beneficiary, &fee, now);

        self.distribute(&record, &to_depositor, &to_beneficiary, &fee);

        self.release_reentrancy();
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Beneficiary takes the full accounted balance net of fee. Requires
    // unanimity while still active; never during a dispute.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, escrow_id: u64) {
        self.lock_reentrancy();

        let mut record = self.require_escrow(escrow_id);
        let caller = self.blockchain().get_caller();
        require!(caller == record.beneficiary, ERR_UNAUTHORIZED);
        require!(!record.is_disputed, ERR_INVALID_STATE);
        match record.status {
            EscrowStatus::Active => {
                require!(record.all_approved(), ERR_APPROVALS_MISSING);
            }
            EscrowStatus::Complete => {}
            _ => sc_panic!(ERR_INVALID_STATE),
        }

        let balance = self.escrow_balances(escrow_id, &record.payment_token).get();
        require!(balance > 0u64, ERR_NOTHING_TO_WITHDRAW);
        let fee = self.mul_bps(&balance, self.fee_bps().get());
        let net = &balance - &fee;

        let now = self.blockchain().get_block_timestamp();
        self.escrow_balances(escrow_id, &record.payment_token).clear();
        record.status = EscrowStatus::Complete;
        record.last_interaction = now;
        self.escrows(escrow_id).set(&record);

        self.funds_withdrawn_event(escrow_id, &caller, &net, &fee, now);

        self.collect_fee(&record.payment_token, &fee);
        if net > 0u64 {
            self.send()
                .direct(&record.beneficiary, &record.payment_token, 0, &net);
        }

        self.release_reentrancy();
    }

    // ========================================================
    // ENDPOINT: withdrawPartial
    // Debits only the requested slice; the record stays active and the
    // fee is charged on the slice alone.
    // ========================================================

    #[endpoint(withdrawPartial)]
    fn withdraw_partial(&self, escrow_id: u64, amount: BigUint) {
        self.lock_reentrancy();

        let mut record = self.require_escrow(escrow_id);
        let caller = self.blockchain().get_caller();
        require!(caller == record.beneficiary, ERR_UNAUTHORIZED);
        require!(record.status == EscrowStatus::Active, ERR_INVALID_STATE);
        require!(record.allow_partial_withdrawal, ERR_PARTIAL_NOT_ALLOWED);
        require!(record.all_approved(), ERR_APPROVALS_MISSING);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let balance_mapper = self.escrow_balances(escrow_id, &record.payment_token);
        let balance = balance_mapper.get();
        require!(amount <= balance, ERR_INSUFFICIENT_BALANCE);

        let fee = self.mul_bps(&amount, self.fee_bps().get());
        let net = &amount - &fee;
        let remaining = &balance - &amount;

        let now = self.blockchain().get_block_timestamp();
        balance_mapper.set(&remaining);
        record.last_interaction = now;
        self.escrows(escrow_id).set(&record);

        self.partial_withdrawal_event(escrow_id, &caller, &net, &fee, &remaining);

        self.collect_fee(&record.payment_token, &fee);
        if net > 0u64 {
            self.send()
                .direct(&record.beneficiary, &record.payment_token, 0, &net);
        }

        self.release_reentrancy();
    }

    // ========================================================
    // ENDPOINT: autoExecute
    // Second tier of the timeout ladder: fully paid, no dispute, yet
    // consensus never completed. Anyone may trigger it after the fixed
    // horizon; the beneficiary receives the net balance.
    // ========================================================

    #[endpoint(autoExecute)]
    fn auto_execute(&self, escrow_id: u64) {
        self.lock_reentrancy();

        let mut record = self.require_escrow(escrow_id);
        require!(record.status == EscrowStatus::Active, ERR_INVALID_STATE);
        require!(!record.is_disputed, ERR_INVALID_STATE);
        require!(record.fully_paid(), ERR_NOT_FULLY_PAID);

        let now = self.blockchain().get_block_timestamp();
        require!(now >= record.auto_execute_deadline, ERR_DEADLINE_NOT_REACHED);

        let balance = self.escrow_balances(escrow_id, &record.payment_token).get();
        let fee = self.mul_bps(&balance, self.fee_bps().get());
        let net = &balance - &fee;

        self.escrow_balances(escrow_id, &record.payment_token).clear();
        record.status = EscrowStatus::Complete;
        record.last_interaction = now;
        self.escrows(escrow_id).set(&record);

        let caller = self.blockchain().get_caller();
        self.auto_executed_event(escrow_id, &caller, &net, &fee, now);

        self.collect_fee(&record.payment_token, &fee);
        if net > 0u64 {
            self.send()
                .direct(&record.beneficiary, &record.payment_token, 0, &net);
        }

        self.release_reentrancy();
    }

    // ========================================================
    // ENDPOINT: emergencyTimeout
    // Last tier: operator only, far past the auto-execute horizon, valid
    // even during an unresolved dispute or with incomplete payments. The
    // justification lands in the event log.
    // ========================================================

    #[endpoint(emergencyTimeout)]
    fn emergency_timeout(
        &self,
        escrow_id: u64,
        recipient: ManagedAddress,
        justification: ManagedBuffer,
    ) {
        self.lock_reentrancy();
        self.require_owner();

        let mut record = self.require_escrow(escrow_id);
        require!(record.status != EscrowStatus::Complete, ERR_INVALID_STATE);
        require!(
            recipient == record.depositor || recipient == record.beneficiary,
            ERR_INVALID_RECIPIENT
        );

        let now = self.blockchain().get_block_timestamp();
        require!(
            now >= record.auto_execute_deadline + EMERGENCY_EXTENSION,
            ERR_DEADLINE_NOT_REACHED
        );

        let balance = self.escrow_balances(escrow_id, &record.payment_token).get();
        let fee = self.mul_bps(&balance, self.fee_bps().get());
        let net = &balance - &fee;

        self.escrow_balances(escrow_id, &record.payment_token).clear();
        record.status = EscrowStatus::Complete;
        record.last_interaction = now;
        // The dispute flag survives: a post-emergency guarantee return
        // during an open dispute still requires unanimity.
        self.escrows(escrow_id).set(&record);

        self.emergency_resolved_event(escrow_id, &recipient, &net, &fee, &justification);

        self.collect_fee(&record.payment_token, &fee);
        if net > 0u64 {
            self.send()
                .direct(&recipient, &record.payment_token, 0, &net);
        }

        self.release_reentrancy();
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_escrow(&self, escrow_id: u64) -> EscrowRecord<Self::Api> {
        require!(!self.escrows(escrow_id).is_empty(), ERR_ESCROW_NOT_FOUND);
        self.escrows(escrow_id).get()
    }

    /// ACTIVE + fully paid + unanimous approval + no dispute → COMPLETE,
    /// with no explicit finalize call. The caller persists the record.
    fn try_auto_complete(&self, record: &mut EscrowRecord<Self::Api>) {
        if record.status != EscrowStatus::Active
            || record.is_disputed
            || !record.fully_paid()
            || !record.all_approved()
        {
            return;
        }
        record.status = EscrowStatus::Complete;
        self.escrow_completed_event(record.id, self.blockchain().get_block_timestamp());
    }

    /// Interactions only. All bookkeeping must be final before this runs.
    fn distribute(
        &self,
        record: &EscrowRecord<Self::Api>,
        to_depositor: &BigUint,
        to_beneficiary: &BigUint,
        fee: &BigUint,
    ) {
        self.collect_fee(&record.payment_token, fee);
        if *to_depositor > 0u64 {
            self.send()
                .direct(&record.depositor, &record.payment_token, 0, to_depositor);
        }
        if *to_beneficiary > 0u64 {
            self.send()
                .direct(&record.beneficiary, &record.payment_token, 0, to_beneficiary);
        }
    }

    /// Native fees accrue for pull-withdrawal by the treasury; fungible
    /// fees push to the treasury immediately. Two settlement strategies,
    /// selected by asset kind.
    fn collect_fee(&self, token: &EgldOrEsdtTokenIdentifier, fee: &BigUint) {
        if *fee == 0u64 {
            return;
        }
        if token.is_egld() {
            self.accrued_native_fees().update(|v| *v += fee);
        } else {
            self.send().direct(&self.treasury().get(), token, 0, fee);
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getEscrow)]
    fn get_escrow(&self, escrow_id: u64) -> OptionalValue<EscrowRecord<Self::Api>> {
        if self.escrows(escrow_id).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.escrows(escrow_id).get())
        }
    }

    #[view(getInstallments)]
    fn get_installments(&self, escrow_id: u64) -> MultiValueEncoded<InstallmentDetail<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for detail in self.installments(escrow_id).iter() {
            result.push(detail);
        }
        result
    }

    #[view(getEscrowBalance)]
    fn get_escrow_balance(
        &self,
        escrow_id: u64,
        token: EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        self.escrow_balances(escrow_id, &token).get()
    }

    #[view(getUnpaidInstallments)]
    fn get_unpaid_installments(&self, escrow_id: u64) -> u32 {
        let record = self.require_escrow(escrow_id);
        record.total_installments - record.installments_paid
    }

    /// (base, interest, total) currently due on the next unpaid installment.
    #[view(getNextDue)]
    fn get_next_due(&self, escrow_id: u64) -> MultiValue3<BigUint, BigUint, BigUint> {
        let record = self.require_escrow(escrow_id);
        require!(record.status == EscrowStatus::Active, ERR_INVALID_STATE);
        require!(!record.fully_paid(), ERR_ALL_INSTALLMENTS_PAID);
        let (base, interest) = self.current_installment_due(&record);
        let total = &base + &interest;
        (base, interest, total).into()
    }

    #[view(getGuaranteeEntry)]
    fn get_guarantee_entry(
        &self,
        escrow_id: u64,
        token: EgldOrEsdtTokenIdentifier,
        nonce: u64,
    ) -> OptionalValue<GuaranteeEntry<Self::Api>> {
        let entry_mapper = self.guarantee_entry(escrow_id, &token, nonce);
        if entry_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(entry_mapper.get())
        }
    }

    #[view(getEscrowCount)]
    fn get_escrow_count(&self) -> u64 {
        self.escrow_count().get()
    }

    #[view(getConfig)]
    fn get_config(&self) -> MultiValue5<ManagedAddress, ManagedAddress, u64, u64, u64> {
        (
            self.owner().get(),
            self.treasury().get(),
            self.fee_bps().get(),
            AUTO_EXECUTE_HORIZON,
            SETTLEMENT_WINDOW,
        )
            .into()
    }
}
