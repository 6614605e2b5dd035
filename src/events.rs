multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("escrowCreated")]
    fn escrow_created_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] escrow_owner: &ManagedAddress,
        #[indexed] total_amount: &BigUint,
        timestamp: u64,
    );

    #[event("escrowStarted")]
    fn escrow_started_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] starter: &ManagedAddress,
        timestamp: u64,
    );

    #[event("guaranteeProvided")]
    fn guarantee_provided_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] nonce: u64,
        #[indexed] kind: u8,
        amount: &BigUint,
    );

    #[event("guaranteeReturned")]
    fn guarantee_returned_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] nonce: u64,
        amount: &BigUint,
    );

    #[event("installmentPaid")]
    fn installment_paid_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] installment_index: u32,
        #[indexed] base_amount: &BigUint,
        #[indexed] interest: &BigUint,
        #[indexed] refunded_excess: &BigUint,
        timestamp: u64,
    );

    #[event("approvalChanged")]
    fn approval_changed_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] party: &ManagedAddress,
        #[indexed] approved: bool,
        timestamp: u64,
    );

    #[event("disputeOpened")]
    fn dispute_opened_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] raised_by: &ManagedAddress,
        timestamp: u64,
    );

    #[event("disputeResolved")]
    fn dispute_resolved_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] to_depositor: &BigUint,
        #[indexed] to_beneficiary: &BigUint,
        #[indexed] fee: &BigUint,
        timestamp: u64,
    );

    #[event("settlementProposed")]
    fn settlement_proposed_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] to_depositor: &BigUint,
        #[indexed] to_beneficiary: &BigUint,
        deadline: u64,
    );

    #[event("settlementAccepted")]
    fn settlement_accepted_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] acceptor: &ManagedAddress,
        #[indexed] to_depositor: &BigUint,
        #[indexed] to_beneficiary: &BigUint,
        #[indexed] fee: &BigUint,
        timestamp: u64,
    );

    #[event("fundsWithdrawn")]
    fn funds_withdrawn_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] net_amount: &BigUint,
        #[indexed] fee: &BigUint,
        timestamp: u64,
    );

    #[event("partialWithdrawal")]
    fn partial_withdrawal_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] net_amount: &BigUint,
        #[indexed] fee: &BigUint,
        remaining_balance: &BigUint,
    );

    #[event("escrowCompleted")]
    fn escrow_completed_event(&self, #[indexed] escrow_id: u64, timestamp: u64);

    #[event("autoExecuted")]
    fn auto_executed_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] caller: &ManagedAddress,
        #[indexed] net_amount: &BigUint,
        #[indexed] fee: &BigUint,
        timestamp: u64,
    );

    #[event("emergencyResolved")]
    fn emergency_resolved_event(
        &self,
        #[indexed] escrow_id: u64,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] net_amount: &BigUint,
        #[indexed] fee: &BigUint,
        justification: &ManagedBuffer,
    );

    #[event("feesWithdrawn")]
    fn fees_withdrawn_event(
        &self,
        #[indexed] treasury: &ManagedAddress,
        #[indexed] amount: &BigUint,
        timestamp: u64,
    );
}
