multiversx_sc::imports!();

use crate::{
    errors::ERR_REENTRANT_CALL,
    types::{EscrowRecord, GuaranteeEntry, InstallmentDetail},
};

#[multiversx_sc::module]
pub trait StorageModule {
    fn lock_reentrancy(&self) {
        require!(!self.call_in_progress().get(), ERR_REENTRANT_CALL);
        self.call_in_progress().set(true);
    }

    fn release_reentrancy(&self) {
        self.call_in_progress().set(false);
    }

    // ── Configuration ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("feeBps")]
    fn fee_bps(&self) -> SingleValueMapper<u64>;

    // ── Registries (owner-administered, never implicitly reset) ──

    #[storage_mapper("allowedAssets")]
    fn allowed_assets(&self) -> UnorderedSetMapper<TokenIdentifier>;

    #[storage_mapper("allowedItems")]
    fn allowed_items(&self, token: &TokenIdentifier) -> UnorderedSetMapper<u64>;

    #[storage_mapper("arbiters")]
    fn arbiters(&self) -> UnorderedSetMapper<ManagedAddress>;

    // ── Escrow records ──

    #[storage_mapper("escrowCount")]
    fn escrow_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("escrows")]
    fn escrows(&self, escrow_id: u64) -> SingleValueMapper<EscrowRecord<Self::Api>>;

    #[storage_mapper("installments")]
    fn installments(&self, escrow_id: u64) -> VecMapper<InstallmentDetail<Self::Api>>;

    // ── Ledgers ──

    /// Accounted balance per escrow and asset. The internal source of truth
    /// distinguishing funds attributed to one escrow from the aggregate pool
    /// the contract holds.
    #[storage_mapper("escrowBalances")]
    fn escrow_balances(
        &self,
        escrow_id: u64,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    /// Collateral position per escrow, asset and nonce. Written once at
    /// provision, cleared once at return.
    #[storage_mapper("guaranteeEntries")]
    fn guarantee_entry(
        &self,
        escrow_id: u64,
        token: &EgldOrEsdtTokenIdentifier,
        nonce: u64,
    ) -> SingleValueMapper<GuaranteeEntry<Self::Api>>;

    /// Platform fees in EGLD awaiting pull-withdrawal by the treasury.
    #[storage_mapper("accruedNativeFees")]
    fn accrued_native_fees(&self) -> SingleValueMapper<BigUint>;

    // ── Reentrancy guard ──

    /// In-progress flag for endpoints that move assets out. A callee calling
    /// back in before the original call returns hits this and is rejected.
    #[storage_mapper("callInProgress")]
    fn call_in_progress(&self) -> SingleValueMapper<bool>;
}
