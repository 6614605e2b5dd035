multiversx_sc::imports!();

use crate::{
    errors::*,
    types::{AssetKind, EscrowStatus, GuaranteeEntry},
};

/// Per-escrow collateral vault. Every supported asset kind flows through the
/// same entry pair: classification happens once at provision, and return uses
/// the single unified transfer path.
#[multiversx_sc::module]
pub trait GuaranteeModule: crate::storage::StorageModule + crate::events::EventsModule {
    /// All collateral for an escrow arrives in one call: plain EGLD, or a
    /// (multi-)ESDT transfer carrying any mix of fungible tokens, NFTs and
    /// SFTs. The provided flag flips once; further provision is rejected.
    #[payable("*")]
    #[endpoint(provideGuarantee)]
    fn provide_guarantee(&self, escrow_id: u64) {
        require!(!self.escrows(escrow_id).is_empty(), ERR_ESCROW_NOT_FOUND);
        let mut record = self.escrows(escrow_id).get();

        let caller = self.blockchain().get_caller();
        require!(caller == record.depositor, ERR_UNAUTHORIZED);
        require!(record.status == EscrowStatus::Inactive, ERR_INVALID_STATE);
        require!(record.requires_guarantee, ERR_GUARANTEE_NOT_REQUIRED);
        require!(!record.guarantee_provided, ERR_GUARANTEE_ALREADY_PROVIDED);

        let esdt_transfers = self.call_value().all_esdt_transfers().clone_value();
        if esdt_transfers.is_empty() {
            let egld_amount = self.call_value().egld_value().clone_value();
            require!(egld_amount > 0u64, ERR_INVALID_AMOUNT);
            self.record_guarantee(
                escrow_id,
                &EgldOrEsdtTokenIdentifier::egld(),
                0,
                AssetKind::Native,
                &egld_amount,
            );
        } else {
            for payment in esdt_transfers.iter() {
                let kind = self.classify_esdt(&payment);
                self.record_guarantee(
                    escrow_id,
                    &EgldOrEsdtTokenIdentifier::esdt(payment.token_identifier.clone()),
                    payment.token_nonce,
                    kind,
                    &payment.amount,
                );
            }
        }

        record.guarantee_provided = true;
        record.last_interaction = self.blockchain().get_block_timestamp();
        self.escrows(escrow_id).set(&record);
    }

    /// Returns one collateral position to the depositor. Only once the
    /// record is complete, and only with unanimous approval or no dispute
    /// left standing. The entry is zeroed exactly once.
    #[endpoint(returnGuarantee)]
    fn return_guarantee(&self, escrow_id: u64, token: EgldOrEsdtTokenIdentifier, nonce: u64) {
        self.lock_reentrancy();

        require!(!self.escrows(escrow_id).is_empty(), ERR_ESCROW_NOT_FOUND);
        let record = self.escrows(escrow_id).get();

        let caller = self.blockchain().get_caller();
        require!(caller == record.depositor, ERR_UNAUTHORIZED);
        require!(record.status == EscrowStatus::Complete, ERR_INVALID_STATE);
        require!(
            record.all_approved() || !record.is_disputed,
            ERR_APPROVALS_MISSING
        );

        let entry_mapper = self.guarantee_entry(escrow_id, &token, nonce);
        require!(!entry_mapper.is_empty(), ERR_NO_GUARANTEE_ENTRY);
        let entry = entry_mapper.get();
        entry_mapper.clear();

        self.guarantee_returned_event(escrow_id, &token, nonce, &entry.amount);

        self.send().direct(&caller, &token, nonce, &entry.amount);

        self.release_reentrancy();
    }

    fn classify_esdt(&self, payment: &EsdtTokenPayment) -> AssetKind {
        require!(payment.amount > 0u64, ERR_INVALID_AMOUNT);
        if payment.token_nonce == 0 {
            require!(
                self.allowed_assets().contains(&payment.token_identifier),
                ERR_ASSET_NOT_ALLOWED
            );
            AssetKind::Fungible
        } else {
            require!(
                self.allowed_items(&payment.token_identifier)
                    .contains(&payment.token_nonce),
                ERR_ITEM_NOT_ALLOWED
            );
            if payment.amount == 1u64 {
                AssetKind::NonFungible
            } else {
                AssetKind::SemiFungible
            }
        }
    }

    fn record_guarantee(
        &self,
        escrow_id: u64,
        token: &EgldOrEsdtTokenIdentifier,
        nonce: u64,
        kind: AssetKind,
        amount: &BigUint,
    ) {
        let entry_mapper = self.guarantee_entry(escrow_id, token, nonce);
        if entry_mapper.is_empty() {
            entry_mapper.set(GuaranteeEntry {
                kind,
                amount: amount.clone(),
            });
        } else {
            entry_mapper.update(|entry| entry.amount += amount);
        }

        self.guarantee_provided_event(escrow_id, token, nonce, kind as u8, amount);
    }
}
