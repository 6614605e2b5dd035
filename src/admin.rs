multiversx_sc::imports!();

use crate::errors::*;
use crate::BPS_DENOMINATOR;

/// Owner-administered registries and platform configuration: eligible
/// assets/items for the guarantee vault, arbiters allowed to open escrows,
/// the fee rate, and the pull-withdrawal of accrued native fees.
#[multiversx_sc::module]
pub trait AdminModule: crate::storage::StorageModule + crate::events::EventsModule {
    #[endpoint(addAllowedAsset)]
    fn add_allowed_asset(&self, token: TokenIdentifier) {
        self.require_owner();
        self.allowed_assets().insert(token);
    }

    #[endpoint(removeAllowedAsset)]
    fn remove_allowed_asset(&self, token: TokenIdentifier) {
        self.require_owner();
        self.allowed_assets().swap_remove(&token);
    }

    #[endpoint(addAllowedItem)]
    fn add_allowed_item(&self, token: TokenIdentifier, nonce: u64) {
        self.require_owner();
        self.allowed_items(&token).insert(nonce);
    }

    #[endpoint(removeAllowedItem)]
    fn remove_allowed_item(&self, token: TokenIdentifier, nonce: u64) {
        self.require_owner();
        self.allowed_items(&token).swap_remove(&nonce);
    }

    #[endpoint(addArbiter)]
    fn add_arbiter(&self, arbiter: ManagedAddress) {
        self.require_owner();
        require!(!arbiter.is_zero(), ERR_ZERO_ADDRESS);
        self.arbiters().insert(arbiter);
    }

    #[endpoint(removeArbiter)]
    fn remove_arbiter(&self, arbiter: ManagedAddress) {
        self.require_owner();
        self.arbiters().swap_remove(&arbiter);
    }

    #[endpoint(setFeeBps)]
    fn set_fee_bps(&self, value: u64) {
        self.require_owner();
        require!(value <= BPS_DENOMINATOR, ERR_INVALID_BPS);
        self.fee_bps().set(value);
    }

    #[endpoint(setTreasury)]
    fn set_treasury(&self, treasury: ManagedAddress) {
        self.require_owner();
        require!(!treasury.is_zero(), ERR_ZERO_ADDRESS);
        self.treasury().set(treasury);
    }

    #[endpoint(setOwner)]
    fn set_owner(&self, new_owner: ManagedAddress) {
        self.require_owner();
        require!(!new_owner.is_zero(), ERR_ZERO_ADDRESS);
        self.owner().set(new_owner);
    }

    /// Pull-withdrawal of native fees queued by resolutions and withdrawals.
    /// The treasury collects at its own pace.
    #[endpoint(withdrawFees)]
    fn withdraw_fees(&self) {
        self.lock_reentrancy();

        let caller = self.blockchain().get_caller();
        require!(caller == self.treasury().get(), ERR_UNAUTHORIZED);

        let amount = self.accrued_native_fees().get();
        require!(amount > 0u64, ERR_NOTHING_TO_WITHDRAW);
        self.accrued_native_fees().set(BigUint::zero());

        self.fees_withdrawn_event(&caller, &amount, self.blockchain().get_block_timestamp());

        self.send().direct_egld(&caller, &amount);

        self.release_reentrancy();
    }

    #[view(isAssetAllowed)]
    fn is_asset_allowed(&self, token: TokenIdentifier) -> bool {
        self.allowed_assets().contains(&token)
    }

    #[view(isItemAllowed)]
    fn is_item_allowed(&self, token: TokenIdentifier, nonce: u64) -> bool {
        self.allowed_items(&token).contains(&nonce)
    }

    #[view(isArbiter)]
    fn is_arbiter(&self, address: ManagedAddress) -> bool {
        self.arbiters().contains(&address)
    }

    #[view(getAccruedFees)]
    fn get_accrued_fees(&self) -> BigUint {
        self.accrued_native_fees().get()
    }

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            ERR_UNAUTHORIZED
        );
    }
}
