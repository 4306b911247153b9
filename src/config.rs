multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_NATIVE_RATE, ERR_INVALID_TAX, ERR_NOT_OWNER};
use crate::MAX_CLAIM_TAX_BPS;

#[multiversx_sc::module]
pub trait ConfigModule: crate::events::EventsModule {
    // ========================================================
    // Owner capability
    // ========================================================

    fn require_caller_is_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_NOT_OWNER);
    }

    #[endpoint(transferOwnership)]
    fn transfer_ownership(&self, new_owner: ManagedAddress) {
        self.require_caller_is_owner();

        let previous_owner = self.owner().get();
        self.owner().set(&new_owner);

        self.ownership_transferred_event(&previous_owner, &new_owner);
    }

    // ========================================================
    // Pricing configuration
    // ========================================================

    /// Native smallest units equivalent to one whole stable unit.
    /// Fixed peg, no price feed involved.
    #[endpoint(setNativeRate)]
    fn set_native_rate(&self, native_rate: BigUint) {
        self.require_caller_is_owner();
        require!(native_rate > 0u64, ERR_INVALID_NATIVE_RATE);

        self.native_rate().set(&native_rate);
        self.native_rate_changed_event(&native_rate);
    }

    /// Tax withheld on claim, in basis points.
    #[endpoint(setClaimTax)]
    fn set_claim_tax(&self, tax_bps: u64) {
        self.require_caller_is_owner();
        require!(tax_bps <= MAX_CLAIM_TAX_BPS, ERR_INVALID_TAX);

        self.claim_tax_bps().set(tax_bps);
        self.claim_tax_changed_event(tax_bps);
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getSaleTokenId)]
    #[storage_mapper("saleTokenId")]
    fn sale_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getStableTokenId)]
    #[storage_mapper("stableTokenId")]
    fn stable_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getNativeRate)]
    #[storage_mapper("nativeRate")]
    fn native_rate(&self) -> SingleValueMapper<BigUint>;

    #[view(getClaimTaxBps)]
    #[storage_mapper("claimTaxBps")]
    fn claim_tax_bps(&self) -> SingleValueMapper<u64>;
}
