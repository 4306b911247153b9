multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_CLAIMED, ERR_SOLD_OUT};

/// Buyer accounting. Mutated only by the purchase and claim flows, always
/// before any outgoing transfer.
#[multiversx_sc::module]
pub trait LedgerModule {
    /// Adds `token_amount` to the buyer's entitlement and `stable_value` to the
    /// raised total. Rejects the credit if the contract custody cannot cover
    /// every outstanding entitlement afterwards.
    fn credit(
        &self,
        buyer: &ManagedAddress,
        token_amount: &BigUint,
        stable_value: &BigUint,
        custody_balance: &BigUint,
    ) {
        let pledged_after = self.total_pledged().get() + token_amount;
        require!(&pledged_after <= custody_balance, ERR_SOLD_OUT);

        self.buyer_tokens(buyer).update(|tokens| *tokens += token_amount);
        self.total_pledged().set(&pledged_after);
        self.raised_amount().update(|raised| *raised += stable_value);
    }

    /// Reads and zeroes the buyer's entitlement. A zero entitlement means the
    /// buyer never bought or already claimed.
    fn clear(&self, buyer: &ManagedAddress) -> BigUint {
        let prior = self.buyer_tokens(buyer).take();
        require!(prior > 0u64, ERR_ALREADY_CLAIMED);

        self.total_pledged().update(|pledged| *pledged -= &prior);
        prior
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getBuyerTokens)]
    #[storage_mapper("buyerTokens")]
    fn buyer_tokens(&self, buyer: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Stable-unit value collected across both payment methods.
    #[view(getRaisedAmount)]
    #[storage_mapper("raisedAmount")]
    fn raised_amount(&self) -> SingleValueMapper<BigUint>;

    /// Sum of all outstanding entitlements.
    #[view(getTotalPledged)]
    #[storage_mapper("totalPledged")]
    fn total_pledged(&self) -> SingleValueMapper<BigUint>;
}
