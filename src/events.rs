multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Buyer flow ──

    #[event("buyWithNative")]
    fn buy_with_native_event(
        &self,
        #[indexed] buyer: &ManagedAddress,
        #[indexed] token_amount: &BigUint,
        #[indexed] paid: &BigUint,
        stable_value: &BigUint,
    );

    #[event("buyWithStable")]
    fn buy_with_stable_event(
        &self,
        #[indexed] buyer: &ManagedAddress,
        #[indexed] token_amount: &BigUint,
        paid: &BigUint,
    );

    #[event("refund")]
    fn refund_event(
        &self,
        #[indexed] buyer: &ManagedAddress,
        #[indexed] token_id: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    );

    #[event("claim")]
    fn claim_event(
        &self,
        #[indexed] buyer: &ManagedAddress,
        #[indexed] entitlement: &BigUint,
        #[indexed] tax: &BigUint,
        payout: &BigUint,
    );

    // ── Administration ──

    #[event("salePhaseChanged")]
    fn sale_phase_changed_event(&self, #[indexed] active: bool);

    #[event("claimPhaseChanged")]
    fn claim_phase_changed_event(&self, #[indexed] allowed: bool);

    #[event("priceChanged")]
    fn price_changed_event(&self, #[indexed] new_price: &BigUint);

    #[event("limitsChanged")]
    fn limits_changed_event(&self, #[indexed] min: &BigUint, #[indexed] max: &BigUint);

    #[event("nativeRateChanged")]
    fn native_rate_changed_event(&self, #[indexed] native_rate: &BigUint);

    #[event("claimTaxChanged")]
    fn claim_tax_changed_event(&self, #[indexed] tax_bps: u64);

    #[event("withdrawUnsoldTokens")]
    fn withdraw_unsold_tokens_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    #[event("withdrawRaisedFunds")]
    fn withdraw_raised_funds_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] native_amount: &BigUint,
        stable_amount: &BigUint,
    );

    #[event("ownershipTransferred")]
    fn ownership_transferred_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );
}
