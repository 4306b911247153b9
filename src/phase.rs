multiversx_sc::imports!();

use crate::errors::{
    ERR_CLAIM_NOT_ALLOWED, ERR_INVALID_LIMITS, ERR_INVALID_PRICE, ERR_LIMIT_VIOLATION,
    ERR_SALE_NOT_ACTIVE, ERR_SALE_NOT_CONFIGURED,
};
use crate::types::{BuyLimits, ClaimPhase, SalePhase};

/// Sale/claim gating plus the price and per-purchase limits.
/// Every setter is owner-only.
#[multiversx_sc::module]
pub trait PhaseModule: crate::config::ConfigModule + crate::events::EventsModule {
    #[endpoint(setSaleActive)]
    fn set_sale_active(&self, active: bool) {
        self.require_caller_is_owner();
        if active {
            require!(
                self.sale_price().get() > 0u64 && self.buy_limits().get().is_configured(),
                ERR_SALE_NOT_CONFIGURED
            );
        }

        self.sale_phase().set(SalePhase::from_flag(active));
        self.sale_phase_changed_event(active);
    }

    #[endpoint(setClaimAllowed)]
    fn set_claim_allowed(&self, allowed: bool) {
        self.require_caller_is_owner();

        self.claim_phase().set(ClaimPhase::from_flag(allowed));
        self.claim_phase_changed_event(allowed);
    }

    /// Only affects future purchases; recorded entitlements are token amounts.
    #[endpoint(setPrice)]
    fn set_price(&self, new_price: BigUint) {
        self.require_caller_is_owner();
        require!(new_price > 0u64, ERR_INVALID_PRICE);

        self.sale_price().set(&new_price);
        self.price_changed_event(&new_price);
    }

    #[endpoint(setLimits)]
    fn set_limits(&self, min: BigUint, max: BigUint) {
        self.require_caller_is_owner();
        require!(max > 0u64 && min <= max, ERR_INVALID_LIMITS);

        self.buy_limits().set(BuyLimits {
            min: min.clone(),
            max: max.clone(),
        });
        self.limits_changed_event(&min, &max);
    }

    // ========================================================
    // Guards
    // ========================================================

    fn require_sale_active(&self) {
        require!(
            self.sale_phase().get() == SalePhase::Active,
            ERR_SALE_NOT_ACTIVE
        );
    }

    fn require_claim_allowed(&self) {
        require!(
            self.claim_phase().get() == ClaimPhase::Allowed,
            ERR_CLAIM_NOT_ALLOWED
        );
    }

    fn require_within_limits(&self, token_amount: &BigUint) {
        require!(
            self.buy_limits().get().contains(token_amount),
            ERR_LIMIT_VIOLATION
        );
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getSalePhase)]
    #[storage_mapper("salePhase")]
    fn sale_phase(&self) -> SingleValueMapper<SalePhase>;

    #[view(getClaimPhase)]
    #[storage_mapper("claimPhase")]
    fn claim_phase(&self) -> SingleValueMapper<ClaimPhase>;

    #[view(getSalePrice)]
    #[storage_mapper("salePrice")]
    fn sale_price(&self) -> SingleValueMapper<BigUint>;

    #[view(getBuyLimits)]
    #[storage_mapper("buyLimits")]
    fn buy_limits(&self) -> SingleValueMapper<BuyLimits<Self::Api>>;
}
