multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_PRICE, ERR_ZERO_AMOUNT};
use crate::{NATIVE_DECIMALS, STABLE_DECIMALS, TOKEN_DECIMALS};

// ============================================================
// Pure conversions
// All results round up: the contract never under-collects.
// ============================================================

/// Stable-unit cost of `token_amount` (sale token smallest units) at
/// `sale_price` (stable smallest units per whole token).
///
/// `ceil(token_amount * sale_price / 10^token_decimals)`
pub fn stable_cost<M: ManagedTypeApi>(
    token_amount: &BigUint<M>,
    sale_price: &BigUint<M>,
    token_decimals: u32,
) -> BigUint<M> {
    let numerator = token_amount * sale_price;
    div_ceil(&numerator, &pow10(token_decimals))
}

/// Native-currency cost of `token_amount` at `sale_price`, where
/// `native_rate` is the number of native smallest units pegged to one whole
/// stable unit.
///
/// `ceil(token_amount * sale_price * native_rate / (10^token_decimals * 10^stable_decimals))`
pub fn native_cost<M: ManagedTypeApi>(
    token_amount: &BigUint<M>,
    sale_price: &BigUint<M>,
    native_rate: &BigUint<M>,
    token_decimals: u32,
    stable_decimals: u32,
) -> BigUint<M> {
    let numerator = token_amount * sale_price * native_rate;
    let denominator = pow10(token_decimals) * pow10(stable_decimals);
    div_ceil(&numerator, &denominator)
}

/// Default peg: one whole stable unit is worth one whole native unit.
pub fn default_native_rate<M: ManagedTypeApi>() -> BigUint<M> {
    pow10(NATIVE_DECIMALS)
}

pub fn div_ceil<M: ManagedTypeApi>(numerator: &BigUint<M>, denominator: &BigUint<M>) -> BigUint<M> {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder == 0u64 {
        quotient
    } else {
        quotient + BigUint::from(1u64)
    }
}

fn pow10<M: ManagedTypeApi>(exp: u32) -> BigUint<M> {
    BigUint::from(10u64).pow(exp)
}

// ============================================================
// Contract-facing views
// ============================================================

#[multiversx_sc::module]
pub trait PriceOracleModule: crate::config::ConfigModule + crate::events::EventsModule {
    /// Native payment required for `token_amount` at `sale_price`, using the
    /// configured native peg.
    #[view(priceInNative)]
    fn price_in_native(&self, token_amount: BigUint, sale_price: BigUint) -> BigUint {
        self.require_valid_quote(&token_amount, &sale_price);

        native_cost(
            &token_amount,
            &sale_price,
            &self.native_rate().get(),
            TOKEN_DECIMALS,
            STABLE_DECIMALS,
        )
    }

    /// Stablecoin payment required for `token_amount` at `sale_price`.
    #[view(priceInStable)]
    fn price_in_stable(&self, token_amount: BigUint, sale_price: BigUint) -> BigUint {
        self.require_valid_quote(&token_amount, &sale_price);

        stable_cost(&token_amount, &sale_price, TOKEN_DECIMALS)
    }

    fn require_valid_quote(&self, token_amount: &BigUint, sale_price: &BigUint) {
        require!(*token_amount > 0u64, ERR_ZERO_AMOUNT);
        require!(*sale_price > 0u64, ERR_INVALID_PRICE);
    }
}
