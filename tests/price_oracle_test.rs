use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;
use token_presale::oracle::{default_native_rate, div_ceil, native_cost, stable_cost};
use token_presale::{NATIVE_DECIMALS, STABLE_DECIMALS, TOKEN_DECIMALS};

type Amount = BigUint<StaticApi>;

const SALE_PRICE: u64 = 900;

fn whole_tokens(n: u64) -> Amount {
    Amount::from(n) * Amount::from(10u64).pow(TOKEN_DECIMALS)
}

fn stable(token_amount: &Amount, price: u64) -> Amount {
    stable_cost(token_amount, &Amount::from(price), TOKEN_DECIMALS)
}

fn native(token_amount: &Amount, price: u64, native_rate: &Amount) -> Amount {
    native_cost(
        token_amount,
        &Amount::from(price),
        native_rate,
        TOKEN_DECIMALS,
        STABLE_DECIMALS,
    )
}

#[test]
fn stable_cost_rescales_token_to_stable_decimals() {
    assert_eq!(stable(&whole_tokens(112), SALE_PRICE), Amount::from(100_800u64));
    assert_eq!(stable(&whole_tokens(1112), SALE_PRICE), Amount::from(1_000_800u64));
}

#[test]
fn stable_cost_rounds_up() {
    // one smallest token unit still costs one smallest stable unit
    assert_eq!(stable(&Amount::from(1u64), SALE_PRICE), Amount::from(1u64));

    // 1.5 tokens at 3 units = 4.5 -> 5
    let one_and_a_half = whole_tokens(3) / 2u64;
    assert_eq!(stable(&one_and_a_half, 3), Amount::from(5u64));
}

#[test]
fn native_cost_at_default_peg() {
    let rate = default_native_rate::<StaticApi>();
    assert_eq!(rate, Amount::from(10u64).pow(NATIVE_DECIMALS));

    // 1.0008 stable units -> 1.0008 EGLD
    let expected = Amount::from(1_000_800u64) * Amount::from(10u64).pow(12);
    assert_eq!(native(&whole_tokens(1112), SALE_PRICE, &rate), expected);
}

#[test]
fn native_cost_follows_configured_peg() {
    // 1 stable unit = 0.05 EGLD
    let rate = Amount::from(5u64) * Amount::from(10u64).pow(16);
    let expected = Amount::from(50_040u64) * Amount::from(10u64).pow(12);
    assert_eq!(native(&whole_tokens(1112), SALE_PRICE, &rate), expected);
}

#[test]
fn native_cost_rounds_up() {
    let rate = Amount::from(3u64);
    // 1 * 900 * 3 / 10^24 -> 1
    assert_eq!(native(&Amount::from(1u64), SALE_PRICE, &rate), Amount::from(1u64));
}

#[test]
fn prices_scale_linearly_in_amount() {
    let rate = default_native_rate::<StaticApi>();
    let base = whole_tokens(7) + Amount::from(123_456_789u64);

    for factor in [2u64, 3, 10, 1_000] {
        let scaled = &base * factor;

        let stable_base = stable(&base, SALE_PRICE) * factor;
        let stable_scaled = stable(&scaled, SALE_PRICE);
        assert!(stable_scaled <= stable_base);
        assert!(stable_base - stable_scaled <= Amount::from(factor));

        let native_base = native(&base, SALE_PRICE, &rate) * factor;
        let native_scaled = native(&scaled, SALE_PRICE, &rate);
        assert!(native_scaled <= native_base);
        assert!(native_base - native_scaled <= Amount::from(factor));
    }
}

#[test]
fn div_ceil_exact_and_inexact() {
    assert_eq!(
        div_ceil(&Amount::from(10u64), &Amount::from(5u64)),
        Amount::from(2u64)
    );
    assert_eq!(
        div_ceil(&Amount::from(11u64), &Amount::from(5u64)),
        Amount::from(3u64)
    );
    assert_eq!(
        div_ceil(&Amount::zero(), &Amount::from(5u64)),
        Amount::zero()
    );
}
