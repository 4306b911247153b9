#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod oracle;
pub mod phase;
pub mod types;

use errors::{
    ERR_INSUFFICIENT_CUSTODY, ERR_INSUFFICIENT_PAYMENT, ERR_INVALID_PAYMENT_TOKEN,
    ERR_INVALID_TOKEN_ID, ERR_NOTHING_TO_WITHDRAW, ERR_PAYOUT_TOO_SMALL, ERR_SAME_TOKEN,
    ERR_WITHDRAW_EXCEEDS_UNPLEDGED, ERR_ZERO_AMOUNT,
};
use types::{BuyLimits, ClaimPhase, SalePhase};

// ============================================================
// Constants
// ============================================================

/// Sale token precision (smallest units per whole token = 10^18)
pub const TOKEN_DECIMALS: u32 = 18;

/// Stablecoin precision (USDT)
pub const STABLE_DECIMALS: u32 = 6;

/// Native currency precision (EGLD)
pub const NATIVE_DECIMALS: u32 = 18;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// 0.5% withheld on claim
pub const DEFAULT_CLAIM_TAX_BPS: u64 = 50;

/// Claim tax can never exceed 10%
pub const MAX_CLAIM_TAX_BPS: u64 = 1_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TokenPresale:
    config::ConfigModule
    + events::EventsModule
    + ledger::LedgerModule
    + oracle::PriceOracleModule
    + phase::PhaseModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Starts inert: sale inactive, claim not allowed, price and limits unset.
    #[init]
    fn init(
        &self,
        owner: ManagedAddress,
        stable_token_id: TokenIdentifier,
        sale_token_id: TokenIdentifier,
    ) {
        require!(
            stable_token_id.is_valid_esdt_identifier() && sale_token_id.is_valid_esdt_identifier(),
            ERR_INVALID_TOKEN_ID
        );
        require!(stable_token_id != sale_token_id, ERR_SAME_TOKEN);

        self.owner().set(&owner);
        self.stable_token_id().set(&stable_token_id);
        self.sale_token_id().set(&sale_token_id);

        self.sale_phase().set(SalePhase::Inactive);
        self.claim_phase().set(ClaimPhase::NotAllowed);
        self.sale_price().set(BigUint::zero());
        self.buy_limits().set(BuyLimits {
            min: BigUint::zero(),
            max: BigUint::zero(),
        });

        self.native_rate().set(oracle::default_native_rate::<Self::Api>());
        self.claim_tax_bps().set(DEFAULT_CLAIM_TAX_BPS);

        self.raised_amount().set(BigUint::zero());
        self.total_pledged().set(BigUint::zero());
    }

    /// Logic-only upgrade: buyer balances and configuration stay in storage.
    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: buyWithNative
    // ========================================================

    #[endpoint(buyWithNative)]
    #[payable("EGLD")]
    fn buy_with_native(&self, token_amount: BigUint) {
        self.require_sale_active();
        self.require_within_limits(&token_amount);

        let payment = self.call_value().egld_value().clone_value();
        let sale_price = self.sale_price().get();
        let required = self.price_in_native(token_amount.clone(), sale_price.clone());
        require!(payment >= required, ERR_INSUFFICIENT_PAYMENT);

        // Raised amount is tracked in stable units whatever the payment asset
        let stable_value = self.price_in_stable(token_amount.clone(), sale_price);

        let caller = self.blockchain().get_caller();
        self.credit(
            &caller,
            &token_amount,
            &stable_value,
            &self.sale_token_balance(),
        );

        let excess = &payment - &required;
        if excess > 0u64 {
            self.send().direct_egld(&caller, &excess);
            self.refund_event(&caller, &EgldOrEsdtTokenIdentifier::egld(), &excess);
        }

        self.buy_with_native_event(&caller, &token_amount, &required, &stable_value);
    }

    // ========================================================
    // ENDPOINT: buyWithStablecoin
    // ========================================================

    #[endpoint(buyWithStablecoin)]
    #[payable("*")]
    fn buy_with_stablecoin(&self, token_amount: BigUint) {
        self.require_sale_active();
        self.require_within_limits(&token_amount);

        let payment = self.call_value().single_esdt();
        let stable_token_id = self.stable_token_id().get();
        require!(
            payment.token_identifier == stable_token_id && payment.token_nonce == 0,
            ERR_INVALID_PAYMENT_TOKEN
        );

        let required = self.price_in_stable(token_amount.clone(), self.sale_price().get());
        require!(payment.amount >= required, ERR_INSUFFICIENT_PAYMENT);

        let caller = self.blockchain().get_caller();
        self.credit(
            &caller,
            &token_amount,
            &required,
            &self.sale_token_balance(),
        );

        let excess = &payment.amount - &required;
        if excess > 0u64 {
            self.send()
                .direct_esdt(&caller, &stable_token_id, 0, &excess);
            self.refund_event(
                &caller,
                &EgldOrEsdtTokenIdentifier::esdt(stable_token_id),
                &excess,
            );
        }

        self.buy_with_stable_event(&caller, &token_amount, &required);
    }

    // ========================================================
    // ENDPOINT: claim
    // Ledger entry is zeroed before the token transfer.
    // ========================================================

    #[endpoint(claim)]
    fn claim(&self) {
        self.require_claim_allowed();

        let caller = self.blockchain().get_caller();
        let entitlement = self.clear(&caller);
        let payout = self.net_of_tax(&entitlement);
        require!(payout > 0u64, ERR_PAYOUT_TOO_SMALL);
        let tax = &entitlement - &payout;

        require!(
            self.sale_token_balance() >= payout,
            ERR_INSUFFICIENT_CUSTODY
        );

        self.send()
            .direct_esdt(&caller, &self.sale_token_id().get(), 0, &payout);

        self.claim_event(&caller, &entitlement, &tax, &payout);
    }

    // ========================================================
    // ADMIN: withdrawals
    // ========================================================

    /// Tokens pledged to buyers can never leave through this endpoint.
    #[endpoint(withdrawUnsoldTokens)]
    fn withdraw_unsold_tokens(&self, amount: BigUint) {
        self.require_caller_is_owner();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        require!(
            amount <= self.get_unpledged_balance(),
            ERR_WITHDRAW_EXCEEDS_UNPLEDGED
        );

        let owner = self.owner().get();
        self.send()
            .direct_esdt(&owner, &self.sale_token_id().get(), 0, &amount);

        self.withdraw_unsold_tokens_event(&owner, &amount);
    }

    /// Sends the whole native and stablecoin balance to the owner.
    #[endpoint(withdrawRaisedFunds)]
    fn withdraw_raised_funds(&self) {
        self.require_caller_is_owner();

        let stable_token_id = self.stable_token_id().get();
        let native_amount = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        let stable_amount = self.blockchain().get_sc_balance(
            &EgldOrEsdtTokenIdentifier::esdt(stable_token_id.clone()),
            0,
        );
        require!(
            native_amount > 0u64 || stable_amount > 0u64,
            ERR_NOTHING_TO_WITHDRAW
        );

        let owner = self.owner().get();
        if native_amount > 0u64 {
            self.send().direct_egld(&owner, &native_amount);
        }
        if stable_amount > 0u64 {
            self.send()
                .direct_esdt(&owner, &stable_token_id, 0, &stable_amount);
        }

        self.withdraw_raised_funds_event(&owner, &native_amount, &stable_amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn sale_token_balance(&self) -> BigUint {
        self.blockchain().get_sc_balance(
            &EgldOrEsdtTokenIdentifier::esdt(self.sale_token_id().get()),
            0,
        )
    }

    /// Rounds down: the contract never pays out more than it owes.
    fn net_of_tax(&self, entitlement: &BigUint) -> BigUint {
        let tax_bps = self.claim_tax_bps().get();
        (entitlement * (BPS_DENOMINATOR - tax_bps)) / BPS_DENOMINATOR
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Custody balance not pledged to any buyer.
    #[view(getUnpledgedBalance)]
    fn get_unpledged_balance(&self) -> BigUint {
        let balance = self.sale_token_balance();
        let pledged = self.total_pledged().get();
        if balance > pledged {
            balance - pledged
        } else {
            BigUint::zero()
        }
    }

    /// What `claim` would transfer to `buyer` right now, tax deducted.
    #[view(getClaimableAmount)]
    fn get_claimable_amount(&self, buyer: ManagedAddress) -> BigUint {
        self.net_of_tax(&self.buyer_tokens(&buyer).get())
    }
}
