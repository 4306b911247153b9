multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Phase flags: independent, claiming may open while selling is closed
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum SalePhase {
    /// New purchases are rejected. Default after deployment.
    Inactive,
    /// Purchases accepted at the current sale price.
    Active,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ClaimPhase {
    /// Entitlements stay locked in the contract. Default after deployment.
    NotAllowed,
    /// Buyers may convert their entitlement into tokens, net of tax.
    Allowed,
}

impl SalePhase {
    pub fn from_flag(active: bool) -> Self {
        if active {
            SalePhase::Active
        } else {
            SalePhase::Inactive
        }
    }
}

impl ClaimPhase {
    pub fn from_flag(allowed: bool) -> Self {
        if allowed {
            ClaimPhase::Allowed
        } else {
            ClaimPhase::NotAllowed
        }
    }
}

// ============================================================
// Buy limits: per purchase, in sale token smallest units
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct BuyLimits<M: ManagedTypeApi> {
    pub min: BigUint<M>,
    pub max: BigUint<M>,
}

impl<M: ManagedTypeApi> BuyLimits<M> {
    pub fn is_configured(&self) -> bool {
        self.max > 0u64
    }

    pub fn contains(&self, token_amount: &BigUint<M>) -> bool {
        token_amount >= &self.min && token_amount <= &self.max
    }
}
