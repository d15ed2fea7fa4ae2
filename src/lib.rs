#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod fund_me_proxy;
pub mod price_converter;
pub mod price_feed_proxy;

use errors::FundMeError;
use price_converter::TARGET_DECIMALS;

// ============================================================
// Constants
// ============================================================

/// Minimum deposit value in whole USD; scaled to 18 decimals on use
const MINIMUM_USD: u64 = 50;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FundMe: price_converter::PriceConverterModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, price_feed_address: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.owner().set(&caller);
        self.price_feed_address().set(&price_feed_address);
    }

    /// Owner and price feed are bound once at deploy and never rebound.
    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: fund
    // Admission gated on the USD value of the attached EGLD.
    // ========================================================

    #[endpoint(fund)]
    #[payable("EGLD")]
    fn fund(&self) {
        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();

        let usd_value = self.get_conversion_rate(&payment_amount);
        require!(
            usd_value >= self.minimum_usd(),
            (FundMeError::InsufficientAmount.message())
        );

        self.address_to_amount_funded(&caller)
            .update(|amount| *amount += &payment_amount);
        self.funders().push(&caller);

        self.fund_event(&caller, &payment_amount, &usd_value);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Resets every funder, re-reading the funders list from
    // storage on each iteration.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        self.require_owner();

        let mut index = 1;
        while index <= self.funders().len() {
            let funder = self.funders().get(index);
            self.address_to_amount_funded(&funder).clear();
            index += 1;
        }
        self.funders().clear();

        self.send_balance_to_owner();
    }

    // ========================================================
    // ENDPOINT: cheaperWithdraw
    // Same end state as withdraw; the funders list is read
    // from storage once into memory before the reset loop.
    // ========================================================

    #[endpoint(cheaperWithdraw)]
    fn cheaper_withdraw(&self) {
        self.require_owner();

        let mut funders: ManagedVec<ManagedAddress> = ManagedVec::new();
        for funder in self.funders().iter() {
            funders.push(funder);
        }

        for funder in funders.iter() {
            self.address_to_amount_funded(&funder).clear();
        }
        self.funders().clear();

        self.send_balance_to_owner();
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.owner().get(),
            (FundMeError::NotOwner.message())
        );
    }

    /// Runs after the storage reset. A rejected transfer fails the whole
    /// transaction, so the reset is never persisted without the payout.
    fn send_balance_to_owner(&self) {
        let owner = self.owner().get();
        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);

        if balance > 0u64 {
            self.send().direct_egld(&owner, &balance);
        }

        self.withdraw_event(&owner, &balance);
    }

    fn minimum_usd(&self) -> BigUint {
        BigUint::from(MINIMUM_USD) * BigUint::from(10u64).pow(TARGET_DECIMALS)
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getPriceFeed)]
    fn get_price_feed(&self) -> ManagedAddress {
        self.price_feed_address().get()
    }

    /// Zero-based, in deposit order.
    #[view(getFunder)]
    fn get_funder(&self, index: usize) -> ManagedAddress {
        require!(
            index < self.funders().len(),
            (FundMeError::IndexOutOfRange.message())
        );
        self.funders().get(index + 1)
    }

    #[view(getFundersCount)]
    fn get_funders_count(&self) -> usize {
        self.funders().len()
    }

    #[view(getAddressToAmountFunded)]
    fn get_address_to_amount_funded(&self, funder: &ManagedAddress) -> BigUint {
        self.address_to_amount_funded(funder).get()
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getVersion)]
    fn get_version(&self) -> u64 {
        self.feed_version()
    }

    #[view(getMinimumUsd)]
    fn get_minimum_usd(&self) -> BigUint {
        self.minimum_usd()
    }

    /// USD value (18 decimals) the admission check would compute for `amount`.
    #[view(getConversionRate)]
    fn usd_value_of(&self, amount: BigUint) -> BigUint {
        self.get_conversion_rate(&amount)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fund")]
    fn fund_event(
        &self,
        #[indexed] funder: &ManagedAddress,
        #[indexed] amount: &BigUint,
        usd_value: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("addressToAmountFunded")]
    fn address_to_amount_funded(&self, funder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("funders")]
    fn funders(&self) -> VecMapper<ManagedAddress>;
}
