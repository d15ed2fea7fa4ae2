multiversx_sc::imports!();

use crate::{errors::FundMeError, price_feed_proxy};

/// Fixed-point precision of EGLD amounts and of every USD value computed here.
pub const TARGET_DECIMALS: u32 = 18;

/// EGLD → USD conversion against an external price feed.
///
/// All arithmetic stays in integer fixed point: the feed answer is rescaled
/// from the feed's own decimals to 18, multiplied by the amount, and divided
/// back down by 10^18. The feed is read on every call, never cached, and
/// only through its views.
#[multiversx_sc::module]
pub trait PriceConverterModule {
    /// Current feed answer rescaled to 18 decimals.
    fn get_price(&self) -> BigUint {
        let feed = self.price_feed_address().get();

        let round_data: MultiValue5<u64, BigInt, u64, u64, u64> = self
            .tx()
            .to(&feed)
            .typed(price_feed_proxy::PriceFeedProxy)
            .latest_round_data()
            .returns(ReturnsResult)
            .sync_call();
        let (_round_id, answer, _started_at, _updated_at, _answered_in_round) =
            round_data.into_tuple();

        let decimals: u8 = self
            .tx()
            .to(&feed)
            .typed(price_feed_proxy::PriceFeedProxy)
            .decimals()
            .returns(ReturnsResult)
            .sync_call();

        let price = match answer.into_big_uint().into_option() {
            Some(price) if price > 0u64 => price,
            _ => sc_panic!(FundMeError::InvalidPrice.message()),
        };

        self.normalize_price(price, decimals as u32)
    }

    fn normalize_price(&self, price: BigUint, feed_decimals: u32) -> BigUint {
        if feed_decimals <= TARGET_DECIMALS {
            price * self.ten_pow(TARGET_DECIMALS - feed_decimals)
        } else {
            price / self.ten_pow(feed_decimals - TARGET_DECIMALS)
        }
    }

    /// USD value of `egld_amount`, both in 18-decimal fixed point.
    fn get_conversion_rate(&self, egld_amount: &BigUint) -> BigUint {
        let price = self.get_price();
        (&price * egld_amount) / self.ten_pow(TARGET_DECIMALS)
    }

    fn feed_version(&self) -> u64 {
        let feed = self.price_feed_address().get();
        self.tx()
            .to(&feed)
            .typed(price_feed_proxy::PriceFeedProxy)
            .version()
            .returns(ReturnsResult)
            .sync_call()
    }

    fn ten_pow(&self, exponent: u32) -> BigUint {
        BigUint::from(10u64).pow(exponent)
    }

    #[storage_mapper("priceFeedAddress")]
    fn price_feed_address(&self) -> SingleValueMapper<ManagedAddress>;
}
