use multiversx_sc_scenario::imports::*;

use mock_price_feed::mock_price_feed_proxy;

const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
const PRICE_FEED_ADDRESS: TestSCAddress = TestSCAddress::new("price-feed");
const PRICE_FEED_CODE_PATH: MxscPath = MxscPath::new("output/mock-price-feed.mxsc.json");

const DECIMALS: u8 = 8;
const INITIAL_ANSWER: i64 = 200_000_000_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(PRICE_FEED_CODE_PATH, mock_price_feed::ContractBuilder);
    blockchain
}

fn deploy(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world.current_block().block_timestamp(100);

    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(mock_price_feed_proxy::MockPriceFeedProxy)
        .init(DECIMALS, BigInt::<StaticApi>::from(INITIAL_ANSWER))
        .code(PRICE_FEED_CODE_PATH)
        .new_address(PRICE_FEED_ADDRESS)
        .run();
}

fn latest_round_data(world: &mut ScenarioWorld) -> (u64, BigInt<StaticApi>, u64, u64, u64) {
    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(mock_price_feed_proxy::MockPriceFeedProxy)
        .latest_round_data()
        .returns(ReturnsResult)
        .run()
        .into_tuple()
}

#[test]
fn init_opens_first_round() {
    let mut world = world();
    deploy(&mut world);

    let (round_id, answer, started_at, updated_at, answered_in_round) =
        latest_round_data(&mut world);
    assert_eq!(round_id, 1);
    assert_eq!(answer, BigInt::<StaticApi>::from(INITIAL_ANSWER));
    assert_eq!(started_at, 100);
    assert_eq!(updated_at, 100);
    assert_eq!(answered_in_round, 1);

    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(mock_price_feed_proxy::MockPriceFeedProxy)
        .decimals()
        .returns(ExpectValue(DECIMALS))
        .run();

    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(mock_price_feed_proxy::MockPriceFeedProxy)
        .version()
        .returns(ExpectValue(0u64))
        .run();
}

#[test]
fn update_answer_opens_new_round_and_keeps_history() {
    let mut world = world();
    deploy(&mut world);

    world.current_block().block_timestamp(250);
    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(PRICE_FEED_ADDRESS)
        .typed(mock_price_feed_proxy::MockPriceFeedProxy)
        .update_answer(BigInt::<StaticApi>::from(-5i64))
        .run();

    let (round_id, answer, _, updated_at, _) = latest_round_data(&mut world);
    assert_eq!(round_id, 2);
    assert_eq!(answer, BigInt::<StaticApi>::from(-5i64));
    assert_eq!(updated_at, 250);

    world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(mock_price_feed_proxy::MockPriceFeedProxy)
        .get_latest_round()
        .returns(ExpectValue(2u64))
        .run();

    let (round_id, answer, _, updated_at, _) = world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(mock_price_feed_proxy::MockPriceFeedProxy)
        .get_round_data(1u64)
        .returns(ReturnsResult)
        .run()
        .into_tuple();
    assert_eq!(round_id, 1);
    assert_eq!(answer, BigInt::<StaticApi>::from(INITIAL_ANSWER));
    assert_eq!(updated_at, 100);
}

#[test]
fn update_round_data_overrides_latest_round() {
    let mut world = world();
    deploy(&mut world);

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(PRICE_FEED_ADDRESS)
        .typed(mock_price_feed_proxy::MockPriceFeedProxy)
        .update_round_data(7u64, BigInt::<StaticApi>::from(42i64), 300u64, 290u64)
        .run();

    let (round_id, answer, started_at, updated_at, answered_in_round) =
        latest_round_data(&mut world);
    assert_eq!(round_id, 7);
    assert_eq!(answer, BigInt::<StaticApi>::from(42i64));
    assert_eq!(started_at, 290);
    assert_eq!(updated_at, 300);
    assert_eq!(answered_in_round, 7);

    let latest: BigInt<StaticApi> = world
        .query()
        .to(PRICE_FEED_ADDRESS)
        .typed(mock_price_feed_proxy::MockPriceFeedProxy)
        .latest_answer()
        .returns(ReturnsResult)
        .run();
    assert_eq!(latest, BigInt::<StaticApi>::from(42i64));
}
