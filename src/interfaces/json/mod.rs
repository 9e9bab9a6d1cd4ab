pub mod order_fixture;
