use order_dispatch::models::OrderRequest;
use proptest::prelude::*;

/// Amounts that pass pre-admission validation, including values over the ceiling
pub fn amount_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.01f64..=1_000.0,
        1_000.0f64..=10_000.0,
        10_000.0f64..50_000.0,
        Just(1_000.0),
        Just(10_000.0),
    ]
}

pub fn priority_strategy() -> impl Strategy<Value = u8> {
    1u8..=3
}

pub fn item_count_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![1usize..=50, 51usize..=80]
}

pub fn status_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("pending"),
        Just("paid"),
        Just("shipped"),
        Just("delivered"),
        Just("cancelled"),
    ]
}

/// Requests that always pass pre-admission validation
pub fn valid_request_strategy() -> impl Strategy<Value = OrderRequest> {
    (
        amount_strategy(),
        item_count_strategy(),
        priority_strategy(),
        status_strategy(),
        "[a-z]{1,12}@example\\.com",
        "[0-9]{1,4} [A-Z][a-z]{2,10} St",
    )
        .prop_map(|(amount, items, priority, status, customer, address)| OrderRequest {
            id: None,
            amount,
            items: (0..items).map(|i| format!("item_{i}")).collect(),
            customer,
            status: Some(status.to_string()),
            address,
            notes: None,
            priority: Some(priority),
            created_at: None,
        })
}
