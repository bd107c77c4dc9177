//! Demo driver against the Stock v1 API: one GET, one PUT, then 100
//! sequential PUTs with a fixed delay between calls.
//!
//! Expects `FASTCHANNEL_CLIENT_ID`, `FASTCHANNEL_CLIENT_SECRET`,
//! `FASTCHANNEL_CLIENT_SCOPE` and `FASTCHANNEL_SUBSCRIPTION_KEY` in the
//! environment.

use std::thread;
use std::time::Duration;

use fastchannel_client::credentials::FastchannelCredentials;
use fastchannel_client::error::FastchannelClientError;
use fastchannel_client::{FastchannelClient, FastchannelClientConfig};

const PRODUCT_CODES: [&str; 10] = [
    "32004210", "31232810", "32004222", "32003810", "31236920", "31239920", "33140121", "31012651",
    "32004022", "33008910",
];

fn product_code(index: usize) -> &'static str {
    PRODUCT_CODES[index % PRODUCT_CODES.len()]
}

fn main() -> Result<(), FastchannelClientError> {
    env_logger::init();

    let credentials = FastchannelCredentials::from_env().map_err(|e| {
        FastchannelClientError::UnknownError(format!("Missing credential variable: {e}"))
    })?;
    let subscription_key = std::env::var("FASTCHANNEL_SUBSCRIPTION_KEY").map_err(|e| {
        FastchannelClientError::UnknownError(format!("Missing subscription key: {e}"))
    })?;

    let config = FastchannelClientConfig::builder(credentials)
        .with_subscription_key(subscription_key)
        .build();

    // Authenticate only once, then reuse the same access token on every call.
    let client = FastchannelClient::create(config)?;

    let get_response = client.get_product_stock(product_code(0))?;
    println!("[GET] HTTP Response for stock of product {}:", product_code(0));
    println!("{get_response}\n");

    let put_response = client.set_product_stock(product_code(0), r#"{"StorageId":18,"Quantity":0}"#)?;
    println!("[PUT] HTTP Response for stock of product {}:", product_code(0));
    println!("{put_response}\n");

    for i in 0..100 {
        let code = product_code(i);
        let response = client.set_product_stock(code, r#"{"StorageId":18,"Quantity":999}"#)?;
        println!("[PUT] HTTP Response #{i} for stock of product {code}:");
        println!("{response}\n");

        // 500ms delay between each API call
        thread::sleep(Duration::from_millis(500));
    }

    Ok(())
}
