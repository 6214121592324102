//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use digital_goods_indexer_client::{error::IndexerClientError, IndexerGraphQLClient};
use digital_goods_storefront::{listing::ListingId, traits::ListingIndexer, Amount};
use httpmock::prelude::*;
use serde_json::json;

fn digital_goods() -> serde_json::Value {
    json!({
        "data": {
            "digitalGoods": [
                {
                    "tokenId": "12",
                    "name": "Lo-Fi Beats Vol. 2",
                    "description": "Ten loops",
                    "category": "music",
                    "lister": "0xfB7fC51E7051930461A62b9969b644E5554B1039",
                    "listerPrice": "1000000000000000000",
                    "remainingSupply": "4",
                    "previewLink": "https://example.com/beats.mp3"
                },
                {
                    "tokenId": "3",
                    "name": "Watercolor brushes",
                    "description": "Procreate brush set",
                    "category": "design",
                    "lister": "0x0101010101010101010101010101010101010101",
                    "listerPrice": "2500",
                    "remainingSupply": "1",
                    "previewLink": "https://example.com/brushes.png"
                }
            ]
        }
    })
}

#[tokio::test]
async fn it_fetches_all_listings() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/")
                .header("content-type", "application/json")
                .body_contains("FetchAllDigitalGoods")
                .body_contains(r#"remainingSupply_gt: \"0\""#);
            then.status(200).json_body(digital_goods());
        })
        .await;

    let mut client = IndexerGraphQLClient::connect(server.url("/")).unwrap();
    let listings = client.fetch_listings().await.unwrap();
    mock.assert_async().await;

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].id, ListingId::new(12));
    assert_eq!(listings[0].unit_price, Amount::from(1_000_000_000_000_000_000u64));
    assert_eq!(listings[0].remaining_supply, 4);
    assert_eq!(
        listings[0].lister.to_string(),
        "0xfb7fc51e7051930461a62b9969b644e5554b1039"
    );
    assert_eq!(listings[1].name, "Watercolor brushes");
}

#[tokio::test]
async fn it_sends_the_search_term_as_a_variable() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/")
                .body_contains("name_contains_nocase")
                .body_contains(r#""variables":{"searchTerm":"beats"}"#);
            then.status(200).json_body(digital_goods());
        })
        .await;

    let mut client = IndexerGraphQLClient::connect(server.url("/")).unwrap();
    let listings = client.search_listings("beats").await.unwrap();
    mock.assert_async().await;
    assert_eq!(listings.len(), 2);
}

#[tokio::test]
async fn graphql_errors_are_returned() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200)
                .json_body(json!({ "errors": [{ "message": "Type `Query` has no field `digitalGood`" }] }));
        })
        .await;

    let mut client = IndexerGraphQLClient::connect(server.url("/")).unwrap();
    let err = client.fetch_listings().await.unwrap_err();
    match err {
        IndexerClientError::QueryFailed { message } => assert!(message.contains("has no field")),
        err => panic!("unexpected error: {}", err),
    }
}

#[tokio::test]
async fn malformed_listings_fail_to_deserialize() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(200).json_body(json!({
                "data": { "digitalGoods": [{ "tokenId": "not-a-number" }] }
            }));
        })
        .await;

    let mut client = IndexerGraphQLClient::connect(server.url("/")).unwrap();
    let err = client.fetch_listings().await.unwrap_err();
    assert!(matches!(err, IndexerClientError::DeserializeResponse { ref query, .. } if query == "FetchAllDigitalGoods"));
}

#[tokio::test]
async fn non_json_responses_fail_the_request() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/");
            then.status(502).body("Bad gateway");
        })
        .await;

    let mut client = IndexerGraphQLClient::connect(server.url("/")).unwrap();
    let err = client.fetch_listings().await.unwrap_err();
    assert!(matches!(err, IndexerClientError::RequestFailed { .. }));
}
