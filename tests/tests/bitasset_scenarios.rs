//! End-to-end Bitasset adapter scenarios over the host-facing `Venue` seam
//!
//! No network: these exercise the signer and classifier exactly as the host's
//! request pipeline would, on documented response bodies.

use oxidex_exchanges::bitasset::BitassetExchange;
use oxidex_exchanges::{ExchangeError, Namespace, Params, Venue};
use oxidex_tests::{authenticated_adapter, failure_body, public_adapter};
use rstest::rstest;
use serial_test::serial;

const PUBLIC_URL: &str = "https://api.bitasset.com/v1/cash/public/symbols";

#[test]
fn descriptor_registers_three_operations() {
    let adapter = public_adapter();
    let venue: &dyn Venue = &adapter;
    let descriptor = venue.descriptor();

    assert_eq!(descriptor.id, "bitasset");
    assert_eq!(descriptor.name, "Bitasset");
    assert_eq!(descriptor.countries, &["US"]);

    let has = descriptor.has;
    assert!(has.fetch_markets && has.fetch_currencies && has.fetch_balance);
    assert!(
        !(has.create_order
            || has.cancel_order
            || has.fetch_order
            || has.fetch_open_orders
            || has.fetch_closed_orders
            || has.fetch_ticker
            || has.fetch_trades
            || has.fetch_order_book
            || has.fetch_l2_order_book
            || has.fetch_ohlcv
            || has.fetch_deposit_address
            || has.fetch_deposits
            || has.fetch_withdrawals
            || has.fetch_transactions
            || has.withdraw)
    );
}

#[test]
fn success_envelope_passes_classification() {
    let adapter = public_adapter();
    assert!(adapter
        .classify_response(PUBLIC_URL, oxidex_tests::SYMBOLS_BODY)
        .is_ok());
    assert!(adapter
        .classify_response(PUBLIC_URL, oxidex_tests::BALANCE_BODY)
        .is_ok());
}

#[test]
fn non_json_body_passes_unexamined() {
    let adapter = public_adapter();
    assert!(adapter.classify_response(PUBLIC_URL, "not json").is_ok());
}

#[test]
fn missing_success_indicator_is_malformed() {
    let adapter = public_adapter();
    let err = adapter
        .classify_response(PUBLIC_URL, r#"{"code":0,"data":[]}"#)
        .unwrap_err();
    assert!(matches!(err, ExchangeError::MalformedResponse(_)));
}

#[test]
fn numeric_zero_success_indicator_is_a_failure() {
    let adapter = public_adapter();
    let err = adapter
        .classify_response(PUBLIC_URL, r#"{"msg":0,"message":"APIKEY_INVALID"}"#)
        .unwrap_err();
    assert!(matches!(err, ExchangeError::Authentication(_)));
}

#[rstest]
#[case::dust_trade("DUST_TRADE_DISALLOWED_MIN_VALUE_50K_SAT")]
#[case::quantity_not_provided("QUANTITY_NOT_PROVIDED")]
#[case::min_trade("MIN_TRADE_REQUIREMENT_NOT_MET")]
fn invalid_order_codes(#[case] message: &str) {
    let adapter = public_adapter();
    let err = adapter
        .classify_response(PUBLIC_URL, &failure_body(message))
        .unwrap_err();
    assert!(matches!(err, ExchangeError::InvalidOrder(_)), "{message}: {err:?}");
}

#[rstest]
#[case::apisign_missing("APISIGN_NOT_PROVIDED")]
#[case::bad_signature("INVALID_SIGNATURE")]
fn authentication_codes(#[case] message: &str) {
    let adapter = public_adapter();
    let err = adapter
        .classify_response(PUBLIC_URL, &failure_body(message))
        .unwrap_err();
    assert!(matches!(err, ExchangeError::Authentication(_)), "{message}: {err:?}");
}

#[rstest]
#[case::order_closed("ORDER_NOT_OPEN")]
#[case::bad_uuid("UUID_INVALID")]
fn order_not_found_codes(#[case] message: &str) {
    let adapter = public_adapter();
    let err = adapter
        .classify_response(PUBLIC_URL, &failure_body(message))
        .unwrap_err();
    assert!(matches!(err, ExchangeError::OrderNotFound(_)), "{message}: {err:?}");
}

#[rstest]
#[case::throttled("requests throttled. Try again in 60 seconds", true)]
#[case::problem("There was a problem processing your request.", false)]
fn substring_matches(#[case] message: &str, #[case] throttled: bool) {
    let adapter = public_adapter();
    let err = adapter
        .classify_response(PUBLIC_URL, &failure_body(message))
        .unwrap_err();
    if throttled {
        assert!(matches!(err, ExchangeError::DdosProtection(_)));
    } else {
        assert!(matches!(err, ExchangeError::ExchangeNotAvailable(_)));
    }
}

#[test]
fn unknown_failure_is_generic_with_context() {
    let adapter = public_adapter();
    let err = adapter
        .classify_response(PUBLIC_URL, &failure_body("NEVER_SEEN_BEFORE"))
        .unwrap_err();

    match err {
        ExchangeError::Exchange(msg) => {
            assert!(msg.contains("bitasset"));
            assert!(msg.contains("NEVER_SEEN_BEFORE"));
        }
        other => panic!("expected generic exchange error, got {other:?}"),
    }
}

#[test]
fn cancel_url_uuid_is_quoted_in_order_not_found() {
    let adapter = public_adapter();
    let cancel_url =
        "https://api.bitasset.com/v1/cash/accounts/cancel?apiAccessKey=K&uuid=ABC123&apiSign=S";

    let err = adapter
        .classify_response(cancel_url, &failure_body("INVALID_ORDER"))
        .unwrap_err();
    match err {
        ExchangeError::OrderNotFound(msg) => assert!(msg.contains("ABC123")),
        other => panic!("expected OrderNotFound, got {other:?}"),
    }

    let bare_url = "https://api.bitasset.com/v1/cash/accounts/cancel?apiAccessKey=K";
    let err = adapter
        .classify_response(bare_url, &failure_body("INVALID_ORDER"))
        .unwrap_err();
    match err {
        ExchangeError::OrderNotFound(msg) => assert!(!msg.contains("ABC123")),
        other => panic!("expected OrderNotFound, got {other:?}"),
    }
}

#[test]
fn signing_public_and_accounts_namespaces() {
    let adapter = authenticated_adapter();

    let public = Venue::sign(&adapter, "symbols", Namespace::Public, "GET", &Params::new())
        .expect("public signing");
    assert_eq!(public.url, "https://api.bitasset.com/v1/cash/public/symbols");
    assert!(public.headers.is_empty());

    let accounts = Venue::sign(&adapter, "balance", Namespace::Accounts, "GET", &Params::new())
        .expect("accounts signing");
    assert!(accounts.url.starts_with("https://api.bitasset.com/v1/cash/accounts/balance?"));
    assert!(accounts.url.contains("apiAccessKey=test-key"));
    assert!(accounts.url.contains("&apiTimeStamp="));
    assert!(accounts.url.contains("&apiSign="));
    assert!(accounts.headers.is_empty());
    assert!(accounts.body.is_none());
}

#[test]
fn signing_accounts_without_credentials_fails_fast() {
    let adapter = public_adapter();

    let err = Venue::sign(&adapter, "balance", Namespace::Accounts, "GET", &Params::new())
        .unwrap_err();
    assert!(matches!(err, ExchangeError::MissingCredentials(_)));
}

#[test]
#[serial]
fn env_credentials_round_trip() {
    use oxidex_exchanges::bitasset::BitassetConfig;

    std::env::set_var("BITASSET_API_KEY", "env-key");
    std::env::set_var("BITASSET_SECRET_KEY", "env-secret");

    let config = BitassetConfig::default()
        .with_env_credentials()
        .expect("env credentials");
    assert_eq!(config.api_key, "env-key");
    assert_eq!(config.api_secret, "env-secret");

    std::env::remove_var("BITASSET_API_KEY");
    std::env::remove_var("BITASSET_SECRET_KEY");

    let err = BitassetConfig::default().with_env_credentials().unwrap_err();
    assert!(matches!(err, ExchangeError::MissingCredentials(_)));
}

#[test]
fn authentication_latch_disambiguates_apikey_invalid() {
    // Scenario: APIKEY_INVALID before any authenticated success is a genuine
    // authentication failure; the same payload afterwards is rate limiting.
    let adapter = public_adapter();
    let body = failure_body("APIKEY_INVALID");

    let before = adapter.classify_response(PUBLIC_URL, &body).unwrap_err();
    assert!(matches!(before, ExchangeError::Authentication(_)));

    // the latch only flips inside the request pipeline after a successful
    // accounts call, which needs a live venue; construction always starts
    // from the never-authenticated state
    let fresh = BitassetExchange::new(Default::default()).unwrap();
    let again = fresh.classify_response(PUBLIC_URL, &body).unwrap_err();
    assert!(matches!(again, ExchangeError::Authentication(_)));
}
