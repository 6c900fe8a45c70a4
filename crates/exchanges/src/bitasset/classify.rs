//! Bitasset response classification
//!
//! Runs over every received body that looks like a JSON object, before the
//! response is returned to the caller. Non-JSON bodies pass through
//! unexamined; transport-level failures never reach this code.

use crate::errors::{ErrorRegistry, ExchangeError, Result};
use crate::json::{safe_string, safe_value};
use serde_json::Value;

/// Translate a Bitasset error payload into the shared taxonomy
///
/// `has_authenticated` is the adapter's authentication-success flag: an
/// `APIKEY_INVALID` after a prior authenticated success is almost certainly
/// the venue's DDoS protection rather than a genuinely bad key.
pub(crate) fn classify_response(
    venue_id: &str,
    registry: &ErrorRegistry,
    has_authenticated: bool,
    url: &str,
    body: &str,
) -> Result<()> {
    if !body.starts_with('{') {
        return Ok(());
    }

    // a body that starts with '{' but fails to parse is left for the decode
    // step in the request pipeline
    let response: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return Ok(()),
    };

    let success = match safe_value(&response, "msg") {
        None => {
            return Err(ExchangeError::MalformedResponse(format!(
                "{venue_id}: malformed response: {body}"
            )));
        }
        // the venue reports success as the string "success", not a boolean
        Some(Value::String(s)) => s == "success",
        Some(Value::Bool(b)) => *b,
        // other types resolve by truthiness, so a numeric 0 is a failure
        Some(Value::Number(n)) => n.as_f64().map_or(true, |v| v != 0.0),
        Some(_) => true,
    };
    if success {
        return Ok(());
    }

    let message = safe_string(&response, "message");
    let feedback = format!("{venue_id} {body}");

    if let Some(message) = &message {
        if message == "APIKEY_INVALID" {
            return Err(if has_authenticated {
                ExchangeError::DdosProtection(feedback)
            } else {
                ExchangeError::Authentication(feedback)
            });
        }

        if message == "DUST_TRADE_DISALLOWED_MIN_VALUE_50K_SAT" {
            return Err(ExchangeError::InvalidOrder(format!(
                "{venue_id} order cost should be over 50k satoshi {body}"
            )));
        }

        // the venue returns the same ambiguous INVALID_ORDER for canceling
        // already-canceled and closed orders, so cancel-style requests map to
        // OrderNotFound, quoting the order uuid when the URL carries one
        if message == "INVALID_ORDER" && url.contains("cancel") {
            let order_id = url.split('&').find_map(|part| {
                let (key, value) = part.split_once('=')?;
                (key == "uuid").then(|| value.to_string())
            });
            return Err(ExchangeError::OrderNotFound(match order_id {
                Some(id) => format!("{venue_id} cancelOrder {id} {body}"),
                None => format!("{venue_id} cancelOrder {body}"),
            }));
        }

        if let Some(kind) = registry.lookup(message) {
            return Err(kind.into_error(feedback));
        }

        if message.contains("throttled. Try again") {
            return Err(ExchangeError::DdosProtection(feedback));
        }
        if message.contains("problem") {
            return Err(ExchangeError::ExchangeNotAvailable(feedback));
        }
    }

    Err(ExchangeError::Exchange(feedback))
}
