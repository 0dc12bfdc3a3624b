//! Input validation: runs before any network I/O.
//!
//! Typed callers only need [`validate_request`]; the enum fields of a
//! [`RunRequest`] are valid by construction. [`parse_request`] accepts loosely
//! typed JSON (bindings, scripts, config-driven callers) and applies the full
//! check order: text, credentials, mode, tone, provider, credential fields.

use serde_json::Value;
use tracing::debug;

use crate::error::MyTextError;
use crate::registry;
use crate::types::{Credentials, Mode, Provider, RunRequest, Tone};

/// Check that `credentials` carries every field `provider` requires.
///
/// Presence is what counts; an empty value is passed through and left for
/// the provider to reject.
pub fn check_credentials(provider: Provider, credentials: &Credentials) -> Result<(), MyTextError> {
    let spec = registry::spec(provider);
    if spec.required_fields.iter().all(|f| credentials.contains(f)) {
        Ok(())
    } else {
        Err(MyTextError::MissingCredentials {
            provider,
            fields: spec.required_fields,
        })
    }
}

/// Validate a typed request.
pub fn validate_request(request: &RunRequest) -> Result<(), MyTextError> {
    check_credentials(request.provider, &request.credentials).inspect_err(|e| {
        debug!(provider = %request.provider, error = %e, "request rejected");
    })
}

/// Build a [`RunRequest`] from a JSON object.
///
/// Expected keys: `text` (string, may be empty), `credentials` (object of
/// strings), and optional `mode`, `tone`, `provider`, `main_model`,
/// `fallback_model`. Missing enum keys take their defaults.
pub fn parse_request(value: &Value) -> Result<RunRequest, MyTextError> {
    let text = value
        .get("text")
        .and_then(Value::as_str)
        .ok_or(MyTextError::InvalidText)?;

    let credentials = value
        .get("credentials")
        .ok_or(MyTextError::InvalidCredentials)
        .and_then(parse_credentials)?;

    let mode = parse_enum::<Mode>(value.get("mode"), MyTextError::InvalidMode)?;
    let tone = parse_enum::<Tone>(value.get("tone"), MyTextError::InvalidTone)?;
    let provider = parse_enum::<Provider>(value.get("provider"), MyTextError::InvalidProvider)?;

    let request = RunRequest {
        text: text.to_string(),
        credentials,
        mode,
        tone,
        provider,
        main_model: optional_string(value.get("main_model")),
        fallback_model: optional_string(value.get("fallback_model")),
    };
    validate_request(&request)?;
    Ok(request)
}

fn parse_credentials(value: &Value) -> Result<Credentials, MyTextError> {
    let map = value.as_object().ok_or(MyTextError::InvalidCredentials)?;
    map.iter()
        .map(|(k, v)| {
            v.as_str()
                .map(|s| (k.clone(), s.to_string()))
                .ok_or(MyTextError::InvalidCredentials)
        })
        .collect()
}

fn parse_enum<T>(value: Option<&Value>, err: MyTextError) -> Result<T, MyTextError>
where
    T: std::str::FromStr + Default,
{
    match value {
        None | Some(Value::Null) => Ok(T::default()),
        Some(Value::String(s)) => s.parse::<T>().map_err(|_| err),
        Some(_) => Err(err),
    }
}

fn optional_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(String::from)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_string_text_rejected_first() {
        for text in [json!(123), json!(null), json!(["a"]), json!({"a": 1}), json!(true)] {
            // Other fields are invalid too; text is checked first.
            let err = parse_request(&json!({
                "text": text,
                "credentials": "bad",
                "mode": "wrong",
                "provider": "nope",
            }))
            .unwrap_err();
            assert_eq!(err.to_string(), "`text` must be a string.");
        }
    }

    #[test]
    fn test_missing_text_rejected() {
        let err = parse_request(&json!({ "credentials": {} })).unwrap_err();
        assert_eq!(err, MyTextError::InvalidText);
    }

    #[test]
    fn test_empty_text_accepted() {
        let req = parse_request(&json!({
            "text": "",
            "credentials": { "api_key": "k" },
        }))
        .unwrap();
        assert_eq!(req.text, "");
    }

    #[test]
    fn test_credentials_must_be_map_of_strings() {
        for creds in [json!("bad"), json!([1, 2]), json!({ "api_key": 5 })] {
            let err = parse_request(&json!({ "text": "a", "credentials": creds })).unwrap_err();
            assert_eq!(err, MyTextError::InvalidCredentials);
        }
    }

    #[test]
    fn test_invalid_mode_tone_provider() {
        let base = |key: &str, val: Value| {
            let mut v = json!({ "text": "a", "credentials": {} });
            v[key] = val;
            parse_request(&v).unwrap_err()
        };
        assert_eq!(base("mode", json!("wrong")), MyTextError::InvalidMode);
        assert_eq!(base("mode", json!(1)), MyTextError::InvalidMode);
        assert_eq!(base("tone", json!("wrong")), MyTextError::InvalidTone);
        assert_eq!(base("provider", json!("AI")), MyTextError::InvalidProvider);
    }

    #[test]
    fn test_missing_credentials_for_every_provider() {
        for provider in Provider::ALL {
            let err = check_credentials(provider, &Credentials::new()).unwrap_err();
            let spec = registry::spec(provider);
            let msg = err.to_string();
            assert!(msg.starts_with(&provider.as_str().to_uppercase()));
            for field in spec.required_fields {
                assert!(msg.contains(&format!("`{field}`")), "{msg}");
            }
        }
    }

    #[test]
    fn test_cloudflare_needs_account_id() {
        let err = check_credentials(Provider::Cloudflare, &Credentials::api_key("x")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CLOUDFLARE provider requires keys: `api_key`, `account_id`"
        );
        assert!(check_credentials(
            Provider::Cloudflare,
            &Credentials::api_key("x").with("account_id", "acc")
        )
        .is_ok());
    }

    #[test]
    fn test_parse_full_request() {
        let req = parse_request(&json!({
            "text": "Hello world!",
            "credentials": { "api_key": "X" },
            "mode": "grammar",
            "tone": "formal",
            "provider": "groq",
            "main_model": "m1",
        }))
        .unwrap();
        assert_eq!(req.mode, Mode::Grammar);
        assert_eq!(req.tone, Tone::Formal);
        assert_eq!(req.provider, Provider::Groq);
        assert_eq!(req.main_model.as_deref(), Some("m1"));
        assert!(req.fallback_model.is_none());
        assert_eq!(req.credentials.get("api_key"), Some("X"));
    }

    #[test]
    fn test_parse_defaults() {
        let req = parse_request(&json!({ "text": "a", "credentials": { "api_key": "k" } })).unwrap();
        assert_eq!(req.mode, Mode::Paraphrase);
        assert_eq!(req.tone, Tone::Neutral);
        assert_eq!(req.provider, Provider::AiStudio);
    }
}
