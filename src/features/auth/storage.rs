//! Durable session snapshot in browser local storage. Two entries are kept:
//! the serialized session record under `authData` and the verification flag
//! under `emailVerified`. Writers always update both entries in the same call
//! so readers never observe a half-written snapshot. No expiry is set; the
//! storage medium's own lifetime applies.

use crate::features::auth::types::SessionRecord;

const AUTH_DATA_KEY: &str = "authData";
const EMAIL_VERIFIED_KEY: &str = "emailVerified";

/// The durable copy of the session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub record: SessionRecord,
    pub email_verified: bool,
}

/// Reads the snapshot, if one exists. A verification flag without a session
/// record is ignored, so the flag can never be observed as set while the
/// record is absent.
pub(crate) fn read_snapshot() -> Option<Snapshot> {
    let storage = local_storage()?;
    let raw = storage.get_item(AUTH_DATA_KEY).ok()??;
    let record = parse_record(&raw)?;
    let email_verified = storage
        .get_item(EMAIL_VERIFIED_KEY)
        .ok()
        .flatten()
        .map(|raw| parse_flag(&raw))
        .unwrap_or(false);

    Some(Snapshot {
        record,
        email_verified,
    })
}

/// Writes both snapshot entries. Storage failures are tolerated; the
/// in-memory state remains authoritative for the current page lifetime.
pub(crate) fn write_snapshot(record: &SessionRecord, email_verified: bool) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(raw) = encode_record(record) {
        let _ = storage.set_item(AUTH_DATA_KEY, &raw);
    }
    let _ = storage.set_item(EMAIL_VERIFIED_KEY, encode_flag(email_verified));
}

/// Removes both snapshot entries.
pub(crate) fn clear_snapshot() {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.remove_item(AUTH_DATA_KEY);
    let _ = storage.remove_item(EMAIL_VERIFIED_KEY);
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
}

fn encode_record(record: &SessionRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string(record)
}

fn parse_record(raw: &str) -> Option<SessionRecord> {
    serde_json::from_str(raw).ok()
}

fn encode_flag(email_verified: bool) -> &'static str {
    if email_verified { "true" } else { "false" }
}

fn parse_flag(raw: &str) -> bool {
    raw.trim() == "true"
}

#[cfg(test)]
mod tests {
    use super::{encode_flag, encode_record, parse_flag, parse_record};
    use crate::features::auth::types::SessionRecord;

    #[test]
    fn record_encoding_round_trips() {
        let record = SessionRecord {
            token: "abc".to_string(),
            user_id: 7,
            message: Some("ok".to_string()),
        };

        let raw = encode_record(&record).expect("record should encode");
        assert_eq!(parse_record(&raw), Some(record));
    }

    #[test]
    fn parse_record_rejects_garbage() {
        assert_eq!(parse_record("not json"), None);
        assert_eq!(parse_record(r#"{"token":"x"}"#), None);
    }

    #[test]
    fn flag_encoding_is_strict() {
        assert_eq!(encode_flag(true), "true");
        assert_eq!(encode_flag(false), "false");
        assert!(parse_flag("true"));
        assert!(parse_flag(" true "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag(""));
    }
}
