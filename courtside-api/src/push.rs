/// Cryptographic material set by the browser push service. Opaque to the
/// application, forwarded to the server verbatim.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PushKeys {
    pub p256dh: String,
    pub auth: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PushSubscriptionJson {
    /// URL uniquely identifying this browser's push channel.
    pub endpoint: String,
    pub keys: PushKeys,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SubscribeRequest {
    pub subscription: PushSubscriptionJson,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnsubscribeRequest {
    pub endpoint: String,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VapidKeyResponse {
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

/// Payload carried by a push message, rendered by the service worker.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PushPayload {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

impl PushPayload {
    pub fn parse(data: &str) -> Result<PushPayload, serde_json::Error> {
        serde_json::from_str(data)
    }

    /// Shown when a push message arrives with a payload we cannot parse.
    pub fn fallback() -> PushPayload {
        PushPayload {
            title: String::from("Courtside"),
            body: String::from("You have a new notification"),
            icon: None,
            badge: None,
            url: None,
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_parses_with_defaults() {
        let p = PushPayload::parse(r#"{"title":"Tip-off","body":"Game is starting"}"#)
            .expect("parsing payload");
        assert_eq!(p.title, "Tip-off");
        assert_eq!(p.icon, None);
        assert_eq!(p.url, None);
        assert_eq!(p.timestamp, None);
    }

    #[test]
    fn full_payload_round_trips() {
        let p = PushPayload {
            title: String::from("Final"),
            body: String::from("EXA 101 - 99 MPL"),
            icon: Some(String::from("/icons/final.png")),
            badge: Some(String::from("/icons/badge.png")),
            url: Some(String::from("/games/42")),
            timestamp: Some(1700000000),
        };
        let json = serde_json::to_string(&p).expect("serializing payload");
        assert_eq!(PushPayload::parse(&json).expect("reparsing payload"), p);
    }

    #[test]
    fn garbage_payload_is_an_error_not_a_panic() {
        assert!(PushPayload::parse("not json").is_err());
    }

    #[test]
    fn vapid_key_uses_camel_case_wire_name() {
        let r: VapidKeyResponse =
            serde_json::from_str(r#"{"publicKey":"AB-_"}"#).expect("parsing key response");
        assert_eq!(r.public_key, "AB-_");
    }
}
