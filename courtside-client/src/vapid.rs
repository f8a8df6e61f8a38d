use anyhow::Context;

/// Decodes a base64url-encoded VAPID public key, padded or not, into the
/// bytes the browser subscribe primitive expects.
pub fn decode_public_key(key: &str) -> anyhow::Result<Vec<u8>> {
    base64::decode_config(key.trim_end_matches('='), base64::URL_SAFE_NO_PAD)
        .context("decoding vapid public key as base64url")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_url_safe_alphabet() {
        // '-' and '_' are the url-safe substitutes for '+' and '/'
        let bytes = decode_public_key("AB-_").expect("decoding key");
        assert_eq!(bytes.len(), 3);
    }

    #[test]
    fn accepts_padded_input() {
        assert_eq!(decode_public_key("eA==").expect("decoding key"), vec![0x78]);
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(decode_public_key("!!").is_err());
    }
}
