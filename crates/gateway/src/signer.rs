//! HMAC-SHA256 request signing for the futures API

use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::form_urlencoded;

type HmacSha256 = Hmac<Sha256>;

/// Signs query strings with the account's API secret
///
/// The key schedule is computed once; each signature starts from a copy.
#[derive(Clone)]
pub struct Signer {
    mac: HmacSha256,
}

impl Signer {
    pub fn new(secret: &str) -> Result<Self, InvalidLength> {
        Ok(Self {
            mac: HmacSha256::new_from_slice(secret.as_bytes())?,
        })
    }

    /// Hex-encoded HMAC-SHA256 of `payload`
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Form-encode `params`, append `recvWindow` and `timestamp`, then append
    /// the signature of everything before it as the last parameter.
    pub fn signed_query<K, V>(
        &self,
        params: impl IntoIterator<Item = (K, V)>,
        recv_window_ms: u64,
        timestamp_ms: i64,
    ) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.extend_pairs(params);
        query.append_pair("recvWindow", &recv_window_ms.to_string());
        query.append_pair("timestamp", &timestamp_ms.to_string());
        let payload = query.finish();

        let signature = self.sign(&payload);
        format!("{}&signature={}", payload, signature)
    }
}
