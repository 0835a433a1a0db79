//! Session Token Signing
//!
//! The cookie value is `"<session_id>.<base64url(HMAC-SHA256)>"`. The
//! signature binds the session id to the configured secret so a client
//! cannot mint or alter session references. Parsing is total: anything
//! that does not verify yields `None`, which callers resolve to the
//! anonymous identity.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

/// Generate a signed session token for a session id.
pub fn sign_session_token(secret: &[u8; 32], session_id: Uuid) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!(
        "{}.{}",
        session_id,
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Parse and verify a session token. Returns the session id only if
/// the signature checks out.
pub fn parse_session_token(secret: &[u8; 32], token: &str) -> Option<Uuid> {
    let (session_id_str, signature_b64) = token.split_once('.')?;

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .ok()?;

    mac.verify_slice(&signature).ok()?;

    session_id_str.parse().ok()
}
