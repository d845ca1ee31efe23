/*
[INPUT]:  Hex-encoded secp256k1 private key and message bytes
[OUTPUT]: Labelled hex ECDSA signatures and hex-encoded public keys
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or key format
*/

use k256::ecdsa::signature::{RandomizedSigner, Verifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;

use crate::http::{DvfError, Result};

/// Label prepended to the hex signature, as expected by API consumers
const SIGNATURE_LABEL: &str = "Signature : ";

/// ECDSA signer over the secp256k1 curve
///
/// Messages are digested with SHA-256 before signing and the nonce is drawn
/// from the operating system CSPRNG, so signing the same message twice
/// produces different signatures that both verify against the same public
/// key. Every signature is re-verified against the derived public key before
/// it is returned; an inconsistent result is a hard error, never a silently
/// bad signature.
#[derive(Debug)]
pub struct EcdsaSigner {
    signing_key: SigningKey,
}

impl EcdsaSigner {
    /// Create a signer from a hex-encoded private scalar
    ///
    /// Supports both "0x"-prefixed and non-prefixed hex strings. Non-hex
    /// input, a wrong-length scalar, or a scalar outside the curve order is
    /// a signing error.
    pub fn from_hex_key(private_key_hex: &str) -> Result<Self> {
        let private_key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let bytes = hex::decode(private_key_hex)
            .map_err(|e| DvfError::signing(format!("invalid private key hex: {e}")))?;
        let signing_key = SigningKey::from_slice(&bytes)
            .map_err(|e| DvfError::signing(format!("invalid private key: {e}")))?;
        Ok(Self { signing_key })
    }

    /// Sign a message and return the labelled hex signature
    ///
    /// The result is `"Signature : "` followed by the lowercase hex of the
    /// 64-byte `r || s` concatenation, each component 32-byte big-endian.
    pub fn sign(&self, message: &[u8]) -> Result<String> {
        let signature = self.sign_verified(message)?;
        Ok(format!(
            "{SIGNATURE_LABEL}{}",
            hex::encode(signature.to_bytes().as_slice())
        ))
    }

    /// Sign a message and also return the derived public key
    ///
    /// The public key is the lowercase hex of the `X || Y` coordinate
    /// concatenation, each coordinate 32-byte big-endian.
    pub fn sign_with_public_key(&self, message: &[u8]) -> Result<(String, String)> {
        let signature = self.sign_verified(message)?;
        let result = format!(
            "{SIGNATURE_LABEL}{}",
            hex::encode(signature.to_bytes().as_slice())
        );
        Ok((result, self.public_key_hex()))
    }

    /// Uncompressed public key coordinates `X || Y` as lowercase hex
    pub fn public_key_hex(&self) -> String {
        let point = self.verifying_key().to_encoded_point(false);
        // skip the 0x04 uncompressed-point tag
        hex::encode(&point.as_bytes()[1..])
    }

    /// Verifying key derived from the private scalar
    pub fn verifying_key(&self) -> VerifyingKey {
        *self.signing_key.verifying_key()
    }

    fn sign_verified(&self, message: &[u8]) -> Result<Signature> {
        let signature: Signature = self
            .signing_key
            .try_sign_with_rng(&mut OsRng, message)
            .map_err(|e| DvfError::signing(format!("ecdsa signing failed: {e}")))?;
        self.verifying_key()
            .verify(message, &signature)
            .map_err(|_| DvfError::SignatureVerification)?;
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_sign_format() {
        let signer = EcdsaSigner::from_hex_key(TEST_KEY).unwrap();
        let result = signer.sign(b"test message").unwrap();

        let hex_part = result.strip_prefix(SIGNATURE_LABEL).expect("label prefix");
        assert_eq!(hex_part.len(), 128);
        assert_eq!(hex::decode(hex_part).unwrap().len(), 64);
    }

    #[test]
    fn test_prefixed_key_accepted() {
        let bare = EcdsaSigner::from_hex_key(TEST_KEY).unwrap();
        let prefixed = EcdsaSigner::from_hex_key(&format!("0x{TEST_KEY}")).unwrap();
        assert_eq!(bare.public_key_hex(), prefixed.public_key_hex());
    }

    #[test]
    fn test_public_key_is_xy_hex() {
        let signer = EcdsaSigner::from_hex_key(TEST_KEY).unwrap();
        let public_key = signer.public_key_hex();
        assert_eq!(public_key.len(), 128);
        assert_eq!(public_key, public_key.to_lowercase());
    }

    #[test]
    fn test_signatures_verify_externally() {
        let signer = EcdsaSigner::from_hex_key(TEST_KEY).unwrap();
        let message = b"payload to authenticate";
        let (result, public_key) = signer.sign_with_public_key(message).unwrap();

        let sig_bytes = hex::decode(result.strip_prefix(SIGNATURE_LABEL).unwrap()).unwrap();
        let signature = Signature::from_slice(&sig_bytes).unwrap();

        let mut sec1 = vec![0x04];
        sec1.extend(hex::decode(&public_key).unwrap());
        let verifying_key = VerifyingKey::from_sec1_bytes(&sec1).unwrap();

        assert!(verifying_key.verify(message, &signature).is_ok());
    }
}
