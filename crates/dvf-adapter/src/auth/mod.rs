/*
[INPUT]:  Key material and payloads to authenticate
[OUTPUT]: ECDSA signatures and derived public keys
[POS]:    Auth layer - manual signing step for DeversiFi requests
[UPDATE]: When auth flow or signature methods change
*/

pub mod signer;

pub use signer::EcdsaSigner;
