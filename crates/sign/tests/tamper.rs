//! Rejection behaviour for modified keys, signatures and messages

mod common;

use std::sync::OnceLock;

use common::{dilithium2_scenario, init_tracing, load_section, SigVerTestVector};
use dverify_api::{Error as ApiError, Rejected};
use dverify_params::pqc::dilithium::{
    Dilithium2Params, Dilithium3Params, Dilithium5Params, DilithiumSchemeParams, C_TILDE_BYTES,
};
use dverify_sign::pq::dilithium;
use dverify_sign::{Dilithium2Verifier, DilithiumVerifier, VerifyStage};
use proptest::prelude::*;

fn scenario() -> &'static SigVerTestVector {
    static SCENARIO: OnceLock<SigVerTestVector> = OnceLock::new();
    SCENARIO.get_or_init(dilithium2_scenario)
}

fn first_valid(section: &str) -> SigVerTestVector {
    load_section(section)
        .into_iter()
        .find(|v| v.expected_pass)
        .expect("valid vector present")
}

fn detailed(pk: &[u8], msg: &[u8], sig: &[u8]) -> Result<(), ApiError> {
    Dilithium2Verifier::new(pk)?.verify_detailed(sig, msg)
}

#[test]
fn test_scenario_accept_and_reject() {
    init_tracing();
    let v = scenario();
    let verifier = Dilithium2Verifier::new(&v.pk).unwrap();

    assert_eq!(verifier.verify(&v.sig, b"message to be signed"), Ok(()));

    let mut flipped = v.sig.clone();
    flipped[0] ^= 1;
    assert_eq!(verifier.verify(&flipped, &v.msg), Err(Rejected));

    let mut extended = v.sig.clone();
    extended.extend_from_slice(b"some trailing data");
    assert!(matches!(
        verifier.verify_detailed(&extended, &v.msg),
        Err(ApiError::MalformedSignature { .. })
    ));
    assert_eq!(verifier.verify(&extended, &v.msg), Err(Rejected));

    assert!(matches!(
        verifier.verify_detailed(&v.sig, b"some bad message"),
        Err(ApiError::SignatureInvalid { stage: "decision", .. })
    ));
}

fn check_lengths<P: DilithiumSchemeParams>(v: &SigVerTestVector) {
    assert!(dilithium::verify::<P>(&v.pk, &v.msg, &v.sig).is_ok());

    let mut long_pk = v.pk.clone();
    long_pk.push(0);
    for pk in [&v.pk[..v.pk.len() - 1], &long_pk[..], &[][..]] {
        let err = DilithiumVerifier::<P>::new(pk).err().expect("short or long key rejected");
        assert!(matches!(err, ApiError::MalformedKey { .. }), "{:?}", err);
        let core = dilithium::verify::<P>(pk, &v.msg, &v.sig).unwrap_err();
        assert_eq!(core.stage(), Some(VerifyStage::Parsing));
    }

    let verifier = DilithiumVerifier::<P>::new(&v.pk).unwrap();
    let mut long_sig = v.sig.clone();
    long_sig.push(0);
    for sig in [&v.sig[..v.sig.len() - 1], &long_sig[..], &[][..]] {
        let err = verifier.verify_detailed(sig, &v.msg).unwrap_err();
        assert!(matches!(err, ApiError::MalformedSignature { .. }), "{:?}", err);
    }
}

#[test]
fn test_exact_lengths_enforced() {
    check_lengths::<Dilithium2Params>(scenario());
    check_lengths::<Dilithium3Params>(&first_valid("Dilithium3"));
    check_lengths::<Dilithium5Params>(&first_valid("Dilithium5"));
}

#[test]
fn test_rejection_stages() {
    let v = scenario();
    let z_start = C_TILDE_BYTES;
    let hints_start = z_start + 4 * Dilithium2Params::Z_POLY_BYTES;
    let ends_start = hints_start + Dilithium2Params::OMEGA_PARAM;

    // raw z = 0 encodes z = γ1, outside the norm bound
    let mut sig = v.sig.clone();
    sig[z_start] = 0;
    sig[z_start + 1] = 0;
    sig[z_start + 2] &= 0xFC;
    assert_eq!(
        detailed(&v.pk, &v.msg, &sig),
        Err(ApiError::SignatureInvalid {
            context: "Dilithium2",
            stage: "bound checking"
        })
    );

    let mut sig = v.sig.clone();
    sig[C_TILDE_BYTES - 1] ^= 0x80;
    assert_eq!(
        detailed(&v.pk, &v.msg, &sig),
        Err(ApiError::SignatureInvalid {
            context: "Dilithium2",
            stage: "decision"
        })
    );

    let mut sig = v.sig.clone();
    sig[ends_start + 3] = Dilithium2Params::OMEGA_PARAM as u8 + 1;
    assert!(matches!(
        detailed(&v.pk, &v.msg, &sig),
        Err(ApiError::MalformedSignature { .. })
    ));

    // the vector leaves index slots unused; any non-zero byte there is malformed
    let used = v.sig[ends_start + 3] as usize;
    assert!(used < Dilithium2Params::OMEGA_PARAM);
    let mut sig = v.sig.clone();
    sig[ends_start - 1] = 1;
    assert!(matches!(
        detailed(&v.pk, &v.msg, &sig),
        Err(ApiError::MalformedSignature { .. })
    ));
}

#[test]
fn test_uniform_outcome_hides_reason() {
    let v = scenario();
    let verifier = Dilithium2Verifier::new(&v.pk).unwrap();

    let mut bad_hint = v.sig.clone();
    let last = bad_hint.len() - 1;
    bad_hint[last] = 0xFF;
    let truncated = &v.sig[..100];

    let a = verifier.verify(&bad_hint, &v.msg).unwrap_err();
    let b = verifier.verify(truncated, &v.msg).unwrap_err();
    let c = verifier.verify(&v.sig, b"other").unwrap_err();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c.to_string(), "signature verification failed");
}

#[test]
fn test_verifier_matches_core_entry_point() {
    for v in load_section("Dilithium2") {
        let verifier = Dilithium2Verifier::new(&v.pk).unwrap();
        let wrapped = verifier.verify_detailed(&v.sig, &v.msg);
        let core = dilithium::verify::<Dilithium2Params>(&v.pk, &v.msg, &v.sig)
            .map_err(ApiError::from);
        assert_eq!(wrapped, core, "count {}", v.count);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_signature_bit_flip_rejected(bit in 0usize..2420 * 8) {
        let v = scenario();
        let mut sig = v.sig.clone();
        sig[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(detailed(&v.pk, &v.msg, &sig).is_err());
    }

    #[test]
    fn prop_message_bit_flip_rejected(bit in 0usize..20 * 8) {
        let v = scenario();
        let mut msg = v.msg.clone();
        msg[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(detailed(&v.pk, &msg, &v.sig).is_err());
    }

    #[test]
    fn prop_public_key_bit_flip_rejected(bit in 0usize..1312 * 8) {
        let v = scenario();
        let mut pk = v.pk.clone();
        pk[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(detailed(&pk, &v.msg, &v.sig).is_err());
    }

    #[test]
    fn prop_random_signatures_rejected(sig in proptest::collection::vec(any::<u8>(), 2420)) {
        let v = scenario();
        prop_assert!(detailed(&v.pk, &v.msg, &sig).is_err());
    }
}
