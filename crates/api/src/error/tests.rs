use super::*;

fn malformed_sig() -> Error {
    Error::MalformedSignature {
        context: "Dilithium2",
        message: "hint indices not strictly increasing".into(),
    }
}

#[test]
fn test_display_includes_context_and_reason() {
    assert_eq!(
        malformed_sig().to_string(),
        "malformed signature: Dilithium2: hint indices not strictly increasing"
    );

    let invalid = Error::SignatureInvalid {
        context: "Dilithium3",
        stage: "challenge recompute",
    };
    assert_eq!(
        invalid.to_string(),
        "invalid signature: Dilithium3: rejected at challenge recompute"
    );
}

#[test]
fn test_rejected_hides_reason() {
    let rejected: Rejected = malformed_sig().into();
    assert_eq!(rejected.to_string(), "signature verification failed");

    let other: Rejected = Error::InternalFailure {
        context: "ntt",
        message: "unreduced coefficient".into(),
    }
    .into();
    assert_eq!(rejected, other);
}

#[test]
fn test_with_context_and_message() {
    let err = malformed_sig().with_context("decode").with_message("bad padding");
    assert_eq!(err.context(), "decode");
    assert!(err.is_structural());
    assert_eq!(err.to_string(), "malformed signature: decode: bad padding");

    let invalid = Error::SignatureInvalid {
        context: "x",
        stage: "bound check",
    };
    assert_eq!(invalid.clone().with_message("ignored"), invalid);
    assert!(!invalid.is_structural());
}

#[test]
fn test_result_ext() {
    let r: core::result::Result<(), Error> = Err(malformed_sig());
    let r = r.with_context("outer");
    assert_eq!(r.as_ref().map_err(Error::context), Err("outer"));
    assert_eq!(r.uniform(), Err(Rejected));

    let ok: core::result::Result<u8, Error> = Ok(7);
    assert_eq!(ok.uniform(), Ok(7));

    let wrapped: core::result::Result<(), &str> = Err("low level").wrap_err(|| "high level");
    assert_eq!(wrapped, Err("high level"));
}

#[test]
fn test_errors_box_as_std_error() {
    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(malformed_sig());
    assert!(boxed.to_string().starts_with("malformed signature"));

    let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(Rejected);
    assert_eq!(boxed.to_string(), "signature verification failed");
}
