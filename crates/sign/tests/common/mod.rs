//! Shared helpers for the verification integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

/// One record of a SigVer response file
#[derive(Debug, Clone)]
pub struct SigVerTestVector {
    pub count: usize,
    pub msg: Vec<u8>,
    pub pk: Vec<u8>,
    pub sig: Vec<u8>,
    pub expected_pass: bool,
}

pub fn vectors_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("vectors");
    path
}

fn hex_field(line: &str, prefix: &str) -> Vec<u8> {
    let value = line.trim_start_matches(prefix);
    hex::decode(value).unwrap_or_else(|e| panic!("bad hex in '{}': {}", prefix.trim(), e))
}

/// Parses the records of section `[target]` from a SigVer response file.
pub fn parse_sig_ver_vectors(rsp_content: &str, target: &str) -> Vec<SigVerTestVector> {
    let mut vectors = Vec::new();
    let mut in_section = false;
    let mut count: Option<usize> = None;
    let mut msg: Option<Vec<u8>> = None;
    let mut pk: Option<Vec<u8>> = None;
    let mut sig: Option<Vec<u8>> = None;

    for line in rsp_content.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            in_section = line.trim_start_matches('[').trim_end_matches(']') == target;
            count = None;
            msg = None;
            pk = None;
            sig = None;
            continue;
        }
        if !in_section {
            continue;
        }

        if let Some(value) = line.strip_prefix("count = ") {
            count = value.parse().ok();
        } else if line.starts_with("msg = ") {
            msg = Some(hex_field(line, "msg = "));
        } else if line.starts_with("pk = ") {
            pk = Some(hex_field(line, "pk = "));
        } else if line.starts_with("sig = ") {
            sig = Some(hex_field(line, "sig = "));
        } else if let Some(result) = line.strip_prefix("result = ") {
            if let (Some(count), Some(msg), Some(pk), Some(sig)) =
                (count.take(), msg.take(), pk.take(), sig.take())
            {
                vectors.push(SigVerTestVector {
                    count,
                    msg,
                    pk,
                    sig,
                    expected_pass: result.starts_with('P'),
                });
            }
        }
    }
    vectors
}

pub fn load_section(target: &str) -> Vec<SigVerTestVector> {
    let path = vectors_dir().join("SigVer.rsp");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    let vectors = parse_sig_ver_vectors(&content, target);
    assert!(!vectors.is_empty(), "no vectors for [{}]", target);
    vectors
}

/// The level 2 vector signing "message to be signed"
pub fn dilithium2_scenario() -> SigVerTestVector {
    load_section("Dilithium2")
        .into_iter()
        .find(|v| v.expected_pass && v.msg == b"message to be signed")
        .expect("scenario vector present")
}

/// Installs a test subscriber so `RUST_LOG=debug` shows rejection events
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
