use std::sync::Once;

use regex::Regex;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("rid=debug")
            .with_test_writer()
            .try_init();
    });
}

fn assert_pair(a: &str, b: &str, pattern: &str) {
    let pat = Regex::new(pattern).unwrap();
    assert!(
        pat.is_match(a) && pat.is_match(b),
        "ids not matching pattern: {}, {}",
        a,
        b
    );
    assert_ne!(a, b, "successive ids should differ");
}

#[test]
fn test_rid16() {
    init_tracing();
    assert_pair(&rid::new_rid16(), &rid::new_rid16(), "^[a-zA-Z0-9]{16}$");
    assert_pair(
        &rid::new_rid16_crypto(),
        &rid::new_rid16_crypto(),
        "^[a-zA-Z0-9]{16}$",
    );
    assert_pair(
        &rid::new_rid16_math(),
        &rid::new_rid16_math(),
        "^[a-zA-Z0-9]{16}$",
    );
}

#[test]
fn test_rid20() {
    init_tracing();
    assert_pair(&rid::new_rid20(), &rid::new_rid20(), "^[a-zA-Z0-9]{20}$");
    assert_pair(
        &rid::new_rid20_crypto(),
        &rid::new_rid20_crypto(),
        "^[a-zA-Z0-9]{20}$",
    );
    assert_pair(
        &rid::new_rid20_math(),
        &rid::new_rid20_math(),
        "^[a-zA-Z0-9]{20}$",
    );
}

#[test]
fn test_validators_accept_generator_output() {
    for _ in 0..100 {
        assert!(rid::valid_rid16(&rid::new_rid16()));
        assert!(rid::valid_rid20(&rid::new_rid20()));
        assert!(rid::valid_rid16(&rid::new_rid16_crypto()));
        assert!(rid::valid_rid20(&rid::new_rid20_crypto()));
    }
}

#[test]
fn test_validators_reject_bad_input() {
    assert!(!rid::valid_rid16(""));
    assert!(!rid::valid_rid20(""));
    assert!(!rid::valid_rid16(&rid::new_rid20()));
    assert!(!rid::valid_rid20(&rid::new_rid16()));
    assert!(!rid::valid_rid16("abcdefgh-ijklmno"));
    assert!(!rid::valid_rid20("abcdefghijklmnopqrs+"));
    assert!(!rid::valid_rid20("abcdefghijklmnopqrs "));
    assert!(!rid::valid_rid16("ábcdefghijklmno"));
}

#[test]
fn test_signed_round_trip() {
    init_tracing();
    let signed = rid::new_rid20_signed("secret");
    assert_eq!(signed.len(), 36);
    assert!(rid::valid_rid20_signed(&signed, "secret"));
    assert!(!rid::valid_rid20_signed(&signed, "Secret"));

    for secret in ["", "k", "a much longer secret than the block size of sha256, padded out a bit more"] {
        let id = rid::new_rid20_crypto();
        let signed = format!("{}{}", id, rid::sign(&id, secret));
        assert!(rid::valid_rid20_signed(&signed, secret));
    }
}

/// Replaces the char at `i` with a different alphabet or hex char
fn flip(s: &str, i: usize) -> String {
    let mut bytes = s.as_bytes().to_vec();
    bytes[i] = match bytes[i] {
        b'0' => b'1',
        _ => b'0',
    };
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_signed_tamper_sensitivity() {
    let signed = rid::new_rid20_signed("secret");
    for i in (0..36).step_by(3).chain([35]) {
        let tampered = flip(&signed, i);
        assert_ne!(tampered, signed);
        assert!(
            !rid::valid_rid20_signed(&tampered, "secret"),
            "tampering at {} went unnoticed",
            i
        );
    }
}

#[test]
fn test_signed_rejects_wrong_length() {
    let signed = rid::new_rid20_signed("secret");
    assert!(!rid::valid_rid20_signed("", "secret"));
    assert!(!rid::valid_rid20_signed(&signed[..35], "secret"));
    assert!(!rid::valid_rid20_signed(&format!("{}0", signed), "secret"));
    assert!(!rid::valid_rid20_signed(&rid::new_rid20(), "secret"));
}

#[test]
fn test_numeric_ids() {
    for _ in 0..1_000 {
        let nid = rid::new_nid();
        let value: u64 = nid.parse().unwrap();
        assert!(value < 1_000_000_000);

        let dashed = rid::dash_nid(&nid);
        assert_eq!(dashed.len(), 11);
        assert_eq!(dashed.replace('-', "").trim_start_matches('0'), nid.trim_start_matches('0'));
    }
    assert!(rid::new_int63_crypto() >= 0);
}

#[test]
fn test_dash_nid() {
    assert_eq!(rid::dash_nid("123456789"), "123-456-789");
    assert_eq!(rid::dash_nid("1234567890"), "123-456-7890");
}

#[test]
fn test_try_variants() {
    assert_eq!(rid::try_new_ridn(20).unwrap().len(), 20);
    assert_eq!(rid::try_new_ridn_crypto(16).unwrap().len(), 16);
    assert!(rid::try_new_int63_crypto().unwrap() >= 0);
    assert!(rid::try_new_nid().unwrap().parse::<u32>().is_ok());
    let signed = rid::try_new_rid20_signed("k").unwrap();
    assert!(rid::valid_rid20_signed(&signed, "k"));
}

#[test]
fn test_shared_fast_generator_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| (0..500).map(|_| rid::new_rid20()).collect::<Vec<_>>()))
        .collect();

    let mut all: Vec<String> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 2_000);
}
