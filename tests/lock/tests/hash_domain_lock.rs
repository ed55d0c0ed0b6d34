//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Domain set has the expected count (catches forgotten additions to `ALL_DOMAINS`)
//! 2. All domain byte strings are unique
//! 3. All domains are null-terminated and follow `CUBESTAR::*::V1\0`
//! 4. `canonical_hash` is plain SHA-256 over `domain || data`
//! 5. No raw `CUBESTAR::` domain literals in production source outside `hash.rs`

use std::collections::BTreeSet;

use cubestar_kernel::carrier::cube_state::CubeStateV1;
use cubestar_kernel::proof::hash::{canonical_hash, ALL_DOMAINS, DOMAIN_STATE_FINGERPRINT};
use cubestar_kernel::proof::replay::state_fingerprint;
use sha2::{Digest, Sha256};

#[test]
fn domain_set_count() {
    assert_eq!(
        ALL_DOMAINS.len(),
        3,
        "expected 3 domains; if you added a new domain, update this count"
    );
}

#[test]
fn domains_are_unique() {
    let mut seen = BTreeSet::new();
    for domain in ALL_DOMAINS {
        assert!(
            seen.insert(*domain),
            "duplicate domain bytes: {}",
            String::from_utf8_lossy(domain)
        );
    }
}

#[test]
fn domains_follow_naming_convention() {
    for domain in ALL_DOMAINS {
        let text = String::from_utf8_lossy(domain);
        assert!(domain.starts_with(b"CUBESTAR::"), "{text}");
        assert!(domain.ends_with(b"::V1\0"), "{text} does not end with ::V1\\0");
        assert_eq!(
            domain.iter().filter(|&&b| b == 0).count(),
            1,
            "{text} has an interior NUL"
        );
    }
}

#[test]
fn canonical_hash_matches_independent_sha256() {
    let state = CubeStateV1::solved(3);
    let data = state.identity_bytes();

    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_STATE_FINGERPRINT);
    hasher.update(&data);
    let expected = format!("sha256:{}", hex::encode(hasher.finalize()));

    assert_eq!(canonical_hash(DOMAIN_STATE_FINGERPRINT, &data).as_str(), expected);
    assert_eq!(state_fingerprint(&state).as_str(), expected);
}

/// Scan kernel/, search/, harness/ source for `b"CUBESTAR::` literals.
/// The only file allowed to contain them is `hash.rs`.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let production_dirs = [
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../kernel/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../harness/src"),
    ];

    let pattern = "b\"CUBESTAR::";
    let authority_file = "hash.rs";
    let mut violations = Vec::new();
    let mut scanned = 0usize;

    for dir in &production_dirs {
        scanned += scan_dir_for_pattern(dir, pattern, authority_file, &mut violations);
    }

    assert!(scanned > 0, "no production sources found");
    assert!(
        violations.is_empty(),
        "raw CUBESTAR:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

/// Returns the number of `.rs` files scanned.
fn scan_dir_for_pattern(
    dir: &str,
    pattern: &str,
    authority_file: &str,
    violations: &mut Vec<String>,
) -> usize {
    let dir_path = std::path::Path::new(dir);
    if !dir_path.exists() {
        return 0;
    }
    let mut scanned = 0;
    for path in walkdir(dir_path) {
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
            continue;
        }
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };
        scanned += 1;

        // Skip #[cfg(test)] module blocks via brace-depth tracking.
        let mut brace_depth: usize = 0;
        let mut skip_depth: Option<usize> = None;
        let mut cfg_test_pending = false;

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed.contains("#[cfg(test)]") {
                cfg_test_pending = true;
                continue;
            }

            let opens = line.chars().filter(|&c| c == '{').count();
            let closes = line.chars().filter(|&c| c == '}').count();

            if cfg_test_pending && opens > 0 {
                skip_depth = Some(brace_depth);
                cfg_test_pending = false;
            }

            brace_depth = brace_depth.saturating_add(opens);
            brace_depth = brace_depth.saturating_sub(closes);

            if let Some(depth) = skip_depth {
                if brace_depth <= depth {
                    skip_depth = None;
                }
                continue;
            }

            if trimmed.starts_with("//") {
                continue;
            }

            if trimmed.contains(pattern) {
                violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
            }
        }
    }
    scanned
}

/// Simple recursive directory walker.
fn walkdir(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walkdir(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}
