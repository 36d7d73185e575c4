//! Registry ordering and capability tests

use hashtab_core::hashing::AlgorithmRegistry;

#[test]
fn legacy_algorithms_lead_in_fixed_order() {
    let descriptors = AlgorithmRegistry::global().descriptors();
    assert!(descriptors.len() >= 2);
    assert_eq!(descriptors[0].id(), "MD5");
    assert_eq!(descriptors[1].id(), "SHA1");
}

#[test]
fn sha_family_follows_sorted_and_deduplicated() {
    let descriptors = AlgorithmRegistry::global().descriptors();
    let ids: Vec<&str> = descriptors.iter().map(|d| d.id()).collect();
    assert_eq!(ids, ["MD5", "SHA1", "SHA224", "SHA256", "SHA384", "SHA512"]);
}

#[test]
fn descriptors_resolve_to_registered_algorithms() {
    let registry = AlgorithmRegistry::global();
    for descriptor in registry.descriptors() {
        assert!(
            registry.get(descriptor.internal_name()).is_some(),
            "{} not resolvable",
            descriptor.id()
        );
    }
}

#[test]
fn hex_lengths_match_the_algorithms() {
    let expected = [
        ("MD5", 32),
        ("SHA1", 40),
        ("SHA224", 56),
        ("SHA256", 64),
        ("SHA384", 96),
        ("SHA512", 128),
    ];
    let descriptors = AlgorithmRegistry::global().descriptors();
    for (id, len) in expected {
        let descriptor = descriptors.iter().find(|d| d.id() == id).unwrap();
        assert_eq!(descriptor.digest_hex_length().unwrap(), len, "{id}");
    }
}

#[test]
fn capability_list_is_sorted() {
    let names = AlgorithmRegistry::global().list();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert!(names.iter().any(|n| n == "md5"));
    assert!(names.iter().any(|n| n == "sha1"));
}
