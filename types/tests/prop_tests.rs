use proptest::prelude::*;

use idauth_types::{AuthRequest, BioType, BiometricSample};

fn known_tag(s: &str) -> bool {
    ["FMR", "FIR", "IIR", "FACE"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(s.trim()))
}

proptest! {
    /// Arbitrary text parses to a modality exactly when it is a known tag.
    #[test]
    fn from_tag_accepts_only_known_tags(s in "\\PC{0,8}") {
        prop_assert_eq!(BioType::from_tag(&s).is_some(), known_tag(&s));
    }

    /// Case changes never alter which modality a tag names.
    #[test]
    fn from_tag_is_case_insensitive(idx in 0usize..4, upper in proptest::bool::ANY) {
        let t = BioType::ALL[idx];
        let tag = if upper { t.tag().to_uppercase() } else { t.tag().to_lowercase() };
        prop_assert_eq!(BioType::from_tag(&tag), Some(t));
    }

    /// `modalities` is exactly the set of parseable tags in the request.
    #[test]
    fn modalities_match_parseable_tags(
        tags in prop::collection::vec("(FMR|FIR|IIR|FACE|fmr|VOICE|DNA)", 0..12)
    ) {
        let req = tags.iter().fold(AuthRequest::new("txn"), |r, t| {
            r.with_sample(BiometricSample::new(t.clone(), Vec::new()))
        });
        let expected: std::collections::BTreeSet<BioType> =
            tags.iter().filter_map(|t| BioType::from_tag(t)).collect();
        prop_assert_eq!(req.modalities(), expected);
        prop_assert_eq!(req.biometrics().len(), tags.len());
    }
}

#[test]
fn request_deserializes_from_camel_case_json() {
    let json = r#"{
        "transactionId": "1234567890",
        "individualId": "9830872690593682",
        "requestTime": 1700000000,
        "biometrics": [
            { "bioType": "FMR", "bioSubType": "Left Thumb", "bioValue": [1, 2] },
            { "bioType": "IIR", "hash": "abc" }
        ]
    }"#;
    let req: AuthRequest = serde_json::from_str(json).expect("valid request json");
    assert_eq!(req.transaction_id(), "1234567890");
    assert_eq!(req.biometrics().len(), 2);
    assert_eq!(req.biometrics()[0].sub_type(), Some("Left Thumb"));
    assert_eq!(req.biometrics()[1].modality(), Some(BioType::IrisImage));
    assert_eq!(req.biometrics()[1].hash(), "abc");
}
