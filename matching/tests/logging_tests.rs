//! Logging set-up from configuration. Kept in its own test binary because the
//! global subscriber can only be installed once per process.

use idauth_matching::{BioAuthType, MatchingConfig};
use idauth_nullables::NullIdInfoFetcher;
use idauth_types::{AuthRequest, BiometricSample};

#[test]
fn config_installs_subscriber_and_resolution_still_works() {
    let config = MatchingConfig::from_toml_str("log_level = \"trace\"").expect("parses");
    config.init_logging();

    let req = AuthRequest::new("txn").with_sample(BiometricSample::new("FACE", vec![1]));
    let props = BioAuthType::FaceImg
        .match_properties(&req, &NullIdInfoFetcher::default(), "eng")
        .expect("resolves");
    assert_eq!(props.len(), 1);
}
