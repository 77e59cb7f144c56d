// Property tests for mapping environment variable names to config paths.

use cfgkit::infrastructure::config::env_var_path;
use proptest::prelude::*;

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][A-Z0-9]{0,7}", 1..5)
}

proptest! {
    #[test]
    fn env_name_segments_become_path_segments(segs in segments(), delim in prop::sample::select(vec![".", "/", "::", "->"])) {
        let name = segs.join("_");
        let path = env_var_path(&name, delim);

        let expected: Vec<String> = segs.iter().map(|s| s.to_lowercase()).collect();
        let actual: Vec<&str> = path.split(delim).collect();
        prop_assert_eq!(actual, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn mapped_path_is_lowercase_without_underscores(name in "[A-Z0-9_]{1,24}") {
        let path = env_var_path(&name, ".");
        prop_assert!(!path.contains('_'));
        prop_assert_eq!(path.to_lowercase(), path.clone());
        prop_assert_eq!(path.len(), name.len());
    }
}
