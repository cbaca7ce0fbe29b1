use tubeapi_config::config::{self, has_errors, key_preview, review};
use tubeapi_config::TubeApiConfig;

#[test]
fn compiled_settings_match_constants() {
    let config = TubeApiConfig::compiled();
    assert_eq!(config.api_url(), config::API_URL);
    assert_eq!(config.api_key(), config::API_KEY);
}

#[test]
fn banner_matches_loaded_settings() {
    let mut out = Vec::new();
    let config = TubeApiConfig::load_into(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("TubeAPI Configuration Loaded"));
    assert!(lines[1].ends_with("http://localhost:5000/api"));
    assert!(lines[2].ends_with("sk-admin-t..."));
    assert!(!text.contains(config.api_key()));
}

#[test]
fn repeated_loads_print_the_same_banner() {
    let outputs: Vec<Vec<u8>> = (0..3)
        .map(|_| {
            let mut out = Vec::new();
            TubeApiConfig::load_into(&mut out).unwrap();
            out
        })
        .collect();

    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn preview_is_prefix_plus_ellipsis() {
    assert_eq!(key_preview(config::API_KEY), "sk-admin-t...");
    assert_eq!(key_preview("short"), "short...");
}

#[test]
fn compiled_settings_pass_review() {
    assert!(!has_errors(&review(&TubeApiConfig::compiled())));
}
