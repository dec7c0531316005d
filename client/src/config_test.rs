use super::*;

#[test]
fn client_config_uses_build_time_base_url() {
    let config = client_config();
    assert_eq!(config.url("/categories"), format!("{}/categories", api_base_url().trim().trim_end_matches('/')));
}

#[test]
fn api_base_url_is_never_blank() {
    assert!(!api_base_url().trim().is_empty());
}
