use portal::{Role, TokenStore, User};

use super::*;

#[test]
fn server_render_storage_reads_empty() {
    let storage = BrowserStorage;
    storage.set("tutorhub.token", "abc");
    assert_eq!(storage.get("tutorhub.token"), None);
}

#[test]
fn clearing_through_token_store_is_quiet_outside_the_browser() {
    let store = TokenStore::new(BrowserStorage);
    let user = User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        full_name: "Ada".to_owned(),
        role: Role::Student,
        avatar_url: None,
    };
    store.save("abc", &user);
    store.clear();
    assert!(store.load().is_none());
}
