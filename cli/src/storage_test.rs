use std::fs;
use std::path::PathBuf;

use portal::{KeyValueStorage, Role, TokenStore, User};

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tutorhub-cli-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir.join("nested").join("session.json")
}

#[test]
fn missing_file_reads_empty() {
    let storage = FileStorage::new(scratch("missing"));
    assert_eq!(storage.get("tutorhub.token"), None);
}

#[test]
fn set_creates_parent_directories_and_persists() {
    let path = scratch("persist");
    let storage = FileStorage::new(&path);
    storage.set("tutorhub.token", "abc");
    assert!(path.exists());
    assert_eq!(FileStorage::new(&path).get("tutorhub.token").as_deref(), Some("abc"));
}

#[test]
fn removing_last_key_deletes_file() {
    let path = scratch("remove");
    let storage = FileStorage::new(&path);
    storage.set("k", "v");
    storage.remove("k");
    assert!(!path.exists());
    storage.remove("k");
}

#[test]
fn corrupt_file_reads_empty_and_is_replaced() {
    let path = scratch("corrupt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{not json").unwrap();
    let storage = FileStorage::new(&path);
    assert_eq!(storage.get("k"), None);
    storage.set("k", "v");
    assert_eq!(storage.get("k").as_deref(), Some("v"));
}

#[test]
fn token_store_round_trips_through_file() {
    let path = scratch("store");
    let store = TokenStore::new(FileStorage::new(&path));
    let user = User {
        id: "u1".to_owned(),
        email: "t@example.com".to_owned(),
        full_name: "Tess".to_owned(),
        role: Role::Tutor,
        avatar_url: None,
    };
    store.save("abc", &user);

    let reloaded = TokenStore::new(FileStorage::new(&path)).load().unwrap();
    assert_eq!(reloaded.token, "abc");
    assert_eq!(reloaded.user, user);

    store.clear();
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn state_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let path = scratch("perms");
    FileStorage::new(&path).set("k", "v");
    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
