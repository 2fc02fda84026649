use anyhow::Result;
use bellory_admin::{
    clients::{
        session::{SessionStore, TOKEN_KEY, USER_KEY},
        storage::LocalStorage,
        theme::{THEME_KEY, ThemeStore},
    },
    models::session::{Session, Theme, User},
};
use tempfile::TempDir;

fn admin_session() -> Session {
    Session {
        token: "jwt-token".to_string(),
        user: User {
            id: 1,
            full_name: "Administrador Bellory".to_string(),
            email: "admin@bellory.com.br".to_string(),
            role: "ROLE_SUPERADMIN".to_string(),
        },
    }
}

/// Test: Storage round-trips values and treats missing keys as empty
#[tokio::test]
async fn test_local_storage_items() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::open(dir.path().join("nested"))?;

    assert_eq!(storage.get_item("missing")?, None);

    storage.set_item("bellory-admin-theme", "dark")?;
    assert_eq!(storage.get_item("bellory-admin-theme")?.as_deref(), Some("dark"));

    storage.remove_item("bellory-admin-theme")?;
    storage.remove_item("bellory-admin-theme")?;
    assert_eq!(storage.get_item("bellory-admin-theme")?, None);

    Ok(())
}

/// Test: Keys that could escape the storage directory are rejected
#[tokio::test]
async fn test_local_storage_rejects_bad_keys() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::open(dir.path())?;

    for key in ["", "..", "../etc", "a/b", "chave com espaço"] {
        assert!(storage.set_item(key, "x").is_err(), "Key {:?} should be rejected", key);
    }

    Ok(())
}

/// Test: A stored session survives a restart
#[tokio::test]
async fn test_session_persists() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::open(dir.path())?;

    let store = SessionStore::load(storage.clone())?;
    assert!(!store.is_authenticated());

    store.store(admin_session())?;
    assert_eq!(store.token().as_deref(), Some("jwt-token"));

    let restored = SessionStore::load(storage.clone())?;
    assert!(restored.is_authenticated());
    assert_eq!(restored.session(), Some(admin_session()));
    assert_eq!(
        restored.current_user().map(|u| u.full_name),
        Some("Administrador Bellory".to_string())
    );

    Ok(())
}

/// Test: Clearing the session removes both keys and is visible to clones
#[tokio::test]
async fn test_session_clear_shared_between_clones() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::open(dir.path())?;

    let store = SessionStore::load(storage.clone())?;
    store.store(admin_session())?;

    let clone = store.clone();
    clone.clear()?;

    assert!(!store.is_authenticated(), "Clones share the session");
    assert_eq!(storage.get_item(TOKEN_KEY)?, None);
    assert_eq!(storage.get_item(USER_KEY)?, None);

    Ok(())
}

/// Test: A corrupt stored user clears the session on load
#[tokio::test]
async fn test_corrupt_user_clears_session() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::open(dir.path())?;
    storage.set_item(TOKEN_KEY, "jwt-token")?;
    storage.set_item(USER_KEY, "{not json")?;

    let store = SessionStore::load(storage.clone())?;

    assert!(!store.is_authenticated());
    assert_eq!(storage.get_item(TOKEN_KEY)?, None, "Token is removed too");
    assert_eq!(storage.get_item(USER_KEY)?, None);

    Ok(())
}

/// Test: A token without a user is not a session
#[tokio::test]
async fn test_token_without_user_is_ignored() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::open(dir.path())?;
    storage.set_item(TOKEN_KEY, "jwt-token")?;

    let store = SessionStore::load(storage)?;

    assert!(!store.is_authenticated());
    assert_eq!(store.token(), None);

    Ok(())
}

/// Test: Theme comes from storage first, then the OS preference
#[tokio::test]
async fn test_theme_resolution() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::open(dir.path())?;

    assert_eq!(ThemeStore::load(storage.clone(), false)?.theme(), Theme::Light);
    assert_eq!(ThemeStore::load(storage.clone(), true)?.theme(), Theme::Dark);

    storage.set_item(THEME_KEY, "light")?;
    assert_eq!(
        ThemeStore::load(storage.clone(), true)?.theme(),
        Theme::Light,
        "Stored choice wins over the preference"
    );

    storage.set_item(THEME_KEY, "sepia")?;
    assert_eq!(
        ThemeStore::load(storage.clone(), true)?.theme(),
        Theme::Dark,
        "Unknown stored values are ignored"
    );

    Ok(())
}

/// Test: Toggling the theme persists the new value
#[tokio::test]
async fn test_theme_toggle_persists() -> Result<()> {
    let dir = TempDir::new()?;
    let storage = LocalStorage::open(dir.path())?;

    let mut theme = ThemeStore::load(storage.clone(), false)?;
    assert_eq!(theme.toggle()?, Theme::Dark);
    assert_eq!(storage.get_item(THEME_KEY)?.as_deref(), Some("dark"));

    let reloaded = ThemeStore::load(storage, false)?;
    assert_eq!(reloaded.theme(), Theme::Dark);

    Ok(())
}
