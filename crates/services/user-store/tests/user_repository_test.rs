//! User repository tests against an in-memory SQLite store.

use common::AppError;
use domain::User;

use user_store::test_support::memory_store;
use user_store::{UserRepository, UserStore};

fn user(id: i64, name: &str, email: &str) -> User {
    User::new(name, email, "secret-pass").with_id(id)
}

/// Store holding Alice (id 1) and Alicia (id 2).
async fn seeded_store() -> UserStore {
    let store = memory_store().await;
    store.create(user(1, "Alice", "alice@a.com")).await.unwrap();
    store.create(user(2, "Alicia", "alicia@b.com")).await.unwrap();
    store
}

fn ids(users: &[User]) -> Vec<i64> {
    users.iter().map(|u| u.id).collect()
}

// =============================================================================
// Generic CRUD
// =============================================================================

#[tokio::test]
async fn test_get_returns_created_user() {
    let store = memory_store().await;

    let created = store
        .create(User::new("Bob", "bob@x.com", "hunter22"))
        .await
        .unwrap();
    let fetched = store.get(created.id).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(fetched, created);
    assert_eq!(fetched.password, "hunter22");
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let store = seeded_store().await;

    let result = store.get(99).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_create_duplicate_id_is_database_error() {
    let store = seeded_store().await;

    let result = store.create(user(1, "Mallory", "mallory@m.com")).await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert_eq!(store.get(1).await.unwrap().name, "Alice");
}

#[tokio::test]
async fn test_create_invalid_user_is_rejected_before_store() {
    let store = memory_store().await;

    let result = store.create(User::new("Al", "al@a.com", "secret-pass")).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(store.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_replaces_name_and_keeps_other_fields() {
    let store = seeded_store().await;

    let mut alice = store.get(1).await.unwrap();
    alice.name = "Alice Cooper".to_string();
    store.update(alice.clone()).await.unwrap();

    let fetched = store.get(1).await.unwrap();
    assert_eq!(fetched.name, "Alice Cooper");
    assert_eq!(fetched.email, "alice@a.com");
    assert_eq!(fetched.password, "secret-pass");
    assert_eq!(fetched, alice);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let store = seeded_store().await;

    let result = store.update(user(42, "Ghost", "ghost@g.com")).await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_update_invalid_user_leaves_record() {
    let store = seeded_store().await;

    let result = store.update(user(1, "Alice", "not-an-email")).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(store.get(1).await.unwrap().email, "alice@a.com");
}

#[tokio::test]
async fn test_returned_values_are_detached() {
    let store = seeded_store().await;

    let mut alice = store.get(1).await.unwrap();
    alice.name = "Changed Locally".to_string();

    assert_eq!(store.get(1).await.unwrap().name, "Alice");
}

#[tokio::test]
async fn test_remove_then_get_is_not_found() {
    let store = seeded_store().await;

    store.remove(1).await.unwrap();

    assert!(matches!(store.get(1).await, Err(AppError::NotFound)));
    assert_eq!(ids(&store.get_all().await.unwrap()), vec![2]);
}

#[tokio::test]
async fn test_remove_absent_is_not_found() {
    let store = seeded_store().await;

    store.remove(2).await.unwrap();
    let second = store.remove(2).await;

    assert!(matches!(second, Err(AppError::NotFound)));
    assert_eq!(ids(&store.get_all().await.unwrap()), vec![1]);
}

#[tokio::test]
async fn test_get_all_in_id_order() {
    let store = memory_store().await;
    store.create(user(5, "Eve", "eve@e.com")).await.unwrap();
    store.create(user(3, "Carol", "carol@c.com")).await.unwrap();
    store.create(user(4, "Dave", "dave@d.com")).await.unwrap();

    assert_eq!(ids(&store.get_all().await.unwrap()), vec![3, 4, 5]);
}

// =============================================================================
// Lookup by email
// =============================================================================

#[tokio::test]
async fn test_get_by_email_ignores_case() {
    let store = memory_store().await;
    store.create(user(1, "Bob", "bob@x.com")).await.unwrap();

    let found = store.get_by_email("BOB@X.COM").await.unwrap();

    assert_eq!(found.map(|u| u.id), Some(1));
}

#[tokio::test]
async fn test_get_by_email_is_exact() {
    let store = memory_store().await;
    store.create(user(1, "Bob", "bob@x.com")).await.unwrap();

    assert!(store.get_by_email("bo@x.com").await.unwrap().is_none());
    assert!(store.get_by_email("bob@x.co").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_by_email_duplicates_return_lowest_id() {
    let store = memory_store().await;
    store.create(user(7, "Second", "shared@s.com")).await.unwrap();
    store.create(user(3, "First", "Shared@S.com")).await.unwrap();

    let found = store.get_by_email("shared@s.com").await.unwrap().unwrap();

    assert_eq!(found.id, 3);
    assert_eq!(found.name, "First");
}

// =============================================================================
// Substring search
// =============================================================================

#[tokio::test]
async fn test_search_by_name_returns_matches_in_store_order() {
    let store = seeded_store().await;

    let found = store.search_by_name("ali").await.unwrap();

    assert_eq!(ids(&found), vec![1, 2]);
}

#[tokio::test]
async fn test_search_by_email_ignores_case() {
    let store = memory_store().await;
    store
        .create(user(1, "Alice", "Alice@Example.com"))
        .await
        .unwrap();

    assert_eq!(ids(&store.search_by_email("alice").await.unwrap()), vec![1]);
    assert_eq!(ids(&store.search_by_email("EXAMPLE").await.unwrap()), vec![1]);
}

#[tokio::test]
async fn test_search_by_email_empty_fragment_matches_all() {
    let store = seeded_store().await;

    let found = store.search_by_email("").await.unwrap();

    assert_eq!(ids(&found), vec![1, 2]);
}

#[tokio::test]
async fn test_search_without_match_is_empty() {
    let store = seeded_store().await;

    assert!(store.search_by_email("zzz-nonexistent").await.unwrap().is_empty());
    assert!(store.search_by_name("zzz-nonexistent").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let store = memory_store().await;
    store.create(user(1, "Ann_Lee", "ann@a.com")).await.unwrap();
    store.create(user(2, "AnnXLee", "annx@a.com")).await.unwrap();

    assert_eq!(ids(&store.search_by_name("ann_").await.unwrap()), vec![1]);
    assert!(store.search_by_name("%").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_by_name_folds_non_ascii() {
    let store = memory_store().await;
    store.create(user(1, "ÉLODIE", "elodie@e.com")).await.unwrap();
    store.create(user(2, "Elodie", "elodie2@e.com")).await.unwrap();

    assert_eq!(ids(&store.search_by_name("élo").await.unwrap()), vec![1]);
    assert_eq!(ids(&store.search_by_name("elo").await.unwrap()), vec![2]);
}

#[tokio::test]
async fn test_ascii_search_matches_stored_characters_folding_to_ascii() {
    let store = memory_store().await;
    store
        .create(user(1, "\u{212A}ate Smith", "kate@k.com"))
        .await
        .unwrap();
    store.create(user(2, "İSTANBUL", "ist@t.com")).await.unwrap();

    assert_eq!(ids(&store.search_by_name("kate").await.unwrap()), vec![1]);
    assert_eq!(ids(&store.search_by_name("\u{212A}ATE").await.unwrap()), vec![1]);
    assert_eq!(ids(&store.search_by_name("i").await.unwrap()), vec![1, 2]);
}

#[tokio::test]
async fn test_search_results_agree_with_domain_matching() {
    let store = memory_store().await;
    store
        .create(user(1, "\u{212A}ate Smith", "kate@k.com"))
        .await
        .unwrap();
    store.create(user(2, "İSTANBUL", "ist@t.com")).await.unwrap();
    store.create(user(3, "Kathy", "kathy@k.com")).await.unwrap();

    let all = store.get_all().await.unwrap();
    for fragment in ["kat", "KAT", "i", "stan", "ist@", "@k.com"] {
        let by_name: Vec<i64> = all
            .iter()
            .filter(|u| u.name_contains(fragment))
            .map(|u| u.id)
            .collect();
        let by_email: Vec<i64> = all
            .iter()
            .filter(|u| u.email_contains(fragment))
            .map(|u| u.id)
            .collect();

        assert_eq!(ids(&store.search_by_name(fragment).await.unwrap()), by_name);
        assert_eq!(ids(&store.search_by_email(fragment).await.unwrap()), by_email);
    }
}

#[tokio::test]
async fn test_concurrent_reads_share_store() {
    let store = seeded_store().await;

    let (all, by_name, by_email) = tokio::join!(
        store.get_all(),
        store.search_by_name("alicia"),
        store.get_by_email("ALICE@A.COM"),
    );

    assert_eq!(ids(&all.unwrap()), vec![1, 2]);
    assert_eq!(ids(&by_name.unwrap()), vec![2]);
    assert_eq!(by_email.unwrap().map(|u| u.id), Some(1));
}
