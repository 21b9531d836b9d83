use crate::UserRepository;
use crate::tests::new_user;

use std::sync::Arc;

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_missing_file_when_open_then_created_as_empty_array() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data").join("authUsers.json");

    // When
    let repo = UserRepository::open(&path).await.unwrap();

    // Then
    assert_that!(std::fs::read_to_string(&path).unwrap().as_str(), eq("[]"));
    assert_that!(repo.count().await, eq(0));
}

#[tokio::test]
async fn given_new_user_when_register_then_persisted_with_millisecond_id() {
    // Given
    let temp = TempDir::new().unwrap();
    let repo = UserRepository::open(temp.path().join("users.json"))
        .await
        .unwrap();

    // When
    let user = repo.register(new_user("asha", "9000000001")).await.unwrap();

    // Then
    assert_that!(user.id.parse::<i64>().is_ok(), eq(true));
    assert_that!(user.email.as_str(), eq(""));
    let stored = repo.all().await;
    assert_that!(stored.len(), eq(1));
    assert_that!(stored[0], eq(&user));
}

#[tokio::test]
async fn given_duplicate_usernames_when_find_first_then_file_order_wins() {
    // Given
    let temp = TempDir::new().unwrap();
    let repo = UserRepository::open(temp.path().join("users.json"))
        .await
        .unwrap();
    let first = repo.register(new_user("asha", "111")).await.unwrap();
    repo.register(new_user("asha", "222")).await.unwrap();

    // When
    let found = repo.find_first(Some("asha"), None).await;

    // Then
    assert_that!(found.map(|u| u.phone), some(eq(&first.phone)));
}

#[tokio::test]
async fn given_phone_only_when_find_first_then_matched_by_phone() {
    // Given
    let temp = TempDir::new().unwrap();
    let repo = UserRepository::open(temp.path().join("users.json"))
        .await
        .unwrap();
    repo.register(new_user("ravi", "555")).await.unwrap();

    // When
    let found = repo.find_first(None, Some("555")).await;

    // Then
    assert_that!(found.map(|u| u.username), some(eq("ravi")));
}

#[tokio::test]
async fn given_empty_lookup_keys_when_find_first_then_none() {
    // Given
    let temp = TempDir::new().unwrap();
    let repo = UserRepository::open(temp.path().join("users.json"))
        .await
        .unwrap();
    repo.register(new_user("ravi", "555")).await.unwrap();

    // When
    let found = repo.find_first(Some(""), None).await;

    // Then
    assert_that!(found, none());
}

#[tokio::test]
async fn given_malformed_file_when_all_then_empty() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("users.json");
    std::fs::write(&path, "{not json").unwrap();
    let repo = UserRepository::open(&path).await.unwrap();

    // When
    let users = repo.all().await;

    // Then
    assert_that!(users.is_empty(), eq(true));
}

#[tokio::test]
async fn given_malformed_file_when_register_then_file_rewritten_with_new_user() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("users.json");
    std::fs::write(&path, "{not json").unwrap();
    let repo = UserRepository::open(&path).await.unwrap();

    // When
    repo.register(new_user("mira", "777")).await.unwrap();

    // Then
    assert_that!(repo.count().await, eq(1));
}

#[tokio::test]
async fn given_register_when_done_then_no_temp_file_left() {
    // Given
    let temp = TempDir::new().unwrap();
    let repo = UserRepository::open(temp.path().join("users.json"))
        .await
        .unwrap();

    // When
    repo.register(new_user("neel", "888")).await.unwrap();

    // Then
    let leftovers = std::fs::read_dir(temp.path()).unwrap().count();
    assert_that!(leftovers, eq(1));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_concurrent_registrations_when_all_finish_then_none_lost() {
    // Given
    let temp = TempDir::new().unwrap();
    let repo = Arc::new(
        UserRepository::open(temp.path().join("users.json"))
            .await
            .unwrap(),
    );

    // When
    let handles: Vec<_> = (0..25)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.register(new_user(&format!("user{i}"), &format!("{i}")))
                    .await
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    // Then
    assert_that!(repo.count().await, eq(25));
}
