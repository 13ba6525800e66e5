use uuid::Uuid;

use crate::domain::entities::user::{User, UserRole};
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

fn test_user(username: &str) -> User {
    User::new(username.to_string(), "hash".to_string(), UserRole::User)
}

#[tokio::test]
async fn test_create_and_find_by_username() {
    let repo = MockUserRepository::new();
    let user = repo.create(test_user("alice")).await.unwrap();

    let found = repo.find_by_username("alice").await.unwrap();
    assert_eq!(found, Some(user));

    assert!(repo.find_by_username("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = MockUserRepository::new();
    let user = repo.create(test_user("alice")).await.unwrap();

    let found = repo.find_by_id(user.id).await.unwrap();
    assert_eq!(found, Some(user));

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let repo = MockUserRepository::new();
    repo.create(test_user("alice")).await.unwrap();

    let result = repo.create(test_user("alice")).await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_set_role_is_visible_on_next_lookup() {
    let repo = MockUserRepository::new();
    let user = repo.create(test_user("alice")).await.unwrap();
    assert_eq!(user.role, UserRole::User);

    repo.set_role(user.id, UserRole::Admin).await;

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.role, UserRole::Admin);
}
