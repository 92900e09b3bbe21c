use ladle_recipe::error::RecipeServiceError;
use ladle_recipe::usecase::user::{CreateUserInput, CreateUserUseCase, GetUserUseCase};

use crate::helpers::{MockUserRepo, TEST_PASSWORD, test_user};

#[tokio::test]
async fn should_create_user_and_fetch_it_back() {
    let repo = MockUserRepo::default();
    let users = repo.users.clone();

    let created = CreateUserUseCase { repo }
        .execute(CreateUserInput {
            email: "Cook@Example.COM".into(),
            password: TEST_PASSWORD.into(),
            superuser: false,
        })
        .await
        .unwrap();

    assert_eq!(created.email, "cook@example.com");
    assert!(!created.is_staff);
    assert!(!created.is_superuser);

    let fetched = GetUserUseCase {
        repo: MockUserRepo { users },
    }
    .execute(created.id)
    .await
    .unwrap();
    assert_eq!(fetched.email, created.email);
}

#[tokio::test]
async fn should_reject_duplicate_email_on_signup() {
    let repo = MockUserRepo::new(vec![test_user("cook@example.com")]);

    let result = CreateUserUseCase { repo }
        .execute(CreateUserInput {
            email: "COOK@example.com".into(),
            password: TEST_PASSWORD.into(),
            superuser: false,
        })
        .await;

    assert!(matches!(
        result,
        Err(RecipeServiceError::EmailAlreadyExists)
    ));
}

#[tokio::test]
async fn should_reject_malformed_email() {
    let result = CreateUserUseCase {
        repo: MockUserRepo::default(),
    }
    .execute(CreateUserInput {
        email: "not-an-email".into(),
        password: TEST_PASSWORD.into(),
        superuser: false,
    })
    .await;

    assert!(matches!(result, Err(RecipeServiceError::InvalidEmail)));
}
