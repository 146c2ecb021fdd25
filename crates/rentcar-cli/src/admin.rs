//! ADMIN account creation. The API only ever registers customers.

use anyhow::Context;
use rentcar_core::{ApplicationError, RoleName, hash_password};
use rentcar_db::UserRepository;
use rentcar_models::{NewUser, RegisterRequest, User};
use validator::Validate;

pub async fn create_admin(
    users: &dyn UserRepository,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<User> {
    let request = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    request.validate().map_err(ApplicationError::from)?;

    let password = hash_password(&request.password)?;

    let user = users
        .create(NewUser {
            name: request.name,
            email: request.email,
            password,
            role: RoleName::Admin,
        })
        .await
        .with_context(|| format!("Could not create admin {}", email))?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentcar_db::InMemoryUserRepository;

    #[tokio::test]
    async fn test_create_admin_has_admin_role() {
        let users = InMemoryUserRepository::new();
        let user = create_admin(&users, "Hardy123", "hardy@gmail.com", "123456")
            .await
            .unwrap();

        assert_eq!(user.role().unwrap(), RoleName::Admin);
        assert_ne!(user.password, "123456");
    }

    #[tokio::test]
    async fn test_duplicate_admin_email_fails() {
        let users = InMemoryUserRepository::new();
        create_admin(&users, "Hardy123", "hardy@gmail.com", "123456")
            .await
            .unwrap();

        let err = create_admin(&users, "Other", "hardy@gmail.com", "654321")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("hardy@gmail.com"));
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let users = InMemoryUserRepository::new();
        assert!(
            create_admin(&users, "Hardy123", "not-an-email", "123456")
                .await
                .is_err()
        );
    }
}
