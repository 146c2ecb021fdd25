use rentcar_auth::TokenService;
use rentcar_core::{ApplicationError, RoleName, hash_password, verify_password};
use rentcar_db::UserRepository;
use rentcar_models::{AccessTokenResponse, LoginRequest, NewUser, RegisterRequest, User};
use tracing::{info, instrument};

use crate::metrics::{
    track_token_issued, track_user_login_failure, track_user_login_success, track_user_registered,
};

pub struct AuthService;

impl AuthService {
    /// Creates a CUSTOMER account and signs a token for it.
    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn register(
        users: &dyn UserRepository,
        tokens: &TokenService,
        dto: RegisterRequest,
    ) -> Result<AccessTokenResponse, ApplicationError> {
        if users.find_by_email(&dto.email).await?.is_some() {
            return Err(ApplicationError::EmailAlreadyTaken);
        }

        let password = hash_password(&dto.password)?;

        // The store rejects a concurrent duplicate with EmailAlreadyTaken too.
        let user = users
            .create(NewUser {
                name: dto.name,
                email: dto.email,
                password,
                role: RoleName::Customer,
            })
            .await?;

        track_user_registered();
        info!(user_id = user.id, "User registered");

        Self::issue_for(tokens, &user)
    }

    #[instrument(skip_all, fields(email = %dto.email))]
    pub async fn login(
        users: &dyn UserRepository,
        tokens: &TokenService,
        dto: LoginRequest,
    ) -> Result<AccessTokenResponse, ApplicationError> {
        let Some(user) = users.find_by_email(&dto.email).await? else {
            track_user_login_failure("email_not_registered");
            return Err(ApplicationError::email_not_registered(dto.email));
        };

        if !verify_password(&dto.password, &user.password)? {
            track_user_login_failure("wrong_password");
            return Err(ApplicationError::WrongPassword);
        }

        let response = Self::issue_for(tokens, &user)?;
        track_user_login_success(user.role()?.as_str());

        Ok(response)
    }

    fn issue_for(tokens: &TokenService, user: &User) -> Result<AccessTokenResponse, ApplicationError> {
        let access_token = tokens.issue(&user.identity()?)?;
        track_token_issued();

        Ok(AccessTokenResponse { access_token })
    }
}
