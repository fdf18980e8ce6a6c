//! Authentication and registration service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::{AuthConfig, Branch},
    error::{AppError, AppResult},
    models::{user::RegisterRequest, Role, User, UserClaims},
    persistence::Persistence,
    services::validation,
};

#[derive(Clone)]
pub struct AuthService {
    persistence: Persistence,
    config: AuthConfig,
    branch: Branch,
}

impl AuthService {
    pub fn new(persistence: Persistence, config: AuthConfig, branch: Branch) -> Self {
        Self {
            persistence,
            config,
            branch,
        }
    }

    /// Authenticate by username and return a JWT with the user
    pub async fn login(&self, username: &str, password: &str) -> AppResult<(String, User)> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AppError::BusinessRule("Username and Password must be provided".into()));
        }

        let user = self
            .get_user(username)
            .await?
            .ok_or_else(|| AppError::Authentication("User not found".into()))?;

        if !verify_password(&user.password, password)? {
            tracing::warn!(username, "Login failed: wrong password");
            return Err(AppError::Authentication("Wrong password".into()));
        }

        let token = self.create_token_for_user(&user)?;
        tracing::info!(username = %user.username, role = %user.role, "User logged in");
        Ok((token, user))
    }

    /// Register a new reader account
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request.validate()?;
        validation::validate_registration(self.branch, &request)?;

        if self.username_exists(&request.username).await? {
            return Err(match self.branch {
                Branch::Aarhus => AppError::BusinessRule("Username already exists".into()),
                Branch::Cph => AppError::InvalidInput("Username already in use".into()),
            });
        }

        let user = User {
            name: request.full_name,
            username: request.username,
            password: hash_password(&request.password)?,
            role: Role::Reader,
            phone: request.phone_number,
            email: request.email,
        };

        let created = match self.persistence.users.create_user(user).await {
            Ok(Some(created)) => created,
            Ok(None) => return Err(AppError::Grpc("Failed to create user".into())),
            Err(e) => {
                tracing::error!("User creation failed: {}", e);
                return Err(AppError::Grpc("Failed to create user".into()));
            }
        };

        tracing::info!(username = %created.username, branch = %self.branch, "User registered");
        Ok(created)
    }

    pub async fn get_user(&self, username: &str) -> AppResult<Option<User>> {
        self.persistence.users.user_by_username(username).await
    }

    pub async fn username_exists(&self, username: &str) -> AppResult<bool> {
        Ok(self.get_user(username).await?.is_some())
    }

    fn create_token_for_user(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = UserClaims {
            sub: user.username.clone(),
            role: user.role,
            iat: now,
            exp: now + (self.config.jwt_expiration_minutes as i64 * 60),
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
