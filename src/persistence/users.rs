//! Users in the persistence service

use async_trait::async_trait;
use tonic::transport::Channel;

use super::proto::{
    user_service_client::UserServiceClient, CreateUserRequest, DtoUser, GetUserByUsernameRequest,
};
use crate::{
    error::AppResult,
    models::{Role, User},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Persist a user. `None` when the backend refused it.
    async fn create_user(&self, user: User) -> AppResult<Option<User>>;
}

#[derive(Clone)]
pub struct GrpcUserStore {
    client: UserServiceClient<Channel>,
}

impl GrpcUserStore {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: UserServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl UserStore for GrpcUserStore {
    async fn user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        tracing::debug!(username, "Sending gRPC request to get user");
        let response = self
            .client
            .clone()
            .get_user_by_username(GetUserByUsernameRequest {
                username: username.to_string(),
            })
            .await?
            .into_inner();

        Ok(response
            .user
            .filter(|_| response.success)
            .map(User::from))
    }

    async fn create_user(&self, user: User) -> AppResult<Option<User>> {
        tracing::debug!(username = %user.username, "Sending gRPC request to create user");
        let response = self
            .client
            .clone()
            .create_user(CreateUserRequest {
                user: Some(user.into()),
            })
            .await?
            .into_inner();

        if !response.success {
            tracing::warn!("Backend did not create user: {}", response.message);
        }
        Ok(response
            .user
            .filter(|_| response.success)
            .map(User::from))
    }
}

impl From<DtoUser> for User {
    fn from(dto: DtoUser) -> Self {
        User {
            name: dto.name,
            username: dto.username,
            password: dto.password,
            role: Role::from(dto.role.as_str()),
            phone: dto.phone_number,
            email: dto.email,
        }
    }
}

impl From<User> for DtoUser {
    fn from(user: User) -> Self {
        DtoUser {
            username: user.username,
            password: user.password,
            role: user.role.to_string(),
            name: user.name,
            phone_number: user.phone,
            email: user.email,
        }
    }
}
