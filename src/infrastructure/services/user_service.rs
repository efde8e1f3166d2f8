//! User service - CRUD operations over the immunisation roster

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{
    parse_status, validate_email, validate_first_name, validate_last_name, DomainError, NewUser,
    User, UserRepository,
};

/// Request to register a new user
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
    pub last_immunisation_date: Option<DateTime<Utc>>,
}

/// Request to update an existing user
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
    pub last_immunisation_date: Option<DateTime<Utc>>,
}

/// User service for roster CRUD operations
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all users, ordered by last name then first name
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list_all().await
    }

    /// Get a user by id, returning an error if not found
    pub async fn get(&self, id: i32) -> Result<User, DomainError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User with id {} not found", id)))
    }

    /// Register a new user
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        validate_first_name(&request.first_name)?;
        validate_last_name(&request.last_name)?;
        validate_email(&request.email)?;
        let status = parse_status(&request.status)?;

        let new_user = NewUser {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            status,
            last_immunisation_date: request.last_immunisation_date,
        };

        self.repository.create(new_user).await
    }

    /// Update an existing user
    pub async fn update(&self, id: i32, request: UpdateUserRequest) -> Result<User, DomainError> {
        let mut user = self.get(id).await?;

        if let Some(first_name) = request.first_name {
            validate_first_name(&first_name)?;
            user.set_first_name(first_name);
        }

        if let Some(last_name) = request.last_name {
            validate_last_name(&last_name)?;
            user.set_last_name(last_name);
        }

        if let Some(email) = request.email {
            validate_email(&email)?;
            user.set_email(email);
        }

        if let Some(status) = request.status {
            user.set_status(parse_status(&status)?);
        }

        if let Some(date) = request.last_immunisation_date {
            user.set_last_immunisation_date(Some(date));
        }

        self.repository.update(&user).await
    }

    /// Delete a user by id, returning an error if not found
    pub async fn delete(&self, id: i32) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(format!(
                "User with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
