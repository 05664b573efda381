//
//  geoserver-rest
//  api/security.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! User and role management of the default user group service.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::{Connection, Expectation};
use super::common::ApiError;

/// Response of `security/usergroup/users.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserList {
    /// Every user of the service.
    #[serde(default)]
    pub users: Vec<User>,
}

/// A user of the default user group service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Login name.
    pub user_name: String,
    /// Whether the user may log in.
    #[serde(default)]
    pub enabled: bool,
}

/// Client for the `security` resource family.
#[derive(Debug, Clone)]
pub struct SecurityClient {
    connection: Arc<Connection>,
}

impl SecurityClient {
    /// Creates a new security client over a shared connection.
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Lists every user.
    pub async fn get_all_users(&self) -> Result<UserList, ApiError> {
        self.connection.get_json("security/usergroup/users.json").await
    }

    /// Creates an enabled user.
    ///
    /// GeoServer answers 404 or 409 when the name is taken; both surface as
    /// `Rejected`.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let body = json!({
            "user": { "userName": username, "password": password, "enabled": true }
        });
        let expect = Expectation::status(StatusCode::CREATED)
            .hint(StatusCode::NOT_FOUND, "the user might already exist")
            .hint(StatusCode::CONFLICT, "the user might already exist");
        self.connection
            .send_json(Method::POST, "security/usergroup/users.json", &body, &expect)
            .await?;
        Ok(())
    }

    /// Changes the password and enabled flag of a user.
    ///
    /// The user name identifies the user and cannot be changed.
    pub async fn update_user(
        &self,
        username: &str,
        password: &str,
        enabled: bool,
    ) -> Result<(), ApiError> {
        let body = json!({ "user": { "password": password, "enabled": enabled } });
        self.connection
            .send_json(
                Method::POST,
                &format!("security/usergroup/user/{username}"),
                &body,
                &Expectation::success(),
            )
            .await?;
        Ok(())
    }

    /// Grants `role` to a user.
    pub async fn associate_user_role(&self, username: &str, role: &str) -> Result<(), ApiError> {
        self.connection
            .send_empty(
                Method::POST,
                &format!("security/roles/role/{role}/user/{username}"),
                &[],
                &Expectation::success(),
            )
            .await
    }

    /// Removes a user.
    pub async fn delete_user(&self, username: &str) -> Result<(), ApiError> {
        let expect = Expectation::success().hint(StatusCode::NOT_FOUND, "User doesn't exist");
        self.connection
            .send_empty(
                Method::DELETE,
                &format!("security/usergroup/user/{username}"),
                &[],
                &expect,
            )
            .await
    }
}
