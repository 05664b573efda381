//
//  geoserver-rest
//  api/settings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/14.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Global settings and contact information.
//!
//! The settings document is large and version dependent, so it is exchanged
//! as raw JSON. Contact information has a stable shape and is typed as
//! [`ContactInfo`].

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::client::{Connection, Expectation};
use super::common::{unwrap_envelope, ApiError};

/// Contact information advertised in capabilities documents.
///
/// Fields left `None` are omitted from updates. GeoServer has no way to
/// delete a contact field through this endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_voice: Option<String>,
}

/// Client for `settings` and `settings/contact`.
#[derive(Debug, Clone)]
pub struct SettingsClient {
    connection: Arc<Connection>,
}

impl SettingsClient {
    /// Creates a new settings client over a shared connection.
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Returns the complete global settings document.
    pub async fn get_settings(&self) -> Result<Value, ApiError> {
        self.connection.get_json("settings.json").await
    }

    /// Updates the global settings; `settings` may be a partial document.
    pub async fn update_settings(&self, settings: &Value) -> Result<(), ApiError> {
        self.connection
            .send_json(Method::PUT, "settings", settings, &Expectation::success())
            .await?;
        Ok(())
    }

    /// Sets the proxy base URL used in service links.
    pub async fn update_proxy_base_url(&self, proxy_base_url: &str) -> Result<(), ApiError> {
        let body = json!({ "global": { "settings": { "proxyBaseUrl": proxy_base_url } } });
        self.update_settings(&body).await
    }

    /// Returns the contact information.
    pub async fn get_contact_information(&self) -> Result<ContactInfo, ApiError> {
        let value: Value = self.connection.get_json("settings/contact.json").await?;
        unwrap_envelope(value, "contact")
    }

    /// Updates the fields of `contact` that are set.
    pub async fn update_contact_information(&self, contact: &ContactInfo) -> Result<(), ApiError> {
        self.connection
            .send_json(
                Method::PUT,
                "settings/contact",
                &json!({ "contact": contact }),
                &Expectation::success(),
            )
            .await?;
        Ok(())
    }
}
