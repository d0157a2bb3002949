use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods used by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for a
/// fixed-path endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path, relative to the API base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Resource paths
// =========================================================

/// REST collections with create/read/update operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Organizations,
    Campaigns,
    Coupons,
    Outlets,
}

impl Resource {
    pub fn collection(&self) -> &'static str {
        match self {
            Resource::Organizations => "organizations",
            Resource::Campaigns => "campaigns",
            Resource::Coupons => "coupons",
            Resource::Outlets => "outlets",
        }
    }

    pub fn item(&self, id: u64) -> String {
        format!("{}/{}", self.collection(), id)
    }
}

/// Read-only taxonomies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyKind {
    Interests,
    Categories,
    Types,
}

impl TaxonomyKind {
    pub fn path(&self) -> &'static str {
        match self {
            TaxonomyKind::Interests => "interests",
            TaxonomyKind::Categories => "categories",
            TaxonomyKind::Types => "types",
        }
    }
}

pub const VENDOR_PROFILE_PATH: &str = "accounts/vendor";
pub const RESEND_VERIFICATION_PATH: &str = "accounts/send-verification-email";

// =========================================================
// Account Requests
// =========================================================

/// Obtain a JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

impl ApiRequest for LoginRequest {
    type Response = TokenResponse;
    const PATH: &'static str = "accounts/token/get";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Register a vendor account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub atype: String,
}

impl RegisterRequest {
    pub fn vendor(username: String, email: String, password: String) -> Self {
        Self {
            username,
            email,
            password,
            atype: crate::VENDOR_ACCOUNT_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
}

impl ApiRequest for RegisterRequest {
    type Response = RegisteredUser;
    const PATH: &'static str = "accounts/create";
    const METHOD: HttpMethod = HttpMethod::Post;
}

// =========================================================
// Resource Payloads
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationPayload {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignPayload {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub active: bool,
    /// 仅在创建时携带
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletPayload {
    pub name: String,
    pub description: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub organization: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        assert_eq!(Resource::Coupons.collection(), "coupons");
        assert_eq!(Resource::Outlets.item(42), "outlets/42");
        assert_eq!(TaxonomyKind::Types.path(), "types");
        assert_eq!(LoginRequest::PATH, "accounts/token/get");
    }

    #[test]
    fn test_campaign_edit_payload_omits_organization() {
        let payload = CampaignPayload {
            name: "Spring".into(),
            start: "2024-03-01T00:00:00Z".parse().unwrap(),
            end: "2024-04-01T00:00:00Z".parse().unwrap(),
            active: true,
            organization: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("organization").is_none());
        assert_eq!(value["start"], "2024-03-01T00:00:00Z");
    }

    #[test]
    fn test_register_uses_vendor_account_type() {
        let req = RegisterRequest::vendor("bob".into(), "b@x.io".into(), "pw".into());
        assert_eq!(req.atype, "V");
    }
}
