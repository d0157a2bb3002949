use serde::{Deserialize, Serialize};

pub use chrono;
use chrono::{DateTime, Utc};

pub mod deal;
pub mod filter;
pub mod protocol;

pub use deal::{Deal, DealError, DealKind};
pub use filter::{ListFilter, Listable};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
/// 后端 JWT 认证使用的 scheme 前缀
pub const AUTH_SCHEME: &str = "JWT";
/// 会话凭据在浏览器存储中的键名
pub const SESSION_KEY: &str = "token";
/// `amount` 字段的哨兵值，表示不限量
pub const UNLIMITED_AMOUNT: i64 = -1;
/// 注册时固定使用的账户类型 (Vendor)
pub const VENDOR_ACCOUNT_TYPE: &str = "V";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 商户档案 (`GET accounts/vendor`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Vendor {
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub restricted: bool,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub organization: Option<Organization>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub coupons: Vec<Coupon>,
    #[serde(default)]
    pub outlets: Vec<Outlet>,
}

impl Vendor {
    /// 组织已存在且通过后端审核时，才允许创建活动/优惠券/门店
    pub fn actions_enabled(&self) -> bool {
        self.organization.as_ref().is_some_and(|o| o.verified)
    }

    pub fn organization_id(&self) -> Option<u64> {
        self.organization.as_ref().map(|o| o.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Organization {
    pub id: u64,
    pub name: String,
    pub address: String,
    /// 仅由后端设置
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u64,
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub organization: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub organization: Option<u64>,
}

/// 分类信息：兴趣、类别、优惠券类型共用同一结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

pub type Interest = Taxonomy;
pub type Category = Taxonomy;
pub type CouponType = Taxonomy;

/// 优惠券
///
/// `deal` 在传输层是一个嵌入的 JSON 字符串，其结构由 `ctype.id` 决定，
/// 使用 [`Coupon::deal`] 解码为 [`Deal`]。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub ctype: CouponType,
    pub category: Category,
    pub campaign: u64,
    #[serde(default)]
    pub outlets: Vec<u64>,
    #[serde(rename = "deal")]
    pub raw_deal: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "TC", default)]
    pub terms: String,
    pub amount: i64,
    #[serde(default)]
    pub code: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub advertisement: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub interests: Vec<Interest>,
}

impl Coupon {
    pub fn is_unlimited(&self) -> bool {
        self.amount == UNLIMITED_AMOUNT
    }

    pub fn deal(&self) -> Result<Deal, DealError> {
        let kind = DealKind::from_code(self.ctype.id)?;
        Deal::decode(kind, &self.raw_deal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coupon_json() -> serde_json::Value {
        json!({
            "id": 7,
            "name": "Summer",
            "description": "desc",
            "ctype": { "id": 2, "name": "BOGO", "description": "" },
            "category": { "id": 3, "name": "Clothes", "description": "" },
            "campaign": 11,
            "outlets": [1, 2],
            "deal": "{\"buy\":2,\"next\":\"shirt\"}",
            "image": "https://cdn.example.com/c.png",
            "TC": "no refunds",
            "amount": -1,
            "code": "ABCDEFGHIJ",
            "start": "2024-01-01T00:00:00Z",
            "end": "2024-02-01T00:00:00Z",
            "advertisement": true,
            "active": true,
            "published": false,
            "interests": [{ "id": 5, "name": "Fashion" }]
        })
    }

    #[test]
    fn test_coupon_from_backend_shape() {
        let coupon: Coupon = serde_json::from_value(coupon_json()).unwrap();
        assert_eq!(coupon.terms, "no refunds");
        assert!(coupon.is_unlimited());
        assert_eq!(coupon.interests[0].description, "");
        assert_eq!(
            coupon.deal().unwrap(),
            Deal::BuyGetNext {
                buy: 2,
                next: "shirt".into()
            }
        );
    }

    #[test]
    fn test_vendor_actions_enabled() {
        let mut vendor: Vendor = serde_json::from_value(json!({
            "verified": true,
            "organization": null
        }))
        .unwrap();
        assert!(!vendor.actions_enabled());

        vendor.organization = Some(Organization {
            id: 1,
            name: "Acme".into(),
            address: "Main St".into(),
            verified: false,
        });
        assert!(!vendor.actions_enabled());

        vendor.organization.as_mut().unwrap().verified = true;
        assert!(vendor.actions_enabled());
        assert_eq!(vendor.organization_id(), Some(1));
    }
}
