//! 优惠内容 (Deal) 模块
//!
//! 后端把优惠内容存为一个嵌入的 JSON 文档，具体结构由优惠券类型编号决定：
//! - `1`: 折扣 `{sale}`
//! - `2`: 买 X 送 Y `{buy, next}`
//! - `3`: 组合价 `{amount, cost, save}`

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DealError {
    #[error("unknown deal type code: {0}")]
    UnknownKind(u64),
    #[error("malformed deal document for {kind:?}: {message}")]
    Malformed { kind: DealKind, message: String },
}

/// 类型判别码，对应后端 `types` 表的 id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DealKind {
    #[default]
    Sale,
    BuyGetNext,
    Bundle,
}

impl DealKind {
    pub const ALL: [DealKind; 3] = [DealKind::Sale, DealKind::BuyGetNext, DealKind::Bundle];

    pub fn from_code(code: u64) -> Result<Self, DealError> {
        match code {
            1 => Ok(Self::Sale),
            2 => Ok(Self::BuyGetNext),
            3 => Ok(Self::Bundle),
            other => Err(DealError::UnknownKind(other)),
        }
    }

    pub fn code(&self) -> u64 {
        match self {
            Self::Sale => 1,
            Self::BuyGetNext => 2,
            Self::Bundle => 3,
        }
    }
}

/// 优惠内容
#[derive(Debug, Clone, PartialEq)]
pub enum Deal {
    /// 百分比折扣
    Sale { sale: u32 },
    /// 买 `buy` 件，下一件为 `next`
    BuyGetNext { buy: u32, next: String },
    /// `amount` 件组合售价 `cost`，节省 `save`
    Bundle { amount: u32, cost: f64, save: f64 },
}

// 每个变体对应的线上文档结构
#[derive(Serialize, Deserialize)]
struct SaleDoc {
    sale: u32,
}

#[derive(Serialize, Deserialize)]
struct BuyGetNextDoc {
    buy: u32,
    next: String,
}

#[derive(Serialize, Deserialize)]
struct BundleDoc {
    amount: u32,
    cost: f64,
    save: f64,
}

impl Deal {
    pub fn kind(&self) -> DealKind {
        match self {
            Deal::Sale { .. } => DealKind::Sale,
            Deal::BuyGetNext { .. } => DealKind::BuyGetNext,
            Deal::Bundle { .. } => DealKind::Bundle,
        }
    }

    /// 编码为后端存储的 JSON 文档字符串
    pub fn encode(&self) -> String {
        let value = match self {
            Deal::Sale { sale } => serde_json::to_value(SaleDoc { sale: *sale }),
            Deal::BuyGetNext { buy, next } => serde_json::to_value(BuyGetNextDoc {
                buy: *buy,
                next: next.clone(),
            }),
            Deal::Bundle { amount, cost, save } => serde_json::to_value(BundleDoc {
                amount: *amount,
                cost: *cost,
                save: *save,
            }),
        };
        // 以上结构只包含数字与字符串，序列化不会失败
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    /// 按判别码解码 JSON 文档
    pub fn decode(kind: DealKind, raw: &str) -> Result<Self, DealError> {
        let malformed = |e: serde_json::Error| DealError::Malformed {
            kind,
            message: e.to_string(),
        };
        match kind {
            DealKind::Sale => {
                let doc: SaleDoc = serde_json::from_str(raw).map_err(malformed)?;
                Ok(Deal::Sale { sale: doc.sale })
            }
            DealKind::BuyGetNext => {
                let doc: BuyGetNextDoc = serde_json::from_str(raw).map_err(malformed)?;
                Ok(Deal::BuyGetNext {
                    buy: doc.buy,
                    next: doc.next,
                })
            }
            DealKind::Bundle => {
                let doc: BundleDoc = serde_json::from_str(raw).map_err(malformed)?;
                Ok(Deal::Bundle {
                    amount: doc.amount,
                    cost: doc.cost,
                    save: doc.save,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_round_trip() {
        let deal = Deal::Sale { sale: 10 };
        let raw = deal.encode();
        assert_eq!(raw, r#"{"sale":10}"#);
        assert_eq!(Deal::decode(DealKind::from_code(1).unwrap(), &raw), Ok(deal));
    }

    #[test]
    fn test_buy_get_next_round_trip() {
        let deal = Deal::BuyGetNext {
            buy: 2,
            next: "shirt".into(),
        };
        let raw = deal.encode();
        assert_eq!(Deal::decode(DealKind::from_code(2).unwrap(), &raw), Ok(deal));
    }

    #[test]
    fn test_bundle_round_trip() {
        let deal = Deal::Bundle {
            amount: 3,
            cost: 9.99,
            save: 1.5,
        };
        let raw = deal.encode();
        assert_eq!(Deal::decode(DealKind::from_code(3).unwrap(), &raw), Ok(deal));
    }

    #[test]
    fn test_decode_with_wrong_kind_is_malformed() {
        let err = Deal::decode(DealKind::Bundle, r#"{"sale":10}"#).unwrap_err();
        assert!(matches!(err, DealError::Malformed { kind: DealKind::Bundle, .. }));
    }

    #[test]
    fn test_unknown_kind_code() {
        assert_eq!(DealKind::from_code(9), Err(DealError::UnknownKind(9)));
        for kind in DealKind::ALL {
            assert_eq!(DealKind::from_code(kind.code()), Ok(kind));
        }
    }
}
