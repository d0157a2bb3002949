//! 列表过滤
//!
//! 纯函数：对内存中完整的集合重新计算，不做服务端过滤。

use crate::{Campaign, Coupon};
use chrono::{DateTime, Utc};
use std::fmt::Display;

/// 可被列表过滤器处理的资源
pub trait Listable {
    fn is_active(&self) -> bool;
    fn ends_at(&self) -> DateTime<Utc>;
}

impl Listable for Campaign {
    fn is_active(&self) -> bool {
        self.active
    }

    fn ends_at(&self) -> DateTime<Utc> {
        self.end
    }
}

impl Listable for Coupon {
    fn is_active(&self) -> bool {
        self.active
    }

    fn ends_at(&self) -> DateTime<Utc> {
        self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListFilter {
    /// 仅看 active 标志，不检查结束时间
    Active,
    Inactive,
    /// 结束时间严格早于评估时刻
    Used,
    /// 其他任意路由片段，原样保留
    #[default]
    All,
    Other(String),
}

impl ListFilter {
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "used" => Self::Used,
            "" | "all" => Self::All,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_segment(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Used => "used",
            Self::All => "all",
            Self::Other(s) => s,
        }
    }

    pub fn matches<T: Listable>(&self, item: &T, now: DateTime<Utc>) -> bool {
        match self {
            Self::Active => item.is_active(),
            Self::Inactive => !item.is_active(),
            Self::Used => item.ends_at() < now,
            Self::All | Self::Other(_) => true,
        }
    }

    pub fn apply<'a, T: Listable>(&self, items: &'a [T], now: DateTime<Utc>) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item, now)).collect()
    }
}

impl Display for ListFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn campaign(id: u64, active: bool, end: DateTime<Utc>) -> Campaign {
        Campaign {
            id,
            name: format!("c{}", id),
            start: end - Duration::days(30),
            end,
            active,
            organization: Some(1),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn fixture() -> Vec<Campaign> {
        let now = now();
        vec![
            campaign(1, true, now + Duration::days(1)),
            campaign(2, false, now + Duration::days(1)),
            // 已过期但仍标记为 active
            campaign(3, true, now - Duration::days(1)),
            campaign(4, false, now - Duration::seconds(1)),
            // 恰好在评估时刻结束，不算 used
            campaign(5, true, now),
        ]
    }

    fn ids(items: Vec<&Campaign>) -> Vec<u64> {
        items.into_iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_active_inactive_partition() {
        let items = fixture();
        let active = ids(ListFilter::Active.apply(&items, now()));
        let inactive = ids(ListFilter::Inactive.apply(&items, now()));

        assert_eq!(active, vec![1, 3, 5]);
        assert_eq!(inactive, vec![2, 4]);
        assert!(active.iter().all(|id| !inactive.contains(id)));
        assert_eq!(active.len() + inactive.len(), items.len());
    }

    #[test]
    fn test_used_is_strictly_before_now() {
        let items = fixture();
        assert_eq!(ids(ListFilter::Used.apply(&items, now())), vec![3, 4]);
    }

    #[test]
    fn test_unknown_segment_is_identity() {
        let items = fixture();
        let filter = ListFilter::from_segment("whatever");
        assert_eq!(filter, ListFilter::Other("whatever".into()));
        assert_eq!(filter.apply(&items, now()).len(), items.len());
        assert_eq!(ListFilter::from_segment("").apply(&items, now()).len(), items.len());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let items = fixture();
        let before = items.clone();
        let _ = ListFilter::Used.apply(&items, now());
        let _ = ListFilter::Active.apply(&items, now());
        assert_eq!(items, before);
    }
}
