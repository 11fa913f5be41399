//! Back-office figures rendered by the admin console.
//!
//! The console has no API of its own yet; these types describe the snapshot
//! it displays.

use serde::{Deserialize, Serialize};

/// Platform-wide counters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_users: u32,
    pub active_transporters: u32,
    pub total_requests: u32,
    pub completed_transports: u32,
    pub total_revenue: f64,
    pub monthly_growth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub join_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminRequestRow {
    pub id: u32,
    pub title: String,
    pub client: String,
    pub from: String,
    pub to: String,
    pub status: String,
    pub price: f64,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportedIssue {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub reporter: String,
    pub reported: String,
    pub status: String,
    pub priority: String,
    pub date: String,
}

/// Everything the admin console shows at once
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminSnapshot {
    pub stats: PlatformStats,
    pub recent_users: Vec<AdminUserRow>,
    pub recent_requests: Vec<AdminRequestRow>,
    pub reported_issues: Vec<ReportedIssue>,
}
