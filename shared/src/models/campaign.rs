//! Campaign Model

use serde::{Deserialize, Serialize};

/// Delivery statistics for a finished or running campaign
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CampaignStats {
    pub audience_size: i64,
    pub sent: i64,
    pub failed: i64,
}
