use gridplan::util::PlanConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the plater
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct PlaterConfig {
    /// Grid and height units
    #[serde(default)]
    pub plan: PlanConfig,
    /// Carry statuses of a stale previous queue over to the regenerated one
    #[serde(default = "default_reconcile")]
    pub reconcile: bool,
}

fn default_reconcile() -> bool {
    true
}

impl Default for PlaterConfig {
    fn default() -> Self {
        Self {
            plan: PlanConfig::default(),
            reconcile: true,
        }
    }
}
