use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Database model for agent status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(type_name = "agent_status", rename_all = "PascalCase")]
pub enum AgentStatus {
    PendingApproval,
    Active,
    Suspended,
}

impl AgentStatus {
    /// Whether the lifecycle allows moving from `self` to `next`
    pub fn can_transition_to(self, next: AgentStatus) -> bool {
        matches!(
            (self, next),
            (AgentStatus::PendingApproval, AgentStatus::Active)
                | (AgentStatus::Active, AgentStatus::Suspended)
                | (AgentStatus::Suspended, AgentStatus::Active)
        )
    }
}

impl std::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentStatus::PendingApproval => write!(f, "PendingApproval"),
            AgentStatus::Active => write!(f, "Active"),
            AgentStatus::Suspended => write!(f, "Suspended"),
        }
    }
}

impl FromStr for AgentStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PendingApproval" => Ok(AgentStatus::PendingApproval),
            "Active" => Ok(AgentStatus::Active),
            "Suspended" => Ok(AgentStatus::Suspended),
            _ => Err(()),
        }
    }
}

impl Serialize for AgentStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AgentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_str = String::deserialize(deserializer)?;
        AgentStatus::from_str(&value_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid AgentStatus: {value_str}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_transitions() {
        use AgentStatus::*;
        assert!(PendingApproval.can_transition_to(Active));
        assert!(Active.can_transition_to(Suspended));
        assert!(Suspended.can_transition_to(Active));

        assert!(!PendingApproval.can_transition_to(Suspended));
        assert!(!Active.can_transition_to(PendingApproval));
        assert!(!Active.can_transition_to(Active));
        assert!(!Suspended.can_transition_to(PendingApproval));
    }

    #[test]
    fn test_round_trip_through_str() {
        for status in [AgentStatus::PendingApproval, AgentStatus::Active, AgentStatus::Suspended] {
            assert_eq!(status.to_string().parse::<AgentStatus>(), Ok(status));
        }
        assert!("Deleted".parse::<AgentStatus>().is_err());
    }
}
