use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GuideError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Deployment,
    Performance,
    Connectivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Check first; most likely cause
    Critical,
    Caution,
}

#[derive(Debug, Serialize)]
pub struct ResolutionCheck {
    pub severity: Severity,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TroubleshootingPath {
    pub category: IssueCategory,
    pub heading: &'static str,
    pub checks: &'static [ResolutionCheck],
}

static DEPLOYMENT: TroubleshootingPath = TroubleshootingPath {
    category: IssueCategory::Deployment,
    heading: "Deployment Issue Resolution",
    checks: &[
        ResolutionCheck {
            severity: Severity::Critical,
            title: "Check APF Authorization",
            detail: "Ensure TKANMOD library is APF authorized: SETPROG APF,ADD,DSN=&HLQ..TKANMOD,SMS",
        },
        ResolutionCheck {
            severity: Severity::Caution,
            title: "Verify Dataset Allocation",
            detail: "Check if all required datasets are properly allocated and accessible",
        },
    ],
};

static PERFORMANCE: TroubleshootingPath = TroubleshootingPath {
    category: IssueCategory::Performance,
    heading: "Performance Issue Resolution",
    checks: &[ResolutionCheck {
        severity: Severity::Critical,
        title: "Check System Resources",
        detail: "Monitor CPU, memory, and I/O utilization patterns",
    }],
};

static CONNECTIVITY: TroubleshootingPath = TroubleshootingPath {
    category: IssueCategory::Connectivity,
    heading: "Connectivity Issue Resolution",
    checks: &[ResolutionCheck {
        severity: Severity::Critical,
        title: "Verify VTAM Configuration",
        detail: "Check CXEGNODE MAJORNODE activation: V NET,ACT,ID=CXEGNODE,SCOPE=ALL",
    }],
};

impl IssueCategory {
    pub const ALL: [IssueCategory; 3] = [
        IssueCategory::Deployment,
        IssueCategory::Performance,
        IssueCategory::Connectivity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deployment => "deployment",
            Self::Performance => "performance",
            Self::Connectivity => "connectivity",
        }
    }

    pub fn path(&self) -> &'static TroubleshootingPath {
        match self {
            Self::Deployment => &DEPLOYMENT,
            Self::Performance => &PERFORMANCE,
            Self::Connectivity => &CONNECTIVITY,
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueCategory {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| GuideError::UnknownIssue(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("deployment".parse::<IssueCategory>().unwrap(), IssueCategory::Deployment);
        assert_eq!(" Connectivity ".parse::<IssueCategory>().unwrap(), IssueCategory::Connectivity);
        assert!(matches!(
            "network".parse::<IssueCategory>(),
            Err(GuideError::UnknownIssue(_))
        ));
    }

    #[test]
    fn test_every_category_has_checks() {
        for category in IssueCategory::ALL {
            let path = category.path();
            assert_eq!(path.category, category);
            assert!(!path.checks.is_empty());
        }
    }

    #[test]
    fn test_connectivity_points_at_vtam() {
        let path = IssueCategory::Connectivity.path();
        assert_eq!(path.heading, "Connectivity Issue Resolution");
        assert!(path.checks[0].detail.contains("V NET,ACT,ID=CXEGNODE"));
    }
}
