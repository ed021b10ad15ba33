use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{GuideError, Result};

const CHECKLIST: &str = "OMEGAMON z/OS Deployment Checklist

□ Step 1: Create DFDSS dump datasets on MNT1 LPAR
□ Step 2: FTP transfer datasets to target LPAR
□ Step 3: Create catalog aliases on target LPAR
□ Step 4: DFDSS restore essential libraries
□ Step 5: APF authorize TKANMOD library
□ Step 6: Restore OMEGAMON datasets
□ Step 7: Copy started tasks to PROCLIB
□ Step 8: APF authorize required libraries
□ Step 9: Define OMEGAMON subsystem
□ Step 10: Activate VTAM MAJORNODE
□ Step 11: Configure TSO authorization
□ Step 12: Start OMEGAMON components
□ Step 13: Verify product functionality
□ Step 14: Configure ISPF interface

System Requirements:
- z/OS 1 Release 8+ (Recommended: 6.2.3 Fix Pack 1+)
- Tivoli Management Services 6.3.0 Fix Pack 6+
- Storage: 1,640-2,231 cylinders depending on configuration

Generated from IBM WSC OMEGAMON Deployment Guide";

const CONFIG_TEMPLATE: &str = "OMEGAMON z/OS Configuration Template

// Configuration Manager JCL Template
//S1 EXEC PGM=KCIOMEGA,REGION=0M,DYNAMNBR=256
//STEPLIB DD DISP=SHR,DSN=**.TKANMOD
//KCIFLOW DD DISP=SHR,DSN=**.TKANCUS(KFJOMEGA)
//KCIVARS DD *
ACTION              GENERATE
RTE_NAME            [YOUR_SYSNAME]
RTE_PLIB_HILEV      [YOUR_RUNTIME_HLQ]

Generated from IBM WSC OMEGAMON Deployment Guide";

/// Static text files offered alongside the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Download {
    Checklist,
    ConfigTemplate,
}

impl Download {
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Checklist => "omegamon-deployment-checklist.txt",
            Self::ConfigTemplate => "omegamon-configuration-template.txt",
        }
    }

    pub fn contents(&self) -> &'static str {
        match self {
            Self::Checklist => CHECKLIST,
            Self::ConfigTemplate => CONFIG_TEMPLATE,
        }
    }

    pub fn notification(&self) -> &'static str {
        match self {
            Self::Checklist => "Deployment checklist downloaded!",
            Self::ConfigTemplate => "Configuration template downloaded!",
        }
    }

    /// Write the file into `dir`, creating it if needed. Returns the written path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        fs::write(&path, self.contents())?;
        tracing::info!(path = %path.display(), "wrote download");
        Ok(path)
    }
}

impl FromStr for Download {
    type Err = GuideError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "checklist" => Ok(Self::Checklist),
            "config-template" | "config" | "template" => Ok(Self::ConfigTemplate),
            _ => Err(GuideError::UnknownDownload(s.to_string())),
        }
    }
}
