//! Toolchain detection for Node.js and npm

use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Oldest Node.js major the generated projects are tested against
pub const MIN_NODE_MAJOR: u64 = 18;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// Parsed version, tolerating a leading `v` and trailing text
    pub fn semver(&self) -> Option<Version> {
        self.version.as_deref().and_then(parse_version)
    }
}

fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    probe("npm", "npm")
}

pub(crate) fn parse_version(raw: &str) -> Option<Version> {
    let cleaned = raw.trim().trim_start_matches('v');
    let token = cleaned.split_whitespace().next()?;
    Version::parse(token).ok()
}

/// Result of the toolchain check
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub node: RuntimeInfo,
    pub npm: RuntimeInfo,
}

impl Toolchain {
    /// Node.js is present but older than the supported minimum
    pub fn node_outdated(&self) -> bool {
        self.node
            .semver()
            .map(|v| v.major < MIN_NODE_MAJOR)
            .unwrap_or(false)
    }
}

/// Both Node.js and npm are required; a missing one is an error
pub fn check_toolchain() -> Result<Toolchain> {
    let node = check_node();
    let npm = check_npm();

    let mut missing = Vec::new();
    if !node.available {
        missing.push("Node.js (install from https://nodejs.org)");
    }
    if !npm.available {
        missing.push("npm (ships with Node.js)");
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required runtimes:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(Toolchain { node, npm })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_version() {
        assert_eq!(parse_version("v20.11.1\n"), Some(Version::new(20, 11, 1)));
        assert_eq!(parse_version("10.2.4"), Some(Version::new(10, 2, 4)));
        assert_eq!(parse_version("garbage"), None);
    }

    #[test]
    fn test_node_outdated() {
        let toolchain = |v: &str| Toolchain {
            node: RuntimeInfo {
                name: "Node.js",
                version: Some(v.to_string()),
                available: true,
            },
            npm: RuntimeInfo {
                name: "npm",
                version: Some("10.0.0".to_string()),
                available: true,
            },
        };
        assert!(toolchain("v16.20.2").node_outdated());
        assert!(!toolchain("v18.0.0").node_outdated());
        assert!(!toolchain("unknown").node_outdated());
    }
}
