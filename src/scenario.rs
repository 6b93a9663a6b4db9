//! Scenario data.
//!
//! A scenario is pure data: a slug, a title and the lines the console plays.
//! The built-in set is the default for `[[scenarios]]` in the config file.

use serde::{Deserialize, Serialize};

/// A scripted demo: title plus the ordered lines to reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Short identifier used on the command line (e.g. `serial`).
    pub id: String,
    /// Title shown in the modal header.
    pub title: String,
    /// Lines revealed one by one, in order.
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Scenario {
    /// Creates a scenario from borrowed parts.
    pub fn new(id: &str, title: &str, steps: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Finds a scenario by id (case-insensitive).
pub fn find_scenario<'a>(scenarios: &'a [Scenario], id: &str) -> Option<&'a Scenario> {
    scenarios.iter().find(|s| s.id.eq_ignore_ascii_case(id))
}

/// The three scenarios shipped with the application.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "interface",
            "Main Interface",
            &[
                "Loading main interface...",
                "Listing available macOS versions...",
                "macOS Sonoma 14.2.1 - Available",
                "macOS Ventura 13.6.3 - Available",
                "macOS Monterey 12.7.2 - Available",
                "Filters applied successfully",
                "Interface loaded - Ready to download!",
            ],
        ),
        Scenario::new(
            "downloads",
            "Download Manager",
            &[
                "Starting macOS Sonoma download...",
                "Speed: 45.2 MB/s",
                "Progress: 15% (1.2 GB of 8.1 GB)",
                "Download paused by user",
                "Download resumed",
                "Verifying file integrity...",
                "SHA256 checksum verified successfully!",
                "Download complete!",
            ],
        ),
        Scenario::new(
            "serial",
            "Serial Generator",
            &[
                "Starting serial generator...",
                "Email: demo@example.com",
                "Generating unique serial...",
                "Serial generated: A3F2-B8C1-9D4E-7F6A",
                "Validating serial...",
                "Serial is valid and unique",
                "Exporting to CSV...",
                "File saved: serials_demo.csv",
                "Licensing system active!",
            ],
        ),
    ]
}
