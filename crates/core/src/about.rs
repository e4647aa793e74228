//! Texts for the `info` and `version` commands and the help footer

pub const TOOL_NAME: &str = "URL Shortener CLI Tool";

/// Examples appended to `--help`
pub const USE_CASES: &str = "\
Use Cases:
  zap shorten https://www.google.com    # Shorten a URL
  zap validate https://x.com            # Validate a URL
  zap history                           # View shortening history
  zap batch urls.txt                    # Shorten URLs from a file
  zap info                              # Show tool information
  zap version                           # Show tool version";

/// `URL Shortener CLI Tool, version 2.0.0`
pub fn version_line(version: &str) -> String {
    format!("{TOOL_NAME}, version {version}")
}

/// Tool description printed by `info`
pub fn info_text(version: &str) -> String {
    format!(
        "\
{TOOL_NAME}
A simple command-line tool to shorten URLs.
Version : {version}
License: MIT
Features:
- Shorten URLs with detailed output (`shorten` command)
- Validate URLs without shortening (`validate` command)
- View history of shortened URLs (`history` command)
- Batch shorten URLs from a file (`batch` command)
Use `zap --help` for more details."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_line() {
        assert_eq!(version_line("2.0.0"), "URL Shortener CLI Tool, version 2.0.0");
    }

    #[test]
    fn test_info_text_lists_commands() {
        let info = info_text("2.0.0");

        assert!(info.starts_with(TOOL_NAME));
        assert!(info.contains("Version : 2.0.0"));
        assert!(info.contains("License: MIT"));
        for command in ["shorten", "validate", "history", "batch"] {
            assert!(info.contains(&format!("(`{command}` command)")));
        }
    }

    #[test]
    fn test_use_cases_cover_every_command() {
        for command in ["shorten", "validate", "history", "batch", "info", "version"] {
            assert!(USE_CASES.contains(&format!("zap {command}")));
        }
    }
}
