use std::io::{self, Write};

use log::warn;

/// Search depth used by a bare `go`.
pub const DEFAULT_DEPTH: u32 = 2;

/// Upper bound applied to any requested depth.
pub const DEFAULT_MAX_DEPTH: u32 = 8;

/// Hard ceiling for the `MaxDepth` option itself.
pub const MAX_DEPTH_LIMIT: u32 = 32;

/// Interpreter settings adjustable through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UciOptions {
    pub depth: u32,
    pub max_depth: u32,
}

impl Default for UciOptions {
    fn default() -> Self {
        UciOptions {
            depth: DEFAULT_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl UciOptions {
    /// Write the `uci` handshake reply: identity, options, `uciok`.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name SimpleChessEngine")?;
        writeln!(out, "id author SCRB")?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max {}",
            self.depth, self.max_depth
        )?;
        writeln!(
            out,
            "option name MaxDepth type spin default {} min 1 max {}",
            self.max_depth, MAX_DEPTH_LIMIT
        )?;
        writeln!(out, "uciok")
    }

    /// Clamp a requested search depth into `1..=max_depth`.
    #[must_use]
    pub fn clamp_depth(&self, requested: u32) -> u32 {
        requested.clamp(1, self.max_depth)
    }

    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        let normalized = name.trim().to_ascii_lowercase();
        let parsed = value.and_then(|v| v.trim().parse::<u32>().ok());
        match (normalized.as_str(), parsed) {
            ("depth", Some(v)) => {
                self.depth = self.clamp_depth(v);
            }
            ("maxdepth" | "max depth", Some(v)) => {
                self.max_depth = v.clamp(1, MAX_DEPTH_LIMIT);
                self.depth = self.depth.min(self.max_depth);
            }
            ("depth" | "maxdepth" | "max depth", None) => {
                warn!("option {name} needs a numeric value, got {value:?}");
            }
            _ => warn!("unknown option {name}"),
        }
    }
}

/// Split `setoption name <name...> [value <value...>]` into its parts.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.first() != Some(&"setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1) {
        match *part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}
