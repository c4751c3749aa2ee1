//! Line-oriented command language for driving the desktop.
//!
//! ```text
//! open <window> [data...]
//! close <window>
//! focus <window>
//! click <dock-app>
//! show
//! quit
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use deskwin_common::DeskwinError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopCommand {
    Open { key: String, data: Option<String> },
    Close(String),
    Focus(String),
    /// Dock icon click: toggles the app's window.
    Click(String),
    Show,
    Quit,
}

/// Parse one input line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<DesktopCommand>, DeskwinError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "open" => {
            let (key, data) = match rest.split_once(char::is_whitespace) {
                Some((key, data)) => (key, Some(data.trim().to_string())),
                None => (rest, None),
            };
            DesktopCommand::Open {
                key: required(key, "open")?,
                data,
            }
        }
        "close" => DesktopCommand::Close(single(rest, "close")?),
        "focus" => DesktopCommand::Focus(single(rest, "focus")?),
        "click" => DesktopCommand::Click(single(rest, "click")?),
        "show" => DesktopCommand::Show,
        "quit" | "exit" => DesktopCommand::Quit,
        other => {
            return Err(DeskwinError::Other(format!("unknown command: {other}")));
        }
    };
    Ok(Some(command))
}

fn required(arg: &str, verb: &str) -> Result<String, DeskwinError> {
    if arg.is_empty() {
        Err(DeskwinError::Other(format!("{verb}: missing window name")))
    } else {
        Ok(arg.to_string())
    }
}

fn single(rest: &str, verb: &str) -> Result<String, DeskwinError> {
    if rest.split_whitespace().count() > 1 {
        return Err(DeskwinError::Other(format!("{verb}: expected one argument")));
    }
    required(rest, verb)
}
