use crate::error::{Result, StyleError};
use std::io::Write;
use std::process::{Command, Stdio};

/// A clipboard program that reads the text to copy from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClipboardTool {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "linux")]
const TOOLS: &[ClipboardTool] = &[
    ClipboardTool {
        program: "wl-copy",
        args: &[],
    },
    ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

#[cfg(target_os = "windows")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const TOOLS: &[ClipboardTool] = &[];

/// Copies a generated document to the system clipboard, trying each
/// platform tool in turn until one can be spawned.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    copy_with(TOOLS, text)
}

fn copy_with(tools: &[ClipboardTool], text: &str) -> Result<()> {
    if tools.is_empty() {
        return Err(StyleError::Api(
            "Clipboard not supported on this platform".to_string(),
        ));
    }

    let mut last_error = None;
    for tool in tools {
        match Command::new(tool.program)
            .args(tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                tracing::debug!(program = tool.program, bytes = text.len(), "copying to clipboard");
                if let Some(mut stdin) = child.stdin.take() {
                    stdin.write_all(text.as_bytes()).map_err(|e| {
                        StyleError::Api(format!("Failed to write to {}: {}", tool.program, e))
                    })?;
                }
                let status = child.wait().map_err(|e| {
                    StyleError::Api(format!("Failed to wait for {}: {}", tool.program, e))
                })?;
                return if status.success() {
                    Ok(())
                } else {
                    Err(StyleError::Api(format!("{} exited with error", tool.program)))
                };
            }
            Err(e) => {
                tracing::debug!(program = tool.program, error = %e, "clipboard tool unavailable");
                last_error = Some(format!("{}: {}", tool.program, e));
            }
        }
    }

    let tried: Vec<&str> = tools.iter().map(|t| t.program).collect();
    Err(StyleError::Api(format!(
        "No clipboard tool available (tried {}). Last error: {}",
        tried.join(", "),
        last_error.unwrap_or_default()
    )))
}
