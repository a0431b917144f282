//! Editor integration for writing entries

use crate::error::{DiaryError, Result};
use log::debug;
use std::path::Path;
use std::process::Command;

/// Session for editing a draft file in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open `file_path` and block until the editor exits
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        debug!(
            "event=editor_launch module=editor program={} file={}",
            program,
            file_path.display()
        );

        // On Windows, go through cmd /c so .bat and .cmd editors resolve
        let mut command = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program);
            cmd
        } else {
            Command::new(&program)
        };

        let status = command.args(&args).status().map_err(|e| {
            DiaryError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(DiaryError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Split the command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let mut parts = self.command.split_whitespace().map(str::to_string);

        match parts.next() {
            Some(program) => (program, parts.collect()),
            None if cfg!(windows) => ("notepad".to_string(), Vec::new()),
            None => ("nano".to_string(), Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_with_args() {
        let session = EditorSession::new("  code  -w ".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "code");
        assert_eq!(args, vec!["-w"]);
    }

    #[test]
    fn test_parse_command_empty_falls_back() {
        let session = EditorSession::new(String::new());
        let (program, args) = session.parse_command();

        assert!(program == "nano" || program == "notepad");
        assert!(args.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_edit_reports_failing_editor() {
        let temp = tempfile::TempDir::new().unwrap();
        let session = EditorSession::new("false".to_string());
        let err = session.edit(&temp.path().join("draft.md")).unwrap_err();
        assert!(matches!(err, DiaryError::Editor(_)));
    }

    #[test]
    fn test_edit_reports_missing_program() {
        let temp = tempfile::TempDir::new().unwrap();
        let session = EditorSession::new("pixeldiary-no-such-editor".to_string());
        assert!(session.edit(&temp.path().join("draft.md")).is_err());
    }
}
