use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{Context, Result, bail};

use super::{CreatedContent, TranslationBackend, TranslationRequest};

/// Runs an external program per request.
///
/// The request is written to the program's stdin as JSON. In creation mode
/// the program must print a JSON object mapping locale codes to content; in
/// update mode its stdout is ignored. A non-zero exit status is a failure.
#[derive(Debug, Clone)]
pub struct CommandBackend {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl CommandBackend {
    pub fn new(program: impl Into<String>, args: Vec<String>, working_dir: &Path) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: working_dir.to_path_buf(),
        }
    }

    fn invoke(&self, request: &TranslationRequest) -> Result<Vec<u8>> {
        let payload = serde_json::to_vec(request).context("Failed to encode backend request")?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Failed to start translation backend '{}'", self.program))?;

        // Dropping stdin after the write closes the pipe.
        let sent = child
            .stdin
            .take()
            .map(|mut stdin| stdin.write_all(&payload))
            .transpose();

        let output = child
            .wait_with_output()
            .context("Failed to wait for translation backend")?;

        // A program may exit without reading its input; its exit status decides.
        if let Err(e) = sent
            && e.kind() != io::ErrorKind::BrokenPipe
        {
            return Err(e).context("Failed to send request to translation backend");
        }

        if !output.status.success() {
            bail!(
                "Translation backend '{}' exited with {}",
                self.program,
                output.status
            );
        }

        Ok(output.stdout)
    }
}

impl TranslationBackend for CommandBackend {
    fn translate_for_creation(&self, request: &TranslationRequest) -> Result<CreatedContent> {
        let stdout = self.invoke(request)?;
        serde_json::from_slice(&stdout).with_context(|| {
            format!(
                "Translation backend '{}' returned invalid JSON for creation request",
                self.program
            )
        })
    }

    fn translate_and_write(&self, request: &TranslationRequest) -> Result<()> {
        self.invoke(request).map(|_| ())
    }

    fn name(&self) -> &str {
        &self.program
    }
}
