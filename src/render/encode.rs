use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use super::RenderError;

/// Turns a directory of numbered PNG frames into an H.264 MP4 by running
/// an external `ffmpeg`-compatible executable.
#[derive(Debug, Clone)]
pub struct Encoder {
    program: String,
}

impl Encoder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether `<program> -version` runs and exits cleanly.
    pub fn is_on_path(&self) -> bool {
        Command::new(&self.program)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Arguments for one encoding run; `input_pattern` is a printf-style
    /// frame path such as `tmp/frame_%05d.png`.
    pub fn args(&self, framerate: &str, input_pattern: &Path, out_path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-y", "-loglevel", "error", "-framerate", framerate, "-i"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(input_pattern.as_os_str().to_owned());
        args.extend(
            ["-c:v", "libx264", "-pix_fmt", "yuv420p"]
                .into_iter()
                .map(OsString::from),
        );
        args.push(out_path.as_os_str().to_owned());
        args
    }

    /// Run the encoder to completion.  A non-zero exit is an error carrying
    /// the encoder's stderr.
    pub fn encode(&self, framerate: &str, input_pattern: &Path, out_path: &Path) -> Result<(), RenderError> {
        let args = self.args(framerate, input_pattern, out_path);
        log::debug!("{} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| RenderError::EncoderSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RenderError::Encoder {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}
