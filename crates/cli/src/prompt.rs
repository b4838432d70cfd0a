//! Interactive prompts for credentials not supplied by flag or
//! environment.
//!
//! Resolution order per option: CLI flag, then environment variable,
//! then an interactive prompt. Prompts go to stderr so piped stdout
//! stays clean; the password prompt is read without echo.

use std::io::{self, Write};

use secrecy::SecretString;

/// Errors that can occur while prompting.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Reading from the terminal failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// The interactive prompt received no input (e.g. EOF or an empty
    /// line).
    #[error("no input provided for \"{0}\"")]
    Empty(String),
}

/// Resolve a required option: CLI value, then environment variable, then
/// an interactive prompt.
///
/// Empty flag or environment values fall through to the next source;
/// empty interactive input is an error rather than an empty credential.
pub fn required(
    value: Option<String>,
    env_var: &str,
    prompt: &str,
) -> Result<String, PromptError> {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        return Ok(v);
    }

    if let Ok(v) = std::env::var(env_var)
        && !v.is_empty()
    {
        return Ok(v);
    }

    let mut stderr = io::stderr();
    write!(stderr, "{prompt}: ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    non_empty(line, prompt)
}

/// Like [`required`], but the interactive prompt masks input and the
/// result is wrapped in a [`SecretString`].
pub fn secret(
    value: Option<String>,
    env_var: &str,
    prompt: &str,
) -> Result<SecretString, PromptError> {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        return Ok(SecretString::from(v));
    }

    if let Ok(v) = std::env::var(env_var)
        && !v.is_empty()
    {
        return Ok(SecretString::from(v));
    }

    let password = rpassword::prompt_password(format!("{prompt}: "))?;
    non_empty(password, prompt).map(SecretString::from)
}

/// Strip the line terminator and reject input that is empty afterwards.
///
/// `read_line` yields `Ok("")` on EOF, which would otherwise flow on as
/// an empty credential and only fail much later as a confusing
/// domain/auth error.
fn non_empty(line: String, prompt: &str) -> Result<String, PromptError> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.is_empty() {
        return Err(PromptError::Empty(prompt.to_owned()));
    }
    Ok(trimmed.to_owned())
}
