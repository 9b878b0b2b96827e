// src/prompt.rs
use anyhow::{Context as _, Result, bail};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::path::{MAIN_SEPARATOR, PathBuf};

/// Operator interaction needed by an import run.
pub trait Prompter {
    /// Asks for an existing path, re-asking until one is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator input cannot be read or is closed.
    fn path(&mut self, label: &str, default: Option<&str>) -> Result<PathBuf>;

    /// Asks the operator to pick one of `items` and returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if `items` is empty or the operator input cannot be read.
    fn select(&mut self, label: &str, items: &[String]) -> Result<usize>;
}

/// Line-based prompts over any reader and writer.
#[derive(Debug)]
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    #[inline]
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    #[inline]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[inline]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Result<String> {
        self.output.flush().context("Failed to flush prompt")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read operator input")?;
        if read == 0 {
            bail!("Input closed before an answer was given");
        }
        Ok(line.trim().to_owned())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn path(&mut self, label: &str, default: Option<&str>) -> Result<PathBuf> {
        loop {
            match default {
                Some(value) => write!(self.output, "{label} [{value}]: ")?,
                None => write!(self.output, "{label}: ")?,
            }
            let answer = self.read_answer()?;
            let candidate = match (answer.is_empty(), default) {
                (false, _) => answer.as_str(),
                (true, Some(value)) => value,
                (true, None) => {
                    writeln!(self.output, "A path is required")?;
                    continue;
                }
            };

            match existing_path(candidate) {
                Ok(path) => return Ok(path),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn select(&mut self, label: &str, items: &[String]) -> Result<usize> {
        if items.is_empty() {
            bail!("Nothing to select for: {label}");
        }

        writeln!(self.output, "{label}")?;
        for (number, item) in (1_usize..).zip(items) {
            writeln!(self.output, "  {number}) {item}")?;
        }

        loop {
            write!(self.output, "Select [1-{}]: ", items.len())?;
            let answer = self.read_answer()?;

            if let Some(index) = answer
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .filter(|index| *index < items.len())
            {
                return Ok(index);
            }
            if let Some(index) = items.iter().position(|item| *item == answer) {
                return Ok(index);
            }
            writeln!(self.output, "Invalid selection: {answer}")?;
        }
    }
}

/// Expands a leading `~` to the current user's home directory.
///
/// # Errors
///
/// This function may return an error if:
/// * The home directory cannot be determined
/// * The path uses the unsupported `~user` form
#[inline]
pub fn expand_home(input: &str) -> Result<PathBuf> {
    let Some(rest) = input.strip_prefix('~') else {
        return Ok(PathBuf::from(input));
    };

    let rest = if rest.is_empty() {
        rest
    } else if let Some(stripped) = rest.strip_prefix(|c: char| c == '/' || c == MAIN_SEPARATOR) {
        stripped
    } else {
        bail!("Cannot expand user-specific home dir: {input}");
    };

    let home = dirs::home_dir().context("Cannot determine home directory")?;
    Ok(if rest.is_empty() { home } else { home.join(rest) })
}

/// Expands `~` and checks that the result exists.
///
/// # Errors
///
/// This function may return an error if:
/// * `~` expansion fails
/// * The expanded path does not exist
#[inline]
pub fn existing_path(input: &str) -> Result<PathBuf> {
    let path = expand_home(input)?;
    if !path.exists() {
        bail!("Path does not exist: {}", path.display());
    }
    Ok(path)
}
