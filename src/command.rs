use itertools::Itertools;

use crate::error::BlockError;

pub const DEFAULT_COMMAND: &str = "acpi";

/// Source of raw battery status text.
pub trait Runner {
    /// # Errors
    /// Returns an error if the underlying command could not produce output
    fn run(&self) -> Result<String, BlockError>;
}

/// Runs `acpi` (or a replacement given on the command line) and captures its stdout
pub struct AcpiRunner {
    pub name: String,
    pub args: Vec<String>,
}

impl Runner for AcpiRunner {
    fn run(&self) -> Result<String, BlockError> {
        run(self.name.as_str(), &self.args.iter().map(String::as_str).collect::<Vec<_>>())
    }
}

/// # Errors
/// Returns an error if the command can't be spawned, exits unsuccessfully, or prints non UTF-8 text
pub fn run<S: AsRef<str>>(name: S, args: &[S]) -> Result<String, BlockError> {
    let name = name.as_ref();
    let args = args.iter().map(<S as AsRef<str>>::as_ref).collect::<Vec<&str>>();

    let command_error = |e: String| BlockError::CommandError {
        name: name.to_string(),
        args: args.iter().map(ToString::to_string).collect::<Vec<_>>(),
        e,
    };

    log::debug!("Running '{name} {}'", args.iter().join(" "));

    // Run the command, changing any errors into CommandError with the name and args given as parameters
    let command_output = std::process::Command::new(name)
        .args(&args)
        .output()
        .map_err(|e| command_error(e.to_string()))?;

    if !command_output.status.success() {
        return Err(command_error(format!(
            "{}: {}",
            command_output.status,
            String::from_utf8_lossy(&command_output.stderr).trim()
        )));
    }

    Ok(String::from_utf8(command_output.stdout)?.trim().to_string())
}

#[cfg(test)]
pub mod tests {
    use super::*;

    pub struct MockRunner(pub &'static str);

    impl Runner for MockRunner {
        fn run(&self) -> Result<String, BlockError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn run_captures_trimmed_stdout() {
        let output = run("echo", &["Battery 0: Full, 100%"]).unwrap();
        assert_eq!(output, "Battery 0: Full, 100%");
    }

    #[test]
    fn run_reports_missing_program() {
        let err = run("battery-block-no-such-program", &[]).unwrap_err();
        assert!(matches!(err, BlockError::CommandError { ref name, .. } if name == "battery-block-no-such-program"));
    }

    #[test]
    fn run_reports_failing_exit_status() {
        let err = run("false", &[]).unwrap_err();
        assert!(matches!(err, BlockError::CommandError { .. }));
    }

    #[test]
    fn acpi_runner_passes_arguments() {
        let runner = AcpiRunner {
            name: "echo".to_string(),
            args: vec!["Battery 0: Full, 100%".to_string()],
        };
        assert_eq!(runner.run().unwrap(), "Battery 0: Full, 100%");
    }
}
