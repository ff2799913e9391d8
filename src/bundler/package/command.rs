//! External commands planned by a builder.

use std::fmt;

const REDACTED: &str = "********";

#[derive(Clone, Debug, Eq, PartialEq)]
struct Arg {
    value: String,
    quoted: bool,
    secret: bool,
}

/// One external program invocation: program plus discrete arguments.
///
/// The orchestrator spawns the program directly with these arguments, so no
/// shell parses them. [`PackageCommand::command_line`] renders the quoted
/// form for display; the [`fmt::Display`] form hides secret arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackageCommand {
    program: String,
    args: Vec<Arg>,
}

impl PackageCommand {
    /// Starts a command for `program` (name on `PATH` or full path).
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends a plain argument, quoted in the rendered line only if it
    /// contains whitespace.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(Arg {
            value: value.into(),
            quoted: false,
            secret: false,
        });
        self
    }

    /// Appends a value argument (a path, a name), always quoted when rendered.
    pub fn value_arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(Arg {
            value: value.into(),
            quoted: true,
            secret: false,
        });
        self
    }

    /// Appends a quoted argument that is masked in the display form.
    pub fn secret_arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(Arg {
            value: value.into(),
            quoted: true,
            secret: true,
        });
        self
    }

    /// Program to run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments exactly as passed to the program.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|a| a.value.as_str())
    }

    /// Values of the secret arguments.
    pub fn secrets(&self) -> impl Iterator<Item = &str> {
        self.args
            .iter()
            .filter(|a| a.secret && !a.value.is_empty())
            .map(|a| a.value.as_str())
    }

    /// Full command line with real values, e.g.
    /// `simple-msi build -c "<manifest>" -o "<output>"`.
    pub fn command_line(&self) -> String {
        self.render(false)
    }

    fn render(&self, redact: bool) -> String {
        let mut line = quote_if_needed(&self.program);

        for arg in &self.args {
            line.push(' ');
            let value = if redact && arg.secret {
                REDACTED
            } else {
                arg.value.as_str()
            };
            if arg.quoted {
                line.push_str(&quote(value));
            } else {
                line.push_str(&quote_if_needed(value));
            }
        }

        line
    }
}

impl fmt::Display for PackageCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

/// Wraps a value in double quotes, escaping embedded quotes.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

fn quote_if_needed(value: &str) -> String {
    if value.is_empty() || value.contains(char::is_whitespace) {
        quote(value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(password: &str) -> PackageCommand {
        PackageCommand::new("simple-msi")
            .arg("build")
            .arg("-c")
            .value_arg("/build/msi/HelloWorld.msi.toml")
            .arg("--certificate-password")
            .secret_arg(password)
    }

    #[test]
    fn command_line_quotes_values() {
        assert_eq!(
            build("secret").command_line(),
            r#"simple-msi build -c "/build/msi/HelloWorld.msi.toml" --certificate-password "secret""#
        );
    }

    #[test]
    fn display_masks_only_the_secret_argument() {
        // A password that also appears inside the program name and paths.
        let shown = build("msi").to_string();
        assert_eq!(
            shown,
            r#"simple-msi build -c "/build/msi/HelloWorld.msi.toml" --certificate-password "********""#
        );
    }

    #[test]
    fn args_are_unquoted_for_spawning() {
        let cmd = build("secret");
        assert_eq!(cmd.program(), "simple-msi");
        assert_eq!(
            cmd.args().collect::<Vec<_>>(),
            vec![
                "build",
                "-c",
                "/build/msi/HelloWorld.msi.toml",
                "--certificate-password",
                "secret"
            ]
        );
        assert_eq!(cmd.secrets().collect::<Vec<_>>(), vec!["secret"]);
    }

    #[test]
    fn program_with_spaces_is_quoted() {
        let cmd = PackageCommand::new(r"C:\Program Files\SimpleMSI\simple-msi.exe").arg("build");
        assert_eq!(
            cmd.command_line(),
            r#""C:\Program Files\SimpleMSI\simple-msi.exe" build"#
        );
    }
}
