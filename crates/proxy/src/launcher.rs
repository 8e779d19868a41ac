use catalog_protocol::config::DEFAULT_LAUNCHER;
use catalog_protocol::CatalogConfig;
use std::process::Stdio;

use tokio::process::Command;

/// How a package identifier becomes a running MCP server: `program args... <package>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    program: String,
    args: Vec<String>,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(DEFAULT_LAUNCHER)
    }
}

impl Launcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.launcher_program.clone()).with_args(config.launcher_args.iter().cloned())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full argv for `package_id`, program first.
    pub fn command_line(&self, package_id: &str) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv.push(package_id.to_string());
        argv
    }

    pub(crate) fn command(&self, package_id: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(package_id)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        cmd
    }
}
