use std::time::Duration;

use rmcp::service::{ClientInitializeError, RunningService};
use rmcp::{RoleClient, ServiceExt};
use tokio::process::Child;

use crate::error::{ProxyError, Result};
use crate::launcher::Launcher;

/// How long a child whose stdout closed during the handshake gets to exit before it is treated
/// as alive (and therefore as having sent something we could not read).
const EXIT_GRACE: Duration = Duration::from_millis(500);

/// How long a child gets to exit on its own after the session closes its stdin.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

/// One child process plus the initialized MCP session on its stdio.
///
/// Dropping the session (including when the owning future is cancelled) cancels the service and
/// kills the child; `close` does the same but waits for the teardown.
pub(crate) struct ProxySession {
    package: String,
    client: RunningService<RoleClient, ()>,
    child: Child,
}

impl ProxySession {
    pub(crate) async fn connect(launcher: &Launcher, package_id: &str) -> Result<Self> {
        if package_id.trim().is_empty() {
            return Err(ProxyError::InvalidPackage);
        }

        let command_line = launcher.command_line(package_id).join(" ");
        log::debug!("launching `{command_line}`");

        let launch_error = |message: String| ProxyError::Launch {
            command: command_line.clone(),
            message,
        };

        let mut child = launcher
            .command(package_id)
            .spawn()
            .map_err(|error| launch_error(error.to_string()))?;
        let (Some(stdout), Some(stdin)) = (child.stdout.take(), child.stdin.take()) else {
            return Err(launch_error("child stdio was not piped".to_string()));
        };

        // `serve` performs the initialize handshake before returning.
        let client = match ().serve((stdout, stdin)).await {
            Ok(client) => client,
            Err(error) => {
                let exited = exited_within(&mut child, EXIT_GRACE).await;
                return Err(classify_initialize_error(
                    &command_line,
                    package_id,
                    &error,
                    exited,
                ));
            }
        };

        Ok(Self {
            package: package_id.to_string(),
            client,
            child,
        })
    }

    pub(crate) fn package(&self) -> &str {
        &self.package
    }

    pub(crate) fn client(&self) -> &RunningService<RoleClient, ()> {
        &self.client
    }

    pub(crate) async fn close(self) {
        let Self {
            package,
            client,
            mut child,
        } = self;
        match client.cancel().await {
            Ok(reason) => log::debug!("session with `{package}` closed: {reason:?}"),
            Err(error) => log::warn!("session with `{package}` did not shut down cleanly: {error}"),
        }
        if !exited_within(&mut child, SHUTDOWN_GRACE).await {
            if let Err(error) = child.kill().await {
                log::warn!("failed to kill `{package}`: {error}");
            }
        }
    }
}

/// True when the child has exited (or can no longer be waited on) within `grace`.
async fn exited_within(child: &mut Child, grace: Duration) -> bool {
    match tokio::time::timeout(grace, child.wait()).await {
        Ok(Ok(status)) => {
            log::debug!("child exited with {status}");
            true
        }
        Ok(Err(error)) => {
            log::debug!("waiting on child failed: {error}");
            true
        }
        Err(_) => false,
    }
}

/// A malformed answer to `initialize` is a protocol error. When the stream merely ends, the
/// child decides: if it went away the server never came up, if it is still running it sent
/// something that could not be read as JSON-RPC.
fn classify_initialize_error(
    command_line: &str,
    package_id: &str,
    error: &ClientInitializeError,
    child_exited: bool,
) -> ProxyError {
    let protocol = || ProxyError::Protocol {
        package: package_id.to_string(),
        stage: "initialize",
        message: error.to_string(),
    };
    let launch = || ProxyError::Launch {
        command: command_line.to_string(),
        message: error.to_string(),
    };
    match error {
        ClientInitializeError::ExpectedInitResponse(..)
        | ClientInitializeError::ExpectedInitResult(..)
        | ClientInitializeError::ConflictInitResponseId(..) => protocol(),
        ClientInitializeError::ConnectionClosed(..)
        | ClientInitializeError::TransportError { .. }
            if !child_exited =>
        {
            protocol()
        }
        _ => launch(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(error: &ClientInitializeError, exited: bool) -> ProxyError {
        classify_initialize_error("npx @scope/pkg", "@scope/pkg", error, exited)
    }

    #[test]
    fn closed_stream_from_exited_child_is_a_launch_error() {
        let error = ClientInitializeError::ConnectionClosed("initialize response".to_string());
        assert!(matches!(classify(&error, true), ProxyError::Launch { .. }));
    }

    #[test]
    fn closed_stream_from_running_child_is_a_protocol_error() {
        let error = ClientInitializeError::ConnectionClosed("initialize response".to_string());
        match classify(&error, false) {
            ProxyError::Protocol { stage, .. } => assert_eq!(stage, "initialize"),
            other => panic!("expected protocol error, got {other:?}"),
        }
    }

    #[test]
    fn unexpected_result_is_a_protocol_error_either_way() {
        let error = ClientInitializeError::ExpectedInitResult(None);
        assert!(matches!(classify(&error, true), ProxyError::Protocol { .. }));
        assert!(matches!(classify(&error, false), ProxyError::Protocol { .. }));
    }

    #[test]
    fn cancelled_handshake_is_a_launch_error() {
        assert!(matches!(
            classify(&ClientInitializeError::Cancelled, false),
            ProxyError::Launch { .. }
        ));
    }
}
