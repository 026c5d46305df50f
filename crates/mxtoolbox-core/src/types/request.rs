use super::Command;

/// A single lookup, built once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    command: Command,
    argument: String,
    port: Option<String>,
}

impl QueryRequest {
    /// Build a request. The modifier is kept as `port` only for commands
    /// that accept one; anything else is dropped.
    #[must_use]
    pub fn new(command: Command, argument: impl Into<String>, modifier: Option<String>) -> Self {
        let port = modifier.filter(|m| command.accepts_port() && !m.is_empty());

        Self {
            command,
            argument: argument.into(),
            port,
        }
    }

    /// The command this request was built for
    #[must_use]
    pub const fn command(&self) -> Command {
        self.command
    }

    /// Domain, IP or host being looked up
    #[must_use]
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// Port forwarded to the API, if any
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Request path relative to the API base URL
    #[must_use]
    pub fn path(&self) -> String {
        self.command.path()
    }

    /// Query parameters in the order they are sent
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![("argument", self.argument.as_str())];

        if let Some(ref port) = self.port {
            params.push(("port", port.as_str()));
        }

        params
    }
}
