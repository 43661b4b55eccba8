use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "webscout")]
#[command(version)]
#[command(about = "Web search and fetch tools over the Model Context Protocol")]
#[command(long_about = "
webscout runs an MCP (Model Context Protocol) server exposing web search
and fetch tools for AI assistants.

Search requires the SEARXNG_URL environment variable pointing at a SearXNG
instance; fetch works without configuration.

Example usage:
  webscout serve                  # Stdio mode for assistant integration
  webscout serve http             # HTTP mode on 127.0.0.1:8000
  webscout serve http --port 0    # HTTP mode on a random port
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the MCP server
    #[command(long_about = "
Run the MCP server. Without a subcommand the server speaks the MCP
protocol over stdio, which is how assistant integrations launch it.

Example:
  webscout serve        # Stdio mode (default)
  webscout serve http   # HTTP mode
")]
    Serve {
        #[command(subcommand)]
        subcommand: Option<ServeSubcommand>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ServeSubcommand {
    /// Start the HTTP MCP server
    #[command(long_about = "
Start the streamable HTTP MCP server. The server exposes the MCP protocol
at /mcp and a health check at /health, and supports random port allocation
(use port 0). Stop with Ctrl+C.

Example:
  webscout serve http --port 8080 --host 127.0.0.1
  webscout serve http --port 0  # Random port
")]
    Http {
        /// Port to bind to (use 0 for a random port)
        #[arg(long, short = 'p', default_value = "8000", value_parser = clap::value_parser!(u16))]
        port: u16,

        /// Host to bind to
        #[arg(long, short = 'H', default_value = "127.0.0.1")]
        host: String,
    },
}

impl Cli {
    /// Parse from an explicit argument list, for tests
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }
}
