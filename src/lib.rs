//! TimeCraft Capture Library
//!
//! This library provides the quick-capture analysis engine of a GTD
//! (Getting Things Done) inbox, and a Model Context Protocol (MCP) server that
//! exposes it as tools. Captured free text is expanded from slash-command
//! templates, classified as task, goal, habit or note, and enriched with tags,
//! an energy level and a GTD category before it is handed to a note store.
//!
//! # Architecture
//!
//! The library follows a 2-layer architecture:
//! - **MCP Layer**: `CaptureServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `capture` module - Pure capture analysis functions
//!
//! Persistence of the resulting notes is the note store's job and is not part
//! of this crate.
//!
//! # Example
//!
//! ```
//! use timecraft_capture::capture::{self, ItemType};
//!
//! let analysis = capture::analyze("/ligar João");
//! assert_eq!(analysis.expanded, "Ligar para João");
//! assert_eq!(analysis.suggestion.item_type, ItemType::tarefa);
//! ```

pub mod capture;
pub mod config;
pub mod formatting;
mod handlers;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};

// Re-export commonly used types
pub use capture::{Clock, FixedClock, SystemClock};
pub use config::Config;

/// MCP Server handler for quick capture
///
/// Holds the server configuration and the clock used to stamp capture
/// metadata. All analysis is stateless, so concurrent tool calls share
/// nothing mutable.
pub struct CaptureServerHandler {
    pub(crate) config: Config,
    pub(crate) clock: Box<dyn Clock>,
}

impl CaptureServerHandler {
    /// Create a new capture server handler
    ///
    /// # Arguments
    /// * `config_path` - Optional path to a TOML config file; missing files use defaults
    ///
    /// # Example
    /// ```no_run
    /// # use timecraft_capture::CaptureServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = CaptureServerHandler::new(Some("timecraft.toml"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config_path: Option<&str>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(Self::with_config(config))
    }

    /// Create a handler from an already loaded configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock used for `processado_em`
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Quick-capture server for a GTD inbox.
///
/// Captures are free text, typically Portuguese. Slash commands expand into
/// canonical phrases before anything else happens:
/// - **/tarefa X** → "Fazer X"
/// - **/meta X** → "Alcançar X"
/// - **/habito X** → "X diariamente"
/// - **/lembrete X** → "Lembrar de X"
/// - **/comprar X**, **/ligar X**, **/email X**
///
/// Suggested types: tarefa (task), meta (goal), habito (habit), nota (note).
/// Confidence tiers: none, low, medium, high.
/// Tags: @context and #hashtag tokens, plus #urgente, #energia-baixa, #energia-alta markers.
#[mcp_server]
impl McpServer for CaptureServerHandler {
    /// **GTD Capture (Inbox)**: Capture anything and get the inbox note that would be stored.
    /// **Returns**: title, expanded content, tags, energy, GTD category, timestamp and type suggestion.
    /// **Workflow**: 1) classify while typing → 2) capture on submit → 3) process during review.
    #[tool]
    async fn capture(
        &self,
        /// Captured text (may start with a slash command such as /tarefa)
        content: String,
        /// Title; generated from the content when omitted
        title: Option<String>,
        /// Context such as "casa" or "@trabalho"; defaults to the configured context
        context: Option<String>,
        /// Processing timestamp in RFC 3339; defaults to now
        processed_at: Option<String>,
    ) -> McpResult<String> {
        self.handle_capture(content, title, context, processed_at)
            .await
    }

    /// **GTD Clarify**: Suggest whether text is a task, goal, habit or note, with confidence and reason.
    /// **Use**: Call on every edit for a live hint; high-confidence tasks/goals can be auto-converted.
    #[tool]
    async fn classify(
        &self,
        /// Current text of the capture field
        content: String,
    ) -> McpResult<String> {
        self.handle_classify(content).await
    }

    /// **Template**: Expand a leading slash command (/tarefa, /meta, /habito, /lembrete, /comprar, /ligar, /email).
    /// Returns the text unchanged when there is no command or nothing follows it.
    #[tool]
    async fn expand(
        &self,
        /// Text to expand
        content: String,
    ) -> McpResult<String> {
        self.handle_expand(content).await
    }

    /// **Template hint**: Show the example phrasing for the command being typed.
    #[tool]
    async fn template_hint(
        &self,
        /// Text starting with a slash command
        content: String,
    ) -> McpResult<String> {
        self.handle_template_hint(content).await
    }
}
