//! Slash-command template expansion
//!
//! A captured text that starts with one of the known commands (`/tarefa`,
//! `/ligar`, ...) is rewritten into its canonical phrasing before it is
//! classified or stored.

use super::keywords;

/// A slash command and the phrase it expands into
#[derive(Debug, Clone, Copy)]
pub struct TemplateCommand {
    /// Command token including the leading slash
    pub command: &'static str,
    prefix: &'static str,
    suffix: &'static str,
}

impl TemplateCommand {
    const fn new(command: &'static str, prefix: &'static str, suffix: &'static str) -> Self {
        Self {
            command,
            prefix,
            suffix,
        }
    }

    /// Substitutes `remainder` into the template phrase
    pub fn render(&self, remainder: &str) -> String {
        format!("{}{}{}", self.prefix, remainder, self.suffix)
    }
}

/// Recognized commands in declaration order (first match wins)
pub const TEMPLATE_COMMANDS: &[TemplateCommand] = &[
    TemplateCommand::new("/tarefa", "Fazer ", ""),
    TemplateCommand::new("/meta", "Alcançar ", ""),
    TemplateCommand::new("/habito", "", " diariamente"),
    TemplateCommand::new("/lembrete", "Lembrar de ", ""),
    TemplateCommand::new("/comprar", "Comprar ", ""),
    TemplateCommand::new("/ligar", "Ligar para ", ""),
    TemplateCommand::new("/email", "Enviar email para ", ""),
];

/// Example phrasing shown while the user is typing a command
const TEMPLATE_HINTS: &[(&str, &str)] = &[
    ("/tarefa", "Fazer [sua tarefa]"),
    ("/meta", "Alcançar [seu objetivo]"),
    ("/habito", "[atividade] diariamente"),
    ("/lembrete", "Lembrar de [algo]"),
];

/// Case-insensitive check that `text` begins with the ASCII `command`
pub(crate) fn starts_with_command(text: &str, command: &str) -> bool {
    text.get(..command.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(command))
}

/// Expand a leading slash command into its canonical phrase
///
/// Returns `text` unchanged when no command matches or when the command has
/// nothing after it.
///
/// # Examples
/// ```
/// # use timecraft_capture::capture::template::expand;
/// assert_eq!(expand("/ligar João"), "Ligar para João");
/// assert_eq!(expand("/ligar"), "/ligar");
/// ```
pub fn expand(text: &str) -> String {
    for template in TEMPLATE_COMMANDS {
        if starts_with_command(text, template.command) {
            let remainder = keywords::trim_blank(&text[template.command.len()..]);
            if !remainder.is_empty() {
                return template.render(remainder);
            }
        }
    }
    text.to_string()
}

/// Look up the example template for the command being typed
///
/// Only the first space-separated token is considered, and it must match a
/// hinted command exactly.
pub fn template_hint(text: &str) -> Option<&'static str> {
    if !text.starts_with('/') {
        return None;
    }
    let command = text.split(' ').next().unwrap_or_default();
    TEMPLATE_HINTS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, hint)| *hint)
}
