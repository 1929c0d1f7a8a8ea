use serenity::all::{CommandInteraction, PartialChannel, ResolvedOption, ResolvedValue};

use crate::error::AppError;

/// Typed access to a command's resolved options.
pub struct CommandOptions<'a> {
    options: Vec<ResolvedOption<'a>>,
}

impl<'a> CommandOptions<'a> {
    pub fn new(cmd: &'a CommandInteraction) -> Self {
        Self {
            options: cmd.data.options(),
        }
    }

    fn value(&self, name: &str) -> Option<&ResolvedValue<'a>> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    pub fn string(&self, name: &str) -> Option<&'a str> {
        match self.value(name) {
            Some(ResolvedValue::String(value)) => Some(*value),
            _ => None,
        }
    }

    /// Gets a string option Discord marks as required.
    pub fn required_string(&self, name: &str) -> Result<&'a str, AppError> {
        self.string(name)
            .ok_or_else(|| AppError::BadRequest(format!("Missing required option `{}`.", name)))
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.value(name) {
            Some(ResolvedValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn channel(&self, name: &str) -> Option<&'a PartialChannel> {
        match self.value(name) {
            Some(ResolvedValue::Channel(channel)) => Some(*channel),
            _ => None,
        }
    }
}
