use serde::{Deserialize, Serialize};

use crate::error::DialogueError;

/// Immutable descriptive profile of a simulated participant.
///
/// The orchestration core only ever consumes the rendered prompt
/// fragment; the fields exist so callers can build personas from
/// structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Display name, also used as the speaker identity in the dialogue
    pub name: String,
    /// Short role description, e.g. "travel agent"
    pub role: String,
    /// Free-text traits, goals, or backstory
    pub background: String,
}

impl Persona {
    /// Create a new builder.
    pub fn builder() -> PersonaBuilder {
        PersonaBuilder::default()
    }

    /// Render the system-facing prompt fragment for this persona.
    pub fn prompt(&self) -> String {
        let mut fragment = format!("You are {}, {}.", self.name, self.role);
        if !self.background.is_empty() {
            fragment.push(' ');
            fragment.push_str(&self.background);
        }
        fragment
    }
}

/// Builder for [`Persona`].
#[derive(Debug, Default)]
pub struct PersonaBuilder {
    name: Option<String>,
    role: Option<String>,
    background: String,
}

impl PersonaBuilder {
    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the role description.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set free-text traits or backstory.
    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Build the persona; name and role are required.
    pub fn build(self) -> Result<Persona, DialogueError> {
        let name = require_field(self.name, "persona name")?;
        let role = require_field(self.role, "persona role")?;
        Ok(Persona {
            name,
            role,
            background: self.background,
        })
    }
}

fn require_field(value: Option<String>, name: &str) -> Result<String, DialogueError> {
    value.ok_or_else(|| DialogueError::InvalidConfig(format!("No {name} set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_includes_name_role_and_background() {
        let persona = Persona::builder()
            .name("Ada")
            .role("a mathematician")
            .background("You love puzzles.")
            .build()
            .expect("persona");
        assert_eq!(
            persona.prompt(),
            "You are Ada, a mathematician. You love puzzles."
        );
    }

    #[test]
    fn builder_requires_name_and_role() {
        assert!(Persona::builder().role("r").build().is_err());
        assert!(Persona::builder().name("n").build().is_err());
    }
}
