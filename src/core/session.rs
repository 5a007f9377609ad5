use crate::core::calculator::Calculator;
use crate::core::reducer::StepDirection;
use crate::domain::model::{Field, FieldEdit};
use crate::domain::ports::Renderer;
use crate::utils::error::{ErrorSeverity, KombuchaError, Result};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  water <liters>      set the total water (alias: w, or water=<liters>)
  starter <liters>    set the starter liquid (alias: s, or starter=<liters>)
  up <field>          increase a field by one step
  down <field>        decrease a field by one step
  show                print the current recipe
  reset               go back to the default recipe
  help                print this help
  quit                leave (also: exit)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Edit(FieldEdit),
    Step(Field, StepDirection),
    Show,
    Reset,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if let Some((name, value)) = line.split_once('=') {
        let field: Field = name.parse()?;
        return Ok(Some(Command::Edit(FieldEdit::parse(field, value))));
    }

    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or_default().to_ascii_lowercase();
    let rest: Vec<&str> = parts.collect();

    let command = match head.as_str() {
        "show" => Command::Show,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "up" | "down" => {
            let field: Field = rest.join(" ").parse()?;
            let direction = if head == "up" {
                StepDirection::Up
            } else {
                StepDirection::Down
            };
            Command::Step(field, direction)
        }
        other => match other.parse::<Field>() {
            Ok(field) => Command::Edit(FieldEdit::parse(field, &rest.join(" "))),
            Err(_) => {
                return Err(KombuchaError::UnknownCommandError {
                    input: line.to_string(),
                })
            }
        },
    };

    Ok(Some(command))
}

/// Outcome of a single non-interactive edit.
#[derive(Debug, Clone, PartialEq)]
pub struct OneShot {
    pub rendered: String,
    pub rejected: bool,
}

impl OneShot {
    /// 2 when the input was rejected; the view still shows the last valid recipe.
    pub fn exit_code(&self) -> i32 {
        if self.rejected {
            2
        } else {
            0
        }
    }
}

/// Applies at most one edit and renders the resulting view once.
pub fn run_once(
    calculator: &mut Calculator,
    edit: Option<FieldEdit>,
    renderer: &dyn Renderer,
) -> Result<OneShot> {
    if let Some(edit) = edit {
        calculator.edit(edit);
    }
    let rendered = renderer.render(&calculator.view())?;
    let rejected = calculator.state().has_errors();
    if rejected {
        tracing::warn!("⚠️ Input was rejected; showing the last valid recipe");
    }
    Ok(OneShot { rendered, rejected })
}

/// Line-oriented stand-in for the live form: every edit re-renders the view.
pub struct Session<'a> {
    calculator: Calculator,
    renderer: &'a dyn Renderer,
}

impl<'a> Session<'a> {
    pub fn new(calculator: Calculator, renderer: &'a dyn Renderer) -> Self {
        Self {
            calculator,
            renderer,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        tracing::info!("🍵 Interactive session started");
        self.render(output)?;

        for line in input.lines() {
            let line = line?;
            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) if e.severity() == ErrorSeverity::Low => {
                    tracing::debug!("Rejected input '{}': {}", line.trim(), e);
                    writeln!(output, "❌ {}", e.user_friendly_message())?;
                    writeln!(output, "💡 {}", e.recovery_suggestion())?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            match command {
                Command::Edit(edit) => {
                    self.calculator.edit(edit);
                    self.render(output)?;
                }
                Command::Step(field, direction) => {
                    self.calculator.step(field, direction);
                    self.render(output)?;
                }
                Command::Reset => {
                    self.calculator.reset();
                    self.render(output)?;
                }
                Command::Show => self.render(output)?,
                Command::Help => writeln!(output, "{}", HELP)?,
                Command::Quit => break,
            }
        }

        tracing::info!("Interactive session finished");
        Ok(())
    }

    fn render<W: Write>(&self, output: &mut W) -> Result<()> {
        let rendered = self.renderer.render(&self.calculator.view())?;
        writeln!(output, "{}", rendered)?;
        Ok(())
    }
}
