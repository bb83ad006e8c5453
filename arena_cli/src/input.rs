//! Line-based prompts that re-ask until the answer parses

use arena_core::{Character, ClassName};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("input closed")]
    Closed,
}

/// Parse a yes/no answer
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Parse a 1-based menu choice into a 0-based index
pub fn parse_menu_choice(answer: &str, options: usize) -> Option<usize> {
    match answer.trim().parse::<usize>() {
        Ok(n) if (1..=options).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Prompts over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a prompt and read one trimmed line
    fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer parses
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        error: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, InputError> {
        loop {
            let answer = self.ask(prompt)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            writeln!(self.output, "{}", error)?;
        }
    }

    pub fn confirm(&mut self, prompt: &str) -> Result<bool, InputError> {
        self.ask_until(prompt, "Please answer 'y' or 'n'.", parse_yes_no)
    }

    pub fn wait_for_enter(&mut self, prompt: &str) -> Result<(), InputError> {
        self.ask(prompt).map(|_| ())
    }

    /// Class menu shown when creating a character
    pub fn choose_class(&mut self) -> Result<ClassName, InputError> {
        writeln!(self.output, "Choose your class:")?;
        for (i, class) in ClassName::all().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, class)?;
        }
        let options = ClassName::all().len();
        let index = self.ask_until("> Enter a number (1-3): ", "Invalid choice.", |a| {
            parse_menu_choice(a, options)
        })?;
        Ok(ClassName::all()[index])
    }

    /// Class menu shown after a victory, with the current level of each class
    pub fn choose_level_up(&mut self, character: &Character) -> Result<ClassName, InputError> {
        writeln!(self.output, "\nChoose a class to level up:")?;
        for (i, class) in ClassName::all().iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} (level: {})",
                i + 1,
                class,
                character.classes.level(*class)
            )?;
        }
        let options = ClassName::all().len();
        let index = self.ask_until("> Number: ", "Enter 1, 2 or 3.", |a| {
            parse_menu_choice(a, options)
        })?;
        Ok(ClassName::all()[index])
    }
}
