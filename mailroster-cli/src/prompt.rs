//! Terminal implementation of the input port
//!
//! Built on dialoguer prompts, which keep asking until the validator accepts
//! the input. Only a broken terminal surfaces as an error.

use dialoguer::{Input, Password};
use mailroster_core::ports::Prompter;
use mailroster_core::{Error, Result};

fn input_error(e: dialoguer::Error) -> Error {
    Error::input(e.to_string())
}

/// Prompt text for a menu choice; a zero minimum means 0 cancels
fn choice_prompt(min: usize, max: usize) -> String {
    if min == 0 {
        format!("Enter choice (0 to cancel, 1-{max})")
    } else {
        format!("Enter choice ({min}-{max})")
    }
}

fn check_range<T: PartialOrd + std::fmt::Display>(value: &T, min: T, max: T) -> std::result::Result<(), String> {
    if *value < min || *value > max {
        return Err(format!("Please enter a number between {min} and {max}."));
    }
    Ok(())
}

/// Prompter that reads from the terminal
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ConsolePrompter {
    fn read_choice(&mut self, min: usize, max: usize) -> Result<usize> {
        Input::<usize>::new()
            .with_prompt(choice_prompt(min, max))
            .validate_with(move |value: &usize| check_range(value, min, max))
            .interact_text()
            .map_err(input_error)
    }

    fn read_number(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32> {
        Input::<u32>::new()
            .with_prompt(prompt)
            .validate_with(move |value: &u32| check_range(value, min, max))
            .interact_text()
            .map_err(input_error)
    }

    fn read_required(&mut self, prompt: &str) -> Result<String> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|value: &String| {
                if value.trim().is_empty() {
                    Err("Input cannot be empty. Try again.")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(input_error)?;
        Ok(value.trim().to_string())
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(input_error)
    }

    fn read_optional(&mut self, prompt: &str) -> Result<String> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)?;
        Ok(value.trim().to_string())
    }

    fn pause(&mut self) -> Result<()> {
        Input::<String>::new()
            .with_prompt("Press ENTER to continue")
            .allow_empty(true)
            .report(false)
            .interact_text()
            .map_err(input_error)?;
        Ok(())
    }
}
