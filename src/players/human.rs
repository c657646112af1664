use super::opponent::Decision;
use super::opponent::Opponent;
use crate::Chips;
use crate::Error;
use crate::Result;
use crate::gameplay::Choice;
use crate::gameplay::State;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;

/// Interactive terminal player. Picks among the abstract choices
/// or names any raise-to amount within bounds.
#[derive(Debug, Default)]
pub struct Human;

impl Opponent for Human {
    fn decide(&mut self, state: &State) -> Result<Decision> {
        let choices = state.legal().choices().collect::<Vec<_>>();
        let mut labels = choices
            .iter()
            .map(|c| Self::label(state, c))
            .collect::<Vec<_>>();
        if state.raise_bounds().is_some() {
            labels.push("custom raise".magenta().to_string());
        }
        let selection = Select::new()
            .with_prompt(format!("{}", state))
            .report(false)
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| Error::Opponent(e.to_string()))?;
        match choices.get(selection) {
            Some(choice) => Ok(Decision::Choose(*choice)),
            None => Self::sizing(state).map(Decision::Raise),
        }
    }
}

impl Human {
    fn label(state: &State, choice: &Choice) -> String {
        match choice {
            Choice::Fold => "fold".red().to_string(),
            Choice::Call => "check/call".cyan().to_string(),
            raise => format!("{} {}", raise, state.sizing().amount(*raise))
                .green()
                .to_string(),
        }
    }
    fn sizing(state: &State) -> Result<Chips> {
        let (min, max) = state
            .raise_bounds()
            .ok_or_else(|| Error::Opponent("raising is closed".to_string()))?;
        Input::<String>::new()
            .with_prompt(format!("Raise to [{}-{}]", min, max))
            .validate_with(|i: &String| -> std::result::Result<(), String> {
                let input = i
                    .parse::<Chips>()
                    .map_err(|_| String::from("Enter a positive integer"))?;
                if input < min {
                    return Err(format!("Minimum raise is {}", min));
                }
                if input > max {
                    return Err(format!("Maximum raise is {}", max));
                }
                Ok(())
            })
            .report(false)
            .interact()
            .map_err(|e| Error::Opponent(e.to_string()))?
            .parse::<Chips>()
            .map_err(|e| Error::Opponent(e.to_string()))
    }
}
