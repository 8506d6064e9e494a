//! The menu driven backpack manager.
//!
//! A [`Session`] reads answers line by line from any [`BufRead`] and writes prompts and results
//! to any [`Write`], so the same loop runs against a terminal or against a test buffer. Running
//! out of input ends the session the same way choosing `0` does.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use prettytable::{row, Table};

use crate::error::BackpackError;
use crate::item::{DEFAULT_PRIORITY, PRIORITY_RANGE};
use crate::search::{self, Probe};
use crate::{Backpack, Criterion, Item};

const RULE: &str = "========================================";

enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    backpack: Backpack,
    input: R,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(backpack: Backpack, input: R, output: W) -> Self {
        Self {
            backpack,
            input,
            output,
        }
    }

    pub fn backpack(&self) -> &Backpack {
        &self.backpack
    }

    pub fn into_backpack(self) -> Backpack {
        self.backpack
    }

    /// Shows the menu and handles choices until the user picks `0` or the input runs dry.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "Welcome to the backpack manager!".bold())?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            let flow = match choice.trim().parse::<u8>() {
                Ok(1) => self.add_item()?,
                Ok(2) => self.remove_item()?,
                Ok(3) => self.list_items()?,
                Ok(4) => self.linear_search()?,
                Ok(5) => self.sort_menu()?,
                Ok(6) => self.binary_search()?,
                Ok(0) => {
                    writeln!(self.output, "\n{}", "Goodbye, good luck out there!".bold())?;
                    Flow::Quit
                }
                _ => {
                    self.fail("Invalid option! Try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "{}", "   BACKPACK".bold().blue())?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "1. Add item")?;
        writeln!(self.output, "2. Remove item")?;
        writeln!(self.output, "3. List all items")?;
        writeln!(self.output, "4. Find item by name (linear search)")?;
        writeln!(self.output, "5. Sort items")?;
        writeln!(self.output, "6. Find item by name (binary search)")?;
        writeln!(self.output, "0. Exit")?;
        writeln!(self.output, "{RULE}")?;
        if self.backpack.is_sorted_by_name() {
            writeln!(self.output, "Status: sorted by name")?;
        } else {
            writeln!(self.output, "Status: not sorted by name")?;
        }
        writeln!(self.output, "{RULE}")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_item(&mut self) -> Result<Flow> {
        if self.backpack.is_full() {
            self.fail("Backpack is full! No room for more items.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n--- Add Item ---")?;
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(category) = self.prompt("Type: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(count) = self.prompt_number::<u32>("Count: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(priority) = self.prompt_number::<i64>("Priority (1 to 5): ")? else {
            return Ok(Flow::Quit);
        };

        if !(i64::from(*PRIORITY_RANGE.start())..=i64::from(*PRIORITY_RANGE.end()))
            .contains(&priority)
        {
            let warning = format!("Invalid priority! Using {DEFAULT_PRIORITY} (default).");
            writeln!(self.output, "{}", warning.yellow())?;
        }

        let added = Item::new(name, category, count, priority)
            .and_then(|item| self.backpack.insert(item));

        match added {
            Ok(()) => self.succeed("Item added!")?,
            Err(e) => self.fail(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn remove_item(&mut self) -> Result<Flow> {
        if self.backpack.is_empty() {
            self.fail("Backpack is empty! Nothing to remove.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n--- Remove Item ---")?;
        let Some(name) = self.prompt("Name of the item to remove: ")? else {
            return Ok(Flow::Quit);
        };

        match self.backpack.remove(&name) {
            Ok(_) => self.succeed("Item removed!")?,
            Err(BackpackError::NotFound(_)) => self.fail("Item not found!")?,
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn list_items(&mut self) -> Result<Flow> {
        if self.backpack.is_empty() {
            self.fail("Backpack is empty! Nothing to list.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n--- Items in the Backpack ---")?;

        let mut table = Table::new();
        table.add_row(row![
            "Name".bold(),
            "Type".bold(),
            "Count".bold(),
            "Priority".bold()
        ]);
        for item in &self.backpack {
            table.add_row(row![
                item.name(),
                item.category(),
                item.count(),
                item.priority()
            ]);
        }
        table
            .print(&mut self.output)
            .context("Unable to print the item table")?;

        writeln!(self.output, "\nTotal items: {}", self.backpack.len())?;
        Ok(Flow::Continue)
    }

    fn linear_search(&mut self) -> Result<Flow> {
        if self.backpack.is_empty() {
            self.fail("Backpack is empty! Nothing to search.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n--- Find Item by Name (Linear Search) ---")?;
        let Some(name) = self.prompt("Item name: ")? else {
            return Ok(Flow::Quit);
        };

        let probe = search::linear_search_by_name(&self.backpack, &name);
        report_probe(&mut self.output, probe)?;
        Ok(Flow::Continue)
    }

    fn sort_menu(&mut self) -> Result<Flow> {
        match self.backpack.len() {
            0 => {
                self.fail("Backpack is empty! Nothing to sort.")?;
                return Ok(Flow::Continue);
            }
            1 => {
                self.warn("Only one item in the backpack. No need to sort.")?;
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        writeln!(self.output, "\n--- Sort Items ---")?;
        writeln!(self.output, "Choose a criterion:")?;
        writeln!(self.output, "1. By name (alphabetical)")?;
        writeln!(self.output, "2. By type (alphabetical)")?;
        writeln!(self.output, "3. By priority (highest first)")?;
        let Some(choice) = self.prompt("Option: ")? else {
            return Ok(Flow::Quit);
        };

        let criterion = match choice.trim().parse::<usize>() {
            Ok(n @ 1..=3) => Criterion::ALL[n - 1],
            _ => {
                self.fail("Invalid option!")?;
                return Ok(Flow::Continue);
            }
        };

        let comparisons = self.backpack.sort(criterion);
        self.succeed(&format!("Backpack sorted by {criterion}!"))?;
        writeln!(self.output, "Comparisons made: {comparisons}")?;
        Ok(Flow::Continue)
    }

    fn binary_search(&mut self) -> Result<Flow> {
        if self.backpack.is_empty() {
            self.fail("Backpack is empty! Nothing to search.")?;
            return Ok(Flow::Continue);
        }

        if !self.backpack.is_sorted_by_name() {
            self.warn("The backpack must be sorted by name for a binary search!")?;
            let Some(answer) = self.prompt("Sort it now? (1 = yes, 0 = no): ")? else {
                return Ok(Flow::Quit);
            };

            if answer.trim() == "1" {
                self.backpack.sort(Criterion::Name);
                self.succeed("Backpack sorted by name!")?;
            } else {
                self.fail("Binary search cancelled.")?;
                return Ok(Flow::Continue);
            }
        }

        writeln!(self.output, "\n--- Find Item by Name (Binary Search) ---")?;
        let Some(name) = self.prompt("Item name: ")? else {
            return Ok(Flow::Quit);
        };

        let probe = search::binary_search_by_name(&self.backpack, &name)?;
        report_probe(&mut self.output, probe)?;
        Ok(Flow::Continue)
    }

    fn succeed(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n{}", message.green())?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n{}", message.yellow())?;
        Ok(())
    }

    fn fail(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n{}", message.red())?;
        Ok(())
    }

    // A line without its line ending, or `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Unable to read from input")?;

        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    // Asks again until the answer parses.
    fn prompt_number<N>(&mut self, prompt: &str) -> Result<Option<N>>
    where
        N: std::str::FromStr,
    {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };

            match answer.trim().parse::<N>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => self.fail("Please enter a whole number.")?,
            }
        }
    }
}

fn report_probe<W: Write>(output: &mut W, probe: Probe<'_>) -> Result<()> {
    match probe.item {
        Some(item) => {
            writeln!(output, "\n{}", "Item found!".green())?;
            writeln!(output, "Name: {}", item.name())?;
            writeln!(output, "Type: {}", item.category())?;
            writeln!(output, "Count: {}", item.count())?;
            writeln!(output, "Priority: {}", item.priority())?;
        }
        None => writeln!(output, "\n{}", "Item not found!".red())?,
    }
    writeln!(output, "Comparisons made: {}", probe.comparisons)?;
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::io::Cursor;

    fn run(backpack: Backpack, script: &str) -> (Backpack, String) {
        colored::control::set_override(false);

        let mut output = Vec::new();
        let mut session = Session::new(backpack, Cursor::new(script.to_string()), &mut output);
        session.run().unwrap();
        let backpack = session.into_backpack();

        (backpack, String::from_utf8(output).unwrap())
    }

    fn names(backpack: &Backpack) -> Vec<&str> {
        backpack.iter().map(Item::name).collect()
    }

    fn stocked() -> Backpack {
        let mut backpack = Backpack::new();
        for (name, category, priority) in [
            ("Faca", "Arma", 2),
            ("Escudo", "Defesa", 5),
            ("Agua", "Cura", 4),
        ] {
            backpack
                .insert(Item::new(name, category, 1, priority).unwrap())
                .unwrap();
        }
        backpack
    }

    #[test]
    fn exits_on_zero() {
        let (backpack, out) = run(Backpack::new(), "0\n1\n");
        assert!(backpack.is_empty());
        assert!(out.contains("Goodbye"));
        assert!(out.contains("Status: not sorted by name"));
    }

    #[test]
    fn exits_on_end_of_input() {
        let (_, out) = run(Backpack::new(), "");
        assert!(out.contains("Choose an option"));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn adds_item() {
        let (backpack, out) = run(Backpack::new(), "1\nFaca\nArma\n2\n4\n0\n");
        assert!(out.contains("Item added!"));
        assert_eq!(backpack.len(), 1);
        let item = &backpack.items()[0];
        assert_eq!(item.name(), "Faca");
        assert_eq!(item.category(), "Arma");
        assert_eq!(item.count(), 2);
        assert_eq!(item.priority(), 4);
    }

    #[test]
    fn adding_coerces_priority() {
        let (backpack, out) = run(Backpack::new(), "1\nFaca\nArma\n1\n9\n0\n");
        assert!(out.contains("Invalid priority! Using 3 (default)."));
        assert_eq!(backpack.items()[0].priority(), 3);
    }

    #[test]
    fn adding_reprompts_bad_numbers() {
        let (backpack, out) = run(Backpack::new(), "1\nFaca\nArma\nmany\n-1\n7\n5\n0\n");
        assert_eq!(out.matches("Please enter a whole number.").count(), 2);
        assert_eq!(backpack.items()[0].count(), 7);
    }

    #[test]
    fn adding_rejects_empty_name() {
        let (backpack, out) = run(Backpack::new(), "1\n\nArma\n1\n1\n0\n");
        assert!(out.contains("Invalid item: name cannot be empty"));
        assert!(backpack.is_empty());
    }

    #[test]
    fn adding_to_full_backpack() {
        let mut backpack = Backpack::with_capacity(1);
        backpack.insert(Item::new("Faca", "Arma", 1, 1).unwrap()).unwrap();

        // "Agua" would be read as a menu choice, so it is reported as invalid
        let (backpack, out) = run(backpack, "1\nAgua\n0\n");
        assert!(out.contains("Backpack is full!"));
        assert!(out.contains("Invalid option!"));
        assert_eq!(names(&backpack), ["Faca"]);
    }

    #[test]
    fn removes_item() {
        let (backpack, out) = run(stocked(), "2\nEscudo\n2\nEscudo\n0\n");
        assert!(out.contains("Item removed!"));
        assert!(out.contains("Item not found!"));
        assert_eq!(names(&backpack), ["Faca", "Agua"]);
    }

    #[test]
    fn empty_backpack_messages() {
        let (_, out) = run(Backpack::new(), "2\n3\n4\n5\n6\n0\n");
        assert!(out.contains("Nothing to remove."));
        assert!(out.contains("Nothing to list."));
        assert_eq!(out.matches("Nothing to search.").count(), 2);
        assert!(out.contains("Nothing to sort."));
    }

    #[test]
    fn lists_items() {
        let (_, out) = run(stocked(), "3\n0\n");
        assert!(out.contains("Escudo"));
        assert!(out.contains("Defesa"));
        assert!(out.contains("Total items: 3"));
    }

    #[test]
    fn linear_search_reports_item() {
        let (_, out) = run(stocked(), "4\nAgua\n0\n");
        assert!(out.contains("Item found!"));
        assert!(out.contains("Type: Cura"));
        assert!(out.contains("Priority: 4"));
        assert!(out.contains("Comparisons made: 3"));
    }

    #[test]
    fn sorts_by_chosen_criterion() {
        let (backpack, out) = run(stocked(), "5\n3\n0\n");
        assert!(out.contains("Backpack sorted by priority!"));
        assert_eq!(names(&backpack), ["Escudo", "Agua", "Faca"]);
        assert!(!backpack.is_sorted_by_name());

        let (backpack, out) = run(stocked(), "5\n1\n0\n");
        assert!(out.contains("Comparisons made: 3"));
        assert!(out.contains("Status: sorted by name"));
        assert!(backpack.is_sorted_by_name());
    }

    #[test]
    fn sort_rejects_bad_criterion() {
        let (backpack, out) = run(stocked(), "5\n4\n0\n");
        assert!(out.contains("Invalid option!"));
        assert_eq!(names(&backpack), ["Faca", "Escudo", "Agua"]);
    }

    #[test]
    fn sort_skips_single_item() {
        let mut backpack = Backpack::new();
        backpack.insert(Item::new("Faca", "Arma", 1, 1).unwrap()).unwrap();
        let (backpack, out) = run(backpack, "5\n0\n");
        assert!(out.contains("No need to sort."));
        assert!(!backpack.is_sorted_by_name());
    }

    #[test]
    fn binary_search_offers_to_sort() {
        let (backpack, out) = run(stocked(), "6\n1\nEscudo\n0\n");
        assert!(out.contains("must be sorted by name"));
        assert!(out.contains("Backpack sorted by name!"));
        assert!(out.contains("Item found!"));
        assert!(out.contains("Comparisons made: 1"));
        assert_eq!(names(&backpack), ["Agua", "Escudo", "Faca"]);
    }

    #[test]
    fn binary_search_can_be_cancelled() {
        let (backpack, out) = run(stocked(), "6\n0\n0\n");
        assert!(out.contains("Binary search cancelled."));
        assert!(!out.contains("Item found!"));
        assert_eq!(names(&backpack), ["Faca", "Escudo", "Agua"]);
    }

    #[test]
    fn binary_search_missing_item() {
        let mut backpack = stocked();
        backpack.sort(Criterion::Name);
        let (_, out) = run(backpack, "6\nColete\n0\n");
        assert!(!out.contains("Sort it now?"));
        assert!(out.contains("Item not found!"));
        assert!(out.contains("Comparisons made: 2"));
    }

    #[test]
    fn rejects_unknown_option() {
        let (_, out) = run(Backpack::new(), "9\nabc\n0\n");
        assert_eq!(out.matches("Invalid option! Try again.").count(), 2);
    }
}
