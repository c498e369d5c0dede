//! Interactive prompts for the checkout command.
//!
//! Each prompt re-asks until the answer is valid. End of input aborts.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use eyre::{Result, eyre};
use tool_rental::catalog::ToolCatalog;
use tool_rental::checkout::compute_agreement;
use tool_rental::error::RentalResult;
use tool_rental::models::{MAX_DISCOUNT_PERCENTAGE, RentalAgreement};
use tool_rental::report::parse_date;

/// Reads checkout values from a line-oriented input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks until `parse` accepts the answer, printing `error_message` otherwise.
    fn ask<T>(
        &mut self,
        message: &str,
        error_message: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            write!(self.output, "\n{}", message)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(eyre!("input closed before a value was entered"));
            }
            match parse(line.trim_end_matches(['\r', '\n'])) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "{}", error_message)?,
            }
        }
    }

    /// Asks for a tool code stocked in `catalog`.
    pub fn tool_code(&mut self, catalog: &ToolCatalog) -> Result<String> {
        let codes: Vec<String> = catalog.codes().iter().map(|c| c.to_string()).collect();
        let error_message = format!("Invalid tool code! Valid tool codes are: [{}]", codes.join(", "));
        self.ask(
            "Please enter the code for the tool you would like to rent: ",
            &error_message,
            |answer| catalog.lookup(answer).ok().map(|_| answer.to_string()),
        )
    }

    /// Asks for a rental duration of at least one day.
    pub fn rental_days(&mut self, tool_code: &str) -> Result<i64> {
        self.ask(
            &format!("How many days would you like to rent {}? ", tool_code),
            "Invalid number of days. Please enter an integer greater than or equal to 1",
            |answer| answer.trim().parse::<i64>().ok().filter(|days| *days >= 1),
        )
    }

    /// Asks for a discount percentage from 0 to 100.
    pub fn discount_percentage(&mut self) -> Result<i64> {
        self.ask(
            "What % discount should be applied? ",
            "Please enter an integer greater than or equal to 0 and less than or equal to 100",
            |answer| {
                answer
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|pct| (0..=i64::from(MAX_DISCOUNT_PERCENTAGE)).contains(pct))
            },
        )
    }

    /// Asks for a `MM/DD/YY` checkout date.
    pub fn checkout_date(&mut self) -> Result<NaiveDate> {
        self.ask(
            "Check out date (mm/dd/yy): ",
            "Invalid date format. EX: 09/22/21",
            |answer| parse_date(answer).ok(),
        )
    }

    /// Prompts for every value not given and builds the agreement.
    ///
    /// A given tool code or date is checked before the first prompt, so a
    /// bad one fails the checkout without asking for the rest.
    pub fn complete_checkout(
        &mut self,
        catalog: &ToolCatalog,
        tool_code: Option<String>,
        rental_days: Option<i64>,
        discount_percentage: Option<i64>,
        checkout_date: Option<String>,
    ) -> Result<RentalResult<RentalAgreement>> {
        if let Some(Err(err)) = tool_code.as_deref().map(|code| catalog.lookup(code)) {
            return Ok(Err(err));
        }
        let given_date = match checkout_date.as_deref().map(parse_date).transpose() {
            Ok(date) => date,
            Err(err) => return Ok(Err(err)),
        };

        let code = match tool_code {
            Some(code) => code,
            None => self.tool_code(catalog)?,
        };
        let days = match rental_days {
            Some(days) => days,
            None => self.rental_days(&code)?,
        };
        let discount = match discount_percentage {
            Some(discount) => discount,
            None => self.discount_percentage()?,
        };
        let date = match given_date {
            Some(date) => date,
            None => self.checkout_date()?,
        };
        Ok(compute_agreement(catalog, &code, days, discount, date))
    }
}
