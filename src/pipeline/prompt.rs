use crate::models::Address;
use anyhow::{bail, Result};
use std::io::{BufRead, Write};

/// Interactive address prompt.
///
/// Generic over its input and output handles so the confirmation loop
/// can be driven from an in-memory reader in tests; main wires it to
/// stdin/stdout.
pub struct AddressCollector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> AddressCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt for the four address fields and loop until the user
    /// confirms the assembled string. "no" re-collects all four
    /// fields; anything other than yes/no re-asks the question.
    pub fn collect(&mut self) -> Result<Address> {
        loop {
            let address = self.collect_fields()?;
            writeln!(self.output, " You entered: {}. ", address)?;
            writeln!(self.output, " Is this correct?")?;
            loop {
                let answer = self.ask("Yes or No: ")?.to_lowercase();
                match answer.as_str() {
                    "yes" => return Ok(address),
                    "no" => break,
                    _ => writeln!(self.output, "Please enter 'yes' or 'no'.")?,
                }
            }
        }
    }

    fn collect_fields(&mut self) -> Result<Address> {
        Ok(Address {
            street: self.ask("Enter Address Line 1 (Street Address): ")?,
            city: self.ask("Enter City: ")?,
            state: self.ask("Enter State: ")?,
            zip: self.ask("Enter Zip/Postal Code: ")?,
        })
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            bail!("input closed before the address was confirmed");
        }
        Ok(line.trim().to_string())
    }
}
