//! Wires the store, the registry and the menu loop together over generic
//! streams, so the binary, the integration tests and the benches all drive
//! the exact same program.

use std::io::{self, BufRead, Write};

use crate::account::operation::Kind;
use crate::account::registry::Operations;
use crate::account::store::BalanceStore;
use crate::account::Amount;
use crate::menu::{self, Choice};

/// Run the interactive loop until the user exits or the input ends.
///
/// Everything written to `output` is the program's observable transcript;
/// diagnostics go through tracing, never to `output`.
pub fn run(
    input: impl BufRead,
    mut output: impl Write,
    initial_balance: Amount,
) -> io::Result<()> {
    let store = BalanceStore::shared(initial_balance);
    let operations = Operations::new(store);

    let mut lines = input.lines();

    loop {
        output.write_all(menu::MENU.as_bytes())?;
        output.write_all(menu::CHOICE_PROMPT.as_bytes())?;
        output.flush()?;

        // End of input exits the loop the same way choice 4 does.
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match menu::parse_choice(&line) {
            None => output.write_all(menu::INVALID_CHOICE.as_bytes())?,
            Some(Choice::ViewBalance) => {
                let result = operations.execute(&Kind::ViewBalance, None);
                output.write_all(result.message.as_bytes())?;
            }
            Some(Choice::Credit) => {
                let amount = read_amount(&mut lines, menu::CREDIT_PROMPT, &mut output)?;
                let result = operations.execute(&Kind::Credit, Some(amount));
                output.write_all(result.message.as_bytes())?;
            }
            Some(Choice::Debit) => {
                let amount = read_amount(&mut lines, menu::DEBIT_PROMPT, &mut output)?;
                let result = operations.execute(&Kind::Debit, Some(amount));
                output.write_all(result.message.as_bytes())?;
            }
            Some(Choice::Exit) => break,
        }
    }

    output.write_all(menu::GOODBYE.as_bytes())?;
    output.flush()?;

    Ok(())
}

/// Prompt for and read one amount line.
///
/// End of input behaves like an empty line: the amount falls back to zero
/// and the loop carries on, as the reference program does.
fn read_amount(
    lines: &mut io::Lines<impl BufRead>,
    prompt: &str,
    mut output: impl Write,
) -> io::Result<Amount> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let line = lines.next().transpose()?.unwrap_or_default();
    Ok(menu::parse_amount(&line))
}
