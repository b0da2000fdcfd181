// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interactive console for the device registry.
//!
//! Run with: `cargo run --example console`
//!
//! Set `RUST_LOG=device_registry=debug` to see the registry's own logs.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use device_registry::{DeviceRegistry, Subscribable, TracingLink};
use tracing_subscriber::EnvFilter;

/// Whitespace-separated token reader over stdin.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}

fn print_menu() -> io::Result<()> {
    println!("\nMenu:");
    println!("1. Create Device");
    println!("2. Control Device");
    println!("3. Get Device Status");
    println!("4. Display All Device Statuses");
    println!("5. Exit");
    prompt("Choose an option (1-5): ")
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let registry = DeviceRegistry::new().with_link(TracingLink);
    registry.on_status_changed(|change| println!("{change}"));

    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());

    loop {
        print_menu()?;
        let Some(choice) = tokens.next_token()? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                prompt("Enter device type (sensor/motor/relay): ")?;
                let Some(kind) = tokens.next_token()? else { break };
                prompt("Enter device ID: ")?;
                let Some(id) = tokens.next_token()? else { break };
                prompt("Enter initial status: ")?;
                let Some(status) = tokens.next_token()? else { break };

                if let Err(e) = registry.create_device(&kind, id, status) {
                    println!("{e}");
                }
            }
            "2" => {
                prompt("Enter device ID: ")?;
                let Some(id) = tokens.next_token()? else { break };
                prompt("Enter new status: ")?;
                let Some(status) = tokens.next_token()? else { break };

                if let Err(e) = registry.control_device(&id, status) {
                    println!("{e}");
                }
            }
            "3" => {
                prompt("Enter device ID: ")?;
                let Some(id) = tokens.next_token()? else { break };

                match registry.get_status(&id) {
                    Ok(status) => println!("Status of device {id}: {status}"),
                    Err(e) => println!("{e}"),
                }
            }
            "4" => {
                println!("Device Statuses:");
                for (id, status) in registry.enumerate() {
                    println!("Device ID: {id}, Status: {status}");
                }
            }
            "5" => break,
            _ => println!("Invalid choice, please try again."),
        }
    }

    Ok(())
}
