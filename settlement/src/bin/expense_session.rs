//! Interactive expense session over stdin

use anyhow::Context;
use ledger_core::{Attachment, ExpenseForm};
use settlement::{Config, ExpenseSession};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Commands:
  add <date>;<item>;<beneficiary>;<payer>;<amount>
  attach <name> [<name> ...]
  list
  summary [--json]
  metrics
  help
  quit";

/// Session command
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Add(ExpenseForm),
    Attach(Vec<String>),
    List,
    Summary { json: bool },
    Metrics,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "add" => {
                let mut fields = rest.splitn(5, ';').map(str::to_string);
                let mut next = || fields.next().unwrap_or_default();
                Some(Command::Add(ExpenseForm {
                    date: next(),
                    item: next(),
                    beneficiary: next(),
                    payer: next(),
                    amount: next(),
                }))
            }
            "attach" => Some(Command::Attach(
                rest.split_whitespace().map(str::to_string).collect(),
            )),
            "list" => Some(Command::List),
            "summary" => Some(Command::Summary {
                json: rest == "--json",
            }),
            "metrics" => Some(Command::Metrics),
            "help" => Some(Command::Help),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

fn load_config() -> anyhow::Result<Config> {
    match std::env::var("SETTLEMENT_CONFIG") {
        Ok(path) => Config::from_file(&path).with_context(|| format!("loading {}", path)),
        Err(_) => Config::from_env().context("reading configuration from environment"),
    }
}

/// Run one command; returns false when the session should end
fn execute(session: &mut ExpenseSession, command: Command) -> anyhow::Result<bool> {
    match command {
        Command::Add(form) => {
            let added = session
                .add_expense(&form)
                .map(|r| (r.item.clone(), r.payer.clone(), r.amount));
            if let Some((item, payer, amount)) = added {
                println!(
                    "added: {} | {} | {}",
                    item,
                    payer,
                    session.report().format_amount(amount)
                );
            }
        }
        Command::Attach(names) => {
            session.add_attachments(names.into_iter().map(Attachment::new));
        }
        Command::List => {
            let report = session.report();
            print!("{}", report.render_expenses(session.ledger().records()));
            print!("{}", report.render_attachments(session.ledger().pending_attachments()));
        }
        Command::Summary { json: true } => println!("{}", session.summary_json()?),
        Command::Summary { json: false } => {
            print!("{}", session.report().render_summary(&session.get_summary()));
        }
        Command::Metrics => {
            if let Some(text) = session.render_metrics()? {
                print!("{}", text);
            }
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config()?;
    let mut session = ExpenseSession::with_metrics(config)?;
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Some(command) => {
                        if !execute(&mut session, command)? {
                            break;
                        }
                    }
                    None => println!("{}", HELP),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    tracing::info!(records = session.ledger().len(), "Expense session ended");
    Ok(())
}
