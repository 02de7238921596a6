//! Interactive command loop
//!
//! Every line is a shopping command unless it starts with `:`, in which case
//! it is one of the meta commands below.

use anyhow::{anyhow, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use basket_core::messages::Messages;
use basket_core::{Language, Session};

use crate::display;

const HELP: &str = "\
Commands are plain text, e.g. \"add 2 milk\", \"añadir 3 leche\", \"supprimer pain\".

  :list           show the list
  :total          show the total
  :suggest        show suggestions
  :add <item>     add one item by name
  :inc <item>     increase quantity by one
  :dec <item>     decrease quantity by one
  :rm <item>      remove an item
  :lang <tag>     switch display language (en, es, fr)
  :help           show this help
  :quit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum MetaCommand {
    List,
    Total,
    Suggest,
    Add(String),
    Inc(String),
    Dec(String),
    Remove(String),
    Lang(String),
    Help,
    Quit,
}

impl FromStr for MetaCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim().trim_start_matches(':');
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let require = |arg: &str| {
            if arg.is_empty() {
                Err(anyhow!(":{name} needs an argument"))
            } else {
                Ok(arg.to_string())
            }
        };

        match name {
            "list" | "l" => Ok(Self::List),
            "total" => Ok(Self::Total),
            "suggest" => Ok(Self::Suggest),
            "add" => Ok(Self::Add(require(arg)?)),
            "inc" => Ok(Self::Inc(require(arg)?)),
            "dec" => Ok(Self::Dec(require(arg)?)),
            "rm" => Ok(Self::Remove(require(arg)?)),
            "lang" => Ok(Self::Lang(require(arg)?)),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(anyhow!("Unknown command :{other} (try :help)")),
        }
    }
}

/// Run the loop until `:quit` or end of input
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", Messages::for_language(session.language()).title)?;
    writeln!(out, "Type :help for commands.")?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(':') {
            match line.parse::<MetaCommand>() {
                Ok(MetaCommand::Quit) => break,
                Ok(meta) => run_meta(session, meta, out)?,
                Err(e) => writeln!(out, "{e}")?,
            }
            continue;
        }

        let result = session.handle_command(line).map(|_| ());
        display::write_outcome(out, session.language(), line, &result)?;
        if result.is_ok() {
            display::write_list(out, session)?;
        }
    }

    debug!("Leaving interactive loop");
    Ok(())
}

fn run_meta<W: Write>(session: &mut Session, meta: MetaCommand, out: &mut W) -> Result<()> {
    let messages = Messages::for_language(session.language());

    let result = match meta {
        MetaCommand::List => return display::write_list(out, session),
        MetaCommand::Total => {
            writeln!(out, "{}: {:.2}", messages.total, session.total())?;
            return Ok(());
        }
        MetaCommand::Suggest => {
            let suggestions = session.suggestions(&mut rand::thread_rng());
            return display::write_suggestions(out, &suggestions, session.language());
        }
        MetaCommand::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(());
        }
        MetaCommand::Lang(tag) => {
            match Language::from_str(&tag) {
                Ok(language) => {
                    let set = session.set_language(language);
                    writeln!(out, "{} ({})", set.native_name(), set)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            }
            return Ok(());
        }
        MetaCommand::Add(name) => session.add_item(&name, 1).map(|_| ()),
        MetaCommand::Inc(name) => session.adjust_quantity(&name, 1).map(|_| ()),
        MetaCommand::Dec(name) => session.adjust_quantity(&name, -1).map(|_| ()),
        MetaCommand::Remove(name) => {
            session.remove_item(&name);
            Ok(())
        }
        MetaCommand::Quit => return Ok(()),
    };

    match result {
        Ok(()) => display::write_list(out, session),
        Err(e) => {
            writeln!(out, "✗ {}", messages.error(&e))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::with_defaults().unwrap();
        let mut out = Vec::new();
        run(&mut session, Cursor::new(script.to_string()), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_meta_command_parsing() {
        assert_eq!(":list".parse::<MetaCommand>().unwrap(), MetaCommand::List);
        assert_eq!(
            ":inc  milk ".parse::<MetaCommand>().unwrap(),
            MetaCommand::Inc("milk".to_string())
        );
        assert_eq!(
            ":rm pan integral".parse::<MetaCommand>().unwrap(),
            MetaCommand::Remove("pan integral".to_string())
        );
        assert!(":inc".parse::<MetaCommand>().is_err());
        assert!(":frobnicate".parse::<MetaCommand>().is_err());
    }

    #[test]
    fn test_commands_update_list() {
        let (session, output) = run_script("add 2 milk\nadd bread\n");

        assert_eq!(session.list().len(), 2);
        assert!(output.contains("Processed command: add 2 milk"));
        assert!(output.contains("Total: 10.47"));
    }

    #[test]
    fn test_errors_are_localized() {
        let (session, output) = run_script("comprar pollo\n");

        assert!(session.list().is_empty());
        assert!(output.contains("Lo siento, \"pollo\" está agotado."));
    }

    #[test]
    fn test_buttons() {
        let (session, output) = run_script("add milk\n:inc milk\n:dec milk\n:dec milk\n:add pumpkin\n:rm leche\n");

        assert_eq!(session.list().len(), 1);
        assert!(!output.contains('✗'));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run_script("add milk\n:quit\nadd bread\n");
        assert_eq!(session.list().len(), 1);
    }

    #[test]
    fn test_lang_switch() {
        let (session, output) = run_script(":lang fr\n:list\n:lang xx\n");

        assert_eq!(session.language(), Language::Fr);
        assert!(output.contains("Liste de Courses"));
        assert!(output.contains("Votre liste est vide."));
        assert!(output.contains("xx"));
    }
}
