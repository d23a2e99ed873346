//! Line-oriented session: one command per line on stdin, each turned into an
//! [`Event`] for the API or into a read-only view of the current state.

use super::commands::print_browse;
use super::render::{print_messages, render_compare, render_detail};
use std::io::{BufRead, IsTerminal, Write};
use stylefinder::api::StyleFinderApi;
use stylefinder::commands::{CmdMessage, CmdResult};
use stylefinder::error::{Result, StyleError};
use stylefinder::state::Event;
use stylefinder::store::KeyValueStore;

const HELP: &str = "\
commands:
  tone <all|favorites|tone>   select a tone
  search <term>               search styles
  clear                       clear the search
  open <id> / close           open or close a style's detail
  purpose <medium>            presentation, website, app, lp, social
  apply <id> / reset          apply or reset the theme
  compare <id>                toggle a style in the comparison set
  uncompare-all               empty the comparison set
  fav <id>                    toggle a favorite
  list / show / doc           print the grid, the open detail or its document
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Dispatch(Event),
    List,
    Show,
    Doc,
    Help,
    Quit,
}

fn required(arg: &str, usage: &str) -> Result<String> {
    if arg.is_empty() {
        Err(StyleError::Api(format!("usage: {}", usage)))
    } else {
        Ok(arg.to_string())
    }
}

/// Parses one input line. Blank lines parse to `None`.
fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "tone" => SessionCommand::Dispatch(Event::FilterSelected(
            required(arg, "tone <id>")?.parse()?,
        )),
        "search" => SessionCommand::Dispatch(Event::SearchChanged(arg.to_string())),
        "clear" => SessionCommand::Dispatch(Event::SearchCleared),
        "open" => SessionCommand::Dispatch(Event::DetailOpened(required(arg, "open <id>")?)),
        "close" => SessionCommand::Dispatch(Event::DetailClosed),
        "purpose" => SessionCommand::Dispatch(Event::PurposeChanged(
            required(arg, "purpose <medium>")?.parse()?,
        )),
        "apply" => SessionCommand::Dispatch(Event::ThemeApplied(required(arg, "apply <id>")?)),
        "reset" => SessionCommand::Dispatch(Event::ThemeReset),
        "compare" => {
            SessionCommand::Dispatch(Event::CompareToggled(required(arg, "compare <id>")?))
        }
        "uncompare-all" => SessionCommand::Dispatch(Event::CompareCleared),
        "fav" => SessionCommand::Dispatch(Event::FavoriteToggled(required(arg, "fav <id>")?)),
        "list" => SessionCommand::List,
        "show" => SessionCommand::Show,
        "doc" => SessionCommand::Doc,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(StyleError::Api(format!("Unknown command: {}", other))),
    };
    Ok(Some(command))
}

pub fn run<S: KeyValueStore, R: BufRead>(api: &mut StyleFinderApi<S>, input: R) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    if interactive {
        println!("{}", HELP);
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_line(&line).and_then(|command| match command {
            Some(command) => execute(api, command),
            None => Ok(true),
        }) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
        }
    }
    Ok(())
}

/// Runs one command. Returns `false` when the session should end.
fn execute<S: KeyValueStore>(api: &mut StyleFinderApi<S>, command: SessionCommand) -> Result<bool> {
    match command {
        SessionCommand::Dispatch(event) => {
            let result = api.dispatch(event)?;
            print_result(api, &result);
        }
        SessionCommand::List => print_browse(api),
        SessionCommand::Show => match api.detail() {
            Some(detail) => print!("{}", render_detail(&detail, false)),
            None => print_messages(&[CmdMessage::info("詳細は開かれていません")]),
        },
        SessionCommand::Doc => match api.detail() {
            Some(detail) => println!("{}", detail.document),
            None => print_messages(&[CmdMessage::info("詳細は開かれていません")]),
        },
        SessionCommand::Help => println!("{}", HELP),
        SessionCommand::Quit => return Ok(false),
    }
    Ok(true)
}

fn print_result<S: KeyValueStore>(api: &StyleFinderApi<S>, result: &CmdResult) {
    if !result.tone_counts.is_empty() {
        print_browse(api);
        return;
    }
    if let Some(detail) = &result.detail {
        print!("{}", render_detail(detail, false));
    }
    if let Some(view) = &result.compare {
        print!("{}", render_compare(view));
    }
    print_messages(&result.messages);
}
