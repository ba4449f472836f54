//! Command-line argument parsing for ferry.
//!
//! When invoked with no args (fy), ferry starts the workflow in the current directory.

use clap::Parser;
use std::path::PathBuf;

/// ferry - copy, move or remove files from an interactive picker
#[derive(Parser, Debug)]
#[command(name = "fy", author, version, about, long_about = None)]
pub struct Cli {
    /// Directory both pickers start in (defaults to CWD)
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "ferry=trace". RUST_LOG takes priority
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Generate a minimal default configuration and exit
    #[arg(long, conflicts_with = "init_full")]
    pub init: bool,

    /// Generate the full configuration with all options and exit
    #[arg(long)]
    pub init_full: bool,

    /// Print the default key bindings and exit
    #[arg(long)]
    pub keybinds: bool,
}

/// What the binary should do after parsing the arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Run,
    InitConfig { minimal: bool },
    PrintKeybinds,
}

impl Cli {
    pub fn action(&self) -> CliAction {
        if self.init || self.init_full {
            CliAction::InitConfig {
                minimal: !self.init_full,
            }
        } else if self.keybinds {
            CliAction::PrintKeybinds
        } else {
            CliAction::Run
        }
    }
}

pub const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  up                        ["k", "up"]
  down                      ["j", "down"]
  open                      ["l", "right", "enter"]
  back                      ["h", "left", "backspace"]
  toggle                    ["space"]
  advance                   ["tab"]
  confirm                   ["enter", "y"]      (removal prompt only)
  quit                      ["q", "esc", "ctrl+c"]

  Screens:
    Choose action           up/down to pick, open to confirm
    Choose sources          toggle marks entries, advance to continue
    Choose destination      open directories, advance to use the current one
    Confirm removal         confirm to remove, back or quit to cancel
    Result                  any key quits, otherwise exits after the delay

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x, meta+x
    Special:   " ", "space", "back", "enter", "esc", "tab"
"##;

pub fn print_keybinds() {
    println!("{}", KEYBINDS_TEXT);
}
