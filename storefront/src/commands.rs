//! Shopper commands read from the terminal

use crate::routes::Route;
use crate::types::ProductId;
use std::str::FromStr;
use thiserror::Error;

/// Something the shopper typed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show a page
    Go(Route),
    /// Add a product from the listing to the cart
    Add(ProductId),
    /// Remove a product from the cart
    Remove(ProductId),
    /// Add one to a product's quantity
    Increase(ProductId),
    /// Subtract one from a product's quantity
    Decrease(ProductId),
    /// Empty the cart
    Clear,
    /// Fetch the listing again
    Reload,
    /// List the commands
    Help,
    /// Leave the storefront
    Quit,
}

/// Errors from parsing a command line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing was typed
    #[error("Type a command, or `help` to list them")]
    Empty,

    /// The first word is not a command
    #[error("Unknown command `{0}`, type `help` to list commands")]
    Unknown(String),

    /// The command needs an argument that was not given
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// What was expected
        argument: &'static str,
    },

    /// The product id is not a number
    #[error("`{0}` is not a product id")]
    InvalidId(String),
}

/// Shown for `help`
pub const HELP: &str = "\
Commands:
  products          show the product list
  cart              show the cart
  go <path>         show the page at a path (/ or /cart)
  add <id>          add a product to the cart
  remove <id>       remove a product from the cart
  inc <id>          add one to a product's quantity
  dec <id>          subtract one from a product's quantity
  clear             empty the cart
  reload            fetch the product list again
  help              show this message
  quit              leave the store";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };

        match name.to_ascii_lowercase().as_str() {
            "products" | "p" => Ok(Self::Go(Route::Products)),
            "cart" | "c" => Ok(Self::Go(Route::Cart)),
            "go" => words
                .next()
                .map(|path| Self::Go(Route::from_path(path)))
                .ok_or(CommandError::MissingArgument {
                    command: "go",
                    argument: "a path",
                }),
            "add" => product_id("add", words.next()).map(Self::Add),
            "remove" | "rm" => product_id("remove", words.next()).map(Self::Remove),
            "inc" | "+" => product_id("inc", words.next()).map(Self::Increase),
            "dec" | "-" => product_id("dec", words.next()).map(Self::Decrease),
            "clear" => Ok(Self::Clear),
            "reload" => Ok(Self::Reload),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

fn product_id(command: &'static str, word: Option<&str>) -> Result<ProductId, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument {
        command,
        argument: "a product id",
    })?;
    word.parse()
        .map_err(|_| CommandError::InvalidId(word.to_string()))
}
