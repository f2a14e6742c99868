use crate::core::router::{Area, Key, UiEvent};
use crate::core::shop::ShopApp;
use crate::domain::ports::{KeyValueStore, Notifier, Prompt, Surface};
use crate::domain::view::{Control, RowControl};
use crate::utils::error::{CartError, Result};
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  add ID        add a visible product to the cart
  inc ID        increase the quantity of a cart line
  dec ID        decrease the quantity of a cart line
  rm ID         remove a cart line
  clear         empty the cart (asks first)
  search [TEXT] filter products by name; no text shows everything
  enter         focus the first visible add button
  press         activate the focused button
  show          redraw products and cart
  total         print the cart total
  help          show this text
  quit          leave";

/// One line typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Increment(String),
    Decrement(String),
    Remove(String),
    Clear,
    Search(String),
    Enter,
    Press,
    Show,
    Total,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CartError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        let id = |name: &str| -> Result<String> {
            let id = rest.trim();
            if id.is_empty() {
                return Err(CartError::ValidationError {
                    message: format!("'{}' needs a product id", name),
                });
            }
            Ok(id.to_string())
        };

        match word.to_lowercase().as_str() {
            "add" => Ok(Command::Add(id("add")?)),
            "inc" | "+" => Ok(Command::Increment(id("inc")?)),
            "dec" | "-" => Ok(Command::Decrement(id("dec")?)),
            "rm" | "remove" => Ok(Command::Remove(id("rm")?)),
            "clear" => Ok(Command::Clear),
            // 保留原始輸入，修剪交給 router
            "search" | "/" => Ok(Command::Search(rest.to_string())),
            "enter" => Ok(Command::Enter),
            "press" => Ok(Command::Press),
            "show" | "ls" => Ok(Command::Show),
            "total" => Ok(Command::Total),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err(CartError::ValidationError {
                message: "Empty command".to_string(),
            }),
            other => Err(CartError::ValidationError {
                message: format!("Unknown command '{}', type 'help'", other),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Notice(String),
    Quit,
}

/// Turn a command into the UI event it stands for and hand it to the app.
///
/// Commands address controls that are currently displayed, the same way a
/// click can only land on something that was rendered.
pub async fn execute<K, V, N, P>(app: &mut ShopApp<K, V, N, P>, command: Command) -> Flow
where
    K: KeyValueStore,
    V: Surface,
    N: Notifier,
    P: Prompt,
{
    let event = match command {
        Command::Add(id) => match app.product_view().add_control(&id) {
            Some(control) => click(Area::Products, control),
            None => return Flow::Notice(format!("No visible product '{}'", id)),
        },
        Command::Increment(id) => match cart_click(app, &id, RowControl::Increment) {
            Some(event) => event,
            None => return not_in_cart(&id),
        },
        Command::Decrement(id) => match cart_click(app, &id, RowControl::Decrement) {
            Some(event) => event,
            None => return not_in_cart(&id),
        },
        Command::Remove(id) => match cart_click(app, &id, RowControl::Remove) {
            Some(event) => event,
            None => return not_in_cart(&id),
        },
        Command::Clear => UiEvent::ClearRequested,
        Command::Search(text) => UiEvent::SearchInput(text),
        Command::Enter => UiEvent::SearchKey(Key::Enter),
        Command::Press => match app.focused() {
            Some(control) => click(Area::Products, control),
            None => return Flow::Notice("Nothing is focused".to_string()),
        },
        Command::Show => {
            app.redraw_products();
            app.redraw_cart();
            return Flow::Continue;
        }
        Command::Total => {
            return Flow::Notice(format!("Total: {}", app.store().calculate_total()));
        }
        Command::Help => return Flow::Notice(HELP.to_string()),
        Command::Quit => return Flow::Quit,
    };

    app.handle(event).await;
    Flow::Continue
}

fn click(area: Area, control: &Control) -> UiEvent {
    UiEvent::Click {
        area,
        target: control.clone(),
    }
}

fn cart_click<K, V, N, P>(app: &ShopApp<K, V, N, P>, id: &str, which: RowControl) -> Option<UiEvent>
where
    K: KeyValueStore,
    V: Surface,
    N: Notifier,
    P: Prompt,
{
    app.cart_view()
        .control(id, which)
        .map(|control| click(Area::Cart, control))
}

fn not_in_cart(id: &str) -> Flow {
    Flow::Notice(format!("'{}' is not in the cart", id))
}
