use crate::domain::ports::{Prompt, Surface};
use crate::domain::view::{CartView, Control, ProductView};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

pub const NO_PRODUCTS_TEXT: &str = "No products found.";
pub const EMPTY_CART_TEXT: &str = "Your cart is empty.";

/// Text surface. Every call prints the whole view again.
pub struct TerminalSurface<W: Write + Send> {
    out: W,
    currency: String,
}

impl TerminalSurface<std::io::Stdout> {
    pub fn stdout(currency: &str) -> Self {
        Self::new(std::io::stdout(), currency)
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    pub fn new(out: W, currency: &str) -> Self {
        Self {
            out,
            currency: currency.to_string(),
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn format_products(&self, view: &ProductView) -> String {
        let mut text = String::from("== Products ==\n");
        match view {
            ProductView::NoMatches => {
                text.push_str(NO_PRODUCTS_TEXT);
                text.push('\n');
            }
            ProductView::Cards(cards) => {
                for card in cards {
                    text.push_str(&format!(
                        "  [{}] {}  {} {}  <{}>\n",
                        card.id, card.name, card.price, self.currency, card.add.label
                    ));
                }
            }
        }
        text
    }

    pub fn format_cart(&self, view: &CartView) -> String {
        let mut text = String::from("== Cart ==\n");
        match view {
            CartView::Empty => {
                text.push_str(EMPTY_CART_TEXT);
                text.push('\n');
            }
            CartView::Lines { rows, .. } => {
                for row in rows {
                    text.push_str(&format!(
                        "  [{}] {}  {} {} x {} = {} {}  <{}> <{}> <{}>\n",
                        row.id,
                        row.name,
                        row.price,
                        self.currency,
                        row.qty,
                        row.subtotal,
                        self.currency,
                        row.decrement.label,
                        row.increment.label,
                        row.remove.label
                    ));
                }
            }
        }
        text.push_str(&format!("Total: {} {}\n", view.total(), self.currency));
        text
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> Surface for TerminalSurface<W> {
    fn show_products(&mut self, view: &ProductView) {
        let text = self.format_products(view);
        self.emit(&text);
    }

    fn show_cart(&mut self, view: &CartView) {
        let text = self.format_cart(view);
        self.emit(&text);
    }

    fn show_focus(&mut self, control: Option<&Control>) {
        let text = match control {
            Some(c) => format!(
                "Focus: <{}> on [{}] (type 'press')\n",
                c.label,
                c.product_id.as_deref().unwrap_or("?")
            ),
            None => "Focus: nothing to focus\n".to_string(),
        };
        self.emit(&text);
    }
}

/// Line-oriented stdin shared by the command loop and the confirmation
/// prompt.
#[derive(Clone)]
pub struct ConsoleInput {
    lines: Arc<Mutex<Lines<BufReader<Stdin>>>>,
}

impl ConsoleInput {
    pub fn stdin() -> Self {
        Self {
            lines: Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines())),
        }
    }

    /// Next input line, or `None` at end of input.
    pub async fn next_line(&self) -> Result<Option<String>> {
        let mut lines = self.lines.lock().await;
        Ok(lines.next_line().await?)
    }
}

/// Asks on the console. With `assume_yes` the question is skipped.
pub struct ConsolePrompt {
    input: ConsoleInput,
    assume_yes: bool,
}

impl ConsolePrompt {
    pub fn new(input: ConsoleInput, assume_yes: bool) -> Self {
        Self { input, assume_yes }
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[async_trait]
impl Prompt for ConsolePrompt {
    async fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{} [y/N] ", message);
        if let Err(e) = std::io::stdout().flush() {
            tracing::warn!("Failed to flush prompt: {}", e);
        }

        match self.input.next_line().await {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }
}
