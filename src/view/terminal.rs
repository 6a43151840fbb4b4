use super::SearchView;
use crate::fetcher::types::Product;

use parking_lot::Mutex;
use std::io::Write;

pub const NO_RESULTS: &str = "No results found";
pub const LOADING: &str = "Searching...";

/// Renders a result list, one `  [<id>] <name>` line per product.
pub fn render_results(products: &[Product]) -> String {
    if products.is_empty() {
        return NO_RESULTS.to_string();
    }

    products
        .iter()
        .map(|product| format!("  [{}] {}", product.id, product.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct TerminalView<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_block(&self, text: &str) {
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write + Send> SearchView for TerminalView<W> {
    fn set_loading(&self, loading: bool) {
        if loading {
            self.write_block(LOADING);
        }
    }

    fn show_results(&self, products: &[Product]) {
        self.write_block(&render_results(products));
    }
}
