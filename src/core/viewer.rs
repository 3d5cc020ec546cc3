use crate::core::render;
use crate::core::session::ViewerSession;
use crate::domain::model::CostCenter;
use crate::domain::ports::InventorySource;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Drives the load-index, select, fetch, filter, render loop against an
/// `InventorySource`.
pub struct Viewer<S: InventorySource> {
    source: S,
    session: ViewerSession,
}

impl<S: InventorySource> Viewer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            session: ViewerSession::new(),
        }
    }

    pub fn session(&self) -> &ViewerSession {
        &self.session
    }

    pub async fn load_index(&self) -> Result<Vec<CostCenter>> {
        tracing::info!("Loading cost center index");
        let centers = self.source.fetch_cost_centers().await?;
        tracing::info!("Index lists {} cost centers", centers.len());
        Ok(centers)
    }

    /// Fetch the dataset for `cost_center` and replace the session contents.
    /// On failure the session is cleared so stale rows never outlive a
    /// failed selection.
    pub async fn select(&mut self, cost_center: CostCenter) -> Result<usize> {
        tracing::info!("Loading inventory for cost center {}", cost_center);
        match self.source.fetch_inventory(cost_center).await {
            Ok(items) => {
                let count = items.len();
                self.session.load(cost_center, items);
                tracing::info!("Loaded {} rows for cost center {}", count, cost_center);
                Ok(count)
            }
            Err(e) => {
                self.session.clear();
                Err(e)
            }
        }
    }

    pub fn set_filter(&mut self, term: &str) {
        self.session.set_filter(term);
    }

    pub fn render(&self) -> String {
        render::render_session(&self.session)
    }

    /// One-shot mode: fetch the index, select a cost center, apply the
    /// optional filter term, and return the rendered table.
    pub async fn run_once(&mut self, cost_center: CostCenter, term: Option<&str>) -> Result<String> {
        let centers = self.load_index().await?;
        if !centers.contains(&cost_center) {
            tracing::warn!(
                "Cost center {} is not listed in the index; attempting the fetch anyway",
                cost_center
            );
        }

        if let Some(term) = term {
            self.session.set_filter(term);
        }

        self.select(cost_center).await?;
        Ok(self.render())
    }

    /// Interactive mode: the CLI rendition of the original page. Prints the
    /// cost center list, then reads commands until EOF or `quit`:
    /// a number selects a cost center, `find <term>` (or `/term`) filters the
    /// loaded rows, `find` alone clears the filter, `list` reprints the index.
    /// A failed dataset fetch reports the error and keeps the loop alive.
    pub async fn run_interactive<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let centers = self.load_index().await?;
        writeln!(output, "{}", render::render_cost_centers(&centers))?;
        writeln!(output, "{}", render::SELECT_PROMPT)?;

        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let command = line.trim();

            if command.is_empty() {
                write!(output, "> ")?;
                output.flush()?;
                continue;
            }

            if matches!(command, "quit" | "exit" | "q") {
                break;
            }

            if command == "list" {
                writeln!(output, "{}", render::render_cost_centers(&centers))?;
            } else if let Some(term) = command.strip_prefix('/') {
                self.session.set_filter(term);
                writeln!(output, "{}", self.render())?;
            } else if command == "find" {
                self.session.set_filter("");
                writeln!(output, "{}", self.render())?;
            } else if let Some(term) = command.strip_prefix("find ") {
                self.session.set_filter(term);
                writeln!(output, "{}", self.render())?;
            } else if let Ok(id) = command.parse::<u32>() {
                let cost_center = CostCenter(id);
                writeln!(output, "Loading inventory for cost center {}...", cost_center)?;
                match self.select(cost_center).await {
                    Ok(_) => writeln!(output, "{}", self.render())?,
                    Err(e) => {
                        tracing::error!("Dataset fetch failed: {}", e);
                        writeln!(output, "{}", e.user_friendly_message())?;
                    }
                }
            } else {
                writeln!(
                    output,
                    "Unrecognized command: '{}'. Enter a cost center number, 'find <term>', 'list' or 'quit'.",
                    command
                )?;
            }

            write!(output, "> ")?;
            output.flush()?;
        }

        Ok(())
    }
}
