use crate::{CliResult, output};

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use serde::Serialize;
use tb_board::{SearchDebouncer, SearchState};
use tb_gateway::SearchSource;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Feed each input line to a debouncer as if typed, writing every settled
/// result as one JSON line. End of input flushes a pending search.
///
/// Returns the number of result lines written.
pub async fn run<S, R, W>(
    source: Arc<S>,
    window: Duration,
    input: R,
    output: &mut W,
) -> CliResult<usize>
where
    S: SearchSource,
    S::Item: Serialize + PartialEq,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut debouncer = SearchDebouncer::new(source, window);
    let mut rx = debouncer.subscribe();
    let mut lines = input.lines();
    let mut last_query = None;
    let mut printer = Printer::default();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    debouncer.search(&line);
                    last_query = Some(line);
                }
                None => break,
            },
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                printer.emit(&state, output).await?;
            }
        }
    }

    if let Some(query) = last_query
        && debouncer.is_pending()
    {
        debug!("End of input, flushing search for '{query}'");
        debouncer.search_now(&query);
        let query = query.trim().to_string();
        let settled = rx
            .wait_for(|s| {
                matches!(s, SearchState::Results { .. } | SearchState::Failed { .. })
                    && s.query() == Some(query.as_str())
            })
            .await
            .map(|state| state.clone());
        if let Ok(state) = settled {
            printer.emit(&state, output).await?;
        }
    }

    debouncer.shutdown();
    Ok(printer.written)
}

struct Printer<T> {
    last: Option<SearchState<T>>,
    written: usize,
}

impl<T> Default for Printer<T> {
    fn default() -> Self {
        Self {
            last: None,
            written: 0,
        }
    }
}

impl<T: Serialize + PartialEq + Clone> Printer<T> {
    async fn emit<W: AsyncWrite + Unpin>(
        &mut self,
        state: &SearchState<T>,
        output: &mut W,
    ) -> CliResult<()> {
        if self.last.as_ref() == Some(state) {
            return Ok(());
        }
        let Some(line) = output::search_state(state) else {
            return Ok(());
        };

        let mut bytes = serde_json::to_vec(&line)?;
        bytes.push(b'\n');
        output.write_all(&bytes).await?;
        output.flush().await?;

        self.last = Some(state.clone());
        self.written += 1;
        Ok(())
    }
}
