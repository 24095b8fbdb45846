//! Watch session: resolve paths read line by line against a hot-reloaded
//! route table.
//!
//! # Design Decisions
//! - Input is read on a detached OS thread feeding a channel; a blocked read
//!   never holds up shutdown
//! - Pending reloads are applied before pending lines
//! - Ends on shutdown, end of input, or a read error

use std::future::Future;
use std::io::{self, BufRead, Write};
use std::thread;

use tokio::sync::mpsc;

use crate::config::{RouteConfig, RouterConfig};
use crate::routing::output::MatchOutput;
use crate::routing::{Router, SharedRouter};

/// Read lines from `reader` on a dedicated thread.
///
/// The channel closes at end of input or after the first read error.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::UnboundedReceiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        for line in reader.lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

/// Run the session until `shutdown` resolves or input ends.
pub async fn run<W, F>(
    shared: &SharedRouter<RouteConfig>,
    mut lines: mpsc::UnboundedReceiver<io::Result<String>>,
    mut updates: mpsc::UnboundedReceiver<RouterConfig>,
    shutdown: F,
    out: &mut W,
) -> io::Result<()>
where
    W: Write,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            Some(config) = updates.recv() => {
                shared.replace(Router::from_config(config.routes));
            }
            line = lines.recv() => {
                let Some(line) = line else { break };
                let line = line?;
                let path = line.trim();
                if path.is_empty() {
                    continue;
                }
                shared.resolve_with(path, |result| MatchOutput::new(path, result).write_line(out))?;
                out.flush()?;
            }
        }
    }

    tracing::info!("Watch stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};
    use std::sync::mpsc as std_mpsc;
    use std::time::Duration;
    use tokio::sync::oneshot;

    /// A reader that blocks until its sender is dropped, like an idle terminal.
    struct IdleInput(std_mpsc::Receiver<()>);

    impl Read for IdleInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            let _ = self.0.recv();
            Ok(0)
        }
    }

    fn route(pattern: &str, handler: &str) -> RouteConfig {
        RouteConfig {
            pattern: pattern.to_string(),
            handler: handler.to_string(),
            name: None,
        }
    }

    #[tokio::test]
    async fn test_shutdown_while_read_is_blocked() {
        let shared = SharedRouter::new(Router::from_config(vec![route("/cert/:id", "cert_detail")]));
        let (input_guard, input) = std_mpsc::channel::<()>();
        let lines = spawn_line_reader(BufReader::new(IdleInput(input)));
        let (_update_tx, updates) = mpsc::unbounded_channel();

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            let _ = stop_tx.send(());
        });

        let mut out = Vec::new();
        let stopped = tokio::time::timeout(
            Duration::from_secs(5),
            run(&shared, lines, updates, async {
                let _ = stop_rx.await;
            }, &mut out),
        )
        .await;

        assert!(matches!(stopped, Ok(Ok(()))));
        assert!(out.is_empty());
        drop(input_guard);
    }

    #[tokio::test]
    async fn test_reload_applies_before_pending_lines() {
        let shared = SharedRouter::new(Router::from_config(vec![route("/cert/:id", "cert_detail")]));
        let lines = spawn_line_reader(Cursor::new("/cert/7/children\n\n  /cert/7  \n"));

        let (update_tx, updates) = mpsc::unbounded_channel();
        update_tx
            .send(RouterConfig {
                routes: vec![route("/cert/:id/children", "cert_children")],
                ..Default::default()
            })
            .unwrap();

        let mut out = Vec::new();
        run(&shared, lines, updates, std::future::pending(), &mut out)
            .await
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"handler\":\"cert_children\""));
        assert!(lines[0].contains("\"params\":{\"id\":\"7\"}"));
        assert_eq!(lines[1], "{\"path\":\"/cert/7\",\"route\":null,\"params\":{}}");
    }

    #[tokio::test]
    async fn test_line_reader_closes_at_end_of_input() {
        let mut lines = spawn_line_reader(Cursor::new("a\nb\n"));
        assert_eq!(lines.recv().await.unwrap().unwrap(), "a");
        assert_eq!(lines.recv().await.unwrap().unwrap(), "b");
        assert!(lines.recv().await.is_none());
    }
}
