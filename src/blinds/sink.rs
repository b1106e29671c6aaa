use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;
use tokio::sync::mpsc::UnboundedSender;

/// Destination for blind announcements.
///
/// Transport-agnostic: the timer task doesn't care whether a line ends up
/// on a terminal, a channel, or a WebSocket. An `Err` means the destination
/// is gone and nothing more should be sent to it.
#[async_trait::async_trait]
pub trait Sink: Send {
    async fn send(&mut self, line: &str) -> anyhow::Result<()>;
}

/// Any writer shared with other users of the same output,
/// such as the terminal front-end's prompt stream or stdout.
#[async_trait::async_trait]
impl<W> Sink for Arc<Mutex<W>>
where
    W: Write + Send,
{
    async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        let mut out = self.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{}", line)?;
        Ok(out.flush()?)
    }
}

#[async_trait::async_trait]
impl Sink for UnboundedSender<String> {
    async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        UnboundedSender::send(self, line.to_string())
            .map_err(|_| anyhow::anyhow!("alert channel closed"))
    }
}
