use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::Duration;

/// Polls the terminal for input without blocking the runtime.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(100))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            });
        }

        // Nothing pending: yield so background requests can make progress
        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
