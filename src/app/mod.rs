pub mod events;
pub mod headless;
pub mod input;
pub mod render;
pub mod shutdown;
pub mod state;

pub use events::{AppEvent, Command};
pub use headless::{HeadlessReport, HeadlessRun};
pub use shutdown::ShutdownManager;
pub use state::App;

use anyhow::{anyhow, Result};
use crossterm::event;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{self, MissedTickBehavior};

use termlife_tui::Tui;

/// How long the input thread blocks before rechecking for shutdown.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl App {
    /// Runs the interactive loop until quit, a signal or a fatal terminal
    /// error.
    ///
    /// The pulse timer, the terminal reader and the signal listener only
    /// produce events; this loop is the single consumer and the only code
    /// that touches the simulation.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();

        let pulse = tokio::spawn(pulse_loop(tx.clone(), self.config.simulation.fps));
        let signals = tokio::spawn(signal_loop(tx.clone()));
        spawn_input_reader(tx, self.shutdown.clone())?;

        let result = self.event_loop(tui, &mut rx).await;

        self.shutdown.request_shutdown("event loop finished");
        pulse.abort();
        signals.abort();
        result
    }

    async fn event_loop(
        &mut self,
        tui: &mut Tui,
        rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        while self.running {
            let Some(event) = rx.recv().await else {
                break;
            };
            match event {
                AppEvent::Pulse => {
                    self.simulation.pulse();
                    tui.terminal.draw(|f| self.draw(f))?;
                }
                AppEvent::Input(input) => self.handle_input(input),
                AppEvent::Signal(name) => {
                    self.shutdown.set_exit_code(130);
                    self.quit(name);
                }
                AppEvent::Fatal(message) => {
                    self.shutdown.set_exit_code(1);
                    tracing::error!(%message, "Terminal error");
                    return Err(anyhow!("Quitting because of terminal error: {message}"));
                }
            }
        }
        Ok(())
    }
}

/// Emits a pulse `fps` times per second until the receiver is gone.
async fn pulse_loop(tx: UnboundedSender<AppEvent>, fps: u32) {
    let mut interval = time::interval(Duration::from_secs(1) / fps.max(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        if tx.send(AppEvent::Pulse).is_err() {
            break;
        }
    }
}

async fn signal_loop(tx: UnboundedSender<AppEvent>) {
    let name = wait_for_signal().await;
    tracing::info!(signal = name, "Signal received, initiating graceful shutdown...");
    let _ = tx.send(AppEvent::Signal(name));
}

#[cfg(unix)]
async fn wait_for_signal() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut term) => tokio::select! {
            _ = tokio::signal::ctrl_c() => "SIGINT",
            _ = term.recv() => "SIGTERM",
        },
        Err(e) => {
            tracing::warn!(error = %e, "Cannot listen for SIGTERM");
            tokio::signal::ctrl_c().await.ok();
            "SIGINT"
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> &'static str {
    tokio::signal::ctrl_c().await.ok();
    "Ctrl+C"
}

/// Reads terminal events on a plain thread, since `event::read` blocks.
/// A read error is forwarded as [`AppEvent::Fatal`] and ends the thread.
fn spawn_input_reader(tx: UnboundedSender<AppEvent>, shutdown: ShutdownManager) -> Result<()> {
    thread::Builder::new()
        .name("termlife-input".to_string())
        .spawn(move || {
            while !shutdown.is_shutdown_requested() && !tx.is_closed() {
                let ready = match event::poll(INPUT_POLL_INTERVAL) {
                    Ok(ready) => ready,
                    Err(e) => {
                        let _ = tx.send(AppEvent::Fatal(e.to_string()));
                        break;
                    }
                };
                if !ready {
                    continue;
                }
                match event::read() {
                    Ok(input) => {
                        if tx.send(AppEvent::Input(input)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(AppEvent::Fatal(e.to_string()));
                        break;
                    }
                }
            }
        })?;
    Ok(())
}
