//=========================================================================
// Containment Runtime
//
// Threaded front end for the containment core.
//
// Architecture:
// ```text
//     RuntimeBuilder  ──build()──>  Runtime  ──start()──>  RuntimeHandle
//         │                           │
//         ├─ with_tps()               └─ spawns logic thread @ TPS
//         └─ with_channel_capacity()     commands in, notifications out
// ```
//
// The logic thread owns the [`GameCore`] exclusively. The host feeds it
// [`InputCommand`]s over a bounded channel and drains [`Notification`]s
// from a second channel; no shared state crosses the boundary.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::config::CoreConfig;
use crate::core::geometry::{GeometryQuery, Vec2};
use crate::core::input::InputCommand;
use crate::core::notify::Notification;
use crate::core::GameCore;

//=== CoreEvent ===========================================================

/// Events delivered from the host to the logic thread.
pub enum CoreEvent {
    /// A batch of input commands gathered by the host this frame.
    Commands(Vec<InputCommand>),
    /// The host is shutting down; the logic thread should exit.
    Shutdown,
}

//=== TickControl =========================================================
//
// Control flow for the logic loop. Each event-collection pass signals
// either to continue ticking or to terminate the loop.
//
enum TickControl {
    Continue,
    Exit,
}

//=== RuntimeBuilder ======================================================

/// Builder for configuring and constructing a [`Runtime`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
///
/// # Examples
///
/// ```no_run
/// use containment_engine::prelude::*;
///
/// let handle = RuntimeBuilder::new()
///     .with_tps(120.0)
///     .build(
///         CoreConfig::default(),
///         AabbQuery,
///         Vec2::ZERO,
///         Vec2::new(3.0, 3.0),
///     )
///     .start();
///
/// handle.send(InputCommand::PauseToggle);
/// handle.shutdown();
/// ```
pub struct RuntimeBuilder {
    tps: f64,
    channel_capacity: usize,
}

impl RuntimeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// The logic thread maintains this update rate with a fixed timestep
    /// loop; the core sees a constant `dt` of `1.0 / tps` seconds.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the command and notification channels.
    ///
    /// Larger values provide more buffering during frame spikes but
    /// increase memory usage.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Builds the runtime around a fresh [`GameCore`].
    pub fn build<Q>(
        self,
        config: CoreConfig,
        query: Q,
        region_center: Vec2,
        region_extents: Vec2,
    ) -> Runtime<Q>
    where
        Q: GeometryQuery + Send + 'static,
    {
        info!(
            "Building runtime (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        Runtime {
            core: GameCore::new(config, query, region_center, region_extents),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Runtime =============================================================

/// Containment runtime: a [`GameCore`] with its own logic thread.
///
/// Create via [`RuntimeBuilder`], then call [`Runtime::start`] to spawn
/// the thread and receive a [`RuntimeHandle`] for communication.
///
/// # Architecture
///
/// ```text
/// Host Thread                       Logic Thread (@ TPS)
///   RuntimeHandle ──Commands──►       GameCore::tick()
///                 ◄─Notifications──   drain_notifications()
/// ```
pub struct Runtime<Q: GeometryQuery + Send + 'static> {
    core: GameCore<Q>,
    tps: f64,
    channel_capacity: usize,
}

impl<Q: GeometryQuery + Send + 'static> Runtime<Q> {
    //--- start() ----------------------------------------------------------

    /// Spawns the logic thread and returns the host-side handle.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the command and notification channels
    /// 2. Spawns the logic thread ticking at the configured TPS
    /// 3. On [`CoreEvent::Shutdown`] or channel disconnect the loop exits
    ///
    /// Each tick gathers pending command batches, advances the core by a
    /// fixed `dt`, forwards its notifications, and sleeps off the
    /// remainder of the frame.
    pub fn start(self) -> RuntimeHandle {
        info!("Starting containment runtime (TPS: {})", self.tps);

        let (command_tx, command_rx) = bounded::<CoreEvent>(self.channel_capacity);
        let (notify_tx, notify_rx) = bounded::<Notification>(self.channel_capacity);

        let frame_duration = Duration::from_secs_f64(1.0 / self.tps);
        let dt = frame_duration.as_secs_f32();
        let mut core = self.core;

        let thread = thread::Builder::new()
            .name("containment-core".into())
            .spawn(move || {
                loop {
                    let frame_start = Instant::now();

                    //--- Step 1: Gather host events -----------------------
                    if let TickControl::Exit =
                        collect_core_events(&command_rx, &mut core, frame_duration)
                    {
                        info!("Logic thread exiting.");
                        break;
                    }

                    //--- Step 2: Advance the state machine ----------------
                    core.tick(dt);

                    //--- Step 3: Publish notifications --------------------
                    for note in core.drain_notifications() {
                        match notify_tx.try_send(note) {
                            Ok(()) => {}
                            Err(TrySendError::Full(note)) => {
                                warn!("Notification channel full, dropping {:?}", note);
                            }
                            Err(TrySendError::Disconnected(_)) => {
                                info!("Notification channel closed, logic thread exiting.");
                                return;
                            }
                        }
                    }

                    //--- Step 4: Maintain deterministic pacing ------------
                    let elapsed = frame_start.elapsed();
                    if elapsed < frame_duration {
                        thread::sleep(frame_duration - elapsed);
                    }
                }
            })
            .expect("failed to spawn logic thread");

        RuntimeHandle {
            commands: command_tx,
            notifications: notify_rx,
            thread: Some(thread),
        }
    }
}

//--- collect_core_events() -----------------------------------------------
//
// Feeds all host events received during this frame into the core.
// Returns a TickControl indicating whether to continue or exit.
//
fn collect_core_events<Q: GeometryQuery>(
    receiver: &Receiver<CoreEvent>,
    core: &mut GameCore<Q>,
    frame_duration: Duration,
) -> TickControl {
    // Wait for at least one event this frame
    match receiver.recv_timeout(frame_duration) {
        Ok(CoreEvent::Commands(batch)) => {
            for command in batch {
                core.push_command(command);
            }
        }
        Ok(CoreEvent::Shutdown) => return TickControl::Exit,
        Err(RecvTimeoutError::Disconnected) => return TickControl::Exit,
        Err(RecvTimeoutError::Timeout) => {}
    }

    // Drain additional events queued during this frame
    while let Ok(event) = receiver.try_recv() {
        match event {
            CoreEvent::Commands(batch) => {
                for command in batch {
                    core.push_command(command);
                }
            }
            CoreEvent::Shutdown => return TickControl::Exit,
        }
    }

    TickControl::Continue
}

//=== RuntimeHandle =======================================================

/// Host-side handle to a running containment runtime.
///
/// Dropping the handle disconnects the command channel, which terminates
/// the logic thread; call [`RuntimeHandle::shutdown`] for an explicit,
/// joined exit.
pub struct RuntimeHandle {
    commands: Sender<CoreEvent>,
    notifications: Receiver<Notification>,
    thread: Option<thread::JoinHandle<()>>,
}

impl RuntimeHandle {
    /// Sends a single command to the logic thread.
    ///
    /// Returns false if the logic thread has already exited or the
    /// channel is full.
    pub fn send(&self, command: InputCommand) -> bool {
        self.send_batch(vec![command])
    }

    /// Sends a batch of commands gathered this frame.
    pub fn send_batch(&self, batch: Vec<InputCommand>) -> bool {
        match self.commands.try_send(CoreEvent::Commands(batch)) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!("Command channel full, dropping batch");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Drains all notifications produced since the last call.
    pub fn poll_notifications(&self) -> Vec<Notification> {
        self.notifications.try_iter().collect()
    }

    /// Requests a clean exit and waits for the logic thread to finish.
    pub fn shutdown(mut self) {
        if self.commands.send(CoreEvent::Shutdown).is_err() {
            warn!("Logic thread already gone at shutdown");
        }
        self.join();
        info!("Runtime shutdown complete");
    }

    fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            match thread.join() {
                Ok(()) => info!("Logic thread terminated cleanly"),
                Err(e) => error!("Logic thread panicked: {:?}", e),
            }
        }
    }
}

impl Drop for RuntimeHandle {
    fn drop(&mut self) {
        let _ = self.commands.send(CoreEvent::Shutdown);
        self.join();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
