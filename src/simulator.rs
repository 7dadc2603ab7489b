use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, error, info, warn};

use crate::config::SimulatorConfig;
use crate::entities::{Entity, EntityFactory, EntityId, EntityRegistry, EntityType, SubmarineCommand};
use crate::host::{HeadlessHost, HostEngine, HostGuard};
use crate::interfaces::{InterfaceContext, SimInterface};
use crate::scheduler::{FixedStepScheduler, FrameStats, SyncGate};
use crate::time::{MonotonicClock, SimClock, TimeSource};
use crate::utils::{Pose, Result, SimError};
use crate::world::WorldSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Uninitialized,
    Running,
    /// Terminal. A stopped simulator cannot be initialised again.
    Stopped,
}

/// Owns the clock, the entities and the scheduler, and drives them from the
/// host's frame loop.
///
/// ```no_run
/// use subsim::{Simulator, SimulatorConfig, WorldSource};
///
/// let mut sim = Simulator::new(SimulatorConfig::default());
/// sim.init(WorldSource::Default)?;
/// while sim.is_running() {
///     sim.update();
/// }
/// # Ok::<(), subsim::SimError>(())
/// ```
pub struct Simulator {
    config: SimulatorConfig,
    state: RunState,
    clock: Box<dyn TimeSource>,
    host: Option<Box<dyn HostEngine>>,
    guard: Option<HostGuard>,
    factory: EntityFactory,
    registry: EntityRegistry,
    submarine: Option<EntityId>,
    scheduler: Option<FixedStepScheduler>,
    sync_gate: SyncGate,
    stats: FrameStats,
    interfaces: Vec<Box<dyn SimInterface>>,
    start_time: SimClock,
    command_tx: Sender<SubmarineCommand>,
    command_rx: Receiver<SubmarineCommand>,
}

impl Simulator {
    /// A simulator on the system monotonic clock with a headless host.
    pub fn new(config: SimulatorConfig) -> Self {
        let (command_tx, command_rx) = crossbeam_channel::unbounded();
        Self {
            sync_gate: SyncGate::new(config.publish_rate_hz),
            stats: FrameStats::new(config.stats_interval_s),
            config,
            state: RunState::Uninitialized,
            clock: Box::new(MonotonicClock::new()),
            host: Some(Box::new(HeadlessHost::new())),
            guard: None,
            factory: EntityFactory::new(),
            registry: EntityRegistry::new(),
            submarine: None,
            scheduler: None,
            interfaces: Vec::new(),
            start_time: SimClock::ZERO,
            command_tx,
            command_rx,
        }
    }

    pub fn with_clock(mut self, clock: Box<dyn TimeSource>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_host(mut self, host: Box<dyn HostEngine>) -> Self {
        self.host = Some(host);
        self
    }

    /// Open the host, build the world and start the clock.
    ///
    /// On failure everything acquired so far is released and the simulator
    /// stays uninitialised.
    pub fn init(&mut self, source: WorldSource) -> Result<()> {
        if self.state != RunState::Uninitialized {
            return Err(SimError::InvalidState(format!(
                "init called while {:?}",
                self.state
            )));
        }
        if let Err(e) = self.config.validate() {
            error!("Simulator init failed: invalid config: {}", e);
            return Err(e);
        }

        let guard = match HostGuard::open(&mut self.host) {
            Ok(guard) => guard,
            Err(e) => {
                error!("Simulator init failed: host engine: {}", e);
                return Err(e);
            }
        };

        let submarine = match self.build_world(&source) {
            Ok(id) => id,
            Err(e) => {
                error!("Simulator init failed: world: {}", e);
                self.registry.clear();
                self.factory.reset();
                self.host = guard.release();
                return Err(e);
            }
        };

        let now = self.clock.now();
        self.start_time = now;
        self.scheduler = Some(FixedStepScheduler::new(&self.config.scheduler, now));
        self.sync_gate = SyncGate::new(self.config.publish_rate_hz);
        self.stats = FrameStats::new(self.config.stats_interval_s);
        self.submarine = Some(submarine);
        self.guard = Some(guard);
        self.state = RunState::Running;

        info!(
            "Simulator running: {} entities, {} Hz steps, {} Hz publish",
            self.registry.len(),
            self.config.scheduler.step_rate_hz,
            self.config.publish_rate_hz
        );
        Ok(())
    }

    fn build_world(&mut self, source: &WorldSource) -> Result<EntityId> {
        let world = source.resolve()?;
        world.populate(&mut self.factory, &mut self.registry)?;
        self.registry
            .find_by_type(EntityType::Submarine)
            .next()
            .map(|e| e.id())
            .ok_or(SimError::MissingSubmarine)
    }

    /// Run one frame: pump the host, step the world, refresh interfaces and
    /// render.
    ///
    /// Returns the number of simulation steps taken. Does nothing unless
    /// running; stops the simulator if the host reports it has closed.
    pub fn update(&mut self) -> u32 {
        if self.state != RunState::Running {
            return 0;
        }
        let (Some(guard), Some(scheduler)) = (self.guard.as_mut(), self.scheduler.as_mut()) else {
            return 0;
        };

        if !guard.pump() {
            info!("Host engine closed, stopping simulation");
            guard.close();
            self.state = RunState::Stopped;
            return 0;
        }

        while let Ok(command) = self.command_rx.try_recv() {
            if let Some(sub) = self
                .submarine
                .and_then(|id| self.registry.get_mut(id))
                .and_then(Entity::as_submarine_mut)
            {
                sub.apply(command);
            }
        }

        let now = self.clock.now();
        let steps = scheduler.tick(now, &mut self.registry);

        let stepped = scheduler.stepped_time();
        if self.sync_gate.poll(stepped) {
            let ctx = InterfaceContext::new(&self.registry, stepped.to_seconds())
                .with_submarine(self.submarine);
            for interface in self.interfaces.iter_mut() {
                interface.update(&ctx);
            }
        }

        guard.render(&self.registry);
        self.stats.record(now, steps);
        steps
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Stop and release everything. Safe to call any number of times.
    pub fn deinit(&mut self) {
        if self.state == RunState::Running {
            info!(
                "Stopping simulator after {} steps",
                self.stats.total_steps()
            );
        }
        if let Some(mut guard) = self.guard.take() {
            guard.close();
        }
        self.interfaces.clear();
        self.registry.clear();
        self.factory.reset();
        self.submarine = None;
        self.scheduler = None;
        self.state = RunState::Stopped;
    }

    /// Attach an interface; it is refreshed at the configured publish rate.
    pub fn add_interface(&mut self, interface: Box<dyn SimInterface>) {
        debug!("Adding interface '{}'", interface.name());
        self.interfaces.push(interface);
    }

    pub fn entity_pose(&self, name: &str) -> Option<Pose> {
        self.registry.find(name).map(|e| e.pose())
    }

    /// Returns false if no entity has that name.
    pub fn set_entity_pose(&mut self, name: &str, pose: Pose) -> bool {
        match self.registry.find_mut(name) {
            Some(entity) => {
                entity.set_pose(pose);
                true
            }
            None => false,
        }
    }

    pub fn set_forward_speed(&mut self, metres_per_second: f64) -> bool {
        self.command(SubmarineCommand::ForwardSpeed(metres_per_second))
    }

    pub fn set_yaw_speed(&mut self, radians_per_second: f64) -> bool {
        self.command(SubmarineCommand::YawSpeed(radians_per_second))
    }

    pub fn set_depth_speed(&mut self, metres_per_second: f64) -> bool {
        self.command(SubmarineCommand::DepthSpeed(metres_per_second))
    }

    pub fn set_pitch_speed(&mut self, radians_per_second: f64) -> bool {
        self.command(SubmarineCommand::PitchSpeed(radians_per_second))
    }

    fn command(&mut self, command: SubmarineCommand) -> bool {
        let sub = self
            .submarine
            .and_then(|id| self.registry.get_mut(id))
            .and_then(Entity::as_submarine_mut);
        match sub {
            Some(sub) => {
                sub.apply(command);
                true
            }
            None => {
                warn!("Ignoring {:?}: no submarine", command);
                false
            }
        }
    }

    /// Sender for commands applied at the start of the next update. Can be
    /// handed to another thread.
    pub fn command_sender(&self) -> Sender<SubmarineCommand> {
        self.command_tx.clone()
    }

    /// Seconds between init and the most recent update.
    pub fn sim_time(&self) -> f64 {
        match &self.scheduler {
            Some(scheduler) => SimClock::diff(scheduler.last_tick(), self.start_time).to_seconds(),
            None => 0.0,
        }
    }

    /// Simulated time covered by the steps actually taken.
    pub fn stepped_time(&self) -> SimClock {
        self.scheduler
            .as_ref()
            .map(FixedStepScheduler::stepped_time)
            .unwrap_or(SimClock::ZERO)
    }

    pub fn submarine(&self) -> Option<&Entity> {
        self.submarine.and_then(|id| self.registry.get(id))
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn scheduler(&self) -> Option<&FixedStepScheduler> {
        self.scheduler.as_ref()
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn publishes(&self) -> u64 {
        self.sync_gate.publishes()
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }
}

impl Drop for Simulator {
    fn drop(&mut self) {
        self.deinit();
    }
}
