use orrery_engine::core::propagate;
use orrery_engine::{
    builtin_catalogue, Catalogue, CatalogueResult, ClockCommand, CommandQueue, InstanceBuffer,
    OrbitPath, OrbitPathSampler, PathBuffer, PropagatorConfig, RingSet, SimulationClock,
    SolarSystem, TickReport,
};

/// Floats per ring placement: center xyz, inner, outer, tilt quaternion xyzw.
pub const RING_FLOATS: usize = 9;

/// Owns one propagator and everything the host reads back from it.
///
/// The web crate keeps a single `thread_local!` runner and exports free
/// functions over it. All logic lives here so it can be tested natively.
pub struct OrreryRunner {
    config: PropagatorConfig,
    system: SolarSystem,
    clock: SimulationClock,
    commands: CommandQueue,
    sampler: OrbitPathSampler,
    paths: Vec<OrbitPath>,
    rings: RingSet,
    instances: InstanceBuffer,
    path_buffer: PathBuffer,
    ring_buffer: Vec<f32>,
    paths_visible: bool,
    last_tick: TickReport,
}

impl OrreryRunner {
    /// Build from a catalogue. Fails on the first invalid record.
    pub fn new(catalogue: &Catalogue, config: PropagatorConfig) -> CatalogueResult<Self> {
        let system = SolarSystem::from_catalogue(catalogue, &config)?;
        let rings = RingSet::from_catalogue(&catalogue.rings, &system)?;
        let clock = SimulationClock::from_config(&config);
        let sampler = OrbitPathSampler::from_config(&config);
        let last_tick = TickReport { julian_date: clock.julian_date(), delta_days: 0.0 };

        let mut runner = Self {
            config,
            system,
            clock,
            commands: CommandQueue::new(),
            sampler,
            paths: Vec::new(),
            rings,
            instances: InstanceBuffer::new(),
            path_buffer: PathBuffer::new(),
            ring_buffer: Vec::new(),
            paths_visible: false,
            last_tick,
        };
        runner.set_paths_visible(true);
        runner.rebuild_buffers();
        Ok(runner)
    }

    pub fn with_builtin(config: PropagatorConfig) -> CatalogueResult<Self> {
        Self::new(&builtin_catalogue(), config)
    }

    /// Queue a clock command. Applied at the start of the next tick.
    pub fn push_command(&mut self, command: ClockCommand) {
        self.commands.push(command);
    }

    /// Run one frame: apply commands, propagate, refresh paths, repack buffers.
    pub fn tick(&mut self, real_delta_seconds: f64) -> TickReport {
        self.commands.apply(&mut self.clock);
        self.last_tick = propagate::tick(&mut self.clock, &mut self.system, real_delta_seconds);

        if self.paths_visible {
            self.sampler.refresh(
                &self.system,
                &mut self.paths,
                self.last_tick.julian_date,
                self.config.path_resample_interval_days,
            );
        }
        self.rebuild_buffers();
        self.last_tick
    }

    /// Show or hide orbit paths. Showing resamples every path at the current time.
    pub fn set_paths_visible(&mut self, visible: bool) {
        if visible == self.paths_visible {
            return;
        }
        self.paths_visible = visible;
        if visible {
            self.paths = self.sampler.sample_all(&self.system, self.clock.julian_date());
        } else {
            self.paths.clear();
        }
        self.path_buffer.rebuild(&self.paths, &self.system);
    }

    fn rebuild_buffers(&mut self) {
        self.instances.rebuild(&self.system);
        if self.paths_visible {
            self.path_buffer.rebuild(&self.paths, &self.system);
        }
        self.ring_buffer.clear();
        for ring in self.rings.placements(&self.system) {
            let (c, q) = (ring.center, ring.tilt);
            self.ring_buffer.extend([
                c.x as f32,
                c.y as f32,
                c.z as f32,
                ring.inner_radius as f32,
                ring.outer_radius as f32,
                q.x as f32,
                q.y as f32,
                q.z as f32,
                q.w as f32,
            ]);
        }
    }

    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn last_tick(&self) -> TickReport {
        self.last_tick
    }

    pub fn paths_visible(&self) -> bool {
        self.paths_visible
    }

    pub fn julian_date(&self) -> f64 {
        self.clock.julian_date()
    }

    pub fn date_string(&self) -> String {
        self.clock.date().to_string()
    }

    pub fn rate(&self) -> f64 {
        self.clock.rate()
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn body_name(&self, index: u32) -> Option<&str> {
        self.system
            .iter()
            .nth(index as usize)
            .map(|body| body.name.as_str())
    }

    // ---- Pointer accessors for host-side buffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.instance_count()
    }

    pub fn path_vertices_ptr(&self) -> *const f32 {
        self.path_buffer.vertices_ptr()
    }

    pub fn path_vertex_count(&self) -> u32 {
        self.path_buffer.vertex_count()
    }

    pub fn path_spans_ptr(&self) -> *const u32 {
        self.path_buffer.spans_ptr()
    }

    pub fn path_count(&self) -> u32 {
        self.path_buffer.path_count()
    }

    pub fn rings_ptr(&self) -> *const f32 {
        self.ring_buffer.as_ptr()
    }

    pub fn ring_count(&self) -> u32 {
        (self.ring_buffer.len() / RING_FLOATS) as u32
    }
}
