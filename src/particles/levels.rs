/// Reservoir and basin liquid levels
///
/// Both levels move in whole particle volumes: admitting a particle debits
/// the reservoir by exactly the amount a landing particle credits the basin.
/// Levels accumulate tens of thousands of transfers, so they are kept in
/// double precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidLevels {
    reservoir: f64,
    basin: f64,
    particle_volume: f64,
}

impl LiquidLevels {
    pub fn new(reservoir: f32, particle_volume: f32) -> Self {
        Self {
            reservoir: f64::from(reservoir),
            basin: 0.0,
            particle_volume: f64::from(particle_volume),
        }
    }

    pub fn reservoir(&self) -> f64 {
        self.reservoir
    }

    pub fn basin(&self) -> f64 {
        self.basin
    }

    pub fn particle_volume(&self) -> f64 {
        self.particle_volume
    }

    /// Whether the reservoir stands above `sill`
    pub fn is_above(&self, sill: f32) -> bool {
        self.reservoir > f64::from(sill)
    }

    /// Reservoir level above `sill`; negative once drained below it
    pub fn head_above(&self, sill: f32) -> f32 {
        (self.reservoir - f64::from(sill)) as f32
    }

    pub fn debit_reservoir(&mut self) {
        self.reservoir -= self.particle_volume;
    }

    pub fn credit_basin(&mut self) {
        self.basin += self.particle_volume;
    }

    /// Liquid in both vessels plus `in_flight` particles
    pub fn total(&self, in_flight: usize) -> f64 {
        self.reservoir + self.basin + in_flight as f64 * self.particle_volume
    }
}
