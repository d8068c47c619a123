use crate::particles::Particle;

/// Fixed-capacity particle storage
///
/// The slot count is chosen at construction and never changes; slots are
/// recycled in place rather than allocated per particle.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    slots: Box<[Particle]>,
}

impl ParticlePool {
    /// Create a pool of `capacity` inactive slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Particle::INACTIVE; capacity].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently in play
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    pub fn slots(&self) -> &[Particle] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Particle] {
        &mut self.slots
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.active)
    }
}
