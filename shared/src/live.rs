use crate::Particle;

/// The live particles of a running effect.
///
/// Order is not meaningful: expired particles are swap-removed so that a sweep never shifts
/// the survivors.
#[derive(Debug, Default, Clone)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn new() -> ParticleSet {
        ParticleSet::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    /// Removes every particle whose alpha has run out and returns how many were dropped.
    pub fn sweep(&mut self) -> usize {
        let before = self.particles.len();
        let mut index = before;

        // Walking tail to head, the element swapped into `index` has already been checked.
        while index > 0 {
            index -= 1;

            if !self.particles[index].is_alive() {
                self.particles.swap_remove(index);
            }
        }

        before - self.particles.len()
    }
}

impl Extend<Particle> for ParticleSet {
    fn extend<T: IntoIterator<Item = Particle>>(&mut self, iter: T) {
        self.particles.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
