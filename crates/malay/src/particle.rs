use crate::affix::sort_affixes;
use crate::constants::SORTED_PARTICLE_LIBRARY;
use crate::error::Error;

/// Known particles, longest first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticleSet {
    particles: Vec<String>,
}

impl ParticleSet {
    pub fn new(particles: Vec<String>) -> Result<Self, Error> {
        if particles.iter().any(|particle| particle.is_empty()) {
            return Err(Error::EmptyParticle);
        }

        Ok(ParticleSet { particles: sort_affixes(particles) })
    }

    /// `PARTICLE_LIBRARY`
    pub fn builtin() -> Self {
        ParticleSet { particles: SORTED_PARTICLE_LIBRARY.clone() }
    }

    pub fn extend(&self, extra: &[String]) -> Result<Self, Error> {
        ParticleSet::new(
            self.particles.iter().chain(extra.iter()).cloned().collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.particles.iter().map(|particle| particle.as_str())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// `katakan` -> `["kata", "kan"]`\
    /// `kan` -> `["kan"]`
    ///
    /// A token that is exactly a particle is not split.
    pub fn split_particle<'t>(&self, token: &'t str) -> Vec<&'t str> {
        for particle in self.iter() {
            if token.len() > particle.len() && token.ends_with(particle) {
                let (stem, particle) = token.split_at(token.len() - particle.len());
                return vec![stem, particle];
            }
        }

        vec![token]
    }
}

impl Default for ParticleSet {
    fn default() -> Self {
        ParticleSet::builtin()
    }
}
