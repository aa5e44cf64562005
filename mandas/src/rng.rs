use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// Round randomness comes from one PCG stream per session. Every draw is recorded so a
// finished round can be audited or replayed from its seed.

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum DrawKind {
    Category,
    Secret,
    Impostor,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct RandomDraw {
    pub round: u32,
    pub kind: DrawKind,
    pub bound: usize,
    pub result: usize,
}

#[derive(Clone, Debug)]
pub struct RoundRng {
    seed: u64,
    rng: Pcg64Mcg,
    history: Vec<RandomDraw>,
}

impl RoundRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: pcg_from_seed(seed),
            history: Vec::new(),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen::<u64>())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn history(&self) -> &[RandomDraw] {
        &self.history
    }

    /// Uniform index in `[0, bound)`. A zero bound yields 0 and records nothing.
    pub fn pick(&mut self, bound: usize, round: u32, kind: DrawKind) -> usize {
        if bound == 0 {
            return 0;
        }
        let result = self.rng.gen_range(0..bound);
        self.history.push(RandomDraw {
            round,
            kind,
            bound,
            result,
        });
        result
    }
}

pub fn pcg_from_seed(seed: u64) -> Pcg64Mcg {
    // Expand the u64 into 16 bytes to seed the PCG generator deterministically.
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    let digest = hasher.finalize();
    let mut seed_bytes = [0u8; 16];
    seed_bytes.copy_from_slice(&digest[..16]);
    Pcg64Mcg::from_seed(seed_bytes)
}
