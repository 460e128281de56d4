//! A single visualisation session: one algorithm, one generated input, one
//! materialised sequence and the playback cursor over it.

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    array::generate_with, config::AppConfig, frame::Frame, playback::Playback, Algorithm, Result,
};

#[derive(Debug)]
pub struct Session {
    algorithm: Algorithm,
    config: AppConfig,
    rng: SmallRng,
    input: Vec<i32>,
    playback: Playback,
}

impl Session {
    /// Validates `config`, generates an input array and materialises its frames.
    /// A `seed` makes every generated array reproducible.
    pub fn new(algorithm: Algorithm, config: AppConfig, seed: Option<u64>) -> Result<Self> {
        config.validate()?;
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut session = Self {
            algorithm,
            playback: Playback::with_speed(Vec::<Frame>::new(), config.playback.speed)?,
            config,
            rng,
            input: Vec::new(),
        };
        session.randomize()?;
        Ok(session)
    }

    /// Builds a session over a caller supplied array instead of a random one.
    pub fn with_input(algorithm: Algorithm, config: AppConfig, input: Vec<i32>) -> Result<Self> {
        config.playback.validate()?;
        let mut session = Self {
            algorithm,
            playback: Playback::with_speed(Vec::<Frame>::new(), config.playback.speed)?,
            config,
            rng: SmallRng::from_os_rng(),
            input,
        };
        session.config.array.size = session.input.len();
        session.rebuild();
        Ok(session)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The generated array, exactly as handed to the engine.
    pub fn input(&self) -> &[i32] {
        &self.input
    }

    pub fn frames(&self) -> &[Frame] {
        self.playback.frames()
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    pub fn resize(&mut self, size: usize) -> Result<()> {
        self.config.array.check_size(size)?;
        self.config.array.size = size;
        self.randomize()
    }

    /// Draws a fresh input and rebuilds the sequence.
    pub fn randomize(&mut self) -> Result<()> {
        let range = self.config.array.value_range()?;
        self.input = generate_with(&mut self.rng, self.config.array.size, range);
        self.rebuild();
        Ok(())
    }

    /// Switches algorithm, keeping the current input.
    pub fn select(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.rebuild();
    }

    pub fn set_speed(&mut self, speed: u32) -> Result<()> {
        self.playback.set_speed(speed)?;
        self.config.playback.speed = speed;
        Ok(())
    }

    fn rebuild(&mut self) {
        let frames = self.algorithm.run(&self.input);
        tracing::debug!(
            algorithm = self.algorithm.slug(),
            size = self.input.len(),
            frames = frames.len(),
            "session regenerated"
        );
        self.playback.load(frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SortVizError;

    #[test]
    fn generates_input_of_configured_size() {
        let session = Session::new(Algorithm::ShellSort, AppConfig::default(), Some(3)).unwrap();

        assert_eq!(session.input().len(), 20);
        assert_eq!(session.frames()[0].array, session.input());
        assert!(session.frames().last().unwrap().completed);
    }

    #[test]
    fn seeded_sessions_agree() {
        let a = Session::new(Algorithm::CombSort, AppConfig::default(), Some(11)).unwrap();
        let b = Session::new(Algorithm::CombSort, AppConfig::default(), Some(11)).unwrap();

        assert_eq!(a.input(), b.input());
        assert_eq!(a.frames(), b.frames());
    }

    #[test]
    fn resize_regenerates_and_restarts_playback() {
        let mut session = Session::new(Algorithm::BubbleSort, AppConfig::default(), Some(5)).unwrap();
        session.playback_mut().seek(4);
        session.resize(30).unwrap();

        assert_eq!(session.input().len(), 30);
        assert_eq!(session.playback().position(), 0);
        assert!(matches!(
            session.resize(5).unwrap_err(),
            SortVizError::InvalidSize { size: 5, .. }
        ));
    }

    #[test]
    fn select_keeps_the_same_input() {
        let mut session = Session::new(Algorithm::BubbleSort, AppConfig::default(), Some(9)).unwrap();
        let input = session.input().to_vec();
        session.select(Algorithm::HeapSort);

        assert_eq!(session.algorithm(), Algorithm::HeapSort);
        assert_eq!(session.input(), input.as_slice());
        assert_eq!(session.frames()[0].array, input);
    }

    #[test]
    fn explicit_input_is_used_verbatim() {
        let session =
            Session::with_input(Algorithm::SelectionSort, AppConfig::default(), vec![2, 1]).unwrap();
        let last = session.frames().last().unwrap();

        assert_eq!(session.input(), &[2, 1]);
        assert_eq!(last.array, vec![1, 2]);
    }
}
