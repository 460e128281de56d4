use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    frame::{Frame, Stats},
    session::Session,
    Algorithm, Result,
};

/// A complete run captured for offline inspection: the algorithm, its input and
/// every frame it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub algorithm: Algorithm,
    pub input: Vec<i32>,
    pub frames: Vec<Frame>,
}

impl RunRecord {
    pub fn capture(algorithm: Algorithm, input: &[i32]) -> Self {
        Self {
            algorithm,
            input: input.to_vec(),
            frames: algorithm.run(input),
        }
    }

    pub fn from_session(session: &Session) -> Self {
        Self {
            algorithm: session.algorithm(),
            input: session.input().to_vec(),
            frames: session.frames().to_vec(),
        }
    }

    pub fn final_stats(&self) -> Stats {
        self.frames
            .last()
            .map(|frame| frame.stats)
            .unwrap_or_default()
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_json(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
