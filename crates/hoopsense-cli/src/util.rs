use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use hoopsense_analysis::{builder::HistoryBuilder, frame::FrameCollection};
use hoopsense_engine::{CourtDimensions, GameHistory};

/// Destination of a JSON report.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Writes `report` to `path`, or to stdout when no path is given.
    pub fn save_json<T>(report: &T, path: Option<&Path>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match path {
            Some(path) => Output::create(path)?,
            None => Output::Stdout(io::stdout().lock()),
        };
        output.write_json(report)?;
        if let Output::File { path, .. } = &output {
            log::info!("Report saved to {}", path.display());
        }
        Ok(())
    }

    fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
        })
    }

    fn target(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, report: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let result = match self {
            Output::Stdout(writer) => write_pretty(writer, report),
            Output::File { writer, .. } => write_pretty(writer, report),
        };
        result.with_context(|| format!("Failed to write JSON report to {}", self.target()))
    }
}

fn write_pretty<W, T>(mut writer: W, value: &T) -> anyhow::Result<()>
where
    W: Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Tracking file layout, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramesFormat {
    Json,
    Csv,
}

impl FramesFormat {
    /// `.csv` (any case) is CSV; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => FramesFormat::Csv,
            _ => FramesFormat::Json,
        }
    }
}

pub fn read_csv_file(path: &Path) -> anyhow::Result<FrameCollection> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open frames file: {}", path.display()))?;
    let collection = FrameCollection::from_csv_reader(io::BufReader::new(file))
        .with_context(|| format!("Failed to parse frames CSV file: {}", path.display()))?;
    Ok(collection)
}

/// Read tracking frames from a JSON or CSV file
pub fn read_frames_file<P>(path: P) -> anyhow::Result<FrameCollection>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match FramesFormat::from_path(path) {
        FramesFormat::Json => read_json_file("frames", path),
        FramesFormat::Csv => read_csv_file(path),
    }
}

/// Read tracking frames and validate them into a session history
pub fn load_history<P>(path: P, court: CourtDimensions) -> anyhow::Result<GameHistory>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let collection = read_frames_file(path)?;
    log::info!(
        "Loaded {} frame(s) from {}",
        collection.frames.len(),
        path.display()
    );
    let history = HistoryBuilder::new(court)
        .build(&collection)
        .with_context(|| format!("Invalid frames in {}", path.display()))?;
    Ok(history)
}
