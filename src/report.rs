// Reporter: exactly one stdout line per run
// text: seq, result = 268435456, duration = 1234us
// csv:  transform_reduce,rust,strategy=seq,N=536870912,T=8,result,268435456,duration,1234,us
// json: {"strategy":"seq","len":536870912,"threads":8,"result":268435456.0,"duration_us":1234}

use clap::ValueEnum;
use serde::Serialize;

use crate::strategies::Strategy;
use crate::timing::Measurement;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub strategy: Strategy,
    pub len: usize,
    pub threads: usize,
    pub result: f64,
    pub duration_us: u64,
}

impl From<&Measurement> for RunReport {
    fn from(m: &Measurement) -> Self {
        Self {
            strategy: m.strategy,
            len: m.len,
            threads: m.threads,
            result: m.result,
            duration_us: u64::try_from(m.duration_us()).unwrap_or(u64::MAX),
        }
    }
}

pub fn render(m: &Measurement, format: OutputFormat) -> serde_json::Result<String> {
    let line = match format {
        OutputFormat::Text => m.to_string(),
        OutputFormat::Csv => format!(
            "transform_reduce,rust,strategy={},N={},T={},result,{},duration,{},us",
            m.strategy,
            m.len,
            m.threads,
            m.result,
            m.duration_us()
        ),
        OutputFormat::Json => serde_json::to_string(&RunReport::from(m))?,
    };
    Ok(line)
}
