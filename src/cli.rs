// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use ndarray::{Array1, ArrayView1};
use structopt::StructOpt;

use crate::conversion::phred;
use crate::errors;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "phredator",
    about = "Convert between error probabilities and PHRED scaled quality scores."
)]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
pub enum Phredator {
    #[structopt(
        name = "encode-phred",
        about = "Encode error probabilities as truncated PHRED scaled quality scores."
    )]
    #[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
    EncodePhred {
        #[structopt(
            parse(from_os_str),
            long,
            help = "TSV file with one error probability per line (if omitted, read from STDIN)."
        )]
        input: Option<PathBuf>,
        #[structopt(
            parse(from_os_str),
            long,
            help = "File that shall contain the resulting quality scores (if omitted, write to STDOUT)."
        )]
        output: Option<PathBuf>,
    },
    #[structopt(
        name = "decode-phred",
        about = "Decode PHRED scaled values to human readable probabilities."
    )]
    #[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
    DecodePhred {
        #[structopt(
            parse(from_os_str),
            long,
            help = "TSV file with one PHRED scaled score per line (if omitted, read from STDIN)."
        )]
        input: Option<PathBuf>,
        #[structopt(
            parse(from_os_str),
            long,
            help = "File that shall contain the resulting probabilities (if omitted, write to STDOUT)."
        )]
        output: Option<PathBuf>,
    },
}

pub fn run(opt: Phredator) -> Result<()> {
    match opt {
        Phredator::EncodePhred {
            ref input,
            ref output,
        } => {
            let probs = read_values(input.as_ref())?;
            let scores = phred::error_probs_to_phred(probs.view())?;
            info!("encoded {} error probabilities", probs.len());
            write_values(output.as_ref(), scores.view())
        }
        Phredator::DecodePhred {
            ref input,
            ref output,
        } => {
            let scores = read_values(input.as_ref())?;
            let probs = phred::phred_to_error_probs(scores.view())?;
            info!("decoded {} PHRED scaled scores", scores.len());
            write_values(output.as_ref(), probs.view())
        }
    }
}

/// Read one numeric value per record from the given TSV file (STDIN if `None`).
/// Additional columns beyond the first are ignored.
fn read_values(path: Option<&PathBuf>) -> Result<Array1<f64>> {
    let reader: Box<dyn io::Read> = match path {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut values = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let value = record
            .get(0)
            .and_then(|field| field.trim().parse::<f64>().ok())
            .ok_or(errors::Error::InvalidRecord { line: i + 1 })?;
        values.push(value);
    }

    Ok(Array1::from_vec(values))
}

/// Write one value per line to the given file (STDOUT if `None`).
fn write_values(path: Option<&PathBuf>, values: ArrayView1<f64>) -> Result<()> {
    let mut writer: Box<dyn Write> = match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    for value in values {
        writeln!(writer, "{}", value)?;
    }

    Ok(())
}
