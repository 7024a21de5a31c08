use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

use crate::plot::SigmaTauPlot;

pub enum PlotFormat {
    Csv,
    Tsv,
    Json,
}

impl SigmaTauPlot {
    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: PlotFormat) -> Result<(), Error> {
        let w = BufWriter::new(File::create(path)?);
        self.write_to(w, fmt)
    }

    pub fn write_to<W: Write>(&self, w: W, fmt: PlotFormat) -> Result<(), Error> {
        match fmt {
            PlotFormat::Csv => self.write_with_delimiter(w, ','),
            PlotFormat::Tsv => self.write_with_delimiter(w, '\t'),
            PlotFormat::Json => self.write_json(w),
        }
    }

    fn write_with_delimiter<W: Write>(&self, mut w: W, delimiter: char) -> Result<(), Error> {
        writeln!(w, "series{d}tau{d}value", d = delimiter)?;
        for s in &self.series {
            for (tau, value) in &s.points {
                writeln!(w, "{}{d}{}{d}{}", s.label, tau, value, d = delimiter)?;
            }
        }
        w.flush()
    }

    fn write_json<W: Write>(&self, mut w: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut w, self)?;
        writeln!(w)?;
        w.flush()
    }
}
