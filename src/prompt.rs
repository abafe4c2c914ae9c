//! Interactive collection of record fields from a human.
//!
//! Fields are asked for in file order: year, unit type, extraction type,
//! region name, olive quantity, press count, oil volume. Numeric answers
//! that do not parse are asked again, and so are blank text answers.
//!
//! Values already known (from command-line flags, say) go in through
//! [`PartialKey`] and [`PartialMeasurements`]; only the gaps are asked for.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{Result, StoreError};
use crate::production::{CompositeKey, Measurements, ProductionFields};

const YEAR: &str = "Year: ";
const UNIT_TYPE: &str = "Oil press unit type: ";
const EXTRACTION_TYPE: &str = "Extraction method: ";
const REGION_NAME: &str = "Region name: ";
const OLIVE_QUANT_TON: &str = "Olive quantity used (ton): ";
const OIL_PRESS_NUM: &str = "Number of oil presses: ";
const OIL_PROD_HL: &str = "Olive oil produced (hl): ";

/// Lookup attributes, any of which may still be unknown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialKey {
    pub year: Option<i32>,
    pub unit_type: Option<String>,
    pub extraction_type: Option<String>,
    pub region_name: Option<String>,
}

/// Measurements, any of which may still be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialMeasurements {
    pub olive_quant_ton: Option<f64>,
    pub oil_press_num: Option<u32>,
    pub oil_prod_hl: Option<f64>,
}

/// Reads answers from `input` and writes questions to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Every field needed to create a record.
    pub fn fields(&mut self) -> Result<ProductionFields> {
        self.fields_with(PartialKey::default(), PartialMeasurements::default())
    }

    /// Every field needed to create a record, asking only for the gaps.
    pub fn fields_with(
        &mut self,
        key: PartialKey,
        measurements: PartialMeasurements,
    ) -> Result<ProductionFields> {
        let key = self.key_with(key)?;
        let measurements = self.measurements_with(measurements)?;
        Ok(ProductionFields::from_parts(key, measurements))
    }

    /// The four lookup attributes.
    pub fn key(&mut self) -> Result<CompositeKey> {
        self.key_with(PartialKey::default())
    }

    pub fn key_with(&mut self, known: PartialKey) -> Result<CompositeKey> {
        let year = self.parsed_or(known.year, YEAR)?;
        let unit_type = self.text_or(known.unit_type, UNIT_TYPE)?;
        let extraction_type = self.text_or(known.extraction_type, EXTRACTION_TYPE)?;
        let region_name = self.text_or(known.region_name, REGION_NAME)?;
        Ok(CompositeKey::new(year, unit_type, extraction_type, region_name))
    }

    /// The three numeric fields an update overwrites.
    pub fn measurements(&mut self) -> Result<Measurements> {
        self.measurements_with(PartialMeasurements::default())
    }

    pub fn measurements_with(&mut self, known: PartialMeasurements) -> Result<Measurements> {
        let olive_quant_ton = self.parsed_or(known.olive_quant_ton, OLIVE_QUANT_TON)?;
        let oil_press_num = self.parsed_or(known.oil_press_num, OIL_PRESS_NUM)?;
        let oil_prod_hl = self.parsed_or(known.oil_prod_hl, OIL_PROD_HL)?;
        Ok(Measurements::new(olive_quant_ton, oil_press_num, oil_prod_hl))
    }

    fn text_or(&mut self, known: Option<String>, question: &str) -> Result<String> {
        match known {
            Some(value) => Ok(value),
            None => self.text(question),
        }
    }

    fn parsed_or<T>(&mut self, known: Option<T>, question: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match known {
            Some(value) => Ok(value),
            None => self.parsed(question),
        }
    }

    /// Ask `question` until a non-empty answer arrives.
    pub fn text(&mut self, question: &str) -> Result<String> {
        loop {
            let answer = self.ask(question)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            writeln!(self.output, "A value is required.")?;
        }
    }

    /// Ask `question` until the answer parses as `T`.
    pub fn parsed<T>(&mut self, question: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        loop {
            let answer = self.ask(question)?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "Invalid value {:?}: {}", answer, e)?,
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(StoreError::Prompt(format!(
                "input closed while asking {:?}",
                question.trim_end_matches([':', ' '])
            )));
        }
        Ok(line.trim().to_string())
    }
}
