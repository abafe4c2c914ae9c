use crate::error::{Result, StoreError};

/// The numeric fields an update overwrites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub olive_quant_ton: f64,
    pub oil_press_num: u32,
    pub oil_prod_hl: f64,
}

impl Measurements {
    pub fn new(olive_quant_ton: f64, oil_press_num: u32, oil_prod_hl: f64) -> Self {
        Self {
            olive_quant_ton,
            oil_press_num,
            oil_prod_hl,
        }
    }

    /// Quantities must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        check_quantity("olive_quant_ton", self.olive_quant_ton)?;
        check_quantity("oil_prod_hl", self.oil_prod_hl)
    }
}

fn check_quantity(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(StoreError::invalid(field, format!("{} is not a number", value)));
    }
    if value < 0.0 {
        return Err(StoreError::invalid(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}
