pub mod conversion;

pub use conversion::{ConversionService, ConvertRecipeRequest, UnitSystem};
