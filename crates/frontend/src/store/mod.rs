pub mod quantify;

pub use quantify::{
    ConvertedIngredient, QuantifyAction, QuantifyContext, QuantifyProvider, QuantifyState,
    QuantifyStore, use_quantify,
};
