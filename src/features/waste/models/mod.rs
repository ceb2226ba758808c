mod classification;
mod disposal_rule;
mod waste_category;

pub use classification::{
    ClassificationRecord, ClassificationResult, InputType, NewClassificationRecord,
};
pub use disposal_rule::DisposalRule;
pub use waste_category::{UnknownCategory, WasteCategory};
