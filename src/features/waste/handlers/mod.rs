pub mod classification_handler;
pub mod disposal_handler;

pub use classification_handler::{
    __path_classify_image, __path_classify_text, __path_get_history, classify_image,
    classify_text, get_history,
};
pub use disposal_handler::{
    __path_get_disposal_rule, __path_list_disposal_rules, get_disposal_rule, list_disposal_rules,
};
