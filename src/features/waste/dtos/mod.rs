mod classification_dto;
mod disposal_dto;

pub use classification_dto::{
    ClassificationRecordDto, ClassificationResultDto, ClassifyImageDto, ClassifyTextDto,
};
pub use disposal_dto::DisposalRuleResponseDto;
