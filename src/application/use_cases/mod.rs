pub mod class_filter;
pub mod dataset_prep;
pub mod selector;
pub mod splitter;
pub mod text_cleaner;
