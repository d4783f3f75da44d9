pub mod use_cases;

pub use use_cases::dataset_prep::DatasetPrepUseCase;
