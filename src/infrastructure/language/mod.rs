mod classifier_factory;
mod fixed_classifier;
mod lingua_classifier;

pub use classifier_factory::{ClassifierFactory, ClassifierFactoryError};
pub use fixed_classifier::FixedClassifier;
pub use lingua_classifier::LinguaClassifier;
