use layout_translate::infrastructure::language::{ClassifierFactory, ClassifierFactoryError};
use layout_translate::presentation::config::{LanguageProvider, LanguageSettings};

#[test]
fn given_fixed_language_provider_without_code_when_creating_then_error() {
    let settings = LanguageSettings {
        provider: LanguageProvider::Fixed,
        ..LanguageSettings::default()
    };

    assert!(matches!(
        ClassifierFactory::create(&settings),
        Err(ClassifierFactoryError::MissingFixedCode)
    ));
}
