mod geometry_normalizer_test;
mod translation_service_test;
