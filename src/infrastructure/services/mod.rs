pub mod bundled_translation_source;
pub mod document_attributes;
pub mod file_system_translation_source;
