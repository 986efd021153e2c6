pub mod groq_service;
pub mod post_processing_service;
pub mod prompt_service;
pub mod trip_config;
