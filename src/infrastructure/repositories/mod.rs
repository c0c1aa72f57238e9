pub mod audio_source_repository;
pub mod http_audio_source_repository;

pub use audio_source_repository::{AudioSourceError, AudioSourceRepository, FetchedAudio};
pub use http_audio_source_repository::HttpAudioSourceRepository;
