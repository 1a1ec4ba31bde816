// One-shot click sound playback using kira

use crate::engine::assets::{AssetError, AssetLoader, AssetType};
use kira::sound::static_sound::StaticSoundData;
use kira::{AudioManager, AudioManagerSettings, DefaultBackend};

/// Decode a sound file into memory
pub fn decode_sound(loader: &AssetLoader, name: &str) -> Result<StaticSoundData, AssetError> {
    let path = loader.locate(AssetType::Sound, name)?;
    StaticSoundData::from_file(&path).map_err(|e| AssetError::Sound {
        path: path.to_string_lossy().to_string(),
        message: e.to_string(),
    })
}

/// The pet's click sound.
///
/// The sound data is decoded up front. If no audio device can be opened the
/// pet stays silent instead of failing.
pub struct ClickSound {
    manager: Option<AudioManager<DefaultBackend>>,
    data: StaticSoundData,
}

impl ClickSound {
    /// Decode the sound and open the default output device
    pub fn load(loader: &AssetLoader, name: &str) -> Result<Self, AssetError> {
        let data = decode_sound(loader, name)?;

        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => Some(manager),
            Err(e) => {
                log::warn!("No audio output available, clicks will be silent: {}", e);
                None
            }
        };

        Ok(Self { manager, data })
    }

    /// Fire the sound. Overlapping plays are allowed.
    pub fn play(&mut self) {
        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        if let Err(e) = manager.play(self.data.clone()) {
            log::warn!("Failed to play click sound: {:?}", e);
        }
    }

    /// Whether an output device is open
    pub fn is_audible(&self) -> bool {
        self.manager.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "desktop-pet-audio-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write a mono 16-bit PCM WAV of silence
    fn write_wav(path: &Path, sample_rate: u32, samples: u32) {
        let data_len = samples * 2;
        let mut bytes = Vec::with_capacity(44 + data_len as usize);
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
        bytes.extend_from_slice(&sample_rate.to_le_bytes());
        bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        bytes.resize(44 + data_len as usize, 0);
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_decode_wav() {
        let dir = scratch_dir("wav");
        write_wav(&dir.join("click.wav"), 8000, 800);

        let loader = AssetLoader::new(&dir);
        let data = decode_sound(&loader, "click.wav").unwrap();
        assert!(!data.frames.is_empty());
    }

    #[test]
    fn test_missing_sound_is_fatal() {
        let loader = AssetLoader::new(scratch_dir("missing"));
        let result = ClickSound::load(&loader, "click.wav");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_corrupt_sound_is_fatal() {
        let dir = scratch_dir("corrupt");
        std::fs::write(dir.join("click.wav"), b"RIFF nonsense").unwrap();

        let loader = AssetLoader::new(&dir);
        let result = decode_sound(&loader, "click.wav");
        assert!(matches!(result, Err(AssetError::Sound { .. })));
    }
}
