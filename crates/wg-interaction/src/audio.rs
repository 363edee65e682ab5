use wg_core::AudioClip;

/// Plays narration and sound effects.
pub trait AudioPlayer {
    /// Start playing `clip`, replacing whatever is playing. Returns its length in seconds.
    fn play(&mut self, clip: &AudioClip) -> f32;

    /// Stop playback.
    fn stop(&mut self);
}

/// An audio backend without output. Reports each clip's authored length and
/// remembers what was played.
#[derive(Debug, Clone, Default)]
pub struct HeadlessAudio {
    played: Vec<String>,
    playing: Option<String>,
}

impl HeadlessAudio {
    /// Create a silent backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of every clip started, in order.
    pub fn played(&self) -> &[String] {
        &self.played
    }

    /// Name of the clip currently playing.
    pub fn playing(&self) -> Option<&str> {
        self.playing.as_deref()
    }
}

impl AudioPlayer for HeadlessAudio {
    fn play(&mut self, clip: &AudioClip) -> f32 {
        self.played.push(clip.name.clone());
        self.playing = Some(clip.name.clone());
        clip.duration
    }

    fn stop(&mut self) {
        self.playing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_reports_clip_length() {
        let mut audio = HeadlessAudio::new();
        let length = audio.play(&AudioClip::new("intro", 4.0));
        assert!((length - 4.0).abs() < f32::EPSILON);
        assert_eq!(audio.playing(), Some("intro"));
        audio.stop();
        assert_eq!(audio.playing(), None);
        assert_eq!(audio.played(), ["intro".to_string()]);
    }
}
