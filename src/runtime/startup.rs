use tracing::warn;

use crate::audio::AudioOutput;
use crate::config::PlaybackSettings;
use crate::playback::PlaybackController;

/// Load the configured start track so the scrubber shows a real duration
/// from the first frame, and start playing if asked to.
///
/// A failed load is not fatal: the controller has already published it and
/// the UI shows it as a notification.
pub fn load_initial_track<O: AudioOutput>(
    controller: &mut PlaybackController<O>,
    settings: &PlaybackSettings,
) {
    let len = controller.playlist().len();
    let index = if settings.start_index < len {
        settings.start_index
    } else {
        warn!(
            start_index = settings.start_index,
            len, "start index out of range, using the first track"
        );
        0
    };

    if controller.load(index).is_ok() && settings.autoplay {
        controller.play();
    }
}
