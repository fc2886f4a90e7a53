//! Best-effort text-to-speech for assistant replies.
//!
//! Browsers without `speechSynthesis` (and SSR) silently skip.

/// Speak `text` with the default voice, interrupting anything queued.
pub fn speak(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(synth) = web_sys::window().and_then(|w| w.speech_synthesis().ok()) else {
            log::debug!("speech synthesis unavailable");
            return;
        };
        match web_sys::SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                synth.cancel();
                synth.speak(&utterance);
            }
            Err(e) => log::warn!("speech synthesis failed: {e:?}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
    }
}

/// Stop any speech in progress.
pub fn cancel() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(synth) = web_sys::window().and_then(|w| w.speech_synthesis().ok()) {
            synth.cancel();
        }
    }
}
