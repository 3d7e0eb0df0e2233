use slot_machine_core::{PresentationPort, Sound};
use std::io::Write;

const BELL: &str = "\x07";

/// Stands in for audio and haptics in a terminal: sound cues become short captions, a haptic pulse rings the bell.
pub(crate) struct TerminalPresenter<W> {
    out: W,
    bell: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub(crate) fn new(out: W, bell: bool) -> Self {
        Self { out, bell }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            log::trace!("dropped presentation cue: {}", err);
        }
    }
}

const fn caption(sound: Sound) -> Option<&'static str> {
    use Sound::*;
    match sound {
        Win => Some("*ding ding* You win!"),
        HighScore => Some("*fanfare* New high score!"),
        Chips => Some("*clack*"),
        GameOver => Some("*womp womp*"),
        Reset => Some("*chime* Machine reset."),
        Spin | ReelRise | BackgroundMusic => None,
    }
}

impl<W: Write> PresentationPort for TerminalPresenter<W> {
    fn play(&mut self, sound: Sound) {
        log::trace!("sound: {}", sound.name());
        if let Some(caption) = caption(sound) {
            self.emit(&format!("{}\n", caption));
        }
    }

    fn pulse(&mut self) {
        if self.bell {
            self.emit(BELL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_and_bell() {
        let mut presenter = TerminalPresenter::new(Vec::new(), true);

        presenter.play(Sound::Spin);
        presenter.pulse();
        presenter.play(Sound::HighScore);

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(out, "\x07*fanfare* New high score!\n");
    }

    #[test]
    fn bell_can_be_silenced() {
        let mut presenter = TerminalPresenter::new(Vec::new(), false);

        presenter.pulse();

        assert!(presenter.into_inner().is_empty());
    }
}
