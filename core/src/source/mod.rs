use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Supplies the symbol for one reel at a time.
pub trait ReelSource {
    fn draw(&mut self) -> Symbol;

    fn draw_reels(&mut self) -> Reels {
        Reels::new([self.draw(), self.draw(), self.draw()])
    }
}

impl<S: ReelSource + ?Sized> ReelSource for &mut S {
    fn draw(&mut self) -> Symbol {
        (**self).draw()
    }
}
