use std::time::Duration;

use feed_logging::feed_debug;

use crate::Article;

/// Identity of the live autoplay timer. The runtime tags every tick with the
/// generation it was started for; ticks from a retired generation are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayHandle {
    pub generation: u64,
    pub interval: Duration,
}

/// Cyclic index over a fixed list of breaking-news slides.
///
/// An empty slide list is the disabled state: navigation is a no-op and
/// autoplay never starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Carousel {
    slides: Vec<Article>,
    index: usize,
    autoplay: Option<AutoplayHandle>,
    last_generation: u64,
}

impl Carousel {
    pub fn new(slides: Vec<Article>) -> Self {
        Self {
            slides,
            ..Self::default()
        }
    }

    /// Swaps in a new slide list, rewinding to the first slide. Autoplay is
    /// retired; generations keep counting so old ticks stay stale.
    pub fn replace_slides(&mut self, slides: Vec<Article>) -> Option<AutoplayHandle> {
        self.slides = slides;
        self.index = 0;
        self.stop_autoplay()
    }

    pub fn slides(&self) -> &[Article] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Article> {
        self.slides.get(self.index)
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.slides.len()
    }

    /// Jumps to slide `index`. Callers derive `index` from a slide or
    /// indicator position; an out-of-range index is left unapplied.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) {
        if let Some(last) = self.slides.len().checked_sub(1) {
            self.index = if self.index >= last { 0 } else { self.index + 1 };
        }
    }

    pub fn prev(&mut self) {
        if let Some(last) = self.slides.len().checked_sub(1) {
            self.index = if self.index == 0 { last } else { self.index - 1 };
        }
    }

    /// Retires any running timer and issues a new one.
    /// Returns the retired handle first, then the new one.
    pub fn start_autoplay(
        &mut self,
        interval: Duration,
    ) -> (Option<AutoplayHandle>, Option<AutoplayHandle>) {
        let retired = self.stop_autoplay();
        if self.slides.is_empty() {
            return (retired, None);
        }
        self.last_generation += 1;
        let handle = AutoplayHandle {
            generation: self.last_generation,
            interval,
        };
        feed_debug!("Autoplay started, generation {}", handle.generation);
        self.autoplay = Some(handle);
        (retired, Some(handle))
    }

    /// Returns the retired handle, or `None` if autoplay was not running.
    pub fn stop_autoplay(&mut self) -> Option<AutoplayHandle> {
        self.autoplay.take()
    }

    pub fn autoplay(&self) -> Option<AutoplayHandle> {
        self.autoplay
    }

    pub fn is_autoplay_active(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Advances on a timer tick if `generation` is the live timer.
    pub fn autoplay_tick(&mut self, generation: u64) -> bool {
        match self.autoplay {
            Some(handle) if handle.generation == generation => {
                self.next();
                true
            }
            _ => false,
        }
    }
}
